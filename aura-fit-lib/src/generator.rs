//src/generator.rs
use async_trait::async_trait;
use chrono::Utc;
use serde::Deserialize;
use serde_json::error::Category;
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::model::{Exercise, Workout};
use crate::prompt::{build_prompt, workout_response_schema};

#[derive(Error, Debug)]
pub enum Error {
    #[error("API key not configured. Set GEMINI_API_KEY or [gemini].api_key in the config file.")]
    MissingApiKey,
    #[error("HTTP request failed: {0}")]
    Transport(String),
    #[error("Gemini API error ({status}): {message}")]
    Api { status: u16, message: String },
    #[error("No content in model response")]
    EmptyResponse,
    #[error("Model returned malformed JSON: {0}")]
    MalformedJson(String),
    #[error("Model response does not match the workout schema: {0}")]
    Schema(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        match e.classify() {
            Category::Data => Error::Schema(e.to_string()),
            Category::Io | Category::Syntax | Category::Eof => Error::MalformedJson(e.to_string()),
        }
    }
}

impl Error {
    /// Text shown to the user when a generation attempt fails.
    pub fn user_message(&self) -> String {
        match self {
            Error::MissingApiKey => {
                "Chave da API não configurada. Defina GEMINI_API_KEY e tente novamente.".to_string()
            }
            Error::Api { status: 429, .. } => {
                "Limite de uso da IA atingido. Aguarde um momento e tente novamente.".to_string()
            }
            Error::Transport(_) => {
                "Não foi possível contatar o serviço de IA. Verifique sua conexão.".to_string()
            }
            Error::Api { .. }
            | Error::EmptyResponse
            | Error::MalformedJson(_)
            | Error::Schema(_) => {
                "Ocorreu um erro ao gerar o treino. Tente novamente.".to_string()
            }
        }
    }
}

/// Goal text that is known to be non-blank. Constructing one is the only
/// validation a generation request needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Goal(String);

impl Goal {
    pub fn new(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Text/JSON completion backend. Returns the raw JSON text the model
/// produced for `prompt` under the given response schema.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete_json(&self, prompt: &str, schema: &Value) -> Result<String, Error>;
}

// Wire shape of the model output, before validation
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct GeneratedWorkout {
    title: String,
    description: Option<String>,
    exercises: Vec<GeneratedExercise>,
    duration_minutes: Option<f64>,
}

#[derive(Deserialize, Debug)]
struct GeneratedExercise {
    name: String,
    sets: f64,
    reps: String,
    note: Option<String>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

impl GeneratedExercise {
    fn into_exercise(self, index: usize) -> Result<Exercise, Error> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(Error::Schema(format!("exercise {} has an empty name", index + 1)));
        }
        if !self.sets.is_finite()
            || self.sets < 1.0
            || self.sets.fract() != 0.0
            || self.sets > f64::from(u32::MAX)
        {
            return Err(Error::Schema(format!(
                "exercise '{}' has invalid sets: {}",
                name, self.sets
            )));
        }
        let reps = self.reps.trim();
        if reps.is_empty() {
            return Err(Error::Schema(format!("exercise '{}' has empty reps", name)));
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let sets = self.sets as u32;
        Ok(Exercise {
            name: name.to_string(),
            sets,
            reps: reps.to_string(),
            note: non_blank(self.note),
        })
    }
}

/// Parses model output into a new workout with a fresh id and the current
/// timestamp. Anything that does not fit the schema is an error, never a
/// partially filled workout.
pub fn parse_workout(text: &str) -> Result<Workout, Error> {
    let generated: GeneratedWorkout = serde_json::from_str(text)?;

    let title = generated.title.trim();
    if title.is_empty() {
        return Err(Error::Schema("title is empty".to_string()));
    }
    if generated.exercises.is_empty() {
        return Err(Error::Schema("exercises list is empty".to_string()));
    }
    let duration_minutes = match generated.duration_minutes {
        None => None,
        Some(minutes)
            if minutes.is_finite() && minutes >= 0.5 && minutes <= f64::from(u32::MAX) =>
        {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let rounded = minutes.round() as u32;
            Some(rounded)
        }
        Some(minutes) => {
            return Err(Error::Schema(format!("invalid durationMinutes: {minutes}")));
        }
    };
    let exercises = generated
        .exercises
        .into_iter()
        .enumerate()
        .map(|(i, ex)| ex.into_exercise(i))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Workout {
        id: Uuid::new_v4().to_string(),
        title: title.to_string(),
        description: non_blank(generated.description),
        exercises,
        duration_minutes,
        created_at: Utc::now(),
    })
}

/// Turns a goal into a structured workout with one completion request.
pub struct WorkoutGenerator {
    client: Arc<dyn CompletionClient>,
    language: String,
    schema: Value,
}

impl WorkoutGenerator {
    pub fn new(client: Arc<dyn CompletionClient>, language: impl Into<String>) -> Self {
        Self {
            client,
            language: language.into(),
            schema: workout_response_schema(),
        }
    }

    /// Issues exactly one completion request. No retries.
    ///
    /// # Errors
    /// Any transport, credential or response shape failure. Nothing is
    /// mutated on failure.
    #[instrument(skip_all, fields(goal = %goal.as_str()))]
    pub async fn generate(&self, goal: &Goal) -> Result<Workout, Error> {
        let prompt = build_prompt(goal, &self.language);
        let text = self.client.complete_json(&prompt, &self.schema).await?;
        match parse_workout(&text) {
            Ok(workout) => {
                info!(
                    id = %workout.id,
                    title = %workout.title,
                    exercises = workout.exercises.len(),
                    "workout generated"
                );
                Ok(workout)
            }
            Err(e) => {
                warn!(error = %e, "model output rejected");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn goal_rejects_blank_text() {
        assert!(Goal::new("").is_none());
        assert!(Goal::new(" \t\n ").is_none());
        assert_eq!(Goal::new(" pernas ").unwrap().as_str(), "pernas");
    }

    #[test]
    fn parse_accepts_minimal_workout() {
        let workout = parse_workout(
            r#"{"title":"Pernas com Halteres","exercises":[{"name":"Afundo","sets":3,"reps":"12"}]}"#,
        )
        .unwrap();
        assert_eq!(workout.title, "Pernas com Halteres");
        assert_eq!(workout.exercises, vec![Exercise::new("Afundo", 3, "12")]);
        assert_eq!(workout.description, None);
        assert_eq!(workout.duration_minutes, None);
    }

    #[test]
    fn parse_accepts_float_sets_and_rounds_duration() {
        let workout = parse_workout(
            r#"{"title":"HIIT","durationMinutes":19.6,"exercises":[{"name":"Burpee","sets":4.0,"reps":"30s","note":"  Ritmo forte "}]}"#,
        )
        .unwrap();
        assert_eq!(workout.duration_minutes, Some(20));
        assert_eq!(workout.exercises[0].sets, 4);
        assert_eq!(workout.exercises[0].note.as_deref(), Some("Ritmo forte"));
    }

    #[test]
    fn missing_required_fields_are_schema_errors() {
        let no_title = parse_workout(r#"{"exercises":[{"name":"A","sets":3,"reps":"12"}]}"#);
        assert!(matches!(no_title, Err(Error::Schema(_))));

        let no_exercises = parse_workout(r#"{"title":"X"}"#);
        assert!(matches!(no_exercises, Err(Error::Schema(_))));

        let no_reps = parse_workout(r#"{"title":"X","exercises":[{"name":"A","sets":3}]}"#);
        assert!(matches!(no_reps, Err(Error::Schema(_))));
    }

    #[test]
    fn invalid_values_are_schema_errors() {
        for text in [
            r#"{"title":"X","exercises":[]}"#,
            r#"{"title":"  ","exercises":[{"name":"A","sets":3,"reps":"12"}]}"#,
            r#"{"title":"X","exercises":[{"name":"A","sets":0,"reps":"12"}]}"#,
            r#"{"title":"X","exercises":[{"name":"A","sets":2.5,"reps":"12"}]}"#,
            r#"{"title":"X","exercises":[{"name":"A","sets":3,"reps":12}]}"#,
            r#"{"title":"X","durationMinutes":-5,"exercises":[{"name":"A","sets":3,"reps":"12"}]}"#,
        ] {
            assert!(
                matches!(parse_workout(text), Err(Error::Schema(_))),
                "expected schema error for {text}"
            );
        }
    }

    #[test]
    fn unparseable_text_is_malformed_json() {
        assert!(matches!(
            parse_workout("Aqui está seu treino:"),
            Err(Error::MalformedJson(_))
        ));
        assert!(matches!(
            parse_workout(r#"{"title":"X""#),
            Err(Error::MalformedJson(_))
        ));
    }

    #[test]
    fn every_failure_has_a_user_message() {
        let quota = Error::Api {
            status: 429,
            message: "quota".into(),
        };
        assert!(quota.user_message().contains("Limite"));
        assert!(Error::MissingApiKey.user_message().contains("GEMINI_API_KEY"));
        assert_eq!(
            Error::EmptyResponse.user_message(),
            "Ocorreu um erro ao gerar o treino. Tente novamente."
        );
    }
}

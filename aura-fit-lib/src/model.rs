//src/model.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// One movement prescription inside a workout.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub name: String,
    pub sets: u32,
    pub reps: String, // "12", "10-15" or a duration like "30s"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Exercise {
    pub fn new(name: &str, sets: u32, reps: &str) -> Self {
        Self {
            name: name.to_string(),
            sets,
            reps: reps.to_string(),
            note: None,
        }
    }

    #[must_use]
    pub fn with_note(mut self, note: &str) -> Self {
        self.note = Some(note.to_string());
        self
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub exercises: Vec<Exercise>, // Insertion order is display order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
    pub created_at: DateTime<Utc>,
}

impl Workout {
    /// Duration to show on screen. A missing duration falls back to
    /// `default_minutes`; the workout itself is never modified.
    pub fn display_duration(&self, default_minutes: u32) -> u32 {
        self.duration_minutes.unwrap_or(default_minutes)
    }
}

#[derive(
    Serialize,
    Deserialize,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Display,
    EnumIter,
    EnumString,
)]
pub enum FitnessLevel {
    #[default]
    #[serde(rename = "Iniciante")]
    #[strum(serialize = "Iniciante")]
    Beginner,
    #[serde(rename = "Intermediário")]
    #[strum(serialize = "Intermediário")]
    Intermediate,
    #[serde(rename = "Avançado")]
    #[strum(serialize = "Avançado")]
    Advanced,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct UserProfile {
    pub name: String,
    pub goal: String,
    pub level: FitnessLevel,
    pub member_since: i32,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: "Usuário Visitante".to_string(),
            goal: "Manter a forma".to_string(),
            level: FitnessLevel::default(),
            member_since: 2024,
        }
    }
}

/// Demo data every new session starts with.
pub fn seed_workouts() -> Vec<Workout> {
    vec![Workout {
        id: "1".to_string(),
        title: "Treino Full Body".to_string(),
        description: Some("Corpo inteiro para iniciantes".to_string()),
        duration_minutes: Some(45),
        created_at: Utc::now(),
        exercises: vec![
            Exercise::new("Agachamento Livre", 3, "12").with_note("Mantenha coluna reta"),
            Exercise::new("Flexão de Braço", 3, "10-15"),
            Exercise::new("Remada Curvada", 3, "12"),
            Exercise::new("Prancha Abdominal", 3, "30s"),
        ],
    }]
}

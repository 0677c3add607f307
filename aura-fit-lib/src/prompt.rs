//src/prompt.rs
use serde_json::{json, Value};

use crate::generator::Goal;

/// Natural-language instruction sent to the model.
pub fn build_prompt(goal: &Goal, language: &str) -> String {
    format!(
        "Crie um treino detalhado para o seguinte objetivo: \"{}\". Retorne em {}.",
        goal.as_str(),
        language
    )
}

/// Output shape the model is constrained to, in the OpenAPI subset the
/// Gemini `responseSchema` field understands.
pub fn workout_response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "title": { "type": "STRING", "description": "Título motivador do treino" },
            "description": { "type": "STRING", "description": "Breve descrição do objetivo" },
            "durationMinutes": { "type": "NUMBER", "description": "Duração estimada em minutos" },
            "exercises": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "name": { "type": "STRING" },
                        "sets": { "type": "NUMBER" },
                        "reps": { "type": "STRING" },
                        "note": { "type": "STRING", "description": "Dica técnica breve" }
                    },
                    "required": ["name", "sets", "reps"]
                }
            }
        },
        "required": ["title", "exercises"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_goal_and_language() {
        let goal = Goal::new("  treino de pernas com halteres ").unwrap();
        let prompt = build_prompt(&goal, "português do Brasil");
        assert_eq!(
            prompt,
            "Crie um treino detalhado para o seguinte objetivo: \"treino de pernas com halteres\". Retorne em português do Brasil."
        );
    }

    #[test]
    fn schema_requires_title_and_exercises() {
        let schema = workout_response_schema();
        assert_eq!(schema["required"], json!(["title", "exercises"]));
        assert_eq!(
            schema["properties"]["exercises"]["items"]["required"],
            json!(["name", "sets", "reps"])
        );
    }
}

//src/gemini.rs
//! Google Gemini `generateContent` client constrained to JSON output.
//!
//! The API key is looked up on every call: the configured key first, then
//! the environment variables listed in `api_key_env` (`GEMINI_API_KEY`,
//! `API_KEY` by default). A missing key fails before any request is sent.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::env;
use std::fmt::{Debug, Formatter, Result as FmtResult};
use tracing::{debug, error, instrument};

use crate::config::GeminiConfig;
use crate::generator::{CompletionClient, Error};

const API_KEY_HEADER: &str = "x-goog-api-key";
const JSON_MIME_TYPE: &str = "application/json";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig<'a>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'a str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    response_mime_type: &'a str,
    response_schema: &'a Value,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<ResponseContent>,
}

#[derive(Debug, Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ApiError,
}

pub struct GeminiClient {
    client: Client,
    api_key: Option<String>,
    api_key_env: Vec<String>,
    model: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(config: &GeminiConfig) -> Self {
        Self {
            client: Client::new(),
            api_key: config.api_key.clone(),
            api_key_env: config.api_key_env.clone(),
            model: config.model.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    fn resolve_api_key(&self) -> Result<String, Error> {
        self.api_key
            .clone()
            .into_iter()
            .chain(self.api_key_env.iter().filter_map(|name| env::var(name).ok()))
            .map(|key| key.trim().to_string())
            .find(|key| !key.is_empty())
            .ok_or(Error::MissingApiKey)
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    fn map_api_error(status: u16, body: &str) -> Error {
        let message = serde_json::from_str::<ErrorEnvelope>(body)
            .map_or_else(|_| body.trim().to_string(), |e| e.error.message);
        Error::Api { status, message }
    }

    fn extract_text(response: GenerateContentResponse) -> Result<String, Error> {
        if let Some(api_error) = response.error {
            return Err(Error::Api {
                status: 200,
                message: api_error.message,
            });
        }
        response
            .candidates
            .and_then(|candidates| candidates.into_iter().next())
            .and_then(|candidate| candidate.content)
            .and_then(|content| content.parts.into_iter().find_map(|part| part.text))
            .filter(|text| !text.trim().is_empty())
            .ok_or(Error::EmptyResponse)
    }
}

impl Debug for GeminiClient {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("GeminiClient")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[redacted]"))
            .finish()
    }
}

#[async_trait]
impl CompletionClient for GeminiClient {
    #[instrument(skip_all, fields(model = %self.model))]
    async fn complete_json(&self, prompt: &str, schema: &Value) -> Result<String, Error> {
        let api_key = self.resolve_api_key()?;

        let request = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![RequestPart { text: prompt }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: JSON_MIME_TYPE,
                response_schema: schema,
            },
        };

        debug!("Sending generateContent request");
        let response = self
            .client
            .post(self.endpoint())
            .header(API_KEY_HEADER, api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::Transport(format!("Failed to read response: {e}")))?;

        if !status.is_success() {
            error!(status = %status, "Gemini API error");
            return Err(Self::map_api_error(status.as_u16(), &body));
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&body).map_err(|e| {
            error!(error = %e, "Failed to parse Gemini envelope");
            Error::MalformedJson(format!("Gemini response envelope: {e}"))
        })?;
        Self::extract_text(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_key_wins_and_is_trimmed() {
        let client = GeminiClient::new(&GeminiConfig {
            api_key: Some("  abc ".to_string()),
            ..GeminiConfig::default()
        });
        assert_eq!(client.resolve_api_key().unwrap(), "abc");
    }

    #[test]
    fn unset_key_is_missing() {
        let client = GeminiClient::new(&GeminiConfig {
            api_key: Some("   ".to_string()),
            api_key_env: vec!["AURA_FIT_UNIT_TEST_UNSET_KEY".to_string()],
            ..GeminiConfig::default()
        });
        assert!(matches!(client.resolve_api_key(), Err(Error::MissingApiKey)));
    }

    #[test]
    fn endpoint_ignores_trailing_slash() {
        let client = GeminiClient::new(&GeminiConfig {
            base_url: "http://localhost:1234/v1beta/".to_string(),
            ..GeminiConfig::default()
        });
        assert_eq!(
            client.endpoint(),
            "http://localhost:1234/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn api_error_message_is_extracted_from_envelope() {
        let err = GeminiClient::map_api_error(
            400,
            r#"{"error":{"code":400,"message":"API key not valid","status":"INVALID_ARGUMENT"}}"#,
        );
        assert!(matches!(
            err,
            Error::Api { status: 400, ref message } if message == "API key not valid"
        ));

        let err = GeminiClient::map_api_error(502, "Bad Gateway\n");
        assert!(matches!(
            err,
            Error::Api { status: 502, ref message } if message == "Bad Gateway"
        ));
    }

    #[test]
    fn extract_text_requires_content() {
        let empty: GenerateContentResponse = serde_json::from_str(r#"{"candidates":[]}"#).unwrap();
        assert!(matches!(
            GeminiClient::extract_text(empty),
            Err(Error::EmptyResponse)
        ));

        let ok: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"{\"title\":\"X\"}"}],"role":"model"}}]}"#,
        )
        .unwrap();
        assert_eq!(GeminiClient::extract_text(ok).unwrap(), r#"{"title":"X"}"#);
    }

    #[test]
    fn debug_output_redacts_key() {
        let client = GeminiClient::new(&GeminiConfig {
            api_key: Some("secret".to_string()),
            ..GeminiConfig::default()
        });
        assert!(!format!("{client:?}").contains("secret"));
    }
}

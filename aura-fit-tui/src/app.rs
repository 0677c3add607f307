// aura-fit-tui/src/app.rs
mod actions;
mod input;
mod navigation_helpers;
pub mod state;

pub use state::{ActiveModal, App};

#[cfg(test)]
pub(crate) mod test_support {
    use super::App;
    use aura_fit_lib::{AppService, CompletionClient, Config, GeminiClient, GeminiConfig};
    use std::sync::Arc;
    use tokio::runtime::Runtime;

    /// App wired to a Gemini client that has no key, so any generation
    /// fails fast without touching the network.
    pub fn test_app() -> (Runtime, App) {
        let gemini = GeminiConfig {
            api_key: None,
            api_key_env: vec!["AURA_FIT_TUI_TEST_KEY_NEVER_SET".to_string()],
            base_url: "http://127.0.0.1:1/v1beta".to_string(),
            ..GeminiConfig::default()
        };
        test_app_with_client(Arc::new(GeminiClient::new(&gemini)))
    }

    pub fn test_app_with_client(client: Arc<dyn CompletionClient>) -> (Runtime, App) {
        let runtime = Runtime::new().expect("tokio runtime");
        let service = AppService::with_client(Config::default(), client);
        let app = App::new(&service, runtime.handle().clone());
        (runtime, app)
    }
}

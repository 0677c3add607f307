// src/lib.rs
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::sync::Arc;

// --- Declare modules ---
mod builder;
mod config;
mod gemini;
pub mod generator;
mod model;
mod prompt;
mod session;
mod view;

// --- Expose public types ---
pub use builder::{BuilderState, GenerationTicket, RequestState, SUGGESTIONS};
pub use config::{
    get_config_path as get_config_path_util, load as load_config_util, parse_color, Config,
    DisplayConfig, Error as ConfigError, GeminiConfig, GeneratorConfig, StandardColor,
};
pub use gemini::GeminiClient;
pub use generator::{
    parse_workout, CompletionClient, Error as GenerateError, Goal, WorkoutGenerator,
};
pub use model::{seed_workouts, Exercise, FitnessLevel, UserProfile, Workout};
pub use prompt::{build_prompt, workout_response_schema};
pub use session::{Error as SessionError, Session, WorkoutList};
pub use view::{ViewRouter, ViewState};

/// Configuration plus the generator shared by every session.
pub struct AppService {
    pub config: Config,
    pub config_path: Option<PathBuf>,
    generator: Arc<WorkoutGenerator>,
}

impl AppService {
    /// Loads the configuration and wires up the Gemini-backed generator.
    /// # Errors
    /// Returns `anyhow::Error` if the config path cannot be determined or the
    /// config file exists but cannot be read or parsed.
    pub fn initialize() -> Result<Self> {
        let config_path =
            config::get_config_path().context("Failed to determine configuration file path")?;
        let config = config::load(&config_path)
            .with_context(|| format!("Failed to load config from {config_path:?}"))?;
        tracing::info!(
            path = %config_path.display(),
            model = %config.gemini.model,
            "configuration loaded"
        );

        let client = Arc::new(GeminiClient::new(&config.gemini));
        let mut service = Self::with_client(config, client);
        service.config_path = Some(config_path);
        Ok(service)
    }

    /// Builds a service around any completion backend.
    pub fn with_client(config: Config, client: Arc<dyn CompletionClient>) -> Self {
        let generator = Arc::new(WorkoutGenerator::new(
            client,
            config.generator.language.clone(),
        ));
        Self {
            config,
            config_path: None,
            generator,
        }
    }

    pub fn get_config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Shared handle for spawning generation requests.
    pub fn generator(&self) -> Arc<WorkoutGenerator> {
        Arc::clone(&self.generator)
    }

    /// A new session seeded with the demo workout.
    pub fn new_session(&self) -> Session {
        Session::seeded()
    }
}

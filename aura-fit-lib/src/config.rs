//src/config.rs
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use strum::IntoEnumIterator;
use strum_macros::EnumIter;
use thiserror::Error;

use crate::model::UserProfile;

const CONFIG_FILE_NAME: &str = "config.toml";
const APP_CONFIG_DIR: &str = "aura-fit";
const CONFIG_ENV_VAR: &str = "AURA_FIT_CONFIG_DIR"; // Environment variable name

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_LANGUAGE: &str = "português do Brasil";
pub const DEFAULT_DURATION_MINUTES: u32 = 45;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Could not determine configuration directory.")]
    CannotDetermineConfigDir,
    #[error("I/O error accessing config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config file (TOML): {0}")]
    TomlParse(#[from] toml::de::Error),
    #[error("Invalid color name: {0}")]
    InvalidColor(String),
    #[error("Default duration must be a positive number of minutes.")]
    InvalidDefaultDuration,
}

// Standard terminal colors, parsed case-insensitively from the config
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum StandardColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    DarkGrey,
    LightRed,
    LightGreen,
    LightYellow,
    LightBlue,
    LightMagenta,
    LightCyan,
    Grey,
}

// Helper to parse a string into our StandardColor enum
pub fn parse_color(color_str: &str) -> Result<StandardColor, Error> {
    for color in StandardColor::iter() {
        if format!("{:?}", color).eq_ignore_ascii_case(color_str.trim()) {
            return Ok(color);
        }
    }
    Err(Error::InvalidColor(color_str.to_string()))
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)] // Ensure defaults are used if fields are missing
pub struct GeminiConfig {
    /// Takes precedence over the environment when set.
    pub api_key: Option<String>,
    /// Environment variables consulted, in order, when `api_key` is unset.
    pub api_key_env: Vec<String>,
    pub model: String,
    pub base_url: String,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_key_env: vec!["GEMINI_API_KEY".to_string(), "API_KEY".to_string()],
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Language the model is asked to answer in.
    pub language: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct DisplayConfig {
    pub default_duration_minutes: u32,
    pub accent_color: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            default_duration_minutes: DEFAULT_DURATION_MINUTES,
            accent_color: "Green".to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub gemini: GeminiConfig,
    pub generator: GeneratorConfig,
    pub display: DisplayConfig,
    pub profile: UserProfile,
}

impl Config {
    /// Checks values serde cannot express.
    pub fn validate(&self) -> Result<(), Error> {
        parse_color(&self.display.accent_color)?;
        if self.display.default_duration_minutes == 0 {
            return Err(Error::InvalidDefaultDuration);
        }
        Ok(())
    }
}

/// Determines the path to the configuration file. The directory is not
/// created; a missing file simply means defaults.
pub fn get_config_path() -> Result<PathBuf, Error> {
    let config_dir_path = match std::env::var(CONFIG_ENV_VAR) {
        Ok(path_str) if !path_str.trim().is_empty() => PathBuf::from(path_str),
        _ => dirs::config_dir()
            .ok_or(Error::CannotDetermineConfigDir)?
            .join(APP_CONFIG_DIR),
    };
    Ok(config_dir_path.join(CONFIG_FILE_NAME))
}

/// Loads the configuration from the TOML file at the given path, falling
/// back to defaults when the file does not exist. Never writes.
pub fn load(config_path: &Path) -> Result<Config, Error> {
    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "no config file, using defaults");
        return Ok(Config::default());
    }
    let config_content = fs::read_to_string(config_path)?;
    let config: Config = toml::from_str(&config_content)?;
    config.validate()?;
    Ok(config)
}

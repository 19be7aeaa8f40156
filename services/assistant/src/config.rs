//! services/assistant/src/config.rs
//!
//! Defines the application's configuration structure and loading logic.
//!
//! All configuration is loaded from environment variables at startup. The `.env`
//! file is used for local development.

use std::path::PathBuf;
use std::time::Duration;
use tracing::Level;

/// A custom error type for configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for the environment variable {0}: {1}")]
    InvalidValue(String, String),
}

/// Holds all configuration loaded from the environment at startup.
#[derive(Clone, Debug)]
pub struct Config {
    /// How long the assistant "thinks" before a scripted reply appears.
    pub reply_delay: Duration,
    pub export_dir: PathBuf,
    pub assistant_name: String,
    pub log_level: Level,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reply_delay: Duration::from_millis(1000),
            export_dir: PathBuf::from("./exports"),
            assistant_name: "Cura".to_string(),
            log_level: Level::INFO,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// It will look for a `.env` file in the current directory for development,
    /// but this is skipped in test environments to ensure tests are hermetic.
    pub fn from_env() -> Result<Self, ConfigError> {
        if !cfg!(test) {
            dotenvy::dotenv().ok();
        }

        let delay_str = std::env::var("REPLY_DELAY_MS").unwrap_or_else(|_| "1000".to_string());
        let reply_delay = delay_str
            .parse::<u64>()
            .map(Duration::from_millis)
            .map_err(|e| ConfigError::InvalidValue("REPLY_DELAY_MS".to_string(), e.to_string()))?;

        let export_dir = std::env::var("EXPORT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./exports"));

        let assistant_name =
            std::env::var("ASSISTANT_NAME").unwrap_or_else(|_| "Cura".to_string());
        if assistant_name.trim().is_empty() {
            return Err(ConfigError::InvalidValue(
                "ASSISTANT_NAME".to_string(),
                "the name cannot be blank".to_string(),
            ));
        }

        let log_level_str = std::env::var("RUST_LOG").unwrap_or_else(|_| "INFO".to_string());
        let log_level = log_level_str.parse::<Level>().map_err(|_| {
            ConfigError::InvalidValue(
                "RUST_LOG".to_string(),
                format!("'{}' is not a valid log level", log_level_str),
            )
        })?;

        Ok(Self {
            reply_delay,
            export_dir,
            assistant_name,
            log_level,
        })
    }
}

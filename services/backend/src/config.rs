//! services/backend/src/config.rs
//!
//! Defines the application's configuration structure and loading logic.
//!
//! All configuration is loaded from environment variables at startup. The `.env`
//! file is used for local development.

use std::path::PathBuf;
use std::time::Duration;
use tracing::Level;

/// A custom error type for configuration loading failures.
///
/// Every variable has a default or is optional, so the only way loading can
/// fail is a value that does not parse.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for the environment variable {0}: {1}")]
    InvalidValue(String, String),
}

/// Holds all configuration loaded from the environment at startup.
#[derive(Clone, Debug)]
pub struct Config {
    pub data_dir: PathBuf,
    pub log_level: Level,
    pub gemini_api_key: Option<String>,
    pub gemini_api_base: String,
    pub copy_model: String,
    pub qa_model: String,
    pub scout_model: String,
    pub counsel_model: String,
    pub image_model: String,
    pub refresh_interval: Duration,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// It will look for a `.env` file in the current directory for development,
    /// but this is skipped in test environments to ensure tests are hermetic.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Only load from .env in non-test mode to avoid contamination.
        if !cfg!(test) {
            dotenvy::dotenv().ok();
        }

        // --- Load Store Settings ---
        let data_dir = std::env::var("RENTFLOW_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./rentflow_data"));

        let log_level_str = std::env::var("RUST_LOG").unwrap_or_else(|_| "INFO".to_string());
        let log_level = log_level_str.parse::<Level>().map_err(|_| {
            ConfigError::InvalidValue(
                "RUST_LOG".to_string(),
                format!("'{}' is not a valid log level", log_level_str),
            )
        })?;

        // --- Load API Key (as optional; absence selects the offline adapters) ---
        let gemini_api_key = std::env::var("GEMINI_API_KEY").ok();
        let gemini_api_base = std::env::var("GEMINI_API_BASE").unwrap_or_else(|_| {
            "https://generativelanguage.googleapis.com/v1beta/openai".to_string()
        });

        // --- Load Adapter-specific Settings ---
        let copy_model = std::env::var("RENTFLOW_COPY_MODEL")
            .unwrap_or_else(|_| "gemini-3-flash-preview".to_string());
        let qa_model = std::env::var("RENTFLOW_QA_MODEL")
            .unwrap_or_else(|_| "gemini-2.5-flash-lite-latest".to_string());
        let scout_model = std::env::var("RENTFLOW_SCOUT_MODEL")
            .unwrap_or_else(|_| "gemini-2.5-flash".to_string());
        let counsel_model = std::env::var("RENTFLOW_COUNSEL_MODEL")
            .unwrap_or_else(|_| "gemini-3-pro-preview".to_string());
        let image_model = std::env::var("RENTFLOW_IMAGE_MODEL")
            .unwrap_or_else(|_| "gemini-2.5-flash-image".to_string());

        // --- Load Session Settings ---
        let refresh_secs_str =
            std::env::var("RENTFLOW_REFRESH_SECS").unwrap_or_else(|_| "30".to_string());
        let refresh_secs = refresh_secs_str.parse::<u64>().map_err(|e| {
            ConfigError::InvalidValue("RENTFLOW_REFRESH_SECS".to_string(), e.to_string())
        })?;
        if refresh_secs == 0 {
            return Err(ConfigError::InvalidValue(
                "RENTFLOW_REFRESH_SECS".to_string(),
                "must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            data_dir,
            log_level,
            gemini_api_key,
            gemini_api_base,
            copy_model,
            qa_model,
            scout_model,
            counsel_model,
            image_model,
            refresh_interval: Duration::from_secs(refresh_secs),
        })
    }
}

//! Checker settings

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::{AgentOptions, ConfigError};

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Top-level settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Knobs for the generated default agent
    #[serde(default)]
    pub agent: AgentOptions,

    /// Where generated artifacts live and how they are checked
    #[serde(default)]
    pub validation: ValidationSettings,

    #[serde(default)]
    pub observability: ObservabilityConfig,
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_agent()?;
        self.validate_validation()?;
        self.validate_observability()?;
        Ok(())
    }

    fn validate_agent(&self) -> Result<(), ConfigError> {
        let confidence = self.agent.ml_min_confidence;
        if !(0.0..=1.0).contains(&confidence) {
            return Err(ConfigError::InvalidValue {
                field: "agent.ml_min_confidence".to_string(),
                message: format!("Must be between 0.0 and 1.0, got {}", confidence),
            });
        }
        Ok(())
    }

    fn validate_validation(&self) -> Result<(), ConfigError> {
        let validation = &self.validation;

        if validation.intents_dir.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "validation.intents_dir".to_string(),
                message: "Cannot be empty".to_string(),
            });
        }

        if validation.concurrency == 0 {
            return Err(ConfigError::InvalidValue {
                field: "validation.concurrency".to_string(),
                message: "Must be at least 1".to_string(),
            });
        }

        if validation.speech_path.trim().is_empty() {
            tracing::warn!("validation.speech_path is empty, artifacts are read next to the interaction file");
        }

        Ok(())
    }

    fn validate_observability(&self) -> Result<(), ConfigError> {
        let level = self.observability.log_level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "observability.log_level".to_string(),
                message: format!("Expected one of {}, got '{}'", LOG_LEVELS.join(", "), level),
            });
        }
        Ok(())
    }
}

/// Locations of generated artifacts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationSettings {
    /// Output folder, relative to the interaction file's directory
    #[serde(default = "default_speech_path")]
    pub speech_path: String,

    /// Intents folder inside the output folder
    #[serde(default = "default_intents_dir")]
    pub intents_dir: String,

    /// Agent file inside the output folder
    #[serde(default = "default_agent_file")]
    pub agent_file: String,

    /// Interaction files checked at the same time
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,
}

fn default_speech_path() -> String {
    "speech-assets".to_string()
}
fn default_intents_dir() -> String {
    "dialogflow/production/intents".to_string()
}
fn default_agent_file() -> String {
    "dialogflow/production/agent.json".to_string()
}
fn default_concurrency() -> usize {
    4
}

impl Default for ValidationSettings {
    fn default() -> Self {
        Self {
            speech_path: default_speech_path(),
            intents_dir: default_intents_dir(),
            agent_file: default_agent_file(),
            concurrency: default_concurrency(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Emit JSON log lines instead of plain text
    #[serde(default)]
    pub log_json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_json: false,
        }
    }
}

/// Load settings
///
/// Priority: env vars > explicit file > config/default > defaults
pub fn load_settings(path: Option<&Path>) -> Result<Settings, ConfigError> {
    let mut builder = Config::builder();

    builder = builder.add_source(File::with_name("config/default").required(false));

    if let Some(path) = path {
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }
        builder = builder.add_source(File::from(path.to_path_buf()));
    }

    builder = builder.add_source(
        Environment::with_prefix("DIALOGFLOW_AGENT")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;
    let settings: Settings = config.try_deserialize()?;

    settings.validate()?;

    Ok(settings)
}

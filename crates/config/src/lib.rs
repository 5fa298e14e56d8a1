//! Configuration for generated Dialogflow agents
//!
//! Two concerns live here:
//! - The default `agent.json` model ([`AgentConfiguration`]) with caller overrides
//! - Runtime settings for the checker, loaded from:
//!   - `config/default.{toml,yaml,json}` when present
//!   - an explicit settings file
//!   - Environment variables (`DIALOGFLOW_AGENT__` prefix, `__` separator)

pub mod agent;
pub mod settings;

pub use agent::{
    AgentConfiguration, AgentOptions, ClassifierMode, GoogleAssistantConfig,
    GoogleAssistantOptions, OAuthLinking, StartIntent, WebhookConfig, WebhookOptions,
};
pub use settings::{load_settings, ObservabilityConfig, Settings, ValidationSettings};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

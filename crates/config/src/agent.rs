//! Default agent configuration (`agent.json`)
//!
//! Every field has a default matching what the generator writes for a fresh
//! agent. The Google Assistant block and the webhook block are independent:
//! toggling one never changes the shape of the other.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use dialogflow_agent_core::is_known_locale;

use crate::ConfigError;

/// Platform API version the generated agent targets
pub const API_VERSION: &str = "v2beta1";

/// Baseline settings of a generated agent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentConfiguration {
    #[serde(default = "default_description")]
    pub description: String,

    #[serde(default)]
    pub active_assistant_agents: Vec<String>,

    #[serde(default)]
    pub disable_interaction_logs: bool,

    #[serde(default)]
    pub google_assistant: GoogleAssistantConfig,

    #[serde(default = "default_timezone")]
    pub default_timezone: String,

    #[serde(default)]
    pub webhook: WebhookConfig,

    /// Hidden from the public agent directory
    #[serde(default = "default_true")]
    pub is_private: bool,

    #[serde(default)]
    pub custom_classifier_mode: ClassifierMode,

    /// Below this score the platform falls back to the fallback intent
    #[serde(default = "default_ml_min_confidence")]
    pub ml_min_confidence: f64,

    /// Lower-cased locale codes
    #[serde(default)]
    pub supported_languages: Vec<String>,

    #[serde(default = "default_api_version")]
    pub one_platform_api_version: String,
}

fn default_description() -> String {
    "description".to_string()
}
fn default_timezone() -> String {
    "America/New_York".to_string()
}
fn default_ml_min_confidence() -> f64 {
    0.2
}
fn default_api_version() -> String {
    API_VERSION.to_string()
}
fn default_true() -> bool {
    true
}

impl Default for AgentConfiguration {
    fn default() -> Self {
        Self {
            description: default_description(),
            active_assistant_agents: Vec::new(),
            disable_interaction_logs: false,
            google_assistant: GoogleAssistantConfig::default(),
            default_timezone: default_timezone(),
            webhook: WebhookConfig::default(),
            is_private: true,
            custom_classifier_mode: ClassifierMode::default(),
            ml_min_confidence: default_ml_min_confidence(),
            supported_languages: Vec::new(),
            one_platform_api_version: default_api_version(),
        }
    }
}

impl AgentConfiguration {
    /// Defaults with the caller's knobs applied
    pub fn from_options(options: &AgentOptions) -> Self {
        Self::default().with_options(options)
    }

    /// Apply caller knobs on top of this configuration
    pub fn with_options(mut self, options: &AgentOptions) -> Self {
        self.description = options.description.clone();
        self.default_timezone = options.default_timezone.clone();
        self.is_private = options.is_private;
        self.custom_classifier_mode = options.custom_classifier_mode;
        self.ml_min_confidence = options.ml_min_confidence;

        self.webhook.available = options.webhook.available;
        self.webhook.use_for_domains = options.webhook.use_for_domains;
        self.webhook.url = options.webhook.url.clone();

        self.google_assistant.google_assistant_compatible = options.google_assistant.compatible;
        self.google_assistant.project = options.google_assistant.project.clone();
        self.google_assistant.o_auth_linking.required = options.google_assistant.oauth_required;
        self
    }

    /// Set the supported locales; each must be a catalog member
    pub fn with_supported_languages<I, S>(mut self, locales: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut languages: Vec<String> = Vec::new();
        for locale in locales {
            let code = locale.as_ref().trim().to_lowercase();
            if !is_known_locale(&code) {
                return Err(ConfigError::InvalidValue {
                    field: "supportedLanguages".to_string(),
                    message: format!("Unknown locale '{}'", locale.as_ref()),
                });
            }
            if !languages.contains(&code) {
                languages.push(code);
            }
        }
        self.supported_languages = languages;
        Ok(self)
    }

    /// Check cross-field constraints
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.ml_min_confidence) {
            return Err(ConfigError::InvalidValue {
                field: "mlMinConfidence".to_string(),
                message: format!("Must be between 0.0 and 1.0, got {}", self.ml_min_confidence),
            });
        }

        if let Some(unknown) = self.supported_languages.iter().find(|l| !is_known_locale(l)) {
            return Err(ConfigError::InvalidValue {
                field: "supportedLanguages".to_string(),
                message: format!("Unknown locale '{}'", unknown),
            });
        }

        if self.webhook.available && self.webhook.url.trim().is_empty() {
            tracing::warn!("Webhook is available but has no URL");
        }

        Ok(())
    }

    /// Decode an `agent.json` file
    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        serde_yaml::to_string(self).map_err(|e| ConfigError::ParseError(e.to_string()))
    }
}

/// When the custom classifier runs relative to the built-in one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ClassifierMode {
    #[serde(rename = "use.before")]
    UseBefore,
    #[default]
    #[serde(rename = "use.after")]
    UseAfter,
}

/// Google Assistant compatibility block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleAssistantConfig {
    #[serde(default = "default_true")]
    pub google_assistant_compatible: bool,

    #[serde(default = "default_project")]
    pub project: String,

    #[serde(default)]
    pub welcome_intent_sign_in_required: bool,

    /// Written by the generator once the welcome intent id is known
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub start_intents: Vec<StartIntent>,

    #[serde(default)]
    pub system_intents: Vec<serde_json::Value>,

    #[serde(default)]
    pub o_auth_linking: OAuthLinking,

    #[serde(default = "default_voice_type")]
    pub voice_type: String,

    #[serde(default)]
    pub capabilities: Vec<String>,

    #[serde(default = "default_protocol_version")]
    pub protocol_version: String,

    #[serde(default = "default_true")]
    pub auto_preview_enabled: bool,

    #[serde(default)]
    pub is_device_agent: bool,
}

fn default_project() -> String {
    "project".to_string()
}
fn default_voice_type() -> String {
    "MALE_1".to_string()
}
fn default_protocol_version() -> String {
    "V2".to_string()
}

impl Default for GoogleAssistantConfig {
    fn default() -> Self {
        Self {
            google_assistant_compatible: true,
            project: default_project(),
            welcome_intent_sign_in_required: false,
            start_intents: Vec::new(),
            system_intents: Vec::new(),
            o_auth_linking: OAuthLinking::default(),
            voice_type: default_voice_type(),
            capabilities: Vec::new(),
            protocol_version: default_protocol_version(),
            auto_preview_enabled: true,
            is_device_agent: false,
        }
    }
}

impl GoogleAssistantConfig {
    /// Id of the first start intent, if the generator set one
    pub fn first_start_intent_id(&self) -> Option<&str> {
        self.start_intents.first().map(|s| s.intent_id.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartIntent {
    pub intent_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sign_in_required: Option<bool>,
}

/// Account linking settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OAuthLinking {
    #[serde(default)]
    pub required: bool,

    #[serde(default = "default_grant_type")]
    pub grant_type: String,
}

fn default_grant_type() -> String {
    "AUTH_CODE_GRANT".to_string()
}

impl Default for OAuthLinking {
    fn default() -> Self {
        Self {
            required: false,
            grant_type: default_grant_type(),
        }
    }
}

/// Fulfillment endpoint block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookConfig {
    #[serde(default = "default_webhook_url")]
    pub url: String,

    #[serde(default)]
    pub headers: BTreeMap<String, String>,

    #[serde(default = "default_true")]
    pub available: bool,

    /// Applies to whole domains rather than individual intents
    #[serde(default = "default_true")]
    pub use_for_domains: bool,

    #[serde(default)]
    pub cloud_functions_enabled: bool,

    #[serde(default)]
    pub cloud_functions_initialized: bool,
}

fn default_webhook_url() -> String {
    "webhook.url".to_string()
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            url: default_webhook_url(),
            headers: BTreeMap::new(),
            available: true,
            use_for_domains: true,
            cloud_functions_enabled: false,
            cloud_functions_initialized: false,
        }
    }
}

/// Caller-adjustable knobs of the default configuration
///
/// Defaults reproduce [`AgentConfiguration::default`] exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentOptions {
    #[serde(default = "default_description")]
    pub description: String,

    #[serde(default = "default_timezone")]
    pub default_timezone: String,

    #[serde(default = "default_true")]
    pub is_private: bool,

    #[serde(default)]
    pub custom_classifier_mode: ClassifierMode,

    #[serde(default = "default_ml_min_confidence")]
    pub ml_min_confidence: f64,

    #[serde(default)]
    pub webhook: WebhookOptions,

    #[serde(default)]
    pub google_assistant: GoogleAssistantOptions,
}

impl Default for AgentOptions {
    fn default() -> Self {
        Self {
            description: default_description(),
            default_timezone: default_timezone(),
            is_private: true,
            custom_classifier_mode: ClassifierMode::default(),
            ml_min_confidence: default_ml_min_confidence(),
            webhook: WebhookOptions::default(),
            google_assistant: GoogleAssistantOptions::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookOptions {
    #[serde(default = "default_true")]
    pub available: bool,

    #[serde(default = "default_true")]
    pub use_for_domains: bool,

    #[serde(default = "default_webhook_url")]
    pub url: String,
}

impl Default for WebhookOptions {
    fn default() -> Self {
        Self {
            available: true,
            use_for_domains: true,
            url: default_webhook_url(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoogleAssistantOptions {
    /// Generate the assistant compatibility block as enabled
    #[serde(default = "default_true")]
    pub compatible: bool,

    /// Account linking mandatory before invocation
    #[serde(default)]
    pub oauth_required: bool,

    #[serde(default = "default_project")]
    pub project: String,
}

impl Default for GoogleAssistantOptions {
    fn default() -> Self {
        Self {
            compatible: true,
            oauth_required: false,
            project: default_project(),
        }
    }
}

//! Record types for generated Dialogflow artifacts
//!
//! These mirror the JSON written by the agent generator:
//! - `intents/<Name>.json` decodes to [`IntentDefinition`]
//! - `intents/<Name>_usersays_<locale>.json` decodes to a list of [`UsersaysRecord`]

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Generated intent definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentDefinition {
    /// Platform id, referenced from the agent's start intents
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub webhook_used: bool,
    #[serde(default)]
    pub webhook_for_slot_filling: bool,
    #[serde(default)]
    pub responses: Vec<IntentResponse>,
}

impl IntentDefinition {
    /// Decode from file content; `path` is only used in errors
    pub fn from_json(path: &str, content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| Error::MalformedArtifact {
            path: path.to_string(),
            message: e.to_string(),
        })
    }

    /// The first response block, which carries parameters and messages
    pub fn primary_response(&self) -> Option<&IntentResponse> {
        self.responses.first()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentResponse {
    #[serde(default)]
    pub parameters: Vec<IntentParameter>,
    #[serde(default)]
    pub messages: Vec<ResponseMessage>,
}

/// Slot parameter of an intent
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentParameter {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub data_type: Option<String>,
    #[serde(default)]
    pub required: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseMessage {
    /// Speech variants; the platform picks one at random
    #[serde(default)]
    pub speech: Vec<String>,
}

/// One training phrase from a usersays file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UsersaysRecord {
    #[serde(default)]
    pub data: Vec<DataSegment>,
}

impl UsersaysRecord {
    /// Decode a whole usersays file
    pub fn list_from_json(path: &str, content: &str) -> Result<Vec<Self>> {
        serde_json::from_str(content).map_err(|e| Error::MalformedArtifact {
            path: path.to_string(),
            message: e.to_string(),
        })
    }

    /// Literal text of the first data segment
    pub fn leading_text(&self) -> Option<&str> {
        self.data.first().map(|d| d.text.as_str())
    }

    /// First segment annotated with the given slot type
    pub fn segment_with_meta(&self, meta: &str) -> Option<&DataSegment> {
        self.data.iter().find(|d| d.meta.as_deref() == Some(meta))
    }
}

/// A run of text in a phrase, optionally annotated as a slot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSegment {
    pub text: String,
    /// Slot type tag such as `@sys.number`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_defined: Option<bool>,
}

impl DataSegment {
    pub fn literal(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn slot(text: impl Into<String>, meta: impl Into<String>, alias: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            meta: Some(meta.into()),
            alias: Some(alias.into()),
            user_defined: Some(true),
        }
    }

    /// Slot annotation carried by this segment, if any
    pub fn annotation(&self) -> Option<SlotAnnotation> {
        Some(SlotAnnotation {
            meta: self.meta.clone()?,
            alias: self.alias.clone().unwrap_or_default(),
            text: self.text.clone(),
        })
    }
}

/// Expected shape of a slot placeholder in a phrase
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotAnnotation {
    pub meta: String,
    pub alias: String,
    pub text: String,
}

impl SlotAnnotation {
    /// `@sys.<kind>` slot with `{alias}` placeholder text
    pub fn system(kind: &str, alias: &str) -> Self {
        Self {
            meta: format!("@sys.{}", kind),
            alias: alias.to_string(),
            text: format!("{{{}}}", alias),
        }
    }
}

//! Shape checks for generated intent definitions
//!
//! Each check compares one property of a generated artifact with what the
//! interaction definition asked for. Violations are reported, never raised.

use serde::{Deserialize, Serialize};

use dialogflow_agent_config::AgentConfiguration;
use dialogflow_agent_core::{IntentDefinition, SlotAnnotation, UsersaysRecord};

/// Which property a violation is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeRule {
    WebhookUsed,
    WebhookForSlotFilling,
    Parameters,
    Messages,
    SlotAnnotation,
    StartIntent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShapeViolation {
    pub intent: String,
    pub rule: ShapeRule,
    pub message: String,
}

impl ShapeViolation {
    fn new(intent: &str, rule: ShapeRule, message: impl Into<String>) -> Self {
        Self {
            intent: intent.to_string(),
            rule,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ShapeViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}: {}", self.rule, self.intent, self.message)
    }
}

pub type ShapeResult = Result<(), ShapeViolation>;

pub fn check_webhook_used(intent: &IntentDefinition, expected: bool) -> ShapeResult {
    if intent.webhook_used == expected {
        return Ok(());
    }
    Err(ShapeViolation::new(
        &intent.name,
        ShapeRule::WebhookUsed,
        format!("webhookUsed is {}, expected {}", intent.webhook_used, expected),
    ))
}

pub fn check_webhook_for_slot_filling(intent: &IntentDefinition, expected: bool) -> ShapeResult {
    if intent.webhook_for_slot_filling == expected {
        return Ok(());
    }
    Err(ShapeViolation::new(
        &intent.name,
        ShapeRule::WebhookForSlotFilling,
        format!(
            "webhookForSlotFilling is {}, expected {}",
            intent.webhook_for_slot_filling, expected
        ),
    ))
}

/// First response carries exactly these parameters, by required flag
pub fn check_parameters_required(intent: &IntentDefinition, expected: &[bool]) -> ShapeResult {
    let actual: Vec<bool> = intent
        .primary_response()
        .map(|r| r.parameters.iter().map(|p| p.required).collect())
        .unwrap_or_default();

    if actual == expected {
        return Ok(());
    }
    Err(ShapeViolation::new(
        &intent.name,
        ShapeRule::Parameters,
        format!("parameters required flags are {:?}, expected {:?}", actual, expected),
    ))
}

/// First response has `messages` messages and the first one `speech` variants
pub fn check_speech_count(intent: &IntentDefinition, messages: usize, speech: usize) -> ShapeResult {
    let response = intent.primary_response();
    let message_count = response.map(|r| r.messages.len()).unwrap_or(0);
    let speech_count = response
        .and_then(|r| r.messages.first())
        .map(|m| m.speech.len())
        .unwrap_or(0);

    if message_count == messages && speech_count == speech {
        return Ok(());
    }
    Err(ShapeViolation::new(
        &intent.name,
        ShapeRule::Messages,
        format!(
            "{} messages with {} speech variants, expected {} with {}",
            message_count, speech_count, messages, speech
        ),
    ))
}

/// Every phrase carries a slot segment equal to `expected`
pub fn check_slot_annotations(
    intent: &str,
    records: &[UsersaysRecord],
    expected: &SlotAnnotation,
) -> ShapeResult {
    if records.is_empty() {
        return Err(ShapeViolation::new(
            intent,
            ShapeRule::SlotAnnotation,
            "no phrases generated",
        ));
    }

    for (index, record) in records.iter().enumerate() {
        let found = record
            .segment_with_meta(&expected.meta)
            .and_then(|s| s.annotation());
        match found {
            Some(ref annotation) if annotation == expected => {}
            Some(annotation) => {
                return Err(ShapeViolation::new(
                    intent,
                    ShapeRule::SlotAnnotation,
                    format!("phrase {} has {:?}, expected {:?}", index, annotation, expected),
                ))
            }
            None => {
                return Err(ShapeViolation::new(
                    intent,
                    ShapeRule::SlotAnnotation,
                    format!("phrase {} has no {} slot", index, expected.meta),
                ))
            }
        }
    }
    Ok(())
}

/// The agent's first start intent is this intent
pub fn check_start_intent(agent: &AgentConfiguration, intent: &IntentDefinition) -> ShapeResult {
    let start = agent.google_assistant.first_start_intent_id();
    match (start, intent.id.as_deref()) {
        (Some(start), Some(id)) if start == id => Ok(()),
        (start, id) => Err(ShapeViolation::new(
            &intent.name,
            ShapeRule::StartIntent,
            format!("start intent is {:?}, intent id is {:?}", start, id),
        )),
    }
}

/// Declarative expectations for one generated intent
///
/// Unset fields are not checked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentExpectation {
    /// Intent name, also the definition file stem
    pub intent: String,
    #[serde(default)]
    pub webhook_used: Option<bool>,
    #[serde(default)]
    pub webhook_for_slot_filling: Option<bool>,
    /// Required flag of each parameter of the first response
    #[serde(default)]
    pub parameters_required: Option<Vec<bool>>,
    /// `(messages, speech variants of the first message)`
    #[serde(default)]
    pub speech: Option<(usize, usize)>,
    /// Slot every generated phrase must carry
    #[serde(default)]
    pub slot: Option<SlotAnnotation>,
    /// Intent must be the agent's first start intent
    #[serde(default)]
    pub start_intent: bool,
}

impl IntentExpectation {
    pub fn new(intent: impl Into<String>) -> Self {
        Self {
            intent: intent.into(),
            ..Default::default()
        }
    }

    /// Whether the usersays file has to be loaded
    pub fn needs_samples(&self) -> bool {
        self.slot.is_some()
    }

    /// Run every configured check, collecting all violations
    pub fn apply(
        &self,
        definition: &IntentDefinition,
        samples: Option<&[UsersaysRecord]>,
        agent: Option<&AgentConfiguration>,
    ) -> Vec<ShapeViolation> {
        let mut checks: Vec<ShapeResult> = Vec::new();

        if let Some(expected) = self.webhook_used {
            checks.push(check_webhook_used(definition, expected));
        }
        if let Some(expected) = self.webhook_for_slot_filling {
            checks.push(check_webhook_for_slot_filling(definition, expected));
        }
        if let Some(expected) = &self.parameters_required {
            checks.push(check_parameters_required(definition, expected));
        }
        if let Some((messages, speech)) = self.speech {
            checks.push(check_speech_count(definition, messages, speech));
        }
        if let Some(slot) = &self.slot {
            checks.push(check_slot_annotations(
                &self.intent,
                samples.unwrap_or_default(),
                slot,
            ));
        }
        if self.start_intent {
            checks.push(match agent {
                Some(agent) => check_start_intent(agent, definition),
                None => Err(ShapeViolation::new(
                    &self.intent,
                    ShapeRule::StartIntent,
                    "agent configuration not available",
                )),
            });
        }

        checks.into_iter().filter_map(Result::err).collect()
    }
}

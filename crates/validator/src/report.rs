//! Validation results

use serde::Serialize;
use std::path::PathBuf;

use dialogflow_agent_core::{BuiltInIntent, LocaleKey};

use crate::shape::ShapeViolation;

/// Outcome for one built-in intent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// Generated samples equal the canonical ones
    Pass,
    /// Samples differ but the intent is on the override allow-list
    Overridden,
    /// Samples differ
    Fail,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntentVerdict {
    pub intent: BuiltInIntent,
    pub verdict: Verdict,
    /// Canonical samples, deduplicated
    pub expected: Vec<String>,
    /// Leading text of every generated phrase, in file order
    pub generated: Vec<String>,
}

impl IntentVerdict {
    pub fn passed(&self) -> bool {
        !matches!(self.verdict, Verdict::Fail)
    }
}

impl std::fmt::Display for IntentVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.verdict {
            Verdict::Pass => write!(f, "{}: ok", self.intent),
            Verdict::Overridden => write!(f, "{}: ok (override)", self.intent),
            Verdict::Fail => write!(
                f,
                "{}: FAILED expected {:?}, generated {:?}",
                self.intent, self.expected, self.generated
            ),
        }
    }
}

/// Everything checked for one interaction file
#[derive(Debug, Clone, Serialize)]
pub struct InteractionReport {
    pub file: PathBuf,
    pub locale: LocaleKey,
    pub intents: Vec<IntentVerdict>,
    pub shape_violations: Vec<ShapeViolation>,
}

impl InteractionReport {
    pub fn new(file: PathBuf, locale: LocaleKey) -> Self {
        Self {
            file,
            locale,
            intents: Vec::new(),
            shape_violations: Vec::new(),
        }
    }

    /// Every failing built-in intent, not only the first
    pub fn failures(&self) -> Vec<&IntentVerdict> {
        self.intents.iter().filter(|v| !v.passed()).collect()
    }

    pub fn failed_intents(&self) -> Vec<BuiltInIntent> {
        self.failures().into_iter().map(|v| v.intent).collect()
    }

    pub fn is_success(&self) -> bool {
        self.failures().is_empty() && self.shape_violations.is_empty()
    }

    /// Human-readable summary
    pub fn summary(&self) -> String {
        let failures = self.failures().len();
        if self.is_success() {
            format!(
                "{} [{}]: {} built-in intents checked, all passed",
                self.file.display(),
                self.locale,
                self.intents.len()
            )
        } else {
            format!(
                "{} [{}]: {} of {} built-in intents failed, {} shape violations",
                self.file.display(),
                self.locale,
                failures,
                self.intents.len(),
                self.shape_violations.len()
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verdict(intent: BuiltInIntent, verdict: Verdict) -> IntentVerdict {
        IntentVerdict {
            intent,
            verdict,
            expected: vec!["yes".to_string()],
            generated: vec!["yeah".to_string()],
        }
    }

    #[test]
    fn test_report_aggregates_all_failures() {
        let mut report = InteractionReport::new(PathBuf::from("interaction.json"), LocaleKey::new("en"));
        report.intents.push(verdict(BuiltInIntent::HelpIntent, Verdict::Fail));
        report.intents.push(verdict(BuiltInIntent::StopIntent, Verdict::Overridden));
        report.intents.push(verdict(BuiltInIntent::YesIntent, Verdict::Fail));
        report.intents.push(verdict(BuiltInIntent::NoIntent, Verdict::Pass));

        assert!(!report.is_success());
        assert_eq!(
            report.failed_intents(),
            vec![BuiltInIntent::HelpIntent, BuiltInIntent::YesIntent]
        );
        assert!(report.summary().contains("2 of 4"));
    }

    #[test]
    fn test_verdict_display() {
        let failed = verdict(BuiltInIntent::HelpIntent, Verdict::Fail);
        assert!(failed.to_string().starts_with("HelpIntent: FAILED"));
        assert!(verdict(BuiltInIntent::StopIntent, Verdict::Overridden).passed());
    }

    #[test]
    fn test_empty_report_is_success() {
        let report = InteractionReport::new(PathBuf::from("a.json"), LocaleKey::new("de"));
        assert!(report.is_success());
        assert!(report.summary().contains("all passed"));
    }
}

//! Reserved built-in intents
//!
//! Platform-reserved intents (help, stop, yes/no, media controls) are expected
//! to carry the same canonical sample phrasing in every generated agent.

mod catalog;
mod languages;

pub use catalog::BuiltInCatalog;

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::str::FromStr;

use crate::Error;

/// Names of the built-in intents, in generation order
pub const BUILT_IN_INTENTS: &[&str] = &[
    "HelpIntent",
    "StopIntent",
    "CancelIntent",
    "YesIntent",
    "NoIntent",
    "PauseIntent",
    "ResumeIntent",
    "RepeatIntent",
    "StartOverIntent",
    "PreviousIntent",
    "NextIntent",
    "LoopOffIntent",
    "LoopOnIntent",
    "ShuffleOffIntent",
    "ShuffleOnIntent",
];

/// One of the reserved built-in intents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BuiltInIntent {
    HelpIntent,
    StopIntent,
    CancelIntent,
    YesIntent,
    NoIntent,
    PauseIntent,
    ResumeIntent,
    RepeatIntent,
    StartOverIntent,
    PreviousIntent,
    NextIntent,
    LoopOffIntent,
    LoopOnIntent,
    ShuffleOffIntent,
    ShuffleOnIntent,
}

impl BuiltInIntent {
    /// Intent name as written in generated files
    pub fn name(&self) -> &'static str {
        match self {
            Self::HelpIntent => "HelpIntent",
            Self::StopIntent => "StopIntent",
            Self::CancelIntent => "CancelIntent",
            Self::YesIntent => "YesIntent",
            Self::NoIntent => "NoIntent",
            Self::PauseIntent => "PauseIntent",
            Self::ResumeIntent => "ResumeIntent",
            Self::RepeatIntent => "RepeatIntent",
            Self::StartOverIntent => "StartOverIntent",
            Self::PreviousIntent => "PreviousIntent",
            Self::NextIntent => "NextIntent",
            Self::LoopOffIntent => "LoopOffIntent",
            Self::LoopOnIntent => "LoopOnIntent",
            Self::ShuffleOffIntent => "ShuffleOffIntent",
            Self::ShuffleOnIntent => "ShuffleOnIntent",
        }
    }

    /// All built-in intents, same order as [`BUILT_IN_INTENTS`]
    pub fn all() -> &'static [BuiltInIntent] {
        &[
            Self::HelpIntent,
            Self::StopIntent,
            Self::CancelIntent,
            Self::YesIntent,
            Self::NoIntent,
            Self::PauseIntent,
            Self::ResumeIntent,
            Self::RepeatIntent,
            Self::StartOverIntent,
            Self::PreviousIntent,
            Self::NextIntent,
            Self::LoopOffIntent,
            Self::LoopOnIntent,
            Self::ShuffleOffIntent,
            Self::ShuffleOnIntent,
        ]
    }

    /// Look up by exact name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|i| i.name() == name)
    }
}

impl FromStr for BuiltInIntent {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| Error::UnknownIntent(s.to_string()))
    }
}

impl std::fmt::Display for BuiltInIntent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Built-in intents allowed to diverge from their canonical samples
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverrideAllowList(BTreeSet<BuiltInIntent>);

impl OverrideAllowList {
    pub fn new(intents: impl IntoIterator<Item = BuiltInIntent>) -> Self {
        Self(intents.into_iter().collect())
    }

    /// Empty list: every divergence fails
    pub fn none() -> Self {
        Self(BTreeSet::new())
    }

    pub fn contains(&self, intent: BuiltInIntent) -> bool {
        self.0.contains(&intent)
    }

    pub fn iter(&self) -> impl Iterator<Item = BuiltInIntent> + '_ {
        self.0.iter().copied()
    }
}

impl Default for OverrideAllowList {
    /// Only StopIntent
    fn default() -> Self {
        Self::new([BuiltInIntent::StopIntent])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_match_constant_list() {
        let names: Vec<&str> = BuiltInIntent::all().iter().map(|i| i.name()).collect();
        assert_eq!(names, BUILT_IN_INTENTS);
        assert_eq!(names.len(), 15);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("YesIntent".parse::<BuiltInIntent>(), Ok(BuiltInIntent::YesIntent));
        assert_eq!(
            "yesintent".parse::<BuiltInIntent>(),
            Err(Error::UnknownIntent("yesintent".to_string()))
        );
    }

    #[test]
    fn test_default_override_list() {
        let overrides = OverrideAllowList::default();
        assert!(overrides.contains(BuiltInIntent::StopIntent));
        assert!(!overrides.contains(BuiltInIntent::HelpIntent));
        assert_eq!(overrides.iter().count(), 1);
        assert!(!OverrideAllowList::none().contains(BuiltInIntent::StopIntent));
    }

    #[test]
    fn test_serde_uses_intent_name() {
        let json = serde_json::to_string(&BuiltInIntent::StartOverIntent).unwrap();
        assert_eq!(json, "\"StartOverIntent\"");
    }
}

//! Core types for Dialogflow agent artifacts
//!
//! This crate provides the foundational pieces shared by the other crates:
//! - Locale catalog and the locale resolver for interaction files
//! - The reserved built-in intent names and their canonical samples per language
//! - Record types for generated intent and usersays files
//! - Error types

pub mod artifacts;
pub mod builtin;
pub mod error;
pub mod locale;

pub use artifacts::{
    DataSegment, IntentDefinition, IntentParameter, IntentResponse, ResponseMessage,
    SlotAnnotation, UsersaysRecord,
};
pub use builtin::{BuiltInCatalog, BuiltInIntent, OverrideAllowList, BUILT_IN_INTENTS};
pub use error::{Error, Result};
pub use locale::{is_known_locale, resolve, LocaleKey, LocaleResolver, DEFAULT_LOCALE, LOCALES};

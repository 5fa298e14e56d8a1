//! Validation of generated Dialogflow agent artifacts
//!
//! - [`BuiltInIntentValidator`]: built-in intent samples against the canonical catalog
//! - [`shape`]: generated intent definitions against declared expectations
//! - [`Runner`]: both, for whole interaction files, batch-concurrent
//!
//! Artifacts are read through an [`ArtifactSource`] so the checks run the same
//! against the file system or an in-memory fixture.

pub mod builtin;
pub mod report;
pub mod runner;
pub mod shape;
pub mod source;

pub use builtin::BuiltInIntentValidator;
pub use report::{IntentVerdict, InteractionReport, Verdict};
pub use runner::{InteractionFile, Runner};
pub use shape::{IntentExpectation, ShapeRule, ShapeViolation};
pub use source::{ArtifactSource, FsArtifactSource, InMemoryArtifactSource};

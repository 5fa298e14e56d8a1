//! Error types

use thiserror::Error;

/// Errors raised while resolving locales or validating generated artifacts
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// No catalog locale matched and the resolver has no fallback
    #[error("No known locale in file name: {file_name}")]
    UnknownLocale { file_name: String },

    /// The built-in catalog has no canonical samples for this intent and locale
    #[error("No canonical samples for {intent} in locale '{locale}'")]
    MissingCatalogEntry { intent: String, locale: String },

    /// Name is not one of the reserved built-in intents
    #[error("Unknown built-in intent: {0}")]
    UnknownIntent(String),

    /// A collaborator failed to supply file content
    #[error("Failed to read {path}: {message}")]
    FileRead { path: String, message: String },

    /// File content does not have the expected record shape
    #[error("Malformed artifact {path}: {message}")]
    MalformedArtifact { path: String, message: String },
}

impl Error {
    /// Whether this error points at a catalog or settings problem rather than an I/O failure
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::MissingCatalogEntry { .. } | Self::UnknownIntent(_) | Self::UnknownLocale { .. }
        )
    }
}

/// Result alias used across the workspace
pub type Result<T> = std::result::Result<T, Error>;

//! Locale catalog and locale resolution for interaction files
//!
//! Interaction files embed their locale in the file name (for example
//! `interaction-fr-ca.xlsx`). The resolver finds the first catalog locale that
//! occurs in the base name and reduces it to a language key (`fr`), which is the
//! suffix generated usersays files are named with.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::{Error, Result};

/// Supported platform locales, in resolution order
pub const LOCALES: &[&str] = &[
    "en-US", "en-AU", "en-CA", "en-GB", "en-IN", "de-DE", "es-ES", "fr-CA", "fr-FR", "it-IT",
    "ja-JP", "ko-KR", "nl-NL", "pt-BR",
];

/// Locale used when a file name carries none
pub const DEFAULT_LOCALE: &str = "en-us";

/// Length of the `-xx` region suffix removed from a matched locale
const REGION_SUFFIX_LEN: usize = 3;

static STANDARD_RESOLVER: Lazy<LocaleResolver> =
    Lazy::new(|| LocaleResolver::new(LOCALES.iter().copied(), Some(DEFAULT_LOCALE)));

/// Check whether a locale code is a member of the catalog (case-insensitive)
pub fn is_known_locale(code: &str) -> bool {
    LOCALES.iter().any(|l| l.eq_ignore_ascii_case(code))
}

/// Language key a locale resolves to (`"en-us"` becomes `"en"`)
///
/// Used as the `_usersays_<key>.json` suffix and as the lookup key into the
/// built-in catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct LocaleKey(String);

impl LocaleKey {
    /// Wrap an already truncated key
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into().to_lowercase())
    }

    /// Drop the region suffix of a locale code
    ///
    /// Returns `None` when nothing is left, so a short code never yields an empty key.
    pub fn from_locale(code: &str) -> Option<Self> {
        let lower = code.to_lowercase();
        let end = lower.len().saturating_sub(REGION_SUFFIX_LEN);
        match lower.get(..end) {
            Some(key) if !key.is_empty() => Some(Self(key.to_string())),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File name of the generated samples for an intent in this locale
    pub fn usersays_file_name(&self, intent: &str) -> String {
        format!("{}_usersays_{}.json", intent, self.0)
    }
}

impl From<String> for LocaleKey {
    fn from(key: String) -> Self {
        Self::new(key)
    }
}

impl From<LocaleKey> for String {
    fn from(key: LocaleKey) -> Self {
        key.0
    }
}

impl std::fmt::Display for LocaleKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for LocaleKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Resolves the working locale of an interaction file from its name
#[derive(Debug, Clone)]
pub struct LocaleResolver {
    /// Lower-cased catalog, order is the tie-break
    catalog: Vec<String>,
    fallback: Option<String>,
}

impl LocaleResolver {
    /// Create a resolver over a catalog with an optional fallback locale
    pub fn new<I, S>(catalog: I, fallback: Option<&str>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            catalog: catalog.into_iter().map(|l| l.as_ref().to_lowercase()).collect(),
            fallback: fallback.map(|f| f.to_lowercase()),
        }
    }

    /// Resolver over [`LOCALES`] falling back to [`DEFAULT_LOCALE`]
    pub fn standard() -> &'static LocaleResolver {
        &STANDARD_RESOLVER
    }

    /// Same catalog, no fallback: unmatched names become [`Error::UnknownLocale`]
    pub fn without_fallback(mut self) -> Self {
        self.fallback = None;
        self
    }

    pub fn catalog(&self) -> &[String] {
        &self.catalog
    }

    /// Every catalog match in the base name, truncated, in catalog order
    pub fn candidates(&self, file_name: &str) -> Vec<LocaleKey> {
        let base = base_name(file_name).to_lowercase();

        let mut keys: Vec<LocaleKey> = Vec::new();
        for locale in self.catalog.iter().filter(|l| base.contains(l.as_str())) {
            if let Some(key) = LocaleKey::from_locale(locale) {
                if !keys.contains(&key) {
                    keys.push(key);
                }
            }
        }
        keys
    }

    /// Resolve the working locale key of an interaction file
    ///
    /// Several matches resolve to the first one in catalog order.
    pub fn resolve(&self, file_name: &str) -> Result<LocaleKey> {
        if let Some(first) = self.candidates(file_name).into_iter().next() {
            return Ok(first);
        }

        match self.fallback.as_deref().and_then(LocaleKey::from_locale) {
            Some(key) => {
                tracing::debug!(file = %file_name, locale = %key, "No locale in file name, using fallback");
                Ok(key)
            }
            None => Err(Error::UnknownLocale {
                file_name: base_name(file_name).to_string(),
            }),
        }
    }
}

/// Resolve with the standard catalog and fallback
pub fn resolve(file_name: &str) -> LocaleKey {
    LocaleResolver::standard()
        .resolve(file_name)
        .unwrap_or_else(|_| default_key())
}

fn default_key() -> LocaleKey {
    LocaleKey::from_locale(DEFAULT_LOCALE).unwrap_or_else(|| LocaleKey::new(DEFAULT_LOCALE))
}

fn base_name(file_name: &str) -> &str {
    Path::new(file_name)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(file_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_without_locale_falls_back() {
        assert_eq!(resolve("interaction.xlsx").as_str(), "en");
        assert_eq!(resolve("").as_str(), "en");
        assert_eq!(resolve("assets/synonyms.json").as_str(), "en");
    }

    #[test]
    fn test_resolve_single_locale() {
        assert_eq!(resolve("NumberIntent_usersays_en-us.json").as_str(), "en");
        assert_eq!(resolve("interaction-de-DE.xlsx").as_str(), "de");
        assert_eq!(resolve("test/assets/interaction-ja-jp.json").as_str(), "ja");
        assert_eq!(resolve("PT-BR-interaction.json").as_str(), "pt");
    }

    #[test]
    fn test_resolve_uses_base_name_only() {
        assert_eq!(resolve("out/fr-fr/interaction.xlsx").as_str(), "en");
    }

    #[test]
    fn test_resolve_first_catalog_match_wins() {
        // es-es is listed before fr-fr in the catalog
        assert_eq!(resolve("fr-fr_es-es.json").as_str(), "es");

        let resolver = LocaleResolver::new(["fr-fr", "es-es"], Some("en-us"));
        assert_eq!(resolver.resolve("fr-fr_es-es.json").unwrap().as_str(), "fr");
        assert_eq!(resolver.resolve("es-es_fr-fr.json").unwrap().as_str(), "fr");
    }

    #[test]
    fn test_resolve_example_catalog() {
        let resolver = LocaleResolver::new(["en-us", "es-es"], Some("en-us"));
        assert_eq!(
            resolver.resolve("NumberIntent_usersays_en-us.json").unwrap().as_str(),
            "en"
        );
        assert_eq!(resolver.resolve("agent-es-es.json").unwrap().as_str(), "es");
    }

    #[test]
    fn test_resolved_key_is_stable() {
        let key = resolve("interaction-it-it.json");
        assert_eq!(key.as_str(), "it");
        assert_eq!(LocaleKey::new(key.as_str()), key);
        assert_eq!(
            key.usersays_file_name("YesIntent"),
            LocaleKey::new("IT").usersays_file_name("YesIntent")
        );
    }

    #[test]
    fn test_candidates_deduplicate_language() {
        let resolver = LocaleResolver::standard();
        let keys = resolver.candidates("en-gb-en-us.json");
        assert_eq!(keys, vec![LocaleKey::new("en")]);
    }

    #[test]
    fn test_without_fallback_reports_unknown_locale() {
        let resolver = LocaleResolver::standard().clone().without_fallback();
        let err = resolver.resolve("dir/interaction.xlsx").unwrap_err();
        assert_eq!(
            err,
            Error::UnknownLocale {
                file_name: "interaction.xlsx".to_string()
            }
        );
    }

    #[test]
    fn test_short_fallback_is_rejected() {
        let resolver = LocaleResolver::new(["en-us"], Some("en"));
        assert!(resolver.resolve("interaction.xlsx").is_err());
    }

    #[test]
    fn test_locale_key_from_locale() {
        assert_eq!(LocaleKey::from_locale("en-US"), Some(LocaleKey::new("en")));
        assert_eq!(LocaleKey::from_locale("en"), None);
        assert_eq!(LocaleKey::from_locale(""), None);
    }

    #[test]
    fn test_usersays_file_name() {
        let key = LocaleKey::new("en");
        assert_eq!(key.usersays_file_name("HelpIntent"), "HelpIntent_usersays_en.json");
    }

    #[test]
    fn test_is_known_locale() {
        assert!(is_known_locale("en-us"));
        assert!(is_known_locale("PT-BR"));
        assert!(!is_known_locale("xx-yy"));
    }

    #[test]
    fn test_locale_key_serde_lowercases() {
        let key: LocaleKey = serde_json::from_str("\"EN\"").unwrap();
        assert_eq!(key, LocaleKey::new("en"));
        assert!(crate::BuiltInCatalog::standard().has_locale(&key));
        assert_eq!(serde_json::to_string(&key).unwrap(), "\"en\"");
    }
}

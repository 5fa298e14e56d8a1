//! Canonical built-in intent samples per language

use once_cell::sync::Lazy;
use std::collections::HashMap;

use super::languages::{self, LanguageTable};
use super::BuiltInIntent;
use crate::{Error, LocaleKey, Result};

static STANDARD_CATALOG: Lazy<BuiltInCatalog> = Lazy::new(|| {
    let mut catalog = BuiltInCatalog::default();
    for (key, table) in languages::TABLES {
        catalog.insert_table(key, table);
    }
    catalog
});

/// Canonical sample utterances keyed by locale key, then intent
#[derive(Debug, Clone, Default)]
pub struct BuiltInCatalog {
    tables: HashMap<LocaleKey, HashMap<BuiltInIntent, Vec<String>>>,
}

impl BuiltInCatalog {
    /// The catalog shipped with the crate, initialized once
    pub fn standard() -> &'static BuiltInCatalog {
        &STANDARD_CATALOG
    }

    /// Build a catalog from `(locale key, intent, samples)` entries
    ///
    /// Repeated entries for the same intent and locale are appended.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (LocaleKey, BuiltInIntent, Vec<S>)>,
        S: Into<String>,
    {
        let mut catalog = Self::default();
        for (locale, intent, samples) in entries {
            catalog
                .tables
                .entry(locale)
                .or_default()
                .entry(intent)
                .or_default()
                .extend(samples.into_iter().map(Into::into));
        }
        catalog
    }

    fn insert_table(&mut self, key: &str, table: &LanguageTable) {
        let intents = self.tables.entry(LocaleKey::new(key)).or_default();
        for (intent, samples) in table.iter() {
            intents
                .entry(*intent)
                .or_default()
                .extend(samples.iter().map(|s| s.to_string()));
        }
    }

    /// Whether any canonical samples exist for this locale
    pub fn has_locale(&self, locale: &LocaleKey) -> bool {
        self.tables.contains_key(locale)
    }

    /// Locale keys with a table, sorted
    pub fn locales(&self) -> Vec<&LocaleKey> {
        let mut keys: Vec<_> = self.tables.keys().collect();
        keys.sort();
        keys
    }

    /// Canonical samples for an intent, duplicates removed, first occurrence kept
    pub fn samples(&self, intent: BuiltInIntent, locale: &LocaleKey) -> Result<Vec<String>> {
        let raw = self
            .tables
            .get(locale)
            .and_then(|t| t.get(&intent))
            .ok_or_else(|| Error::MissingCatalogEntry {
                intent: intent.name().to_string(),
                locale: locale.to_string(),
            })?;

        let mut unique: Vec<String> = Vec::with_capacity(raw.len());
        for sample in raw {
            if !unique.contains(sample) {
                unique.push(sample.clone());
            }
        }
        Ok(unique)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog_covers_every_intent() {
        let catalog = BuiltInCatalog::standard();
        for key in ["en", "de", "es", "fr", "it", "ja", "pt"] {
            let locale = LocaleKey::new(key);
            assert!(catalog.has_locale(&locale), "missing table for {}", key);
            for intent in BuiltInIntent::all() {
                let samples = catalog.samples(*intent, &locale).unwrap();
                assert!(!samples.is_empty(), "{} has no samples in {}", intent, key);
            }
        }
    }

    #[test]
    fn test_standard_yes_samples() {
        let samples = BuiltInCatalog::standard()
            .samples(BuiltInIntent::YesIntent, &LocaleKey::new("en"))
            .unwrap();
        assert_eq!(samples[0], "yes");
    }

    #[test]
    fn test_missing_locale() {
        let err = BuiltInCatalog::standard()
            .samples(BuiltInIntent::HelpIntent, &LocaleKey::new("ko"))
            .unwrap_err();
        assert!(matches!(err, Error::MissingCatalogEntry { .. }));
    }

    #[test]
    fn test_missing_intent_in_locale() {
        let catalog = BuiltInCatalog::from_entries([(
            LocaleKey::new("en"),
            BuiltInIntent::YesIntent,
            vec!["yes"],
        )]);
        assert!(catalog.samples(BuiltInIntent::YesIntent, &LocaleKey::new("en")).is_ok());
        let err = catalog
            .samples(BuiltInIntent::NoIntent, &LocaleKey::new("en"))
            .unwrap_err();
        assert_eq!(
            err,
            Error::MissingCatalogEntry {
                intent: "NoIntent".to_string(),
                locale: "en".to_string(),
            }
        );
    }

    #[test]
    fn test_samples_are_deduplicated_in_order() {
        let catalog = BuiltInCatalog::from_entries([
            (LocaleKey::new("en"), BuiltInIntent::YesIntent, vec!["yes", "yeah", "yes"]),
            (LocaleKey::new("en"), BuiltInIntent::YesIntent, vec!["yeah", "sure"]),
        ]);
        let samples = catalog
            .samples(BuiltInIntent::YesIntent, &LocaleKey::new("en"))
            .unwrap();
        assert_eq!(samples, vec!["yes", "yeah", "sure"]);
    }

    #[test]
    fn test_locales_sorted() {
        let keys: Vec<&str> = BuiltInCatalog::standard()
            .locales()
            .into_iter()
            .map(|k| k.as_str())
            .collect();
        assert_eq!(keys, vec!["de", "en", "es", "fr", "it", "ja", "pt"]);
    }
}

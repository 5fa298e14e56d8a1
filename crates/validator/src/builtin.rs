//! Built-in intent sample validation
//!
//! For every built-in intent generated in a locale, the leading text of each
//! phrase in `<Intent>_usersays_<locale>.json` must equal the canonical catalog
//! samples, in order. Intents on the override allow-list may diverge.

use std::collections::HashSet;
use std::path::Path;

use dialogflow_agent_core::{
    BuiltInCatalog, BuiltInIntent, Error, LocaleKey, OverrideAllowList, Result, UsersaysRecord,
};

use crate::report::{IntentVerdict, Verdict};
use crate::source::ArtifactSource;

/// Reconciles generated built-in samples against a catalog
#[derive(Debug, Clone)]
pub struct BuiltInIntentValidator<'c> {
    catalog: &'c BuiltInCatalog,
    overrides: OverrideAllowList,
}

impl BuiltInIntentValidator<'static> {
    /// Standard catalog with the default allow-list
    pub fn standard() -> Self {
        Self::new(BuiltInCatalog::standard(), OverrideAllowList::default())
    }
}

impl<'c> BuiltInIntentValidator<'c> {
    pub fn new(catalog: &'c BuiltInCatalog, overrides: OverrideAllowList) -> Self {
        Self { catalog, overrides }
    }

    pub fn overrides(&self) -> &OverrideAllowList {
        &self.overrides
    }

    /// Expected usersays file name of every built-in intent
    pub fn expected_files(&self, locale: &LocaleKey) -> Vec<(BuiltInIntent, String)> {
        BuiltInIntent::all()
            .iter()
            .map(|intent| (*intent, locale.usersays_file_name(intent.name())))
            .collect()
    }

    /// Built-in intents that have a usersays file in the listing
    ///
    /// Each intent appears once, in built-in order.
    pub fn generated_intents<S: AsRef<str>>(
        &self,
        listing: &[S],
        locale: &LocaleKey,
    ) -> Vec<BuiltInIntent> {
        let present: HashSet<&str> = listing.iter().map(|f| f.as_ref()).collect();
        self.expected_files(locale)
            .into_iter()
            .filter(|(_, file)| present.contains(file.as_str()))
            .map(|(intent, _)| intent)
            .collect()
    }

    /// Compare the decoded usersays records of one intent with the catalog
    pub fn check(
        &self,
        intent: BuiltInIntent,
        locale: &LocaleKey,
        records: &[UsersaysRecord],
    ) -> Result<IntentVerdict> {
        let path = locale.usersays_file_name(intent.name());
        self.check_file(&path, intent, locale, records)
    }

    /// Same as [`check`](Self::check), errors name `path`
    pub fn check_file(
        &self,
        path: &str,
        intent: BuiltInIntent,
        locale: &LocaleKey,
        records: &[UsersaysRecord],
    ) -> Result<IntentVerdict> {
        let generated = leading_texts(path, records)?;
        let expected = self.catalog.samples(intent, locale)?;

        let verdict = if expected == generated {
            Verdict::Pass
        } else if self.overrides.contains(intent) {
            Verdict::Overridden
        } else {
            Verdict::Fail
        };

        match verdict {
            Verdict::Pass => tracing::debug!(intent = %intent, locale = %locale, "Built-in samples match"),
            Verdict::Overridden => {
                tracing::debug!(intent = %intent, locale = %locale, "Built-in samples overridden")
            }
            Verdict::Fail => tracing::warn!(
                intent = %intent,
                locale = %locale,
                expected = expected.len(),
                generated = generated.len(),
                "Built-in samples differ from catalog"
            ),
        }

        Ok(IntentVerdict {
            intent,
            verdict,
            expected,
            generated,
        })
    }

    /// Validate every built-in intent generated in `dir`
    ///
    /// Read and decode failures are returned as errors, mismatches as verdicts.
    pub async fn validate_directory<A>(
        &self,
        source: &A,
        dir: &Path,
        locale: &LocaleKey,
    ) -> Result<Vec<IntentVerdict>>
    where
        A: ArtifactSource + ?Sized,
    {
        let listing = source.list(dir).await?;
        let intents = self.generated_intents(&listing, locale);
        tracing::debug!(dir = %dir.display(), locale = %locale, count = intents.len(), "Validating built-in intents");

        let mut verdicts = Vec::with_capacity(intents.len());
        for intent in intents {
            let path = dir.join(locale.usersays_file_name(intent.name()));
            let content = source.read(&path).await?;
            let path = path.display().to_string();
            let records = UsersaysRecord::list_from_json(&path, &content)?;
            verdicts.push(self.check_file(&path, intent, locale, &records)?);
        }
        Ok(verdicts)
    }
}

/// Leading text of every phrase, in file order
fn leading_texts(path: &str, records: &[UsersaysRecord]) -> Result<Vec<String>> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            record
                .leading_text()
                .map(str::to_string)
                .ok_or_else(|| Error::MalformedArtifact {
                    path: path.to_string(),
                    message: format!("phrase {} has no data segments", index),
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use dialogflow_agent_core::DataSegment;

    fn phrases(texts: &[&str]) -> Vec<UsersaysRecord> {
        texts
            .iter()
            .map(|t| UsersaysRecord {
                data: vec![DataSegment::literal(*t)],
            })
            .collect()
    }

    fn yes_catalog() -> BuiltInCatalog {
        BuiltInCatalog::from_entries([
            (LocaleKey::new("en"), BuiltInIntent::YesIntent, vec!["yes", "yeah"]),
            (LocaleKey::new("en"), BuiltInIntent::HelpIntent, vec!["help", "help me", "help"]),
            (LocaleKey::new("en"), BuiltInIntent::StopIntent, vec!["stop"]),
        ])
    }

    #[test]
    fn test_expected_files() {
        let validator = BuiltInIntentValidator::standard();
        let files = validator.expected_files(&LocaleKey::new("en"));
        assert_eq!(files.len(), 15);
        assert_eq!(files[0], (BuiltInIntent::HelpIntent, "HelpIntent_usersays_en.json".to_string()));
    }

    #[test]
    fn test_generated_intents_intersects_listing() {
        let validator = BuiltInIntentValidator::standard();
        let listing = vec![
            "YesIntent_usersays_en.json",
            "HelpIntent_usersays_en.json",
            "HelpIntent_usersays_en.json",
            "HelpIntent_usersays_de.json",
            "HelpIntent.json",
            "NumberIntent_usersays_en.json",
        ];
        let intents = validator.generated_intents(&listing, &LocaleKey::new("en"));
        assert_eq!(intents, vec![BuiltInIntent::HelpIntent, BuiltInIntent::YesIntent]);
    }

    #[test]
    fn test_matching_samples_pass() {
        let catalog = yes_catalog();
        let validator = BuiltInIntentValidator::new(&catalog, OverrideAllowList::default());
        let verdict = validator
            .check(BuiltInIntent::YesIntent, &LocaleKey::new("en"), &phrases(&["yes", "yeah"]))
            .unwrap();
        assert_eq!(verdict.verdict, Verdict::Pass);
    }

    #[test]
    fn test_order_matters() {
        let catalog = yes_catalog();
        let validator = BuiltInIntentValidator::new(&catalog, OverrideAllowList::default());
        let verdict = validator
            .check(BuiltInIntent::YesIntent, &LocaleKey::new("en"), &phrases(&["yeah", "yes"]))
            .unwrap();
        assert_eq!(verdict.verdict, Verdict::Fail);
        assert_eq!(verdict.intent, BuiltInIntent::YesIntent);
    }

    #[test]
    fn test_catalog_duplicates_are_ignored() {
        let catalog = yes_catalog();
        let validator = BuiltInIntentValidator::new(&catalog, OverrideAllowList::default());
        let locale = LocaleKey::new("en");

        let verdict = validator
            .check(BuiltInIntent::HelpIntent, &locale, &phrases(&["help", "help me"]))
            .unwrap();
        assert_eq!(verdict.verdict, Verdict::Pass);

        let verdict = validator
            .check(BuiltInIntent::HelpIntent, &locale, &phrases(&["help", "help me", "help"]))
            .unwrap();
        assert_eq!(verdict.verdict, Verdict::Fail);
    }

    #[test]
    fn test_help_intent_divergence_fails() {
        let catalog = yes_catalog();
        let validator = BuiltInIntentValidator::new(&catalog, OverrideAllowList::default());
        let verdict = validator
            .check(BuiltInIntent::HelpIntent, &LocaleKey::new("en"), &phrases(&["assist me"]))
            .unwrap();
        assert!(!verdict.passed());
        assert_eq!(verdict.intent.name(), "HelpIntent");
        assert_eq!(verdict.generated, vec!["assist me"]);
    }

    #[test]
    fn test_stop_intent_override() {
        let catalog = yes_catalog();
        let validator = BuiltInIntentValidator::new(&catalog, OverrideAllowList::default());
        let locale = LocaleKey::new("en");

        let verdict = validator
            .check(BuiltInIntent::StopIntent, &locale, &phrases(&["halt", "enough"]))
            .unwrap();
        assert_eq!(verdict.verdict, Verdict::Overridden);
        assert!(verdict.passed());

        let strict = BuiltInIntentValidator::new(&catalog, OverrideAllowList::none());
        let verdict = strict
            .check(BuiltInIntent::StopIntent, &locale, &phrases(&["halt"]))
            .unwrap();
        assert_eq!(verdict.verdict, Verdict::Fail);
    }

    #[test]
    fn test_missing_catalog_entry_is_an_error() {
        let catalog = yes_catalog();
        let validator = BuiltInIntentValidator::new(&catalog, OverrideAllowList::default());

        let err = validator
            .check(BuiltInIntent::NoIntent, &LocaleKey::new("en"), &phrases(&["no"]))
            .unwrap_err();
        assert!(matches!(err, Error::MissingCatalogEntry { .. }));

        // An override does not turn a missing expectation into a pass
        let err = validator
            .check(BuiltInIntent::StopIntent, &LocaleKey::new("ko"), &phrases(&["stop"]))
            .unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_phrase_without_data_is_malformed() {
        let catalog = yes_catalog();
        let validator = BuiltInIntentValidator::new(&catalog, OverrideAllowList::default());
        let records = vec![UsersaysRecord { data: vec![] }];
        let err = validator
            .check(BuiltInIntent::YesIntent, &LocaleKey::new("en"), &records)
            .unwrap_err();
        assert!(matches!(err, Error::MalformedArtifact { ref path, .. } if path == "YesIntent_usersays_en.json"));
    }

    #[test]
    fn test_standard_catalog_round() {
        let validator = BuiltInIntentValidator::standard();
        let locale = LocaleKey::new("en");
        let canonical = BuiltInCatalog::standard()
            .samples(BuiltInIntent::NextIntent, &locale)
            .unwrap();
        let texts: Vec<&str> = canonical.iter().map(String::as_str).collect();
        let verdict = validator
            .check(BuiltInIntent::NextIntent, &locale, &phrases(&texts))
            .unwrap();
        assert_eq!(verdict.verdict, Verdict::Pass);
    }

    /// Lists one usersays file that cannot be read
    struct UnreadableSource;

    #[async_trait::async_trait]
    impl ArtifactSource for UnreadableSource {
        async fn list(&self, _dir: &Path) -> Result<Vec<String>> {
            Ok(vec!["YesIntent_usersays_en.json".to_string()])
        }

        async fn read(&self, path: &Path) -> Result<String> {
            Err(Error::FileRead {
                path: path.display().to_string(),
                message: "permission denied".to_string(),
            })
        }
    }

    #[tokio::test]
    async fn test_unreadable_listed_file_is_an_error() {
        let validator = BuiltInIntentValidator::standard();
        let err = validator
            .validate_directory(&UnreadableSource, Path::new("out/intents"), &LocaleKey::new("en"))
            .await
            .unwrap_err();
        assert!(
            matches!(err, Error::FileRead { ref path, .. } if path == "out/intents/YesIntent_usersays_en.json")
        );
    }

    #[tokio::test]
    async fn test_invalid_usersays_json_is_an_error() {
        let source = crate::source::InMemoryArtifactSource::new()
            .with_file("out/intents/HelpIntent_usersays_en.json", "not json")
            .with_file("out/intents/YesIntent_usersays_en.json", r#"[{ "data": [{ "text": "yes" }] }]"#);

        let validator = BuiltInIntentValidator::standard();
        let err = validator
            .validate_directory(&source, Path::new("out/intents"), &LocaleKey::new("en"))
            .await
            .unwrap_err();
        assert!(
            matches!(err, Error::MalformedArtifact { ref path, .. } if path == "out/intents/HelpIntent_usersays_en.json")
        );
    }

    #[tokio::test]
    async fn test_empty_phrase_error_uses_directory_path() {
        let source = crate::source::InMemoryArtifactSource::new()
            .with_file("out/intents/NoIntent_usersays_en.json", r#"[{ "data": [] }]"#);

        let validator = BuiltInIntentValidator::standard();
        let err = validator
            .validate_directory(&source, Path::new("out/intents"), &LocaleKey::new("en"))
            .await
            .unwrap_err();
        assert!(
            matches!(err, Error::MalformedArtifact { ref path, .. } if path == "out/intents/NoIntent_usersays_en.json")
        );
    }
}

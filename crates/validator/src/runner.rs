//! Validation of whole interaction files
//!
//! An interaction file `dir/interaction-de-de.json` has its artifacts under
//! `dir/<speech_path>/`. Each file is independent, so a batch runs concurrently.

use futures::stream::{self, StreamExt};
use std::path::{Path, PathBuf};

use dialogflow_agent_config::{AgentConfiguration, ValidationSettings};
use dialogflow_agent_core::{
    Error, IntentDefinition, LocaleKey, LocaleResolver, Result, UsersaysRecord,
};

use crate::builtin::BuiltInIntentValidator;
use crate::report::InteractionReport;
use crate::shape::{IntentExpectation, ShapeViolation};
use crate::source::ArtifactSource;

/// One interaction definition whose generated artifacts are checked
#[derive(Debug, Clone, PartialEq)]
pub struct InteractionFile {
    pub path: PathBuf,
    /// Overrides the configured output folder
    pub speech_path: Option<String>,
    pub expectations: Vec<IntentExpectation>,
}

impl InteractionFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            speech_path: None,
            expectations: Vec::new(),
        }
    }

    pub fn with_speech_path(mut self, speech_path: impl Into<String>) -> Self {
        self.speech_path = Some(speech_path.into());
        self
    }

    pub fn with_expectations(mut self, expectations: Vec<IntentExpectation>) -> Self {
        self.expectations = expectations;
        self
    }
}

/// Checks interaction files against their generated artifacts
pub struct Runner<'a, A: ArtifactSource + ?Sized> {
    source: &'a A,
    resolver: &'a LocaleResolver,
    validator: BuiltInIntentValidator<'a>,
    settings: ValidationSettings,
}

impl<'a, A: ArtifactSource + ?Sized> Runner<'a, A> {
    pub fn new(source: &'a A, settings: ValidationSettings) -> Self {
        Self {
            source,
            resolver: LocaleResolver::standard(),
            validator: BuiltInIntentValidator::standard(),
            settings,
        }
    }

    pub fn with_resolver(mut self, resolver: &'a LocaleResolver) -> Self {
        self.resolver = resolver;
        self
    }

    pub fn with_validator(mut self, validator: BuiltInIntentValidator<'a>) -> Self {
        self.validator = validator;
        self
    }

    /// Locale key the artifacts of this file are named with
    pub fn resolve_locale(&self, file: &InteractionFile) -> Result<LocaleKey> {
        self.resolver.resolve(&file.path.to_string_lossy())
    }

    /// Output folder of an interaction file
    pub fn output_dir(&self, file: &InteractionFile) -> PathBuf {
        let speech_path = file
            .speech_path
            .as_deref()
            .unwrap_or(&self.settings.speech_path);
        file.path
            .parent()
            .unwrap_or_else(|| Path::new(""))
            .join(speech_path)
    }

    pub fn intents_dir(&self, file: &InteractionFile) -> PathBuf {
        self.output_dir(file).join(&self.settings.intents_dir)
    }

    /// Resolve the locale, validate built-in samples, then apply shape expectations
    pub async fn validate_interaction(&self, file: &InteractionFile) -> Result<InteractionReport> {
        let locale = self.resolve_locale(file)?;
        let intents_dir = self.intents_dir(file);
        tracing::info!(
            file = %file.path.display(),
            locale = %locale,
            intents_dir = %intents_dir.display(),
            "Validating interaction file"
        );

        let mut report = InteractionReport::new(file.path.clone(), locale.clone());
        report.intents = self
            .validator
            .validate_directory(self.source, &intents_dir, &locale)
            .await?;

        if !file.expectations.is_empty() {
            report.shape_violations = self.check_shapes(file, &intents_dir, &locale).await?;
        }

        if report.is_success() {
            tracing::info!(file = %file.path.display(), "{}", report.summary());
        } else {
            tracing::warn!(
                file = %file.path.display(),
                failed = ?report.failed_intents(),
                "{}",
                report.summary()
            );
        }
        Ok(report)
    }

    async fn check_shapes(
        &self,
        file: &InteractionFile,
        intents_dir: &Path,
        locale: &LocaleKey,
    ) -> Result<Vec<ShapeViolation>> {
        let agent = if file.expectations.iter().any(|e| e.start_intent) {
            Some(self.load_agent(file).await?)
        } else {
            None
        };

        let mut violations = Vec::new();
        for expectation in &file.expectations {
            let path = intents_dir.join(format!("{}.json", expectation.intent));
            let content = self.source.read(&path).await?;
            let definition = IntentDefinition::from_json(&path.display().to_string(), &content)?;

            let samples = if expectation.needs_samples() {
                let path = intents_dir.join(locale.usersays_file_name(&expectation.intent));
                let content = self.source.read(&path).await?;
                Some(UsersaysRecord::list_from_json(&path.display().to_string(), &content)?)
            } else {
                None
            };

            violations.extend(expectation.apply(&definition, samples.as_deref(), agent.as_ref()));
        }
        Ok(violations)
    }

    async fn load_agent(&self, file: &InteractionFile) -> Result<AgentConfiguration> {
        let path = self.output_dir(file).join(&self.settings.agent_file);
        let content = self.source.read(&path).await?;
        AgentConfiguration::from_json(&content).map_err(|e| Error::MalformedArtifact {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Validate a batch concurrently; results keep the input order
    ///
    /// A hard error on one file does not stop the others.
    pub async fn validate_all(&self, files: &[InteractionFile]) -> Vec<Result<InteractionReport>> {
        let concurrency = self.settings.concurrency.max(1);

        let mut results: Vec<(usize, Result<InteractionReport>)> =
            stream::iter(files.iter().enumerate())
                .map(|(index, file)| async move { (index, self.validate_interaction(file).await) })
                .buffer_unordered(concurrency)
                .collect()
                .await;

        results.sort_by_key(|(index, _)| *index);
        results.into_iter().map(|(_, result)| result).collect()
    }
}

//! `dialogflow-check` entry point
//!
//! Resolves interaction file locales, validates generated artifacts and prints
//! the default agent configuration.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

use dialogflow_agent_config::{load_settings, AgentConfiguration, Settings};
use dialogflow_agent_core::LocaleResolver;
use dialogflow_agent_validator::{FsArtifactSource, IntentExpectation, InteractionFile, Runner};

#[derive(Debug, Parser)]
#[command(name = "dialogflow-check")]
#[command(about = "Checks generated Dialogflow agent artifacts", version)]
struct Cli {
    /// Settings file, layered over config/default and under environment variables
    #[arg(long, global = true, env = "DIALOGFLOW_AGENT_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the locale key each interaction file resolves to
    Resolve {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Validate the artifacts generated for each interaction file
    Validate {
        /// Output folder relative to each interaction file
        #[arg(long)]
        speech_path: Option<String>,
        /// YAML list of intent expectations applied to every file
        #[arg(long)]
        expectations: Option<PathBuf>,
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Print the default agent configuration as JSON
    Defaults {
        /// Supported locale, repeatable
        #[arg(long = "locale")]
        locales: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let settings = load_settings(cli.config.as_deref()).context("failed to load settings")?;
    init_tracing(&settings);
    tracing::debug!(config = ?cli.config, "Settings loaded");

    match cli.command {
        Command::Resolve { files } => {
            run_resolve(&files)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Validate {
            speech_path,
            expectations,
            files,
        } => {
            let expectations = match expectations {
                Some(path) => load_expectations(&path)?,
                None => Vec::new(),
            };
            run_validate(&settings, speech_path, expectations, files).await
        }
        Command::Defaults { locales } => {
            run_defaults(&settings, &locales)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn init_tracing(settings: &Settings) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = &settings.observability.log_level;
        format!("dialogflow_agent={},dialogflow_check={}", level, level).into()
    });

    let subscriber = tracing_subscriber::registry().with(env_filter);
    let fmt_layer = if settings.observability.log_json {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .boxed()
    };
    subscriber.with(fmt_layer).init();
}

fn run_resolve(files: &[PathBuf]) -> Result<()> {
    let resolver = LocaleResolver::standard();
    for file in files {
        let name = file.to_string_lossy();
        let key = resolver
            .resolve(&name)
            .with_context(|| format!("cannot resolve locale of {}", name))?;
        println!("{}\t{}", name, key);
    }
    Ok(())
}

fn load_expectations(path: &Path) -> Result<Vec<IntentExpectation>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read expectations {}", path.display()))?;
    serde_yaml::from_str(&content)
        .with_context(|| format!("invalid expectations {}", path.display()))
}

async fn run_validate(
    settings: &Settings,
    speech_path: Option<String>,
    expectations: Vec<IntentExpectation>,
    files: Vec<PathBuf>,
) -> Result<ExitCode> {
    let files: Vec<InteractionFile> = files
        .into_iter()
        .map(|path| {
            let file = InteractionFile::new(path).with_expectations(expectations.clone());
            match &speech_path {
                Some(speech_path) => file.with_speech_path(speech_path.clone()),
                None => file,
            }
        })
        .collect();

    let source = FsArtifactSource::new();
    let runner = Runner::new(&source, settings.validation.clone());
    let results = runner.validate_all(&files).await;

    let mut failed = 0usize;
    for (file, result) in files.iter().zip(results) {
        match result {
            Ok(report) => {
                println!("{} [{}]", file.path.display(), report.locale);
                for verdict in &report.intents {
                    println!("  {}", verdict);
                }
                for violation in &report.shape_violations {
                    println!("  {}", violation);
                }
                if !report.is_success() {
                    failed += 1;
                }
            }
            Err(e) => {
                println!("{}: ERROR {}", file.path.display(), e);
                failed += 1;
            }
        }
    }

    tracing::info!(files = files.len(), failed, "Validation finished");
    if failed == 0 {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

fn run_defaults(settings: &Settings, locales: &[String]) -> Result<()> {
    let mut agent = AgentConfiguration::from_options(&settings.agent);
    if !locales.is_empty() {
        agent = agent.with_supported_languages(locales)?;
    }
    agent.validate()?;
    println!("{}", agent.to_json_pretty()?);
    Ok(())
}

//! Single-pass resolution of a description into a pattern report.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, info};

use crate::report::{Report, Source, TestRun};
use crate::{Error, Generator, PatternResult, Result, dictionary, parser, prompt, tester};

/// Settings for the generation path, built once per invocation.
#[derive(Debug, Clone, Default)]
pub struct GenerationSettings {
    /// API key for the generation service. Only required on a dictionary miss.
    pub credential: Option<String>,
}

impl GenerationSettings {
    #[must_use]
    pub const fn new(credential: Option<String>) -> Self {
        Self { credential }
    }

    fn credential(&self) -> Option<&str> {
        self.credential
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }
}

/// Supplies [`GenerationSettings`] on demand.
///
/// The orchestrator only asks on a dictionary miss, so a source backed by a
/// config file is never read for dry runs or dictionary hits.
pub trait SettingsSource: Send + Sync {
    fn generation_settings(&self) -> Result<GenerationSettings>;
}

impl SettingsSource for GenerationSettings {
    fn generation_settings(&self) -> Result<GenerationSettings> {
        Ok(self.clone())
    }
}

impl<T> SettingsSource for Arc<T>
where
    T: SettingsSource + ?Sized,
{
    fn generation_settings(&self) -> Result<GenerationSettings> {
        (**self).generation_settings()
    }
}

/// What a single invocation should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveOptions {
    /// Return the prompt text without consulting the dictionary or the service.
    DryRun,
    /// Resolve a pattern, optionally testing it and including its explanation.
    Resolve { test: Option<String>, explain: bool },
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self::Resolve {
            test: None,
            explain: false,
        }
    }
}

/// Output of [`Orchestrator::resolve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Prompt(String),
    Report(Report),
}

impl Resolution {
    /// The resolved pattern, if this was not a dry run.
    #[must_use]
    pub const fn result(&self) -> Option<&PatternResult> {
        match self {
            Self::Prompt(_) => None,
            Self::Report(report) => Some(&report.result),
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Prompt(prompt) => f.write_str(prompt),
            Self::Report(report) => fmt::Display::fmt(report, f),
        }
    }
}

pub struct Orchestrator<G, S = GenerationSettings>
where
    G: Generator,
    S: SettingsSource,
{
    generator: G,
    settings: S,
}

impl<G, S> Orchestrator<G, S>
where
    G: Generator,
    S: SettingsSource,
{
    pub const fn new(generator: G, settings: S) -> Self {
        Self {
            generator,
            settings,
        }
    }

    pub async fn resolve(&self, description: &str, options: &ResolveOptions) -> Result<Resolution> {
        if description.trim().is_empty() {
            return Err(Error::Usage("description must not be empty".to_string()));
        }

        let (test, explain) = match options {
            ResolveOptions::DryRun => {
                info!("Dry run: building prompt only");
                return Ok(Resolution::Prompt(prompt::build(description)));
            }
            ResolveOptions::Resolve { test, explain } => (test, *explain),
        };

        let (result, source) = match dictionary::lookup(description) {
            Some(result) => {
                info!("Found pattern in common patterns database");
                (result, Source::Dictionary)
            }
            None => (self.generate(description).await?, Source::Generated),
        };

        let test = match test {
            Some(input) => Some(TestRun {
                input: input.clone(),
                outcome: tester::test(result.pattern(), input)?,
            }),
            None => None,
        };

        Ok(Resolution::Report(Report {
            result,
            source,
            explain,
            test,
        }))
    }

    async fn generate(&self, description: &str) -> Result<PatternResult> {
        let settings = self.settings.generation_settings()?;
        let credential = settings.credential().ok_or(Error::CredentialMissing)?;

        let prompt = prompt::build(description);
        debug!("Built prompt: {} bytes", prompt.len());

        info!("Generating regex for: {description}");
        let raw = self.generator.generate(&prompt, credential).await?;
        debug!("Received {} bytes from generator", raw.len());

        parser::parse(&raw)
    }
}

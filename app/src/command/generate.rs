use async_trait::async_trait;
use regexai_config::ConfigSource;
use regexai_core::{Error, Generator, Orchestrator, ResolveOptions};
use regexai_providers::OpenAiProvider;
use std::io::Write;
use std::sync::Arc;
use tracing::{debug, info};

/// Input parameters for the Generate command strategy.
#[derive(Debug, Clone)]
pub struct GenerateInput {
    /// English description of the pattern
    pub description: String,
    /// Optional string to test the resolved pattern against
    pub test: Option<String>,
    /// Include the explanation and pattern breakdown
    pub explain: bool,
    /// Print the prompt instead of resolving
    pub dry_run: bool,
    /// Optional model override
    pub model: Option<String>,
}

impl GenerateInput {
    fn options(&self) -> ResolveOptions {
        if self.dry_run {
            if self.test.is_some() || self.explain {
                debug!("--test and --explain are ignored with --dry-run");
            }
            ResolveOptions::DryRun
        } else {
            ResolveOptions::Resolve {
                test: self.test.clone(),
                explain: self.explain,
            }
        }
    }
}

/// OpenAI provider built from the config file on first use.
struct ConfiguredProvider {
    source: Arc<ConfigSource>,
    model: Option<String>,
}

#[async_trait]
impl Generator for ConfiguredProvider {
    async fn generate(&self, prompt: &str, credential: &str) -> regexai_core::Result<String> {
        let config = self.source.config().map_err(Error::Config)?;

        let model = self
            .model
            .clone()
            .unwrap_or_else(|| config.provider.model.clone());
        let provider = OpenAiProvider::new(model)
            .with_base_url(config.provider.base_url.clone())
            .with_max_tokens(config.provider.max_tokens)
            .with_temperature(config.provider.temperature);
        info!("Using model {}", provider.model());

        provider.generate(prompt, credential).await
    }
}

/// Strategy for resolving a description into a regex.
///
/// The config file is only read on a dictionary miss. Output is written once
/// resolution has succeeded, so a failed run prints nothing.
#[derive(Debug, Clone, Copy)]
pub struct GenerateStrategy;

impl GenerateStrategy {
    async fn run<W: Write>(
        &self,
        input: GenerateInput,
        source: Arc<ConfigSource>,
        out: &mut W,
    ) -> anyhow::Result<()> {
        let options = input.options();
        let provider = ConfiguredProvider {
            source: source.clone(),
            model: input.model,
        };
        let orchestrator = Orchestrator::new(provider, source);

        let resolution = orchestrator.resolve(&input.description, &options).await?;

        writeln!(out, "{resolution}")?;
        Ok(())
    }
}

impl super::CommandStrategy for GenerateStrategy {
    type Input = GenerateInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let source = Arc::new(ConfigSource::from_home());
        self.run(input, source, &mut std::io::stdout()).await
    }
}

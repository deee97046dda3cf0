use regexai_core::{Error, GenerationSettings, SettingsSource};
use std::path::PathBuf;
use std::sync::OnceLock;

use crate::schema::{API_KEY_ENV, Config};

/// Config file reader that defers all I/O until the first request for it.
///
/// The file is read at most once; later calls reuse the parsed value.
#[derive(Debug)]
pub struct ConfigSource {
    path: Option<PathBuf>,
    api_key_override: Option<String>,
    loaded: OnceLock<Config>,
}

impl ConfigSource {
    #[must_use]
    pub const fn new(path: PathBuf, api_key_override: Option<String>) -> Self {
        Self {
            path: Some(path),
            api_key_override,
            loaded: OnceLock::new(),
        }
    }

    /// `~/regexai/config.json` with `OPENAI_API_KEY` taking precedence.
    ///
    /// A missing home directory is only reported once the config is needed.
    #[must_use]
    pub fn from_home() -> Self {
        Self {
            path: Config::config_path().ok(),
            api_key_override: std::env::var(API_KEY_ENV).ok(),
            loaded: OnceLock::new(),
        }
    }

    pub fn config(&self) -> anyhow::Result<&Config> {
        if let Some(config) = self.loaded.get() {
            return Ok(config);
        }

        let path = self
            .path
            .as_deref()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?;
        let config = Config::load_from(path)?.with_api_key_override(self.api_key_override.clone());

        Ok(self.loaded.get_or_init(|| config))
    }
}

impl SettingsSource for ConfigSource {
    fn generation_settings(&self) -> regexai_core::Result<GenerationSettings> {
        self.config()
            .map(Config::generation_settings)
            .map_err(Error::Config)
    }
}

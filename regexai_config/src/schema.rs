use regexai_core::GenerationSettings;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Environment variable that overrides `provider.api_key`.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

const PLACEHOLDER_API_KEY: &str = "your-openai-api-key-here";

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub provider: ProviderConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ProviderConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(default = "ProviderConfig::default_model")]
    pub model: String,
    #[serde(default = "ProviderConfig::default_base_url")]
    pub base_url: String,
    #[serde(default = "ProviderConfig::default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default = "ProviderConfig::default_temperature")]
    pub temperature: f64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: Self::default_model(),
            base_url: Self::default_base_url(),
            max_tokens: Self::default_max_tokens(),
            temperature: Self::default_temperature(),
        }
    }
}

impl ProviderConfig {
    fn default_model() -> String {
        "gpt-4".to_string()
    }

    fn default_base_url() -> String {
        "https://api.openai.com/v1".to_string()
    }

    const fn default_max_tokens() -> u32 {
        400
    }

    const fn default_temperature() -> f64 {
        0.2
    }
}

impl Config {
    pub fn config_dir() -> anyhow::Result<PathBuf> {
        Ok(dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join("regexai"))
    }

    pub fn config_path() -> anyhow::Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Read a config file. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content).map_err(|e| {
            anyhow::anyhow!("Invalid config file at {}: {e}", path.display())
        })?;

        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Prefer a non-blank `api_key` (normally from the environment) over the file value.
    #[must_use]
    pub fn with_api_key_override(mut self, api_key: Option<String>) -> Self {
        if let Some(key) = api_key.filter(|key| !key.trim().is_empty()) {
            self.provider.api_key = Some(key);
        }
        self
    }

    /// The usable API key, ignoring blanks and the template placeholder.
    #[must_use]
    pub fn api_key(&self) -> Option<&str> {
        self.provider
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty() && *key != PLACEHOLDER_API_KEY)
    }

    #[must_use]
    pub fn generation_settings(&self) -> GenerationSettings {
        GenerationSettings::new(self.api_key().map(str::to_string))
    }

    pub fn ensure_config_dir() -> anyhow::Result<PathBuf> {
        let config_dir = Self::config_dir()?;
        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }

    /// Create the default config file in the home directory.
    pub fn create_config() -> anyhow::Result<PathBuf> {
        let config_path = Self::ensure_config_dir()?.join("config.json");
        Self::write_template(&config_path)?;
        Ok(config_path)
    }

    pub fn write_template(path: &Path) -> anyhow::Result<()> {
        if path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                path.display()
            );
        }

        let config_template = format!(
            r#"{{
  "provider": {{
    "api_key": "{PLACEHOLDER_API_KEY}",
    "model": "gpt-4",
    "base_url": "https://api.openai.com/v1",
    "max_tokens": 400,
    "temperature": 0.2
  }}
}}
"#
        );

        std::fs::write(path, config_template)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config.provider.model, "gpt-4");
        assert_eq!(config.provider.max_tokens, 400);
        assert!(config.api_key().is_none());
    }

    #[test]
    fn partial_file_fills_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"provider": {{"api_key": "sk-file", "model": "gpt-4o"}}}}"#).unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.api_key(), Some("sk-file"));
        assert_eq!(config.provider.model, "gpt-4o");
        assert_eq!(config.provider.base_url, "https://api.openai.com/v1");
    }

    #[test]
    fn malformed_file_is_an_error() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        assert!(Config::load_from(file.path()).is_err());
    }

    #[test]
    fn environment_key_overrides_file_key() {
        let mut config = Config::default();
        config.provider.api_key = Some("sk-file".to_string());

        let config = config.with_api_key_override(Some("sk-env".to_string()));
        assert_eq!(config.api_key(), Some("sk-env"));
    }

    #[test]
    fn blank_environment_key_keeps_file_key() {
        let mut config = Config::default();
        config.provider.api_key = Some("sk-file".to_string());

        let config = config.with_api_key_override(Some("   ".to_string()));
        assert_eq!(config.api_key(), Some("sk-file"));
    }

    #[test]
    fn template_is_valid_and_has_no_usable_key() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        Config::write_template(&path).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert!(config.api_key().is_none());
        assert!(config.generation_settings().credential.is_none());
        assert!((config.provider.temperature - 0.2).abs() < f64::EPSILON);
    }

    #[test]
    fn template_refuses_to_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        Config::write_template(&path).unwrap();
        assert!(Config::write_template(&path).is_err());
    }
}

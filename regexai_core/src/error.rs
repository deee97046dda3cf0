use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(
        "OPENAI_API_KEY not found. Export it in the environment or set \"provider.api_key\" in ~/regexai/config.json (run 'regexai --init' to create it)"
    )]
    CredentialMissing,

    #[error("Request to generation service failed: {0}")]
    RequestFailed(anyhow::Error),

    #[error(
        "Could not parse generation response: {reason}. Try rephrasing the description, or use --dry-run to inspect the prompt"
    )]
    UnparsableResponse { reason: String },

    #[error("Invalid regex pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Configuration error: {0}")]
    Config(anyhow::Error),

    #[error("Usage error: {0}")]
    Usage(String),
}

impl Error {
    pub(crate) fn unparsable(reason: impl Into<String>) -> Self {
        Self::UnparsableResponse {
            reason: reason.into(),
        }
    }
}

#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

use async_trait::async_trait;

pub mod breakdown;
pub mod dictionary;
pub mod error;
pub mod orchestrator;
pub mod parser;
pub mod prompt;
pub mod report;
pub mod tester;

pub use error::{Error, Result};
pub use orchestrator::{
    GenerationSettings, Orchestrator, Resolution, ResolveOptions, SettingsSource,
};
pub use report::{Report, Source, TestRun};

/// A resolved regular expression together with its explanation and sample matches.
///
/// The pattern always compiles: values are produced either from the built-in
/// dictionary or by [`parser::parse`], which rejects patterns that fail to compile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternResult {
    pattern: String,
    explanation: String,
    examples: Vec<String>,
}

impl PatternResult {
    /// Build a result from caller-supplied parts, validating the pattern.
    pub fn new(
        pattern: impl Into<String>,
        explanation: impl Into<String>,
        examples: Vec<String>,
    ) -> Result<Self> {
        let pattern = pattern.into();
        tester::compile(&pattern)?;
        Ok(Self::from_parts(pattern, explanation.into(), examples))
    }

    /// Callers must have already checked that `pattern` compiles.
    pub(crate) const fn from_parts(
        pattern: String,
        explanation: String,
        examples: Vec<String>,
    ) -> Self {
        Self {
            pattern,
            explanation,
            examples,
        }
    }

    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    #[must_use]
    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    #[must_use]
    pub fn examples(&self) -> &[String] {
        &self.examples
    }
}

/// Result of applying a pattern to a test string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MatchOutcome {
    pub matched: bool,
    /// Capture groups in declaration order; `None` for groups that did not participate.
    pub groups: Vec<Option<String>>,
    pub matched_text: Option<String>,
}

/// Text-generation backend used when the dictionary has no answer.
#[async_trait]
pub trait Generator: Send + Sync {
    /// Send `prompt` to the service and return its raw text reply.
    async fn generate(&self, prompt: &str, credential: &str) -> Result<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_invalid_pattern() {
        let err = PatternResult::new("a(b", "", Vec::new()).unwrap_err();
        assert!(matches!(err, Error::InvalidPattern { .. }));
    }

    #[test]
    fn new_keeps_parts() {
        let result = PatternResult::new("^a+$", "one or more a", vec!["aaa".to_string()]).unwrap();
        assert_eq!(result.pattern(), "^a+$");
        assert_eq!(result.explanation(), "one or more a");
        assert_eq!(result.examples(), ["aaa".to_string()]);
    }
}

//! End-to-end resolution tests with stubbed generation backends.
//!
//! These tests check that dictionary hits and dry runs never reach the
//! generator, and that generated responses flow through parsing and testing.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use regexai_core::{
    Error, GenerationSettings, Generator, Orchestrator, Resolution, ResolveOptions, Result, Source,
    dictionary, parser, prompt,
};

/// Fails the test if the generation path is reached.
struct PanickingGenerator;

#[async_trait]
impl Generator for PanickingGenerator {
    async fn generate(&self, _prompt: &str, _credential: &str) -> Result<String> {
        panic!("generator must not be called");
    }
}

/// Returns a canned reply and records what it was asked.
struct StubGenerator {
    reply: String,
    calls: Arc<AtomicUsize>,
    expected_prompt: String,
}

impl StubGenerator {
    fn new(reply: &str, description: &str) -> Self {
        Self {
            reply: reply.to_string(),
            calls: Arc::new(AtomicUsize::new(0)),
            expected_prompt: prompt::build(description),
        }
    }
}

#[async_trait]
impl Generator for StubGenerator {
    async fn generate(&self, prompt: &str, credential: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        assert_eq!(prompt, self.expected_prompt);
        assert_eq!(credential, "test-key");
        Ok(self.reply.clone())
    }
}

const UNKNOWN_DESCRIPTION: &str = "things that are not in the dictionary and require generation";

const WELL_FORMED_REPLY: &str = "Regex: ^[A-Z]{3}-\\d{3}$\n\
Explanation: Three uppercase letters, a dash and three digits\n\
Examples:\n\
- ABC-123\n\
- XYZ-999\n\
- QRS-000\n";

fn settings() -> GenerationSettings {
    GenerationSettings::new(Some("test-key".to_string()))
}

fn report_of(resolution: Resolution) -> regexai_core::Report {
    match resolution {
        Resolution::Report(report) => report,
        Resolution::Prompt(_) => panic!("expected a report, got a prompt"),
    }
}

#[tokio::test]
async fn test_every_dictionary_key_resolves_without_generator() {
    let orchestrator = Orchestrator::new(PanickingGenerator, GenerationSettings::default());

    for entry in dictionary::entries() {
        for description in [
            entry.key.to_string(),
            entry.key.to_uppercase(),
            format!("Match a valid {} please", entry.key.to_uppercase()),
        ] {
            let report = report_of(
                orchestrator
                    .resolve(&description, &ResolveOptions::default())
                    .await
                    .unwrap(),
            );
            assert_eq!(report.source, Source::Dictionary);
            assert_eq!(report.result.pattern(), entry.pattern);
            assert_eq!(report.result.explanation(), entry.explanation);
            assert_eq!(report.result.examples(), entry.examples);
        }
    }
}

#[tokio::test]
async fn test_dry_run_never_calls_generator() {
    let orchestrator = Orchestrator::new(PanickingGenerator, settings());

    for description in ["email", UNKNOWN_DESCRIPTION, "IP addresses"] {
        let resolution = orchestrator
            .resolve(description, &ResolveOptions::DryRun)
            .await
            .unwrap();
        assert_eq!(resolution.to_string(), prompt::build(description));
    }
}

#[tokio::test]
async fn test_email_scenario_with_match() {
    let orchestrator = Orchestrator::new(PanickingGenerator, GenerationSettings::default());
    let options = ResolveOptions::Resolve {
        test: Some("user@example.com".to_string()),
        explain: true,
    };

    let report = report_of(orchestrator.resolve("email", &options).await.unwrap());

    assert_eq!(report.result.pattern(), dictionary::entries()[0].pattern);
    let run = report.test.as_ref().unwrap();
    assert!(run.outcome.matched);
    assert_eq!(run.outcome.matched_text.as_deref(), Some("user@example.com"));

    let text = report.to_string();
    assert!(text.contains("Explanation:"));
    assert!(text.contains("Testing: 'user@example.com'\n   Match found!"));
}

#[tokio::test]
async fn test_generated_scenario_uses_stub_content() {
    let generator = StubGenerator::new(WELL_FORMED_REPLY, UNKNOWN_DESCRIPTION);
    let calls = generator.calls.clone();
    let orchestrator = Orchestrator::new(generator, settings());
    let options = ResolveOptions::Resolve {
        test: Some("ABC-123".to_string()),
        explain: false,
    };

    let report = report_of(
        orchestrator
            .resolve(UNKNOWN_DESCRIPTION, &options)
            .await
            .unwrap(),
    );

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(report.source, Source::Generated);
    assert_eq!(report.result, parser::parse(WELL_FORMED_REPLY).unwrap());
    assert_eq!(report.result.pattern(), "^[A-Z]{3}-\\d{3}$");
    assert_eq!(report.result.examples(), ["ABC-123", "XYZ-999", "QRS-000"]);
    assert!(report.test.unwrap().outcome.matched);
}

#[tokio::test]
async fn test_malformed_reply_is_unparsable() {
    let generator = StubGenerator::new(
        "I'm sorry, I can't help with that.",
        UNKNOWN_DESCRIPTION,
    );
    let orchestrator = Orchestrator::new(generator, settings());

    let err = orchestrator
        .resolve(UNKNOWN_DESCRIPTION, &ResolveOptions::default())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::UnparsableResponse { .. }));
}

#[tokio::test]
async fn test_reply_with_uncompilable_pattern_is_unparsable() {
    let generator = StubGenerator::new(
        "Regex: ^(?<=a)b$\nExplanation: lookbehind\n",
        UNKNOWN_DESCRIPTION,
    );
    let orchestrator = Orchestrator::new(generator, settings());

    let err = orchestrator
        .resolve(UNKNOWN_DESCRIPTION, &ResolveOptions::default())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::UnparsableResponse { .. }));
}

#[tokio::test]
async fn test_missing_credential_fails_before_network() {
    let orchestrator = Orchestrator::new(PanickingGenerator, GenerationSettings::default());

    let err = orchestrator
        .resolve(UNKNOWN_DESCRIPTION, &ResolveOptions::default())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::CredentialMissing));
}

#[tokio::test]
async fn test_generator_failure_propagates_unchanged() {
    struct FailingGenerator;

    #[async_trait]
    impl Generator for FailingGenerator {
        async fn generate(&self, _prompt: &str, _credential: &str) -> Result<String> {
            Err(Error::RequestFailed(anyhow::anyhow!("429 Too Many Requests")))
        }
    }

    let orchestrator = Orchestrator::new(FailingGenerator, settings());
    let err = orchestrator
        .resolve(UNKNOWN_DESCRIPTION, &ResolveOptions::default())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::RequestFailed(_)));
    assert!(err.to_string().contains("429 Too Many Requests"));
}

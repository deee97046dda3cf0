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

mod command;

use clap::{Arg, ArgAction, CommandFactory, FromArgMatches, Parser};
use command::{CommandStrategy, GenerateInput, GenerateStrategy, InitStrategy};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

const EXAMPLES: &str = "\
Examples:
  regexai \"email addresses\"
  regexai \"phone numbers\" --test \"+14155550123\"
  regexai \"URLs starting with https\" --explain
  regexai \"dates in MM/DD/YYYY format\" --dry-run

Common patterns:
  email, phone, url, ip, date";

#[derive(Parser)]
#[command(name = "regexai")]
#[command(about = "RegexAI - convert English descriptions to regular expressions", long_about = None)]
#[command(version, disable_version_flag = true, after_help = EXAMPLES)]
struct Cli {
    /// English description of the pattern you need
    #[arg(required_unless_present = "init")]
    description: Option<String>,

    /// Test string to validate the regex against
    #[arg(short, long, value_name = "TEXT")]
    test: Option<String>,

    /// Explain the regex and its components
    #[arg(short, long)]
    explain: bool,

    /// Show the prompt without making a request
    #[arg(short, long)]
    dry_run: bool,

    /// Model to use for generation
    #[arg(short, long)]
    model: Option<String>,

    /// Print debug logs to stderr
    #[arg(long)]
    verbose: bool,

    /// Create ~/regexai/config.json and exit
    #[arg(long, conflicts_with_all = ["description", "test", "explain", "dry_run", "model"])]
    init: bool,
}

fn cli_command() -> clap::Command {
    Cli::command().arg(
        Arg::new("version")
            .short('v')
            .long("version")
            .action(ArgAction::Version)
            .help("Print version"),
    )
}

fn parse_cli() -> Cli {
    let matches = cli_command().get_matches();
    Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit())
}

fn init_tracing(verbose: bool) -> anyhow::Result<()> {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = parse_cli();
    init_tracing(cli.verbose)?;

    if cli.init {
        return InitStrategy.execute(()).await;
    }

    let Some(description) = cli.description else {
        anyhow::bail!("Usage error: a description is required");
    };

    GenerateStrategy
        .execute(GenerateInput {
            description,
            test: cli.test,
            explain: cli.explain,
            dry_run: cli.dry_run,
            model: cli.model,
        })
        .await
}

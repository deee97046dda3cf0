use regexai_config::{API_KEY_ENV, Config};

/// Strategy for initializing the configuration.
///
/// Creates the default configuration file at `~/regexai/config.json`.
#[derive(Debug, Clone, Copy)]
pub struct InitStrategy;

impl super::CommandStrategy for InitStrategy {
    type Input = ();

    async fn execute(&self, _input: Self::Input) -> anyhow::Result<()> {
        let config_path = Config::create_config()?;

        println!("Created config file at: {}", config_path.display());
        println!();
        println!("Next steps:");
        println!("   1. Edit the config file and add your OpenAI API key");
        println!("      (or export {API_KEY_ENV}, which takes precedence)");
        println!("   2. Run 'regexai \"phone numbers\" --test \"+14155550123\"'");
        Ok(())
    }
}

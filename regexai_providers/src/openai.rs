use async_trait::async_trait;
use regexai_core::{Error, Generator};
use reqwest::Client;
use serde_json::json;
use tracing::info;

pub struct OpenAiProvider {
    client: Client,
    base_url: String,
    model: String,
    max_tokens: u32,
    temperature: f64,
}

impl OpenAiProvider {
    pub fn new(model: String) -> Self {
        info!("Creating OpenAiProvider");
        Self {
            client: Client::new(),
            base_url: "https://api.openai.com/v1".to_string(),
            model,
            max_tokens: 400,
            temperature: 0.2,
        }
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    #[must_use]
    pub const fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    #[must_use]
    pub const fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    fn build_request(&self, prompt: &str) -> serde_json::Value {
        json!({
            "model": self.model,
            "messages": [{ "role": "user", "content": prompt }],
            "max_tokens": self.max_tokens,
            "temperature": self.temperature,
        })
    }

    /// Helper method to send a single request
    async fn try_send(
        &self,
        request: &serde_json::Value,
        credential: &str,
    ) -> anyhow::Result<String> {
        let response = self
            .client
            .post(format!(
                "{}/chat/completions",
                self.base_url.trim_end_matches('/')
            ))
            .bearer_auth(credential)
            .json(request)
            .send()
            .await?
            .error_for_status()?
            .json::<serde_json::Value>()
            .await?;

        extract_content(&response)
    }
}

fn extract_content(response: &serde_json::Value) -> anyhow::Result<String> {
    let content = response["choices"][0]["message"]["content"]
        .as_str()
        .ok_or_else(|| anyhow::anyhow!("Invalid response format: missing content"))?;

    Ok(content.trim().to_string())
}

#[async_trait]
impl Generator for OpenAiProvider {
    async fn generate(&self, prompt: &str, credential: &str) -> regexai_core::Result<String> {
        if credential.trim().is_empty() {
            return Err(Error::CredentialMissing);
        }

        let request = self.build_request(prompt);

        info!("Sending request to OpenAI API: model={}", self.model);

        // One attempt per invocation; failures go straight back to the caller.
        let content = self
            .try_send(&request, credential)
            .await
            .map_err(Error::RequestFailed)?;

        info!("Received response from OpenAI API");
        Ok(content)
    }
}

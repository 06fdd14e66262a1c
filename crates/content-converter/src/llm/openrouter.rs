use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use tracing::debug;

use super::configs::OpenRouterProviderConfig;
use super::instructions::{optimize_instruction, summary_instruction};
use super::{LlmOptions, LlmProvider, DEFAULT_TEMPERATURE, REQUEST_TIMEOUT};
use crate::errors::{ConvertError, Result};

pub const OPENROUTER_HOST: &str = "https://openrouter.ai";
pub const OPENROUTER_MODEL: &str = "anthropic/claude-3-opus-20240229";
pub const DEFAULT_MAX_TOKENS: u32 = 2048;

/// Sent as `HTTP-Referer` and `X-Title` so requests are attributed to this app.
pub const APP_REFERER: &str = "https://github.com/centervil/Content-Converter";
pub const APP_TITLE: &str = "Content Converter";

const PROVIDER: &str = "OpenRouter";

/// OpenRouter's OpenAI-compatible chat completions API.
pub struct OpenRouterProvider {
    client: Client,
    config: OpenRouterProviderConfig,
}

impl OpenRouterProvider {
    pub fn new(config: OpenRouterProviderConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ConvertError::provider(PROVIDER, e))?;

        Ok(Self { client, config })
    }

    async fn post(&self, payload: Value) -> Result<Value> {
        let url = format!(
            "{}/api/v1/chat/completions",
            self.config.host.trim_end_matches('/')
        );
        debug!(%url, model = %payload["model"], "sending OpenRouter request");

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("HTTP-Referer", APP_REFERER)
            .header("X-Title", APP_TITLE)
            .json(&payload)
            .send()
            .await
            .map_err(|e| ConvertError::provider(PROVIDER, e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ConvertError::provider(
                PROVIDER,
                format!("Request failed: {}: {}", status, body),
            ));
        }

        response
            .json()
            .await
            .map_err(|e| ConvertError::provider(PROVIDER, e))
    }

    async fn complete(&self, prompt: String, options: &LlmOptions) -> Result<String> {
        let payload = json!({
            "model": options.model.as_deref().unwrap_or(&self.config.model),
            "messages": [{ "role": "user", "content": prompt }],
            "temperature": options.temperature.unwrap_or(DEFAULT_TEMPERATURE),
            "max_tokens": options.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS),
        });

        let response = self.post(payload).await?;

        // OpenRouter reports some upstream failures in a 200 body
        if let Some(error) = response.get("error") {
            return Err(ConvertError::provider(
                PROVIDER,
                format!("OpenRouter API error: {}", error),
            ));
        }

        response_text(&response)
    }
}

/// Content of the first choice's message.
fn response_text(response: &Value) -> Result<String> {
    response
        .get("choices")
        .and_then(|choices| choices.get(0))
        .and_then(|choice| choice.get("message"))
        .and_then(|message| message.get("content"))
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or(ConvertError::MalformedResponse {
            provider: PROVIDER,
            field: "choices[0].message.content",
        })
}

#[async_trait]
impl LlmProvider for OpenRouterProvider {
    fn name(&self) -> &'static str {
        PROVIDER
    }

    fn model(&self) -> &str {
        &self.config.model
    }

    async fn optimize_content(&self, text: &str, options: &LlmOptions) -> Result<String> {
        self.complete(optimize_instruction(text), options).await
    }

    async fn generate_summary(&self, text: &str, max_length: usize) -> Result<String> {
        self.complete(summary_instruction(text, max_length), &LlmOptions::default())
            .await
    }
}

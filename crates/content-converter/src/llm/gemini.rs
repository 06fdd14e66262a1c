use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use tracing::debug;

use super::configs::GeminiProviderConfig;
use super::instructions::{optimize_instruction, summary_instruction};
use super::{LlmOptions, LlmProvider, DEFAULT_TEMPERATURE, REQUEST_TIMEOUT};
use crate::errors::{ConvertError, Result};

pub const GEMINI_HOST: &str = "https://generativelanguage.googleapis.com";
pub const GEMINI_MODEL: &str = "gemini-2.5-flash";

const PROVIDER: &str = "Gemini";

/// Google Gemini through the `generateContent` REST endpoint.
pub struct GeminiProvider {
    client: Client,
    config: GeminiProviderConfig,
}

impl GeminiProvider {
    pub fn new(config: GeminiProviderConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ConvertError::provider(PROVIDER, e))?;

        Ok(Self { client, config })
    }

    async fn post(&self, model: &str, payload: Value) -> Result<Value> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.host.trim_end_matches('/'),
            model
        );
        debug!(%url, "sending Gemini request");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.config.api_key)
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

    async fn generate(&self, prompt: String, options: &LlmOptions) -> Result<String> {
        let model = options.model.as_deref().unwrap_or(&self.config.model);

        let mut generation_config = json!({
            "temperature": options.temperature.unwrap_or(DEFAULT_TEMPERATURE),
        });
        if let Some(max_tokens) = options.max_tokens {
            generation_config["maxOutputTokens"] = json!(max_tokens);
        }

        let payload = json!({
            "contents": [{
                "role": "user",
                "parts": [{ "text": prompt }]
            }],
            "generationConfig": generation_config
        });

        let response = self.post(model, payload).await?;
        response_text(&response)
    }
}

/// Text of the first part of the first candidate.
fn response_text(response: &Value) -> Result<String> {
    response
        .get("candidates")
        .and_then(|candidates| candidates.get(0))
        .and_then(|candidate| candidate.get("content"))
        .and_then(|content| content.get("parts"))
        .and_then(|parts| parts.get(0))
        .and_then(|part| part.get("text"))
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or(ConvertError::MalformedResponse {
            provider: PROVIDER,
            field: "candidates[0].content.parts[0].text",
        })
}

#[async_trait]
impl LlmProvider for GeminiProvider {
    fn name(&self) -> &'static str {
        PROVIDER
    }

    fn model(&self) -> &str {
        &self.config.model
    }

    async fn optimize_content(&self, text: &str, options: &LlmOptions) -> Result<String> {
        self.generate(optimize_instruction(text), options).await
    }

    async fn generate_summary(&self, text: &str, max_length: usize) -> Result<String> {
        self.generate(summary_instruction(text, max_length), &LlmOptions::default())
            .await
    }
}

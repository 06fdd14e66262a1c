pub mod configs;
pub mod credentials;
pub mod factory;
pub mod gemini;
pub mod instructions;
pub mod openrouter;

#[cfg(test)]
pub mod mock;

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::Result;

pub const DEFAULT_TEMPERATURE: f64 = 0.7;

/// Upper bound for one provider request, including reading the body.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(600);

/// Per-call overrides. Anything left unset falls back to the provider default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmOptions {
    pub model: Option<String>,
    pub temperature: Option<f64>,
    pub max_tokens: Option<u32>,
}

impl LlmOptions {
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }
}

/// A language model backend that can rewrite and summarise article text.
///
/// Every call issues exactly one request; failures are returned as they are
/// and never retried.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    fn name(&self) -> &'static str;

    /// Model used when a call does not override it.
    fn model(&self) -> &str;

    /// Rewrite `text` and return the first completion verbatim.
    async fn optimize_content(&self, text: &str, options: &LlmOptions) -> Result<String>;

    /// Summarise `text`, asking the model to stay within `max_length`
    /// characters. The limit is only part of the instruction, the reply is not
    /// truncated.
    async fn generate_summary(&self, text: &str, max_length: usize) -> Result<String>;
}

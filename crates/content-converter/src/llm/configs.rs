use super::credentials::{resolve_api_key, Environment, RealEnvironment};
use super::factory::LlmProviderType;
use super::gemini::{GEMINI_HOST, GEMINI_MODEL};
use super::openrouter::{OPENROUTER_HOST, OPENROUTER_MODEL};
use crate::errors::Result;

// Unified enum to wrap the supported provider configurations
#[derive(Debug, Clone)]
pub enum LlmProviderConfig {
    Gemini(GeminiProviderConfig),
    OpenRouter(OpenRouterProviderConfig),
}

#[derive(Debug, Clone)]
pub struct GeminiProviderConfig {
    pub host: String,
    pub api_key: String,
    pub model: String,
}

impl GeminiProviderConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            host: GEMINI_HOST.to_string(),
            api_key: api_key.into(),
            model: GEMINI_MODEL.to_string(),
        }
    }

    pub fn from_env() -> Result<Self> {
        let api_key = resolve_api_key(LlmProviderType::Gemini, None, &RealEnvironment)?;
        Ok(Self::new(api_key))
    }
}

#[derive(Debug, Clone)]
pub struct OpenRouterProviderConfig {
    pub host: String,
    pub api_key: String,
    pub model: String,
}

impl OpenRouterProviderConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            host: OPENROUTER_HOST.to_string(),
            api_key: api_key.into(),
            model: OPENROUTER_MODEL.to_string(),
        }
    }

    pub fn from_env() -> Result<Self> {
        let api_key = resolve_api_key(LlmProviderType::OpenRouter, None, &RealEnvironment)?;
        Ok(Self::new(api_key))
    }
}

impl LlmProviderConfig {
    /// Build a config for `provider_type`, resolving the API key from
    /// `api_key_arg` or the environment.
    pub fn resolve(
        provider_type: LlmProviderType,
        api_key_arg: Option<&str>,
        env: &impl Environment,
    ) -> Result<Self> {
        let api_key = resolve_api_key(provider_type, api_key_arg, env)?;
        Ok(match provider_type {
            LlmProviderType::Gemini => Self::Gemini(GeminiProviderConfig::new(api_key)),
            LlmProviderType::OpenRouter => Self::OpenRouter(OpenRouterProviderConfig::new(api_key)),
        })
    }

    pub fn provider_type(&self) -> LlmProviderType {
        match self {
            Self::Gemini(_) => LlmProviderType::Gemini,
            Self::OpenRouter(_) => LlmProviderType::OpenRouter,
        }
    }

    /// Replace the default model; `None` keeps it.
    pub fn with_model(mut self, model: Option<String>) -> Self {
        if let Some(model) = model {
            match &mut self {
                Self::Gemini(config) => config.model = model,
                Self::OpenRouter(config) => config.model = model,
            }
        }
        self
    }

    /// Point the provider at a different base URL, e.g. a proxy.
    pub fn with_host(mut self, host: Option<String>) -> Self {
        if let Some(host) = host {
            match &mut self {
                Self::Gemini(config) => config.host = host,
                Self::OpenRouter(config) => config.host = host,
            }
        }
        self
    }

    pub fn model(&self) -> &str {
        match self {
            Self::Gemini(config) => &config.model,
            Self::OpenRouter(config) => &config.model,
        }
    }
}

use std::str::FromStr;

use strum_macros::{Display, EnumIter, EnumString};

use super::configs::LlmProviderConfig;
use super::gemini::GeminiProvider;
use super::openrouter::OpenRouterProvider;
use super::LlmProvider;
use crate::errors::{ConvertError, Result};

#[derive(EnumIter, EnumString, Display, Debug, Clone, Copy, PartialEq, Eq)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum LlmProviderType {
    Gemini,
    OpenRouter,
}

impl LlmProviderType {
    pub fn from_name(name: &str) -> Result<Self> {
        Self::from_str(name)
            .map_err(|_| ConvertError::Configuration(format!("Unsupported LLM provider: {}", name)))
    }
}

pub fn get_provider(config: LlmProviderConfig) -> Result<Box<dyn LlmProvider>> {
    match config {
        LlmProviderConfig::Gemini(gemini_config) => Ok(Box::new(GeminiProvider::new(gemini_config)?)),
        LlmProviderConfig::OpenRouter(openrouter_config) => {
            Ok(Box::new(OpenRouterProvider::new(openrouter_config)?))
        }
    }
}

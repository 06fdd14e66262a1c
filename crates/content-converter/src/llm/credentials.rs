//! API key lookup: explicit argument first, then the provider's environment
//! variable (`GOOGLE_API_KEY` is also accepted for Gemini).
use std::env;

#[cfg(test)]
use mockall::automock;

use super::factory::LlmProviderType;
use crate::errors::{ConvertError, Result};

#[cfg_attr(test, automock)]
pub trait Environment: Send + Sync {
    fn get_var(&self, key: &str) -> std::result::Result<String, env::VarError>;
}

/// The process environment.
pub struct RealEnvironment;

impl Environment for RealEnvironment {
    fn get_var(&self, key: &str) -> std::result::Result<String, env::VarError> {
        env::var(key)
    }
}

/// `GEMINI_API_KEY`, `OPENROUTER_API_KEY`, ...
pub fn api_key_env_var(provider: LlmProviderType) -> String {
    format!("{}_API_KEY", provider.to_string().to_uppercase())
}

/// Interpret an `--api-key` value, either `provider:key` or a bare `key`.
///
/// A prefixed key for a different provider is ignored.
pub fn key_from_arg(provider: LlmProviderType, arg: &str) -> Option<String> {
    let key = match arg.split_once(':') {
        Some((prefix, key)) if prefix.eq_ignore_ascii_case(&provider.to_string()) => key,
        Some(_) => return None,
        None => arg,
    };
    let key = key.trim();
    (!key.is_empty()).then(|| key.to_string())
}

/// Older Gemini setups export the Google AI Studio key under this name.
pub const GOOGLE_API_KEY: &str = "GOOGLE_API_KEY";

/// Variables checked for `provider`, in order. The first one is the name
/// reported when none is set.
fn env_vars(provider: LlmProviderType) -> Vec<String> {
    let mut vars = vec![api_key_env_var(provider)];
    if provider == LlmProviderType::Gemini {
        vars.push(GOOGLE_API_KEY.to_string());
    }
    vars
}

pub fn resolve_api_key(
    provider: LlmProviderType,
    explicit: Option<&str>,
    env: &impl Environment,
) -> Result<String> {
    if let Some(key) = explicit.and_then(|arg| key_from_arg(provider, arg)) {
        return Ok(key);
    }

    let vars = env_vars(provider);
    for var in &vars {
        if let Ok(key) = env.get_var(var) {
            if !key.trim().is_empty() {
                return Ok(key.trim().to_string());
            }
        }
    }

    Err(ConvertError::Configuration(format!(
        "{} API key is not set. Set the {} environment variable or pass --api-key.",
        provider, vars[0]
    )))
}

use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong while converting a document.
///
/// Only the documented front-matter fallback is downgraded to a warning; every
/// other failure is returned to the caller unchanged.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to parse markdown file {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("{provider} request failed: {message}")]
    Provider {
        provider: &'static str,
        message: String,
    },

    #[error("{provider} returned an unexpected response: missing `{field}`")]
    MalformedResponse {
        provider: &'static str,
        field: &'static str,
    },

    #[error("Content does not meet {platform} platform requirements")]
    Validation { platform: &'static str },

    #[error("Invalid content: {0}")]
    InvalidContent(String),

    #[error("Failed to render prompt: {0}")]
    Template(#[from] tera::Error),

    #[error("Failed to save file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConvertError {
    pub(crate) fn provider(provider: &'static str, err: impl std::fmt::Display) -> Self {
        ConvertError::Provider {
            provider,
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;

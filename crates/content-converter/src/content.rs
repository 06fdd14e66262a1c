//! The document model passed between the parser, the LLM step and the platforms.
//!
//! Metadata is kept as an ordered YAML mapping so that a converted file keeps
//! the field order of its source.
use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};

use crate::errors::{ConvertError, Result};

pub type Metadata = Mapping;

/// A document split into its front-matter and body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedContent {
    #[serde(default)]
    pub metadata: Metadata,
    pub content: String,
}

/// Content after a platform has injected and normalised its fields.
pub type ConvertedContent = ParsedContent;

impl ParsedContent {
    pub fn new(metadata: Metadata, content: impl Into<String>) -> Self {
        Self {
            metadata,
            content: content.into(),
        }
    }

    /// Body only, no front-matter.
    pub fn from_body(content: impl Into<String>) -> Self {
        Self::new(Metadata::new(), content)
    }

    pub fn with_meta(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.metadata.insert(Value::from(key), value.into());
        self
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).and_then(Value::as_str)
    }

    /// Build content from a loosely structured value, e.g. a document that was
    /// edited by hand or produced by another tool.
    ///
    /// The `content` key is mandatory; `metadata` defaults to an empty mapping.
    pub fn from_value(value: Value) -> Result<Self> {
        let Value::Mapping(mut map) = value else {
            return Err(ConvertError::InvalidContent(
                "expected a mapping with 'metadata' and 'content' keys".to_string(),
            ));
        };

        let content = match map.remove("content") {
            Some(Value::String(text)) => text,
            Some(Value::Null) | None => {
                return Err(ConvertError::InvalidContent(
                    "content has no 'content' key".to_string(),
                ))
            }
            Some(other) => {
                return Err(ConvertError::InvalidContent(format!(
                    "'content' must be a string, got {:?}",
                    other
                )))
            }
        };

        let metadata = match map.remove("metadata") {
            Some(Value::Mapping(metadata)) => metadata,
            Some(Value::Null) | None => Metadata::new(),
            Some(other) => {
                return Err(ConvertError::InvalidContent(format!(
                    "'metadata' must be a mapping, got {:?}",
                    other
                )))
            }
        };

        Ok(Self { metadata, content })
    }
}

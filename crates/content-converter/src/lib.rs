//! Convert markdown articles into the front-matter dialects of Zenn and
//! note.com, optionally rewriting and summarising the body with an LLM.
pub mod config;
pub mod content;
pub mod converter;
pub mod errors;
pub mod factory;
pub mod frontmatter;
pub mod llm;
pub mod platforms;
pub mod prompt_template;

pub use config::ConverterConfig;
pub use content::{ConvertedContent, Metadata, ParsedContent};
pub use converter::ContentConverter;
pub use errors::{ConvertError, Result};

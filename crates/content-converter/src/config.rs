use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::llm::LlmOptions;
use crate::platforms::PlatformConfig;

pub const DEFAULT_SUMMARY_LENGTH: usize = 100;

/// Settings for one conversion. Missing keys take their defaults and unknown
/// keys are ignored, so this deserializes from loosely written config files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    /// `None` means "use the LLM whenever a provider is configured".
    pub use_llm: Option<bool>,
    pub llm_options: LlmOptions,
    pub generate_summary: bool,
    /// Advisory length passed to the summary prompt.
    pub summary_length: usize,
    pub prompt_file: Option<PathBuf>,
    pub template_file: Option<PathBuf>,
    pub platform: PlatformConfig,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            use_llm: None,
            llm_options: LlmOptions::default(),
            generate_summary: false,
            summary_length: DEFAULT_SUMMARY_LENGTH,
            prompt_file: None,
            template_file: None,
            platform: PlatformConfig::default(),
        }
    }
}

impl ConverterConfig {
    pub fn use_llm(&self) -> bool {
        self.use_llm.unwrap_or(true)
    }
}

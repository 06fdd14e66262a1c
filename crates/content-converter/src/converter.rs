use std::path::Path;

use serde_yaml::Value;
use tracing::{debug, info};

use crate::config::ConverterConfig;
use crate::content::{ConvertedContent, ParsedContent};
use crate::errors::{ConvertError, Result};
use crate::frontmatter;
use crate::llm::LlmProvider;
use crate::platforms::PlatformProvider;
use crate::prompt_template::assemble_prompt;

/// Runs one document through the optional LLM step and a platform.
pub struct ContentConverter {
    platform: Box<dyn PlatformProvider>,
    llm: Option<Box<dyn LlmProvider>>,
    config: ConverterConfig,
}

impl ContentConverter {
    pub fn new(
        platform: Box<dyn PlatformProvider>,
        llm: Option<Box<dyn LlmProvider>>,
        config: ConverterConfig,
    ) -> Self {
        Self {
            platform,
            llm,
            config,
        }
    }

    pub fn platform(&self) -> &dyn PlatformProvider {
        self.platform.as_ref()
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Read, convert and validate the markdown file at `path`.
    pub async fn convert_file(&self, path: impl AsRef<Path>) -> Result<ConvertedContent> {
        let path = path.as_ref();
        info!(path = %path.display(), platform = self.platform.name(), "converting file");

        let parsed = frontmatter::read_file(path)?;
        self.convert(parsed).await
    }

    /// Convert content that is already in memory.
    pub async fn convert(&self, mut parsed: ParsedContent) -> Result<ConvertedContent> {
        if let Some(llm) = self.active_llm() {
            self.apply_llm(llm, &mut parsed).await?;
        }

        let converted = self.platform.convert(&parsed);
        if !self.platform.validate(&converted) {
            return Err(ConvertError::Validation {
                platform: self.platform.name(),
            });
        }

        Ok(converted)
    }

    fn active_llm(&self) -> Option<&dyn LlmProvider> {
        match &self.llm {
            Some(llm) if self.config.use_llm() => Some(llm.as_ref()),
            _ => None,
        }
    }

    /// Replace the body with the optimised text and, when asked, add a summary
    /// of the original body. Both requests run concurrently.
    async fn apply_llm(&self, llm: &dyn LlmProvider, parsed: &mut ParsedContent) -> Result<()> {
        let original = parsed.content.as_str();
        let prompt = assemble_prompt(
            self.config.prompt_file.as_deref(),
            self.config.template_file.as_deref(),
            original,
        )?;

        debug!(provider = llm.name(), model = llm.model(), "optimizing content");
        let optimize = llm.optimize_content(&prompt, &self.config.llm_options);

        let (optimized, summary) = if self.config.generate_summary {
            debug!(
                provider = llm.name(),
                max_length = self.config.summary_length,
                "generating summary"
            );
            let summarize = llm.generate_summary(original, self.config.summary_length);
            let (optimized, summary) = tokio::try_join!(optimize, summarize)?;
            (optimized, Some(summary))
        } else {
            (optimize.await?, None)
        };

        parsed.content = optimized;
        if let Some(summary) = summary {
            parsed
                .metadata
                .insert(Value::from("summary"), Value::from(summary));
        }
        Ok(())
    }

    /// Write `content` as a front-matter document, replacing `path`.
    pub fn save_converted_file(&self, content: &ConvertedContent, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        frontmatter::write_file(content, path)?;
        info!(path = %path.display(), "saved converted file");
        Ok(())
    }
}

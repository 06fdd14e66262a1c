use std::path::Path;

use config::{Config, ConfigError, Environment, File};
use content_converter::ConverterConfig;
use serde::Deserialize;

use crate::cli::Cli;

pub const ENV_PREFIX: &str = "CONTENT_CONVERTER";

/// Layered settings: defaults, then the `--config` file, then
/// `CONTENT_CONVERTER__*` environment variables. Command line flags are
/// applied last with [`Settings::merge_cli`].
#[derive(Debug, Deserialize)]
pub struct Settings {
    #[serde(default = "default_platform")]
    pub platform: String,
    #[serde(default)]
    pub use_llm: bool,
    #[serde(default = "default_llm_provider")]
    pub llm_provider: String,
    #[serde(default)]
    pub llm_host: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub converter: ConverterConfig,
}

impl Settings {
    pub fn load(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default("platform", default_platform())?
            .set_default("llm_provider", default_llm_provider())?;

        if let Some(path) = config_file {
            builder = builder.add_source(File::from(path).required(true));
        }

        let config = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings: Self = config.try_deserialize()?;
        tracing::debug!(?settings, "Loaded settings");
        Ok(settings)
    }

    /// Flags given on the command line win over every other layer.
    pub fn merge_cli(mut self, cli: &Cli) -> Self {
        if let Some(platform) = &cli.platform {
            self.platform = platform.clone();
        }
        if let Some(provider) = &cli.llm_provider {
            self.llm_provider = provider.clone();
        }
        if cli.model.is_some() {
            self.model = cli.model.clone();
        }
        self.use_llm |= cli.use_llm;

        let converter = &mut self.converter;
        converter.generate_summary |= cli.generate_summary;
        if let Some(length) = cli.summary_length {
            converter.summary_length = length;
        }
        if cli.prompt_file.is_some() {
            converter.prompt_file = cli.prompt_file.clone();
        }
        if cli.template.is_some() {
            converter.template_file = cli.template.clone();
        }
        converter.use_llm = Some(self.use_llm);
        self
    }
}

fn default_platform() -> String {
    "zenn".to_string()
}

fn default_llm_provider() -> String {
    "gemini".to_string()
}

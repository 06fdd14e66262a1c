mod cli;
mod settings;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use dotenv::dotenv;
use tracing_subscriber::EnvFilter;

use content_converter::factory::create_converter;
use content_converter::llm::configs::LlmProviderConfig;
use content_converter::llm::credentials::RealEnvironment;
use content_converter::llm::factory::{get_provider, LlmProviderType};
use content_converter::llm::LlmProvider;
use content_converter::platforms::factory::PlatformType;

use crate::cli::{default_output_path, Cli};
use crate::settings::Settings;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    dotenv().ok();
    init_tracing(cli.verbose);

    match run(&cli).await {
        Ok(output) => {
            println!(
                "{} Converted {} -> {}",
                style("✔").green(),
                cli.input.display(),
                style(output.display()).cyan()
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}", error_message(&err));
            ExitCode::FAILURE
        }
    }
}

/// Styled for stderr, so redirecting only stderr drops the colours.
fn error_message(err: &anyhow::Error) -> String {
    format!("{} {:#}", style("Error:").for_stderr().red().bold(), err)
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(cli: &Cli) -> Result<PathBuf> {
    let settings = Settings::load(cli.config.as_deref())
        .context("Failed to load settings")?
        .merge_cli(cli);

    // Reject an unknown platform before any credential lookup.
    let platform_type = PlatformType::from_name(&settings.platform)?;

    let llm = if settings.use_llm {
        Some(build_llm(cli, &settings)?)
    } else {
        if settings.converter.generate_summary {
            tracing::warn!("--generate-summary has no effect without --use-llm");
        }
        None
    };

    let converter = create_converter(&settings.platform, llm, settings.converter.clone())?;
    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&cli.input, &platform_type.to_string()));

    let converted = converter.convert_file(&cli.input).await?;
    converter
        .save_converted_file(&converted, &output)
        .with_context(|| format!("Failed to save {}", output.display()))?;
    Ok(output)
}

fn build_llm(cli: &Cli, settings: &Settings) -> Result<Box<dyn LlmProvider>> {
    let provider_type = LlmProviderType::from_name(&settings.llm_provider)?;
    let config = LlmProviderConfig::resolve(provider_type, cli.api_key.as_deref(), &RealEnvironment)?
        .with_model(settings.model.clone())
        .with_host(settings.llm_host.clone());
    tracing::info!(provider = %provider_type, model = config.model(), "Using LLM");
    Ok(get_provider(config)?)
}

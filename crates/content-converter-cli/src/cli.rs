use std::path::{Path, PathBuf};

use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about = "Convert a markdown article for Zenn or note.com", long_about = None)]
pub struct Cli {
    /// Markdown file to convert
    #[arg(short, long)]
    pub input: PathBuf,

    /// Target platform: zenn or note [default: zenn]
    #[arg(short, long)]
    pub platform: Option<String>,

    /// Output file [default: <input-stem>_<platform>.md next to the input]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Rewrite the body with an LLM
    #[arg(long)]
    pub use_llm: bool,

    /// LLM provider: gemini or openrouter [default: gemini]
    #[arg(long)]
    pub llm_provider: Option<String>,

    /// Model to use instead of the provider default
    #[arg(short, long)]
    pub model: Option<String>,

    /// Prompt file rendered around the body before it is sent to the LLM
    #[arg(long, visible_alias = "prompt")]
    pub prompt_file: Option<PathBuf>,

    /// Article template inserted into the prompt
    #[arg(long, visible_alias = "template-file")]
    pub template: Option<PathBuf>,

    /// Add an LLM generated summary to the front-matter
    #[arg(long)]
    pub generate_summary: bool,

    /// Length the summary should stay within [default: 100]
    #[arg(long)]
    pub summary_length: Option<usize>,

    /// API key, either `provider:key` or `key` (can also be set via GEMINI_API_KEY or OPENROUTER_API_KEY)
    #[arg(long)]
    pub api_key: Option<String>,

    /// Settings file (TOML or YAML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log pipeline steps to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// `<dir>/<stem>_<platform>.md`, alongside the input file.
pub fn default_output_path(input: &Path, platform: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    input.with_file_name(format!("{}_{}.md", stem, platform))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal() {
        let cli = Cli::try_parse_from(["content-converter", "--input", "input.md"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("input.md"));
        assert_eq!(cli.platform, None);
        assert_eq!(cli.output, None);
        assert!(!cli.use_llm);
        assert!(!cli.generate_summary);
        assert_eq!(cli.summary_length, None);
    }

    #[test]
    fn test_input_is_required() {
        assert!(Cli::try_parse_from(["content-converter", "--platform", "note"]).is_err());
    }

    #[test]
    fn test_parse_llm_options() {
        let cli = Cli::try_parse_from([
            "content-converter",
            "-i",
            "input.md",
            "--platform",
            "note",
            "-o",
            "output.md",
            "--use-llm",
            "--llm-provider",
            "openrouter",
            "--model",
            "custom/model",
            "--generate-summary",
            "--summary-length",
            "200",
            "--api-key",
            "openrouter:secret",
        ])
        .unwrap();

        assert_eq!(cli.platform.as_deref(), Some("note"));
        assert_eq!(cli.output, Some(PathBuf::from("output.md")));
        assert!(cli.use_llm);
        assert_eq!(cli.llm_provider.as_deref(), Some("openrouter"));
        assert_eq!(cli.model.as_deref(), Some("custom/model"));
        assert!(cli.generate_summary);
        assert_eq!(cli.summary_length, Some(200));
        assert_eq!(cli.api_key.as_deref(), Some("openrouter:secret"));
    }

    #[test]
    fn test_prompt_and_template_aliases() {
        let cli = Cli::try_parse_from([
            "content-converter",
            "--input",
            "input.md",
            "--prompt",
            "prompt.txt",
            "--template-file",
            "template.md",
        ])
        .unwrap();
        assert_eq!(cli.prompt_file, Some(PathBuf::from("prompt.txt")));
        assert_eq!(cli.template, Some(PathBuf::from("template.md")));

        let cli = Cli::try_parse_from([
            "content-converter",
            "--input",
            "input.md",
            "--prompt-file",
            "prompt.txt",
            "--template",
            "template.md",
        ])
        .unwrap();
        assert_eq!(cli.prompt_file, Some(PathBuf::from("prompt.txt")));
        assert_eq!(cli.template, Some(PathBuf::from("template.md")));
    }

    #[test]
    fn test_default_output_path() {
        assert_eq!(
            default_output_path(Path::new("docs/article.md"), "zenn"),
            PathBuf::from("docs/article_zenn.md")
        );
        assert_eq!(
            default_output_path(Path::new("draft"), "note"),
            PathBuf::from("draft_note.md")
        );
    }
}

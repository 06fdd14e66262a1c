//! Builds the text sent to the LLM from a prompt file, an optional article
//! template and the document body.
//!
//! Prompts have two placeholders: `{{input}}` (the body) and `{{template}}`
//! (the contents of the template file, or an empty string). The built-in
//! prompt is rendered with tera. A user prompt file only has those two
//! placeholders replaced; any other `{{...}}`, `{% %}` or `{# #}` is sent as
//! written, since prompts usually quote the template's own `{{title}}`.
use std::fs;
use std::path::Path;

use serde::Serialize;
use tera::{Context, Error as TeraError, Tera};
use tracing::{debug, warn};

use crate::errors::Result;

pub const DEFAULT_PROMPT: &str = include_str!("prompts/default_prompt.txt");

#[derive(Debug, Serialize)]
pub struct PromptContext<'a> {
    pub input: &'a str,
    pub template: &'a str,
}

pub fn load_prompt<T: Serialize>(template: &str, context_data: &T) -> std::result::Result<String, TeraError> {
    let mut tera = Tera::default();
    tera.add_raw_template("inline_template", template)?;
    let context = Context::from_serialize(context_data)?;
    let rendered = tera.render("inline_template", &context)?;
    Ok(rendered)
}

/// Replace `{{input}}` and `{{template}}` in `prompt`, with or without inner
/// spaces. Substituted text is not scanned again.
pub fn fill_placeholders(prompt: &str, context: &PromptContext<'_>) -> String {
    let mut filled = String::with_capacity(prompt.len() + context.input.len() + context.template.len());
    let mut rest = prompt;

    while let Some(start) = rest.find("{{") {
        filled.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let value = after
            .find("}}")
            .and_then(|end| match after[..end].trim() {
                "input" => Some((context.input, end)),
                "template" => Some((context.template, end)),
                _ => None,
            });

        match value {
            Some((value, end)) => {
                filled.push_str(value);
                rest = &after[end + 2..];
            }
            None => {
                filled.push_str("{{");
                rest = after;
            }
        }
    }

    filled.push_str(rest);
    filled
}

fn load_prompt_file(path: &Path, context: &PromptContext<'_>) -> std::result::Result<String, TeraError> {
    let prompt = fs::read_to_string(path).map_err(|e| TeraError::chain("Failed to read prompt file", e))?;
    Ok(fill_placeholders(&prompt, context))
}

/// Render the prompt for `input`.
///
/// A prompt file that does not exist falls back to [`DEFAULT_PROMPT`]; a
/// template file that does not exist renders as an empty template.
pub fn assemble_prompt(
    prompt_file: Option<&Path>,
    template_file: Option<&Path>,
    input: &str,
) -> Result<String> {
    let template = match template_file {
        Some(path) if path.is_file() => {
            fs::read_to_string(path).map_err(|e| TeraError::chain("Failed to read template file", e))?
        }
        Some(path) => {
            warn!(path = %path.display(), "template file not found, using an empty template");
            String::new()
        }
        None => String::new(),
    };

    let context = PromptContext {
        input,
        template: &template,
    };

    let prompt = match prompt_file {
        Some(path) if path.is_file() => {
            debug!(path = %path.display(), "using prompt file");
            load_prompt_file(path, &context)?
        }
        Some(path) => {
            warn!(path = %path.display(), "prompt file not found, using the default prompt");
            load_prompt(DEFAULT_PROMPT, &context)?
        }
        None => load_prompt(DEFAULT_PROMPT, &context)?,
    };

    Ok(prompt)
}

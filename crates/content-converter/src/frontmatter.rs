//! Reading and writing markdown documents with a `---` delimited YAML header.
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde_yaml::Value;
use tracing::warn;

use crate::content::{Metadata, ParsedContent};
use crate::errors::{ConvertError, Result};

const DELIMITER: &str = "---";

/// Split a document into metadata and body.
///
/// Front-matter that is not valid YAML, or is not a mapping, is dropped with a
/// warning and the text after the closing delimiter is kept as the body.
pub fn parse(text: &str) -> ParsedContent {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    match split(text) {
        Some((header, body)) => ParsedContent::new(parse_metadata(header), body),
        None => ParsedContent::from_body(text),
    }
}

/// Returns the raw header and the body, or `None` when the document has no
/// complete front-matter block.
fn split(text: &str) -> Option<(&str, &str)> {
    let mut lines = text.split_inclusive('\n');
    let first = lines.next()?;
    if !is_delimiter(first) {
        return None;
    }

    let header_start = first.len();
    let mut offset = header_start;
    for line in lines {
        if is_delimiter(line) {
            return Some((&text[header_start..offset], &text[offset + line.len()..]));
        }
        offset += line.len();
    }
    None
}

fn is_delimiter(line: &str) -> bool {
    line.trim_end() == DELIMITER
}

fn parse_metadata(header: &str) -> Metadata {
    if header.trim().is_empty() {
        return Metadata::new();
    }

    match serde_yaml::from_str::<Value>(header) {
        Ok(Value::Mapping(metadata)) => metadata,
        Ok(Value::Null) => Metadata::new(),
        Ok(other) => {
            warn!(kind = ?other, "front-matter is not a mapping, ignoring it");
            Metadata::new()
        }
        Err(err) => {
            warn!(error = %err, "malformed front-matter, ignoring it");
            Metadata::new()
        }
    }
}

/// Read and parse a markdown file.
pub fn read_file(path: impl AsRef<Path>) -> Result<ParsedContent> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|err| match err.kind() {
        ErrorKind::NotFound => ConvertError::NotFound(path.to_path_buf()),
        _ => ConvertError::Parse {
            path: path.to_path_buf(),
            message: err.to_string(),
        },
    })?;

    Ok(parse(&text))
}

/// Serialize content back into a front-matter document.
pub fn render(content: &ParsedContent) -> Result<String> {
    let mut document = String::from(DELIMITER);
    document.push('\n');

    if !content.metadata.is_empty() {
        let header = serde_yaml::to_string(&content.metadata)
            .map_err(|e| ConvertError::InvalidContent(e.to_string()))?;
        document.push_str(&header);
        if !header.ends_with('\n') {
            document.push('\n');
        }
    }

    document.push_str(DELIMITER);
    document.push('\n');
    document.push_str(&content.content);
    Ok(document)
}

/// Render content and write it to `path`, replacing any existing file.
pub fn write_file(content: &ParsedContent, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let document = render(content)?;
    fs::write(path, document).map_err(|source| ConvertError::Io {
        path: path.to_path_buf(),
        source,
    })
}

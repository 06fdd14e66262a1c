use serde_yaml::Value;

use super::{ensure_list, rename_if_absent, set_default, PlatformConfig, PlatformProvider};
use crate::content::{ConvertedContent, ParsedContent};

pub const DEFAULT_TITLE: &str = "Untitled Note";
pub const DEFAULT_STATUS: &str = "draft";
pub const STATUSES: [&str; 2] = ["draft", "public"];

/// note.com posts.
#[derive(Debug, Clone, Default)]
pub struct NoteProvider {
    config: PlatformConfig,
}

impl NoteProvider {
    pub fn new(config: PlatformConfig) -> Self {
        Self { config }
    }
}

impl PlatformProvider for NoteProvider {
    fn name(&self) -> &'static str {
        "note"
    }

    fn convert(&self, content: &ParsedContent) -> ConvertedContent {
        let mut metadata = content.metadata.clone();

        set_default(
            &mut metadata,
            "title",
            self.config.default_title.as_deref().unwrap_or(DEFAULT_TITLE),
        );

        // Renames go first so the defaults below never shadow a legacy key.
        rename_if_absent(&mut metadata, "topics", "hashtags");
        ensure_list(&mut metadata, "hashtags");
        rename_if_absent(&mut metadata, "image", "eyecatch");

        set_default(
            &mut metadata,
            "status",
            self.config.default_status.as_deref().unwrap_or(DEFAULT_STATUS),
        );

        ConvertedContent::new(metadata, content.content.clone())
    }

    fn validate(&self, content: &ConvertedContent) -> bool {
        let metadata = &content.metadata;

        if !metadata.contains_key("title") {
            return false;
        }

        match metadata.get("status") {
            None => true,
            Some(status) => status.as_str().is_some_and(|s| STATUSES.contains(&s)),
        }
    }
}

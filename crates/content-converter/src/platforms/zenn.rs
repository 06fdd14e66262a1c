use serde_yaml::Value;

use super::{ensure_list, set_default, PlatformConfig, PlatformProvider};
use crate::content::{ConvertedContent, ParsedContent};

pub const DEFAULT_TITLE: &str = "Untitled Article";
pub const DEFAULT_EMOJI: &str = "✨";
pub const DEFAULT_TYPE: &str = "tech";
pub const ARTICLE_TYPES: [&str; 2] = ["tech", "idea"];
pub const MAX_TOPICS: usize = 4;

const REQUIRED_FIELDS: [&str; 4] = ["title", "emoji", "type", "topics"];

/// zenn.dev articles.
#[derive(Debug, Clone, Default)]
pub struct ZennProvider {
    config: PlatformConfig,
}

impl ZennProvider {
    pub fn new(config: PlatformConfig) -> Self {
        Self { config }
    }
}

impl PlatformProvider for ZennProvider {
    fn name(&self) -> &'static str {
        "zenn"
    }

    fn convert(&self, content: &ParsedContent) -> ConvertedContent {
        let mut metadata = content.metadata.clone();

        set_default(
            &mut metadata,
            "title",
            self.config.default_title.as_deref().unwrap_or(DEFAULT_TITLE),
        );
        set_default(
            &mut metadata,
            "emoji",
            self.config.default_emoji.as_deref().unwrap_or(DEFAULT_EMOJI),
        );
        set_default(
            &mut metadata,
            "type",
            self.config.default_type.as_deref().unwrap_or(DEFAULT_TYPE),
        );

        ensure_list(&mut metadata, "topics");
        if let Some(Value::Sequence(topics)) = metadata.get_mut("topics") {
            topics.truncate(MAX_TOPICS);
        }

        set_default(&mut metadata, "published", true);

        ConvertedContent::new(metadata, content.content.clone())
    }

    fn validate(&self, content: &ConvertedContent) -> bool {
        let metadata = &content.metadata;

        if !REQUIRED_FIELDS.iter().all(|field| metadata.contains_key(*field)) {
            return false;
        }

        let type_ok = metadata
            .get("type")
            .and_then(Value::as_str)
            .is_some_and(|t| ARTICLE_TYPES.contains(&t));

        let topics_ok = metadata
            .get("topics")
            .and_then(Value::as_sequence)
            .is_some_and(|topics| topics.len() <= MAX_TOPICS);

        type_ok && topics_ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(yaml: &str, body: &str) -> ParsedContent {
        ParsedContent::new(serde_yaml::from_str(yaml).unwrap(), body)
    }

    #[test]
    fn test_convert_fills_defaults() {
        let provider = ZennProvider::default();
        let input = ParsedContent::from_body("# Hello\n");

        let converted = provider.convert(&input);

        assert_eq!(converted.get_str("title"), Some("Untitled Article"));
        assert_eq!(converted.get_str("emoji"), Some("✨"));
        assert_eq!(converted.get_str("type"), Some("tech"));
        assert_eq!(converted.metadata.get("topics"), Some(&Value::Sequence(vec![])));
        assert_eq!(converted.metadata.get("published"), Some(&Value::Bool(true)));
        assert_eq!(converted.content, "# Hello\n");
        assert!(provider.validate(&converted));
    }

    #[test]
    fn test_convert_keeps_existing_fields() {
        let provider = ZennProvider::default();
        let input = parsed(
            "title: Rust入門\nemoji: 🦀\ntype: idea\ntopics: [rust]\npublished: false\n",
            "body",
        );

        let converted = provider.convert(&input);

        assert_eq!(converted.get_str("title"), Some("Rust入門"));
        assert_eq!(converted.get_str("emoji"), Some("🦀"));
        assert_eq!(converted.get_str("type"), Some("idea"));
        assert_eq!(converted.metadata.get("published"), Some(&Value::Bool(false)));
    }

    #[test]
    fn test_convert_truncates_topics_in_order() {
        let provider = ZennProvider::default();
        let input = parsed(
            "topics: [Python, Markdown, Zenn, Content, Converter]",
            "",
        );

        let converted = provider.convert(&input);

        assert_eq!(
            converted.metadata.get("topics"),
            Some(&Value::from(vec!["Python", "Markdown", "Zenn", "Content"]))
        );
    }

    #[test]
    fn test_convert_coerces_scalar_topic() {
        let provider = ZennProvider::default();
        let converted = provider.convert(&parsed("topics: rust", ""));
        assert_eq!(converted.metadata.get("topics"), Some(&Value::from(vec!["rust"])));
    }

    #[test]
    fn test_convert_does_not_mutate_input() {
        let provider = ZennProvider::default();
        let input = parsed("topics: [a, b, c, d, e]", "body");
        let before = input.clone();

        let _ = provider.convert(&input);
        assert_eq!(input, before);
    }

    #[test]
    fn test_convert_uses_configured_defaults() {
        let provider = ZennProvider::new(PlatformConfig {
            default_emoji: Some("📝".to_string()),
            default_type: Some("idea".to_string()),
            ..Default::default()
        });

        let converted = provider.convert(&ParsedContent::from_body(""));
        assert_eq!(converted.get_str("emoji"), Some("📝"));
        assert_eq!(converted.get_str("type"), Some("idea"));
        assert_eq!(converted.get_str("title"), Some(DEFAULT_TITLE));
    }

    #[test]
    fn test_validate_missing_required_fields() {
        let provider = ZennProvider::default();
        assert!(!provider.validate(&parsed("title: x", "")));
        assert!(!provider.validate(&parsed("title: x\nemoji: ✨\ntype: tech", "")));
    }

    #[test]
    fn test_validate_rejects_unknown_type() {
        let provider = ZennProvider::default();
        let content = parsed("title: x\nemoji: ✨\ntype: blog\ntopics: []", "");
        assert!(!provider.validate(&content));
    }

    #[test]
    fn test_validate_rejects_too_many_topics() {
        let provider = ZennProvider::default();
        let content = parsed("title: x\nemoji: ✨\ntype: tech\ntopics: [a, b, c, d, e]", "");
        assert!(!provider.validate(&content));
    }

    #[test]
    fn test_validate_accepts_idea_articles() {
        let provider = ZennProvider::default();
        let content = parsed("title: x\nemoji: ✨\ntype: idea\ntopics: [a, b, c, d]", "");
        assert!(provider.validate(&content));
    }
}

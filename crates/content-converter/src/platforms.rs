pub mod factory;
pub mod note;
pub mod zenn;

use serde::{Deserialize, Serialize};
use serde_yaml::Value;

use crate::content::{ConvertedContent, Metadata, ParsedContent};

/// Normalises and checks content for one publishing platform.
///
/// `convert` fills in whatever the platform requires and never touches its
/// input. `validate` is kept separate so content edited after conversion can
/// be checked again without re-running the defaults.
pub trait PlatformProvider: Send + Sync {
    /// Lowercase platform name, as accepted by the factory.
    fn name(&self) -> &'static str;

    fn convert(&self, content: &ParsedContent) -> ConvertedContent;

    /// Pure predicate: never panics, never errors.
    fn validate(&self, content: &ConvertedContent) -> bool;
}

/// Per-platform overrides for the values filled in when a field is missing.
///
/// Every field is optional and unknown keys are ignored, so the same mapping
/// can be shared with the converter settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformConfig {
    pub default_title: Option<String>,
    /// Zenn only.
    pub default_emoji: Option<String>,
    /// Zenn only.
    pub default_type: Option<String>,
    /// note.com only.
    pub default_status: Option<String>,
}

pub(crate) fn set_default(metadata: &mut Metadata, key: &str, value: impl Into<Value>) {
    if !metadata.contains_key(key) {
        metadata.insert(Value::from(key), value.into());
    }
}

/// Move `from` to `to` unless `to` is already set.
pub(crate) fn rename_if_absent(metadata: &mut Metadata, from: &str, to: &str) {
    if metadata.contains_key(to) {
        return;
    }
    if let Some(value) = metadata.remove(from) {
        metadata.insert(Value::from(to), value);
    }
}

/// Make sure `key` holds a list: missing or null becomes empty, a scalar
/// becomes a one-element list.
pub(crate) fn ensure_list(metadata: &mut Metadata, key: &str) {
    match metadata.get_mut(key) {
        Some(Value::Sequence(_)) => {}
        Some(value) if value.is_null() => *value = Value::Sequence(Vec::new()),
        Some(value) => {
            let scalar = std::mem::replace(value, Value::Null);
            *value = Value::Sequence(vec![scalar]);
        }
        None => {
            metadata.insert(Value::from(key), Value::Sequence(Vec::new()));
        }
    }
}

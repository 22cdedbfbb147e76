//! Emoji records, custom entries and the locale-tagged dataset.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Tag prepended to every custom entry so views can group them.
pub const CUSTOM_TAG: &str = "custom";

/// Identifies the language/region variant of the dataset.
///
/// Equality is the only thing the cache cares about; the string itself is opaque.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocaleKey(String);

impl LocaleKey {
    pub fn new(locale: impl Into<String>) -> Self {
        Self(locale.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for LocaleKey {
    fn default() -> Self {
        Self::new("en")
    }
}

impl fmt::Display for LocaleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LocaleKey {
    fn from(locale: &str) -> Self {
        Self::new(locale)
    }
}

/// A user-supplied entry, as it arrives in the picker options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomEmoji {
    pub label: String,
    #[serde(default)]
    pub emoji: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

impl CustomEmoji {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            emoji: None,
            url: None,
            tags: None,
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }
}

/// One displayable item, either from the dataset or normalized from a [`CustomEmoji`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmojiRecord {
    pub label: String,
    #[serde(default)]
    pub emoji: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub group: Option<u32>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub custom: bool,
}

impl From<CustomEmoji> for EmojiRecord {
    /// Marks the entry as custom and puts [`CUSTOM_TAG`] ahead of the user's own tags.
    fn from(custom: CustomEmoji) -> Self {
        let mut tags = Vec::with_capacity(1 + custom.tags.as_ref().map_or(0, Vec::len));
        tags.push(CUSTOM_TAG.to_string());
        tags.extend(custom.tags.unwrap_or_default());

        Self {
            label: custom.label,
            emoji: custom.emoji,
            url: custom.url,
            group: None,
            tags,
            custom: true,
        }
    }
}

/// A named category in the dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmojiGroup {
    pub key: String,
    pub order: u32,
    pub message: String,
}

/// The loaded dataset for one locale.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EmojiData {
    pub locale: LocaleKey,
    pub groups: Vec<EmojiGroup>,
    pub emojis: Vec<EmojiRecord>,
}

impl EmojiData {
    pub fn len(&self) -> usize {
        self.emojis.len()
    }

    pub fn is_empty(&self) -> bool {
        self.emojis.is_empty()
    }
}

//! Picker configuration.
//!
//! Hosts hand in a [`PartialPickerOptions`] (everything optional, usually parsed from JSON);
//! an [`OptionsResolver`](crate::view::OptionsResolver) turns it into a fully defaulted
//! [`PickerOptions`].

use crate::model::{CustomEmoji, LocaleKey};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Errors produced while reading host-supplied options.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OptionsError {
    #[error("Invalid options JSON: {0}")]
    InvalidJson(String),
}

/// How emojis are drawn by the view layer. Passed through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Renderer {
    #[default]
    Native,
    Image {
        url_template: String,
    },
}

/// Where the loader keeps the dataset between fetches.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DataStoreKind {
    #[default]
    InMemory,
    Persistent {
        name: String,
    },
}

/// Overrides for the picker's UI strings, keyed by message id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct I18nStrings(pub BTreeMap<String, String>);

/// Raw inputs forwarded to the [`DataLoader`](crate::data::DataLoader).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoaderParams {
    pub data_store: DataStoreKind,
    pub messages: Option<serde_json::Value>,
    pub emoji_data: Option<serde_json::Value>,
}

/// Options as supplied by the host application.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PartialPickerOptions {
    pub locale: Option<LocaleKey>,
    pub data_store: Option<DataStoreKind>,
    pub messages: Option<serde_json::Value>,
    pub emoji_data: Option<serde_json::Value>,
    pub custom: Option<Vec<CustomEmoji>>,
    pub renderer: Option<Renderer>,
    pub i18n: Option<I18nStrings>,
    pub emojis_per_row: Option<u32>,
    pub visible_rows: Option<u32>,
    pub show_preview: Option<bool>,
}

impl PartialPickerOptions {
    pub fn from_json(json: &str) -> Result<Self, OptionsError> {
        serde_json::from_str(json).map_err(|e| OptionsError::InvalidJson(e.to_string()))
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(LocaleKey::new(locale));
        self
    }

    pub fn with_custom(mut self, custom: Vec<CustomEmoji>) -> Self {
        self.custom = Some(custom);
        self
    }
}

/// Fully resolved options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PickerOptions {
    pub locale: LocaleKey,
    pub data_store: DataStoreKind,
    pub messages: Option<serde_json::Value>,
    pub emoji_data: Option<serde_json::Value>,
    pub custom: Vec<CustomEmoji>,
    pub renderer: Renderer,
    pub i18n: I18nStrings,
    pub emojis_per_row: u32,
    pub visible_rows: u32,
    pub show_preview: bool,
}

impl Default for PickerOptions {
    fn default() -> Self {
        Self {
            locale: LocaleKey::default(),
            data_store: DataStoreKind::default(),
            messages: None,
            emoji_data: None,
            custom: Vec::new(),
            renderer: Renderer::default(),
            i18n: I18nStrings::default(),
            emojis_per_row: 8,
            visible_rows: 6,
            show_preview: true,
        }
    }
}

impl PickerOptions {
    /// The subset of options the dataset loader consumes.
    pub fn loader_params(&self) -> LoaderParams {
        LoaderParams {
            data_store: self.data_store.clone(),
            messages: self.messages.clone(),
            emoji_data: self.emoji_data.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_camel_case_host_json() {
        let partial = PartialPickerOptions::from_json(
            r#"{
                "locale": "fr",
                "emojisPerRow": 10,
                "dataStore": { "persistent": { "name": "picker-db" } },
                "custom": [{ "label": "Parrot", "url": "parrot.gif", "tags": ["bird"] }]
            }"#,
        )
        .unwrap();

        assert_eq!(partial.locale, Some(LocaleKey::new("fr")));
        assert_eq!(partial.emojis_per_row, Some(10));
        assert_eq!(
            partial.data_store,
            Some(DataStoreKind::Persistent { name: "picker-db".into() })
        );
        assert_eq!(partial.custom.unwrap()[0].tags, Some(vec!["bird".to_string()]));
        assert!(partial.visible_rows.is_none());
    }

    #[test]
    fn rejects_malformed_json() {
        let err = PartialPickerOptions::from_json("{ locale: ").unwrap_err();
        assert!(matches!(err, OptionsError::InvalidJson(_)));
    }

    #[test]
    fn loader_params_mirror_options() {
        let options = PickerOptions {
            emoji_data: Some(serde_json::json!([])),
            ..PickerOptions::default()
        };
        let params = options.loader_params();
        assert_eq!(params.data_store, DataStoreKind::InMemory);
        assert_eq!(params.emoji_data, Some(serde_json::json!([])));
        assert!(params.messages.is_none());
    }
}

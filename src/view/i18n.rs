//! UI strings: built-in defaults overlaid with host overrides.

use crate::model::I18nStrings;
use std::collections::BTreeMap;

const DEFAULT_STRINGS: &[(&str, &str)] = &[
    ("search", "Search"),
    ("search.notFound", "No results found"),
    ("error.load", "Failed to load emojis"),
    ("retry", "Try again"),
    ("loading", "Loading..."),
    ("recents.none", "You haven't selected any emojis yet"),
    ("categories.recents", "Recently used"),
    ("categories.custom", "Custom"),
];

/// UI strings for a picker: built-in defaults overlaid with host overrides.
#[derive(Debug, Clone, PartialEq)]
pub struct Bundle {
    strings: BTreeMap<String, String>,
}

impl Default for Bundle {
    fn default() -> Self {
        Self::new(&I18nStrings::default())
    }
}

impl Bundle {
    pub fn new(overrides: &I18nStrings) -> Self {
        let mut strings: BTreeMap<String, String> = DEFAULT_STRINGS
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        strings.extend(overrides.0.iter().map(|(k, v)| (k.clone(), v.clone())));
        Self { strings }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.strings.get(key).map(String::as_str)
    }

    pub fn get_or<'a>(&'a self, key: &str, fallback: &'a str) -> &'a str {
        self.get(key).unwrap_or(fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_win_over_defaults() {
        let mut overrides = I18nStrings::default();
        overrides.0.insert("search".into(), "Suchen".into());
        let bundle = Bundle::new(&overrides);

        assert_eq!(bundle.get("search"), Some("Suchen"));
        assert_eq!(bundle.get("retry"), Some("Try again"));
        assert_eq!(bundle.get_or("nope", "fallback"), "fallback");
    }
}

//! Configuration shape-checking and built-in defaults.
//!
//! The host's configuration store is untyped; values arrive as raw
//! [`serde_json::Value`]s. This module defends the rest of the engine against
//! malformed externally-supplied configuration by falling back to built-in defaults
//! whenever a stored value has the wrong shape, without raising an error.
//!
//! The checks here are *shape* checks only. A stored string that is not a valid
//! color still lands in [`HighlightConfig::background_color`] and is caught by
//! [`crate::color::is_valid_color`] when the decoration is (re)built.

use serde_json::Value;

/// The add-on's configuration namespace.
pub const CONFIG_NAMESPACE: &str = "snippetHighlight";

/// Configuration key for the highlight background color.
pub const KEY_BACKGROUND_COLOR: &str = "backgroundColor";

/// Configuration key for the list of language tags highlighting applies to.
pub const KEY_SUPPORTED_LANGUAGES: &str = "supportedLanguages";

/// Background color used when nothing (or something malformed) is stored.
pub const DEFAULT_BACKGROUND_COLOR: &str = "rgba(50, 120, 200, 0.6)";

/// Language tags highlighted when nothing (or something malformed) is stored.
pub const DEFAULT_SUPPORTED_LANGUAGES: &[&str] = &["php", "html", "blade", "phtml"];

/// Shape-checked add-on configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightConfig {
    /// The decoration background color, in textual form. Guaranteed to be a string,
    /// not guaranteed to be a *valid* color.
    pub background_color: String,
    /// Language tags for which highlighting is active.
    pub supported_languages: Vec<String>,
}

impl HighlightConfig {
    /// Build a config from raw stored values.
    ///
    /// - `background` is kept only when it is a JSON string.
    /// - `languages` is kept only when it is a JSON array; its string elements are
    ///   taken, non-string elements are dropped.
    /// - Anything else, a missing value included, falls back to the built-in default.
    pub fn from_values(background: Option<&Value>, languages: Option<&Value>) -> Self {
        let background_color = match background.and_then(Value::as_str) {
            Some(color) => color.to_string(),
            None => DEFAULT_BACKGROUND_COLOR.to_string(),
        };

        let supported_languages = match languages.and_then(Value::as_array) {
            Some(entries) => entries
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect(),
            None => default_languages(),
        };

        Self {
            background_color,
            supported_languages,
        }
    }

    /// Returns `true` if highlighting is active for the given language tag.
    pub fn supports_language(&self, language: &str) -> bool {
        self.supported_languages.iter().any(|l| l == language)
    }
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}

fn default_languages() -> Vec<String> {
    DEFAULT_SUPPORTED_LANGUAGES
        .iter()
        .map(|l| (*l).to_string())
        .collect()
}

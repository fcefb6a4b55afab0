//! Highlight state and render planning.
//!
//! [`plan_render`] is the pure core of the re-render path: it turns the current
//! state, configuration, and document text into a [`RenderEdit`] instruction that the
//! host boundary applies. It never touches the host and never fails; calling it twice
//! with unchanged inputs yields an identical instruction, so re-rendering is safe to
//! repeat.

use crate::config::{DEFAULT_BACKGROUND_COLOR, HighlightConfig};
use crate::scanner::{BlockScanner, HighlightRange};

/// The process-wide highlight state.
///
/// One instance lives for the session's lifetime. It is mutated only by the toggle
/// command and by configuration/color changes, and destroyed at deactivation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightState {
    /// Whether highlighting is currently enabled.
    pub enabled: bool,
    /// The color the active decoration was built with.
    pub color: String,
}

impl HighlightState {
    /// Create a state with highlighting enabled and the given decoration color.
    pub fn new(color: impl Into<String>) -> Self {
        Self {
            enabled: true,
            color: color.into(),
        }
    }
}

impl Default for HighlightState {
    fn default() -> Self {
        Self::new(DEFAULT_BACKGROUND_COLOR)
    }
}

/// A render instruction for the currently focused document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderEdit {
    /// Remove every block decoration from the document.
    ClearHighlights,
    /// Replace the document's block decorations: one per range, filled with `color`.
    ReplaceHighlights {
        /// Block spans, in document order, non-overlapping.
        ranges: Vec<HighlightRange>,
        /// The decoration fill color.
        color: String,
    },
}

/// Compute the render instruction for a document.
///
/// The instruction is [`RenderEdit::ClearHighlights`] when highlighting is disabled
/// or `language` is not in the configured list, regardless of the document's content.
/// Otherwise the document is scanned and every block gets one decoration.
pub fn plan_render(
    scanner: &BlockScanner,
    state: &HighlightState,
    config: &HighlightConfig,
    language: &str,
    text: &str,
) -> RenderEdit {
    if !state.enabled || !config.supports_language(language) {
        return RenderEdit::ClearHighlights;
    }

    RenderEdit::ReplaceHighlights {
        ranges: scanner.scan(text),
        color: state.color.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = "<p>intro</p><?php echo $x; ?><p>outro</p>";

    #[test]
    fn test_disabled_state_always_clears() {
        let scanner = BlockScanner::new();
        let state = HighlightState {
            enabled: false,
            ..HighlightState::default()
        };
        let config = HighlightConfig::default();

        let edit = plan_render(&scanner, &state, &config, "php", DOC);
        assert_eq!(edit, RenderEdit::ClearHighlights);
    }

    #[test]
    fn test_unsupported_language_always_clears() {
        let scanner = BlockScanner::new();
        let state = HighlightState::default();
        let mut config = HighlightConfig::default();
        config.supported_languages = vec!["php".to_string()];

        let edit = plan_render(&scanner, &state, &config, "html", DOC);
        assert_eq!(edit, RenderEdit::ClearHighlights);
    }

    #[test]
    fn test_enabled_and_supported_replaces_highlights() {
        let scanner = BlockScanner::new();
        let state = HighlightState::new("#f0f8ff");
        let config = HighlightConfig::default();

        match plan_render(&scanner, &state, &config, "php", DOC) {
            RenderEdit::ReplaceHighlights { ranges, color } => {
                assert_eq!(ranges, vec![HighlightRange::new(12, 29)]);
                assert_eq!(color, "#f0f8ff");
            }
            RenderEdit::ClearHighlights => panic!("expected a replace instruction"),
        }
    }

    #[test]
    fn test_replace_with_no_blocks_is_an_empty_replace() {
        let scanner = BlockScanner::new();
        let state = HighlightState::default();
        let config = HighlightConfig::default();

        match plan_render(&scanner, &state, &config, "php", "no markers here") {
            RenderEdit::ReplaceHighlights { ranges, .. } => assert!(ranges.is_empty()),
            RenderEdit::ClearHighlights => panic!("expected a replace instruction"),
        }
    }

    #[test]
    fn test_render_is_idempotent() {
        let scanner = BlockScanner::new();
        let state = HighlightState::default();
        let config = HighlightConfig::default();

        let first = plan_render(&scanner, &state, &config, "php", DOC);
        let second = plan_render(&scanner, &state, &config, "php", DOC);
        assert_eq!(first, second);
    }

    #[test]
    fn test_toggle_twice_restores_render_output() {
        let scanner = BlockScanner::new();
        let mut state = HighlightState::default();
        let config = HighlightConfig::default();

        let before = plan_render(&scanner, &state, &config, "php", DOC);
        state.enabled = !state.enabled;
        let toggled = plan_render(&scanner, &state, &config, "php", DOC);
        state.enabled = !state.enabled;
        let after = plan_render(&scanner, &state, &config, "php", DOC);

        assert_eq!(toggled, RenderEdit::ClearHighlights);
        assert_eq!(before, after);
        assert!(state.enabled);
    }
}

//! Color string validation.
//!
//! Validation is purely syntactic: it checks that a string *looks like* one of the
//! accepted textual forms and performs no numeric range checking, so `rgb(999, 0, 0)`
//! passes. Accepted forms:
//!
//! - `rgb(r, g, b)` / `rgba(r, g, b, a)` with digit-run channels and an alpha written
//!   as `0` or `1` with an optional fractional part (so `1.6` is lexically accepted)
//! - `#` plus a hex triplet or sextuplet
//! - a bare alphabetic color name (`steelblue`)
//!
//! Anything else, `hsl(...)` included, is rejected.

use regex::Regex;

const COLOR_PATTERN: &str =
    r"^(?:rgba?\(\d+,\s*\d+,\s*\d+(?:,\s*[01](?:\.\d+)?)?\)|#(?:[0-9a-fA-F]{3}){1,2}|[A-Za-z]+)$";

/// Returns `true` if `input`, after trimming surrounding whitespace, matches one of
/// the accepted color forms.
pub fn is_valid_color(input: &str) -> bool {
    let re = Regex::new(COLOR_PATTERN).expect("valid color format regex");
    re.is_match(input.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_rgba_with_spaces() {
        assert!(is_valid_color("rgba(50, 120, 200, 0.6)"));
        assert!(is_valid_color("rgba(50,120,200,0.6)"));
    }

    #[test]
    fn test_accepts_rgb_without_alpha() {
        assert!(is_valid_color("rgb(50, 120, 200)"));
    }

    #[test]
    fn test_channel_values_are_not_range_checked() {
        assert!(is_valid_color("rgb(999, 0, 0)"));
    }

    #[test]
    fn test_alpha_grammar_is_lexical_not_numeric() {
        // `1.6` parses as leading `1` plus fraction `.6`, so it passes; `2.6` has an
        // out-of-grammar leading digit and `.6` has none at all.
        assert!(is_valid_color("rgba(50,120,200,1.6)"));
        assert!(!is_valid_color("rgba(50,120,200,2.6)"));
        assert!(!is_valid_color("rgba(50,120,200,.6)"));
        assert!(is_valid_color("rgba(50,120,200,1)"));
        assert!(is_valid_color("rgba(50,120,200,0)"));
    }

    #[test]
    fn test_unclosed_call_is_rejected() {
        assert!(!is_valid_color("rgba(50, 120, 200, 0.6"));
    }

    #[test]
    fn test_hex_forms() {
        assert!(is_valid_color("#fff"));
        assert!(is_valid_color("#f0f8ff"));
        assert!(!is_valid_color("#ggg"));
        assert!(!is_valid_color("#ffff"));
        // Without the `#` the string is just a bare alphabetic name, lexically.
        assert!(is_valid_color("fff"));
    }

    #[test]
    fn test_bare_color_names() {
        assert!(is_valid_color("steelblue"));
        assert!(is_valid_color("RED"));
        assert!(!is_valid_color("steel blue"));
        assert!(!is_valid_color("blue1"));
    }

    #[test]
    fn test_empty_and_whitespace_are_rejected() {
        assert!(!is_valid_color(""));
        assert!(!is_valid_color("   "));
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        assert!(is_valid_color("  #fff  "));
        assert!(is_valid_color("\trgba(1,2,3,0.5)\n"));
    }

    #[test]
    fn test_other_functional_forms_are_rejected() {
        assert!(!is_valid_color("hsl(120, 50%, 50%)"));
        assert!(!is_valid_color("var(--background)"));
    }
}

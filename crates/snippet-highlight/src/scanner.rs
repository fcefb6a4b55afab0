//! Marker-pair block scanning.
//!
//! The scanner is a textual pattern match, not a parser. It finds non-overlapping
//! `<? ... ?>` spans (with an optional case-insensitive `php` tag after the opening
//! marker) from left to right; each span ends at the *nearest* following end marker
//! and may cross line boundaries. A start marker with no following end marker is
//! ignored, not reported as an error.

use regex::Regex;

/// The built-in marker pattern: `<?` plus an optional case-insensitive `php` tag,
/// non-greedy through the nearest `?>`, across lines.
const BLOCK_PATTERN: &str = r"(?is)<\?(?:php)?.*?\?>";

/// A half-open character-offset span covering one embedded block, both markers
/// included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightRange {
    /// Inclusive start character offset (the `<` of the start marker).
    pub start: usize,
    /// Exclusive end character offset (one past the `>` of the end marker).
    pub end: usize,
}

impl HighlightRange {
    /// Create a new range.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the length of the range in characters.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns `true` if the range is empty. Scanner output never is.
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

#[derive(Debug)]
struct CharIndex {
    char_to_byte: Vec<usize>,
    text_len: usize,
}

impl CharIndex {
    fn new(text: &str) -> Self {
        let mut char_to_byte: Vec<usize> = text.char_indices().map(|(b, _)| b).collect();
        char_to_byte.push(text.len());
        Self {
            char_to_byte,
            text_len: text.len(),
        }
    }

    fn byte_to_char(&self, byte_offset: usize) -> usize {
        let clamped = byte_offset.min(self.text_len);
        match self.char_to_byte.binary_search(&clamped) {
            Ok(idx) => idx,
            Err(idx) => idx,
        }
    }
}

/// A scanner for embedded code blocks delimited by a start/end marker pair.
///
/// The pattern is fixed and compiled once at construction; [`scan`](Self::scan) is
/// pure and total over any input string.
#[derive(Debug, Clone)]
pub struct BlockScanner {
    regex: Regex,
}

impl BlockScanner {
    /// Compile the built-in marker pattern.
    pub fn new() -> Self {
        Self {
            regex: Regex::new(BLOCK_PATTERN).expect("valid block marker regex"),
        }
    }

    /// Find every marker-delimited block in `text`, in document order.
    ///
    /// - Matching is non-overlapping and non-greedy: each block ends at the nearest
    ///   following end marker, never the last one in the document.
    /// - A dangling start marker produces no range and does not block detection of a
    ///   later well-formed pair.
    /// - Returned ranges are half-open character offsets and always satisfy
    ///   `start < end`.
    pub fn scan(&self, text: &str) -> Vec<HighlightRange> {
        if text.is_empty() {
            return Vec::new();
        }

        let index = CharIndex::new(text);
        self.regex
            .find_iter(text)
            .map(|m| HighlightRange::new(index.byte_to_char(m.start()), index.byte_to_char(m.end())))
            .collect()
    }
}

impl Default for BlockScanner {
    fn default() -> Self {
        Self::new()
    }
}

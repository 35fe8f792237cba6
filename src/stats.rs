//! Document statistics.
//!
//! Derived, read-only counts recomputed on every buffer change. `compute`
//! is a total function of its input; there are no error conditions.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Maximal runs of word characters (letters/digits/underscore).
static WORD_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+").expect("word-run pattern is valid"));

/// Word, char, and line counts for a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DocStats {
    /// Count of maximal word-character runs in the trimmed text.
    pub words: usize,
    /// Char count of the untrimmed text, whitespace included.
    pub chars: usize,
    /// Count of newline-separated segments; an empty text has one line.
    pub lines: usize,
}

impl DocStats {
    /// Compute statistics for a document text.
    pub fn compute(text: &str) -> Self {
        Self {
            words: WORD_RUNS.find_iter(text.trim()).count(),
            chars: text.chars().count(),
            // split always yields at least one segment, so "" has 1 line
            lines: text.split('\n').count(),
        }
    }
}

impl fmt::Display for DocStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} words · {} chars · {} lines",
            self.words, self.chars, self.lines
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_has_one_line_and_nothing_else() {
        let stats = DocStats::compute("");
        assert_eq!(stats.words, 0);
        assert_eq!(stats.chars, 0);
        assert_eq!(stats.lines, 1);
    }

    #[test]
    fn test_whitespace_only_text_counts_zero_words() {
        let stats = DocStats::compute("  \n\t \n");
        assert_eq!(stats.words, 0);
        assert_eq!(stats.chars, 6);
        assert_eq!(stats.lines, 3);
    }

    #[test]
    fn test_words_are_maximal_word_character_runs() {
        // Punctuation splits runs; underscores and digits do not.
        let stats = DocStats::compute("foo_bar baz42, qux-quux");
        assert_eq!(stats.words, 4);
    }

    #[test]
    fn test_markdown_sample_counts() {
        let text = "# Title\n\nSome **bold** text\n";
        let stats = DocStats::compute(text);
        assert_eq!(stats.words, 4);
        assert_eq!(stats.chars, text.chars().count());
        assert_eq!(stats.lines, 4);
    }

    #[test]
    fn test_chars_count_unicode_scalars_not_bytes() {
        let stats = DocStats::compute("héllo 👋");
        assert_eq!(stats.chars, 7);
        assert_eq!(stats.words, 1);
    }

    #[test]
    fn test_trailing_newline_adds_a_line() {
        assert_eq!(DocStats::compute("one").lines, 1);
        assert_eq!(DocStats::compute("one\n").lines, 2);
        assert_eq!(DocStats::compute("one\ntwo").lines, 2);
    }

    #[test]
    fn test_display_formats_all_three_counts() {
        let stats = DocStats::compute("a b\nc");
        assert_eq!(stats.to_string(), "3 words · 5 chars · 2 lines");
    }
}

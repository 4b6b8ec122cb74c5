//! Short Extractor - Picks short-clip hooks out of a full script
//!
//! Rough cut suggestions only: the first few substantial lines become clip
//! descriptions with a fixed suggested length.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::truncate_chars;

/// Lines must be longer than this (in characters, after trimming) to qualify
pub const MIN_LINE_CHARS: usize = 20;
pub const MAX_SHORTS: usize = 3;
pub const DESCRIPTION_MAX_CHARS: usize = 140;
pub const SUGGESTED_DURATION_SEC: u32 = 25;

/// Line boundaries: `\n`, `\r`, form feeds, separators and NEL. A `\r\n` pair
/// leaves an empty piece between, which the length filter drops.
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
pub struct ShortSuggestion {
    /// 1-based position among the selected shorts
    pub short_id: u32,
    pub description: String,
    pub suggested_duration_sec: u32,
}

#[derive(Debug, Clone, Default)]
pub struct ShortExtractor;

impl ShortExtractor {
    pub fn new() -> Self {
        Self
    }

    pub fn extract_shorts(&self, script: &str) -> Vec<ShortSuggestion> {
        script
            .split(is_line_break)
            .map(str::trim)
            .filter(|line| line.chars().count() > MIN_LINE_CHARS)
            .take(MAX_SHORTS)
            .zip(1u32..)
            .map(|(line, short_id)| ShortSuggestion {
                short_id,
                description: truncate_chars(line, DESCRIPTION_MAX_CHARS),
                suggested_duration_sec: SUGGESTED_DURATION_SEC,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_takes_first_three_long_lines() {
        let script = "short\n\nThis line is definitely long enough\n   \nsecond qualifying line of text\nthird qualifying line of text\nfourth qualifying line of text";
        let shorts = ShortExtractor::new().extract_shorts(script);

        assert_eq!(shorts.len(), 3);
        assert_eq!(shorts[0].description, "This line is definitely long enough");
        assert_eq!(shorts[2].description, "third qualifying line of text");
        assert!(shorts.iter().all(|s| s.suggested_duration_sec == 25));
    }

    #[test]
    fn test_ids_follow_selection_not_line_index() {
        let script = "tiny\nanother tiny\nThis is the first long line here\nno\nThis is the second long line here";
        let shorts = ShortExtractor::new().extract_shorts(script);

        let ids: Vec<u32> = shorts.iter().map(|s| s.short_id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_exactly_twenty_chars_does_not_qualify() {
        let twenty = "a".repeat(20);
        let twenty_one = "b".repeat(21);
        let script = format!("{twenty}\n  {twenty_one}  ");
        let shorts = ShortExtractor::new().extract_shorts(&script);

        assert_eq!(shorts.len(), 1);
        assert_eq!(shorts[0].description, twenty_one);
    }

    #[test]
    fn test_description_truncated() {
        let long = "y".repeat(400);
        let shorts = ShortExtractor::new().extract_shorts(&long);
        assert_eq!(shorts[0].description.chars().count(), DESCRIPTION_MAX_CHARS);
    }

    #[test]
    fn test_splits_on_carriage_return_and_unicode_separators() {
        let script = "first line that is long enough\rsecond line that is long enough\u{2028}third line that is long enough\r\nfourth line";
        let shorts = ShortExtractor::new().extract_shorts(script);

        let descriptions: Vec<&str> = shorts.iter().map(|s| s.description.as_str()).collect();
        assert_eq!(
            descriptions,
            vec![
                "first line that is long enough",
                "second line that is long enough",
                "third line that is long enough",
            ]
        );
    }

    #[test]
    fn test_no_candidates_yields_empty() {
        assert!(ShortExtractor::new().extract_shorts("").is_empty());
        assert!(ShortExtractor::new().extract_shorts("a\nb\n\n   \nc").is_empty());
    }
}

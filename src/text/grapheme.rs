//! Name segmentation.
//!
//! A display name is handled as a sequence of units, never as bytes. By
//! default a unit is one code point: a character outside the BMP (two UTF-16
//! code units, a surrogate pair) is one unit, and every other code unit is
//! one unit of its own. [`Segmentation::Grapheme`] groups extended grapheme
//! clusters instead, so combining marks and ZWJ sequences stay attached.

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

/// How a string is cut into units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Segmentation {
    /// One unit per code point.
    #[default]
    CodePoint,
    /// One unit per extended grapheme cluster.
    Grapheme,
}

/// An ordered sequence of name units.
///
/// Joining the units in order always reproduces the segmented string exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphemeSequence {
    units: Vec<String>,
}

impl GraphemeSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode raw UTF-16 code units into one unit per code point.
    ///
    /// A high surrogate followed by a low surrogate is a single unit. An
    /// unpaired surrogate cannot be held by a Rust string, so each one becomes
    /// its own U+FFFD unit.
    pub fn from_utf16(code_units: &[u16]) -> Self {
        char::decode_utf16(code_units.iter().copied())
            .map(|decoded| decoded.unwrap_or(char::REPLACEMENT_CHARACTER).to_string())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn units(&self) -> &[String] {
        &self.units
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.units.iter()
    }

    /// Keep at most `max` units.
    pub fn truncate(&mut self, max: usize) {
        self.units.truncate(max);
    }

    pub fn into_units(self) -> Vec<String> {
        self.units
    }

    /// Concatenate the units back into a string.
    pub fn join(&self) -> String {
        self.units.concat()
    }
}

impl From<Vec<String>> for GraphemeSequence {
    fn from(units: Vec<String>) -> Self {
        Self { units }
    }
}

impl<S: Into<String>> FromIterator<S> for GraphemeSequence {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            units: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl IntoIterator for GraphemeSequence {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.units.into_iter()
    }
}

impl<'a> IntoIterator for &'a GraphemeSequence {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.units.iter()
    }
}

/// Split `text` into one unit per code point. The empty string yields an
/// empty sequence.
pub fn segment(text: &str) -> GraphemeSequence {
    text.chars().map(String::from).collect()
}

/// Split `text` into extended grapheme clusters.
pub fn segment_graphemes(text: &str) -> GraphemeSequence {
    text.graphemes(true).collect()
}

/// Split `text` with the given segmentation.
pub fn segment_with(text: &str, mode: Segmentation) -> GraphemeSequence {
    match mode {
        Segmentation::CodePoint => segment(text),
        Segmentation::Grapheme => segment_graphemes(text),
    }
}

/// Inverse of [`segment`].
pub fn join(sequence: &GraphemeSequence) -> String {
    sequence.join()
}

/// Length of `text` in units (code points).
pub fn unit_len(text: &str) -> usize {
    text.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        for s in [
            "",
            "abcde",
            "ねこ😀ネコ",
            "e\u{301}clair",
            "👨‍👩‍👧 family",
            "★彡☆",
            "\u{1F1EF}\u{1F1F5}",
        ] {
            assert_eq!(join(&segment(s)), s);
            assert_eq!(segment_graphemes(s).join(), s);
        }
    }

    #[test]
    fn test_surrogate_pairs_are_single_units() {
        let seq = segment("😀😀😀");
        assert_eq!(seq.len(), 3);
        assert!(seq.iter().all(|u| u == "😀"));
        // 6 UTF-16 code units, still 3 units
        assert_eq!("😀😀😀".encode_utf16().count(), 6);
        assert_eq!(unit_len("😀😀😀"), 3);
    }

    #[test]
    fn test_combining_marks_are_separate_units() {
        let seq = segment("e\u{301}a");
        assert_eq!(seq.units(), ["e", "\u{301}", "a"]);
        assert_eq!(unit_len("e\u{301}"), 2);

        // ZWJ family: 3 people + 2 joiners
        assert_eq!(segment("👨‍👩‍👧").len(), 5);
    }

    #[test]
    fn test_grapheme_mode_keeps_clusters() {
        let seq = segment_with("e\u{301}a", Segmentation::Grapheme);
        assert_eq!(seq.units(), ["e\u{301}", "a"]);

        let seq = segment_with("👨‍👩‍👧x", Segmentation::Grapheme);
        assert_eq!(seq.len(), 2);
        assert_eq!(seq.units()[0], "👨‍👩‍👧");

        assert_eq!(segment_with("e\u{301}a", Segmentation::CodePoint).len(), 3);
    }

    #[test]
    fn test_empty_input() {
        assert!(segment("").is_empty());
        assert!(segment_graphemes("").is_empty());
        assert_eq!(segment("").join(), "");
    }

    #[test]
    fn test_from_utf16_pairs() {
        let encoded: Vec<u16> = "a😀b".encode_utf16().collect();
        assert_eq!(encoded.len(), 4);
        let seq = GraphemeSequence::from_utf16(&encoded);
        assert_eq!(seq.units(), ["a", "😀", "b"]);
    }

    #[test]
    fn test_from_utf16_unpaired_surrogates() {
        // lone high, 'x', lone low
        let seq = GraphemeSequence::from_utf16(&[0xD83D, 0x0078, 0xDE00]);
        assert_eq!(seq.units(), ["\u{FFFD}", "x", "\u{FFFD}"]);

        // two lone highs in a row stay two units
        let seq = GraphemeSequence::from_utf16(&[0xD800, 0xD800]);
        assert_eq!(seq.len(), 2);
    }

    #[test]
    fn test_truncate_counts_units() {
        let mut seq = segment("😀a😀b");
        seq.truncate(3);
        assert_eq!(seq.join(), "😀a😀");
    }
}

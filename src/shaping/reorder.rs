// Copyright 2025 the Bidisync Authors
// SPDX-License-Identifier: Apache-2.0

//! Default bidi-reordering backend wrapping the [`unicode_bidi`] crate.
//!
//! Reorders characters per the Unicode Bidirectional Algorithm (UAX#9) so
//! that mixed LTR/RTL text renders correctly on a left-to-right output
//! device. Paragraphs are reordered independently and their separators stay
//! where they are; a multiline field keeps its line structure.

use unicode_bidi::{BidiInfo, Level};

use super::{BaseDirection, DisplayReorderer, ShapingError};

/// Bidi class B characters that can terminate a paragraph.
const PARAGRAPH_SEPARATORS: [char; 7] = [
    '\n', '\r', '\u{001C}', '\u{001D}', '\u{001E}', '\u{0085}', '\u{2029}',
];

/// UAX#9 reordering backend.
#[derive(Debug, Clone, Default)]
pub struct BidiReorderer {
    /// Paragraph base direction; `Auto` detects from the first strong
    /// directional character.
    base_direction: BaseDirection,
}

impl BidiReorderer {
    /// Create a reorderer with auto-detected paragraph direction.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a reorderer with a forced paragraph base direction.
    pub fn with_base_direction(base_direction: BaseDirection) -> Self {
        Self { base_direction }
    }
}

impl DisplayReorderer for BidiReorderer {
    fn reorder_for_display(&self, text: &str) -> Result<String, ShapingError> {
        if text.is_empty() {
            return Ok(String::new());
        }

        let level = match self.base_direction {
            BaseDirection::Auto => None,
            BaseDirection::LeftToRight => Some(Level::ltr()),
            BaseDirection::RightToLeft => Some(Level::rtl()),
        };

        let bidi = BidiInfo::new(text, level);
        let mut out = String::with_capacity(text.len());
        for para in &bidi.paragraphs {
            // Paragraph ranges include the trailing separator; reordering
            // an RTL paragraph would carry it to the front of the string,
            // so only the content before it is reordered.
            let para_text = &text[para.range.clone()];
            let content_end = para.range.end - trailing_separator_len(para_text);
            out.push_str(&bidi.reorder_line(para, para.range.start..content_end));
            out.push_str(&text[content_end..para.range.end]);
        }
        Ok(out)
    }
}

/// Byte length of the paragraph separator at the end of `para_text`, 0 if
/// the paragraph is unterminated (end of text).
fn trailing_separator_len(para_text: &str) -> usize {
    if para_text.ends_with("\r\n") {
        return 2;
    }
    para_text
        .chars()
        .next_back()
        .filter(|c| PARAGRAPH_SEPARATORS.contains(c))
        .map_or(0, |c| c.len_utf8())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reorder(text: &str) -> String {
        BidiReorderer::new().reorder_for_display(text).unwrap()
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(reorder(""), "");
    }

    #[test]
    fn test_pure_ltr_is_identity() {
        assert_eq!(reorder("Hello, world!"), "Hello, world!");
    }

    #[test]
    fn test_pure_rtl_is_reversed() {
        // alef + beh + jeem in logical order displays as jeem + beh + alef
        assert_eq!(reorder("\u{0627}\u{0628}\u{062C}"), "\u{062C}\u{0628}\u{0627}");
    }

    #[test]
    fn test_mixed_direction() {
        // LTR base (first strong char is Latin); the Arabic run is reversed
        // in place
        assert_eq!(reorder("abc \u{0627}\u{0628}"), "abc \u{0628}\u{0627}");
    }

    #[test]
    fn test_paragraphs_reordered_independently() {
        assert_eq!(
            reorder("\u{0627}\u{0628}\n\u{062C}\u{062F}"),
            "\u{0628}\u{0627}\n\u{062F}\u{062C}"
        );
    }

    #[test]
    fn test_separator_stays_at_paragraph_end() {
        assert_eq!(reorder("\u{0627}\u{0628}\n"), "\u{0628}\u{0627}\n");
        assert_eq!(reorder("\u{0627}\u{0628}\r\n"), "\u{0628}\u{0627}\r\n");
    }

    #[test]
    fn test_presentation_forms_are_rtl() {
        // Shaped text (presentation forms) still reorders as RTL
        assert_eq!(
            reorder("\u{FE91}\u{FEB4}\u{FEE2}"),
            "\u{FEE2}\u{FEB4}\u{FE91}"
        );
    }

    #[test]
    fn test_forced_rtl_base() {
        let reorderer = BidiReorderer::with_base_direction(BaseDirection::RightToLeft);
        // In an RTL paragraph the Latin word moves to the visual left and
        // the Arabic run leads from the right
        let out = reorderer.reorder_for_display("\u{0627}\u{0628} ab").unwrap();
        assert_eq!(out, "ab \u{0628}\u{0627}");
    }

    #[test]
    fn test_trailing_separator_len() {
        assert_eq!(trailing_separator_len("ab"), 0);
        assert_eq!(trailing_separator_len("ab\n"), 1);
        assert_eq!(trailing_separator_len("ab\r\n"), 2);
        assert_eq!(trailing_separator_len("ab\u{2029}"), 3);
        assert_eq!(trailing_separator_len(""), 0);
    }
}

// Copyright 2025 the Bidisync Authors
// SPDX-License-Identifier: Apache-2.0

//! Default contextual-joining backend implementing the Unicode Arabic
//! Joining Algorithm.
//!
//! # Algorithm
//!
//! 1. For each character, determine its joining type (Dual, Right, Non-joining, etc.)
//! 2. Look at the previous non-transparent character to see if it joins forward
//! 3. Look at the next non-transparent character to see if it joins backward
//! 4. Based on these two booleans and the character's joining type, select the
//!    presentation-form codepoint for the resulting positional form
//!
//! Characters without a presentation-form entry (marks, tatweel, non-Arabic
//! text) pass through unchanged, so mixed-script input stays intact.

use super::unicode_data::{
    JoiningType, LAM, PositionalForm, joining_type, lam_alef_ligature, presentation_forms,
};
use super::{ContextualJoiner, ShapingError};

/// Contextual joiner for Arabic text.
///
/// Maps each base letter to its isolated, initial, medial, or final
/// presentation form based on its neighbors, and optionally substitutes the
/// lam-alef ligatures.
///
/// # Example
///
/// ```
/// use bidisync::{ArabicJoiner, ContextualJoiner};
///
/// let joiner = ArabicJoiner::new();
/// let shaped = joiner.reshape("بسم").unwrap();
///
/// assert_eq!(shaped, "\u{FE91}\u{FEB4}\u{FEE2}"); // beh.init seen.medi meem.fina
/// ```
#[derive(Debug, Clone)]
pub struct ArabicJoiner {
    /// Substitute lam-alef pairs with their ligature forms.
    ligatures: bool,
}

impl ArabicJoiner {
    /// Create a joiner with ligature substitution enabled.
    pub fn new() -> Self {
        Self { ligatures: true }
    }

    /// Enable or disable lam-alef ligature substitution.
    pub fn with_ligatures(ligatures: bool) -> Self {
        Self { ligatures }
    }

    /// Determine the positional form for the character at `index`.
    ///
    /// This is the core joining rule:
    /// - Check if the previous non-transparent character joins forward
    /// - Check if the next non-transparent character joins backward
    /// - Combine with the character's own joining type to determine form
    pub fn determine_form(&self, text: &[char], index: usize) -> PositionalForm {
        let jt = joining_type(text[index]);

        if matches!(jt, JoiningType::NonJoining | JoiningType::Transparent) {
            return PositionalForm::Isolated;
        }

        let prev_joins = self.prev_joins_forward(text, index);
        let next_joins = self.next_joins_backward(text, index);

        match jt {
            JoiningType::Dual => match (prev_joins, next_joins) {
                (false, false) => PositionalForm::Isolated,
                (false, true) => PositionalForm::Initial,
                (true, false) => PositionalForm::Final,
                (true, true) => PositionalForm::Medial,
            },
            JoiningType::Right => {
                // Right-joining characters only have isolated and final forms
                if prev_joins {
                    PositionalForm::Final
                } else {
                    PositionalForm::Isolated
                }
            }
            // Tatweel is a spacing character with no positional variants
            _ => PositionalForm::Isolated,
        }
    }

    /// Check if the previous non-transparent character joins forward.
    ///
    /// Walks backward through the text, skipping transparent characters
    /// (marks/diacritics), and returns true if the first non-transparent
    /// character can connect forward.
    fn prev_joins_forward(&self, text: &[char], index: usize) -> bool {
        let mut i = index;
        while i > 0 {
            i -= 1;
            let jt = joining_type(text[i]);
            if !jt.is_transparent() {
                return jt.joins_forward();
            }
        }
        false
    }

    /// Check if the next non-transparent character joins backward.
    ///
    /// Walks forward through the text, skipping transparent characters
    /// (marks/diacritics), and returns true if the first non-transparent
    /// character can connect backward.
    fn next_joins_backward(&self, text: &[char], index: usize) -> bool {
        let mut i = index + 1;
        while i < text.len() {
            let jt = joining_type(text[i]);
            if !jt.is_transparent() {
                return jt.joins_backward();
            }
            i += 1;
        }
        false
    }
}

impl Default for ArabicJoiner {
    fn default() -> Self {
        Self::new()
    }
}

impl ContextualJoiner for ArabicJoiner {
    fn reshape(&self, text: &str) -> Result<String, ShapingError> {
        if text.is_empty() {
            return Ok(String::new());
        }

        let chars: Vec<char> = text.chars().collect();
        let mut out = String::with_capacity(text.len());
        let mut i = 0;

        while i < chars.len() {
            let c = chars[i];

            // Lam-alef ligature: consumes the adjacent pair. The ligature
            // glyph as a whole is right-joining, so only the lam's previous
            // neighbor matters.
            if self.ligatures
                && c == LAM
                && i + 1 < chars.len()
                && let Some([isolated, final_form]) = lam_alef_ligature(chars[i + 1])
            {
                let lig = if self.prev_joins_forward(&chars, i) {
                    final_form
                } else {
                    isolated
                };
                out.push(lig);
                i += 2;
                continue;
            }

            match presentation_forms(c) {
                Some(forms) => out.push(forms[self.determine_form(&chars, i).index()]),
                None => out.push(c),
            }
            i += 1;
        }

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reshape(text: &str) -> String {
        ArabicJoiner::new().reshape(text).unwrap()
    }

    #[test]
    fn test_single_char_isolated() {
        assert_eq!(reshape("ب"), "\u{FE8F}"); // beh isolated
    }

    #[test]
    fn test_two_dual_joining() {
        // beh + meem: initial + final
        assert_eq!(reshape("بم"), "\u{FE91}\u{FEE2}");
    }

    #[test]
    fn test_three_char_with_medial() {
        // beh + seen + meem: initial + medial + final
        assert_eq!(reshape("بسم"), "\u{FE91}\u{FEB4}\u{FEE2}");
    }

    #[test]
    fn test_right_joining_alef() {
        // beh + alef: beh is initial, alef is final
        assert_eq!(reshape("با"), "\u{FE91}\u{FE8E}");
    }

    #[test]
    fn test_alef_breaks_joining() {
        // alef + beh + meem: alef doesn't join forward, so beh is initial
        assert_eq!(reshape("ابم"), "\u{FE8D}\u{FE91}\u{FEE2}");
    }

    #[test]
    fn test_word_with_multiple_non_joiners() {
        // beh + alef + beh + alef: two separate pairs
        assert_eq!(reshape("بابا"), "\u{FE91}\u{FE8E}\u{FE91}\u{FE8E}");
    }

    #[test]
    fn test_latin_breaks_joining_and_passes_through() {
        // Latin 'A' is untouched and isolates its neighbors
        assert_eq!(reshape("بAم"), "\u{FE8F}A\u{FEE1}");
    }

    #[test]
    fn test_marks_are_transparent() {
        // beh + fatha + meem: the mark passes through, beh and meem still join
        assert_eq!(reshape("بَم"), "\u{FE91}\u{064E}\u{FEE2}");
    }

    #[test]
    fn test_lam_alef_isolated_ligature() {
        assert_eq!(reshape("لا"), "\u{FEFB}");
    }

    #[test]
    fn test_lam_alef_final_ligature() {
        // beh + lam + alef: beh joins into the ligature, which takes its
        // final form
        assert_eq!(reshape("بلا"), "\u{FE91}\u{FEFC}");
    }

    #[test]
    fn test_ligatures_disabled() {
        let joiner = ArabicJoiner::with_ligatures(false);
        // lam initial + alef final instead of the ligature
        assert_eq!(joiner.reshape("لا").unwrap(), "\u{FEDF}\u{FE8E}");
    }

    #[test]
    fn test_hamza_always_isolated() {
        assert_eq!(reshape("بءم"), "\u{FE8F}\u{FE80}\u{FEE1}");
    }

    #[test]
    fn test_tatweel_causes_joining() {
        // beh + tatweel + beh: tatweel joins both sides, so the behs take
        // final and initial forms around it
        assert_eq!(reshape("بـب"), "\u{FE91}\u{0640}\u{FE90}");
    }

    #[test]
    fn test_long_word() {
        // "بسملله": initial + 4 medials + final
        assert_eq!(
            reshape("بسملله"),
            "\u{FE91}\u{FEB4}\u{FEE4}\u{FEE0}\u{FEE0}\u{FEEA}"
        );
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(reshape(""), "");
    }

    #[test]
    fn test_determine_form_directly() {
        let joiner = ArabicJoiner::new();

        let text1: Vec<char> = "ب".chars().collect();
        assert_eq!(joiner.determine_form(&text1, 0), PositionalForm::Isolated);

        let text2: Vec<char> = "بم".chars().collect();
        assert_eq!(joiner.determine_form(&text2, 0), PositionalForm::Initial);
        assert_eq!(joiner.determine_form(&text2, 1), PositionalForm::Final);

        let text3: Vec<char> = "بسم".chars().collect();
        assert_eq!(joiner.determine_form(&text3, 1), PositionalForm::Medial);
    }
}

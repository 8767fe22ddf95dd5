// Copyright 2025 the Bidisync Authors
// SPDX-License-Identifier: Apache-2.0

//! Unicode character property data for contextual joining.
//!
//! Joining types sourced from Unicode ArabicShaping.txt, presentation forms
//! from the Arabic Presentation Forms-B block (U+FE70–U+FEFF).
//! See: https://www.unicode.org/Public/UCD/latest/ucd/ArabicShaping.txt

use unicode_general_category::{GeneralCategory, get_general_category};

/// Arabic joining type from Unicode ArabicShaping.txt
///
/// Each Arabic character has a joining type that determines how it connects
/// to neighboring characters in cursive text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum JoiningType {
    /// Dual-joining (D): Can connect on both sides.
    /// Examples: beh, seen, meem, noon, yeh
    /// Has 4 forms: isolated, initial, medial, final
    Dual,

    /// Right-joining (R): Connects only to the previous (right-side in RTL) letter.
    /// Examples: alef, dal, reh, waw
    /// Has 2 forms: isolated, final
    Right,

    /// Non-joining (U): Cannot connect to neighbors.
    /// Examples: hamza, Latin letters, numbers
    /// Has 1 form: isolated
    #[default]
    NonJoining,

    /// Join-causing (C): Causes adjacent letters to connect.
    /// Example: tatweel (kashida)
    JoinCausing,

    /// Transparent (T): Ignored for joining purposes.
    /// Examples: Arabic marks and diacritics (fatha, kasra, damma, etc.)
    Transparent,
}

impl JoiningType {
    /// Can this character connect forward (to the left in RTL)?
    #[inline]
    pub fn joins_forward(&self) -> bool {
        matches!(self, Self::Dual | Self::JoinCausing)
    }

    /// Can this character connect backward (to the right in RTL)?
    #[inline]
    pub fn joins_backward(&self) -> bool {
        matches!(self, Self::Dual | Self::Right | Self::JoinCausing)
    }

    /// Is this character transparent for joining?
    ///
    /// Transparent characters (marks/diacritics) are skipped when
    /// determining joining behavior.
    #[inline]
    pub fn is_transparent(&self) -> bool {
        matches!(self, Self::Transparent)
    }
}

/// Positional forms for cursive scripts.
///
/// In cursive scripts, characters change shape depending on their position
/// within a connected sequence. This enum represents the four possible forms.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PositionalForm {
    /// Standalone form - character not connected to neighbors
    #[default]
    Isolated,
    /// Beginning of a connected sequence
    Initial,
    /// Middle of a connected sequence
    Medial,
    /// End of a connected sequence
    Final,
}

impl PositionalForm {
    /// Index into a `[isolated, initial, medial, final]` forms table.
    #[inline]
    pub fn index(&self) -> usize {
        match self {
            Self::Isolated => 0,
            Self::Initial => 1,
            Self::Medial => 2,
            Self::Final => 3,
        }
    }
}

/// Get the joining type for a Unicode codepoint.
///
/// This implements the joining type lookup from Unicode ArabicShaping.txt.
/// Combining marks outside the explicit ranges fall back to Transparent via
/// their general category; everything else returns `NonJoining`.
pub fn joining_type(c: char) -> JoiningType {
    match c as u32 {
        // ===========================================
        // Right-joining (R) - connect only to previous letter
        // ===========================================

        // Alef and variants
        0x0622 => JoiningType::Right, // ARABIC LETTER ALEF WITH MADDA ABOVE
        0x0623 => JoiningType::Right, // ARABIC LETTER ALEF WITH HAMZA ABOVE
        0x0625 => JoiningType::Right, // ARABIC LETTER ALEF WITH HAMZA BELOW
        0x0627 => JoiningType::Right, // ARABIC LETTER ALEF
        0x0629 => JoiningType::Right, // ARABIC LETTER TEH MARBUTA

        // Dal group
        0x062F => JoiningType::Right, // ARABIC LETTER DAL
        0x0630 => JoiningType::Right, // ARABIC LETTER THAL

        // Reh group
        0x0631 => JoiningType::Right, // ARABIC LETTER REH
        0x0632 => JoiningType::Right, // ARABIC LETTER ZAIN

        // Waw group
        0x0648 => JoiningType::Right, // ARABIC LETTER WAW
        0x0624 => JoiningType::Right, // ARABIC LETTER WAW WITH HAMZA ABOVE

        // ===========================================
        // Dual-joining (D) - connect on both sides
        // ===========================================

        // Beh group
        0x0628 => JoiningType::Dual, // ARABIC LETTER BEH
        0x062A => JoiningType::Dual, // ARABIC LETTER TEH
        0x062B => JoiningType::Dual, // ARABIC LETTER THEH

        // Jeem group
        0x062C => JoiningType::Dual, // ARABIC LETTER JEEM
        0x062D => JoiningType::Dual, // ARABIC LETTER HAH
        0x062E => JoiningType::Dual, // ARABIC LETTER KHAH

        // Seen group
        0x0633 => JoiningType::Dual, // ARABIC LETTER SEEN
        0x0634 => JoiningType::Dual, // ARABIC LETTER SHEEN

        // Sad group
        0x0635 => JoiningType::Dual, // ARABIC LETTER SAD
        0x0636 => JoiningType::Dual, // ARABIC LETTER DAD

        // Tah group
        0x0637 => JoiningType::Dual, // ARABIC LETTER TAH
        0x0638 => JoiningType::Dual, // ARABIC LETTER ZAH

        // Ain group
        0x0639 => JoiningType::Dual, // ARABIC LETTER AIN
        0x063A => JoiningType::Dual, // ARABIC LETTER GHAIN

        // Feh group
        0x0641 => JoiningType::Dual, // ARABIC LETTER FEH
        0x0642 => JoiningType::Dual, // ARABIC LETTER QAF

        // Kaf, lam, meem, noon, heh
        0x0643 => JoiningType::Dual, // ARABIC LETTER KAF
        0x0644 => JoiningType::Dual, // ARABIC LETTER LAM
        0x0645 => JoiningType::Dual, // ARABIC LETTER MEEM
        0x0646 => JoiningType::Dual, // ARABIC LETTER NOON
        0x0647 => JoiningType::Dual, // ARABIC LETTER HEH

        // Yeh group
        0x064A => JoiningType::Dual, // ARABIC LETTER YEH
        0x0626 => JoiningType::Dual, // ARABIC LETTER YEH WITH HAMZA ABOVE
        0x0649 => JoiningType::Dual, // ARABIC LETTER ALEF MAKSURA

        // ===========================================
        // Non-joining (U)
        // ===========================================
        0x0621 => JoiningType::NonJoining, // ARABIC LETTER HAMZA

        // ===========================================
        // Join-causing (C)
        // ===========================================
        0x0640 => JoiningType::JoinCausing, // ARABIC TATWEEL (kashida)

        // ===========================================
        // Transparent (T) - marks and diacritics
        // ===========================================

        // Tashkil (vocalization marks)
        0x064B..=0x0652 => JoiningType::Transparent,

        // Superscript alef
        0x0670 => JoiningType::Transparent,

        // Quranic marks
        0x0610..=0x061A => JoiningType::Transparent,

        // Extended Arabic marks
        0x06D6..=0x06ED => JoiningType::Transparent,

        // Any other combining mark is transparent for joining
        _ if get_general_category(c) == GeneralCategory::NonspacingMark => {
            JoiningType::Transparent
        }

        _ => JoiningType::NonJoining,
    }
}

/// Presentation forms for an Arabic base letter, ordered
/// `[isolated, initial, medial, final]`.
///
/// Letters without distinct initial/medial forms (right-joining and
/// non-joining letters) repeat the isolated and final forms in those slots;
/// the joining algorithm never selects them, but the table stays total.
///
/// Returns None for characters outside the Arabic letter range, including
/// marks, tatweel, and characters that are already presentation forms.
pub fn presentation_forms(c: char) -> Option<[char; 4]> {
    let forms = match c {
        '\u{0621}' => ['\u{FE80}', '\u{FE80}', '\u{FE80}', '\u{FE80}'], // hamza
        '\u{0622}' => ['\u{FE81}', '\u{FE81}', '\u{FE82}', '\u{FE82}'], // alef madda
        '\u{0623}' => ['\u{FE83}', '\u{FE83}', '\u{FE84}', '\u{FE84}'], // alef hamza above
        '\u{0624}' => ['\u{FE85}', '\u{FE85}', '\u{FE86}', '\u{FE86}'], // waw hamza
        '\u{0625}' => ['\u{FE87}', '\u{FE87}', '\u{FE88}', '\u{FE88}'], // alef hamza below
        '\u{0626}' => ['\u{FE89}', '\u{FE8B}', '\u{FE8C}', '\u{FE8A}'], // yeh hamza
        '\u{0627}' => ['\u{FE8D}', '\u{FE8D}', '\u{FE8E}', '\u{FE8E}'], // alef
        '\u{0628}' => ['\u{FE8F}', '\u{FE91}', '\u{FE92}', '\u{FE90}'], // beh
        '\u{0629}' => ['\u{FE93}', '\u{FE93}', '\u{FE94}', '\u{FE94}'], // teh marbuta
        '\u{062A}' => ['\u{FE95}', '\u{FE97}', '\u{FE98}', '\u{FE96}'], // teh
        '\u{062B}' => ['\u{FE99}', '\u{FE9B}', '\u{FE9C}', '\u{FE9A}'], // theh
        '\u{062C}' => ['\u{FE9D}', '\u{FE9F}', '\u{FEA0}', '\u{FE9E}'], // jeem
        '\u{062D}' => ['\u{FEA1}', '\u{FEA3}', '\u{FEA4}', '\u{FEA2}'], // hah
        '\u{062E}' => ['\u{FEA5}', '\u{FEA7}', '\u{FEA8}', '\u{FEA6}'], // khah
        '\u{062F}' => ['\u{FEA9}', '\u{FEA9}', '\u{FEAA}', '\u{FEAA}'], // dal
        '\u{0630}' => ['\u{FEAB}', '\u{FEAB}', '\u{FEAC}', '\u{FEAC}'], // thal
        '\u{0631}' => ['\u{FEAD}', '\u{FEAD}', '\u{FEAE}', '\u{FEAE}'], // reh
        '\u{0632}' => ['\u{FEAF}', '\u{FEAF}', '\u{FEB0}', '\u{FEB0}'], // zain
        '\u{0633}' => ['\u{FEB1}', '\u{FEB3}', '\u{FEB4}', '\u{FEB2}'], // seen
        '\u{0634}' => ['\u{FEB5}', '\u{FEB7}', '\u{FEB8}', '\u{FEB6}'], // sheen
        '\u{0635}' => ['\u{FEB9}', '\u{FEBB}', '\u{FEBC}', '\u{FEBA}'], // sad
        '\u{0636}' => ['\u{FEBD}', '\u{FEBF}', '\u{FEC0}', '\u{FEBE}'], // dad
        '\u{0637}' => ['\u{FEC1}', '\u{FEC3}', '\u{FEC4}', '\u{FEC2}'], // tah
        '\u{0638}' => ['\u{FEC5}', '\u{FEC7}', '\u{FEC8}', '\u{FEC6}'], // zah
        '\u{0639}' => ['\u{FEC9}', '\u{FECB}', '\u{FECC}', '\u{FECA}'], // ain
        '\u{063A}' => ['\u{FECD}', '\u{FECF}', '\u{FED0}', '\u{FECE}'], // ghain
        '\u{0641}' => ['\u{FED1}', '\u{FED3}', '\u{FED4}', '\u{FED2}'], // feh
        '\u{0642}' => ['\u{FED5}', '\u{FED7}', '\u{FED8}', '\u{FED6}'], // qaf
        '\u{0643}' => ['\u{FED9}', '\u{FEDB}', '\u{FEDC}', '\u{FEDA}'], // kaf
        '\u{0644}' => ['\u{FEDD}', '\u{FEDF}', '\u{FEE0}', '\u{FEDE}'], // lam
        '\u{0645}' => ['\u{FEE1}', '\u{FEE3}', '\u{FEE4}', '\u{FEE2}'], // meem
        '\u{0646}' => ['\u{FEE5}', '\u{FEE7}', '\u{FEE8}', '\u{FEE6}'], // noon
        '\u{0647}' => ['\u{FEE9}', '\u{FEEB}', '\u{FEEC}', '\u{FEEA}'], // heh
        '\u{0648}' => ['\u{FEED}', '\u{FEED}', '\u{FEEE}', '\u{FEEE}'], // waw
        '\u{0649}' => ['\u{FEEF}', '\u{FEEF}', '\u{FEF0}', '\u{FEF0}'], // alef maksura
        '\u{064A}' => ['\u{FEF1}', '\u{FEF3}', '\u{FEF4}', '\u{FEF2}'], // yeh
        _ => return None,
    };
    Some(forms)
}

/// Lam-alef ligature `[isolated, final]` for lam followed by `alef`.
///
/// Returns None when `alef` is not one of the four ligature-forming alefs.
pub fn lam_alef_ligature(alef: char) -> Option<[char; 2]> {
    let forms = match alef {
        '\u{0622}' => ['\u{FEF5}', '\u{FEF6}'], // lam + alef madda
        '\u{0623}' => ['\u{FEF7}', '\u{FEF8}'], // lam + alef hamza above
        '\u{0625}' => ['\u{FEF9}', '\u{FEFA}'], // lam + alef hamza below
        '\u{0627}' => ['\u{FEFB}', '\u{FEFC}'], // lam + alef
        _ => return None,
    };
    Some(forms)
}

/// ARABIC LETTER LAM, the first half of the lam-alef ligatures.
pub const LAM: char = '\u{0644}';

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alef_is_right_joining() {
        assert_eq!(joining_type('\u{0627}'), JoiningType::Right);
        assert!(!joining_type('\u{0627}').joins_forward());
        assert!(joining_type('\u{0627}').joins_backward());
    }

    #[test]
    fn test_beh_is_dual_joining() {
        assert_eq!(joining_type('\u{0628}'), JoiningType::Dual);
        assert!(joining_type('\u{0628}').joins_forward());
        assert!(joining_type('\u{0628}').joins_backward());
    }

    #[test]
    fn test_hamza_is_non_joining() {
        assert_eq!(joining_type('\u{0621}'), JoiningType::NonJoining);
        assert!(!joining_type('\u{0621}').joins_forward());
        assert!(!joining_type('\u{0621}').joins_backward());
    }

    #[test]
    fn test_tatweel_is_join_causing() {
        assert_eq!(joining_type('\u{0640}'), JoiningType::JoinCausing);
        assert!(joining_type('\u{0640}').joins_forward());
        assert!(joining_type('\u{0640}').joins_backward());
    }

    #[test]
    fn test_fatha_is_transparent() {
        assert_eq!(joining_type('\u{064E}'), JoiningType::Transparent);
        assert!(joining_type('\u{064E}').is_transparent());
    }

    #[test]
    fn test_general_category_fallback_for_marks() {
        // Combining marks outside the explicit Arabic ranges are still
        // transparent, e.g. COMBINING ACUTE ACCENT.
        assert_eq!(joining_type('\u{0301}'), JoiningType::Transparent);
    }

    #[test]
    fn test_latin_is_non_joining() {
        assert_eq!(joining_type('A'), JoiningType::NonJoining);
        assert_eq!(joining_type('z'), JoiningType::NonJoining);
        assert_eq!(joining_type('5'), JoiningType::NonJoining);
    }

    #[test]
    fn test_beh_forms() {
        let forms = presentation_forms('\u{0628}').unwrap();
        assert_eq!(forms[PositionalForm::Isolated.index()], '\u{FE8F}');
        assert_eq!(forms[PositionalForm::Initial.index()], '\u{FE91}');
        assert_eq!(forms[PositionalForm::Medial.index()], '\u{FE92}');
        assert_eq!(forms[PositionalForm::Final.index()], '\u{FE90}');
    }

    #[test]
    fn test_right_joiner_repeats_forms() {
        // Alef has no distinct initial/medial presentation forms
        let forms = presentation_forms('\u{0627}').unwrap();
        assert_eq!(forms[PositionalForm::Initial.index()], '\u{FE8D}');
        assert_eq!(forms[PositionalForm::Medial.index()], '\u{FE8E}');
    }

    #[test]
    fn test_no_forms_for_marks_and_latin() {
        assert!(presentation_forms('\u{064E}').is_none()); // fatha
        assert!(presentation_forms('\u{0640}').is_none()); // tatweel
        assert!(presentation_forms('A').is_none());
    }

    #[test]
    fn test_lam_alef_ligatures() {
        assert_eq!(lam_alef_ligature('\u{0627}'), Some(['\u{FEFB}', '\u{FEFC}']));
        assert_eq!(lam_alef_ligature('\u{0622}'), Some(['\u{FEF5}', '\u{FEF6}']));
        assert_eq!(lam_alef_ligature('\u{0628}'), None); // beh is not an alef
    }

    #[test]
    fn test_positional_form_index_covers_table() {
        let forms = presentation_forms('\u{0633}').unwrap(); // seen
        assert_eq!(forms[PositionalForm::Initial.index()], '\u{FEB3}');
        assert_eq!(forms[PositionalForm::Final.index()], '\u{FEB2}');
    }
}

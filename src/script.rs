// Copyright 2025 the Bidisync Authors
// SPDX-License-Identifier: Apache-2.0

//! Right-to-left script detection.
//!
//! Shaping only pays for itself on text that actually contains an RTL
//! script, so every entry point in this crate first runs the detector and
//! leaves non-matching text alone. The block set is fixed: the Arabic
//! blocks plus both Presentation Forms blocks, so already-shaped text is
//! still recognized as RTL.

/// Unicode blocks treated as right-to-left script content.
///
/// Covers:
/// - Arabic (U+0600–U+06FF)
/// - Arabic Supplement (U+0750–U+077F)
/// - Arabic Extended-A (U+08A0–U+08FF)
/// - Arabic Presentation Forms-A (U+FB50–U+FDFF)
/// - Arabic Presentation Forms-B (U+FE70–U+FEFF)
const RTL_BLOCKS: [(u32, u32); 5] = [
    (0x0600, 0x06FF),
    (0x0750, 0x077F),
    (0x08A0, 0x08FF),
    (0xFB50, 0xFDFF),
    (0xFE70, 0xFEFF),
];

/// Check if a character falls in one of the RTL script blocks.
#[inline]
pub fn is_rtl_char(c: char) -> bool {
    let cp = c as u32;
    RTL_BLOCKS.iter().any(|&(lo, hi)| (lo..=hi).contains(&cp))
}

/// Check if `text` contains at least one RTL-script character.
///
/// Returns false for empty text. O(n) with early exit on the first match.
#[inline]
pub fn contains_rtl_script(text: &str) -> bool {
    text.chars().any(is_rtl_char)
}

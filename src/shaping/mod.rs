// Copyright 2025 the Bidisync Authors
// SPDX-License-Identifier: Apache-2.0

//! Text shaping: contextual joining plus bidi reordering.
//!
//! This module is built around a few key concepts:
//!
//! - **ContextualJoiner / DisplayReorderer**: traits abstracting the two
//!   external capabilities shaping is composed of, so backends can be
//!   swapped or stubbed in tests.
//!
//! - **TextShaper**: the adapter the rest of the crate talks to. It runs the
//!   detector first (non-RTL text is returned untouched), composes the two
//!   transforms, and degrades to identity if either backend fails. Shaping
//!   is never allowed to turn into a crash on the editing path.
//!
//! Default backends: [`ArabicJoiner`] (Unicode Arabic Joining Algorithm over
//! the Presentation Forms-B block) and [`BidiReorderer`] (UAX#9 via the
//! `unicode-bidi` crate).

pub mod joining;
pub mod reorder;
pub mod unicode_data;

pub use joining::ArabicJoiner;
pub use reorder::BidiReorderer;
pub use unicode_data::{JoiningType, PositionalForm};

use serde::Deserialize;
use thiserror::Error;

use crate::config::SyncConfig;
use crate::script::contains_rtl_script;

/// Paragraph base direction for bidi reordering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BaseDirection {
    /// Detect from the first strong directional character (UAX#9 default).
    #[default]
    Auto,
    /// Force left-to-right paragraph level.
    LeftToRight,
    /// Force right-to-left paragraph level.
    RightToLeft,
}

impl BaseDirection {
    /// Returns true if this forces RTL direction
    pub fn is_rtl(&self) -> bool {
        matches!(self, Self::RightToLeft)
    }

    /// Get a short name for display
    pub fn short_name(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::LeftToRight => "LTR",
            Self::RightToLeft => "RTL",
        }
    }
}

/// A shaping backend failure.
///
/// This is the only failure class in the crate, and it never escapes
/// [`TextShaper::shape`]; it exists so external backend implementations have
/// something structured to return.
#[derive(Debug, Error)]
pub enum ShapingError {
    /// The contextual-joining transform rejected the input.
    #[error("joining transform failed: {0}")]
    Joining(String),
    /// The bidi-reordering transform rejected the input.
    #[error("reorder transform failed: {0}")]
    Reorder(String),
}

/// Converts isolated letterforms to the joined presentation forms
/// appropriate to their neighbors.
///
/// # Implementation Notes
///
/// Implementations should:
/// - Pass through characters they do not cover (mixed-script input)
/// - Be pure: same input, same output, no side effects
pub trait ContextualJoiner {
    /// Reshape `text` into its contextually joined form.
    fn reshape(&self, text: &str) -> Result<String, ShapingError>;
}

/// Reorders characters per the Unicode Bidirectional Algorithm for rendering
/// on left-to-right output devices.
pub trait DisplayReorderer {
    /// Reorder `text` into visual display order.
    fn reorder_for_display(&self, text: &str) -> Result<String, ShapingError>;
}

/// The shaping adapter: detector gate, joining, reordering, fail-open.
///
/// # Example
///
/// ```
/// use bidisync::TextShaper;
///
/// let shaper = TextShaper::new();
/// assert_eq!(shaper.shape("hello"), "hello"); // no RTL content, no cost
/// assert_eq!(shaper.shape("با"), "\u{FE8E}\u{FE91}");
/// ```
pub struct TextShaper {
    joiner: Box<dyn ContextualJoiner>,
    reorderer: Box<dyn DisplayReorderer>,
}

impl TextShaper {
    /// Create a shaper with the default backends.
    pub fn new() -> Self {
        Self {
            joiner: Box::new(ArabicJoiner::new()),
            reorderer: Box::new(BidiReorderer::new()),
        }
    }

    /// Create a shaper configured by a [`SyncConfig`].
    pub fn with_config(config: &SyncConfig) -> Self {
        Self {
            joiner: Box::new(ArabicJoiner::with_ligatures(config.ligatures)),
            reorderer: Box::new(BidiReorderer::with_base_direction(config.base_direction)),
        }
    }

    /// Create a shaper with injected backends.
    pub fn with_backends(
        joiner: Box<dyn ContextualJoiner>,
        reorderer: Box<dyn DisplayReorderer>,
    ) -> Self {
        Self { joiner, reorderer }
    }

    /// Shape `text` for display: contextual joining, then bidi reordering.
    ///
    /// Total: text without RTL-script content is returned unchanged, and a
    /// failure in either backend falls back to the original text (logged at
    /// warn level). The worst case is unshaped but legible output, never a
    /// crash or an error for the caller to handle.
    pub fn shape(&self, text: &str) -> String {
        if text.is_empty() || !contains_rtl_script(text) {
            return text.to_owned();
        }

        match self
            .joiner
            .reshape(text)
            .and_then(|joined| self.reorderer.reorder_for_display(&joined))
        {
            Ok(shaped) => shaped,
            Err(e) => {
                tracing::warn!("shaping failed, displaying text unshaped: {e}");
                text.to_owned()
            }
        }
    }
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}

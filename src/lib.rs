// Copyright 2025 the Bidisync Authors
// SPDX-License-Identifier: Apache-2.0

//! Bidisync: keeps the logical and visual text of RTL editing widgets in sync.
//!
//! Right-to-left scripts such as Arabic need two transforms before they are
//! legible on a left-to-right output device: contextual joining (selecting
//! the isolated/initial/medial/final letterform for each character) and bidi
//! reordering (UAX#9). Toolkits that lack native complex-text support render
//! the *shaped* string, which means the string the user sees and edits is not
//! the string they authored.
//!
//! This crate reconciles the two. [`TextFieldSync`] watches an editable
//! field, infers the logical edit behind each observed change to the shaped
//! text, applies it to the authoritative logical buffer, and writes the
//! freshly shaped result back. [`StaticTextSync`] and [`HintTextSync`] apply
//! the same shape-on-assign policy to read-only labels and placeholder text.
//! Shaping itself goes through [`TextShaper`], which composes pluggable
//! joining and reordering backends and falls back to the unshaped input on
//! any backend failure.
//!
//! The crate is single-threaded and callback-driven: the GUI collaborator
//! calls `on_external_change` from its change notification, synchronously,
//! and each sync wrapper suppresses the echo of its own write with a
//! per-instance latch.

pub mod config;
pub mod script;
pub mod shaping;
pub mod sync;

pub use config::SyncConfig;
pub use script::contains_rtl_script;
pub use shaping::{
    ArabicJoiner, BaseDirection, BidiReorderer, ContextualJoiner, DisplayReorderer,
    ShapingError, TextShaper,
};
pub use sync::{
    EditableWidget, HintTextSync, HintWidget, ReconcileState, StaticTextSync, TextFieldSync,
    TextWidget,
};

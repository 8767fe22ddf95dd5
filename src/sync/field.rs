// Copyright 2025 the Bidisync Authors
// SPDX-License-Identifier: Apache-2.0

//! Live reconciliation for editable text fields.
//!
//! The widget displays *shaped* text, so the string the toolkit reports
//! after a keystroke is not the string the user authored. [`TextFieldSync`]
//! recovers the authored edit from each observed change: it compares the
//! observed text's length against what the previous logical text shaped to,
//! interprets the difference as a trailing insertion or deletion, applies it
//! to the logical buffer, and writes the freshly shaped result back with the
//! caret pinned to the end.
//!
//! Edits are assumed to happen at the end of the text. The length-delta
//! inference has no way to locate an edit made in the interior (arrow-key
//! navigation plus insert/delete, selection replacement, IME composition);
//! such edits will corrupt the logical buffer. Fixing that needs the
//! toolkit to report a real caret position and edit span, which the change
//! notification does not carry.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::shaping::TextShaper;

use super::ReconcileState;
use super::widget::{EditableWidget, TextWidget};

/// Keeps an editable widget's shaped display text in sync with the logical
/// text the user is authoring.
///
/// Invariants:
/// - When idle, the widget text equals the shaped logical text (or the
///   attach-time value, before the first edit).
/// - The caret is a char offset in `[0, visual len]`, pinned to the end of
///   the visual text after each reconciliation.
/// - The logical buffer is mutated only here, one inferred edit at a time.
pub struct TextFieldSync<W: EditableWidget> {
    widget: W,
    shaper: Rc<TextShaper>,
    /// Authoritative text in authored order.
    logical: RefCell<String>,
    /// Display text as of the last write-back.
    visual: RefCell<String>,
    /// Caret position, in chars, into the visual text.
    caret: Cell<usize>,
    state: Cell<ReconcileState>,
}

impl<W: EditableWidget> TextFieldSync<W> {
    /// Attach to a widget, seeding the logical text from its current value.
    ///
    /// The widget's display is left untouched until the first edit; the
    /// initial value is taken to be logical (authored-order) text.
    pub fn attach(widget: W, shaper: Rc<TextShaper>) -> Self {
        let logical = widget.text();
        let caret = logical.chars().count();
        Self {
            widget,
            shaper,
            visual: RefCell::new(logical.clone()),
            logical: RefCell::new(logical),
            caret: Cell::new(caret),
            state: Cell::new(ReconcileState::Idle),
        }
    }

    /// Handle a change notification from the widget.
    ///
    /// `observed` is the widget's new text value. This is the sole entry
    /// point, called by the GUI collaborator on every text change,
    /// including the one triggered by this type's own write-back; the latch
    /// drops that echo.
    pub fn on_external_change(&self, observed: &str) {
        if self.state.get().is_reconciling() {
            tracing::trace!("Change event dropped: echo of in-flight reconciliation");
            return;
        }

        self.state.set(ReconcileState::Reconciling);
        self.reconcile(observed);
        self.state.set(ReconcileState::Idle);
    }

    /// Infer the edit behind `observed`, apply it, and write back.
    fn reconcile(&self, observed: &str) {
        // What was on screen before this edit
        let previous_display = self.shaper.shape(&self.logical.borrow());

        let observed_len = observed.chars().count();
        let previous_len = previous_display.chars().count();

        if observed_len < previous_len {
            // Trailing deletion: drop the same number of chars from the end
            // of the logical text.
            let deleted = previous_len - observed_len;
            let mut logical = self.logical.borrow_mut();
            let keep = logical.chars().count().saturating_sub(deleted);
            let truncated: String = logical.chars().take(keep).collect();
            tracing::debug!("Inferred trailing deletion of {} chars", deleted);
            *logical = truncated;
        } else if observed_len > previous_len {
            // Trailing insertion: the new chars are at the end of the
            // observed text, in authored order.
            let inserted: String = observed.chars().skip(previous_len).collect();
            tracing::debug!("Inferred trailing insertion of {} chars", observed_len - previous_len);
            self.logical.borrow_mut().push_str(&inserted);
        }
        // Equal length: a re-shape echo delivered late, or a caret-only
        // event; the logical text is unchanged.

        let new_display = self.shaper.shape(&self.logical.borrow());
        *self.visual.borrow_mut() = new_display.clone();

        // The write-back re-triggers the change notification; the latch is
        // still set, so the echo is dropped in on_external_change.
        self.widget.set_text(&new_display);

        let caret = new_display.chars().count();
        self.caret.set(caret);
        self.widget.set_caret(caret);
    }

    /// The authoritative logical text, in authored order.
    pub fn logical_text(&self) -> String {
        self.logical.borrow().clone()
    }

    /// The display text as of the last reconciliation.
    pub fn visual_text(&self) -> String {
        self.visual.borrow().clone()
    }

    /// Caret position, in chars, into the visual text.
    pub fn caret(&self) -> usize {
        self.caret.get()
    }

    /// The widget this sync is attached to.
    pub fn widget(&self) -> &W {
        &self.widget
    }
}

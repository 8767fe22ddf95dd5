// Copyright 2025 the Bidisync Authors
// SPDX-License-Identifier: Apache-2.0

//! Traits for the GUI collaborator.
//!
//! This crate never talks to a widget toolkit directly; it reads and writes
//! text properties through these traits and is invoked from the toolkit's
//! change notifications. Setters take `&self` because widget handles in
//! callback-driven toolkits are shared, interior-mutable objects, and a set
//! may synchronously re-enter the notification path.
//!
//! # Implementation Notes
//!
//! Implementations should:
//! - Notify subscribers only when the stored value actually changes. The
//!   sync wrappers rely on this (together with their latch) for the
//!   edit → reshape → write-back loop to terminate.
//! - Deliver notifications synchronously on the single UI thread.

use std::rc::Rc;

/// A widget exposing a mutable text property.
pub trait TextWidget {
    /// Current value of the text property.
    fn text(&self) -> String;

    /// Overwrite the text property. May synchronously trigger a change
    /// notification.
    fn set_text(&self, value: &str);
}

/// An editable text widget: a text property plus a caret.
pub trait EditableWidget: TextWidget {
    /// Move the caret to a char offset into the text property.
    fn set_caret(&self, index: usize);
}

/// A widget exposing a mutable hint/placeholder property.
pub trait HintWidget {
    /// Current value of the hint property.
    fn hint(&self) -> String;

    /// Overwrite the hint property. May synchronously trigger a change
    /// notification.
    fn set_hint(&self, value: &str);
}

// Widget handles are shared with notification closures, so the traits pass
// through Rc.

impl<T: TextWidget + ?Sized> TextWidget for Rc<T> {
    fn text(&self) -> String {
        (**self).text()
    }

    fn set_text(&self, value: &str) {
        (**self).set_text(value);
    }
}

impl<T: EditableWidget + ?Sized> EditableWidget for Rc<T> {
    fn set_caret(&self, index: usize) {
        (**self).set_caret(index);
    }
}

impl<T: HintWidget + ?Sized> HintWidget for Rc<T> {
    fn hint(&self) -> String {
        (**self).hint()
    }

    fn set_hint(&self, value: &str) {
        (**self).set_hint(value);
    }
}

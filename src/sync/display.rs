// Copyright 2025 the Bidisync Authors
// SPDX-License-Identifier: Apache-2.0

//! Shape-on-assign reshaping for non-editable text.
//!
//! Labels and placeholder hints are never typed into, only replaced
//! wholesale, so they need none of the edit inference the editable-field
//! path does: whenever the tracked value changes and contains RTL script,
//! overwrite it with its shaped form. Each wrapper has its own latch to
//! absorb the echo of that overwrite.

use std::cell::Cell;
use std::rc::Rc;

use crate::script::contains_rtl_script;
use crate::shaping::TextShaper;

use super::ReconcileState;
use super::widget::{HintWidget, TextWidget};

/// Keeps a read-only text property (label, button caption) shaped.
pub struct StaticTextSync<W: TextWidget> {
    widget: W,
    shaper: Rc<TextShaper>,
    state: Cell<ReconcileState>,
}

impl<W: TextWidget> StaticTextSync<W> {
    /// Attach to a widget, shaping its current value like any other
    /// assignment.
    pub fn attach(widget: W, shaper: Rc<TextShaper>) -> Self {
        let sync = Self {
            widget,
            shaper,
            state: Cell::new(ReconcileState::Idle),
        };
        let initial = sync.widget.text();
        sync.on_external_change(&initial);
        sync
    }

    /// Handle a change notification for the text property.
    ///
    /// Values without RTL script are left exactly as the caller set them.
    pub fn on_external_change(&self, new_value: &str) {
        if self.state.get().is_reconciling() {
            return;
        }
        if !contains_rtl_script(new_value) {
            return;
        }

        self.state.set(ReconcileState::Reconciling);
        self.widget.set_text(&self.shaper.shape(new_value));
        self.state.set(ReconcileState::Idle);
    }

    /// The widget this sync is attached to.
    pub fn widget(&self) -> &W {
        &self.widget
    }
}

/// Keeps a field's hint/placeholder property shaped.
///
/// Same policy as [`StaticTextSync`], over the hint property and with an
/// independent latch: a field's hint and its text reshape without
/// interfering with each other.
pub struct HintTextSync<W: HintWidget> {
    widget: W,
    shaper: Rc<TextShaper>,
    state: Cell<ReconcileState>,
}

impl<W: HintWidget> HintTextSync<W> {
    /// Attach to a widget, shaping its current hint like any other
    /// assignment.
    pub fn attach(widget: W, shaper: Rc<TextShaper>) -> Self {
        let sync = Self {
            widget,
            shaper,
            state: Cell::new(ReconcileState::Idle),
        };
        let initial = sync.widget.hint();
        sync.on_external_change(&initial);
        sync
    }

    /// Handle a change notification for the hint property.
    pub fn on_external_change(&self, new_value: &str) {
        if self.state.get().is_reconciling() {
            return;
        }
        if !contains_rtl_script(new_value) {
            return;
        }

        self.state.set(ReconcileState::Reconciling);
        self.widget.set_hint(&self.shaper.shape(new_value));
        self.state.set(ReconcileState::Idle);
    }

    /// The widget this sync is attached to.
    pub fn widget(&self) -> &W {
        &self.widget
    }
}

// Copyright 2025 the Bidisync Authors
// SPDX-License-Identifier: Apache-2.0

//! Reconciliation between widget text and its logical source.
//!
//! Each sync wrapper owns one widget property and reacts to its change
//! notification through a single entry point, `on_external_change`. Because
//! every write a wrapper makes re-enters that same notification path, each
//! wrapper carries a [`ReconcileState`] latch: events arriving while a
//! reconciliation is in flight are echoes of its own write and are dropped.
//!
//! All of this is single-threaded and synchronous. State lives in
//! `Cell`/`RefCell`, the latch is checked before anything is borrowed, and a
//! reconciliation either completes within the call stack that delivered the
//! change event or was itself the suppressed echo.

pub mod display;
pub mod field;
pub mod widget;

pub use display::{HintTextSync, StaticTextSync};
pub use field::TextFieldSync;
pub use widget::{EditableWidget, HintWidget, TextWidget};

/// Reconciliation latch for one sync wrapper.
///
/// The transition table is deliberately small:
///
/// | State       | Event             | Action                    | Next        |
/// |-------------|-------------------|---------------------------|-------------|
/// | Idle        | external change   | reconcile and write back  | Reconciling |
/// | Reconciling | external change   | drop (echo of own write)  | Reconciling |
/// | Reconciling | reconcile done    | —                         | Idle        |
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReconcileState {
    /// No reconciliation in flight; change events are real external edits.
    #[default]
    Idle,
    /// A reconciliation is writing back; change events are echoes.
    Reconciling,
}

impl ReconcileState {
    /// Returns true while a reconciliation write is in flight.
    #[inline]
    pub fn is_reconciling(&self) -> bool {
        matches!(self, Self::Reconciling)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        assert_eq!(ReconcileState::default(), ReconcileState::Idle);
        assert!(!ReconcileState::Idle.is_reconciling());
        assert!(ReconcileState::Reconciling.is_reconciling());
    }
}

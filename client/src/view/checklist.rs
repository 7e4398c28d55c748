//! Tick-off state for the grocery shopping screen.
//!
//! The checklist lives purely in view memory: ticks apply instantly, are
//! never sent to the backend, and are discarded when the screen is left.

use std::collections::BTreeSet;

/// Checked-off grocery items, keyed by their item identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroceryChecklist {
    checked: BTreeSet<i64>,
}

impl GroceryChecklist {
    /// Checklist with nothing ticked yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the tick on `id`, returning the new state.
    pub fn toggle(&mut self, id: i64) -> bool {
        if self.checked.remove(&id) {
            false
        } else {
            self.checked.insert(id);
            true
        }
    }

    /// Whether `id` is currently ticked.
    #[must_use]
    pub fn is_checked(&self, id: i64) -> bool {
        self.checked.contains(&id)
    }

    /// Number of ticked items.
    #[must_use]
    pub fn checked_count(&self) -> usize {
        self.checked.len()
    }

    /// Items still to collect out of a list of `total`.
    #[must_use]
    pub fn remaining(&self, total: usize) -> usize {
        total.saturating_sub(self.checked.len())
    }

    /// Drop every tick.
    pub fn clear(&mut self) {
        self.checked.clear();
    }
}

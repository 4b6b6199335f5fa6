//! Settle timers.
//!
//! A timer is a logical deadline on the session clock plus a snapshot of the
//! items it acts on. Applying it only touches state through item ids, so a
//! timer that outlives its session (or is applied to the wrong one) does
//! nothing.

use serde::{Deserialize, Serialize};

use super::event::SessionEvent;
use super::state::SessionState;
use crate::items::Item;

/// What happens when the settle delay elapses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SettleAction {
    /// Make a matched pair inert and clear the selection.
    Retire { first: Item, second: Item },
    /// Clear the selection after a mismatch.
    Release { item: Item },
}

/// A pending settle action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettleTimer {
    /// Session clock value (ms) at which this fires.
    pub due_at: u64,
    pub action: SettleAction,
}

impl SettleTimer {
    #[must_use]
    pub fn new(due_at: u64, action: SettleAction) -> Self {
        Self { due_at, action }
    }

    #[must_use]
    pub fn is_due(&self, now: u64) -> bool {
        now >= self.due_at
    }

    /// Apply to `state`. Returns `None` and leaves `state` alone if the
    /// snapshot items do not belong to it.
    pub fn apply_to(self, state: &mut SessionState) -> Option<SessionEvent> {
        match self.action {
            SettleAction::Retire { first, second } => {
                if !state.holds(&first) || !state.holds(&second) {
                    return None;
                }
                state.retire(first.id, second.id);
                Some(SessionEvent::Retired { first, second })
            }
            SettleAction::Release { item } => {
                if !state.holds(&item) {
                    return None;
                }
                if state.selected() == Some(item.id) {
                    state.clear_selection();
                }
                Some(SessionEvent::Released { item })
            }
        }
    }
}

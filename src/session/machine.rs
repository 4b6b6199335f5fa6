//! The session state machine.
//!
//! ```text
//! Idle --select--> OneSelected --select--> Settling --timer--> Idle
//!                                              \
//!                                               `--last pair--> Completed
//! ```
//!
//! `Settling` covers the evaluation and its settle delay. A pending timer is
//! always fired before the next selection is processed, so selections are
//! strictly ordered even when the caller ignores the clock.

use tracing::{debug, info, warn};

use super::event::{SessionEvent, SessionEvents};
use super::state::SessionState;
use super::timer::{SettleAction, SettleTimer};
use crate::core::{SessionConfig, SessionError};
use crate::items::{Item, ItemId};
use crate::matching::{MatchEvaluator, MatchPolicy};
use crate::modes::{rule_for, Difficulty, GameMode, ModeRule};

/// Where the session is in its select/evaluate cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    /// Nothing selected.
    Idle,
    /// One item highlighted, waiting for its partner.
    OneSelected,
    /// A verdict was reached; its settle timer has not fired yet.
    Settling,
    /// All pairs found. Terminal.
    Completed,
}

/// One play-through of a dealt deck.
#[derive(Clone, Debug)]
pub struct Session {
    mode: GameMode,
    difficulty: Difficulty,
    policy: MatchPolicy,
    match_settle_ms: u64,
    mismatch_settle_ms: u64,
    stars_per_win: u8,
    state: SessionState,
    clock_ms: u64,
    pending: Option<SettleTimer>,
    completed: bool,
}

impl Session {
    /// Start a session over a dealt deck.
    #[must_use]
    pub fn new(mode: GameMode, difficulty: Difficulty, items: Vec<Item>, config: &SessionConfig) -> Self {
        Self {
            mode,
            difficulty,
            policy: config.match_policy,
            match_settle_ms: config.match_settle_ms,
            mismatch_settle_ms: config.mismatch_settle_ms,
            stars_per_win: config.stars_per_win,
            state: SessionState::new(items),
            clock_ms: 0,
            pending: None,
            completed: false,
        }
    }

    #[must_use]
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Rule for this session's mode.
    #[must_use]
    pub fn rule(&self) -> &'static ModeRule {
        rule_for(self.mode)
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn matched_pairs(&self) -> usize {
        self.state.matched_pairs()
    }

    #[must_use]
    pub fn total_pairs(&self) -> usize {
        self.state.total_pairs()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completed
    }

    #[must_use]
    pub fn pending_timer(&self) -> Option<&SettleTimer> {
        self.pending.as_ref()
    }

    /// Logical clock, in milliseconds since the session started.
    #[must_use]
    pub fn clock_ms(&self) -> u64 {
        self.clock_ms
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        if self.completed {
            SessionPhase::Completed
        } else if self.pending.is_some() {
            SessionPhase::Settling
        } else if self.state.selected().is_some() {
            SessionPhase::OneSelected
        } else {
            SessionPhase::Idle
        }
    }

    /// Handle a tap on an item.
    ///
    /// Unknown ids are a caller bug and come back as an error with the state
    /// untouched. Taps on inert items, on the item already selected, or after
    /// completion are accepted and ignored.
    pub fn select_item(&mut self, id: ItemId) -> Result<SessionEvents, SessionError> {
        let Some(&item) = self.state.get(id) else {
            warn!(%id, "selection of an item outside this session");
            return Err(SessionError::UnknownItem(id));
        };

        let mut events = self.flush();

        if self.completed || self.state.is_inert(id) || self.state.selected() == Some(id) {
            return Ok(events);
        }

        match self.state.selected_item().copied() {
            None => {
                self.state.select(id);
                events.push(SessionEvent::ItemSelected {
                    item,
                    first_in_pair: true,
                });
            }
            Some(first) => {
                events.push(SessionEvent::ItemSelected {
                    item,
                    first_in_pair: false,
                });
                self.evaluate(first, item, &mut events);
            }
        }

        Ok(events)
    }

    fn evaluate(&mut self, first: Item, second: Item, events: &mut SessionEvents) {
        if self.policy.is_match(&first, &second) {
            self.state.record_match();
            debug!(
                first = %first.id,
                second = %second.id,
                progress = %self.state.progress_label(),
                "pair matched"
            );
            events.push(SessionEvent::Matched { first, second });
            self.schedule(self.match_settle_ms, SettleAction::Retire { first, second });

            if self.state.is_complete() {
                self.completed = true;
                info!(mode = %self.mode, difficulty = %self.difficulty, stars = self.stars_per_win, "session completed");
                events.push(SessionEvent::Completed {
                    stars: self.stars_per_win,
                });
            }
        } else {
            debug!(first = %first.id, second = %second.id, "pair mismatched");
            events.push(SessionEvent::Mismatched { first, second });
            self.schedule(self.mismatch_settle_ms, SettleAction::Release { item: first });
        }
    }

    fn schedule(&mut self, delay_ms: u64, action: SettleAction) {
        self.pending = Some(SettleTimer::new(self.clock_ms.saturating_add(delay_ms), action));
    }

    /// Move the clock forward and fire the pending timer if it is due.
    pub fn advance_clock(&mut self, elapsed_ms: u64) -> SessionEvents {
        self.clock_ms = self.clock_ms.saturating_add(elapsed_ms);
        let mut events = SessionEvents::new();
        if self.pending.is_some_and(|timer| timer.is_due(self.clock_ms)) {
            events.extend(self.fire_pending());
        }
        events
    }

    /// Fire the pending timer now, whatever the clock says.
    pub fn flush(&mut self) -> SessionEvents {
        self.fire_pending().into_iter().collect()
    }

    fn fire_pending(&mut self) -> Option<SessionEvent> {
        let timer = self.pending.take()?;
        self.clock_ms = self.clock_ms.max(timer.due_at);
        timer.apply_to(&mut self.state)
    }

    /// Tear the session down mid-play. Any pending timer is discarded
    /// unapplied; the returned state is exactly what the player left.
    #[must_use]
    pub fn abandon(mut self) -> SessionState {
        if let Some(timer) = self.pending.take() {
            debug!(due_at = timer.due_at, "discarding settle timer on abandon");
        }
        self.state
    }
}

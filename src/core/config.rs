//! Session configuration.
//!
//! Pair counts, settle delays, scoring and match policy. Everything here is
//! plain data with builder helpers so games and tests can tweak one knob
//! without restating the rest.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::matching::MatchPolicy;
use crate::modes::Difficulty;

/// Number of twin pairs dealt per difficulty.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairCounts {
    pub easy: usize,
    pub medium: usize,
    pub hard: usize,
}

impl Default for PairCounts {
    fn default() -> Self {
        Self {
            easy: 2,
            medium: 3,
            hard: 4,
        }
    }
}

impl PairCounts {
    /// Pair count for a difficulty.
    #[must_use]
    pub fn for_difficulty(&self, difficulty: Difficulty) -> usize {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
        }
    }
}

/// Session configuration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Pairs dealt per difficulty.
    pub pair_counts: PairCounts,

    /// How two selected items are compared.
    pub match_policy: MatchPolicy,

    /// Delay before a matched pair goes inert (ms).
    pub match_settle_ms: u64,

    /// Delay before a mismatched selection is released (ms).
    pub mismatch_settle_ms: u64,

    /// Stars awarded for finishing a session. Flat, not performance based.
    pub stars_per_win: u8,

    /// Root seed for deck generation.
    pub seed: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            pair_counts: PairCounts::default(),
            match_policy: MatchPolicy::Loose,
            match_settle_ms: 1000,
            mismatch_settle_ms: 500,
            stars_per_win: 3,
            seed: 42,
        }
    }
}

impl SessionConfig {
    /// Use a different match policy. `MatchPolicy::Strict` usually leaves
    /// some pair unmatchable, so the session never completes.
    pub fn with_match_policy(mut self, policy: MatchPolicy) -> Self {
        self.match_policy = policy;
        self
    }

    /// Use different pair counts.
    pub fn with_pair_counts(mut self, pair_counts: PairCounts) -> Self {
        self.pair_counts = pair_counts;
        self
    }

    /// Use a custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Use custom settle delays.
    pub fn with_settle_delays(mut self, match_ms: u64, mismatch_ms: u64) -> Self {
        self.match_settle_ms = match_ms;
        self.mismatch_settle_ms = mismatch_ms;
        self
    }

    /// Reject configurations that cannot produce a playable deck.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for difficulty in Difficulty::ALL {
            if self.pair_counts.for_difficulty(difficulty) == 0 {
                return Err(ConfigError::ZeroPairs(difficulty));
            }
        }
        Ok(())
    }
}

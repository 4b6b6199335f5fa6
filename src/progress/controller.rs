//! Progression: best stars, cell advancement, settings.
//!
//! The controller owns the record and is its only writer. Every mutation is
//! followed by a whole-record save; save failures are logged and otherwise
//! ignored, the in-memory record stays authoritative.

use tracing::{info, warn};

use super::record::ProgressRecord;
use super::store::ProgressStore;
use crate::core::ConfigError;
use crate::modes::{Difficulty, GameMode};

/// The cell after `(mode, difficulty)`.
///
/// Difficulty climbs within a mode; after hard the next mode starts at easy;
/// after the last mode it wraps to the first. All 15 cells form one cycle.
#[must_use]
pub fn next_cell(mode: GameMode, difficulty: Difficulty) -> (GameMode, Difficulty) {
    match difficulty.harder() {
        Some(harder) => (mode, harder),
        None => (mode.next(), Difficulty::Easy),
    }
}

/// Reads, updates and persists the progress record.
#[derive(Debug)]
pub struct ProgressionController<S: ProgressStore> {
    store: S,
    record: ProgressRecord,
}

impl<S: ProgressStore> ProgressionController<S> {
    /// Load the record from `store`, or start fresh if there is none or it
    /// cannot be read.
    pub fn load(store: S) -> Self {
        let record = match store.load() {
            Ok(Some(record)) => record.sanitized(),
            Ok(None) => ProgressRecord::default(),
            Err(err) => {
                warn!(%err, "failed to load progress, starting fresh");
                ProgressRecord::default()
            }
        };
        Self { store, record }
    }

    #[must_use]
    pub fn record(&self) -> &ProgressRecord {
        &self.record
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Cell to play next.
    #[must_use]
    pub fn current(&self) -> (GameMode, Difficulty) {
        (self.record.mode, self.record.difficulty)
    }

    /// Best stars for a cell.
    #[must_use]
    pub fn stars(&self, mode: GameMode, difficulty: Difficulty) -> u8 {
        self.record.stars.get(mode, difficulty)
    }

    #[must_use]
    pub fn total_stars(&self) -> u32 {
        self.record.stars.total()
    }

    /// Keep the better of the stored and the new score, then save.
    pub fn record_completion(&mut self, mode: GameMode, difficulty: Difficulty, stars: u8) -> &ProgressRecord {
        let best = self.record.stars.raise(mode, difficulty, stars);
        info!(%mode, %difficulty, stars, best, "recorded completion");
        self.persist();
        &self.record
    }

    /// Move to the next cell in the cycle, save, and return it.
    pub fn advance(&mut self) -> (GameMode, Difficulty) {
        let (mode, difficulty) = next_cell(self.record.mode, self.record.difficulty);
        self.select_cell(mode, difficulty);
        (mode, difficulty)
    }

    /// Jump to a cell by its menu tokens.
    pub fn select(&mut self, mode: &str, difficulty: &str) -> Result<(GameMode, Difficulty), ConfigError> {
        let mode: GameMode = mode.parse()?;
        let difficulty: Difficulty = difficulty.parse()?;
        self.select_cell(mode, difficulty);
        Ok((mode, difficulty))
    }

    /// Jump to a cell.
    pub fn select_cell(&mut self, mode: GameMode, difficulty: Difficulty) {
        self.record.mode = mode;
        self.record.difficulty = difficulty;
        info!(%mode, %difficulty, "selected cell");
        self.persist();
    }

    /// Flip sound on/off. Returns the new setting.
    pub fn toggle_sound(&mut self) -> bool {
        self.record.sound_enabled = !self.record.sound_enabled;
        self.persist();
        self.record.sound_enabled
    }

    /// Flip narration on/off. Returns the new setting.
    pub fn toggle_voice(&mut self) -> bool {
        self.record.voice_enabled = !self.record.voice_enabled;
        self.persist();
        self.record.voice_enabled
    }

    pub fn set_language(&mut self, language: impl Into<String>) {
        self.record.language = language.into();
        self.persist();
    }

    fn persist(&mut self) {
        if let Err(err) = self.store.save(&self.record) {
            warn!(%err, "failed to save progress");
        }
    }
}

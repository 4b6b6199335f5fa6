//! The persisted progress record.
//!
//! Serialized layout (JSON):
//!
//! ```text
//! {
//!   "mode": "colors", "difficulty": "easy",
//!   "stars": { "colors": { "easy": 0, "medium": 0, "hard": 0 }, ..., "where": {...} },
//!   "soundEnabled": true, "voiceEnabled": true, "language": "en", "volume": 0.5
//! }
//! ```
//!
//! Missing fields fall back to their defaults, so older records still load.

use serde::{Deserialize, Serialize};

use crate::modes::{Difficulty, GameMode};

/// Best possible score for one cell.
pub const MAX_STARS: u8 = 3;

/// Best stars for each difficulty of one mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DifficultyStars {
    pub easy: u8,
    pub medium: u8,
    pub hard: u8,
}

impl DifficultyStars {
    #[must_use]
    pub fn get(&self, difficulty: Difficulty) -> u8 {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
        }
    }

    fn get_mut(&mut self, difficulty: Difficulty) -> &mut u8 {
        match difficulty {
            Difficulty::Easy => &mut self.easy,
            Difficulty::Medium => &mut self.medium,
            Difficulty::Hard => &mut self.hard,
        }
    }
}

/// Best stars for all 15 (mode, difficulty) cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarTable {
    pub colors: DifficultyStars,
    pub sizes: DifficultyStars,
    pub wheels: DifficultyStars,
    pub details: DifficultyStars,
    #[serde(rename = "where")]
    pub where_: DifficultyStars,
}

impl StarTable {
    fn row(&self, mode: GameMode) -> &DifficultyStars {
        match mode {
            GameMode::Colors => &self.colors,
            GameMode::Sizes => &self.sizes,
            GameMode::Wheels => &self.wheels,
            GameMode::Details => &self.details,
            GameMode::Where => &self.where_,
        }
    }

    fn row_mut(&mut self, mode: GameMode) -> &mut DifficultyStars {
        match mode {
            GameMode::Colors => &mut self.colors,
            GameMode::Sizes => &mut self.sizes,
            GameMode::Wheels => &mut self.wheels,
            GameMode::Details => &mut self.details,
            GameMode::Where => &mut self.where_,
        }
    }

    #[must_use]
    pub fn get(&self, mode: GameMode, difficulty: Difficulty) -> u8 {
        self.row(mode).get(difficulty)
    }

    /// Keep the better of the stored and the new score. Returns the result.
    pub fn raise(&mut self, mode: GameMode, difficulty: Difficulty, stars: u8) -> u8 {
        let cell = self.row_mut(mode).get_mut(difficulty);
        *cell = (*cell).max(stars.min(MAX_STARS));
        *cell
    }

    /// Sum over every cell.
    #[must_use]
    pub fn total(&self) -> u32 {
        GameMode::ALL
            .into_iter()
            .flat_map(|mode| Difficulty::ALL.into_iter().map(move |d| (mode, d)))
            .map(|(mode, difficulty)| u32::from(self.get(mode, difficulty)))
            .sum()
    }

    /// Clamp every cell into `0..=MAX_STARS`.
    fn clamp(&mut self) {
        for mode in GameMode::ALL {
            let row = self.row_mut(mode);
            for difficulty in Difficulty::ALL {
                let cell = row.get_mut(difficulty);
                *cell = (*cell).min(MAX_STARS);
            }
        }
    }
}

/// Everything remembered between launches.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProgressRecord {
    pub mode: GameMode,
    pub difficulty: Difficulty,
    pub stars: StarTable,
    pub sound_enabled: bool,
    pub voice_enabled: bool,
    pub language: String,
    pub volume: f32,
}

impl Default for ProgressRecord {
    fn default() -> Self {
        Self {
            mode: GameMode::Colors,
            difficulty: Difficulty::Easy,
            stars: StarTable::default(),
            sound_enabled: true,
            voice_enabled: true,
            language: "en".to_string(),
            volume: 0.5,
        }
    }
}

impl ProgressRecord {
    /// Bring values read from storage back into range.
    #[must_use]
    pub fn sanitized(mut self) -> Self {
        self.stars.clamp();
        self.volume = self.volume.clamp(0.0, 1.0);
        self
    }
}

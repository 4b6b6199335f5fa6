//! Game modes and difficulties.
//!
//! Both are closed enums with a fixed cyclic order. String tokens match the
//! persisted record and the menu ("colors", "easy").

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::ConfigError;

/// Which attribute dimension decides a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    Colors,
    Sizes,
    Wheels,
    Details,
    Where,
}

impl GameMode {
    /// Every mode, in progression order.
    pub const ALL: [GameMode; 5] = [
        GameMode::Colors,
        GameMode::Sizes,
        GameMode::Wheels,
        GameMode::Details,
        GameMode::Where,
    ];

    /// Token used in menus and the persisted record.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            GameMode::Colors => "colors",
            GameMode::Sizes => "sizes",
            GameMode::Wheels => "wheels",
            GameMode::Details => "details",
            GameMode::Where => "where",
        }
    }

    /// Position in progression order.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Next mode in progression order, wrapping after the last.
    #[must_use]
    pub const fn next(self) -> GameMode {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownMode(s.to_string()))
    }
}

/// Controls how many pairs are dealt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Every difficulty, easiest first.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The next harder difficulty, or `None` after hard.
    #[must_use]
    pub const fn harder(self) -> Option<Difficulty> {
        match self {
            Difficulty::Easy => Some(Difficulty::Medium),
            Difficulty::Medium => Some(Difficulty::Hard),
            Difficulty::Hard => None,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|difficulty| difficulty.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownDifficulty(s.to_string()))
    }
}

//! Game modes, difficulties, and the per-mode rule table.

pub mod mode;
pub mod rules;

pub use mode::{Difficulty, GameMode};
pub use rules::{rule_for, ModeRule, Phrasing};

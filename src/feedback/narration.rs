//! Fixed narration lines and event-to-line mapping.

use crate::modes::{Difficulty, GameMode, ModeRule};
use crate::session::SessionEvent;

pub const GREETING: &str = "Find the matching trucks!";
pub const RETRY: &str = "Almost! Try another!";
pub const WIN: &str = "You won! Super matcher! You are amazing!";

// Navigation
pub const PLAY_AGAIN: &str = "Let's play again!";
pub const STARTING_OVER: &str = "Starting over!";
pub const GOING_HOME: &str = "Going home!";

/// Menu line for picking a mode: "Let's play WHEELS!".
#[must_use]
pub fn mode_line(mode: GameMode) -> String {
    format!("Let's play {}!", mode.as_str().to_uppercase())
}

/// Menu line for picking a difficulty: "Starting EASY mode!".
#[must_use]
pub fn difficulty_line(difficulty: Difficulty) -> String {
    format!("Starting {} mode!", difficulty.as_str().to_uppercase())
}

/// What the narrator should say for `event`, if anything.
#[must_use]
pub fn line_for(rule: &ModeRule, event: &SessionEvent) -> Option<String> {
    match event {
        SessionEvent::ItemSelected {
            item,
            first_in_pair: true,
        } => Some(rule.describe_one(item)),
        SessionEvent::Matched { first, .. } => Some(rule.describe_pair(first)),
        SessionEvent::Mismatched { .. } => Some(RETRY.to_string()),
        SessionEvent::Completed { .. } => Some(WIN.to_string()),
        SessionEvent::ItemSelected { .. } | SessionEvent::Retired { .. } | SessionEvent::Released { .. } => None,
    }
}

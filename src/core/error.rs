//! Error types.
//!
//! Configuration and session errors are returned to the caller. Store and
//! narration errors are absorbed by the components that hit them and only
//! show up in logs.

use thiserror::Error;

use crate::items::ItemId;
use crate::modes::Difficulty;

/// A bad mode/difficulty token or an unusable configuration value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown game mode `{0}`")]
    UnknownMode(String),
    #[error("unknown difficulty `{0}`")]
    UnknownDifficulty(String),
    #[error("pair count for {0} must be at least 1")]
    ZeroPairs(Difficulty),
}

/// Contract violations by whoever drives a session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("no item with id {0} in this session")]
    UnknownItem(ItemId),
}

/// Progress store failures.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("progress store I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("progress record is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("progress record is not valid binary: {0}")]
    Binary(#[from] bincode::Error),
}

/// Speech engine failures. Never affects game state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NarrationError {
    #[error("speech engine unavailable: {0}")]
    Unavailable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            ConfigError::UnknownMode("boats".into()).to_string(),
            "unknown game mode `boats`"
        );
        assert_eq!(
            ConfigError::ZeroPairs(Difficulty::Hard).to_string(),
            "pair count for hard must be at least 1"
        );
        assert_eq!(
            SessionError::UnknownItem(ItemId::new(9)).to_string(),
            "no item with id Item(9) in this session"
        );
    }
}

//! # zoomy-twins
//!
//! Session engine for a children's vehicle matching puzzle.
//!
//! Each session deals pairs of vehicles. Every vehicle varies in color,
//! size, wheel count, accessory and category; the current game mode decides
//! which one of those the player has to match on.
//!
//! ## Design Principles
//!
//! 1. **Presentation-free**: No rendering, audio or speech. The core emits
//!    `SessionEvent`s and calls injected sinks.
//!
//! 2. **One table per mode**: Everything mode-specific lives in a single
//!    `ModeRule`, used by generation and narration alike.
//!
//! 3. **Deterministic**: All randomness comes from a seeded `GameRng`, and
//!    settle delays run on a logical clock.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, errors
//! - `catalog`: Attribute catalogs
//! - `items`: Vehicle items and their ids
//! - `modes`: Game modes, difficulties, per-mode rules
//! - `deck`: Deck generation
//! - `matching`: Match policies
//! - `session`: Selection state machine
//! - `progress`: Best stars, advancement, persistence
//! - `feedback`: Sound and narration sinks
//! - `game`: The runner wiring it all together

pub mod core;
pub mod catalog;
pub mod items;
pub mod modes;
pub mod deck;
pub mod matching;
pub mod session;
pub mod progress;
pub mod feedback;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, GameRng, NarrationError, PairCounts, SessionConfig, SessionError, StoreError,
};

pub use crate::catalog::{
    Accessory, Attribute, AttributeValue, Catalog, CatalogEntry, Category, Color, Size, WheelCount,
};

pub use crate::items::{Item, ItemId, PairId};

pub use crate::modes::{rule_for, Difficulty, GameMode, ModeRule, Phrasing};

pub use crate::deck::DeckGenerator;

pub use crate::matching::{Loose, MatchEvaluator, MatchPolicy, Strict};

pub use crate::session::{
    Session, SessionEvent, SessionEvents, SessionPhase, SessionState, SettleAction, SettleTimer,
};

pub use crate::progress::{
    next_cell, FileStore, MemoryStore, ProgressRecord, ProgressStore, ProgressionController,
    StarTable, StoreFormat, MAX_STARS,
};

pub use crate::feedback::{Cue, FeedbackHub, Silent, SoundSink, VoiceSink};

pub use crate::game::GameRunner;

//! Cross-session progression and its persistence.
//!
//! ## Key Types
//!
//! - `ProgressRecord`: best stars per cell plus settings
//! - `ProgressStore`: where the record lives (`MemoryStore`, `FileStore`)
//! - `ProgressionController`: the record's only writer

pub mod controller;
pub mod record;
pub mod store;

pub use controller::{next_cell, ProgressionController};
pub use record::{DifficultyStars, ProgressRecord, StarTable, MAX_STARS};
pub use store::{FileStore, MemoryStore, ProgressStore, StoreFormat, STORE_KEY};

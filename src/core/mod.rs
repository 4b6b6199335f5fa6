//! Core building blocks: RNG, configuration, errors.
//!
//! Nothing in here knows about vehicles. The puzzle-specific types live in
//! `catalog`, `items` and `modes`.

pub mod rng;
pub mod config;
pub mod error;

pub use rng::GameRng;
pub use config::{PairCounts, SessionConfig};
pub use error::{ConfigError, NarrationError, SessionError, StoreError};

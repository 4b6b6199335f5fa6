//! Top-level driver tying progression, decks, sessions and feedback together.

mod runner;

pub use runner::GameRunner;

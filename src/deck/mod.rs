//! Deck generation: attribute assignment and shuffling.

mod generator;

pub use generator::DeckGenerator;

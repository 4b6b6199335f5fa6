//! Items: the vehicles dealt into a session.

pub mod item;

pub use item::{Item, ItemId, PairId};

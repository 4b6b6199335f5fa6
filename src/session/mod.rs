//! Session state machine: selection, evaluation, settle timers, win.
//!
//! ## Key Types
//!
//! - `Session`: consumes taps, emits `SessionEvent`s
//! - `SessionState`: items, selection, progress
//! - `SettleTimer`: logical delay with an item snapshot

mod event;
mod machine;
mod state;
mod timer;

pub use event::{SessionEvent, SessionEvents};
pub use machine::{Session, SessionPhase};
pub use state::SessionState;
pub use timer::{SettleAction, SettleTimer};

//! Sound and narration feedback.
//!
//! The core only produces `SessionEvent`s. `FeedbackHub` turns them into
//! sound cues and spoken lines and hands those to injected sinks.

mod hub;
pub mod narration;
mod sinks;

pub use hub::FeedbackHub;
pub use sinks::{Cue, Silent, SoundSink, VoiceSink};

//! Output sinks for sound and speech.
//!
//! Sinks are fire-and-forget: the core never waits on them and never reads
//! anything back except a speech engine's failure, which is only logged.

use crate::core::NarrationError;

/// Sound effects the core asks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cue {
    Tap,
    Match,
    Mismatch,
    Win,
    /// Engine noise, pitched by wheel count.
    Vroom { wheels: u8 },
}

impl Cue {
    /// Base frequency in Hz for hosts that synthesize tones.
    #[must_use]
    pub fn base_frequency(self) -> f32 {
        match self {
            Cue::Tap => 800.0,
            Cue::Match => 523.25,
            Cue::Mismatch => 200.0,
            Cue::Win => 523.25,
            Cue::Vroom { wheels } => 100.0 + f32::from(wheels) * 50.0,
        }
    }
}

pub trait SoundSink {
    fn play(&mut self, cue: Cue);
}

pub trait VoiceSink {
    fn speak(&mut self, text: &str) -> Result<(), NarrationError>;
}

/// Discards everything. For hosts without audio.
#[derive(Clone, Copy, Debug, Default)]
pub struct Silent;

impl SoundSink for Silent {
    fn play(&mut self, _cue: Cue) {}
}

impl VoiceSink for Silent {
    fn speak(&mut self, _text: &str) -> Result<(), NarrationError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vroom_pitch() {
        assert_eq!(Cue::Vroom { wheels: 2 }.base_frequency(), 200.0);
        assert_eq!(Cue::Vroom { wheels: 6 }.base_frequency(), 400.0);
    }

    #[test]
    fn test_silent() {
        let mut sink = Silent;
        sink.play(Cue::Tap);
        assert!(sink.speak("hello").is_ok());
    }
}

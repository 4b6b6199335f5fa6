//! Routes session events to the sound and voice sinks.

use tracing::warn;

use super::narration::{self, line_for};
use super::sinks::{Cue, SoundSink, VoiceSink};
use crate::modes::ModeRule;
use crate::session::SessionEvent;

/// Fans session events out to sound and speech, honoring the user's toggles.
pub struct FeedbackHub {
    sound: Box<dyn SoundSink>,
    voice: Box<dyn VoiceSink>,
    sound_enabled: bool,
    voice_enabled: bool,
}

impl std::fmt::Debug for FeedbackHub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeedbackHub")
            .field("sound_enabled", &self.sound_enabled)
            .field("voice_enabled", &self.voice_enabled)
            .finish_non_exhaustive()
    }
}

impl FeedbackHub {
    pub fn new(sound: Box<dyn SoundSink>, voice: Box<dyn VoiceSink>) -> Self {
        Self {
            sound,
            voice,
            sound_enabled: true,
            voice_enabled: true,
        }
    }

    /// Apply the persisted toggles.
    pub fn set_enabled(&mut self, sound: bool, voice: bool) {
        self.sound_enabled = sound;
        self.voice_enabled = voice;
    }

    #[must_use]
    pub fn sound_enabled(&self) -> bool {
        self.sound_enabled
    }

    #[must_use]
    pub fn voice_enabled(&self) -> bool {
        self.voice_enabled
    }

    /// Session-start line.
    pub fn greet(&mut self) {
        self.say(narration::GREETING);
    }

    /// React to one event.
    pub fn dispatch(&mut self, rule: &ModeRule, event: &SessionEvent) {
        match event {
            SessionEvent::ItemSelected { .. } => self.play(Cue::Tap),
            SessionEvent::Matched { first, .. } => {
                self.play(Cue::Match);
                self.play(Cue::Vroom {
                    wheels: first.wheels.count(),
                });
            }
            SessionEvent::Mismatched { .. } => self.play(Cue::Mismatch),
            SessionEvent::Completed { .. } => self.play(Cue::Win),
            SessionEvent::Retired { .. } | SessionEvent::Released { .. } => {}
        }

        if let Some(line) = line_for(rule, event) {
            self.say(&line);
        }
    }

    fn play(&mut self, cue: Cue) {
        if self.sound_enabled {
            self.sound.play(cue);
        }
    }

    /// Speak a line if narration is on. Failures are logged and dropped.
    pub fn say(&mut self, text: &str) {
        if !self.voice_enabled {
            return;
        }
        if let Err(err) = self.voice.speak(text) {
            warn!(%err, text, "narration failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Accessory, Category, Color, Size, WheelCount};
    use crate::core::NarrationError;
    use crate::items::{Item, ItemId, PairId};
    use crate::modes::{rule_for, GameMode};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default, Clone)]
    struct Log {
        cues: Rc<RefCell<Vec<Cue>>>,
        lines: Rc<RefCell<Vec<String>>>,
    }

    impl SoundSink for Log {
        fn play(&mut self, cue: Cue) {
            self.cues.borrow_mut().push(cue);
        }
    }

    impl VoiceSink for Log {
        fn speak(&mut self, text: &str) -> Result<(), NarrationError> {
            self.lines.borrow_mut().push(text.to_string());
            Ok(())
        }
    }

    struct Broken;

    impl VoiceSink for Broken {
        fn speak(&mut self, _text: &str) -> Result<(), NarrationError> {
            Err(NarrationError::Unavailable("no engine".into()))
        }
    }

    fn truck(wheels: WheelCount) -> Item {
        Item {
            id: ItemId::new(0),
            pair_id: PairId::new(0),
            color: Color::Red,
            size: Size::Small,
            wheels,
            accessory: Accessory::Ladder,
            category: Category::Land,
        }
    }

    #[test]
    fn test_match_cues_and_line() {
        let log = Log::default();
        let mut hub = FeedbackHub::new(Box::new(log.clone()), Box::new(log.clone()));
        let item = truck(WheelCount::Six);

        hub.dispatch(
            rule_for(GameMode::Wheels),
            &SessionEvent::Matched {
                first: item,
                second: item,
            },
        );

        assert_eq!(*log.cues.borrow(), vec![Cue::Match, Cue::Vroom { wheels: 6 }]);
        assert_eq!(*log.lines.borrow(), vec!["Yay! Two trucks with 6 wheels!".to_string()]);
    }

    #[test]
    fn test_toggles_mute() {
        let log = Log::default();
        let mut hub = FeedbackHub::new(Box::new(log.clone()), Box::new(log.clone()));
        hub.set_enabled(false, false);

        hub.greet();
        hub.dispatch(rule_for(GameMode::Colors), &SessionEvent::Completed { stars: 3 });

        assert!(log.cues.borrow().is_empty());
        assert!(log.lines.borrow().is_empty());
    }

    #[test]
    fn test_broken_voice_is_swallowed() {
        let log = Log::default();
        let mut hub = FeedbackHub::new(Box::new(log.clone()), Box::new(Broken));

        hub.greet();
        hub.dispatch(rule_for(GameMode::Colors), &SessionEvent::Completed { stars: 3 });

        assert_eq!(*log.cues.borrow(), vec![Cue::Win]);
    }
}

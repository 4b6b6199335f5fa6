//! Wires progression, deck generation, the session and feedback together.
//!
//! Every collaborator is passed in; nothing is looked up globally.

use tracing::{debug, info};

use crate::core::{ConfigError, GameRng, SessionConfig, SessionError};
use crate::deck::DeckGenerator;
use crate::feedback::{narration, FeedbackHub};
use crate::items::ItemId;
use crate::progress::{ProgressStore, ProgressionController};
use crate::session::{Session, SessionEvent, SessionEvents};

/// Drives one player's sessions from start to finish.
#[derive(Debug)]
pub struct GameRunner<S: ProgressStore> {
    config: SessionConfig,
    generator: DeckGenerator,
    rng: GameRng,
    progress: ProgressionController<S>,
    feedback: FeedbackHub,
    session: Option<Session>,
}

impl<S: ProgressStore> GameRunner<S> {
    pub fn new(config: SessionConfig, store: S, feedback: FeedbackHub) -> Result<Self, ConfigError> {
        let generator = DeckGenerator::new(&config)?;
        let rng = GameRng::new(config.seed);
        let progress = ProgressionController::load(store);
        let mut feedback = feedback;
        feedback.set_enabled(progress.record().sound_enabled, progress.record().voice_enabled);

        Ok(Self {
            config,
            generator,
            rng,
            progress,
            feedback,
            session: None,
        })
    }

    #[must_use]
    pub fn progress(&self) -> &ProgressionController<S> {
        &self.progress
    }

    /// Settings changes go through here so the hub stays in sync.
    pub fn toggle_sound(&mut self) -> bool {
        let enabled = self.progress.toggle_sound();
        self.sync_feedback();
        enabled
    }

    pub fn toggle_voice(&mut self) -> bool {
        let enabled = self.progress.toggle_voice();
        self.sync_feedback();
        enabled
    }

    /// Menu pick by token. Nothing is announced unless both tokens parse.
    pub fn choose(&mut self, mode: &str, difficulty: &str) -> Result<&Session, ConfigError> {
        let (mode, difficulty) = self.progress.select(mode, difficulty)?;
        self.feedback.say(&narration::mode_line(mode));
        self.feedback.say(&narration::difficulty_line(difficulty));
        Ok(self.start_session())
    }

    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Deal a fresh deck for the current cell. Any running session is
    /// abandoned.
    pub fn start_session(&mut self) -> &Session {
        self.abandon();
        let (mode, difficulty) = self.progress.current();
        let mut rng = self.rng.fork();
        let items = self.generator.generate(mode, difficulty, &mut rng);
        self.feedback.greet();
        self.session.insert(Session::new(mode, difficulty, items, &self.config))
    }

    /// Replay the same cell from the win screen.
    pub fn play_again(&mut self) -> &Session {
        self.feedback.say(narration::PLAY_AGAIN);
        self.start_session()
    }

    /// Redeal the same cell mid-game.
    pub fn restart(&mut self) -> &Session {
        self.feedback.say(narration::STARTING_OVER);
        self.start_session()
    }

    /// Leave for the menu.
    pub fn go_home(&mut self) {
        self.feedback.say(narration::GOING_HOME);
        self.abandon();
    }

    /// Advance to the next cell and start it.
    pub fn next_level(&mut self) -> &Session {
        self.progress.advance();
        self.start_session()
    }

    /// Forward a tap. With no session running, every id is unknown.
    pub fn select(&mut self, id: ItemId) -> Result<SessionEvents, SessionError> {
        let Some(session) = self.session.as_mut() else {
            return Err(SessionError::UnknownItem(id));
        };
        let events = session.select_item(id)?;
        self.handle(&events);
        Ok(events)
    }

    /// Advance the session clock.
    pub fn tick(&mut self, elapsed_ms: u64) -> SessionEvents {
        let Some(session) = self.session.as_mut() else {
            return SessionEvents::new();
        };
        let events = session.advance_clock(elapsed_ms);
        self.handle(&events);
        events
    }

    /// Drop the running session, discarding any pending timer.
    pub fn abandon(&mut self) {
        let Some(session) = self.session.take() else {
            return;
        };
        if let Some(timer) = session.pending_timer() {
            debug!(due_at = timer.due_at, "discarding settle timer on abandon");
        }
        if !session.is_complete() {
            info!(
                mode = %session.mode(),
                difficulty = %session.difficulty(),
                matched = session.matched_pairs(),
                "session abandoned"
            );
        }
    }

    fn handle(&mut self, events: &SessionEvents) {
        let Some(session) = self.session.as_ref() else {
            return;
        };
        let (mode, difficulty, rule) = (session.mode(), session.difficulty(), session.rule());

        for event in events {
            self.feedback.dispatch(rule, event);
            if let SessionEvent::Completed { stars } = event {
                self.progress.record_completion(mode, difficulty, *stars);
            }
        }
    }

    fn sync_feedback(&mut self) {
        let record = self.progress.record();
        self.feedback.set_enabled(record.sound_enabled, record.voice_enabled);
    }
}

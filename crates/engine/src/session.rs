//! Session: the round engine wired to its collaborators.
//!
//! Every call into the engine runs to completion, then the queued core events
//! are routed (sound cues to audio, game-over records to the store) and the
//! fresh snapshot is handed to the renderer. Collaborator failures are logged
//! and never reach the game state.

use tracing::{debug, info, warn};

use crate::audio::AudioSink;
use crate::core::{ConfigError, CoreEvent, GameConfig, GameSnapshot, GameState};
use crate::render::RenderSink;
use crate::store::HighScoreStore;
use crate::types::{GameAction, GamePhase};

pub struct Session<R, A, S> {
    state: GameState,
    snapshot: GameSnapshot,
    events: Vec<CoreEvent>,
    render: R,
    audio: A,
    store: S,
}

impl<R, A, S> Session<R, A, S>
where
    R: RenderSink,
    A: AudioSink,
    S: HighScoreStore,
{
    /// Validate the rules, read the stored high score and draw the menu.
    pub fn new(
        config: GameConfig,
        seed: u32,
        render: R,
        audio: A,
        mut store: S,
    ) -> Result<Self, ConfigError> {
        let mut state = GameState::with_config(config, seed)?;

        let high_score = match store.load() {
            Ok(score) => score,
            Err(err) => {
                warn!(error = %err, "failed to load high score, starting from 0");
                0
            }
        };

        state.set_high_score(high_score);
        info!(seed, high_score, "session created");

        let mut session = Self {
            state,
            snapshot: GameSnapshot::default(),
            events: Vec::with_capacity(16),
            render,
            audio,
            store,
        };
        session.publish();
        Ok(session)
    }

    /// Apply one input action. Returns whether the engine accepted it.
    pub fn apply(&mut self, action: GameAction) -> bool {
        let accepted = self.state.apply_action(action);
        debug!(action = action.as_str(), accepted, "action");
        self.dispatch();
        if accepted {
            self.publish();
        }
        accepted
    }

    /// Advance time. Returns whether gameplay state changed.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        let changed = self.state.tick(elapsed_ms);
        self.dispatch();
        // The countdown moves on every tick while playing.
        if changed || self.state.phase() == GamePhase::Playing {
            self.publish();
        }
        changed
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Snapshot last handed to the renderer
    pub fn snapshot(&self) -> &GameSnapshot {
        &self.snapshot
    }

    pub fn high_score(&self) -> u32 {
        self.state.high_score()
    }

    pub fn renderer(&self) -> &R {
        &self.render
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.render
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Redraw without any state change (e.g. after a terminal resize).
    pub fn redraw(&mut self) {
        self.publish();
    }

    fn dispatch(&mut self) {
        self.events.extend(self.state.drain_events());

        for event in self.events.drain(..) {
            match event {
                CoreEvent::Sound(cue) => self.audio.play(cue),
                CoreEvent::OrderDisplayed => {
                    debug!(
                        round = self.state.round_id(),
                        len = self.state.order().len(),
                        time_limit_ms = self.state.time_limit_ms(),
                        "order displayed"
                    );
                }
                CoreEvent::ProgressDisplayed => {}
                CoreEvent::LivesChanged { lives } => debug!(lives, "lives changed"),
                CoreEvent::ScoreChanged { score, level } => debug!(score, level, "score changed"),
                CoreEvent::GameOver {
                    score,
                    new_high_score,
                } => {
                    info!(score, new_high_score, "game over");
                    if new_high_score {
                        if let Err(err) = self.store.save(score) {
                            warn!(score, error = %err, "failed to save high score");
                        }
                    }
                }
            }
        }
    }

    fn publish(&mut self) {
        self.state.snapshot_into(&mut self.snapshot);
        if let Err(err) = self.render.render(&self.snapshot) {
            warn!(error = %err, "render failed");
        }
    }
}

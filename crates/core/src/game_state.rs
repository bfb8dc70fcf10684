//! Game state module - the round engine
//!
//! This module owns the whole round state: the current order, the player's
//! progress, score, lives, level, and the countdown. It is driven by two inputs
//! (submitted actions and countdown expiry, polled from [`GameState::tick`]) and
//! queues [`CoreEvent`]s for the collaborators that render, play sounds and
//! persist the high score.

use crate::config::{ConfigError, GameConfig};
use crate::difficulty::{level_for_score, time_limit_for_level};
use crate::event::CoreEvent;
use crate::order::{Order, OrderGenerator};
use crate::snapshot::GameSnapshot;
use crate::timer::{Countdown, TimerId};
use crate::types::*;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    orders: OrderGenerator,
    phase: GamePhase,
    order: Order,
    progress: Order,
    score: u32,
    /// Best score seen so far (seeded from the persistence collaborator).
    high_score: u32,
    /// Whether the last finished run beat `high_score`.
    new_high_score: bool,
    lives: u8,
    level: u32,
    time_limit_ms: u32,
    countdown: Countdown,
    /// Engine clock, advanced only by `tick`.
    clock_ms: u64,
    /// Pending delay before the next order after a completed one.
    intermission_ms: Option<u32>,
    error_flash_ms: u32,
    /// Monotonic episode id (increments on every start/restart).
    episode_id: u32,
    /// Monotonic id of the current order within the episode.
    round_id: u32,
    orders_completed: u32,
    events: Vec<CoreEvent>,
}

impl GameState {
    /// Create a new game in the menu phase with default rules
    pub fn new(seed: u32) -> Self {
        Self::from_valid_config(GameConfig::default(), seed)
    }

    /// Create a new game in the menu phase.
    ///
    /// Rejects rules that [`GameConfig::validate`] rejects.
    pub fn with_config(config: GameConfig, seed: u32) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid_config(config, seed))
    }

    fn from_valid_config(config: GameConfig, seed: u32) -> Self {
        let time_limit_ms = config.default_time_limit_ms;
        let lives = config.initial_lives;
        Self {
            config,
            orders: OrderGenerator::new(seed),
            phase: GamePhase::Menu,
            order: Order::new(),
            progress: Order::new(),
            score: 0,
            high_score: 0,
            new_high_score: false,
            lives,
            level: 1,
            time_limit_ms,
            countdown: Countdown::new(),
            clock_ms: 0,
            intermission_ms: None,
            error_flash_ms: 0,
            episode_id: 0,
            round_id: 0,
            orders_completed: 0,
            events: Vec::with_capacity(16),
        }
    }

    /// Seed the high score the next game-over is recorded against
    pub fn set_high_score(&mut self, high_score: u32) {
        self.high_score = high_score;
    }

    /// Start a run from the menu or the game-over screen.
    ///
    /// Ignored while a run is already in progress.
    pub fn start(&mut self) -> bool {
        if self.phase == GamePhase::Playing {
            return false;
        }
        self.restart();
        true
    }

    /// Reset the run and generate the first order
    pub fn restart(&mut self) {
        self.countdown.cancel();
        self.phase = GamePhase::Playing;
        self.score = 0;
        self.lives = self.config.initial_lives;
        self.level = 1;
        self.time_limit_ms = self.config.default_time_limit_ms;
        self.order.clear();
        self.progress.clear();
        self.intermission_ms = None;
        self.error_flash_ms = 0;
        self.new_high_score = false;
        self.round_id = 0;
        self.orders_completed = 0;
        self.episode_id = self.episode_id.wrapping_add(1);

        self.events.push(CoreEvent::LivesChanged { lives: self.lives });
        self.events.push(CoreEvent::ScoreChanged {
            score: self.score,
            level: self.level,
        });
        self.generate_new_order();
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn order(&self) -> &[ActionKind] {
        &self.order
    }

    pub fn progress(&self) -> &[ActionKind] {
        &self.progress
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn lives(&self) -> u8 {
        self.lives
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn time_limit_ms(&self) -> u32 {
        self.time_limit_ms
    }

    /// Time left on the countdown (0 when no countdown is running)
    pub fn time_left_ms(&self) -> u32 {
        self.countdown.remaining_ms(self.clock_ms)
    }

    /// Handle of the pending countdown, if any
    pub fn timer(&self) -> Option<TimerId> {
        self.countdown.current()
    }

    pub fn in_intermission(&self) -> bool {
        self.intermission_ms.is_some()
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn round_id(&self) -> u32 {
        self.round_id
    }

    pub fn orders_completed(&self) -> u32 {
        self.orders_completed
    }

    /// Take every event queued since the last drain.
    pub fn drain_events(&mut self) -> std::vec::Drain<'_, CoreEvent> {
        self.events.drain(..)
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.phase = self.phase;
        out.order.clone_from(&self.order);
        out.progress.clone_from(&self.progress);
        out.score = self.score;
        out.high_score = self.high_score;
        out.new_high_score = self.new_high_score;
        out.lives = self.lives;
        out.max_lives = self.config.initial_lives;
        out.level = self.level;
        out.time_limit_ms = self.time_limit_ms;
        out.time_left_ms = self.time_left_ms();
        out.episode_id = self.episode_id;
        out.round_id = self.round_id;
        out.orders_completed = self.orders_completed;
        out.error_flash = self.error_flash_ms > 0;
        out.intermission = self.intermission_ms.is_some();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Replace the current order and restart the countdown
    pub fn generate_new_order(&mut self) {
        self.countdown.cancel();
        self.intermission_ms = None;

        self.orders
            .generate_into(&self.config, self.level, &mut self.order);
        self.progress.clear();
        self.time_limit_ms = time_limit_for_level(&self.config, self.level);
        self.round_id = self.round_id.wrapping_add(1);

        self.events.push(CoreEvent::OrderDisplayed);
        self.events.push(CoreEvent::ProgressDisplayed);
        self.countdown.schedule(self.clock_ms, self.time_limit_ms);
    }

    /// Submit the next step of the current order.
    ///
    /// Returns `false` when the submission was ignored (not playing, or the
    /// completed order is waiting to be replaced).
    pub fn submit(&mut self, action: ActionKind) -> bool {
        if !self.phase.accepts_input() || self.lives == 0 || self.intermission_ms.is_some() {
            return false;
        }

        let Some(&expected) = self.order.get(self.progress.len()) else {
            return false;
        };

        if action != expected {
            self.fail_round();
            if self.lives > 0 {
                self.events.push(CoreEvent::ProgressDisplayed);
            }
            return true;
        }

        self.progress.push(action);
        self.events.push(CoreEvent::ProgressDisplayed);

        if self.progress.len() < self.order.len() {
            self.events.push(CoreEvent::Sound(SoundCue::Correct));
            return true;
        }

        self.events.push(CoreEvent::Sound(SoundCue::Complete));
        self.orders_completed = self.orders_completed.wrapping_add(1);
        self.add_score(self.config.points_per_order);
        self.countdown.cancel();

        if self.config.completion_delay_ms == 0 {
            self.generate_new_order();
        } else {
            self.intermission_ms = Some(self.config.completion_delay_ms);
        }
        true
    }

    /// Handle expiry of the countdown identified by `id`.
    ///
    /// Stale ids (from a countdown that was replaced or cancelled) and expiries
    /// after the run ended are ignored.
    pub fn on_timeout(&mut self, id: TimerId) -> bool {
        if !self.phase.accepts_input() || self.lives == 0 {
            return false;
        }
        if !self.countdown.fire(id) {
            return false;
        }

        self.fail_round();
        if self.lives > 0 {
            self.generate_new_order();
        }
        true
    }

    /// Advance the engine clock.
    ///
    /// Finishes a pending intermission and delivers countdown expiry. Returns
    /// whether gameplay state changed.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if !self.phase.accepts_input() {
            return false;
        }

        self.clock_ms = self.clock_ms.saturating_add(elapsed_ms as u64);

        if self.error_flash_ms > 0 {
            self.error_flash_ms = self.error_flash_ms.saturating_sub(elapsed_ms);
        }

        if let Some(remaining) = self.intermission_ms {
            let remaining = remaining.saturating_sub(elapsed_ms);
            if remaining == 0 {
                self.generate_new_order();
                return true;
            }
            self.intermission_ms = Some(remaining);
            return false;
        }

        match self.countdown.expired(self.clock_ms) {
            Some(id) => self.on_timeout(id),
            None => false,
        }
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Submit(kind) => self.submit(kind),
            GameAction::Start => self.start(),
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }

    /// Shared failure path for a wrong step or a timeout.
    fn fail_round(&mut self) {
        self.events.push(CoreEvent::Sound(SoundCue::Error));
        self.lives = self.lives.saturating_sub(1);
        self.events.push(CoreEvent::LivesChanged { lives: self.lives });
        self.progress.clear();
        self.error_flash_ms = self.config.error_flash_ms;

        if self.lives == 0 {
            self.finish_game();
        }
    }

    fn finish_game(&mut self) {
        self.countdown.cancel();
        self.intermission_ms = None;
        self.phase = GamePhase::GameOver;

        self.new_high_score = self.score > self.high_score;
        if self.new_high_score {
            self.high_score = self.score;
        }
        self.events.push(CoreEvent::GameOver {
            score: self.score,
            new_high_score: self.new_high_score,
        });
    }

    fn add_score(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
        let level = level_for_score(&self.config, self.score);
        if level != self.level {
            self.level = level;
            self.time_limit_ms = time_limit_for_level(&self.config, level);
        }
        self.events.push(CoreEvent::ScoreChanged {
            score: self.score,
            level: self.level,
        });
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}

//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the round engine: order generation, step-by-step
//! validation of player input, score/lives/level tracking and the countdown.
//! It has **zero dependencies** on UI, audio, storage, or I/O, making it:
//!
//! - **Deterministic**: Same seed and the same inputs produce the same game
//! - **Testable**: Time only advances through [`GameState::tick`]
//! - **Portable**: Can run behind a terminal, a GUI, or a headless driver
//!
//! # Module Structure
//!
//! - [`config`]: Rule constants passed at construction
//! - [`difficulty`]: Level, time limit and order length as functions of score
//! - [`event`]: Notifications queued for the render/audio/persistence layers
//! - [`game_state`]: The round engine state machine
//! - [`order`]: Inline order storage and the random order generator
//! - [`rng`]: Small deterministic LCG
//! - [`snapshot`]: Plain copy of the state for rendering
//! - [`timer`]: Cancellable single-shot countdown
//!
//! # Game Rules
//!
//! - **Orders**: 2-6 random steps; the longest order at level `n` is `min(2 + n, 6)`
//!   steps, and each order is that long or one step shorter
//! - **Scoring**: 10 points per completed order
//! - **Level**: `score / 50 + 1`, never stored independently of score
//! - **Countdown**: `max(2500, 5000 - (level - 1) * 500)` ms per order
//! - **Lives**: 3; a wrong step or an expired countdown costs one
//! - **Game over**: at zero lives; input and timers are ignored until restart
//!
//! # Example
//!
//! ```
//! use fast_kitchen_core::{GameConfig, GameState};
//! use fast_kitchen_types::{GameAction, GamePhase};
//!
//! // Create and start a game
//! let mut game = GameState::with_config(GameConfig::instant(), 12345).unwrap();
//! game.apply_action(GameAction::Start);
//!
//! // Reproduce the order
//! let order = game.order().to_vec();
//! for step in order {
//!     game.apply_action(GameAction::Submit(step));
//! }
//!
//! assert_eq!(game.score(), 10);
//! assert_eq!(game.phase(), GamePhase::Playing);
//! ```
//!
//! # Timing
//!
//! Call [`GameState::tick`](game_state::GameState::tick) every frame with the
//! elapsed time. The countdown is polled there; nothing runs in the background.

pub mod config;
pub mod difficulty;
pub mod event;
pub mod game_state;
pub mod order;
pub mod rng;
pub mod snapshot;
pub mod timer;

pub use fast_kitchen_types as types;

// Re-export commonly used types for convenience
pub use config::{ConfigError, GameConfig};
pub use difficulty::{level_for_score, order_length_bounds, time_limit_for_level};
pub use event::CoreEvent;
pub use game_state::GameState;
pub use order::{Order, OrderGenerator};
pub use rng::SimpleRng;
pub use snapshot::GameSnapshot;
pub use timer::{Countdown, TimerId};

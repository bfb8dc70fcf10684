//! Core types module - shared data structures and rule constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (round engine, terminal rendering, input mapping).
//!
//! # Orders
//!
//! An order is a short sequence of kitchen actions the player must reproduce:
//!
//! - **Actions**: `Chop`, `Fry`, `Boil`
//! - **Length**: 2 to 6 steps, growing with level
//!
//! # Rule Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `DEFAULT_TIME_LIMIT_MS` | 5000 | Countdown at level 1 |
//! | `MIN_TIME_LIMIT_MS` | 2500 | Countdown floor |
//! | `TIME_LIMIT_STEP_MS` | 500 | Countdown shrink per level |
//! | `COMPLETION_DELAY_MS` | 500 | Pause between a finished order and the next |
//! | `ERROR_FLASH_MS` | 500 | Highlight duration after a mistake |
//!
//! # Difficulty by Level
//!
//! Level is derived from score: `level = score / 50 + 1`.
//!
//! | Level | Order length | Time limit |
//! |-------|--------------|------------|
//! | 1 | 2-3 | 5000ms |
//! | 2 | 3-4 | 4500ms |
//! | 3 | 4-5 | 4000ms |
//! | 4 | 5-6 | 3500ms |
//! | 5 | 5-6 | 3000ms |
//! | 6+ | 5-6 | 2500ms |
//!
//! # Examples
//!
//! ```
//! use fast_kitchen_types::{ActionKind, GameAction, SoundCue};
//!
//! // Parse from string (case-insensitive)
//! let parsed = ActionKind::from_str("Chop").unwrap();
//! assert_eq!(parsed, ActionKind::Chop);
//!
//! // Submit it as a game action
//! let action = GameAction::Submit(parsed);
//! assert_eq!(action.as_str(), "chop");
//!
//! // Sound cue names match the audio asset keys
//! assert_eq!(SoundCue::Complete.as_str(), "complete");
//! ```

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Lives at the start of a game
pub const MAX_LIVES: u8 = 3;

/// Countdown for an order at level 1
pub const DEFAULT_TIME_LIMIT_MS: u32 = 5000;

/// The countdown never drops below this
pub const MIN_TIME_LIMIT_MS: u32 = 2500;

/// Countdown reduction per level above 1
pub const TIME_LIMIT_STEP_MS: u32 = 500;

/// Points awarded for a completed order
pub const POINTS_PER_ORDER: u32 = 10;

/// Score needed to advance one level
pub const POINTS_PER_LEVEL: u32 = 50;

/// Order length offset: the longest order at level `n` has `BASE_ORDER_LEN + n` steps
pub const BASE_ORDER_LEN: usize = 2;

/// Shortest order ever generated
pub const MIN_ORDER_LEN: usize = 2;

/// Longest order ever generated (also the inline capacity of an order)
pub const MAX_ORDER_LEN: usize = 6;

/// Pause between a completed order and the next one
pub const COMPLETION_DELAY_MS: u32 = 500;

/// How long a mistake or timeout stays highlighted
pub const ERROR_FLASH_MS: u32 = 500;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_defaults() {
        assert_eq!(MAX_LIVES, 3);
        assert_eq!(DEFAULT_TIME_LIMIT_MS, 5000);
        assert_eq!(MIN_TIME_LIMIT_MS, 2500);
        assert_eq!(TIME_LIMIT_STEP_MS, 500);
        assert_eq!(POINTS_PER_ORDER, 10);
        assert_eq!(POINTS_PER_LEVEL, 50);
        assert!(MIN_ORDER_LEN <= BASE_ORDER_LEN + 1);
        assert_eq!(MAX_ORDER_LEN, 6);
    }

    #[test]
    fn action_round_trips_through_names() {
        for kind in ActionKind::ALL {
            assert_eq!(ActionKind::from_str(kind.as_str()), Some(kind));
        }
        assert_eq!(ActionKind::from_str("BOIL"), Some(ActionKind::Boil));
        assert_eq!(ActionKind::from_str("bake"), None);
    }

    #[test]
    fn game_action_parsing() {
        assert_eq!(
            GameAction::from_str("fry"),
            Some(GameAction::Submit(ActionKind::Fry))
        );
        assert_eq!(GameAction::from_str("Start"), Some(GameAction::Start));
        assert_eq!(GameAction::from_str("restart"), Some(GameAction::Restart));
        assert_eq!(GameAction::from_str("pause"), None);
    }

    #[test]
    fn phase_accepts_input_only_while_playing() {
        assert!(!GamePhase::Menu.accepts_input());
        assert!(GamePhase::Playing.accepts_input());
        assert!(!GamePhase::GameOver.accepts_input());
    }
}

/// The kitchen actions an order is built from
///
/// Identity only: glyphs and labels belong to the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Chop,
    Fry,
    Boil,
}

impl ActionKind {
    /// Every action, in display order
    pub const ALL: [ActionKind; 3] = [ActionKind::Chop, ActionKind::Fry, ActionKind::Boil];

    /// Parse action kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use fast_kitchen_types::ActionKind;
    ///
    /// assert_eq!(ActionKind::from_str("fry"), Some(ActionKind::Fry));
    /// assert_eq!(ActionKind::from_str("BOIL"), Some(ActionKind::Boil));
    /// assert_eq!(ActionKind::from_str("bake"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "chop" => Some(ActionKind::Chop),
            "fry" => Some(ActionKind::Fry),
            "boil" => Some(ActionKind::Boil),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::Chop => "chop",
            ActionKind::Fry => "fry",
            ActionKind::Boil => "boil",
        }
    }
}

/// Named sound triggers emitted by the round engine
///
/// The audio layer maps each cue to an asset. Cues are fire-and-forget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    /// A step matched but the order is not finished yet
    Correct,
    /// Wrong step or the countdown ran out
    Error,
    /// The whole order was reproduced
    Complete,
}

impl SoundCue {
    pub fn as_str(&self) -> &'static str {
        match self {
            SoundCue::Correct => "correct",
            SoundCue::Error => "error",
            SoundCue::Complete => "complete",
        }
    }
}

/// Top-level game phase
///
/// The cycle goes: Menu → Playing → GameOver → Playing → ...
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GamePhase {
    /// Title screen, waiting for a start signal
    #[default]
    Menu,
    /// A run is in progress
    Playing,
    /// Lives ran out; waiting for a restart
    GameOver,
}

impl GamePhase {
    /// Whether submissions and timer events are processed in this phase
    pub fn accepts_input(&self) -> bool {
        matches!(self, GamePhase::Playing)
    }
}

/// Game actions that can be applied to modify game state
///
/// These come from the input collaborator; the core makes no assumption
/// about the device that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Submit the next step of the current order
    Submit(ActionKind),
    /// Leave the menu (or the game-over screen) and begin a run
    Start,
    /// Reset the run at any time
    Restart,
}

impl GameAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use fast_kitchen_types::{ActionKind, GameAction};
    ///
    /// assert_eq!(GameAction::from_str("chop"), Some(GameAction::Submit(ActionKind::Chop)));
    /// assert_eq!(GameAction::from_str("restart"), Some(GameAction::Restart));
    /// assert_eq!(GameAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "start" => Some(GameAction::Start),
            "restart" => Some(GameAction::Restart),
            other => ActionKind::from_str(other).map(GameAction::Submit),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Submit(kind) => kind.as_str(),
            GameAction::Start => "start",
            GameAction::Restart => "restart",
        }
    }
}

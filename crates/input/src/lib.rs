//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`]s. The round engine
//! makes no assumption about the device, so any other front end only needs its
//! own mapping into the same actions.

pub mod map;

pub use fast_kitchen_types as types;

pub use map::{handle_key_event, should_quit};

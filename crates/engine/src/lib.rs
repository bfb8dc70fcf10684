//! Session layer - the round engine wired to its collaborators
//!
//! The core crate is pure: it queues [`CoreEvent`](fast_kitchen_core::CoreEvent)s
//! and never performs I/O. This crate owns a
//! [`GameState`](fast_kitchen_core::GameState) together with three
//! collaborators and routes those events to them:
//!
//! - [`RenderSink`]: receives a snapshot after every state change
//! - [`AudioSink`]: receives the named sound cues (`correct`, `error`, `complete`)
//! - [`HighScoreStore`]: read once at startup, written at game over on a new record
//!
//! Collaborator failures are logged through `tracing` and never propagate into
//! the game state.
//!
//! # Implementations
//!
//! - [`JsonFileStore`] / [`MemoryStore`] for persistence
//! - [`BellAudio`] (terminal bell) / [`SilentAudio`] for audio
//! - [`NullRender`] for headless runs; the terminal renderer lives in the binary

pub mod audio;
pub mod render;
pub mod session;
pub mod store;

pub use fast_kitchen_core as core;
pub use fast_kitchen_types as types;

pub use audio::{bell_count, AudioSink, BellAudio, SilentAudio};
pub use render::{NullRender, RenderSink};
pub use session::Session;
pub use store::{HighScoreStore, JsonFileStore, MemoryStore, StoreError};

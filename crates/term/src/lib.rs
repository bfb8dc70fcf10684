//! Terminal rendering for the kitchen game.
//!
//! A small game-oriented layer: [`GameView`] turns a snapshot into a
//! [`FrameBuffer`] (pure, testable), and [`TerminalRenderer`] flushes frames
//! to the terminal with crossterm, diffing against the previous frame.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fast_kitchen_core as core;
pub use fast_kitchen_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{action_glyph, action_label, AnchorY, GameView, Viewport, CARD_H, CARD_W};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};

//! Fast Kitchen (workspace facade crate).
//!
//! Re-exports the workspace crates under short names and hosts the pieces
//! only the binary needs: environment config and log setup.

pub use fast_kitchen_core as core;
pub use fast_kitchen_engine as engine;
pub use fast_kitchen_input as input;
pub use fast_kitchen_term as term;
pub use fast_kitchen_types as types;

pub mod config;
pub mod logging;

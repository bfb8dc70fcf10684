//! Diagnostics via `tracing`.
//!
//! The game owns the terminal, so logs never go to stdout or stderr. They are
//! written to the file named by `FAST_KITCHEN_LOG_PATH`; with no path set,
//! no subscriber is installed and every event is dropped.
//!
//! # Example
//! ```bash
//! FAST_KITCHEN_LOG_PATH=/tmp/fast-kitchen.log RUST_LOG=fast_kitchen_engine=debug fast-kitchen
//! ```

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install a file-backed subscriber. Reads `RUST_LOG`; defaults to `info`.
pub fn init(log_path: Option<&Path>) -> Result<()> {
    let Some(path) = log_path else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true),
        )
        .try_init()
        .context("tracing subscriber already installed")?;

    tracing::info!(path = %path.display(), "logging initialized");
    Ok(())
}

//! Runtime settings for the terminal binary, read from the environment.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::core::GameConfig;

pub const DEFAULT_HIGH_SCORE_PATH: &str = "fast-kitchen-highscore.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub seed: u32,
    pub high_score_path: PathBuf,
    pub log_path: Option<PathBuf>,
    pub muted: bool,
    pub completion_delay_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: time_seed(),
            high_score_path: PathBuf::from(DEFAULT_HIGH_SCORE_PATH),
            log_path: None,
            muted: false,
            completion_delay_ms: crate::types::COMPLETION_DELAY_MS,
        }
    }
}

impl AppConfig {
    /// Create from `FAST_KITCHEN_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable variable source.
    ///
    /// Unparsable values fall back to their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let seed = var("FAST_KITCHEN_SEED")
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(time_seed);

        let high_score_path = var("FAST_KITCHEN_HIGH_SCORE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_HIGH_SCORE_PATH));

        let log_path = var("FAST_KITCHEN_LOG_PATH").map(PathBuf::from);

        let muted = var("FAST_KITCHEN_MUTE").is_some_and(|s| parse_flag(&s));

        let completion_delay_ms = var("FAST_KITCHEN_COMPLETION_DELAY_MS")
            .and_then(|s| s.parse().ok())
            .unwrap_or(crate::types::COMPLETION_DELAY_MS);

        Self {
            seed,
            high_score_path,
            log_path,
            muted,
            completion_delay_ms,
        }
    }

    /// Rules for this run: defaults plus the configured intermission.
    pub fn game_config(&self) -> GameConfig {
        GameConfig::default().with_completion_delay_ms(self.completion_delay_ms)
    }
}

fn parse_flag(s: &str) -> bool {
    matches!(
        s.to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// Seed derived from wall-clock time (fallback 1 if the clock is before 1970).
fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| (d.as_secs() as u32) ^ d.subsec_nanos())
        .unwrap_or(1)
}

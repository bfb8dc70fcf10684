//! Rule configuration passed to the round engine at construction.
//!
//! Every tunable in the game lives here instead of in globals. The shape of the
//! difficulty curve is fixed; only its constants are configurable.

use thiserror::Error;

use crate::types::{
    ActionKind, BASE_ORDER_LEN, COMPLETION_DELAY_MS, DEFAULT_TIME_LIMIT_MS, ERROR_FLASH_MS,
    MAX_LIVES, MAX_ORDER_LEN, MIN_ORDER_LEN, MIN_TIME_LIMIT_MS, POINTS_PER_LEVEL,
    POINTS_PER_ORDER, TIME_LIMIT_STEP_MS,
};

/// Errors returned by [`GameConfig::validate`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("initial lives must be at least 1")]
    NoLives,
    #[error("initial lives {lives} exceeds the maximum of {max}")]
    TooManyLives { lives: u8, max: u8 },
    #[error("action set is empty")]
    EmptyActionSet,
    #[error("points per level must be non-zero")]
    ZeroPointsPerLevel,
    #[error("time limit floor must be non-zero")]
    ZeroTimeLimit,
    #[error("time limit floor {min_ms}ms exceeds default {default_ms}ms")]
    TimeLimitFloorAboveDefault { min_ms: u32, default_ms: u32 },
    #[error("order length bounds {min}..={max} are invalid (capacity {capacity})")]
    InvalidOrderLength {
        min: usize,
        max: usize,
        capacity: usize,
    },
}

/// Game rules
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Lives at the start of a run
    pub initial_lives: u8,
    /// Countdown at level 1
    pub default_time_limit_ms: u32,
    /// Countdown floor
    pub min_time_limit_ms: u32,
    /// Countdown reduction per level above 1
    pub time_limit_step_ms: u32,
    pub points_per_order: u32,
    pub points_per_level: u32,
    /// Longest order at level `n` is `base_order_len + n`
    pub base_order_len: usize,
    pub min_order_len: usize,
    pub max_order_len: usize,
    /// Pause after a completed order before the next one appears (0 = immediate)
    pub completion_delay_ms: u32,
    /// Highlight duration after a mistake or timeout
    pub error_flash_ms: u32,
    /// Actions orders are drawn from
    pub actions: Vec<ActionKind>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            initial_lives: MAX_LIVES,
            default_time_limit_ms: DEFAULT_TIME_LIMIT_MS,
            min_time_limit_ms: MIN_TIME_LIMIT_MS,
            time_limit_step_ms: TIME_LIMIT_STEP_MS,
            points_per_order: POINTS_PER_ORDER,
            points_per_level: POINTS_PER_LEVEL,
            base_order_len: BASE_ORDER_LEN,
            min_order_len: MIN_ORDER_LEN,
            max_order_len: MAX_ORDER_LEN,
            completion_delay_ms: COMPLETION_DELAY_MS,
            error_flash_ms: ERROR_FLASH_MS,
            actions: ActionKind::ALL.to_vec(),
        }
    }
}

impl GameConfig {
    /// Default rules with every cosmetic delay set to zero.
    ///
    /// Completed orders are replaced immediately, which is what headless
    /// drivers and tests want.
    pub fn instant() -> Self {
        Self {
            completion_delay_ms: 0,
            error_flash_ms: 0,
            ..Self::default()
        }
    }

    pub fn with_completion_delay_ms(mut self, delay_ms: u32) -> Self {
        self.completion_delay_ms = delay_ms;
        self
    }

    /// Check the rules are internally consistent
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_lives == 0 {
            return Err(ConfigError::NoLives);
        }
        if self.initial_lives > MAX_LIVES {
            return Err(ConfigError::TooManyLives {
                lives: self.initial_lives,
                max: MAX_LIVES,
            });
        }
        if self.actions.is_empty() {
            return Err(ConfigError::EmptyActionSet);
        }
        if self.points_per_level == 0 {
            return Err(ConfigError::ZeroPointsPerLevel);
        }
        if self.min_time_limit_ms == 0 {
            return Err(ConfigError::ZeroTimeLimit);
        }
        if self.min_time_limit_ms > self.default_time_limit_ms {
            return Err(ConfigError::TimeLimitFloorAboveDefault {
                min_ms: self.min_time_limit_ms,
                default_ms: self.default_time_limit_ms,
            });
        }
        // Level 1 must already be able to produce a `min_order_len` order.
        let shortest_max = self.base_order_len + 1;
        if self.min_order_len == 0
            || self.min_order_len > self.max_order_len
            || self.max_order_len > MAX_ORDER_LEN
            || shortest_max < self.min_order_len
        {
            return Err(ConfigError::InvalidOrderLength {
                min: self.min_order_len,
                max: self.max_order_len,
                capacity: MAX_ORDER_LEN,
            });
        }
        Ok(())
    }
}

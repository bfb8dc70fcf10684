//! Difficulty module - the single scaling rule of the game
//!
//! Level is derived from score and never stored independently:
//! - `level = score / points_per_level + 1`
//! - `time_limit = max(min_time_limit, default_time_limit - (level - 1) * step)`
//! - longest order at a level is `min(base_order_len + level, max_order_len)`,
//!   and a generated order is either that long or one step shorter.

use crate::config::GameConfig;

/// Level for a cumulative score (1-based)
pub fn level_for_score(config: &GameConfig, score: u32) -> u32 {
    score / config.points_per_level + 1
}

/// Countdown length for a level
pub fn time_limit_for_level(config: &GameConfig, level: u32) -> u32 {
    let reduction = level
        .saturating_sub(1)
        .saturating_mul(config.time_limit_step_ms);
    config
        .default_time_limit_ms
        .saturating_sub(reduction)
        .max(config.min_time_limit_ms)
}

/// Inclusive `(shortest, longest)` order length for a level
pub fn order_length_bounds(config: &GameConfig, level: u32) -> (usize, usize) {
    let longest = config
        .base_order_len
        .saturating_add(level as usize)
        .min(config.max_order_len);
    let shortest = longest.saturating_sub(1).max(config.min_order_len);
    (shortest, longest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_calculation() {
        let config = GameConfig::default();
        assert_eq!(level_for_score(&config, 0), 1);
        assert_eq!(level_for_score(&config, 49), 1);
        assert_eq!(level_for_score(&config, 50), 2);
        assert_eq!(level_for_score(&config, 55), 2);
        assert_eq!(level_for_score(&config, 120), 3);
    }

    #[test]
    fn test_time_limits() {
        let config = GameConfig::default();
        assert_eq!(time_limit_for_level(&config, 1), 5000);
        assert_eq!(time_limit_for_level(&config, 2), 4500);
        assert_eq!(time_limit_for_level(&config, 5), 3000);
        assert_eq!(time_limit_for_level(&config, 6), 2500);
        assert_eq!(time_limit_for_level(&config, 7), 2500);
        assert_eq!(time_limit_for_level(&config, u32::MAX), 2500);
    }

    #[test]
    fn test_order_length_bounds() {
        let config = GameConfig::default();
        assert_eq!(order_length_bounds(&config, 1), (2, 3));
        assert_eq!(order_length_bounds(&config, 2), (3, 4));
        assert_eq!(order_length_bounds(&config, 3), (4, 5));
        assert_eq!(order_length_bounds(&config, 4), (5, 6));
        assert_eq!(order_length_bounds(&config, 40), (5, 6));
    }

    #[test]
    fn test_time_limit_never_increases_with_level() {
        let config = GameConfig::default();
        let mut last = u32::MAX;
        for level in 1..20 {
            let limit = time_limit_for_level(&config, level);
            assert!(limit <= last);
            last = limit;
        }
    }
}

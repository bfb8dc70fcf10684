use crate::order::Order;
use crate::types::GamePhase;

/// Everything the render collaborator needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct GameSnapshot {
    pub phase: GamePhase,
    pub order: Order,
    pub progress: Order,
    pub score: u32,
    pub high_score: u32,
    /// The run that just ended beat the previous high score
    pub new_high_score: bool,
    pub lives: u8,
    pub max_lives: u8,
    pub level: u32,
    pub time_limit_ms: u32,
    pub time_left_ms: u32,
    pub episode_id: u32,
    pub round_id: u32,
    pub orders_completed: u32,
    /// A mistake or timeout is being highlighted
    pub error_flash: bool,
    /// The order is complete and the next one has not been generated yet
    pub intermission: bool,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Fraction of the countdown remaining, in `[0.0, 1.0]`
    pub fn timer_fraction(&self) -> f32 {
        if self.time_limit_ms == 0 {
            return 0.0;
        }
        (self.time_left_ms as f32 / self.time_limit_ms as f32).clamp(0.0, 1.0)
    }

    pub fn playable(&self) -> bool {
        self.phase.accepts_input() && !self.intermission
    }
}

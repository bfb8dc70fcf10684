//! Order generation.
//!
//! An order is stored inline with a fixed capacity, so generating and checking
//! orders never touches the heap.

use arrayvec::ArrayVec;

use crate::config::GameConfig;
use crate::difficulty::order_length_bounds;
use crate::rng::SimpleRng;
use crate::types::{ActionKind, MAX_ORDER_LEN};

/// A sequence of kitchen steps (used for both the order and the player's progress)
pub type Order = ArrayVec<ActionKind, MAX_ORDER_LEN>;

/// Draws random orders from the configured action set
#[derive(Debug, Clone)]
pub struct OrderGenerator {
    rng: SimpleRng,
}

impl OrderGenerator {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// Generate an order for `level`.
    ///
    /// The length is the level's longest order or one step shorter, picked
    /// with equal odds; steps are drawn independently (repeats allowed).
    pub fn generate(&mut self, config: &GameConfig, level: u32) -> Order {
        let mut order = Order::new();
        self.generate_into(config, level, &mut order);
        order
    }

    /// Same as [`generate`](Self::generate) but reuses `out`.
    pub fn generate_into(&mut self, config: &GameConfig, level: u32, out: &mut Order) {
        out.clear();
        let (shortest, longest) = order_length_bounds(config, level);
        let len = if longest > shortest {
            shortest + self.rng.next_range(2) as usize
        } else {
            longest
        };

        let actions = &config.actions;
        for _ in 0..len.min(MAX_ORDER_LEN) {
            let i = self.rng.next_range(actions.len() as u32) as usize;
            if let Some(&action) = actions.get(i) {
                out.push(action);
            }
        }
    }
}

impl Default for OrderGenerator {
    fn default() -> Self {
        Self::new(1)
    }
}

use itertools::Itertools;
use log::trace;
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

use super::{Bot, BotView};
use crate::arena::types::Direction;

/// Wanders around at random, only stepping somewhere unsafe when it has no
/// other choice.
#[derive(Debug, Clone)]
pub struct RandomSafe {
    rng: StdRng,
}

impl RandomSafe {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Bot for RandomSafe {
    fn name(&self) -> &str {
        "RandomBot"
    }

    fn decide_move(&mut self, view: &BotView) -> Option<Direction> {
        let safe: Vec<_> =
            view.safe_moves().into_iter().map(|(d, _)| d).collect();
        trace!("{} can go {}", view.snake.name, safe.iter().join(", "));
        if let Some(direction) = safe.choose(&mut self.rng) {
            return Some(*direction);
        }

        Some(
            view.candidates()
                .choose(&mut self.rng)
                .copied()
                .unwrap_or(view.snake.direction),
        )
    }
}

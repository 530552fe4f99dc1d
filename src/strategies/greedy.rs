use log::trace;

use super::{Bot, BotView};
use crate::arena::{types::Direction, utils::euclidean_distance};

/// Picks the food closest to its head and takes whichever safe step gets
/// nearest to it.
#[derive(Debug, Clone, Copy, Default)]
pub struct Greedy;

impl Greedy {
    const FOOD_WEIGHT: f64 = 1000.0;
}

impl Bot for Greedy {
    fn name(&self) -> &str {
        "GreedyBot"
    }

    fn decide_move(&mut self, view: &BotView) -> Option<Direction> {
        let me = view.snake;
        let current = me.direction;

        let head = me.head()?;
        let Some(target) = view
            .food
            .positions()
            .iter()
            .copied()
            .min_by(|a, b| {
                euclidean_distance(head, *a)
                    .total_cmp(&euclidean_distance(head, *b))
            })
        else {
            return Some(current);
        };

        let mut best: Option<(Direction, f64)> = None;
        for (direction, cell) in view.safe_moves() {
            let score =
                Self::FOOD_WEIGHT / (euclidean_distance(cell, target) + 1.0);
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((direction, score));
            }
        }

        trace!("{} chasing food at {target}, best {best:?}", me.name);

        Some(best.map_or(current, |(direction, _)| direction))
    }
}

use log::trace;

use super::{score_factors::ScoreFactors, Bot, BotView};
use crate::arena::{
    types::Direction,
    utils::{euclidean_distance, nearest_distance},
};

/// Heads for food but backs off from an opponent that could win a
/// head-on collision.
#[derive(Debug, Clone, Copy, Default)]
pub struct Strategic;

impl Bot for Strategic {
    fn name(&self) -> &str {
        "StrategicBot"
    }

    fn decide_move(&mut self, view: &BotView) -> Option<Direction> {
        let me = view.snake;

        let threat = view
            .opponent
            .filter(|other| other.alive && other.len() >= me.len())
            .and_then(|other| other.head());

        let mut best: Option<(Direction, f64)> = None;

        for (direction, cell) in view.safe_moves() {
            let factors = ScoreFactors {
                closest_food:     nearest_distance(cell, view.food.positions()),
                threatening_head: threat
                    .map(|head| euclidean_distance(cell, head)),
            };
            let score = factors.calculate();
            trace!("{} considers {direction}: {factors}", me.name);

            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((direction, score));
            }
        }

        Some(best.map_or(me.direction, |(direction, _)| direction))
    }
}

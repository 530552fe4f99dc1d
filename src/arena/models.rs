use serde::Serialize;

use crate::arena::{
    snake::{Snake, SnakeID},
    types::{Coord, Direction},
};

/// Read-only per-frame view of one snake, for whoever draws the game.
#[derive(Serialize, Debug, Clone)]
pub struct SnakeView {
    pub id:                  SnakeID,
    pub name:                String,
    pub segments:            Vec<Coord>,
    pub direction:           Direction,
    pub alive:               bool,
    pub score:               u32,
    pub shield_timer:        f64,
    pub shield_flash:        f64,
    pub traps_hit:           u32,
    pub collisions:          u32,
    /// Seconds left before a self-overlap turns fatal.
    pub self_collision_left: Option<f64>,
}

impl SnakeView {
    #[must_use]
    pub fn new(snake: &Snake, now: f64, grace: f64) -> Self {
        Self {
            id:                  snake.id,
            name:                snake.name.clone(),
            segments:            snake.body.iter().copied().collect(),
            direction:           snake.direction,
            alive:               snake.alive,
            score:               snake.score,
            shield_timer:        snake.shield_timer,
            shield_flash:        snake.shield_flash,
            traps_hit:           snake.traps_hit,
            collisions:          snake.collisions,
            self_collision_left: snake
                .self_collision_since
                .map(|since| (grace - (now - since)).max(0.0)),
        }
    }
}

use std::collections::VecDeque;

use super::{Bot, BotView};
use crate::arena::types::Direction;

/// Plays back a queue of moves, one per tick. Stands in for a human at the
/// keyboard: once the queue runs dry it stops steering.
#[derive(Debug, Clone, Default)]
pub struct Scripted {
    name:  String,
    moves: VecDeque<Direction>,
}

impl Scripted {
    pub fn new(
        name: impl Into<String>,
        moves: impl IntoIterator<Item = Direction>,
    ) -> Self {
        Self {
            name:  name.into(),
            moves: moves.into_iter().collect(),
        }
    }

    pub fn push(&mut self, direction: Direction) {
        self.moves.push_back(direction);
    }
}

impl Bot for Scripted {
    fn name(&self) -> &str {
        &self.name
    }

    fn decide_move(&mut self, _view: &BotView) -> Option<Direction> {
        self.moves.pop_front()
    }
}

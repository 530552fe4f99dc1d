use serde::Serialize;

use crate::arena::types::Coord;

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Board {
    pub width:  i64,
    pub height: i64,
}

impl Board {
    #[must_use]
    pub const fn new(width: i64, height: i64) -> Self {
        Self { width, height }
    }

    /// Anything outside this is wall.
    #[must_use]
    pub const fn contains(&self, coord: Coord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && coord.x < self.width
            && coord.y < self.height
    }
}

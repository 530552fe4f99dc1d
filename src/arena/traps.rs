use rand::Rng;

use crate::arena::{
    board::Board,
    food::{interior, sample_free_cell},
    types::Coord,
};

/// Traps on the board. A trap fires once and disappears.
#[derive(Clone, Debug, Default)]
pub struct Traps {
    positions: Vec<Coord>,
}

impl Traps {
    #[must_use]
    pub fn new(positions: Vec<Coord>) -> Self {
        let mut traps = Self::default();
        for position in positions {
            if !traps.contains(position) {
                traps.positions.push(position);
            }
        }
        traps
    }

    /// Places up to `count` traps away from snakes and food.
    pub fn spawn_multiple(
        rng: &mut impl Rng,
        board: Board,
        count: usize,
        snake_segments: &[Coord],
        food: &[Coord],
    ) -> Self {
        let (min, max) = interior(board);
        let mut traps = Self::default();
        for _ in 0..count {
            if let Some(position) = sample_free_cell(rng, min, max, |c| {
                snake_segments.contains(&c)
                    || food.contains(&c)
                    || traps.contains(c)
            }) {
                traps.positions.push(position);
            }
        }
        traps
    }

    #[must_use]
    pub fn contains(&self, position: Coord) -> bool {
        self.positions.contains(&position)
    }

    /// Removes the trap under `head`, reporting whether there was one.
    pub fn trigger(&mut self, head: Coord) -> bool {
        if let Some(index) = self.positions.iter().position(|p| *p == head) {
            self.positions.remove(index);
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn positions(&self) -> &[Coord] {
        &self.positions
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn traps_never_land_on_food_or_snakes() {
        let mut rng = StdRng::seed_from_u64(11);
        let board = Board::new(12, 12);
        let snakes = [Coord::new(2, 2), Coord::new(9, 9)];
        let food: Vec<_> = (1..11).map(|x| Coord::new(x, 5)).collect();
        let traps = Traps::spawn_multiple(&mut rng, board, 20, &snakes, &food);
        assert!(!traps.is_empty());
        for trap in traps.positions() {
            assert!(!snakes.contains(trap));
            assert!(!food.contains(trap));
        }
    }

    #[test]
    fn trigger_fires_once() {
        let mut traps = Traps::new(vec![Coord::new(3, 3), Coord::new(3, 3)]);
        assert_eq!(traps.len(), 1);
        assert!(traps.trigger(Coord::new(3, 3)));
        assert!(!traps.trigger(Coord::new(3, 3)));
        assert!(traps.is_empty());
    }
}

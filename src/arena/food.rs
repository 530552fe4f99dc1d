use rand::Rng;

use crate::arena::{board::Board, types::Coord};

/// How many random cells we try before giving up on a spawn.
pub const SPAWN_ATTEMPTS: usize = 100;

/// Picks a random cell in `min..=max` that `taken` doesn't claim, giving up
/// after [`SPAWN_ATTEMPTS`] tries.
pub fn sample_free_cell(
    rng: &mut impl Rng,
    min: Coord,
    max: Coord,
    mut taken: impl FnMut(Coord) -> bool,
) -> Option<Coord> {
    if min.x > max.x || min.y > max.y {
        return None;
    }
    (0..SPAWN_ATTEMPTS)
        .map(|_| {
            Coord::new(
                rng.gen_range(min.x..=max.x),
                rng.gen_range(min.y..=max.y),
            )
        })
        .find(|coord| !taken(*coord))
}

/// Interior bounds used for random placement.
#[must_use]
pub const fn interior(board: Board) -> (Coord, Coord) {
    (
        Coord::new(1, 1),
        Coord::new(board.width - 2, board.height - 2),
    )
}

/// Food on the board. Each cell is eaten exactly once.
#[derive(Clone, Debug, Default)]
pub struct Food {
    positions: Vec<Coord>,
}

impl Food {
    #[must_use]
    pub fn new(positions: Vec<Coord>) -> Self {
        let mut food = Self::default();
        for position in positions {
            food.insert(position);
        }
        food
    }

    /// Drops one piece of food somewhere in `min..=max` that is neither in
    /// `occupied` nor already food. Returns where it landed.
    pub fn spawn_within(
        &mut self,
        rng: &mut impl Rng,
        min: Coord,
        max: Coord,
        occupied: &[Coord],
    ) -> Option<Coord> {
        let cell = sample_free_cell(rng, min, max, |c| {
            occupied.contains(&c) || self.contains(c)
        })?;
        self.positions.push(cell);
        Some(cell)
    }

    /// Adds a cell. Returns false if it already held food.
    pub fn insert(&mut self, position: Coord) -> bool {
        if self.contains(position) {
            return false;
        }
        self.positions.push(position);
        true
    }

    #[must_use]
    pub fn contains(&self, position: Coord) -> bool {
        self.positions.contains(&position)
    }

    /// Eats whatever is at `head`.
    pub fn consume(&mut self, head: Coord) -> bool {
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

use rand::Rng;

use crate::arena::{
    config::GameConfig,
    food::{interior, Food},
    types::Coord,
};

/// Where the two snakes start and where the food goes for one round.
#[derive(Clone, Debug)]
pub struct Layout {
    pub spawns: [Coord; 2],
    pub food:   Food,
}

impl Layout {
    /// Snake one starts in the left third, snake two in the right third.
    /// Food is spread evenly over the four quadrants with a few extra cells
    /// anywhere, never on a spawn point.
    pub fn generate(rng: &mut impl Rng, config: &GameConfig) -> Self {
        let board = config.board();
        let (min, max) = interior(board);
        let third = board.width / 3;

        let left = Coord::new(
            rng.gen_range(1..=third.max(1)),
            rng.gen_range(min.y..=max.y.max(min.y)),
        );
        let right = Coord::new(
            rng.gen_range((2 * board.width / 3).min(max.x)..=max.x.max(1)),
            rng.gen_range(min.y..=max.y.max(min.y)),
        );
        let spawns = [left, right];

        let half_w = board.width / 2;
        let half_h = board.height / 2;
        let quadrants = [
            (Coord::new(1, 1), Coord::new(half_w, half_h)),
            (Coord::new(half_w, 1), Coord::new(max.x, half_h)),
            (Coord::new(1, half_h), Coord::new(half_w, max.y)),
            (Coord::new(half_w, half_h), max),
        ];

        let mut food = Food::default();
        for (lo, hi) in quadrants {
            for _ in 0..config.apples_per_quadrant {
                food.spawn_within(rng, lo, hi, &spawns);
            }
        }
        for _ in 0..config.scattered_food {
            food.spawn_within(rng, min, max, &spawns);
        }

        Self { spawns, food }
    }

    /// Same layout with the snakes trading sides.
    #[must_use]
    pub fn swapped(mut self) -> Self {
        self.spawns.swap(0, 1);
        self
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn spawns_sit_in_opposite_thirds() {
        let config = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            let layout = Layout::generate(&mut rng, &config);
            let [left, right] = layout.spawns;
            assert!(left.x >= 1 && left.x <= config.grid_width / 3);
            assert!(right.x >= 2 * config.grid_width / 3);
            assert!(right.x <= config.grid_width - 2);
        }
    }

    #[test]
    fn food_fills_every_quadrant_and_avoids_spawns() {
        let config = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(5);
        let layout = Layout::generate(&mut rng, &config);
        let expected = config.apples_per_quadrant * 4 + config.scattered_food;
        assert_eq!(layout.food.len(), expected);
        for cell in layout.food.positions() {
            assert!(!layout.spawns.contains(cell));
        }
    }

    #[test]
    fn swapping_trades_spawn_points() {
        let config = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(9);
        let layout = Layout::generate(&mut rng, &config);
        let [a, b] = layout.spawns;
        assert_eq!(layout.swapped().spawns, [b, a]);
    }
}

mod greedy;
mod random_safe;
pub mod score_factors;
mod scripted;
mod strategic;

use std::{fmt, str::FromStr};

pub use greedy::Greedy;
pub use random_safe::RandomSafe;
pub use scripted::Scripted;
pub use strategic::Strategic;

use crate::arena::{
    board::Board,
    food::Food,
    snake::Snake,
    traps::Traps,
    types::{Coord, Direction},
};

/// Everything a bot may look at when picking a move. Borrowed straight from
/// the round, so bots can't touch the arena.
#[derive(Clone, Copy, Debug)]
pub struct BotView<'a> {
    pub board:    Board,
    pub snake:    &'a Snake,
    pub food:     &'a Food,
    pub traps:    &'a Traps,
    pub opponent: Option<&'a Snake>,
}

impl BotView<'_> {
    /// The cardinal directions minus the one that folds back onto the neck.
    #[must_use]
    pub fn candidates(&self) -> Vec<Direction> {
        let reverse = self.snake.direction.opposite();
        Direction::iter().copied().filter(|d| *d != reverse).collect()
    }

    /// A cell is safe if it's on the board and free of bodies and traps.
    #[must_use]
    pub fn is_safe(&self, cell: Coord) -> bool {
        self.board.contains(cell)
            && !self.snake.occupies(cell)
            && !self.opponent.is_some_and(|other| other.occupies(cell))
            && !self.traps.contains(cell)
    }

    /// Candidates paired with the cell they lead to, keeping only the safe
    /// ones.
    #[must_use]
    pub fn safe_moves(&self) -> Vec<(Direction, Coord)> {
        let Some(head) = self.snake.head() else {
            return Vec::new();
        };
        self.candidates()
            .into_iter()
            .map(|d| (d, head.neighbour(d)))
            .filter(|(_, cell)| self.is_safe(*cell))
            .collect()
    }
}

/// A snake's brain. Called once per tick for each live snake.
pub trait Bot {
    fn name(&self) -> &str;

    /// Returns `None` when the bot has nothing to say, in which case the
    /// snake carries on in its current direction.
    fn decide_move(&mut self, view: &BotView) -> Option<Direction>;
}

/// The bots that ship with the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotKind {
    Random,
    Greedy,
    Strategic,
}

impl BotKind {
    pub const ALL: [Self; 3] = [Self::Random, Self::Greedy, Self::Strategic];

    /// `seed` only matters for bots that roll dice.
    #[must_use]
    pub fn build(self, seed: u64) -> Box<dyn Bot> {
        match self {
            Self::Random => Box::new(RandomSafe::new(seed)),
            Self::Greedy => Box::new(Greedy),
            Self::Strategic => Box::new(Strategic),
        }
    }
}

impl FromStr for BotKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "random" | "randombot" => Ok(Self::Random),
            "greedy" | "greedybot" => Ok(Self::Greedy),
            "strategic" | "strategicbot" => Ok(Self::Strategic),
            other => Err(format!(
                "unknown bot {other:?}, expected one of random, greedy, \
                 strategic"
            )),
        }
    }
}

impl fmt::Display for BotKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Random => "random",
                Self::Greedy => "greedy",
                Self::Strategic => "strategic",
            }
        )
    }
}


#[cfg(test)]
mod tests {
    use super::{testing::Scene, *};

    #[test]
    fn reversal_is_never_a_candidate() {
        let scene = Scene::new(Coord::new(5, 5));
        assert_eq!(
            scene.view().candidates(),
            vec![Direction::Right, Direction::Up, Direction::Down]
        );
    }

    #[test]
    fn safety_covers_walls_bodies_and_traps() {
        let mut scene = Scene::new(Coord::new(0, 5));
        scene.traps = Traps::new(vec![Coord::new(0, 4)]);
        let mut opponent = Snake::new(1, "them", Coord::new(1, 5), 10.0);
        opponent.body.push_back(Coord::new(2, 5));
        scene.opponent = Some(opponent);

        let view = scene.view();
        assert!(!view.is_safe(Coord::new(-1, 5)));
        assert!(!view.is_safe(Coord::new(0, 5)));
        assert!(!view.is_safe(Coord::new(1, 5)));
        assert!(!view.is_safe(Coord::new(0, 4)));
        assert!(view.is_safe(Coord::new(0, 6)));
        assert_eq!(
            view.safe_moves(),
            vec![(Direction::Down, Coord::new(0, 6))]
        );
    }

    #[test]
    fn bot_names_parse() {
        assert_eq!("Greedy".parse(), Ok(BotKind::Greedy));
        assert_eq!("strategicbot".parse(), Ok(BotKind::Strategic));
        assert!("minimax".parse::<BotKind>().is_err());
        for kind in BotKind::ALL {
            assert_eq!(kind.to_string().parse(), Ok(kind));
        }
    }
}

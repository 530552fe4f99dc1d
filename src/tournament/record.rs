use std::fmt;

use serde::Serialize;

use crate::arena::snake::SnakeID;

/// How one round ended. Written once by the round engine and never changed.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct RoundRecord {
    /// One-based round number.
    pub round:          u32,
    /// Seat of the winner, `None` for a draw.
    pub winner:         Option<SnakeID>,
    pub scores:         [u32; 2],
    pub traps_hit:      [u32; 2],
    pub collisions:     [u32; 2],
    pub time_remaining: f64,
}

impl RoundRecord {
    #[must_use]
    pub const fn is_draw(&self) -> bool {
        self.winner.is_none()
    }

    /// Both snakes finished with nothing.
    #[must_use]
    pub const fn is_crash(&self) -> bool {
        self.scores[0] == 0 && self.scores[1] == 0
    }
}

impl fmt::Display for RoundRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.winner {
            Some(seat) => write!(f, "snake {} wins", seat + 1)?,
            None => write!(f, "draw")?,
        }
        write!(
            f,
            " ({} - {}, traps {}/{}, collisions {}/{})",
            self.scores[0],
            self.scores[1],
            self.traps_hit[0],
            self.traps_hit[1],
            self.collisions[0],
            self.collisions[1]
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draws_and_crashes() {
        let record = RoundRecord {
            round:          1,
            winner:         None,
            scores:         [0, 0],
            traps_hit:      [1, 0],
            collisions:     [0, 2],
            time_remaining: 0.0,
        };
        assert!(record.is_draw());
        assert!(record.is_crash());
        assert_eq!(
            record.to_string(),
            "draw (0 - 0, traps 1/0, collisions 0/2)"
        );

        let won = RoundRecord {
            winner: Some(1),
            scores: [0, 3],
            ..record
        };
        assert!(!won.is_draw());
        assert!(!won.is_crash());
    }
}

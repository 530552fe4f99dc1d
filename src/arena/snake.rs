use std::collections::VecDeque;

use crate::arena::{
    board::Board,
    types::{Coord, Direction},
};

pub type SnakeID = usize;

/// What a call to [`Snake::advance`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Not enough time has built up for a grid step.
    Waiting,
    Moved,
    /// The head would have left the board. The snake is now dead.
    HitWall,
}

#[derive(Clone, Debug)]
pub struct Snake {
    pub id:                     SnakeID,
    pub name:                   String,
    pub body:                   VecDeque<Coord>,
    pub direction:              Direction,
    pub next_direction:         Direction,
    pub speed:                  f64,
    pub move_timer:             f64,
    pub grow:                   u32,
    pub score:                  u32,
    pub alive:                  bool,
    pub death_time:             Option<f64>,
    pub shield_timer:           f64,
    pub shield_flash:           f64,
    pub traps_hit:              u32,
    pub collisions:             u32,
    pub consecutive_collisions: u32,
    pub last_collision_time:    Option<f64>,
    /// Round time at which the head started overlapping the body.
    pub self_collision_since:   Option<f64>,
}

impl Snake {
    pub fn new(
        id: SnakeID,
        name: impl Into<String>,
        spawn: Coord,
        speed: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            body: VecDeque::from([spawn]),
            direction: Direction::Right,
            next_direction: Direction::Right,
            speed,
            move_timer: 0.0,
            grow: 0,
            score: 0,
            alive: true,
            death_time: None,
            shield_timer: 0.0,
            shield_flash: 0.0,
            traps_hit: 0,
            collisions: 0,
            consecutive_collisions: 0,
            last_collision_time: None,
            self_collision_since: None,
        }
    }

    #[must_use]
    pub fn head(&self) -> Option<Coord> {
        self.body.front().copied()
    }

    /// Every segment except the head.
    pub fn tail_segments(&self) -> impl Iterator<Item = &Coord> {
        self.body.iter().skip(1)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    #[must_use]
    pub fn occupies(&self, coord: Coord) -> bool {
        self.body.contains(&coord)
    }

    #[must_use]
    pub fn is_shielded(&self) -> bool {
        self.shield_timer > 0.0
    }

    /// Buffers a turn for the next grid step. Turning back onto the neck is
    /// ignored; only the direction already committed counts for that check.
    pub fn change_direction(&mut self, direction: Direction) {
        if direction != self.direction.opposite() {
            self.next_direction = direction;
        }
    }

    /// Runs one simulation tick of `dt` seconds. `now` is the round clock
    /// after this tick and stamps a wall death.
    pub fn advance(&mut self, dt: f64, now: f64, board: Board) -> Step {
        if !self.alive {
            return Step::Waiting;
        }

        if self.shield_timer > 0.0 {
            self.shield_timer = (self.shield_timer - dt).max(0.0);
            self.shield_flash = (self.shield_flash + dt * 10.0) % 1.0;
        }

        self.move_timer += dt;
        if self.move_timer < 1.0 / self.speed {
            return Step::Waiting;
        }
        self.move_timer = 0.0;
        self.direction = self.next_direction;

        let Some(head) = self.head() else {
            return Step::Waiting;
        };
        let new_head = head.neighbour(self.direction);

        if !board.contains(new_head) {
            self.kill(now);
            return Step::HitWall;
        }

        self.body.push_front(new_head);
        if self.grow > 0 {
            self.grow -= 1;
        } else {
            self.body.pop_back();
        }

        Step::Moved
    }

    /// True while the head shares a cell with another segment.
    #[must_use]
    pub fn overlaps_self(&self) -> bool {
        self.head()
            .is_some_and(|head| self.tail_segments().any(|c| *c == head))
    }

    /// Takes `count` segments off the tail. Pending growth is used up before
    /// the body shrinks, and an empty body just stays empty.
    pub fn remove_segments(&mut self, count: u32) {
        for _ in 0..count {
            if self.body.is_empty() {
                break;
            }
            if self.grow > 0 {
                self.grow -= 1;
            } else {
                self.body.pop_back();
            }
        }
    }

    pub fn deduct_score(&mut self, penalty: u32) {
        self.score = self.score.saturating_sub(penalty);
    }

    pub fn grant_shield(&mut self, duration: f64) {
        self.shield_timer = duration;
    }

    pub fn kill(&mut self, now: f64) {
        if self.alive {
            self.alive = false;
            self.death_time = Some(now);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOARD: Board = Board::new(10, 10);

    fn snake_at(x: i64, y: i64) -> Snake {
        Snake::new(0, "test", Coord::new(x, y), 10.0)
    }

    #[test]
    fn waits_for_its_step_interval() {
        let mut snake = snake_at(5, 5);
        assert_eq!(snake.advance(0.05, 0.05, BOARD), Step::Waiting);
        assert_eq!(snake.head(), Some(Coord::new(5, 5)));
        assert_eq!(snake.advance(0.05, 0.1, BOARD), Step::Moved);
        assert_eq!(snake.head(), Some(Coord::new(6, 5)));
        assert_eq!(snake.len(), 1);
    }

    #[test]
    fn reversal_is_never_buffered() {
        let mut snake = snake_at(5, 5);
        snake.change_direction(Direction::Left);
        assert_eq!(snake.next_direction, Direction::Right);
        snake.change_direction(Direction::Up);
        assert_eq!(snake.next_direction, Direction::Up);
        // checked against the committed direction, not the buffered one
        snake.change_direction(Direction::Down);
        assert_eq!(snake.next_direction, Direction::Down);
    }

    #[test]
    fn growth_keeps_the_tail() {
        let mut snake = snake_at(2, 2);
        snake.grow = 2;
        for tick in 1..=3 {
            snake.advance(0.1, f64::from(tick) * 0.1, BOARD);
        }
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.grow, 0);
        assert_eq!(
            snake.body,
            VecDeque::from([
                Coord::new(5, 2),
                Coord::new(4, 2),
                Coord::new(3, 2)
            ])
        );
    }

    #[test]
    fn leaving_the_board_is_fatal() {
        let mut snake = snake_at(9, 0);
        snake.score = 4;
        assert_eq!(snake.advance(0.1, 1.5, BOARD), Step::HitWall);
        assert!(!snake.alive);
        assert_eq!(snake.death_time, Some(1.5));
        assert_eq!(snake.score, 4);
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.advance(0.1, 1.6, BOARD), Step::Waiting);
        assert_eq!(snake.death_time, Some(1.5));
    }

    #[test]
    fn shield_counts_down_to_zero() {
        let mut snake = snake_at(1, 1);
        snake.grant_shield(0.15);
        snake.advance(0.1, 0.1, BOARD);
        assert!(snake.is_shielded());
        snake.advance(0.1, 0.2, BOARD);
        assert!(!snake.is_shielded());
        assert!(snake.shield_timer.abs() < f64::EPSILON);
    }

    #[test]
    fn removal_spends_growth_first() {
        let mut snake = snake_at(1, 1);
        snake.body.extend([Coord::new(1, 2), Coord::new(1, 3)]);
        snake.grow = 1;
        snake.remove_segments(2);
        assert_eq!(snake.grow, 0);
        assert_eq!(snake.len(), 2);
        snake.remove_segments(10);
        assert!(snake.is_empty());
    }

    #[test]
    fn score_never_goes_negative() {
        let mut snake = snake_at(1, 1);
        snake.score = 1;
        snake.deduct_score(5);
        assert_eq!(snake.score, 0);
    }

    #[test]
    fn overlap_is_detected() {
        let mut snake = snake_at(1, 1);
        assert!(!snake.overlaps_self());
        snake.body.extend([Coord::new(1, 2), Coord::new(1, 1)]);
        assert!(snake.overlaps_self());
    }
}

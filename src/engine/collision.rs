use log::debug;

use crate::arena::{config::GameConfig, snake::Snake};

/// How two snakes ran into each other on this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Contact {
    pub head_to_head:     bool,
    /// The first snake's head is inside the second one's body.
    pub first_into_body:  bool,
    /// The second snake's head is inside the first one's body.
    pub second_into_body: bool,
}

impl Contact {
    #[must_use]
    pub fn between(first: &Snake, second: &Snake) -> Self {
        let (Some(head1), Some(head2)) = (first.head(), second.head()) else {
            return Self::default();
        };
        Self {
            head_to_head:     head1 == head2,
            first_into_body:  second.tail_segments().any(|c| *c == head1),
            second_into_body: first.tail_segments().any(|c| *c == head2),
        }
    }

    #[must_use]
    pub const fn any(&self) -> bool {
        self.head_to_head || self.first_into_body || self.second_into_body
    }
}

/// What the inter-snake rules did on this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// No contact, or it was skipped because someone is dead or shielded.
    Nothing,
    /// Too many collisions in a row: both scores were wiped.
    Stalemate,
    /// The shorter snake (by index) paid the full penalty.
    Penalised(usize),
    /// Equal lengths: both paid half.
    Split,
}

/// Tracks a head resting on its own body and kills the snake once that has
/// lasted for the configured grace period. Returns true if it died.
pub fn update_self_collision(
    snake: &mut Snake,
    now: f64,
    config: &GameConfig,
) -> bool {
    if !snake.alive {
        return false;
    }

    if !snake.overlaps_self() {
        snake.self_collision_since = None;
        return false;
    }

    let since = *snake.self_collision_since.get_or_insert(now);
    if now - since >= config.self_collision_grace {
        debug!("{} sat on its own body for too long", snake.name);
        snake.kill(now);
        snake.score = 0;
        return true;
    }
    false
}

/// Bumps the short-window repeat counter for `snake`.
fn register_collision(snake: &mut Snake, now: f64, window: f64) {
    snake.consecutive_collisions = match snake.last_collision_time {
        Some(last) if now - last <= window => snake.consecutive_collisions + 1,
        _ => 1,
    };
    snake.last_collision_time = Some(now);
}

/// Segment and score loss for losing a collision.
pub fn apply_collision_penalty(
    snake: &mut Snake,
    penalty: u32,
    config: &GameConfig,
) {
    snake.remove_segments(penalty);
    snake.grant_shield(config.shield_duration);
    snake.deduct_score(penalty);
    snake.collisions += 1;
    debug!(
        "{} lost a collision: -{penalty}, now length {} score {}",
        snake.name,
        snake.len(),
        snake.score
    );
}

/// Applies the snake-on-snake rules. Only live, unshielded pairs are
/// considered. The shorter snake pays; equal lengths split the bill.
pub fn resolve_inter_snake(
    first: &mut Snake,
    second: &mut Snake,
    now: f64,
    config: &GameConfig,
) -> Resolution {
    if !first.alive || !second.alive {
        return Resolution::Nothing;
    }
    if first.is_shielded() || second.is_shielded() {
        return Resolution::Nothing;
    }

    let contact = Contact::between(first, second);
    if !contact.any() {
        return Resolution::Nothing;
    }
    debug!(
        "{} and {} collided at {now:.2}s: {contact:?}",
        first.name, second.name
    );

    register_collision(first, now, config.collision_window);
    register_collision(second, now, config.collision_window);

    if first.consecutive_collisions >= config.stalemate_collisions
        || second.consecutive_collisions >= config.stalemate_collisions
    {
        debug!("repeated collisions, wiping both scores");
        first.score = 0;
        second.score = 0;
        return Resolution::Stalemate;
    }

    let penalty = config.collision_segment_penalty;
    match first.len().cmp(&second.len()) {
        std::cmp::Ordering::Less => {
            apply_collision_penalty(first, penalty, config);
            Resolution::Penalised(first.id)
        }
        std::cmp::Ordering::Greater => {
            apply_collision_penalty(second, penalty, config);
            Resolution::Penalised(second.id)
        }
        std::cmp::Ordering::Equal => {
            apply_collision_penalty(first, penalty / 2, config);
            apply_collision_penalty(second, penalty / 2, config);
            Resolution::Split
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arena::types::Coord;

    fn line(id: usize, cells: &[(i64, i64)]) -> Snake {
        let mut snake = Snake::new(id, format!("s{id}"), Coord::new(0, 0), 10.0);
        snake.body = cells.iter().map(|&(x, y)| Coord::new(x, y)).collect();
        snake
    }

    #[test]
    fn contact_kinds() {
        let a = line(0, &[(5, 5), (4, 5)]);
        let b = line(1, &[(5, 5), (6, 5)]);
        let contact = Contact::between(&a, &b);
        assert!(contact.head_to_head);
        assert!(!contact.first_into_body && !contact.second_into_body);

        let c = line(1, &[(5, 6), (5, 5), (5, 4)]);
        let d = line(0, &[(5, 5), (4, 5)]);
        let contact = Contact::between(&d, &c);
        assert!(contact.first_into_body);
        assert!(!contact.head_to_head);
    }

    #[test]
    fn shorter_snake_pays() {
        let config = GameConfig::default();
        let mut short = line(0, &[(5, 5), (4, 5), (3, 5)]);
        let mut long = line(1, &[(6, 4), (6, 5), (5, 5), (5, 6), (5, 7)]);
        short.score = 5;
        long.score = 5;
        let result = resolve_inter_snake(&mut short, &mut long, 1.0, &config);
        assert_eq!(result, Resolution::Penalised(0));
        assert_eq!(short.len(), 1);
        assert_eq!(short.score, 3);
        assert_eq!(short.collisions, 1);
        assert!(short.is_shielded());
        assert_eq!(long.len(), 5);
        assert_eq!(long.score, 5);
        assert!(!long.is_shielded());
    }

    #[test]
    fn shields_suppress_everything() {
        let config = GameConfig::default();
        let mut a = line(0, &[(5, 5)]);
        let mut b = line(1, &[(5, 5)]);
        a.score = 3;
        b.grant_shield(1.0);
        let result = resolve_inter_snake(&mut a, &mut b, 0.5, &config);
        assert_eq!(result, Resolution::Nothing);
        assert_eq!(a.score, 3);
        assert_eq!(a.consecutive_collisions, 0);
    }

    #[test]
    fn repeat_counter_resets_outside_the_window() {
        let mut snake = line(0, &[(1, 1)]);
        register_collision(&mut snake, 1.0, 1.0);
        register_collision(&mut snake, 1.5, 1.0);
        assert_eq!(snake.consecutive_collisions, 2);
        register_collision(&mut snake, 3.0, 1.0);
        assert_eq!(snake.consecutive_collisions, 1);
    }

    #[test]
    fn grace_period_then_death() {
        let config = GameConfig::default();
        let mut snake = line(0, &[(2, 2), (2, 3), (2, 2)]);
        snake.score = 7;
        assert!(!update_self_collision(&mut snake, 10.0, &config));
        assert_eq!(snake.self_collision_since, Some(10.0));
        assert!(!update_self_collision(&mut snake, 12.9, &config));
        assert!(update_self_collision(&mut snake, 13.0, &config));
        assert!(!snake.alive);
        assert_eq!(snake.score, 0);
        assert_eq!(snake.death_time, Some(13.0));
    }

    #[test]
    fn clearing_the_overlap_cancels_the_timer() {
        let config = GameConfig::default();
        let mut snake = line(0, &[(2, 2), (2, 3), (2, 2)]);
        update_self_collision(&mut snake, 1.0, &config);
        snake.body.pop_back();
        assert!(!update_self_collision(&mut snake, 2.0, &config));
        assert_eq!(snake.self_collision_since, None);
        assert!(snake.alive);
    }
}

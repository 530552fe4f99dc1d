use log::{debug, info, trace};
use rand::Rng;

use super::collision::{resolve_inter_snake, update_self_collision};
use crate::{
    arena::{
        config::{GameConfig, SelfCollisionPolicy},
        food::Food,
        layout::Layout,
        snake::{Snake, SnakeID, Step},
        traps::Traps,
    },
    strategies::{Bot, BotView},
    tournament::record::RoundRecord,
};

/// One round's arena. Owns both snakes, the food and the traps, and is the
/// only thing that mutates them.
#[derive(Clone, Debug)]
pub struct Round {
    /// Zero-based position of this round in the tournament.
    pub index:   u32,
    pub snakes:  [Snake; 2],
    pub food:    Food,
    pub traps:   Traps,
    /// Seconds of simulated time since the round started.
    pub elapsed: f64,
}

impl Round {
    /// Lays out a fresh arena. Every round after the first puts the snakes
    /// on swapped sides.
    pub fn new(
        index: u32,
        names: [&str; 2],
        config: &GameConfig,
        rng: &mut impl Rng,
    ) -> Self {
        let mut layout = Layout::generate(rng, config);
        if index > 0 {
            layout = layout.swapped();
        }

        let [spawn1, spawn2] = layout.spawns;
        let traps = Traps::spawn_multiple(
            rng,
            config.board(),
            config.trap_count,
            &layout.spawns,
            layout.food.positions(),
        );

        info!(
            "round {} laid out: {} food, {} traps, spawns {spawn1} / {spawn2}",
            index + 1,
            layout.food.len(),
            traps.len(),
        );

        Self::from_parts(
            index,
            [
                Snake::new(0, names[0], spawn1, config.snake_speed),
                Snake::new(1, names[1], spawn2, config.snake_speed),
            ],
            layout.food,
            traps,
        )
    }

    /// Builds a round from a hand-made arena.
    #[must_use]
    pub fn from_parts(
        index: u32,
        snakes: [Snake; 2],
        food: Food,
        traps: Traps,
    ) -> Self {
        Self {
            index,
            snakes,
            food,
            traps,
            elapsed: 0.0,
        }
    }

    /// Runs one tick and returns the round's record if it ended on this
    /// tick. The order is fixed: moves, self-collision, food and traps, then
    /// snake-on-snake.
    pub fn tick(
        &mut self,
        dt: f64,
        bots: &mut [Box<dyn Bot>; 2],
        config: &GameConfig,
    ) -> Option<RoundRecord> {
        self.elapsed += dt;
        let now = self.elapsed;

        // step 1 - ask the bots and move
        for (id, bot) in bots.iter_mut().enumerate() {
            self.move_snake(id, bot.as_mut(), dt, config);
        }

        // step 2 - self-collision
        if config.self_collision == SelfCollisionPolicy::Graced {
            for snake in &mut self.snakes {
                update_self_collision(snake, now, config);
            }
        }

        // step 3 - food and traps
        for snake in &mut self.snakes {
            Self::feed(snake, &mut self.food, &mut self.traps, config);
        }

        // step 4 - snake on snake
        let [first, second] = &mut self.snakes;
        resolve_inter_snake(first, second, now, config);

        // step 5 - starved snakes
        for snake in &mut self.snakes {
            if snake.alive && snake.is_empty() {
                debug!("{} has no segments left", snake.name);
                snake.kill(now);
            }
        }

        if self.is_over(config) {
            let record = self.record(config);
            info!(
                "round {} over after {:.2}s: {record}",
                self.index + 1,
                self.elapsed
            );
            Some(record)
        } else {
            None
        }
    }

    fn move_snake(
        &mut self,
        id: SnakeID,
        bot: &mut dyn Bot,
        dt: f64,
        config: &GameConfig,
    ) {
        if !self.snakes[id].alive {
            return;
        }

        let decision = bot.decide_move(&BotView {
            board:    config.board(),
            snake:    &self.snakes[id],
            food:     &self.food,
            traps:    &self.traps,
            opponent: Some(&self.snakes[1 - id]),
        });

        let now = self.elapsed;
        let snake = &mut self.snakes[id];
        trace!("{} wants {decision:?}", snake.name);
        if let Some(direction) = decision {
            snake.change_direction(direction);
        }

        match snake.advance(dt, now, config.board()) {
            Step::HitWall => debug!("{} ran into the wall", snake.name),
            Step::Moved
                if config.self_collision == SelfCollisionPolicy::Immediate
                    && snake.overlaps_self() =>
            {
                debug!("{} bit itself", snake.name);
                snake.kill(now);
                snake.score = 0;
            }
            Step::Moved | Step::Waiting => {}
        }
    }

    fn feed(
        snake: &mut Snake,
        food: &mut Food,
        traps: &mut Traps,
        config: &GameConfig,
    ) {
        if !snake.alive {
            return;
        }
        let Some(head) = snake.head() else {
            return;
        };

        if food.consume(head) {
            snake.grow += config.growth_per_food;
            snake.score += 1;
            trace!("{} ate at {head}", snake.name);
        }

        // a shield carries the snake straight over a trap
        if !snake.is_shielded() && traps.trigger(head) {
            snake.traps_hit += 1;
            snake.deduct_score(config.trap_penalty);
            snake.remove_segments(config.trap_segment_penalty);
            snake.grant_shield(config.shield_duration);
            debug!(
                "{} hit a trap at {head}: score {}, length {}",
                snake.name,
                snake.score,
                snake.len()
            );
        }
    }

    /// Out of time, someone died, or nothing left to eat.
    #[must_use]
    pub fn is_over(&self, config: &GameConfig) -> bool {
        self.elapsed >= config.round_time
            || self.snakes.iter().any(|snake| !snake.alive)
            || self.food.is_empty()
    }

    /// A lone survivor wins outright. Otherwise the higher score takes it
    /// and a tie is a draw.
    #[must_use]
    pub fn winner(&self) -> Option<SnakeID> {
        let [first, second] = &self.snakes;
        match (first.alive, second.alive) {
            (true, false) => Some(first.id),
            (false, true) => Some(second.id),
            _ => match first.score.cmp(&second.score) {
                std::cmp::Ordering::Greater => Some(first.id),
                std::cmp::Ordering::Less => Some(second.id),
                std::cmp::Ordering::Equal => None,
            },
        }
    }

    #[must_use]
    pub fn time_left(&self, config: &GameConfig) -> f64 {
        (config.round_time - self.elapsed).max(0.0)
    }

    #[must_use]
    pub fn record(&self, config: &GameConfig) -> RoundRecord {
        let [first, second] = &self.snakes;
        RoundRecord {
            round:          self.index + 1,
            winner:         self.winner(),
            scores:         [first.score, second.score],
            traps_hit:      [first.traps_hit, second.traps_hit],
            collisions:     [first.collisions, second.collisions],
            time_remaining: self.time_left(config),
        }
    }
}

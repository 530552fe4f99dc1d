use log::info;
use rand::{rngs::StdRng, SeedableRng};
use serde::Serialize;

use super::round::Round;
use crate::{
    arena::{
        board::Board,
        config::GameConfig,
        models::SnakeView,
        snake::SnakeID,
        types::Coord,
    },
    strategies::Bot,
    tournament::{
        record::RoundRecord,
        Tally,
        Tournament,
        TournamentState,
        Verdict,
    },
};

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Start,
    Playing,
    RoundOver,
    GameOver,
}

/// Everything a renderer needs for one frame.
#[derive(Serialize, Debug, Clone)]
pub struct Snapshot {
    pub phase:             Phase,
    pub round:             u32,
    pub max_rounds:        u32,
    pub time_left:         f64,
    pub board:             Board,
    pub snakes:            Vec<SnakeView>,
    pub food:              Vec<Coord>,
    pub traps:             Vec<Coord>,
    pub tallies:           [Tally; 2],
    pub draws:             u32,
    pub last_round_winner: Option<SnakeID>,
    pub tournament:        TournamentState,
    pub verdict:           Option<Verdict>,
}

/// Two bots, one tournament, and the round currently on the board.
pub struct Game {
    config:            GameConfig,
    bots:              [Box<dyn Bot>; 2],
    tournament:        Tournament,
    round:             Round,
    phase:             Phase,
    rng:               StdRng,
    last_round_winner: Option<SnakeID>,
}

impl Game {
    pub fn new(config: GameConfig, bots: [Box<dyn Bot>; 2], seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let names = [bots[0].name().to_owned(), bots[1].name().to_owned()];
        let round = Round::new(
            0,
            [names[0].as_str(), names[1].as_str()],
            &config,
            &mut rng,
        );
        let tournament = Tournament::new(&config, names);
        Self {
            config,
            bots,
            tournament,
            round,
            phase: Phase::Start,
            rng,
            last_round_winner: None,
        }
    }

    fn fresh_round(&mut self, index: u32) -> Round {
        let [a, b] = self.tournament.names();
        let names = [a.as_str(), b.as_str()];
        Round::new(index, names, &self.config, &mut self.rng)
    }

    /// Start → Playing, with a fresh tournament.
    pub fn start(&mut self) {
        if self.phase != Phase::Start {
            return;
        }
        self.tournament =
            Tournament::new(&self.config, self.tournament.names().clone());
        self.tournament.begin();
        self.round = self.fresh_round(0);
        self.last_round_winner = None;
        self.phase = Phase::Playing;
    }

    /// RoundOver → Playing on a freshly laid out arena.
    pub fn next_round(&mut self) {
        if self.phase != Phase::RoundOver {
            return;
        }
        let index = self.tournament.rounds_played();
        self.round = self.fresh_round(index);
        self.phase = Phase::Playing;
    }

    /// Whatever "press a key to continue" would do in the current phase.
    pub fn proceed(&mut self) {
        match self.phase {
            Phase::Start => self.start(),
            Phase::RoundOver => self.next_round(),
            Phase::Playing | Phase::GameOver => {}
        }
    }

    /// Advances the simulation by `dt` seconds. Returns the record of a round
    /// that ended on this tick.
    pub fn tick(&mut self, dt: f64) -> Option<RoundRecord> {
        if self.phase != Phase::Playing {
            return None;
        }

        let record = self.round.tick(dt, &mut self.bots, &self.config)?;
        self.last_round_winner = record.winner;
        self.phase = match self.tournament.record_round(record.clone()) {
            TournamentState::Finished => Phase::GameOver,
            TournamentState::NotStarted | TournamentState::InProgress => {
                Phase::RoundOver
            }
        };
        Some(record)
    }

    /// Plays the whole tournament at a fixed frame time. `dt` must be
    /// positive or rounds never run out of time.
    pub fn run(&mut self, dt: f64) -> &Tournament {
        while self.phase != Phase::GameOver {
            match self.phase {
                Phase::Playing => {
                    self.tick(dt);
                }
                Phase::Start | Phase::RoundOver => self.proceed(),
                Phase::GameOver => {}
            }
        }
        info!("final verdict: {:?}", self.tournament.verdict());
        &self.tournament
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        let now = self.round.elapsed;
        let grace = self.config.self_collision_grace;
        Snapshot {
            phase:             self.phase,
            round:             self.round.index + 1,
            max_rounds:        self.tournament.max_rounds(),
            time_left:         self.round.time_left(&self.config),
            board:             self.config.board(),
            snakes:            self
                .round
                .snakes
                .iter()
                .map(|snake| SnakeView::new(snake, now, grace))
                .collect(),
            food:              self.round.food.positions().to_vec(),
            traps:             self.round.traps.positions().to_vec(),
            tallies:           *self.tournament.tallies(),
            draws:             self.tournament.draws(),
            last_round_winner: self.last_round_winner,
            tournament:        self.tournament.state(),
            verdict:           self.tournament.verdict(),
        }
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub const fn round(&self) -> &Round {
        &self.round
    }

    #[must_use]
    pub const fn tournament(&self) -> &Tournament {
        &self.tournament
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn into_tournament(self) -> Tournament {
        self.tournament
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategies::{Greedy, Scripted, Strategic};

    fn greedy_vs_strategic(seed: u64) -> Game {
        Game::new(
            GameConfig::default(),
            [Box::new(Greedy), Box::new(Strategic)],
            seed,
        )
    }

    #[test]
    fn nothing_moves_before_start() {
        let mut game = greedy_vs_strategic(1);
        let before = game.snapshot();
        assert!(game.tick(0.1).is_none());
        assert_eq!(game.phase(), Phase::Start);
        let after = game.snapshot();
        assert_eq!(after.snakes[0].segments, before.snakes[0].segments);
        assert_eq!(game.tournament().state(), TournamentState::NotStarted);
    }

    #[test]
    fn phases_flow_through_a_tournament() {
        let mut game = greedy_vs_strategic(2);
        game.proceed();
        assert_eq!(game.phase(), Phase::Playing);
        assert_eq!(game.tournament().state(), TournamentState::InProgress);

        let mut record = None;
        while record.is_none() {
            record = game.tick(1.0 / 60.0);
        }
        assert!(matches!(game.phase(), Phase::RoundOver | Phase::GameOver));
        assert_eq!(game.tournament().rounds_played(), 1);

        game.run(1.0 / 60.0);
        assert_eq!(game.phase(), Phase::GameOver);
        assert!(game.tournament().is_finished());
        assert!(game.tournament().rounds_played() <= 3);
        assert!(game.snapshot().verdict.is_some());
    }

    #[test]
    fn same_seed_same_tournament() {
        let a = greedy_vs_strategic(77).run(0.05).records().to_vec();
        let b = greedy_vs_strategic(77).run(0.05).records().to_vec();
        assert_eq!(a, b);
    }

    #[test]
    fn idle_snakes_hit_the_wall() {
        let config = GameConfig {
            max_rounds: 1,
            trap_count: 0,
            ..GameConfig::default()
        };
        let mut game = Game::new(
            config,
            [
                Box::new(Scripted::new("a", [])),
                Box::new(Scripted::new("b", [])),
            ],
            3,
        );
        let tournament = game.run(0.1);
        // both head right from their spawn, the right-hand snake hits first
        assert_eq!(tournament.records()[0].winner, Some(0));
        assert_eq!(tournament.winner_name(), Some("a"));
    }
}

use std::fmt;

use log::{debug, info};
use serde::Serialize;

use super::Verdict;
use crate::{
    arena::config::GameConfig,
    engine::game::Game,
    strategies::{Bot, BotKind},
};

pub const WIN_POINTS: u32 = 3;
pub const DRAW_POINTS: u32 = 1;

type BotFactory = Box<dyn Fn(u64) -> Box<dyn Bot>>;

struct Entrant {
    name:  String,
    build: BotFactory,
}

/// The outcome of one pairing.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    /// Registration positions of the first and second seat.
    pub seats:   [usize; 2],
    pub first:   String,
    pub second:  String,
    pub verdict: Verdict,
    pub wins:    [u32; 2],
}

/// Where a knockout pass left each entrant, by registration position.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Bracket {
    /// Main-bracket winners and byes, then the losers-bracket survivors.
    pub advancing:  Vec<usize>,
    pub eliminated: Vec<usize>,
}

/// One leaderboard line.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Standing {
    pub rank:   u32,
    pub name:   String,
    pub wins:   u32,
    pub losses: u32,
    pub draws:  u32,
    pub points: u32,
}

impl fmt::Display for Standing {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{:>2}. {:<16} {:>3} pts  ({}W {}L {}D)",
            self.rank,
            self.name,
            self.points,
            self.wins,
            self.losses,
            self.draws
        )
    }
}

/// Pits registered bots against each other, a full tournament per pairing,
/// either all against all or as a knockout.
pub struct Contest {
    config:   GameConfig,
    seed:     u64,
    entrants: Vec<Entrant>,
    results:  Vec<MatchResult>,
}

impl Contest {
    #[must_use]
    pub const fn new(config: GameConfig, seed: u64) -> Self {
        Self {
            config,
            seed,
            entrants: Vec::new(),
            results: Vec::new(),
        }
    }

    /// Adds an entrant. `build` gets a per-match seed and must hand back a
    /// fresh bot every time it is called.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        build: impl Fn(u64) -> Box<dyn Bot> + 'static,
    ) {
        self.entrants.push(Entrant {
            name:  name.into(),
            build: Box::new(build),
        });
    }

    pub fn register_kind(&mut self, kind: BotKind) {
        self.register(kind.build(0).name().to_owned(), move |seed| {
            kind.build(seed)
        });
    }

    /// Plays each pair once, in registration order, at a fixed frame time.
    pub fn round_robin(&mut self, dt: f64) -> &[MatchResult] {
        self.results.clear();
        let mut match_seed = self.seed;
        for i in 0..self.entrants.len() {
            for j in (i + 1)..self.entrants.len() {
                self.play(i, j, match_seed, dt);
                match_seed = match_seed.wrapping_add(2);
            }
        }
        &self.results
    }

    /// One single-elimination pass in registration order, followed by one
    /// losers-bracket pass whose winners rejoin the field. Only a first-seat
    /// win advances the first seat, so a draw goes to the second.
    pub fn knockout(&mut self, dt: f64) -> Bracket {
        self.results.clear();
        let mut match_seed = self.seed;

        let field: Vec<usize> = (0..self.entrants.len()).collect();
        let (mut advancing, losers) =
            self.knockout_pass(&field, &mut match_seed, dt);
        let (revived, eliminated) =
            self.knockout_pass(&losers, &mut match_seed, dt);
        advancing.extend(revived);

        info!(
            "knockout: {} advance, {} eliminated",
            advancing.len(),
            eliminated.len()
        );
        Bracket {
            advancing,
            eliminated,
        }
    }

    /// Pairs neighbours in `field`. Returns who went through and who lost;
    /// an unpaired last entrant goes through on a bye.
    fn knockout_pass(
        &mut self,
        field: &[usize],
        match_seed: &mut u64,
        dt: f64,
    ) -> (Vec<usize>, Vec<usize>) {
        let mut through = Vec::new();
        let mut out = Vec::new();
        for pair in field.chunks(2) {
            let &[first, second] = pair else {
                debug!("{} has a bye", self.entrants[pair[0]].name);
                through.push(pair[0]);
                continue;
            };
            let verdict = self.play(first, second, *match_seed, dt);
            *match_seed = match_seed.wrapping_add(2);
            if verdict == Verdict::Winner(0) {
                through.push(first);
                out.push(second);
            } else {
                through.push(second);
                out.push(first);
            }
        }
        (through, out)
    }

    /// Runs one full tournament between two entrants and records it.
    fn play(
        &mut self,
        i: usize,
        j: usize,
        match_seed: u64,
        dt: f64,
    ) -> Verdict {
        let (first, second) = (&self.entrants[i], &self.entrants[j]);
        let bots = [
            (first.build)(match_seed),
            (second.build)(match_seed.wrapping_add(1)),
        ];
        let mut game = Game::new(self.config.clone(), bots, match_seed);
        let tournament = game.run(dt);

        let tallies = tournament.tallies();
        let result = MatchResult {
            seats:   [i, j],
            first:   first.name.clone(),
            second:  second.name.clone(),
            verdict: tournament.verdict().unwrap_or(Verdict::Draw),
            wins:    [tallies[0].wins, tallies[1].wins],
        };
        info!(
            "{} vs {}: {:?} ({} - {})",
            result.first,
            result.second,
            result.verdict,
            result.wins[0],
            result.wins[1]
        );
        let verdict = result.verdict;
        self.results.push(result);
        verdict
    }

    /// Name of the entrant registered at `seat`.
    #[must_use]
    pub fn entrant_name(&self, seat: usize) -> Option<&str> {
        self.entrants.get(seat).map(|entrant| entrant.name.as_str())
    }

    #[must_use]
    pub fn results(&self) -> &[MatchResult] {
        &self.results
    }

    /// Points first, then wins, then fewest losses. Equal entrants keep
    /// their registration order.
    #[must_use]
    pub fn leaderboard(&self) -> Vec<Standing> {
        let mut standings: Vec<Standing> = self
            .entrants
            .iter()
            .map(|entrant| Standing {
                rank:   0,
                name:   entrant.name.clone(),
                wins:   0,
                losses: 0,
                draws:  0,
                points: 0,
            })
            .collect();

        for result in &self.results {
            for (seat, &entrant) in result.seats.iter().enumerate() {
                let Some(standing) = standings.get_mut(entrant) else {
                    continue;
                };
                match result.verdict {
                    Verdict::Winner(winner) if winner == seat => {
                        standing.wins += 1;
                        standing.points += WIN_POINTS;
                    }
                    Verdict::Winner(_) => standing.losses += 1,
                    Verdict::Draw => {
                        standing.draws += 1;
                        standing.points += DRAW_POINTS;
                    }
                }
            }
        }

        standings.sort_by(|a, b| {
            b.points
                .cmp(&a.points)
                .then(b.wins.cmp(&a.wins))
                .then(a.losses.cmp(&b.losses))
        });
        for (rank, standing) in (1..).zip(standings.iter_mut()) {
            standing.rank = rank;
        }
        standings
    }
}

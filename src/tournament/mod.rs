pub mod contest;
pub mod export;
pub mod record;

use std::fmt;

use log::{info, warn};
use serde::Serialize;

use self::record::RoundRecord;
use crate::arena::{config::GameConfig, snake::SnakeID};

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TournamentState {
    NotStarted,
    InProgress,
    Finished,
}

/// Final word on a finished tournament.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Winner(SnakeID),
    Draw,
}

/// Per-seat running totals.
#[derive(Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub wins:       u32,
    pub score:      u32,
    pub traps_hit:  u32,
    pub collisions: u32,
}

/// Scores rounds as they come in and decides when the tournament is over.
#[derive(Debug, Clone)]
pub struct Tournament {
    names:          [String; 2],
    max_rounds:     u32,
    early_margin:   u32,
    early_after:    u32,
    records:        Vec<RoundRecord>,
    tallies:        [Tally; 2],
    draws:          u32,
    crashed_rounds: u32,
    state:          TournamentState,
}

impl Tournament {
    #[must_use]
    pub fn new(config: &GameConfig, names: [String; 2]) -> Self {
        Self {
            names,
            max_rounds: config.max_rounds,
            early_margin: config.early_victory_margin,
            early_after: config.min_rounds_for_early_victory,
            records: Vec::new(),
            tallies: [Tally::default(); 2],
            draws: 0,
            crashed_rounds: 0,
            state: TournamentState::NotStarted,
        }
    }

    /// Marks the first round as under way.
    pub fn begin(&mut self) {
        if self.state == TournamentState::NotStarted {
            info!("{} vs {}", self.names[0], self.names[1]);
            self.state = TournamentState::InProgress;
        }
    }

    /// Adds a finished round and re-checks whether the tournament is over.
    /// Rounds arriving after the end are dropped.
    pub fn record_round(&mut self, record: RoundRecord) -> TournamentState {
        if self.state == TournamentState::Finished {
            warn!("ignoring round {} after the tournament ended", record.round);
            return self.state;
        }

        match record.winner {
            Some(seat) => self.tallies[seat].wins += 1,
            None => self.draws += 1,
        }
        if record.is_crash() {
            self.crashed_rounds += 1;
        }
        for (seat, tally) in self.tallies.iter_mut().enumerate() {
            tally.score += record.scores[seat];
            tally.traps_hit += record.traps_hit[seat];
            tally.collisions += record.collisions[seat];
        }
        self.records.push(record);

        self.state = if self.should_finish() {
            info!(
                "tournament over after {} rounds: {}",
                self.rounds_played(),
                self.verdict_text()
            );
            TournamentState::Finished
        } else {
            TournamentState::InProgress
        };
        self.state
    }

    fn should_finish(&self) -> bool {
        let played = self.rounds_played();
        if played >= self.max_rounds {
            return true;
        }
        played >= self.early_after && self.win_lead() >= self.early_margin
    }

    /// Difference in round wins between the two seats.
    #[must_use]
    pub const fn win_lead(&self) -> u32 {
        self.tallies[0].wins.abs_diff(self.tallies[1].wins)
    }

    /// `None` until the tournament has finished.
    #[must_use]
    pub fn verdict(&self) -> Option<Verdict> {
        if self.state != TournamentState::Finished {
            return None;
        }
        let [first, second] = &self.tallies;
        Some(match first.wins.cmp(&second.wins) {
            std::cmp::Ordering::Greater => Verdict::Winner(0),
            std::cmp::Ordering::Less => Verdict::Winner(1),
            std::cmp::Ordering::Equal => Verdict::Draw,
        })
    }

    /// Name of the overall winner, once there is one.
    #[must_use]
    pub fn winner_name(&self) -> Option<&str> {
        match self.verdict()? {
            Verdict::Winner(seat) => Some(&self.names[seat]),
            Verdict::Draw => None,
        }
    }

    fn verdict_text(&self) -> String {
        match self.verdict() {
            Some(Verdict::Winner(seat)) => format!("{} wins", self.names[seat]),
            Some(Verdict::Draw) => "draw".to_owned(),
            None => "undecided".to_owned(),
        }
    }

    #[must_use]
    pub fn rounds_played(&self) -> u32 {
        u32::try_from(self.records.len()).unwrap_or(u32::MAX)
    }

    #[must_use]
    pub const fn max_rounds(&self) -> u32 {
        self.max_rounds
    }

    #[must_use]
    pub fn records(&self) -> &[RoundRecord] {
        &self.records
    }

    #[must_use]
    pub const fn tallies(&self) -> &[Tally; 2] {
        &self.tallies
    }

    #[must_use]
    pub const fn names(&self) -> &[String; 2] {
        &self.names
    }

    #[must_use]
    pub const fn draws(&self) -> u32 {
        self.draws
    }

    #[must_use]
    pub const fn crashed_rounds(&self) -> u32 {
        self.crashed_rounds
    }

    #[must_use]
    pub const fn state(&self) -> TournamentState {
        self.state
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.state == TournamentState::Finished
    }
}

impl fmt::Display for Tournament {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== FINAL TOURNAMENT RESULTS ===")?;
        writeln!(f, "Total Rounds Played: {}", self.rounds_played())?;
        writeln!(f, "Draws: {}", self.draws)?;
        writeln!(f, "Crashed Rounds: {}", self.crashed_rounds)?;

        for (name, tally) in self.names.iter().zip(&self.tallies) {
            writeln!(f)?;
            writeln!(f, "--- {name} ---")?;
            writeln!(f, "Wins: {}", tally.wins)?;
            writeln!(f, "Total Score: {}", tally.score)?;
            writeln!(f, "Traps Hit: {}", tally.traps_hit)?;
            writeln!(f, "Collisions: {}", tally.collisions)?;
        }

        writeln!(f)?;
        match self.verdict() {
            Some(Verdict::Winner(seat)) => {
                write!(f, ">>> TOURNAMENT WINNER: {}! <<<", self.names[seat])
            }
            Some(Verdict::Draw) => {
                write!(f, ">>> TOURNAMENT ENDED IN A DRAW! <<<")
            }
            None => write!(f, ">>> TOURNAMENT STILL IN PROGRESS <<<"),
        }
    }
}

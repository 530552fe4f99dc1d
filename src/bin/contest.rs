use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use color_eyre::Result;
use itertools::Itertools;
use log::info;
use snake_tournament::{
    arena::config::GameConfig,
    strategies::BotKind,
    tournament::{contest::Contest, export},
};

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Every bot plays every other one once.
    RoundRobin,
    /// One elimination pass plus a losers bracket.
    Knockout,
}

/// Plays the built-in bots against each other and prints a leaderboard.
#[derive(Parser, Debug)]
#[command(name = "contest", version)]
struct Args {
    /// JSON file with game settings; missing keys keep their defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Mode::RoundRobin)]
    mode: Mode,

    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Simulation frames per second.
    #[arg(long, default_value_t = 60.0)]
    fps: f64,

    /// Writes the leaderboard here as CSV.
    #[arg(long)]
    csv: Option<PathBuf>,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    pretty_env_logger::init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => GameConfig::from_json_file(path)?,
        None => GameConfig::default(),
    };

    let mut contest = Contest::new(config, args.seed);
    for kind in BotKind::ALL {
        contest.register_kind(kind);
    }
    info!("{:?} between {}", args.mode, BotKind::ALL.iter().join(", "));

    let dt = 1.0 / args.fps.max(1.0);
    let bracket = match args.mode {
        Mode::RoundRobin => {
            contest.round_robin(dt);
            None
        }
        Mode::Knockout => Some(contest.knockout(dt)),
    };

    for result in contest.results() {
        println!(
            "{} vs {}: {} - {}",
            result.first, result.second, result.wins[0], result.wins[1]
        );
    }

    if let Some(bracket) = &bracket {
        let names = |seats: &[usize]| {
            seats
                .iter()
                .filter_map(|&seat| contest.entrant_name(seat))
                .join(", ")
        };
        println!();
        println!("advancing:  {}", names(&bracket.advancing));
        println!("eliminated: {}", names(&bracket.eliminated));
    }

    let standings = contest.leaderboard();
    println!();
    println!("=== LEADERBOARD ===");
    for standing in &standings {
        println!("{standing}");
    }

    if let Some(path) = &args.csv {
        export::save_leaderboard(&standings, path)?;
    }

    Ok(())
}

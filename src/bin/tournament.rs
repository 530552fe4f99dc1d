use std::path::PathBuf;

use clap::Parser;
use color_eyre::Result;
use log::info;
use snake_tournament::{
    arena::config::GameConfig,
    engine::game::Game,
    strategies::BotKind,
    tournament::export,
};

/// Pits two bots against each other over a best-of tournament, headless.
#[derive(Parser, Debug)]
#[command(name = "tournament", version)]
struct Args {
    /// Bot in the first seat: random, greedy or strategic.
    #[arg(default_value = "greedy")]
    first: BotKind,

    /// Bot in the second seat.
    #[arg(default_value = "strategic")]
    second: BotKind,

    /// JSON file with game settings; missing keys keep their defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Overrides the number of rounds from the config.
    #[arg(long)]
    rounds: Option<u32>,

    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Simulation frames per second.
    #[arg(long, default_value_t = 60.0)]
    fps: f64,

    /// Writes one CSV row per round here.
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Prints the final arena as JSON.
    #[arg(long)]
    snapshot: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    pretty_env_logger::init();

    #[cfg(debug_assertions)]
    info!("running in debug mode");

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => GameConfig::from_json_file(path)?,
        None => GameConfig::default(),
    };
    if let Some(rounds) = args.rounds {
        config.max_rounds = rounds;
    }

    let bots = [
        args.first.build(args.seed),
        args.second.build(args.seed.wrapping_add(1)),
    ];
    info!("{} vs {} with seed {}", args.first, args.second, args.seed);

    let mut game = Game::new(config, bots, args.seed);
    let tournament = game.run(1.0 / args.fps.max(1.0));
    println!("{tournament}");

    if let Some(path) = &args.csv {
        export::save_rounds(tournament, path)?;
    }

    if args.snapshot {
        println!("{}", serde_json::to_string_pretty(&game.snapshot())?);
    }

    Ok(())
}

use std::{hint::black_box, time::Duration};

use criterion::{criterion_group, criterion_main, Criterion, SamplingMode};
use rand::{rngs::StdRng, SeedableRng};
use snake_tournament::{
    arena::config::GameConfig,
    engine::{game::Game, round::Round},
    strategies::{Bot, BotKind},
};

const DT: f64 = 1.0 / 60.0;

fn bots(first: BotKind, second: BotKind) -> [Box<dyn Bot>; 2] {
    [first.build(1), second.build(2)]
}

fn bench_round_ticks() {
    let config = GameConfig::default();
    let mut rng = StdRng::seed_from_u64(7);
    let mut round =
        Round::new(0, ["GreedyBot", "StrategicBot"], &config, &mut rng);
    let mut bots = bots(BotKind::Greedy, BotKind::Strategic);
    for _ in 0..600 {
        if round.tick(DT, &mut bots, &config).is_some() {
            break;
        }
    }
    black_box(round.elapsed);
}

fn bench_full_tournament() {
    let mut game = Game::new(
        GameConfig::default(),
        bots(BotKind::Strategic, BotKind::Random),
        7,
    );
    black_box(game.run(DT).rounds_played());
}

fn tournament_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("tournament");

    group
        .sampling_mode(SamplingMode::Flat)
        .sample_size(10)
        .measurement_time(Duration::from_secs(20));

    group.bench_function("round_600_ticks", |b| b.iter(bench_round_ticks));

    group.bench_function("full_tournament", |b| {
        b.iter(bench_full_tournament)
    });

    group.finish();
}

criterion_group!(benches, tournament_bench);
criterion_main!(benches);

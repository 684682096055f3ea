//! Benchmarks for random playouts and the hot paths they exercise.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use wonders_duel::{play_out, GameState, RandomBot};

fn bench_single_game(c: &mut Criterion) {
    let state = GameState::new(42);

    c.bench_function("random_game", |b| {
        b.iter(|| {
            let end = play_out(black_box(&state), &mut RandomBot::new(7));
            black_box(end)
        });
    });
}

fn bench_game_batch(c: &mut Criterion) {
    c.bench_function("10_random_games", |b| {
        b.iter(|| {
            for seed in 0..10u64 {
                let end = play_out(&GameState::new(seed), &mut RandomBot::new(seed));
                black_box(end).ok();
            }
        });
    });
}

fn bench_legal_moves(c: &mut Criterion) {
    // First position of age I.
    let mut state = GameState::new(3);
    while state.age().is_none() {
        let pick = state.legal_moves()[0];
        state = state.play(pick).expect("draft pick");
    }

    c.bench_function("legal_moves_age_one", |b| {
        b.iter(|| black_box(&state).legal_moves());
    });
}

criterion_group!(benches, bench_single_game, bench_game_batch, bench_legal_moves);
criterion_main!(benches);

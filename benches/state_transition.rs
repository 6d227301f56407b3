use clash_core::core::{GameState, Move};
use clash_core::games::clash::ClashGame;
use clash_core::rules::RulesEngine;
use clash_core::view::sanitize_for_player;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

const SEED: &str = "abcdef1234567890";
const DECK1: [u32; 15] = [1, 2, 3, 4, 5, 15, 16, 17, 24, 25, 33, 34, 35, 39, 40];
const DECK2: [u32; 15] = [7, 8, 9, 10, 11, 18, 19, 20, 26, 27, 36, 37, 38, 39, 40];

/// State after `plies` moves of always playing the last legal move.
fn setup_state(game: &ClashGame, plies: usize) -> GameState {
    let mut state = game.init_game(&DECK1, &DECK2, SEED).expect("standard decks");
    for _ in 0..plies {
        let Some(&mv) = game.legal_moves(&state).last() else {
            break;
        };
        state = game.apply_move(&state, mv).expect("legal move");
    }
    state
}

fn state_transition(c: &mut Criterion) {
    let game = ClashGame::standard();

    c.bench_function("init_game", |b| {
        b.iter(|| black_box(game.init_game(&DECK1, &DECK2, SEED)))
    });

    let mut group = c.benchmark_group("apply_move");
    for plies in [0usize, 8, 16] {
        let state = setup_state(&game, plies);

        group.bench_function(BenchmarkId::new("pass", plies), |b| {
            b.iter(|| black_box(game.apply_move(&state, Move::Pass)))
        });

        group.bench_function(BenchmarkId::new("legal_moves", plies), |b| {
            b.iter(|| black_box(game.legal_moves(&state)))
        });

        group.bench_function(BenchmarkId::new("sanitize", plies), |b| {
            b.iter(|| black_box(sanitize_for_player(&state, state.current_turn)))
        });
    }
    group.finish();

    let state = setup_state(&game, 16);
    c.bench_function("snapshot_bincode", |b| b.iter(|| black_box(state.to_bytes())));
    c.bench_function("snapshot_json", |b| b.iter(|| black_box(state.to_json())));
}

criterion_group!(benches, state_transition);
criterion_main!(benches);

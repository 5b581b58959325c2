use std::time::Duration;

use criterion::black_box;
use criterion::criterion_group;
use criterion::criterion_main;
use criterion::Criterion;
use scout_engine::core::{Move, ScoutConfig};
use scout_engine::round::GameState;

/// A 3-player round after the dealer's opening single, so the next seat
/// has shows, scouts, and combos to enumerate.
fn opened_round() -> GameState {
    let mut state = GameState::with_seed(&ScoutConfig::new(3), 7).expect("valid config");
    state.maybe_flip_hand(&[false, false, false]).expect("first flip");
    state.apply_move(&Move::show(0, 1)).expect("opening show");
    state
}

fn bench_legal_moves(c: &mut Criterion) {
    let state = opened_round();
    let mut group = c.benchmark_group("Legal Moves");
    group
        .sample_size(50)
        .measurement_time(Duration::from_secs(5))
        .warm_up_time(Duration::from_secs(1));
    group.bench_function("generate", |b| b.iter(|| black_box(state.legal_moves())));
    group.bench_function("view", |b| {
        let view = state.info_state();
        b.iter(|| black_box(view.possible_moves()))
    });
    group.finish();
}

fn bench_apply(c: &mut Criterion) {
    let state = opened_round();
    let moves = state.legal_moves();
    let mut group = c.benchmark_group("Apply Move");
    group
        .sample_size(50)
        .measurement_time(Duration::from_secs(5))
        .warm_up_time(Duration::from_secs(1));
    group.bench_function("clone_and_apply_all", |b| {
        b.iter(|| {
            for mv in &moves {
                let mut branch = state.clone();
                black_box(branch.apply_move(mv).is_ok());
            }
        })
    });
    group.finish();
}

criterion_group!(benches, bench_legal_moves, bench_apply);
criterion_main!(benches);

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use quoridor_engine::agent::ai::{evaluate, minimax};
use quoridor_engine::game_repr::GameState;

fn midgame() -> GameState {
    GameState::from_moves(&["e8", "e2", "e3h", "e7v", "e7", "e3", "c6h", "g4h"])
        .expect("known-good sequence")
}

fn bench_shortest_path(c: &mut Criterion) {
    let state = midgame();
    c.bench_function("shortest path to win", |b| {
        b.iter(|| black_box(state.shortest_path_to_win()))
    });
}

fn bench_legal_moves(c: &mut Criterion) {
    let state = midgame();
    c.bench_function("legal move generation", |b| {
        b.iter(|| black_box(state.legal_moves()))
    });
}

fn bench_minimax_depth_1(c: &mut Criterion) {
    let state = midgame();
    c.bench_function("minimax depth 1", |b| {
        b.iter(|| {
            black_box(minimax(
                &state,
                1,
                i32::MIN,
                i32::MAX,
                true,
                &|s: &GameState| evaluate(s, 0),
            ))
        })
    });
}

fn bench_minimax_depth_2(c: &mut Criterion) {
    let state = midgame();
    c.bench_function("minimax depth 2", |b| {
        b.iter(|| {
            black_box(minimax(
                &state,
                2,
                i32::MIN,
                i32::MAX,
                true,
                &|s: &GameState| evaluate(s, 0),
            ))
        })
    });
}

criterion_group!(
    benches,
    bench_shortest_path,
    bench_legal_moves,
    bench_minimax_depth_1,
    bench_minimax_depth_2
);
criterion_main!(benches);

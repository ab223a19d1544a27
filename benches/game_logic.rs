use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::{Board, GameState, SequencePieces};
use blockfall::types::{GameAction, Rgb, ShapeType};

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("game_tick", |b| {
        b.iter(|| {
            if state.game_over() {
                state.restart();
            }
            black_box(state.tick());
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    let mut full = Board::new();
    for y in 16..20 {
        for x in 0..10 {
            full.set(x, y, Some(Rgb::new(0, 240, 240)));
        }
    }

    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = black_box(full.clone());
            board.clear_full_rows()
        })
    });
}

fn bench_hard_drop(c: &mut Criterion) {
    let mut state = GameState::with_source(SequencePieces::new(ShapeType::ALL.to_vec()));

    c.bench_function("hard_drop", |b| {
        b.iter(|| {
            if state.game_over() {
                state.restart();
            }
            black_box(state.hard_drop());
        })
    });
}

fn bench_try_move(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    let mut dx = 1;

    c.bench_function("try_move", |b| {
        b.iter(|| {
            if !state.try_move(black_box(dx), 0) {
                dx = -dx;
            }
        })
    });
}

fn bench_try_rotate(c: &mut Criterion) {
    let mut state = GameState::with_source(SequencePieces::repeat(ShapeType::T));
    state.apply_action(GameAction::MoveDown);

    c.bench_function("try_rotate", |b| {
        b.iter(|| {
            black_box(state.try_rotate());
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let state = GameState::new(12345);

    c.bench_function("snapshot", |b| {
        b.iter(|| black_box(state.snapshot()))
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_hard_drop,
    bench_try_move,
    bench_try_rotate,
    bench_snapshot
);
criterion_main!(benches);

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use rust_2048::rules::{apply_direction, is_mergeable};
use rust_2048::{Board, Direction, Grid};
use std::hint::black_box;

fn corpus() -> Vec<Grid> {
    let mut board = Board::new(42);
    let mut grids = vec![*board.grid()];
    // Walk one game to get a spread of densities.
    for direction in Direction::ALL.into_iter().cycle().take(200) {
        if board.step(direction).changed {
            grids.push(*board.grid());
        }
        if board.get_state().is_terminal() {
            break;
        }
    }
    grids
}

fn bench_moves(c: &mut Criterion) {
    let grids = corpus();
    for direction in Direction::ALL {
        c.bench_function(&format!("move/{direction}"), |b| {
            b.iter(|| {
                let mut score = 0u64;
                for &grid in &grids {
                    let mut g = grid;
                    score += apply_direction(&mut g, direction).score_delta;
                }
                black_box(score)
            })
        });
    }
}

fn bench_queries(c: &mut Criterion) {
    let grids = corpus();
    c.bench_function("tilt_round_trip", |b| {
        b.iter(|| {
            for grid in &grids {
                black_box(grid.tilt().untilt());
            }
        })
    });
    c.bench_function("is_mergeable", |b| {
        b.iter(|| grids.iter().filter(|g| is_mergeable(g)).count())
    });
}

fn bench_step(c: &mut Criterion) {
    c.bench_function("step/full_game", |b| {
        b.iter_batched(
            || Board::new(7),
            |mut board| {
                for direction in Direction::ALL.into_iter().cycle().take(500) {
                    board.step(direction);
                }
                black_box(board.score())
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_moves, bench_queries, bench_step);
criterion_main!(benches);

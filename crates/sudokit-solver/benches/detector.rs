//! Benchmarks for backtracking search and technique detection.
//!
//! Measures `solve`, the uniqueness check (`count_solutions` with limit 2),
//! and the full technique scan on two fixed boards: an easy board that
//! backtracks little and a hard board that backtracks heavily.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench detector
//! ```

use std::hint;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use sudokit_core::Grid;
use sudokit_solver::{count_solutions, find_techniques, solve};

const BOARDS: [(&str, &str); 2] = [
    (
        "easy",
        "530070000600195000098000060800060003400803001700020006060000280000419005000080079",
    ),
    (
        "hard",
        "005300000800000020070010500400005300010070006003200080060500009004000030000009700",
    ),
];

fn parse(board: &str) -> Grid {
    board.parse().unwrap()
}

fn bench_solve(c: &mut Criterion) {
    for (name, board) in BOARDS {
        let grid = parse(board);
        c.bench_with_input(BenchmarkId::new("solve", name), &grid, |b, grid| {
            b.iter(|| solve(hint::black_box(grid)));
        });
    }
}

fn bench_uniqueness(c: &mut Criterion) {
    for (name, board) in BOARDS {
        let grid = parse(board);
        c.bench_with_input(BenchmarkId::new("uniqueness", name), &grid, |b, grid| {
            b.iter(|| count_solutions(hint::black_box(grid), 2));
        });
    }
}

fn bench_find_techniques(c: &mut Criterion) {
    for (name, board) in BOARDS {
        let grid = parse(board);
        c.bench_with_input(
            BenchmarkId::new("find_techniques", name),
            &grid,
            |b, grid| {
                b.iter(|| find_techniques(hint::black_box(grid)));
            },
        );
    }
}

criterion_group!(benches, bench_solve, bench_uniqueness, bench_find_techniques);
criterion_main!(benches);

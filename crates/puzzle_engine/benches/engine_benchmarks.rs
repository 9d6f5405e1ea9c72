//! Criterion benchmarks for puzzle generation and verification.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use puzzle_engine::rng::SeededRng;
use puzzle_engine::{generate_puzzle, verify_solution};

fn bench_generate(c: &mut Criterion) {
    c.bench_function("generate_puzzle", |b| {
        b.iter(|| generate_puzzle(black_box("bench-seed")).unwrap());
    });
}

fn bench_verify(c: &mut Criterion) {
    let puzzle = generate_puzzle("bench-seed").unwrap();
    let (first, second) = puzzle.solution_items().unwrap();
    let cart = [first.clone(), second.clone()];

    c.bench_function("verify_solution", |b| {
        b.iter(|| verify_solution(black_box(&cart), black_box(puzzle.target)));
    });
}

fn bench_rng_draws(c: &mut Criterion) {
    c.bench_function("seeded_rng_next_f64_x1000", |b| {
        b.iter(|| {
            let mut rng = SeededRng::new(black_box("bench-seed"));
            let mut acc = 0.0;
            for _ in 0..1000 {
                acc += rng.next_f64();
            }
            acc
        });
    });
}

criterion_group!(benches, bench_generate, bench_verify, bench_rng_draws);
criterion_main!(benches);

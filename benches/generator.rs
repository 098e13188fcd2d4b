use criterion::{criterion_group, criterion_main, Criterion};
use sudoku_gen::{generate_puzzle, generate_solved};

fn generate_solved_board(c: &mut Criterion) {
    c.bench_function("generate_solved", |b| b.iter(|| generate_solved()));
}

fn generate_full_puzzle(c: &mut Criterion) {
    c.bench_function("generate_puzzle", |b| b.iter(|| generate_puzzle()));
}

criterion_group!(
    benches,
    generate_solved_board,
    generate_full_puzzle,
);
criterion_main!(benches);

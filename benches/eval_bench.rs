use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use npuzzle::board::Board;

fn scrambled(size: usize, steps: usize) -> Board {
    let mut b = Board::goal(size).unwrap();
    let mut rng = SmallRng::seed_from_u64(5);
    b.scramble(steps, &mut rng);
    b
}

fn bench_eval(c: &mut Criterion) {
    let b = scrambled(4, 60);
    c.bench_function("misplaced_tiles_4x4", |ben| {
        ben.iter(|| black_box(npuzzle::search::eval::misplaced_tiles(black_box(&b))))
    });
    c.bench_function("manhattan_distance_4x4", |ben| {
        ben.iter(|| black_box(npuzzle::search::eval::manhattan_distance(black_box(&b))))
    });
    c.bench_function("linear_conflict_4x4", |ben| {
        ben.iter(|| black_box(npuzzle::search::eval::linear_conflict(black_box(&b))))
    });
}

criterion_group!(benches, bench_eval);
criterion_main!(benches);

//! Shuffle and draw throughput on a standard 100-tile bag.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tilebag::{TileBag, TileRng};

fn bench_shuffle(c: &mut Criterion) {
    c.bench_function("shuffle_standard_bag", |b| {
        let mut rng = TileRng::new(42);
        let mut bag = TileBag::standard();
        b.iter(|| {
            bag.shuffle(&mut rng);
            black_box(bag.remaining())
        });
    });
}

fn bench_draw_hand(c: &mut Criterion) {
    c.bench_function("draw_opening_hand", |b| {
        let mut rng = TileRng::new(42);
        b.iter(|| {
            let mut bag = TileBag::standard();
            black_box(bag.draw_many(7, &mut rng))
        });
    });
}

fn bench_drain_bag(c: &mut Criterion) {
    c.bench_function("drain_full_bag", |b| {
        let mut rng = TileRng::new(42);
        b.iter(|| {
            let mut bag = TileBag::standard();
            while let Ok(tile) = bag.draw_one(&mut rng) {
                black_box(tile);
            }
        });
    });
}

criterion_group!(benches, bench_shuffle, bench_draw_hand, bench_drain_bag);
criterion_main!(benches);

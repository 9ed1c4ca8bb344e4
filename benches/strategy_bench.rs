use criterion::{criterion_group, criterion_main, Criterion};
use grid_search::{Cell, SearchGrid, Strategy};
use rand::{rngs::StdRng, SeedableRng};
use std::hint::black_box;

fn random_grid_bench(c: &mut Criterion) {
    for (size, density) in [(64, 0.2), (256, 0.3)] {
        let mut rng = StdRng::seed_from_u64(0);
        let start = Cell::new(0, 0);
        let goal = Cell::new(size as i32 - 1, size as i32 - 1);
        let grid = SearchGrid::random(size, size, density, start, goal, &mut rng).unwrap();
        for strategy in Strategy::ALL {
            c.bench_function(format!("{size}x{size} ({density}), {strategy}").as_str(), |b| {
                b.iter(|| black_box(strategy.search(&grid, start, goal, |_| {})))
            });
        }
    }
}

criterion_group!(benches, random_grid_bench);
criterion_main!(benches);

//! Criterion benchmarks for the tourgen-core pipeline.
//!
//! Two axes:
//!
//! - **Solve**: greedy construction + 2-opt at fixed node counts
//! - **Batch**: full generate → solve → project throughput
//!
//! Run with: `cargo bench -p tourgen-core`
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tourgen_core::{BatchGenerator, DistanceMatrix, GraphGenerator, TourSolver};

const NODE_COUNTS: &[i64] = &[8, 16, 32, 64];

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve");
    for &n in NODE_COUNTS {
        let mut rng = ChaCha8Rng::seed_from_u64(n as u64);
        let graph = GraphGenerator::new((n, n + 1), (1, 100))
            .unwrap()
            .generate(&mut rng);
        let matrix = DistanceMatrix::from_graph(&graph).unwrap();

        for passes in [0, TourSolver::DEFAULT_OPTIMIZATION_PASSES] {
            let solver = TourSolver::new(passes);
            group.bench_with_input(
                BenchmarkId::new(format!("passes_{passes}"), n),
                &matrix,
                |b, m| b.iter(|| black_box(solver.solve(black_box(m)))),
            );
        }
    }
    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");
    for count in [1usize, 32, 128] {
        let generator = BatchGenerator::new(GraphGenerator::default());
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            let mut rng = ChaCha8Rng::seed_from_u64(0);
            b.iter(|| black_box(generator.generate(&mut rng, count).unwrap()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_solve, bench_batch);
criterion_main!(benches);

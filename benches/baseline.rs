use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;

use gba_validation::stats::fisher::{fisher_exact_greater, ContingencyTable};
use gba_validation::stats::ranks::{random_rank_baseline, BaselineMode};

const UNIVERSE: usize = 14_000;
const HELD_OUT: usize = 60;

fn baseline(mode: BaselineMode, trials: usize) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(42);
    random_rank_baseline(UNIVERSE, HELD_OUT, trials, mode, &mut rng).unwrap()
}

/// Tables with growing overlap of two 10% sets
fn tables() -> Vec<ContingencyTable> {
    let top = (UNIVERSE / 10) as u64;
    let universe = UNIVERSE as u64;
    (0..top)
        .map(|a| ContingencyTable::new(a, top - a, top - a, universe - 2 * top + a))
        .collect()
}

fn fisher(tables: &[ContingencyTable]) -> f64 {
    tables.iter().map(fisher_exact_greater).sum()
}

fn fisher_parallel(tables: &[ContingencyTable]) -> f64 {
    tables.par_iter().map(fisher_exact_greater).sum()
}

fn baseline_benchmark(c: &mut Criterion) {
    c.bench_function("baseline independent 10000", |b| {
        b.iter(|| baseline(black_box(BaselineMode::IndependentDraws), black_box(10_000)))
    });

    c.bench_function("baseline without replacement 10000", |b| {
        b.iter(|| baseline(black_box(BaselineMode::WithoutReplacement), black_box(10_000)))
    });
}

fn fisher_benchmark(c: &mut Criterion) {
    let tables = tables();

    c.bench_function("fisher 1400", |b| b.iter(|| fisher(black_box(&tables))));

    c.bench_function("fisher-parallel 1400", |b| {
        b.iter(|| fisher_parallel(black_box(&tables)))
    });
}

criterion_group!(benches, baseline_benchmark, fisher_benchmark);
criterion_main!(benches);

//! Criterion benchmarks for the full derivation pass.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use strata_bench::{reference_case, stress_case, BenchCase};
use strata_geology::{DerivedGeology, GeologyConfig};

fn run(case: &BenchCase, config: &GeologyConfig) -> DerivedGeology {
    DerivedGeology::with_config(&case.grid, &case.rock, Some(&case.multipliers), config).unwrap()
}

/// Benchmark: sequential vs parallel on the 50K-cell reference case.
fn bench_reference(c: &mut Criterion) {
    let case = reference_case(42);
    let mut group = c.benchmark_group("derive_reference_50k");
    for (name, config) in [
        ("sequential", GeologyConfig::sequential()),
        ("parallel", GeologyConfig::parallel()),
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(name), &config, |b, config| {
            b.iter(|| black_box(run(&case, config)));
        });
    }
    group.finish();
}

/// Benchmark: parallel derivation on the 300K-cell stress case.
fn bench_stress(c: &mut Criterion) {
    let case = stress_case(42);
    let config = GeologyConfig::parallel();
    let mut group = c.benchmark_group("derive_stress_300k");
    group.sample_size(10);
    group.bench_function("parallel", |b| {
        b.iter(|| black_box(run(&case, &config)));
    });
    group.finish();
}

criterion_group!(benches, bench_reference, bench_stress);
criterion_main!(benches);

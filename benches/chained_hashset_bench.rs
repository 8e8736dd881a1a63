//! Benchmark for ChainedHashSet vs standard HashSet.
//!
//! Compares the separate-chaining set against Rust's standard HashSet for
//! insertion (with and without pre-sized buckets), lookup and removal.

use chainset::chained::ChainedHashSet;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::collections::HashSet;
use std::hint::black_box;

// =============================================================================
// insert Benchmark
// =============================================================================

fn benchmark_insert(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("insert");

    for size in [1_000, 10_000, 100_000] {
        group.bench_with_input(
            BenchmarkId::new("ChainedHashSet", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut set = ChainedHashSet::new();
                    for index in 0..size {
                        set.insert(black_box(index));
                    }
                    black_box(set)
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("ChainedHashSet/reserved", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut set = ChainedHashSet::with_bucket_count(size);
                    for index in 0..size {
                        set.insert(black_box(index));
                    }
                    black_box(set)
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("HashSet", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut set = HashSet::new();
                    for index in 0..size {
                        set.insert(black_box(index));
                    }
                    black_box(set)
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// contains Benchmark
// =============================================================================

fn benchmark_contains(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("contains");

    for size in [100, 1_000, 10_000] {
        let chained_set: ChainedHashSet<usize> = (0..size).collect();
        let standard_set: HashSet<usize> = (0..size).collect();

        group.bench_with_input(
            BenchmarkId::new("ChainedHashSet", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut found = 0;
                    for key in 0..size * 2 {
                        if chained_set.contains(&black_box(key)) {
                            found += 1;
                        }
                    }
                    black_box(found)
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("HashSet", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut found = 0;
                    for key in 0..size * 2 {
                        if standard_set.contains(&black_box(key)) {
                            found += 1;
                        }
                    }
                    black_box(found)
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// remove Benchmark
// =============================================================================

fn benchmark_remove(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("remove");

    for size in [1_000, 10_000] {
        let chained_set: ChainedHashSet<usize> = (0..size).collect();

        group.bench_with_input(
            BenchmarkId::new("ChainedHashSet", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut set = chained_set.clone();
                    for key in 0..size {
                        set.remove(&black_box(key));
                    }
                    black_box(set)
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// rehash Benchmark
// =============================================================================

fn benchmark_rehash(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("rehash");

    for size in [1_000, 10_000] {
        let chained_set: ChainedHashSet<usize> = (0..size).collect();

        group.bench_with_input(
            BenchmarkId::new("ChainedHashSet", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut set = chained_set.clone();
                    set.rehash(black_box(size * 4));
                    black_box(set)
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_insert,
    benchmark_contains,
    benchmark_remove,
    benchmark_rehash
);
criterion_main!(benches);

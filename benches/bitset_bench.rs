//! BitSet set-algebra benchmark.
//!
//! Compares word-wise intersection against the analytic range intersection
//! and against filtering an explicit list of values.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use orderly::bitset::BitSet;
use std::hint::black_box;

const SIZES: [usize; 4] = [64, 1_000, 10_000, 100_000];

/// Every third integer below `size`.
fn generate_sparse(size: usize) -> BitSet {
    (0..size).step_by(3).collect()
}

/// Every even integer below `size`.
fn generate_even(size: usize) -> BitSet {
    (0..size).step_by(2).collect()
}

fn benchmark_intersection(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("bitset_intersection");

    for size in SIZES {
        let first = generate_sparse(size);
        let second = generate_even(size);
        group.bench_with_input(BenchmarkId::new("intersection", size), &size, |bencher, _| {
            bencher.iter(|| black_box(first.intersection(black_box(&second))));
        });
    }

    group.finish();
}

fn benchmark_intersection_range(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("bitset_intersection_range");

    for size in SIZES {
        let set = generate_sparse(size);
        let end = isize::try_from(size / 2).unwrap_or(isize::MAX);
        group.bench_with_input(BenchmarkId::new("range", size), &size, |bencher, _| {
            bencher.iter(|| black_box(set.intersection_range(black_box(-10..end))));
        });
        group.bench_with_input(BenchmarkId::new("values", size), &size, |bencher, _| {
            bencher.iter(|| black_box(set.intersection_values(black_box(-10..end))));
        });
    }

    group.finish();
}

fn benchmark_union_and_difference(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("bitset_union_difference");

    for size in SIZES {
        let first = generate_sparse(size);
        let second = generate_even(size / 2);
        group.bench_with_input(BenchmarkId::new("union", size), &size, |bencher, _| {
            bencher.iter(|| black_box(first.union(black_box(&second))));
        });
        group.bench_with_input(BenchmarkId::new("difference", size), &size, |bencher, _| {
            bencher.iter(|| black_box(first.difference(black_box(&second))));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_intersection,
    benchmark_intersection_range,
    benchmark_union_and_difference
);
criterion_main!(benches);

#![allow(clippy::expect_used, clippy::unwrap_used, missing_docs)]
//! Benchmark for the scan-conversion algorithms.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use trueno_raster::prelude::*;

fn line_algorithms_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("line_algorithms");

    for length in [10, 55, 110] {
        let (x1, y1) = (length, length / 3);

        group.bench_with_input(BenchmarkId::new("naive", length), &length, |b, _| {
            b.iter(|| rasterize_line_naive(black_box(0), black_box(0), black_box(x1), black_box(y1)));
        });
        group.bench_with_input(BenchmarkId::new("dda", length), &length, |b, _| {
            b.iter(|| rasterize_line_dda(black_box(0), black_box(0), black_box(x1), black_box(y1)));
        });
        group.bench_with_input(BenchmarkId::new("bres_line", length), &length, |b, _| {
            b.iter(|| {
                rasterize_line_bresenham(black_box(0), black_box(0), black_box(x1), black_box(y1))
            });
        });
        group.bench_with_input(BenchmarkId::new("wu", length), &length, |b, _| {
            b.iter(|| rasterize_line_wu(black_box(0), black_box(0), black_box(x1), black_box(y1)));
        });
    }

    group.finish();
}

fn circle_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("bres_circle");

    for radius in [5, 25, 55] {
        group.bench_with_input(BenchmarkId::from_parameter(radius), &radius, |b, &radius| {
            b.iter(|| rasterize_circle_bresenham(black_box(0), black_box(0), black_box(radius)));
        });
    }

    group.finish();
}

fn dispatch_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");

    for algorithm in Algorithm::ALL {
        let shape = algorithm.shape_from_coords(-40, -20, 45, 30);
        group.bench_with_input(BenchmarkId::from_parameter(algorithm.tag()), &shape, |b, shape| {
            b.iter(|| algorithm.rasterize(black_box(shape)).expect("shape matches algorithm"));
        });
    }

    group.finish();
}

criterion_group!(benches, line_algorithms_benchmark, circle_benchmark, dispatch_benchmark);
criterion_main!(benches);

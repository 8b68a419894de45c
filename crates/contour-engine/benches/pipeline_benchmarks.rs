//! Benchmarks for IDW gridding and contour extraction.
//!
//! Run with: cargo bench --package contour-engine

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use contour_engine::{build_grid, contour_lines, extract_segments, IdwConfig, DEFAULT_THRESHOLDS_MS};
use hazard_common::ReturnPeriod;
use test_utils::{gradient_samples, open_mask};

fn bench_config(nx: usize, ny: usize) -> IdwConfig {
    IdwConfig {
        nx,
        ny,
        padding_degrees: 0.05,
        power: 2.0,
        max_influence_distance: 1.6,
    }
}

fn bench_build_grid(c: &mut Criterion) {
    let samples = gradient_samples(10, 10, 20.0, 3.0);
    let mut group = c.benchmark_group("build_grid");

    for size in [60usize, 120, 150] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let config = bench_config(size, size);
            b.iter(|| build_grid(black_box(&samples), ReturnPeriod::Rp250, &config));
        });
    }
    group.finish();
}

fn bench_extract_segments(c: &mut Criterion) {
    let samples = gradient_samples(10, 10, 20.0, 3.0);
    let config = bench_config(120, 120);
    let grid = build_grid(&samples, ReturnPeriod::Rp250, &config);
    let mask = open_mask(50.0);

    c.bench_function("extract_segments_120x120", |b| {
        b.iter(|| extract_segments(black_box(&grid), 35.0, &mask));
    });
}

fn bench_contour_lines(c: &mut Criterion) {
    let samples = gradient_samples(10, 10, 20.0, 3.0);
    let config = bench_config(120, 120);
    let mask = open_mask(50.0);

    c.bench_function("contour_lines_default_thresholds", |b| {
        b.iter(|| {
            contour_lines(
                black_box(&samples),
                &mask,
                ReturnPeriod::Rp250,
                &DEFAULT_THRESHOLDS_MS,
                &config,
            )
        });
    });
}

criterion_group!(
    benches,
    bench_build_grid,
    bench_extract_segments,
    bench_contour_lines
);
criterion_main!(benches);

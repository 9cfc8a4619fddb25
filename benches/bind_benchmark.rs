//! Benchmark for glyph call binding and renderer construction.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use glyphic::glyph::Call;
use glyphic::prelude::*;

fn construction_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("glyph_construction");

    for size in [100, 1_000, 10_000] {
        let x: Vec<f64> = (0..size).map(f64::from).collect();
        let y: Vec<f64> = (0..size).map(|i| f64::from(i).sin()).collect();
        let source = Arc::new(ColumnDataSource::from_xy(&x, &y));

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                let mut plot = Plot::new();
                plot.circle(
                    Call::positional(black_box([
                        "x".into(),
                        "y".into(),
                        0.5.into(),
                    ]))
                    .options([("fill_color", "navy")])
                    .source(Arc::clone(&source)),
                )
                .unwrap()
            });
        });
    }

    group.finish();
}

criterion_group!(benches, construction_benchmark);
criterion_main!(benches);

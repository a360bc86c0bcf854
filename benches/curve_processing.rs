//! Benchmarks for curve processing operations
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use motor_curve_studio::curve::{simplified_len, simplify, CurveStore, WaveParams};
use motor_curve_studio::export::render;
use motor_curve_studio::Point;

/// A noisy sine sweep over ten seconds, the densest curve the editor produces
fn sine_curve(size: usize) -> Vec<Point> {
    (0..size)
        .map(|i| {
            let t = i as f32 * 10.0 / size as f32;
            let noise = ((i * 7919) % 13) as f32 * 0.05;
            Point::new(t, 50.0 + 45.0 * (t * 3.0).sin() + noise)
        })
        .collect()
}

fn bench_simplify(c: &mut Criterion) {
    let mut group = c.benchmark_group("rdp_simplify");

    for size in [100, 500, 2000].iter() {
        let points = sine_curve(*size);
        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("simplify", size), &points, |b, points| {
            b.iter(|| black_box(simplify(points, 0.5)));
        });
        group.bench_with_input(
            BenchmarkId::new("simplified_len", size),
            &points,
            |b, points| {
                b.iter(|| black_box(simplified_len(points, 0.5)));
            },
        );
    }

    group.finish();
}

fn bench_insert_with_budget(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_with_budget");

    for size in [100, 500].iter() {
        let mut store = CurveStore::new(0.5);
        for p in sine_curve(*size) {
            let _ = store.try_insert(p, 10.0);
        }

        group.bench_with_input(BenchmarkId::new("try_insert", size), &store, |b, store| {
            b.iter(|| {
                let mut candidate = store.clone();
                black_box(candidate.try_insert(Point::new(5.0, 50.0), 10.0).is_ok())
            });
        });
    }

    group.finish();
}

fn bench_wave_and_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("wave_and_render");

    let params = WaveParams {
        density: 0.005,
        ..WaveParams::default()
    };
    group.bench_function("samples_10s", |b| {
        b.iter(|| black_box(params.samples(0.0, 10.0)));
    });

    let simplified = simplify(&sine_curve(2000), 0.5);
    group.bench_function("render_sketch", |b| {
        b.iter(|| black_box(render(&simplified)));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_simplify,
    bench_insert_with_budget,
    bench_wave_and_render
);
criterion_main!(benches);

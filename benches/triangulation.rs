//! Benchmarks for triangulation and triangle predicates.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use featmesh::{Delaunay, Point2, Triangle2};

/// Generates random feature points inside a 640x480 image.
fn generate_feature_points(count: usize, seed: u64) -> Vec<Point2<f64>> {
    let mut points = Vec::with_capacity(count);
    let mut state = seed;

    for _ in 0..count {
        // xorshift for deterministic random
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        let x = (state as f64 / u64::MAX as f64) * 640.0;

        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        let y = (state as f64 / u64::MAX as f64) * 480.0;

        points.push(Point2::new(x, y));
    }

    points
}

fn bench_triangulate(c: &mut Criterion) {
    let mut group = c.benchmark_group("triangulate");

    for count in [25, 100, 250] {
        let points = generate_feature_points(count, 0x9E37_79B9_7F4A_7C15);
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("fresh", count), &points, |b, points| {
            b.iter(|| {
                let mut mesh = Delaunay::new();
                mesh.triangulate(black_box(points), 640.0, 480.0)
                    .map(|t| t.len())
                    .unwrap_or(0)
            })
        });

        // Reusing one triangulator keeps its buffers allocated.
        group.bench_with_input(BenchmarkId::new("reused", count), &points, |b, points| {
            let mut mesh = Delaunay::new();
            b.iter(|| {
                mesh.triangulate(black_box(points), 640.0, 480.0)
                    .map(|t| t.len())
                    .unwrap_or(0)
            })
        });
    }

    group.finish();
}

fn bench_predicates(c: &mut Criterion) {
    let mut group = c.benchmark_group("triangle_predicates");

    let t = Triangle2::new(
        Point2::new(120.5, 80.25),
        Point2::new(410.0, 140.75),
        Point2::new(260.0, 395.5),
    );
    let probe = Point2::new(300.0, 200.0);

    group.bench_function("circumcircle_contains", |b| {
        b.iter(|| black_box(t).circumcircle_contains(black_box(probe)))
    });
    group.bench_function("is_skinny", |b| {
        b.iter(|| black_box(t).is_skinny(black_box(15.0)))
    });

    group.finish();
}

criterion_group!(benches, bench_triangulate, bench_predicates);
criterion_main!(benches);

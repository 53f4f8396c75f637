//! Criterion benchmarks: sequential vs threaded kernels.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use parlab::points::random_points;
use parlab::{
    Angles, Matrix, Point3D, Rotation, Schedule, distances, distances_parallel, fill_parallel,
    fill_random, rotate, rotate_parallel, thread_count, transpose, transpose_parallel,
};

const SIZES: &[usize] = &[256, 1024];
const THREADS: usize = 4;

fn bench_transpose(c: &mut Criterion) {
    let mut group = c.benchmark_group("transpose");
    let threads = thread_count(THREADS).unwrap();

    for &n in SIZES {
        let src = Matrix::random(n, n, 1);
        let mut dst = vec![0; n * n];
        group.throughput(Throughput::Elements((n * n) as u64));

        group.bench_with_input(BenchmarkId::new("sequential", n), &n, |b, &n| {
            b.iter(|| transpose(black_box(src.as_slice()), &mut dst, n, n))
        });
        for (name, schedule) in [("strided", Schedule::Strided), ("static", Schedule::Static)] {
            group.bench_with_input(BenchmarkId::new(name, n), &n, |b, &n| {
                b.iter(|| {
                    transpose_parallel(black_box(src.as_slice()), &mut dst, n, n, threads, schedule)
                        .unwrap()
                })
            });
        }
    }
    group.finish();
}

fn bench_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill");
    let threads = thread_count(THREADS).unwrap();

    for &n in SIZES {
        let mut m = vec![0; n * n];
        group.throughput(Throughput::Elements((n * n) as u64));

        group.bench_with_input(BenchmarkId::new("sequential", n), &n, |b, &n| {
            b.iter(|| fill_random(black_box(&mut m), n, n, 7))
        });
        for (name, schedule) in [("strided", Schedule::Strided), ("static", Schedule::Static)] {
            group.bench_with_input(BenchmarkId::new(name, n), &n, |b, &n| {
                b.iter(|| fill_parallel(black_box(&mut m), n, n, 7, threads, schedule).unwrap())
            });
        }
    }
    group.finish();
}

fn bench_points(c: &mut Criterion) {
    let mut group = c.benchmark_group("points");
    let threads = thread_count(THREADS).unwrap();
    let count = 100_000;

    let original = random_points(count, -100.0..100.0, 3);
    let rotation = Rotation::from_degrees(Angles::new(30.0, 45.0, 60.0));
    let mut points = original.clone();
    let mut out = vec![0.0; count];
    group.throughput(Throughput::Elements(count as u64));

    group.bench_function("rotate/sequential", |b| {
        b.iter(|| rotate(black_box(&mut points), &rotation))
    });
    group.bench_function("rotate/parallel", |b| {
        b.iter(|| rotate_parallel(black_box(&mut points), &rotation, threads).unwrap())
    });
    group.bench_function("distance/sequential", |b| {
        b.iter(|| distances(black_box(&original), &Point3D::ORIGIN, &mut out))
    });
    group.bench_function("distance/parallel", |b| {
        b.iter(|| distances_parallel(black_box(&original), &Point3D::ORIGIN, &mut out, threads).unwrap())
    });
    group.finish();
}

criterion_group!(benches, bench_transpose, bench_fill, bench_points);
criterion_main!(benches);

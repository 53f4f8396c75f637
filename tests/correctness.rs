use parlab::config::MatrixBenchConfig;
use parlab::matrix::fill::{FILL_MAX, FILL_MIN};
use parlab::points::random_points;
use parlab::threaded::partition::Partition;
use parlab::{
    Angles, Error, Matrix, Point3D, Rotation, Schedule, distance, distances, distances_parallel,
    fill_parallel, fill_random, rotate, rotate_parallel, thread_count, transpose,
    transpose_parallel,
};
use std::num::NonZeroUsize;

const SCHEDULES: [Schedule; 2] = [Schedule::Strided, Schedule::Static];

fn threads(n: usize) -> NonZeroUsize {
    thread_count(n).unwrap()
}

fn assert_points_close(expected: &[Point3D], actual: &[Point3D], name: &str) {
    assert_eq!(expected.len(), actual.len(), "{}: length mismatch", name);
    for i in 0..expected.len() {
        let (e, a) = (expected[i], actual[i]);
        assert!(
            (e.x - a.x).abs() < 1e-9 && (e.y - a.y).abs() < 1e-9 && (e.z - a.z).abs() < 1e-9,
            "{}: mismatch at index {}: expected {:?}, got {:?}",
            name,
            i,
            e,
            a
        );
    }
}

// ============================================================
// Transpose
// ============================================================

#[test]
fn test_2x3_transpose_every_path() {
    let src = vec![1, 2, 3, 4, 5, 6];
    let expected = vec![1, 4, 2, 5, 3, 6];

    let mut seq = vec![0; 6];
    transpose(&src, &mut seq, 2, 3);
    assert_eq!(seq, expected);

    for schedule in SCHEDULES {
        for n in [1, 2, 4] {
            let mut par = vec![0; 6];
            transpose_parallel(&src, &mut par, 2, 3, threads(n), schedule).unwrap();
            assert_eq!(par, expected, "{:?} with {} threads", schedule, n);
        }
    }
}

#[test]
fn test_transpose_round_trip() {
    let test_sizes = [(1, 1), (1, 9), (9, 1), (3, 5), (17, 4), (64, 65), (100, 37)];

    for (rows, cols) in test_sizes {
        let m = Matrix::random(rows, cols, 3);
        let back = m.transposed().transposed();
        assert_eq!(back, m, "round trip {}x{}", rows, cols);
    }
}

#[test]
fn test_parallel_matches_sequential() {
    let test_sizes = [(64, 64), (100, 100), (127, 33), (33, 127), (500, 500)];

    for (rows, cols) in test_sizes {
        let src = Matrix::random(rows, cols, 17);
        let mut expected = vec![0; rows * cols];
        transpose(src.as_slice(), &mut expected, rows, cols);

        for schedule in SCHEDULES {
            for n in [1, 2, 3, 4, 8] {
                let mut dst = vec![0; rows * cols];
                transpose_parallel(src.as_slice(), &mut dst, rows, cols, threads(n), schedule)
                    .unwrap();
                assert_eq!(
                    dst, expected,
                    "{}x{} {:?} with {} threads",
                    rows, cols, schedule, n
                );
            }
        }
    }
}

#[test]
fn test_transpose_degenerate_sizes() {
    for schedule in SCHEDULES {
        let mut empty: Vec<i32> = vec![];
        transpose_parallel(&[], &mut empty, 0, 0, threads(4), schedule).unwrap();

        let mut one = vec![0];
        transpose_parallel(&[42], &mut one, 1, 1, threads(4), schedule).unwrap();
        assert_eq!(one, vec![42]);
    }
    assert_eq!(Matrix::zeros(0, 0).transposed(), Matrix::zeros(0, 0));
}

// ============================================================
// Fill
// ============================================================

#[test]
fn test_fill_values_in_range() {
    for schedule in SCHEDULES {
        let mut m = vec![-1; 200 * 150];
        fill_parallel(&mut m, 200, 150, 5, threads(4), schedule).unwrap();
        assert!(m.iter().all(|&v| (FILL_MIN..FILL_MAX).contains(&v)));
    }
}

#[test]
fn test_fill_independent_of_thread_count() {
    let test_sizes = [(1, 1), (2, 3), (10, 10), (100, 7), (7, 100), (250, 250)];

    for (rows, cols) in test_sizes {
        let mut expected = vec![0; rows * cols];
        fill_random(&mut expected, rows, cols, 2024);

        for schedule in SCHEDULES {
            for n in [1, 2, 3, 4, 8, 16] {
                let mut m = vec![0; rows * cols];
                fill_parallel(&mut m, rows, cols, 2024, threads(n), schedule).unwrap();
                assert_eq!(
                    m, expected,
                    "{}x{} {:?} with {} threads",
                    rows, cols, schedule, n
                );
            }
        }
    }
}

#[test]
fn test_fill_trials_use_fresh_seeds() {
    let config = MatrixBenchConfig::default();
    let mut first = vec![0; 50 * 50];
    let mut second = vec![0; 50 * 50];

    fill_random(&mut first, 50, 50, config.trial_seed(0));
    fill_random(&mut second, 50, 50, config.trial_seed(1));

    assert_ne!(first, second);
}

#[test]
fn test_fill_degenerate_sizes() {
    for schedule in SCHEDULES {
        fill_parallel(&mut [], 0, 0, 1, threads(4), schedule).unwrap();
        fill_parallel(&mut [], 3, 0, 1, threads(4), schedule).unwrap();
        fill_parallel(&mut [], 0, 3, 1, threads(4), schedule).unwrap();
    }
}

// ============================================================
// Rotation
// ============================================================

#[test]
fn test_rotate_x_to_y_about_z() {
    let rotation = Rotation::from_degrees(Angles::new(0.0, 0.0, 90.0));
    let expected = [Point3D::new(0.0, 1.0, 0.0)];

    let mut seq = [Point3D::new(1.0, 0.0, 0.0)];
    rotate(&mut seq, &rotation);
    assert_points_close(&expected, &seq, "sequential");

    let mut par = [Point3D::new(1.0, 0.0, 0.0)];
    rotate_parallel(&mut par, &rotation, threads(4)).unwrap();
    assert_points_close(&expected, &par, "parallel");
}

#[test]
fn test_rotation_preserves_norm() {
    let original = random_points(5000, -100.0..100.0, 9);
    let rotation = Rotation::from_degrees(Angles::new(30.0, 45.0, 60.0));

    let mut points = original.clone();
    rotate_parallel(&mut points, &rotation, threads(4)).unwrap();

    for (before, after) in original.iter().zip(&points) {
        let (a, b) = (before.norm(), after.norm());
        assert!((a - b).abs() <= 1e-9 * a.max(1.0), "norm {} became {}", a, b);
    }
}

#[test]
fn test_rotate_single_thread_matches_sequential() {
    let original = random_points(777, -100.0..100.0, 4);
    let rotation = Rotation::from_degrees(Angles::new(-15.0, 200.0, 33.3));

    let mut seq = original.clone();
    rotate(&mut seq, &rotation);

    let mut one = original.clone();
    rotate_parallel(&mut one, &rotation, threads(1)).unwrap();

    assert_eq!(seq, one);
}

#[test]
fn test_rotate_inverse_angles_restore_points() {
    let original = random_points(100, -100.0..100.0, 12);
    let mut points = original.clone();

    // Z^-1 Y^-1 X^-1 undoes X Y Z, applied one axis at a time.
    rotate(&mut points, &Rotation::from_degrees(Angles::new(30.0, 45.0, 60.0)));
    rotate(&mut points, &Rotation::from_degrees(Angles::new(0.0, 0.0, -60.0)));
    rotate(&mut points, &Rotation::from_degrees(Angles::new(0.0, -45.0, 0.0)));
    rotate(&mut points, &Rotation::from_degrees(Angles::new(-30.0, 0.0, 0.0)));

    assert_points_close(&original, &points, "inverse");
}

// ============================================================
// Distance
// ============================================================

#[test]
fn test_distances_match_formula() {
    let points = random_points(20_000, 0.0..100.0, 1);
    let camera = Point3D::new(10.0, -5.0, 3.0);

    for n in [1, 2, 4, 8] {
        let mut out = vec![0.0; points.len()];
        distances_parallel(&points, &camera, &mut out, threads(n)).unwrap();

        for (p, d) in points.iter().zip(&out) {
            let direct = ((p.x - camera.x).powi(2)
                + (p.y - camera.y).powi(2)
                + (p.z - camera.z).powi(2))
            .sqrt();
            assert!((direct - d).abs() < 1e-9, "{} threads: {} vs {}", n, direct, d);
        }
    }
}

#[test]
fn test_distance_to_origin_is_norm() {
    let p = Point3D::new(2.0, 3.0, 6.0);
    assert_eq!(distance(&p, &Point3D::ORIGIN), 7.0);
    assert_eq!(p.distance_to(&Point3D::ORIGIN), p.norm());

    let mut out = vec![0.0];
    distances(&[p], &Point3D::ORIGIN, &mut out);
    assert_eq!(out, vec![7.0]);
}

#[test]
fn test_distances_empty() {
    let mut out: Vec<f64> = vec![];
    distances_parallel(&[], &Point3D::ORIGIN, &mut out, threads(8)).unwrap();
    assert!(out.is_empty());
}

// ============================================================
// Thread counts and partitions
// ============================================================

#[test]
fn test_zero_threads_is_an_error() {
    assert!(matches!(thread_count(0), Err(Error::ZeroThreads)));
}

#[test]
fn test_schedules_map_to_partitions() {
    assert_eq!(Schedule::Strided.partition(), Partition::Strided);
    assert_eq!(Schedule::Static.partition(), Partition::Contiguous);
    assert_eq!(Schedule::Strided.iteration_len(4, 5), 4);
    assert_eq!(Schedule::Static.iteration_len(4, 5), 20);
}

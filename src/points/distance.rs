//! Point-to-camera distances.

use super::Point3D;
use crate::error::Result;
use rayon::prelude::*;
use std::num::NonZeroUsize;
use tracing::debug;

/// Euclidean distance between two points.
#[inline]
pub fn distance(a: &Point3D, b: &Point3D) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    let dz = a.z - b.z;
    (dx * dx + dy * dy + dz * dz).sqrt()
}

/// out[i] = distance(points[i], camera)
///
/// # Panics
///
/// Panics if `out` and `points` differ in length.
pub fn distances(points: &[Point3D], camera: &Point3D, out: &mut [f64]) {
    check_lens(points.len(), out.len());
    for (d, p) in out.iter_mut().zip(points) {
        *d = distance(p, camera);
    }
}

/// Multi-threaded [`distances`] on a pool of exactly `threads` workers.
///
/// The pool lives for this call only. Output elements are disjoint per
/// worker, so no locking is involved.
///
/// # Panics
///
/// Panics if `out` and `points` differ in length.
pub fn distances_parallel(
    points: &[Point3D],
    camera: &Point3D,
    out: &mut [f64],
    threads: NonZeroUsize,
) -> Result<()> {
    check_lens(points.len(), out.len());

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads.get())
        .thread_name(|idx| format!("parlab-distance-{}", idx))
        .build()?;

    debug!(points = points.len(), threads = threads.get(), "parallel distances");

    pool.install(|| {
        out.par_iter_mut()
            .zip(points.par_iter())
            .for_each(|(d, p)| *d = distance(p, camera));
    });
    Ok(())
}

fn check_lens(points: usize, out: usize) {
    assert_eq!(
        points, out,
        "out: expected {} elements, got {}",
        points, out
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::points::random_points;

    #[test]
    fn test_known_distance() {
        let d = distance(&Point3D::new(1.0, 2.0, 2.0), &Point3D::ORIGIN);
        assert_eq!(d, 3.0);
        let d = distance(&Point3D::new(1.0, 1.0, 1.0), &Point3D::new(4.0, 5.0, 1.0));
        assert_eq!(d, 5.0);
    }

    #[test]
    fn test_distances_mt_correctness() {
        let points = random_points(10_000, 0.0..100.0, 8);
        let camera = Point3D::ORIGIN;

        let mut expected = vec![0.0; points.len()];
        distances(&points, &camera, &mut expected);

        for n in [1, 2, 4, 8] {
            let mut out = vec![-1.0; points.len()];
            distances_parallel(&points, &camera, &mut out, NonZeroUsize::new(n).unwrap())
                .unwrap();
            assert_eq!(out, expected, "{} threads", n);
        }
    }

    #[test]
    fn test_empty_points() {
        let mut out: Vec<f64> = vec![];
        distances(&[], &Point3D::ORIGIN, &mut out);
        distances_parallel(&[], &Point3D::ORIGIN, &mut out, NonZeroUsize::new(3).unwrap())
            .unwrap();
    }
}

//! 3D point sets: rotation and distance-to-camera kernels.

pub mod distance;
pub mod rotation;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3D {
    pub const ORIGIN: Point3D = Point3D::new(0.0, 0.0, 0.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Distance from the origin.
    pub fn norm(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    pub fn distance_to(&self, other: &Point3D) -> f64 {
        distance::distance(self, other)
    }
}

/// `count` points with every coordinate drawn uniformly from `range`.
///
/// # Panics
///
/// Panics if `range` is empty.
pub fn random_points(count: usize, range: Range<f64>, seed: u64) -> Vec<Point3D> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            Point3D::new(
                rng.gen_range(range.clone()),
                rng.gen_range(range.clone()),
                rng.gen_range(range.clone()),
            )
        })
        .collect()
}

//! Three-stage rotation about the X, Y and Z axes.

use super::Point3D;
use crate::error::Result;
use crate::threaded::partition::{chunk_len, effective_workers};
use crate::threaded::workers::for_each_worker;
use std::num::NonZeroUsize;
use std::sync::Barrier;
use tracing::debug;

/// Rotation angles in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Angles {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Angles {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Rotation with sines and cosines computed once up front.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation {
    sin_x: f64,
    cos_x: f64,
    sin_y: f64,
    cos_y: f64,
    sin_z: f64,
    cos_z: f64,
}

impl Rotation {
    pub fn from_degrees(angles: Angles) -> Self {
        let (sin_x, cos_x) = angles.x.to_radians().sin_cos();
        let (sin_y, cos_y) = angles.y.to_radians().sin_cos();
        let (sin_z, cos_z) = angles.z.to_radians().sin_cos();
        Self {
            sin_x,
            cos_x,
            sin_y,
            cos_y,
            sin_z,
            cos_z,
        }
    }

    #[inline]
    pub fn apply_x(&self, p: &mut Point3D) {
        let y = p.y * self.cos_x - p.z * self.sin_x;
        let z = p.y * self.sin_x + p.z * self.cos_x;
        p.y = y;
        p.z = z;
    }

    #[inline]
    pub fn apply_y(&self, p: &mut Point3D) {
        let x = p.x * self.cos_y + p.z * self.sin_y;
        let z = -p.x * self.sin_y + p.z * self.cos_y;
        p.x = x;
        p.z = z;
    }

    #[inline]
    pub fn apply_z(&self, p: &mut Point3D) {
        let x = p.x * self.cos_z - p.y * self.sin_z;
        let y = p.x * self.sin_z + p.y * self.cos_z;
        p.x = x;
        p.y = y;
    }

    /// All three stages on a single point.
    pub fn apply(&self, p: &mut Point3D) {
        self.apply_x(p);
        self.apply_y(p);
        self.apply_z(p);
    }
}

/// Rotate every point about X, then Y, then Z. Each stage sweeps the whole
/// set before the next one starts.
pub fn rotate(points: &mut [Point3D], rotation: &Rotation) {
    points.iter_mut().for_each(|p| rotation.apply_x(p));
    points.iter_mut().for_each(|p| rotation.apply_y(p));
    points.iter_mut().for_each(|p| rotation.apply_z(p));
}

/// Multi-threaded [`rotate`].
///
/// Each worker owns one contiguous chunk of points. A barrier separates the
/// X, Y and Z stages: no worker begins a stage until every worker has
/// finished the previous one.
pub fn rotate_parallel(
    points: &mut [Point3D],
    rotation: &Rotation,
    threads: NonZeroUsize,
) -> Result<()> {
    if points.is_empty() {
        return Ok(());
    }

    let len = points.len();
    let workers = effective_workers(len, threads.get());
    let chunk = chunk_len(len, workers);
    let chunks: Vec<&mut [Point3D]> = points.chunks_mut(chunk).collect();
    let barrier = Barrier::new(chunks.len());

    debug!(points = len, workers = chunks.len(), "parallel rotate");

    for_each_worker(chunks, |_, mine| {
        mine.iter_mut().for_each(|p| rotation.apply_x(p));
        barrier.wait();
        mine.iter_mut().for_each(|p| rotation.apply_y(p));
        barrier.wait();
        mine.iter_mut().for_each(|p| rotation.apply_z(p));
    })
}

//! Benchmark parameters and their defaults.

use crate::points::Point3D;
use crate::points::rotation::Angles;
use std::ops::Range;

/// Seed used when none is given.
pub const DEFAULT_SEED: u64 = 42;

/// Matrix shapes benchmarked when none are given.
pub const DEFAULT_SIZES: [(usize, usize); 4] = [(100, 100), (500, 500), (1000, 1000), (2000, 2000)];

/// Transpose and fill benchmarks.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixBenchConfig {
    /// `(rows, cols)` of every matrix to benchmark, in order.
    pub sizes: Vec<(usize, usize)>,
    pub trials: usize,
    pub seed: u64,
}

impl Default for MatrixBenchConfig {
    fn default() -> Self {
        Self {
            sizes: DEFAULT_SIZES.to_vec(),
            trials: 5,
            seed: DEFAULT_SEED,
        }
    }
}

impl MatrixBenchConfig {
    #[must_use]
    pub fn with_sizes(mut self, sizes: Vec<(usize, usize)>) -> Self {
        if !sizes.is_empty() {
            self.sizes = sizes;
        }
        self
    }

    #[must_use]
    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Seed for trial `trial`. Advances every trial so repeated fills
    /// don't rewrite identical values.
    pub fn trial_seed(&self, trial: usize) -> u64 {
        self.seed.wrapping_add(trial as u64)
    }
}

/// 3D rotation benchmark.
#[derive(Debug, Clone, PartialEq)]
pub struct RotationConfig {
    pub angles: Angles,
    pub coord_range: Range<f64>,
    pub seed: u64,
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            angles: Angles::new(30.0, 45.0, 60.0),
            coord_range: -100.0..100.0,
            seed: DEFAULT_SEED,
        }
    }
}

impl RotationConfig {
    #[must_use]
    pub fn with_angles(mut self, angles: Angles) -> Self {
        self.angles = angles;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// Point-to-camera distance benchmark.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceConfig {
    pub points: usize,
    pub runs: usize,
    pub camera: Point3D,
    pub coord_range: Range<f64>,
    pub seed: u64,
}

impl Default for DistanceConfig {
    fn default() -> Self {
        Self {
            points: 1_000_000,
            runs: 10,
            camera: Point3D::ORIGIN,
            coord_range: 0.0..100.0,
            seed: DEFAULT_SEED,
        }
    }
}

impl DistanceConfig {
    #[must_use]
    pub fn with_points(mut self, points: usize) -> Self {
        self.points = points;
        self
    }

    #[must_use]
    pub fn with_runs(mut self, runs: usize) -> Self {
        self.runs = runs;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// Parse a matrix shape written `ROWSxCOLS` (or a single `N` for `N x N`).
pub fn parse_size(s: &str) -> Result<(usize, usize), String> {
    let s = s.trim();
    let parse = |part: &str| {
        part.trim()
            .parse::<usize>()
            .map_err(|e| format!("invalid dimension {:?}: {}", part, e))
    };

    match s.split_once(['x', 'X', '×']) {
        Some((rows, cols)) => Ok((parse(rows)?, parse(cols)?)),
        None => {
            let n = parse(s)?;
            Ok((n, n))
        }
    }
}

//! Min / max / mean reduction of trial timings.

use std::time::Duration;

/// Summary of one benchmark's trial timings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingStats {
    pub trials: usize,
    pub min: Duration,
    pub max: Duration,
    pub mean: Duration,
}

impl TimingStats {
    /// Reduce a set of samples. Returns `None` when there are none.
    pub fn from_samples(samples: &[Duration]) -> Option<Self> {
        let min = *samples.iter().min()?;
        let max = *samples.iter().max()?;
        let total: f64 = samples.iter().map(Duration::as_secs_f64).sum();
        let mean = Duration::from_secs_f64(total / samples.len() as f64);

        Some(Self {
            trials: samples.len(),
            min,
            max,
            mean,
        })
    }

    pub fn min_secs(&self) -> f64 {
        self.min.as_secs_f64()
    }

    pub fn max_secs(&self) -> f64 {
        self.max.as_secs_f64()
    }

    pub fn mean_secs(&self) -> f64 {
        self.mean.as_secs_f64()
    }
}

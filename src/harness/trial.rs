//! Repeated, timed execution of one operation.

use crate::error::Result;
use std::time::{Duration, Instant};
use tracing::debug;

/// Run `op` `trials` times and return the wall-clock time of each run.
///
/// `setup(trial)` builds the input for a trial and is not timed; `op` runs
/// on it and is. The input is dropped after the clock stops. There is no
/// warm-up run: every trial is recorded.
pub fn run_trials<I, S, F>(trials: usize, mut setup: S, mut op: F) -> Result<Vec<Duration>>
where
    S: FnMut(usize) -> I,
    F: FnMut(&mut I) -> Result<()>,
{
    let mut samples = Vec::with_capacity(trials);

    for trial in 0..trials {
        let mut input = setup(trial);

        let start = Instant::now();
        op(&mut input)?;
        let elapsed = start.elapsed();

        debug!(trial, secs = elapsed.as_secs_f64(), "trial finished");
        samples.push(elapsed);
    }

    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_one_sample_per_trial() {
        let mut seen = Vec::new();
        let samples = run_trials(4, |t| t * 2, |x| {
            seen.push(*x);
            Ok(())
        })
        .unwrap();
        assert_eq!(samples.len(), 4);
        assert_eq!(seen, vec![0, 2, 4, 6]);
    }

    #[test]
    fn test_error_stops_trials() {
        let result = run_trials(5, |t| t, |t| {
            if *t == 2 { Err(Error::ZeroThreads) } else { Ok(()) }
        });
        assert!(matches!(result, Err(Error::ZeroThreads)));
    }

    #[test]
    fn test_zero_trials() {
        let samples = run_trials(0, |_| (), |_| Ok(())).unwrap();
        assert!(samples.is_empty());
    }
}

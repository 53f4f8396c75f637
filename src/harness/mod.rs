//! Timing harness shared by every benchmark program: run trials, reduce
//! them to min/max/mean, and read counts from the user.

pub mod prompt;
pub mod stats;
pub mod trial;

pub use prompt::{parse_positive, prompt_positive};
pub use stats::TimingStats;
pub use trial::run_trials;

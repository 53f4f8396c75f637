//! Sequential vs multi-threaded numeric benchmarks.
//!
//! Four small operations, each with a single-threaded baseline and a
//! parallel version that must produce exactly the same result:
//!
//! - matrix transpose
//! - matrix fill with pseudo-random values in `[0, 100)`
//! - rotation of a 3D point set about X, then Y, then Z
//! - distance from every point to a camera
//!
//! plus the harness that times them.
//!
//! ## Usage
//!
//! ```
//! use parlab::{Schedule, thread_count, transpose, transpose_parallel};
//!
//! let src = vec![1, 2, 3,
//!                4, 5, 6];
//! let mut seq = vec![0; 6];
//! let mut par = vec![0; 6];
//!
//! transpose(&src, &mut seq, 2, 3);
//! transpose_parallel(&src, &mut par, 2, 3, thread_count(4)?, Schedule::Strided)?;
//!
//! assert_eq!(seq, vec![1, 4, 2, 5, 3, 6]);
//! assert_eq!(seq, par);
//! # Ok::<(), parlab::Error>(())
//! ```
//!
//! The random fill is deterministic for a seed, however many threads fill
//! the matrix:
//!
//! ```
//! use parlab::{Schedule, fill_parallel, fill_random, thread_count};
//!
//! let mut a = vec![0; 50 * 40];
//! let mut b = vec![0; 50 * 40];
//!
//! fill_random(&mut a, 50, 40, 7);
//! fill_parallel(&mut b, 50, 40, 7, thread_count(3)?, Schedule::Static)?;
//!
//! assert_eq!(a, b);
//! # Ok::<(), parlab::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod harness;
pub mod matrix;
pub mod points;
pub mod threaded;

pub use error::{Error, Result};
pub use matrix::Matrix;
pub use matrix::fill::fill_random;
pub use matrix::transpose::transpose;
pub use points::Point3D;
pub use points::distance::{distance, distances, distances_parallel};
pub use points::rotation::{Angles, Rotation, rotate, rotate_parallel};
pub use threaded::fill_mt::fill_parallel;
pub use threaded::transpose_mt::transpose_parallel;
pub use threaded::{Partition, Schedule, thread_count};

//! Multi-threaded matrix kernels.
//!
//! Every parallel kernel here is a fork-join region: workers are spawned for
//! the call and joined before it returns. How the loop is split among them
//! is a [`Schedule`], which maps onto one of the two [`Partition`] policies.
//!
//! Available implementations:
//! - `transpose_mt`: parallel transpose
//! - `fill_mt`: parallel random fill

pub mod fill_mt;
pub mod partition;
pub mod transpose_mt;
pub mod workers;

pub use partition::Partition;
pub use workers::thread_count;

/// How a matrix kernel's two-level `rows × cols` loop is shared out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Schedule {
    /// Rows are dealt round-robin: worker `k` of `T` takes rows
    /// `k, k + T, k + 2T, ...`.
    Strided,
    /// The loop is flattened to `rows * cols` cells and cut into one
    /// contiguous chunk per worker.
    Static,
}

impl Schedule {
    pub fn partition(self) -> Partition {
        match self {
            Schedule::Strided => Partition::Strided,
            Schedule::Static => Partition::Contiguous,
        }
    }

    /// Length of the index space this schedule partitions.
    pub fn iteration_len(self, rows: usize, cols: usize) -> usize {
        match self {
            Schedule::Strided => rows,
            Schedule::Static => rows * cols,
        }
    }
}

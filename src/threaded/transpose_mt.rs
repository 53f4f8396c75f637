//! Multi-threaded matrix transpose.

use super::Schedule;
use super::partition::effective_workers;
use super::workers::{DisjointSlice, for_each_worker};
use crate::error::Result;
use crate::matrix::transpose::{check_dims, transpose};
use std::num::NonZeroUsize;
use tracing::debug;

/// Multi-threaded transpose: dst = src^T
///
/// Same layout as [`transpose`]. The work is split according to `schedule`:
/// - [`Schedule::Strided`]: worker `k` copies source rows `k, k+T, ...`
///   into the matching destination columns.
/// - [`Schedule::Static`]: the `rows * cols` source cells are cut into one
///   contiguous chunk per worker.
///
/// The output is identical to the sequential transpose for every thread
/// count. When only one worker would have anything to do, the sequential
/// kernel runs on the caller's thread.
///
/// # Panics
///
/// Panics if either slice is not `rows * cols` long.
pub fn transpose_parallel<T>(
    src: &[T],
    dst: &mut [T],
    rows: usize,
    cols: usize,
    threads: NonZeroUsize,
    schedule: Schedule,
) -> Result<()>
where
    T: Copy + Send + Sync,
{
    check_dims(src.len(), dst.len(), rows, cols);

    let len = schedule.iteration_len(rows, cols);
    let workers = effective_workers(len, threads.get());

    if workers == 1 {
        transpose(src, dst, rows, cols);
        return Ok(());
    }

    debug!(rows, cols, workers, ?schedule, "parallel transpose");

    let partition = schedule.partition();
    let out = DisjointSlice::new(dst);

    for_each_worker((0..workers).collect::<Vec<usize>>(), |_, worker| match schedule {
        Schedule::Strided => {
            for i in partition.indices(rows, workers, worker) {
                let row = &src[i * cols..(i + 1) * cols];
                for (j, &value) in row.iter().enumerate() {
                    // SAFETY: destination column `i` belongs to the single
                    // worker that owns source row `i`.
                    unsafe { out.write(j * rows + i, value) };
                }
            }
        }
        Schedule::Static => {
            for cell in partition.indices(len, workers, worker) {
                let (i, j) = (cell / cols, cell % cols);
                // SAFETY: cell -> (i, j) -> j*rows+i is a bijection, and each
                // cell is owned by exactly one worker.
                unsafe { out.write(j * rows + i, src[cell]) };
            }
        }
    })
}

//! Multi-threaded random fill.

use super::Schedule;
use super::partition::{chunk_len, effective_workers};
use super::workers::for_each_worker;
use crate::error::Result;
use crate::matrix::fill::{fill_random, fill_row, row_stream, row_stream_at};
use std::num::NonZeroUsize;
use tracing::debug;

/// Multi-threaded version of [`fill_random`].
///
/// Rows draw from per-row generators, so the matrix is identical to the
/// sequential fill with the same seed regardless of `threads` and
/// `schedule`. Nothing is shared between workers but the seed.
///
/// # Panics
///
/// Panics if `dst.len() != rows * cols`.
pub fn fill_parallel(
    dst: &mut [i32],
    rows: usize,
    cols: usize,
    seed: u64,
    threads: NonZeroUsize,
    schedule: Schedule,
) -> Result<()> {
    assert_eq!(
        dst.len(),
        rows * cols,
        "dst: expected {}x{}={} elements",
        rows,
        cols,
        rows * cols
    );

    let len = schedule.iteration_len(rows, cols);
    let workers = effective_workers(len, threads.get());

    if workers == 1 || cols == 0 {
        fill_random(dst, rows, cols, seed);
        return Ok(());
    }

    debug!(rows, cols, workers, ?schedule, "parallel fill");

    match schedule {
        Schedule::Strided => {
            let partition = schedule.partition();
            let mut owned: Vec<Vec<(usize, &mut [i32])>> =
                (0..workers).map(|_| Vec::new()).collect();
            for (row, cells) in dst.chunks_mut(cols).enumerate() {
                owned[partition.owner(row, rows, workers)].push((row, cells));
            }

            for_each_worker(owned, |_, my_rows| {
                for (row, cells) in my_rows {
                    fill_row(cells, &mut row_stream(seed, row));
                }
            })
        }
        Schedule::Static => {
            let chunk = chunk_len(len, workers);
            let chunks: Vec<(usize, &mut [i32])> = dst
                .chunks_mut(chunk)
                .enumerate()
                .map(|(k, cells)| (k * chunk, cells))
                .collect();

            for_each_worker(chunks, |_, (start, cells)| {
                fill_cells(start, cells, cols, seed);
            })
        }
    }
}

/// Fill a run of cells beginning at flat index `start`, which may begin
/// and end in the middle of a row.
fn fill_cells(start: usize, cells: &mut [i32], cols: usize, seed: u64) {
    let mut cell = start;
    let mut rest = cells;

    while !rest.is_empty() {
        let (row, col) = (cell / cols, cell % cols);
        let take = (cols - col).min(rest.len());
        let (head, tail) = std::mem::take(&mut rest).split_at_mut(take);

        fill_row(head, &mut row_stream_at(seed, row, col));

        cell += take;
        rest = tail;
    }
}

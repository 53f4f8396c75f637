//! Random matrix fill.
//!
//! Each row draws from its own generator, seeded from `(seed, row)`. Whoever
//! fills a row (one thread, or any worker of a parallel fill) produces the
//! same values, so the result depends only on the seed and the shape.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Smallest value written by the fill (inclusive).
pub const FILL_MIN: i32 = 0;
/// Largest value written by the fill (exclusive).
pub const FILL_MAX: i32 = 100;

const ROW_SEED_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

/// Generator for one row of a fill seeded with `seed`.
pub fn row_stream(seed: u64, row: usize) -> StdRng {
    StdRng::seed_from_u64(seed ^ (row as u64).wrapping_mul(ROW_SEED_STRIDE))
}

/// Generator for `row`, already advanced past the first `col` cells.
pub fn row_stream_at(seed: u64, row: usize, col: usize) -> StdRng {
    let mut rng = row_stream(seed, row);
    for _ in 0..col {
        next_cell(&mut rng);
    }
    rng
}

#[inline]
pub fn next_cell(rng: &mut StdRng) -> i32 {
    rng.gen_range(FILL_MIN..FILL_MAX)
}

/// Fill one row (or the tail of one row) from `rng`.
pub fn fill_row(cells: &mut [i32], rng: &mut StdRng) {
    for cell in cells {
        *cell = next_cell(rng);
    }
}

/// Fill a rows × cols row-major matrix with values in `[0, 100)`.
///
/// # Panics
///
/// Panics if `dst.len() != rows * cols`.
pub fn fill_random(dst: &mut [i32], rows: usize, cols: usize, seed: u64) {
    assert_eq!(
        dst.len(),
        rows * cols,
        "dst: expected {}x{}={} elements",
        rows,
        cols,
        rows * cols
    );
    if cols == 0 {
        return;
    }

    for (row, cells) in dst.chunks_mut(cols).enumerate() {
        fill_row(cells, &mut row_stream(seed, row));
    }
}

//! Integer matrices and the sequential kernels.
//!
//! The sequential versions are the baselines the threaded kernels are
//! checked against and timed against.

pub mod fill;
pub mod transpose;

/// Row-major `rows × cols` matrix of `i32`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<i32>,
}

impl Matrix {
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0; rows * cols],
        }
    }

    /// # Panics
    ///
    /// Panics if `data.len() != rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<i32>) -> Self {
        assert_eq!(
            data.len(),
            rows * cols,
            "expected {}x{}={} elements",
            rows,
            cols,
            rows * cols
        );
        Self { rows, cols, data }
    }

    /// Matrix of the given shape filled with values in `[0, 100)`.
    pub fn random(rows: usize, cols: usize, seed: u64) -> Self {
        let mut m = Self::zeros(rows, cols);
        fill::fill_random(&mut m.data, rows, cols, seed);
        m
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Option<i32> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [i32] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<i32> {
        self.data
    }

    pub fn transposed(&self) -> Matrix {
        let mut out = Matrix::zeros(self.cols, self.rows);
        transpose::transpose(&self.data, &mut out.data, self.rows, self.cols);
        out
    }

    /// Iterate over rows as slices. Yields nothing when `cols == 0`.
    pub fn row_iter(&self) -> impl Iterator<Item = &[i32]> {
        self.data.chunks(self.cols.max(1))
    }
}

//! Row-major dense matrix
//!
//! Stores an `num_rows x num_cols` matrix in a flat buffer where entry
//! `(i, j)` lives at `i * num_cols + j`.

use crate::traits::{LinearOperator, RealField};
use ndarray::{Array1, Array2};
use std::ops::{Index, IndexMut, Range};

/// Dense matrix in row-major order
#[derive(Debug, Clone, PartialEq)]
pub struct DenseMatrix<T: RealField> {
    /// Number of rows
    pub num_rows: usize,
    /// Number of columns
    pub num_cols: usize,
    /// Entries in row-major order, `values.len() == num_rows * num_cols`
    pub values: Vec<T>,
}

impl<T: RealField> DenseMatrix<T> {
    /// Create a zero matrix
    pub fn new(num_rows: usize, num_cols: usize) -> Self {
        Self {
            num_rows,
            num_cols,
            values: vec![T::zero(); num_rows * num_cols],
        }
    }

    /// Create a matrix from a slice of rows
    ///
    /// # Panics
    ///
    /// Panics if the rows do not all have the same length
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Self {
        let num_rows = rows.len();
        let num_cols = rows.first().map_or(0, |r| r.as_ref().len());
        let mut values = Vec::with_capacity(num_rows * num_cols);
        for row in rows {
            let row = row.as_ref();
            assert_eq!(row.len(), num_cols, "All rows must have the same length");
            values.extend_from_slice(row);
        }
        Self {
            num_rows,
            num_cols,
            values,
        }
    }

    /// Create a matrix from an ndarray dense matrix
    pub fn from_dense(dense: &Array2<T>) -> Self {
        let (num_rows, num_cols) = dense.dim();
        // iter() walks in logical (row-major) order regardless of memory layout
        let values = dense.iter().copied().collect();
        Self {
            num_rows,
            num_cols,
            values,
        }
    }

    /// Convert to an ndarray dense matrix
    pub fn to_dense(&self) -> Array2<T> {
        Array2::from_shape_fn((self.num_rows, self.num_cols), |(i, j)| self[(i, j)])
    }

    /// Create an identity matrix
    pub fn identity(n: usize) -> Self {
        let mut m = Self::new(n, n);
        for i in 0..n {
            m[(i, i)] = T::one();
        }
        m
    }

    /// Create a square diagonal matrix
    pub fn from_diag(diag: &Array1<T>) -> Self {
        let n = diag.len();
        let mut m = Self::new(n, n);
        for (i, &d) in diag.iter().enumerate() {
            m[(i, i)] = d;
        }
        m
    }

    #[inline]
    fn row_range(&self, i: usize) -> Range<usize> {
        let start = i * self.num_cols;
        start..start + self.num_cols
    }

    /// Row `i` as a slice
    #[inline]
    pub fn row(&self, i: usize) -> &[T] {
        assert!(i < self.num_rows, "Row index out of bounds");
        &self.values[self.row_range(i)]
    }

    /// Row `i` as a mutable slice
    #[inline]
    pub fn row_mut(&mut self, i: usize) -> &mut [T] {
        assert!(i < self.num_rows, "Row index out of bounds");
        let range = self.row_range(i);
        &mut self.values[range]
    }

    /// Swap two rows in place
    pub fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        let cols = self.num_cols;
        let (head, tail) = self.values.split_at_mut(hi * cols);
        head[lo * cols..(lo + 1) * cols].swap_with_slice(&mut tail[..cols]);
    }

    /// Check if the matrix is square
    pub fn is_square(&self) -> bool {
        self.num_rows == self.num_cols
    }

    /// Extract the main diagonal
    pub fn diagonal(&self) -> Array1<T> {
        let n = self.num_rows.min(self.num_cols);
        Array1::from_iter((0..n).map(|i| self[(i, i)]))
    }

    /// Sum of |a_ij| over the off-diagonal entries of row `i`
    pub fn off_diagonal_abs_sum(&self, i: usize) -> T {
        self.row(i)
            .iter()
            .enumerate()
            .filter(|&(j, _)| j != i)
            .fold(T::zero(), |acc, (_, &v)| acc + v.abs())
    }

    /// Check if every off-diagonal entry is exactly zero
    pub fn is_diagonal(&self) -> bool {
        (0..self.num_rows).all(|i| {
            self.row(i)
                .iter()
                .enumerate()
                .all(|(j, &v)| j == i || v == T::zero())
        })
    }

    /// |a_ii| >= sum_{j != i} |a_ij| for every row, strictly for at least one
    pub fn is_diagonally_dominant(&self) -> bool {
        if !self.is_square() || self.num_rows == 0 {
            return false;
        }
        let mut strict_rows = 0;
        for i in 0..self.num_rows {
            let diag = self[(i, i)].abs();
            let off = self.off_diagonal_abs_sum(i);
            if diag < off {
                return false;
            }
            if diag > off {
                strict_rows += 1;
            }
        }
        strict_rows > 0
    }

    /// |a_ii| > sum_{j != i} |a_ij| for every row
    pub fn is_strictly_diagonally_dominant(&self) -> bool {
        self.is_square()
            && self.num_rows > 0
            && (0..self.num_rows).all(|i| self[(i, i)].abs() > self.off_diagonal_abs_sum(i))
    }

    /// Check that every entry is finite
    pub fn is_finite(&self) -> bool {
        self.values.iter().all(|v| v.is_finite())
    }

    /// Matrix-vector product: y = A * x
    pub fn matvec(&self, x: &Array1<T>) -> Array1<T> {
        assert_eq!(x.len(), self.num_cols, "Input vector size mismatch");

        let mut y = Array1::from_elem(self.num_rows, T::zero());
        for i in 0..self.num_rows {
            y[i] = self
                .row(i)
                .iter()
                .zip(x.iter())
                .fold(T::zero(), |acc, (&a, &xj)| acc + a * xj);
        }
        y
    }
}

impl<T: RealField> Index<(usize, usize)> for DenseMatrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &T {
        assert!(
            i < self.num_rows && j < self.num_cols,
            "Index ({i}, {j}) out of bounds for {}x{} matrix",
            self.num_rows,
            self.num_cols
        );
        &self.values[i * self.num_cols + j]
    }
}

impl<T: RealField> IndexMut<(usize, usize)> for DenseMatrix<T> {
    #[inline]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        assert!(
            i < self.num_rows && j < self.num_cols,
            "Index ({i}, {j}) out of bounds for {}x{} matrix",
            self.num_rows,
            self.num_cols
        );
        &mut self.values[i * self.num_cols + j]
    }
}

impl<T: RealField> LinearOperator<T> for DenseMatrix<T> {
    fn num_rows(&self) -> usize {
        self.num_rows
    }

    fn num_cols(&self) -> usize {
        self.num_cols
    }

    fn apply(&self, x: &Array1<T>) -> Array1<T> {
        self.matvec(x)
    }
}

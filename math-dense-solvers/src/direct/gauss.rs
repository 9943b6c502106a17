//! Gaussian elimination solver
//!
//! Reduces the augmented system [A | b] to upper-triangular form with partial
//! pivoting, then solves by back substitution. The caller's A and b are never
//! modified: elimination works on an owned augmented copy.

use crate::dense::DenseMatrix;
use crate::error::SolverError;
use crate::traits::RealField;
use ndarray::Array1;

/// Pivot magnitude below which a column is treated as singular
pub const DEFAULT_PIVOT_THRESHOLD: f64 = 1e-12;

/// Gaussian elimination configuration
#[derive(Debug, Clone)]
pub struct GaussConfig<R> {
    /// Smallest acceptable pivot magnitude
    pub pivot_threshold: R,
}

impl<R: RealField> Default for GaussConfig<R> {
    fn default() -> Self {
        Self {
            pivot_threshold: R::from_f64_lossy(DEFAULT_PIVOT_THRESHOLD),
        }
    }
}

/// Upper-triangular augmented system produced by forward elimination
///
/// Row `i` holds the reduced equation `sum_{j>=i} u_ij x_j = c_i`, with the
/// right-hand side `c` stored in the last column.
#[derive(Debug, Clone)]
pub struct GaussElimination<T: RealField> {
    augmented: DenseMatrix<T>,
    row_swaps: usize,
    pivot_threshold: T,
}

impl<T: RealField> GaussElimination<T> {
    /// System dimension
    pub fn n(&self) -> usize {
        self.augmented.num_rows
    }

    /// Number of row interchanges performed while pivoting
    pub fn num_row_swaps(&self) -> usize {
        self.row_swaps
    }

    /// The reduced augmented matrix, n x (n + 1)
    pub fn augmented(&self) -> &DenseMatrix<T> {
        &self.augmented
    }

    /// Determinant of the original matrix: product of pivots with the
    /// permutation sign
    pub fn determinant(&self) -> T {
        let product = (0..self.n()).fold(T::one(), |acc, i| acc * self.augmented[(i, i)]);
        if self.row_swaps % 2 == 1 {
            -product
        } else {
            product
        }
    }

    /// Back substitution on the reduced system
    ///
    /// Fails with [`SolverError::ZeroDiagonal`] if a diagonal entry is below the
    /// pivot threshold; no partial solution is returned.
    pub fn back_substitute(&self) -> Result<Array1<T>, SolverError> {
        let n = self.n();
        let mut x = Array1::from_elem(n, T::zero());

        for i in (0..n).rev() {
            let row = self.augmented.row(i);
            let u_ii = row[i];
            if u_ii.is_zero_approx(self.pivot_threshold) {
                log::warn!("Zero diagonal entry in row {i} during back substitution");
                return Err(SolverError::ZeroDiagonal { row: i });
            }
            let mut sum = T::zero();
            for j in (i + 1)..n {
                sum += row[j] * x[j];
            }
            x[i] = (row[n] - sum) / u_ii;
            if !x[i].is_finite() {
                log::warn!("Back substitution overflowed in row {i}");
                return Err(SolverError::Overflow { column: i });
            }
        }

        Ok(x)
    }
}

fn check_system<T: RealField>(a: &DenseMatrix<T>, b: &Array1<T>) -> Result<(), SolverError> {
    let n = a.num_rows;
    if n != a.num_cols {
        return Err(SolverError::DimensionMismatch {
            expected: n,
            got: a.num_cols,
        });
    }
    if b.len() != n {
        return Err(SolverError::DimensionMismatch {
            expected: n,
            got: b.len(),
        });
    }
    if n == 0 {
        return Err(SolverError::InvalidInput("empty system".to_string()));
    }
    if !a.is_finite() || b.iter().any(|v| !v.is_finite()) {
        return Err(SolverError::InvalidInput(
            "system contains non-finite entries".to_string(),
        ));
    }
    Ok(())
}

/// Forward elimination with partial pivoting
///
/// For each column k the row among k..n with the largest |a_ik| is swapped
/// into position k and column k is eliminated from every row below it.
pub fn gauss_eliminate<T: RealField>(
    a: &DenseMatrix<T>,
    b: &Array1<T>,
    config: &GaussConfig<T>,
) -> Result<GaussElimination<T>, SolverError> {
    check_system(a, b)?;
    let n = a.num_rows;

    let mut aug = DenseMatrix::new(n, n + 1);
    for i in 0..n {
        let row = aug.row_mut(i);
        row[..n].copy_from_slice(a.row(i));
        row[n] = b[i];
    }

    let mut row_swaps = 0;
    for k in 0..n {
        // Find pivot
        let mut max_val = aug[(k, k)].abs();
        let mut pivot_row = k;
        for i in (k + 1)..n {
            let val = aug[(i, k)].abs();
            if val > max_val {
                max_val = val;
                pivot_row = i;
            }
        }

        if !max_val.is_finite() {
            log::warn!("Elimination overflowed in column {k}");
            return Err(SolverError::Overflow { column: k });
        }

        if max_val.is_zero_approx(config.pivot_threshold) {
            log::warn!(
                "Matrix is singular or nearly singular: best pivot {:.3e} in column {}",
                max_val.to_f64_lossy(),
                k
            );
            return Err(SolverError::SingularMatrix {
                column: k,
                pivot: max_val.to_f64_lossy(),
            });
        }

        if pivot_row != k {
            aug.swap_rows(k, pivot_row);
            row_swaps += 1;
        }

        let pivot = aug[(k, k)];
        for i in (k + 1)..n {
            let factor = aug[(i, k)] / pivot;
            if factor == T::zero() {
                continue;
            }
            for j in k..=n {
                let update = factor * aug[(k, j)];
                aug[(i, j)] -= update;
            }
        }
    }

    Ok(GaussElimination {
        augmented: aug,
        row_swaps,
        pivot_threshold: config.pivot_threshold,
    })
}

/// Solve Ax = b by Gaussian elimination with partial pivoting
///
/// Uses the default pivot threshold of [`DEFAULT_PIVOT_THRESHOLD`].
pub fn gauss_solve<T: RealField>(
    a: &DenseMatrix<T>,
    b: &Array1<T>,
) -> Result<Array1<T>, SolverError> {
    gauss_solve_with_config(a, b, &GaussConfig::default())
}

/// Solve Ax = b by Gaussian elimination with an explicit configuration
pub fn gauss_solve_with_config<T: RealField>(
    a: &DenseMatrix<T>,
    b: &Array1<T>,
    config: &GaussConfig<T>,
) -> Result<Array1<T>, SolverError> {
    gauss_eliminate(a, b, config)?.back_substitute()
}

//! Stationary iterative solvers for linear systems
//!
//! This module provides the two classical fixed-point splittings:
//! - [`jacobi`]: every row update reads only the previous full iterate
//! - [`gauss_seidel`]: every row update reads the newest available components
//!
//! Both start from a zero iterate (or a caller guess with the `_with_guess`
//! variants) and stop when the infinity-norm step between consecutive iterates
//! falls below the tolerance, or when the iteration budget is spent. Running
//! out of iterations is not an error: check [`StationarySolution::converged`].

mod gauss_seidel;
mod jacobi;

pub use gauss_seidel::{gauss_seidel, gauss_seidel_with_guess};
pub use jacobi::{jacobi, jacobi_with_guess};

use crate::dense::DenseMatrix;
use crate::error::SolverError;
use crate::traits::RealField;
use ndarray::Array1;

/// Stationary solver configuration
#[derive(Debug, Clone)]
pub struct StationaryConfig<R> {
    /// Maximum number of sweeps
    pub max_iterations: usize,
    /// Convergence threshold on max_i |x_i^(k+1) - x_i^(k)|
    pub tolerance: R,
    /// Log progress every N iterations (0 = no output)
    pub print_interval: usize,
}

impl<R: RealField> Default for StationaryConfig<R> {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
            tolerance: R::from_f64_lossy(1e-3),
            print_interval: 0,
        }
    }
}

impl<R: RealField> StationaryConfig<R> {
    /// Configuration with the given tolerance and iteration cap
    pub fn new(tolerance: R, max_iterations: usize) -> Self {
        Self {
            max_iterations,
            tolerance,
            print_interval: 0,
        }
    }
}

/// Stationary solver result
#[derive(Debug, Clone)]
pub struct StationarySolution<T: RealField> {
    /// Last iterate reached
    pub x: Array1<T>,
    /// Number of sweeps performed, never more than `max_iterations`
    pub iterations: usize,
    /// Infinity-norm step of the last sweep
    pub final_step: T,
    /// Whether the step fell below the tolerance
    pub converged: bool,
}

/// Check the preconditions shared by both stationary methods
fn validate<T: RealField>(
    a: &DenseMatrix<T>,
    b: &Array1<T>,
    x0: &Array1<T>,
    config: &StationaryConfig<T>,
) -> Result<(), SolverError> {
    let n = a.num_rows;
    if !a.is_square() {
        return Err(SolverError::DimensionMismatch {
            expected: n,
            got: a.num_cols,
        });
    }
    for len in [b.len(), x0.len()] {
        if len != n {
            return Err(SolverError::DimensionMismatch {
                expected: n,
                got: len,
            });
        }
    }
    if n == 0 {
        return Err(SolverError::InvalidInput("empty system".to_string()));
    }
    if !(config.tolerance > T::zero()) {
        return Err(SolverError::InvalidInput(format!(
            "tolerance must be positive, got {}",
            config.tolerance
        )));
    }
    if config.max_iterations == 0 {
        return Err(SolverError::InvalidInput(
            "max_iterations must be positive".to_string(),
        ));
    }
    if !a.is_finite() || b.iter().chain(x0.iter()).any(|v| !v.is_finite()) {
        return Err(SolverError::InvalidInput(
            "system contains non-finite entries".to_string(),
        ));
    }
    if let Some(row) = (0..n).find(|&i| a[(i, i)] == T::zero()) {
        return Err(SolverError::InvalidInput(format!(
            "zero diagonal entry in row {row}"
        )));
    }
    Ok(())
}

/// sum_{j != i} row_j * x_j
///
/// Structural zeros are skipped so a non-finite component cannot leak into
/// rows that do not depend on it.
#[inline]
fn off_diagonal_dot<T: RealField>(row: &[T], i: usize, x: &Array1<T>) -> T {
    row.iter()
        .zip(x.iter())
        .enumerate()
        .filter(|&(j, (&a_ij, _))| j != i && a_ij != T::zero())
        .fold(T::zero(), |acc, (_, (&a_ij, &xj))| acc + a_ij * xj)
}

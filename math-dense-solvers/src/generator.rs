//! Test system generation
//!
//! Random strictly diagonally dominant systems for the benchmark sweep, and the
//! fixed 3x3 demonstration system.

use crate::dense::DenseMatrix;
use crate::error::SolverError;
use ndarray::{Array1, array};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Parameters of the diagonally dominant generator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Off-diagonal entries are drawn uniformly from [-bound, bound]
    pub off_diagonal_bound: f64,
    /// Added to the row's off-diagonal absolute sum to form the diagonal
    pub diagonal_margin: f64,
    /// Value of every right-hand side entry
    pub rhs_value: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            off_diagonal_bound: 0.1,
            diagonal_margin: 1.0,
            rhs_value: 1.0,
        }
    }
}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<(), SolverError> {
        if !(self.off_diagonal_bound >= 0.0 && self.off_diagonal_bound.is_finite()) {
            return Err(SolverError::InvalidInput(format!(
                "off_diagonal_bound must be finite and non-negative, got {}",
                self.off_diagonal_bound
            )));
        }
        if !(self.diagonal_margin > 0.0 && self.diagonal_margin.is_finite()) {
            return Err(SolverError::InvalidInput(format!(
                "diagonal_margin must be finite and positive, got {}",
                self.diagonal_margin
            )));
        }
        if !self.rhs_value.is_finite() {
            return Err(SolverError::InvalidInput(format!(
                "rhs_value must be finite, got {}",
                self.rhs_value
            )));
        }
        Ok(())
    }
}

/// Generate an n x n strictly diagonally dominant system
///
/// Each diagonal entry is the absolute sum of its row's off-diagonal entries
/// plus `diagonal_margin`, so dominance holds for every `n` and every draw.
/// The right-hand side is constant.
pub fn diagonally_dominant_system<R: Rng + ?Sized>(
    n: usize,
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<(DenseMatrix<f64>, Array1<f64>), SolverError> {
    if n == 0 {
        return Err(SolverError::InvalidInput(
            "system size must be positive".to_string(),
        ));
    }
    config.validate()?;

    let bound = config.off_diagonal_bound;
    let mut a = DenseMatrix::new(n, n);
    for i in 0..n {
        let mut row_sum = 0.0;
        let row = a.row_mut(i);
        for (j, entry) in row.iter_mut().enumerate() {
            if j == i {
                continue;
            }
            let val = rng.random_range(-bound..=bound);
            *entry = val;
            row_sum += val.abs();
        }
        row[i] = row_sum + config.diagonal_margin;
    }
    let b = Array1::from_elem(n, config.rhs_value);

    Ok((a, b))
}

/// The 3x3 demonstration system
///
/// ```text
/// [1  3 -2] [x1]   [ 6]
/// [2 -1  1] [x2] = [ 3]
/// [4  2 -3] [x3]   [11]
/// ```
///
/// det(A) = 15 and the exact solution is x = [32/15, 4/3, 1/15]. The matrix is
/// not diagonally dominant and both stationary methods diverge on it.
pub fn reference_system() -> (DenseMatrix<f64>, Array1<f64>) {
    let a = DenseMatrix::from_rows(&[
        [1.0, 3.0, -2.0],
        [2.0, -1.0, 1.0],
        [4.0, 2.0, -3.0],
    ]);
    (a, array![6.0, 3.0, 11.0])
}

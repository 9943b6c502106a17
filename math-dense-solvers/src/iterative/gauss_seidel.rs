//! Gauss-Seidel solver
//!
//! Sweeps the rows in order and overwrites each component as soon as it is
//! computed, so row i already sees the new values of rows 0..i:
//!
//! ```text
//! x_i <- (b_i - sum_{j < i} a_ij x_j^(k+1) - sum_{j > i} a_ij x_j^(k)) / a_ii
//! ```

use super::{StationaryConfig, StationarySolution, off_diagonal_dot, validate};
use crate::dense::DenseMatrix;
use crate::error::SolverError;
use crate::traits::RealField;
use ndarray::Array1;

/// Solve Ax = b with the Gauss-Seidel method, starting from the zero vector
pub fn gauss_seidel<T: RealField>(
    a: &DenseMatrix<T>,
    b: &Array1<T>,
    config: &StationaryConfig<T>,
) -> Result<StationarySolution<T>, SolverError> {
    let x0 = Array1::from_elem(b.len(), T::zero());
    gauss_seidel_with_guess(a, b, &x0, config)
}

/// Solve Ax = b with the Gauss-Seidel method, starting from `x0`
pub fn gauss_seidel_with_guess<T: RealField>(
    a: &DenseMatrix<T>,
    b: &Array1<T>,
    x0: &Array1<T>,
    config: &StationaryConfig<T>,
) -> Result<StationarySolution<T>, SolverError> {
    validate(a, b, x0, config)?;

    let n = b.len();
    let decoupled = a.is_diagonal();

    let mut x = x0.clone();
    let mut step = T::infinity();

    for iter in 0..config.max_iterations {
        let mut max_diff = T::zero();
        for i in 0..n {
            let row = a.row(i);
            let new_xi = (b[i] - off_diagonal_dot(row, i, &x)) / row[i];
            let diff = (new_xi - x[i]).abs();
            // NaN must win so divergence is detected below
            if diff > max_diff || diff.is_nan() {
                max_diff = diff;
            }
            x[i] = new_xi;
        }
        step = max_diff;

        if config.print_interval > 0 && (iter + 1) % config.print_interval == 0 {
            log::info!(
                "Gauss-Seidel iteration {}: step = {:.6e}",
                iter + 1,
                step.to_f64_lossy()
            );
        }

        if !step.is_finite() {
            log::warn!("Gauss-Seidel diverged at iteration {}", iter + 1);
            return Ok(StationarySolution {
                x,
                iterations: iter + 1,
                final_step: step,
                converged: false,
            });
        }

        if step < config.tolerance || decoupled {
            return Ok(StationarySolution {
                x,
                iterations: iter + 1,
                final_step: step,
                converged: true,
            });
        }
    }

    log::warn!(
        "Gauss-Seidel did not converge after {} iterations (step = {:.3e})",
        config.max_iterations,
        step.to_f64_lossy()
    );
    Ok(StationarySolution {
        x,
        iterations: config.max_iterations,
        final_step: step,
        converged: false,
    })
}

//! Jacobi solver
//!
//! Each sweep computes every component from the previous full iterate:
//!
//! ```text
//! x_i^(k+1) = (b_i - sum_{j != i} a_ij x_j^(k)) / a_ii
//! ```
//!
//! The row updates within a sweep are independent of each other.

use super::{StationaryConfig, StationarySolution, off_diagonal_dot, validate};
use crate::dense::DenseMatrix;
use crate::error::SolverError;
use crate::norms::max_abs_diff;
use crate::traits::RealField;
use ndarray::Array1;

/// Solve Ax = b with the Jacobi method, starting from the zero vector
pub fn jacobi<T: RealField>(
    a: &DenseMatrix<T>,
    b: &Array1<T>,
    config: &StationaryConfig<T>,
) -> Result<StationarySolution<T>, SolverError> {
    let x0 = Array1::from_elem(b.len(), T::zero());
    jacobi_with_guess(a, b, &x0, config)
}

/// Solve Ax = b with the Jacobi method, starting from `x0`
pub fn jacobi_with_guess<T: RealField>(
    a: &DenseMatrix<T>,
    b: &Array1<T>,
    x0: &Array1<T>,
    config: &StationaryConfig<T>,
) -> Result<StationarySolution<T>, SolverError> {
    validate(a, b, x0, config)?;

    let n = b.len();
    // Without coupling the first sweep lands on the fixed point
    let decoupled = a.is_diagonal();

    let mut x = x0.clone();
    let mut x_old = x0.clone();
    let mut step = T::infinity();

    for iter in 0..config.max_iterations {
        for i in 0..n {
            let row = a.row(i);
            x[i] = (b[i] - off_diagonal_dot(row, i, &x_old)) / row[i];
        }

        step = max_abs_diff(&x, &x_old);

        if config.print_interval > 0 && (iter + 1) % config.print_interval == 0 {
            log::info!(
                "Jacobi iteration {}: step = {:.6e}",
                iter + 1,
                step.to_f64_lossy()
            );
        }

        if !step.is_finite() {
            log::warn!("Jacobi diverged at iteration {}", iter + 1);
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

        x_old.assign(&x);
    }

    log::warn!(
        "Jacobi did not converge after {} iterations (step = {:.3e})",
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direct::gauss_solve;
    use crate::norms::error_norm2;
    use approx::assert_relative_eq;
    use ndarray::array;

    fn tridiagonal() -> (DenseMatrix<f64>, Array1<f64>) {
        let a = DenseMatrix::from_rows(&[
            [4.0, -1.0, 0.0, 0.0],
            [-1.0, 4.0, -1.0, 0.0],
            [0.0, -1.0, 4.0, -1.0],
            [0.0, 0.0, -1.0, 4.0],
        ]);
        (a, array![1.0, 2.0, 3.0, 4.0])
    }

    #[test]
    fn test_jacobi_converges() {
        let (a, b) = tridiagonal();
        let config = StationaryConfig::new(1e-10, 1000);

        let solution = jacobi(&a, &b, &config).unwrap();
        assert!(solution.converged);
        assert_eq!(solution.iterations, 27);
        assert!(solution.final_step < 1e-10);

        let reference = gauss_solve(&a, &b).unwrap();
        assert!(error_norm2(&solution.x, &reference) < 1e-9);
        assert_relative_eq!(solution.x[0], 102.0 / 209.0, epsilon = 1e-9);
    }

    #[test]
    fn test_jacobi_single_sweep() {
        let (a, b) = tridiagonal();
        let config = StationaryConfig::new(1e-10, 1);

        let solution = jacobi(&a, &b, &config).unwrap();
        assert!(!solution.converged);
        assert_eq!(solution.iterations, 1);
        // From zero, one sweep gives b_i / a_ii
        assert_eq!(solution.x, array![0.25, 0.5, 0.75, 1.0]);
        assert_relative_eq!(solution.final_step, 1.0);
    }

    #[test]
    fn test_jacobi_one_by_one() {
        let a = DenseMatrix::from_rows(&[[3.0_f64]]);
        let b = array![7.0_f64];

        let solution = jacobi(&a, &b, &StationaryConfig::default()).unwrap();
        assert!(solution.converged);
        assert_eq!(solution.iterations, 1);
        assert_eq!(solution.x[0], 7.0 / 3.0);
    }

    #[test]
    fn test_jacobi_with_exact_guess() {
        let a = DenseMatrix::from_rows(&[[2.0_f64, 1.0], [1.0, 2.0]]);
        let b = array![3.0_f64, 3.0];
        let guess = array![1.0_f64, 1.0];

        let config = StationaryConfig::new(1e-12, 50);
        let solution = jacobi_with_guess(&a, &b, &guess, &config).unwrap();
        assert!(solution.converged);
        assert_eq!(solution.iterations, 1);
        assert_eq!(solution.x, guess);
        assert_eq!(solution.final_step, 0.0);
    }

    #[test]
    fn test_jacobi_budget_exhausted() {
        let (a, b) = tridiagonal();
        let solution = jacobi(&a, &b, &StationaryConfig::new(1e-14, 5)).unwrap();
        assert!(!solution.converged);
        assert_eq!(solution.iterations, 5);
        assert!(solution.final_step > 1e-14);
    }

    #[test]
    fn test_jacobi_divergent_system() {
        let a = DenseMatrix::from_rows(&[
            [1.0_f64, 3.0, -2.0],
            [2.0, -1.0, 1.0],
            [4.0, 2.0, -3.0],
        ]);
        let b = array![6.0_f64, 3.0, 11.0];

        let solution = jacobi(&a, &b, &StationaryConfig::default()).unwrap();
        assert!(!solution.converged);
        assert!(solution.iterations <= 1000);
    }

    #[test]
    fn test_jacobi_overflow_not_converged() {
        // Decoupled, but 1e10 / 1e-310 overflows
        let a = DenseMatrix::from_diag(&array![1e-310_f64, 1.0]);
        let b = array![1e10_f64, 1.0];

        let solution = jacobi(&a, &b, &StationaryConfig::default()).unwrap();
        assert!(!solution.converged);
        assert_eq!(solution.iterations, 1);
        assert!(solution.x[0].is_infinite());
        assert_eq!(solution.x[1], 1.0);
        assert!(!solution.final_step.is_finite());
    }

    #[test]
    fn test_jacobi_progress_logging() {
        let (a, b) = tridiagonal();
        let quiet = jacobi(&a, &b, &StationaryConfig::new(1e-10, 1000)).unwrap();

        let config = StationaryConfig {
            print_interval: 5,
            ..StationaryConfig::new(1e-10, 1000)
        };
        let logged = jacobi(&a, &b, &config).unwrap();
        assert_eq!(logged.iterations, quiet.iterations);
        assert_eq!(logged.x, quiet.x);
    }

    #[test]
    fn test_jacobi_zero_diagonal_rejected() {
        let a = DenseMatrix::from_rows(&[[0.0_f64, 1.0], [1.0, 0.0]]);
        let result = jacobi(&a, &array![1.0_f64, 1.0], &StationaryConfig::default());
        assert!(matches!(result, Err(SolverError::InvalidInput(_))));
    }
}

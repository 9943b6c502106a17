//! Vector norms and solution diagnostics
//!
//! This module provides the norms used to judge iterative convergence and the
//! quality of a computed solution:
//! - [`residual_infinity_norm`]: max_i |b_i - (A x)_i|
//! - [`error_norm2`]: ||x - x_ref||_2 against a trusted reference solution
//! - [`max_abs_diff`]: the infinity-norm step between two iterates

use crate::traits::{LinearOperator, RealField};
use ndarray::Array1;

/// Compute the residual vector r = b - A x
pub fn residual<T, A>(a: &A, x: &Array1<T>, b: &Array1<T>) -> Array1<T>
where
    T: RealField,
    A: LinearOperator<T> + ?Sized,
{
    assert_eq!(b.len(), a.num_rows(), "Right-hand side size mismatch");
    let ax = a.apply(x);
    b - &ax
}

/// Infinity norm of the residual: max_i |b_i - sum_j A_ij x_j|
///
/// Returns zero only when `x` solves the system exactly.
pub fn residual_infinity_norm<T, A>(a: &A, x: &Array1<T>, b: &Array1<T>) -> T
where
    T: RealField,
    A: LinearOperator<T> + ?Sized,
{
    vector_norm_inf(&residual(a, x, b))
}

/// Euclidean norm of the error: ||x - x_ref||_2
///
/// Symmetric in its arguments and exactly zero when they are equal elementwise.
pub fn error_norm2<T: RealField>(x: &Array1<T>, x_ref: &Array1<T>) -> T {
    assert_eq!(
        x.len(),
        x_ref.len(),
        "Vector lengths must match for error norm"
    );
    vector_norm(&(x - x_ref))
}

/// Compute vector 2-norm: ||x||_2 = sqrt(sum x_i^2)
#[inline]
pub fn vector_norm<T: RealField>(x: &Array1<T>) -> T {
    vector_norm_sqr(x).sqrt()
}

/// Compute vector norm squared: ||x||_2^2
#[inline]
pub fn vector_norm_sqr<T: RealField>(x: &Array1<T>) -> T {
    x.iter().fold(T::zero(), |acc, &xi| acc + xi * xi)
}

/// Compute vector infinity norm: max_i |x_i|
#[inline]
pub fn vector_norm_inf<T: RealField>(x: &Array1<T>) -> T {
    x.iter().fold(T::zero(), |acc, &xi| acc.max(xi.abs()))
}

/// Largest component-wise change between two iterates: max_i |x_i - y_i|
///
/// NaN components propagate so a diverged iterate is never mistaken for a
/// converged one.
#[inline]
pub fn max_abs_diff<T: RealField>(x: &Array1<T>, y: &Array1<T>) -> T {
    assert_eq!(x.len(), y.len(), "Vector lengths must match");
    let mut max = T::zero();
    for (&xi, &yi) in x.iter().zip(y.iter()) {
        let d = (xi - yi).abs();
        if d.is_nan() {
            return d;
        }
        if d > max {
            max = d;
        }
    }
    max
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dense::DenseMatrix;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn test_residual_infinity_norm() {
        let a = DenseMatrix::from_rows(&[[2.0_f64, 1.0], [1.0, 3.0]]);
        let b = array![3.0_f64, 5.0];

        // Exact solution x = [0.8, 1.4]
        let exact = array![0.8_f64, 1.4];
        assert_relative_eq!(residual_infinity_norm(&a, &exact, &b), 0.0, epsilon = 1e-14);

        // r = b - A*0 = b
        let zero = Array1::zeros(2);
        assert_relative_eq!(residual_infinity_norm(&a, &zero, &b), 5.0);

        // r = [3 - 3, 5 - 4] = [0, 1]
        let x = array![1.0_f64, 1.0];
        assert_relative_eq!(residual_infinity_norm(&a, &x, &b), 1.0);
        assert_eq!(residual(&a, &x, &b), array![0.0, 1.0]);
    }

    #[test]
    fn test_error_norm2() {
        let x = array![1.0_f64, 2.0, 2.0];
        let zero = Array1::zeros(3);
        assert_relative_eq!(error_norm2(&x, &zero), 3.0);
        assert_relative_eq!(error_norm2(&zero, &x), 3.0);
    }

    #[test]
    fn test_error_norm2_reflexive() {
        let x = array![0.1_f64, -7.3e8, 1e-300, 3.0];
        assert_eq!(error_norm2(&x, &x), 0.0);
    }

    #[test]
    fn test_vector_norms() {
        let x = array![3.0_f64, -4.0];
        assert_relative_eq!(vector_norm(&x), 5.0, epsilon = 1e-12);
        assert_relative_eq!(vector_norm_sqr(&x), 25.0);
        assert_relative_eq!(vector_norm_inf(&x), 4.0);
    }

    #[test]
    fn test_max_abs_diff() {
        let x = array![1.0_f64, 2.0, 3.0];
        let y = array![1.5_f64, 0.0, 3.25];
        assert_relative_eq!(max_abs_diff(&x, &y), 2.0);
        assert_relative_eq!(max_abs_diff(&x, &x), 0.0);

        let nan = array![1.0_f64, f64::NAN, 3.0];
        assert!(max_abs_diff(&x, &nan).is_nan());
    }
}

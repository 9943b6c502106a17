//! Core traits for dense linear algebra
//!
//! This module defines the abstractions shared by every solver in the crate:
//! - [`RealField`]: Trait for the real scalar types the solvers operate on
//! - [`LinearOperator`]: Trait for matrix-like objects that can perform matrix-vector products

use ndarray::Array1;
use num_traits::{Float, FromPrimitive, NumAssign};
use std::fmt::{Debug, Display};

/// Trait for real scalar types that can be used in the solvers.
///
/// # Implementations
///
/// Provided for:
/// - `f64` (default, used by the benchmark harness)
/// - `f32` (for memory-constrained applications)
pub trait RealField:
    Float + NumAssign + FromPrimitive + Send + Sync + Debug + Display + Default + 'static
{
    /// Convert an `f64` constant (thresholds, defaults) into this type
    fn from_f64_lossy(value: f64) -> Self;

    /// Widen to `f64` for logging and error reporting
    fn to_f64_lossy(self) -> f64;

    /// Check if this is approximately zero
    fn is_zero_approx(&self, tol: Self) -> bool {
        // NaN can never serve as a pivot
        self.is_nan() || self.abs() < tol
    }
}

impl RealField for f64 {
    #[inline]
    fn from_f64_lossy(value: f64) -> Self {
        value
    }

    #[inline]
    fn to_f64_lossy(self) -> f64 {
        self
    }
}

impl RealField for f32 {
    #[inline]
    fn from_f64_lossy(value: f64) -> Self {
        value as f32
    }

    #[inline]
    fn to_f64_lossy(self) -> f64 {
        f64::from(self)
    }
}

/// Trait for linear operators (matrices) that can perform matrix-vector products.
///
/// The diagnostics in [`crate::norms`] are written against this trait so they
/// accept any operator, not only [`crate::DenseMatrix`].
pub trait LinearOperator<T: RealField>: Send + Sync {
    /// Number of rows in the operator
    fn num_rows(&self) -> usize;

    /// Number of columns in the operator
    fn num_cols(&self) -> usize;

    /// Apply the operator: y = A * x
    fn apply(&self, x: &Array1<T>) -> Array1<T>;

    /// Check if the operator is square
    fn is_square(&self) -> bool {
        self.num_rows() == self.num_cols()
    }
}

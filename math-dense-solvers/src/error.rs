//! Error types shared by all solvers
//!
//! Non-convergence of an iterative method is not an error: it is reported
//! through [`crate::StationarySolution::converged`].

use thiserror::Error;

/// Errors that can occur while solving a linear system
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    /// No pivot candidate in `column` exceeded the near-zero threshold
    #[error("Matrix is singular or nearly singular: best pivot {pivot:.3e} in column {column}")]
    SingularMatrix { column: usize, pivot: f64 },
    /// A diagonal entry degenerated during back substitution
    #[error("Zero diagonal entry in row {row} during back substitution")]
    ZeroDiagonal { row: usize },
    /// Elimination or substitution produced an infinite or NaN value
    #[error("Numerical overflow at column {column}")]
    Overflow { column: usize },
    #[error("Matrix dimensions mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl SolverError {
    /// True for the failures that mean the system has no usable solution
    pub fn is_singular(&self) -> bool {
        matches!(
            self,
            SolverError::SingularMatrix { .. } | SolverError::ZeroDiagonal { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singular_classification() {
        assert!(
            SolverError::SingularMatrix {
                column: 1,
                pivot: 0.0
            }
            .is_singular()
        );
        assert!(SolverError::ZeroDiagonal { row: 0 }.is_singular());
        assert!(!SolverError::InvalidInput("empty".into()).is_singular());
        assert!(!SolverError::Overflow { column: 1 }.is_singular());
    }

    #[test]
    fn test_error_messages() {
        let err = SolverError::DimensionMismatch {
            expected: 3,
            got: 2,
        };
        assert_eq!(
            err.to_string(),
            "Matrix dimensions mismatch: expected 3, got 2"
        );
    }
}

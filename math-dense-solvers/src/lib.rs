//! Dense linear system solvers
//!
//! This crate solves small dense systems Ax = b with three classical methods
//! and provides the tools to compare their accuracy and cost.
//!
//! # Features
//!
//! - **Direct Solver**: Gaussian elimination with partial pivoting
//! - **Stationary Iterative Solvers**: Jacobi, Gauss-Seidel
//! - **Diagnostics**: residual infinity norm, error 2-norm against a reference
//! - **Benchmark**: size sweep over generated diagonally dominant systems
//! - **Generic Scalar Types**: Works with f64, f32
//!
//! # Example
//!
//! ```
//! use math_dense_solvers::{DenseMatrix, StationaryConfig, error_norm2, gauss_seidel, gauss_solve};
//! use ndarray::array;
//!
//! let a = DenseMatrix::from_rows(&[[4.0, -1.0], [-1.0, 4.0]]);
//! let b = array![3.0, 3.0];
//!
//! let direct = gauss_solve(&a, &b)?;
//! let iterative = gauss_seidel(&a, &b, &StationaryConfig::new(1e-10, 100))?;
//!
//! assert!(iterative.converged);
//! assert!(error_norm2(&iterative.x, &direct) < 1e-9);
//! # Ok::<(), math_dense_solvers::SolverError>(())
//! ```

pub mod benchmark;
pub mod dense;
pub mod direct;
pub mod error;
pub mod generator;
pub mod iterative;
pub mod norms;
pub mod traits;

// Re-export main types
pub use dense::DenseMatrix;
pub use error::SolverError;
pub use traits::{LinearOperator, RealField};

// Re-export solvers
pub use direct::{
    GaussConfig, GaussElimination, gauss_eliminate, gauss_solve, gauss_solve_with_config,
};
pub use iterative::{
    StationaryConfig, StationarySolution, gauss_seidel, gauss_seidel_with_guess, jacobi,
    jacobi_with_guess,
};

// Re-export diagnostics
pub use norms::{error_norm2, residual_infinity_norm};

// Re-export benchmark harness
pub use benchmark::{
    BenchmarkConfig, BenchmarkRecord, BenchmarkReport, Method, run_benchmark,
    run_benchmark_with_rng,
};
pub use generator::{GeneratorConfig, diagonally_dominant_system, reference_system};

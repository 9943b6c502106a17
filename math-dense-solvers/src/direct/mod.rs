//! Direct solvers for linear systems
//!
//! This module provides direct (non-iterative) solvers:
//! - [`gauss_solve`]: Gaussian elimination with partial pivoting

mod gauss;

pub use gauss::{
    DEFAULT_PIVOT_THRESHOLD, GaussConfig, GaussElimination, gauss_eliminate, gauss_solve,
    gauss_solve_with_config,
};

//! Dense matrix structure
//!
//! A single row-major dense matrix used by every solver, for the small
//! demonstration systems as well as the benchmark sizes.

mod matrix;

pub use matrix::DenseMatrix;

//! Cross-checks between the direct and stationary solvers
//!
//! The direct solution serves as the reference; the stationary methods must
//! land within a small multiple of their tolerance on diagonally dominant
//! systems.

use math_dense_solvers::norms::max_abs_diff;
use math_dense_solvers::{
    DenseMatrix, GeneratorConfig, SolverError, StationaryConfig, diagonally_dominant_system,
    error_norm2, gauss_seidel, gauss_solve, jacobi, reference_system, residual_infinity_norm,
};
use ndarray::{Array1, array};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn generated(n: usize, seed: u64) -> (DenseMatrix<f64>, Array1<f64>) {
    diagonally_dominant_system(n, &GeneratorConfig::default(), &mut StdRng::seed_from_u64(seed))
        .expect("default generator config is valid")
}

#[test]
fn test_methods_agree_on_generated_systems() {
    let tol = 1e-8;
    let config = StationaryConfig::new(tol, 1000);

    for (n, seed) in [(5, 1), (20, 2), (60, 3)] {
        let (a, b) = generated(n, seed);
        let direct = gauss_solve(&a, &b).expect("dominant systems are non-singular");
        let j = jacobi(&a, &b, &config).unwrap();
        let gs = gauss_seidel(&a, &b, &config).unwrap();

        assert!(j.converged, "Jacobi failed to converge for n = {n}");
        assert!(gs.converged, "Gauss-Seidel failed to converge for n = {n}");
        assert!(max_abs_diff(&j.x, &direct) < 10.0 * tol);
        assert!(max_abs_diff(&gs.x, &direct) < 10.0 * tol);
        assert!(max_abs_diff(&j.x, &gs.x) < 10.0 * tol);
    }
}

#[test]
fn test_direct_residual_is_rounding_level() {
    for (n, seed) in [(3, 10), (40, 11), (120, 12)] {
        let (a, b) = generated(n, seed);
        let x = gauss_solve(&a, &b).unwrap();
        let r = residual_infinity_norm(&a, &x, &b);
        assert!(r < 1e-12, "n = {n}: residual {r:e}");
    }
}

#[test]
fn test_error_norm_reflexive() {
    let (a, b) = generated(15, 99);
    let x = gauss_solve(&a, &b).unwrap();
    assert_eq!(error_norm2(&x, &x), 0.0);
    assert_eq!(error_norm2(&b, &b), 0.0);
}

#[test]
fn test_one_by_one_system() {
    for (coef, rhs) in [(2.0_f64, 5.0_f64), (-0.5, 3.0), (1e3, -7.0), (3.0, 1e-6)] {
        let a = DenseMatrix::from_rows(&[[coef]]);
        let b = array![rhs];
        let expected = rhs / coef;
        let config = StationaryConfig::default();

        assert_eq!(gauss_solve(&a, &b).unwrap()[0], expected);

        let j = jacobi(&a, &b, &config).unwrap();
        assert_eq!(j.iterations, 1);
        assert_eq!(j.x[0], expected);

        let gs = gauss_seidel(&a, &b, &config).unwrap();
        assert_eq!(gs.iterations, 1);
        assert_eq!(gs.x[0], expected);
    }
}

#[test]
fn test_gauss_seidel_never_slower_than_jacobi() {
    let config = StationaryConfig::new(1e-6, 1000);
    for seed in 0..5 {
        let (a, b) = generated(30, seed);
        let j = jacobi(&a, &b, &config).unwrap();
        let gs = gauss_seidel(&a, &b, &config).unwrap();
        assert!(
            gs.iterations <= j.iterations,
            "seed {seed}: Gauss-Seidel {} > Jacobi {}",
            gs.iterations,
            j.iterations
        );
    }
}

#[test]
fn test_reference_system() {
    let (a, b) = reference_system();

    let x = gauss_solve(&a, &b).expect("reference system is non-singular");
    let expected = array![32.0 / 15.0, 4.0 / 3.0, 1.0 / 15.0];
    assert!(error_norm2(&x, &expected) < 1e-12);

    // Not diagonally dominant: both stationary methods run out of budget
    let config = StationaryConfig::new(1e-3, 100);
    assert!(!jacobi(&a, &b, &config).unwrap().converged);
    assert!(!gauss_seidel(&a, &b, &config).unwrap().converged);
}

#[test]
fn test_iteration_cap_of_one() {
    let a = DenseMatrix::from_rows(&[
        [5.0, 1.0, -1.0],
        [2.0, 8.0, 1.0],
        [-1.0, 1.0, 4.0],
    ]);
    let b = array![10.0, -4.0, 8.0];
    let config = StationaryConfig::new(1e-6, 1);

    let j = jacobi(&a, &b, &config).unwrap();
    assert_eq!(j.iterations, 1);
    assert!(!j.converged);
    assert_eq!(j.x, array![2.0, -0.5, 2.0]);

    let gs = gauss_seidel(&a, &b, &config).unwrap();
    assert_eq!(gs.iterations, 1);
    assert!(!gs.converged);
    // x1 = 10/5, x2 = (-4 - 2*2)/8, x3 = (8 + 2 + 1)/4
    assert_eq!(gs.x, array![2.0, -1.0, 2.75]);
}

#[test]
fn test_singular_systems_fail() {
    let zero_row = DenseMatrix::from_rows(&[
        [3.0, 1.0, 2.0],
        [0.0, 0.0, 0.0],
        [1.0, 1.0, 1.0],
    ]);
    let twin_rows = DenseMatrix::from_rows(&[
        [1.0, 2.0, 3.0],
        [1.0, 2.0, 3.0],
        [0.0, 1.0, 5.0],
    ]);
    let b = array![1.0, 2.0, 3.0];

    for a in [zero_row, twin_rows] {
        match gauss_solve(&a, &b) {
            Err(SolverError::SingularMatrix { .. }) => {}
            other => panic!("expected SingularMatrix, got {other:?}"),
        }
    }
}

//! Complexity benchmark
//!
//! For every size in the sweep one diagonally dominant system is generated and
//! each method solves its own copy of it. The elapsed times show the O(n^3)
//! cost of elimination against the O(k n^2) cost of the stationary methods.

use crate::dense::DenseMatrix;
use crate::direct::gauss_solve;
use crate::error::SolverError;
use crate::generator::{GeneratorConfig, diagonally_dominant_system};
use crate::iterative::{StationaryConfig, gauss_seidel, jacobi};
use crate::norms::residual_infinity_norm;
use ndarray::Array1;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Instant;

/// Solution method under benchmark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Method {
    Gauss,
    Jacobi,
    #[serde(rename = "Gauss-Seidel")]
    GaussSeidel,
}

impl Method {
    /// Every method, in the order they are run for each size
    pub const ALL: [Method; 3] = [Method::Gauss, Method::Jacobi, Method::GaussSeidel];

    pub fn name(&self) -> &'static str {
        match self {
            Method::Gauss => "Gauss",
            Method::Jacobi => "Jacobi",
            Method::GaussSeidel => "Gauss-Seidel",
        }
    }

    pub fn is_iterative(&self) -> bool {
        !matches!(self, Method::Gauss)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Benchmark sweep configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchmarkConfig {
    /// Problem sizes, run in order
    pub sizes: Vec<usize>,
    /// Step tolerance for the stationary methods
    pub tolerance: f64,
    /// Iteration cap for the stationary methods
    pub max_iterations: usize,
    /// Seed for the system generator (None = seeded from entropy)
    pub seed: Option<u64>,
    /// Shape of the generated systems
    pub generator: GeneratorConfig,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            sizes: vec![10, 20, 40, 80, 120],
            tolerance: 1e-3,
            max_iterations: 1000,
            seed: None,
            generator: GeneratorConfig::default(),
        }
    }
}

impl BenchmarkConfig {
    /// Parse a JSON configuration; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, SolverError> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| SolverError::InvalidInput(format!("benchmark config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), SolverError> {
        if self.sizes.is_empty() {
            return Err(SolverError::InvalidInput(
                "sizes must not be empty".to_string(),
            ));
        }
        if self.sizes.contains(&0) {
            return Err(SolverError::InvalidInput("sizes must be positive".to_string()));
        }
        if !(self.tolerance > 0.0) {
            return Err(SolverError::InvalidInput(format!(
                "tolerance must be positive, got {}",
                self.tolerance
            )));
        }
        if self.max_iterations == 0 {
            return Err(SolverError::InvalidInput(
                "max_iterations must be positive".to_string(),
            ));
        }
        self.generator.validate()
    }

    fn stationary(&self) -> StationaryConfig<f64> {
        StationaryConfig::new(self.tolerance, self.max_iterations)
    }
}

/// Timing of one method on one system size
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkRecord {
    pub n: usize,
    pub method: Method,
    /// Wall-clock time of the solve call in milliseconds
    pub time_ms: f64,
    /// Sweeps performed (0 for the direct method)
    pub iterations: usize,
    pub converged: bool,
    /// ||b - A x||_inf of the returned solution
    pub residual: f64,
}

/// All records of a sweep, in execution order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkReport {
    records: Vec<BenchmarkRecord>,
}

impl BenchmarkReport {
    pub fn records(&self) -> &[BenchmarkRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records of one method, ordered by size as run
    pub fn for_method(&self, method: Method) -> impl Iterator<Item = &BenchmarkRecord> {
        self.records.iter().filter(move |r| r.method == method)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.records)
    }
}

/// Run the sweep with the generator seeded from `config.seed`
pub fn run_benchmark(config: &BenchmarkConfig) -> Result<BenchmarkReport, SolverError> {
    let mut rng: StdRng = match config.seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => {
            let mut thread_rng = rand::rng();
            StdRng::from_rng(&mut thread_rng)
        }
    };
    run_benchmark_with_rng(config, &mut rng)
}

/// Run the sweep drawing systems from a caller-supplied random source
pub fn run_benchmark_with_rng<R: Rng + ?Sized>(
    config: &BenchmarkConfig,
    rng: &mut R,
) -> Result<BenchmarkReport, SolverError> {
    config.validate()?;
    let stationary = config.stationary();
    let mut records = Vec::with_capacity(config.sizes.len() * Method::ALL.len());

    for &n in &config.sizes {
        let (a0, b0) = diagonally_dominant_system(n, &config.generator, rng)?;

        for method in Method::ALL {
            // Each method works on its own copy of the generated system
            let a = a0.clone();
            let b = b0.clone();
            let record = time_method(method, n, &a, &b, &stationary)?;
            log::debug!(
                "n = {n:>4} {:<12} {:>10.3} ms, {} iterations",
                method.name(),
                record.time_ms,
                record.iterations
            );
            records.push(record);
        }
    }

    Ok(BenchmarkReport { records })
}

fn time_method(
    method: Method,
    n: usize,
    a: &DenseMatrix<f64>,
    b: &Array1<f64>,
    config: &StationaryConfig<f64>,
) -> Result<BenchmarkRecord, SolverError> {
    let start = Instant::now();
    let (x, iterations, converged) = match method {
        Method::Gauss => (gauss_solve(a, b)?, 0, true),
        Method::Jacobi => {
            let sol = jacobi(a, b, config)?;
            (sol.x, sol.iterations, sol.converged)
        }
        Method::GaussSeidel => {
            let sol = gauss_seidel(a, b, config)?;
            (sol.x, sol.iterations, sol.converged)
        }
    };
    let time_ms = start.elapsed().as_secs_f64() * 1000.0;

    Ok(BenchmarkRecord {
        n,
        method,
        time_ms,
        iterations,
        converged,
        residual: residual_infinity_norm(a, &x, b),
    })
}

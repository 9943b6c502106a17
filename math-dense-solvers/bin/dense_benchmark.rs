use anyhow::Context;
use clap::Parser;
use math_dense_solvers::{BenchmarkConfig, BenchmarkReport, Method, run_benchmark};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "dense_benchmark",
    about = "Time Gaussian elimination, Jacobi and Gauss-Seidel over a sweep of system sizes"
)]
struct Cli {
    /// JSON file with a benchmark configuration (command-line flags override it)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Comma-separated system sizes
    #[arg(long, value_delimiter = ',')]
    sizes: Option<Vec<usize>>,

    /// Step tolerance for the iterative methods
    #[arg(long)]
    tol: Option<f64>,

    /// Iteration cap for the iterative methods
    #[arg(long)]
    max_iter: Option<usize>,

    /// Random seed for the generated systems
    #[arg(long)]
    seed: Option<u64>,

    /// Print the records as JSON instead of a table
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            BenchmarkConfig::from_json(&text)?
        }
        None => BenchmarkConfig::default(),
    };
    if let Some(sizes) = cli.sizes {
        config.sizes = sizes;
    }
    if let Some(tol) = cli.tol {
        config.tolerance = tol;
    }
    if let Some(max_iter) = cli.max_iter {
        config.max_iterations = max_iter;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    let report = run_benchmark(&config)?;

    if cli.json {
        println!("{}", report.to_json()?);
    } else {
        print_table(&report);
    }
    Ok(())
}

fn print_table(report: &BenchmarkReport) {
    println!(
        "{:>6}  {:<12}  {:>12}  {:>10}  {:>10}",
        "n", "method", "time_ms", "iterations", "residual"
    );
    for record in report.records() {
        let marker = if record.method.is_iterative() && !record.converged {
            " (not converged)"
        } else {
            ""
        };
        println!(
            "{:>6}  {:<12}  {:>12.4}  {:>10}  {:>10.2e}{}",
            record.n, record.method, record.time_ms, record.iterations, record.residual, marker
        );
    }

    let total = |m: Method| report.for_method(m).map(|r| r.time_ms).sum::<f64>();
    println!();
    for method in Method::ALL {
        println!("{:<12} total {:>10.3} ms", method, total(method));
    }
}

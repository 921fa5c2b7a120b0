use anyhow::Result;
use clap::{Parser, ValueEnum};
use clifford_r101::{Blade, Multivector};
use num_traits::Float;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Debug, Copy, Clone, ValueEnum)]
enum Precision {
    F32,
    F64,
}

/// Prints the null squares of R(1,0,1).
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Coefficient type used for the computation
    #[arg(long, value_enum, default_value = "f32")]
    precision: Precision,

    /// Log at debug level (ignored when RUST_LOG is set)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::new(log_directives(cli.verbose, rust_log.as_deref())))
        .init();

    tracing::debug!(precision = ?cli.precision, "running demo");

    match cli.precision {
        Precision::F32 => run::<f32>(),
        Precision::F64 => run::<f64>(),
    }
}

/// RUST_LOG wins over `--verbose` when it is set.
fn log_directives(verbose: bool, rust_log: Option<&str>) -> &str {
    match rust_log {
        Some(directives) => directives,
        None if verbose => "debug",
        None => "warn",
    }
}

fn run<T: Float>() -> Result<()> {
    let one = T::one();
    let e0 = Multivector::from_blade(one, Blade::E0.index())?;
    let e01 = Multivector::from_blade(one, Blade::E01.index())?;

    println!("e0*e0         : {}", e0 * e0);
    println!("pss           : {}", e01);
    println!("pss*pss       : {}", e01 * e01);

    Ok(())
}

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use vecforge::config::{MatrixShape, RunConfig, ValueDomain};
use vecforge::driver::TestCaseDriver;
use vecforge::scalar;

#[derive(Parser, Debug)]
#[command(name = "vecforge-cli", version)]
#[command(about = "Generate self-checking test vectors for hardware multiplier testbenches", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum DomainKind {
    /// Unsigned integer cells
    Int,
    /// Real cells with fixed decimal rounding
    Real,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate randomized matrix-multiplication test cases
    Matrix {
        /// JSON run configuration file; when given, the other flags are ignored
        #[arg(long)]
        config: Option<PathBuf>,
        /// Number of test cases to generate
        #[arg(long, default_value_t = 100)]
        cases: usize,
        /// Rows of A (and C)
        #[arg(short, default_value_t = 3)]
        m: usize,
        /// Columns of A / rows of B
        #[arg(short, default_value_t = 3)]
        k: usize,
        /// Columns of B (and C)
        #[arg(short, default_value_t = 3)]
        n: usize,
        /// Cell value domain
        #[arg(long, value_enum, default_value_t = DomainKind::Int)]
        domain: DomainKind,
        /// Lower bound, inclusive (default: 0 for int, -10 for real)
        #[arg(long)]
        min: Option<f64>,
        /// Upper bound, inclusive (default: 15 for int, 10 for real)
        #[arg(long)]
        max: Option<f64>,
        /// Decimal places for the real domain
        #[arg(long, default_value_t = 2)]
        decimals: u32,
        /// Output root directory
        #[arg(long, default_value = "testcases")]
        out: PathBuf,
        /// RNG seed for a reproducible suite
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Emit the directed scalar floating-point multiplier suite
    Scalar {
        /// Output file; prints to stdout when omitted
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    vecforge::logging::init_logging_from_env();
    let cli = Cli::parse();

    match cli.command {
        Commands::Matrix {
            config,
            cases,
            m,
            k,
            n,
            domain,
            min,
            max,
            decimals,
            out,
            seed,
        } => {
            let run_config = match config {
                Some(path) => RunConfig::from_json_file(&path)
                    .map_err(|err| anyhow::anyhow!("{} error: {}", err.category(), err))?,
                None => RunConfig {
                    case_count: cases,
                    shape: MatrixShape::new(m, k, n),
                    domain: build_domain(domain, min, max, decimals)?,
                    output_root: out,
                    seed,
                },
            };

            let mut driver = TestCaseDriver::new(run_config)
                .map_err(|err| anyhow::anyhow!("{} error: {}", err.category(), err))?;
            let report = driver
                .run()
                .map_err(|err| anyhow::anyhow!("{} error: {}", err.category(), err))?;
            println!(
                "Generated {} test cases in '{}'",
                report.cases_written,
                report.output_root.display()
            );
            println!("Each test case contains:");
            println!("- matrix_A.txt    : input matrix A (hex)");
            println!("- matrix_B.txt    : input matrix B (hex)");
            println!("- expected_C.txt  : expected output matrix (hex)");
            println!("- test_init.v     : testbench initialization code");
        }
        Commands::Scalar { out } => {
            let suite = scalar::directed_suite();
            match out {
                Some(path) => {
                    scalar::write_suite(&path, &suite)
                        .map_err(|err| anyhow::anyhow!("{} error: {}", err.category(), err))?;
                    println!("Wrote {} scalar cases to '{}'", suite.len(), path.display());
                }
                None => {
                    let text = scalar::render_suite(&suite)
                        .map_err(|err| anyhow::anyhow!("{} error: {}", err.category(), err))?;
                    print!("{}", text);
                }
            }
        }
    }

    Ok(())
}

/// Build a value domain from CLI flags, filling per-kind defaults.
fn build_domain(
    kind: DomainKind,
    min: Option<f64>,
    max: Option<f64>,
    decimals: u32,
) -> anyhow::Result<ValueDomain> {
    match kind {
        DomainKind::Int => {
            let min = min.unwrap_or(0.0);
            let max = max.unwrap_or(15.0);
            Ok(ValueDomain::Integer {
                min: integral_bound(min, "--min")?,
                max: integral_bound(max, "--max")?,
            })
        }
        DomainKind::Real => Ok(ValueDomain::Real {
            min: min.unwrap_or(-10.0),
            max: max.unwrap_or(10.0),
            decimals,
        }),
    }
}

fn integral_bound(value: f64, flag: &str) -> anyhow::Result<i64> {
    if !value.is_finite() || value.fract() != 0.0 {
        anyhow::bail!("{} must be an integer for the int domain, got {}", flag, value);
    }
    Ok(value as i64)
}

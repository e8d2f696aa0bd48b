use anyhow::{ensure, Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*, EnvFilter};

use shortcut::{compute_with, DistanceMatrix, StepConfig, Strategy, DEFAULT_WEIGHT_RANGE};
use tools::timer::Stopwatch;

/// Benchmark one shortcut step version on random input
#[derive(Debug, Parser)]
#[command(name = "shortcut", version)]
struct Args {
    /// Amount of rows and columns in the input
    n: usize,

    /// How many times the step is repeated
    #[arg(default_value_t = 1)]
    iterations: usize,

    /// baseline, transposed, ilp[:P], parallel[:P] or simd
    #[arg(short, long, default_value = "simd")]
    strategy: Strategy,

    /// Size of a dedicated thread pool, the rayon global pool is used if omitted
    #[arg(short, long)]
    threads: Option<usize>,

    /// Seed for the random input, a random seed is used if omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Print the input and the result of the last iteration
    #[arg(long)]
    print: bool,

    /// Compare the result of the last iteration against the baseline version
    #[arg(long)]
    verify: bool,
}

/// Log to stdout, respecting `RUST_LOG` and defaulting to "info"
fn init_subscriber() {
    let fmt_layer = fmt::layer().with_target(false);
    let filter_layer = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}

fn benchmark(d: &DistanceMatrix, args: &Args, config: &StepConfig) -> Result<DistanceMatrix> {
    let mut stopwatch = Stopwatch::new();
    let mut r = None;
    stopwatch.click("start");
    for _ in 0..args.iterations {
        r = Some(compute_with(d, args.strategy, config).context("step failed")?);
        stopwatch.click("step");
    }
    stopwatch.report();
    let total = stopwatch.total();
    info!(
        strategy = %args.strategy,
        n = d.n(),
        iterations = args.iterations,
        "mean {:.6} s",
        total.as_secs_f64() / args.iterations as f64
    );
    r.context("no iterations were run")
}

fn main() -> Result<()> {
    init_subscriber();
    let args = Args::parse();
    ensure!(args.n > 0, "N must be at least 1");
    ensure!(args.iterations > 0, "ITERATIONS must be at least 1");

    let seed = args.seed.unwrap_or_else(rand::random);
    info!(n = args.n, seed, "benchmarking {} with input containing {}*{} elements", args.strategy, args.n, args.n);
    let d = DistanceMatrix::random_seeded(args.n, DEFAULT_WEIGHT_RANGE, seed)
        .context("cannot create input matrix")?;
    let config = StepConfig { threads: args.threads };

    let r = benchmark(&d, &args, &config)?;

    if args.print {
        println!("{}", d);
        println!("{}", r);
    }
    if args.verify {
        let expected = compute_with(&d, Strategy::Baseline, &config).context("baseline step failed")?;
        ensure!(r == expected, "{} differs from the baseline", args.strategy);
        info!("result matches the baseline");
    }
    Ok(())
}

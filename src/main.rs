use anyhow::Result;
use clap::Parser;

use percolate::{random, ExperimentConfig, PercolationStats};

/// Estimate the site percolation threshold of an N-by-N grid
///
/// Runs T independent trials, each opening random sites until the grid
/// percolates, and prints the mean threshold, its standard deviation and a
/// 95% confidence interval.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Grid size N
    #[clap(value_name = "N", allow_negative_numbers = true)]
    grid_size: i64,

    /// Number of trials T
    #[clap(value_name = "T", allow_negative_numbers = true)]
    trials: i64,

    /// Seed for the random site draws (drawn from OS entropy if omitted)
    #[clap(short = 's', long = "seed")]
    seed: Option<u64>,

    /// Number of worker threads (all cores if omitted)
    #[clap(short = 't', long = "threads")]
    threads: Option<usize>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let mut config = ExperimentConfig::new(args.grid_size, args.trials)?;
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    if let Some(threads) = args.threads {
        config = config.with_threads(threads)?;
    }

    if let Some(threads) = config.threads() {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()?;
    }

    let seed = config.seed().unwrap_or_else(random::entropy_seed);
    log::info!("seed {seed} (pass --seed {seed} to repeat this run)");

    let stats = PercolationStats::run_seeded(config.grid_size(), config.trials(), seed)?;

    println!("{:<24}= {}", "mean", stats.mean());
    println!("{:<24}= {}", "stddev", stats.stddev());
    println!(
        "{:<24}= {}, {}",
        "95% confidence interval",
        stats.confidence_lo(),
        stats.confidence_hi()
    );

    Ok(())
}

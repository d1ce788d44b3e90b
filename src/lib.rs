#![warn(missing_docs)]
//! # pairbench
//!
//! A pairwise micro-benchmark harness: each registered benchmark is a
//! (baseline, candidate) pair of zero-argument closures exercising two ways
//! of doing the same thing. The runner times both under a fixed
//! repeat/iteration protocol, computes min/max/mean and percentage deltas,
//! and prints one styled comparison table.
//!
//! ## Quick start
//!
//! ```ignore
//! $ pairbench              # run every registered suite
//! $ pairbench attributes   # run only the "attributes" suite
//! $ pairbench --list       # show registered suites without running
//! ```
//!
//! Benchmarks are registered statically in [`registry::registry`]; there is
//! no filesystem discovery and no runtime code loading. Repeat and
//! iteration counts come from an optional `pairbench.toml` (see
//! [`config::BenchConfig`]), defaulting to 5 trials of 5 invocations each.

pub mod config;
pub mod registry;
pub mod render;
pub mod runner;
pub mod stats;
pub mod suites;
pub mod timing;

pub use config::BenchConfig;
pub use registry::{BenchPair, Suite};
pub use stats::{Comparison, SampleStats, StatsError};

use clap::Parser;

/// pairbench CLI arguments
#[derive(Parser, Debug)]
#[command(name = "pairbench")]
#[command(author, version, about = "Pairwise micro-benchmark comparison harness")]
pub struct Cli {
    /// Run only the suite with this name
    pub filter: Option<String>,

    /// List registered suites without running them
    #[arg(long)]
    pub list: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Run the pairbench CLI. This is the entry point for the binary.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run_with_cli(cli)
}

/// Run the pairbench CLI with pre-parsed arguments.
pub fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("pairbench=debug")
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter("pairbench=info")
            .init();
    }

    // Optional pairbench.toml overrides the built-in repeat/iteration
    // defaults. Counts are deliberately not CLI flags.
    let config = BenchConfig::discover().unwrap_or_default();

    let suites = registry::registry();

    if cli.list {
        list_suites(&suites);
        return Ok(());
    }

    runner::run_suites(&suites, cli.filter.as_deref(), &config)
}

fn list_suites(suites: &[Suite]) {
    println!("pairbench registry:");

    let mut total = 0;
    for suite in suites {
        println!(
            "├── {}: {} ({} pairs)",
            suite.name,
            suite.description,
            suite.benches.len()
        );
        for pair in &suite.benches {
            println!("│   ├── {}", pair.label);
            total += 1;
        }
    }

    println!("{} benchmark pairs registered.", total);
}

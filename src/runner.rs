//! Benchmark runner
//!
//! One linear pass: select suites from the registry, time both callables of
//! each pair, compare, and print the assembled table once at the end. A
//! failing comparison aborts the whole run with no partial output; that is
//! the intended failure mode for an interactive developer tool.

use crate::config::BenchConfig;
use crate::registry::{self, Suite};
use crate::render;
use crate::stats::{Comparison, SampleStats, StatsError};
use crate::timing;
use tracing::debug;

/// One finished comparison, ready for rendering
#[derive(Debug, Clone)]
pub struct Row {
    /// Benchmark label
    pub label: String,
    /// Baseline summary statistics
    pub baseline: SampleStats,
    /// Candidate summary statistics
    pub candidate: SampleStats,
    /// Percentage deltas of candidate against baseline
    pub comparison: Comparison,
}

/// Time and compare every selected pair, in registry order.
pub fn execute(
    suites: &[Suite],
    filter: Option<&str>,
    config: &BenchConfig,
) -> Result<Vec<Row>, StatsError> {
    let selected = registry::select_suites(suites, filter);
    debug!(
        selected = selected.len(),
        registered = suites.len(),
        "selected suites"
    );

    let mut rows = Vec::new();
    for suite in selected {
        for pair in &suite.benches {
            debug!(suite = suite.name, bench = pair.label, "timing pair");

            let baseline_samples = timing::collect_samples(
                pair.baseline,
                config.runner.repeat,
                config.runner.iterations,
            );
            let candidate_samples = timing::collect_samples(
                pair.candidate,
                config.runner.repeat,
                config.runner.iterations,
            );

            let baseline = SampleStats::from_samples(&baseline_samples)?;
            let candidate = SampleStats::from_samples(&candidate_samples)?;
            let comparison = Comparison::between(&baseline, &candidate)?;

            rows.push(Row {
                label: pair.label.to_string(),
                baseline,
                candidate,
                comparison,
            });
        }
    }

    Ok(rows)
}

/// Run the selected suites and print the comparison table to stdout.
pub fn run_suites(
    suites: &[Suite],
    filter: Option<&str>,
    config: &BenchConfig,
) -> anyhow::Result<()> {
    // Reserved for saved profiles; nothing is written to it yet
    std::fs::create_dir_all(&config.output.directory)?;

    let rows = execute(suites, filter, config)?;

    let title = format!(
        "Pairwise Benchmark Suite, repeat={}, number={}",
        config.runner.repeat, config.runner.iterations
    );
    print!("{}", render::render_table(&title, &rows));

    Ok(())
}

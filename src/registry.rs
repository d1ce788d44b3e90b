//! Static benchmark registry
//!
//! Benchmarks are registered here with plain function pointers, populated
//! at process start. There is no filename-convention discovery and no
//! reflective module loading: what runs is exactly what this file lists.

use crate::suites;

/// One benchmark: a baseline callable, a candidate callable to compare
/// against it, and a human-readable label for the table row.
#[derive(Debug, Clone, Copy)]
pub struct BenchPair {
    /// Reference callable; deltas are computed relative to its statistics
    pub baseline: fn(),
    /// Callable compared against the baseline
    pub candidate: fn(),
    /// Row label
    pub label: &'static str,
}

impl BenchPair {
    /// Create a benchmark pair
    pub const fn new(baseline: fn(), candidate: fn(), label: &'static str) -> Self {
        Self {
            baseline,
            candidate,
            label,
        }
    }
}

/// A named group of benchmark pairs; `name` is what the CLI filter token
/// matches against.
#[derive(Debug, Clone)]
pub struct Suite {
    /// Suite identifier, matched exactly by the filter token
    pub name: &'static str,
    /// One-line description shown by `--list`
    pub description: &'static str,
    /// Benchmark pairs, run in declaration order
    pub benches: Vec<BenchPair>,
}

/// All registered suites, in declaration order.
pub fn registry() -> Vec<Suite> {
    vec![suites::attributes::suite(), suites::dispatch::suite()]
}

/// Select suites matching an optional filter token.
///
/// `None` selects everything; `Some(name)` selects the suite whose name
/// equals the token exactly. An unmatched token selects nothing, which
/// downstream renders as an empty table rather than an error.
pub fn select_suites<'a>(suites: &'a [Suite], filter: Option<&str>) -> Vec<&'a Suite> {
    suites
        .iter()
        .filter(|s| filter.map_or(true, |f| s.name == f))
        .collect()
}

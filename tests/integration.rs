//! Integration tests for pairbench
//!
//! These tests drive the library end to end: timing, comparison,
//! classification, rendering, and the registry filter behavior.

use pairbench::registry::{self, BenchPair, Suite};
use pairbench::render::{self, DeltaTier};
use pairbench::runner;
use pairbench::{BenchConfig, Comparison, SampleStats, StatsError};

fn spin() {
    let mut acc = 0u64;
    for i in 0..10_000 {
        acc = acc.wrapping_add(i * i);
    }
    std::hint::black_box(acc);
}

fn spin_twice() {
    spin();
    spin();
}

fn sample_suites() -> Vec<Suite> {
    vec![Suite {
        name: "spin",
        description: "spin loops",
        benches: vec![BenchPair::new(spin, spin_twice, "spin vs spin twice")],
    }]
}

/// The documented worked example: halving every sample yields a 50% delta
/// on every statistic, classified as the brightest faster tier.
#[test]
fn test_halved_samples_give_fifty_percent_delta() {
    let baseline = SampleStats::from_samples(&[1.0, 1.0, 1.0, 1.0, 1.0]).unwrap();
    let candidate = SampleStats::from_samples(&[0.5, 0.5, 0.5, 0.5, 0.5]).unwrap();

    let cmp = Comparison::between(&baseline, &candidate).unwrap();
    assert!((cmp.delta_mean - 50.0).abs() < 1e-9);
    assert!((cmp.delta_min - 50.0).abs() < 1e-9);
    assert!((cmp.delta_max - 50.0).abs() < 1e-9);

    let tier = render::classify(candidate.mean, baseline.mean, cmp.delta_mean);
    assert_eq!(tier, DeltaTier::Faster4);
    assert!(tier.is_faster());
}

/// Equal sequences produce a zero delta that routes to the slower styling
/// branch, by strict less-than classification.
#[test]
fn test_equal_sequences_classify_as_slower() {
    let stats = SampleStats::from_samples(&[2.0; 5]).unwrap();
    let cmp = Comparison::between(&stats, &stats).unwrap();
    assert_eq!(cmp.delta_mean, 0.0);

    let tier = render::classify(stats.mean, stats.mean, cmp.delta_mean);
    assert_eq!(tier, DeltaTier::Slower);
    assert!(render::delta_text(2.0, 2.0, 0.0).contains("(-0.0%)"));
}

/// Precision flips from 7 to 5 decimal places exactly when the delta
/// magnitude exceeds 100%.
#[test]
fn test_precision_boundary_at_hundred_percent() {
    assert!(render::delta_text(0.5, 1.0, 100.0).starts_with("0.5000000"));
    assert!(render::delta_text(0.4, 1.0, 100.1).starts_with("0.40000 "));
}

/// A filter token matching no suite produces an empty table with zero
/// rows, not an error.
#[test]
fn test_unmatched_filter_renders_empty_table() {
    let config = BenchConfig::default();
    let suites = sample_suites();

    let rows = runner::execute(&suites, Some("nonexistent"), &config).unwrap();
    assert!(rows.is_empty());

    let out = render::render_table("Pairwise Benchmark Suite, repeat=5, number=5", &rows);
    assert!(out.contains("Benchmark"));
    assert!(!out.contains("spin vs spin twice"));
}

/// End to end: timing real work produces positive statistics and a row per
/// registered pair, and the table carries the row label.
#[test]
fn test_end_to_end_single_suite() {
    let mut config = BenchConfig::default();
    config.runner.repeat = 3;
    config.runner.iterations = 2;

    let suites = sample_suites();
    let rows = runner::execute(&suites, Some("spin"), &config).unwrap();
    assert_eq!(rows.len(), 1);

    let row = &rows[0];
    assert!(row.baseline.min > 0.0);
    assert!(row.baseline.min <= row.baseline.mean);
    assert!(row.baseline.mean <= row.baseline.max);
    assert!(row.candidate.min > 0.0);

    let out = render::render_table("title", &rows);
    assert!(out.contains("spin vs spin twice"));
}

/// The built-in registry exposes the shipped payload suites and filtering
/// selects exactly one of them.
#[test]
fn test_builtin_registry_filtering() {
    let suites = registry::registry();
    assert!(suites.iter().any(|s| s.name == "attributes"));
    assert!(suites.iter().any(|s| s.name == "dispatch"));

    let selected = registry::select_suites(&suites, Some("dispatch"));
    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0].name, "dispatch");
}

/// A zero-valued baseline statistic fails the comparison explicitly
/// instead of reporting a misleading delta.
#[test]
fn test_zero_baseline_fails_fast() {
    let zero = SampleStats {
        min: 0.0,
        max: 1.0,
        mean: 0.5,
    };
    let candidate = SampleStats {
        min: 1.0,
        max: 1.0,
        mean: 1.0,
    };

    let err = Comparison::between(&zero, &candidate).unwrap_err();
    assert!(matches!(err, StatsError::ZeroBaseline { stat: "min" }));
    assert!(err.to_string().contains("undefined"));
}

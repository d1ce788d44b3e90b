//! Table rendering
//!
//! Assembles the comparison table as one string and styles the candidate
//! cells: a four-step green ramp for faster candidates keyed by delta
//! magnitude, a single red style for slower ones. Classification is strict
//! `value < comparator`, so equal timings take the slower branch; that
//! boundary is deliberate and covered by tests.

use crate::runner::Row;
use crossterm::style::{Color, Stylize};

/// Output width the table is laid out against
pub const TABLE_WIDTH: usize = 150;

const STAT_WIDTH: usize = 10;
const DELTA_WIDTH: usize = 21;

/// Style tier for a candidate cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeltaTier {
    /// Faster, delta in [0, 10)
    Faster1,
    /// Faster, delta in [10, 20)
    Faster2,
    /// Faster, delta in [20, 40)
    Faster3,
    /// Faster, delta >= 40
    Faster4,
    /// Slower or equal, any magnitude
    Slower,
}

impl DeltaTier {
    fn color(self) -> Color {
        // xterm-256 spring-green ramp, brightest for the biggest win
        match self {
            DeltaTier::Faster1 => Color::AnsiValue(49),
            DeltaTier::Faster2 => Color::AnsiValue(48),
            DeltaTier::Faster3 => Color::AnsiValue(47),
            DeltaTier::Faster4 => Color::AnsiValue(46),
            DeltaTier::Slower => Color::Red,
        }
    }

    /// Whether this tier is on the faster branch
    pub fn is_faster(self) -> bool {
        self != DeltaTier::Slower
    }
}

/// Classify a candidate statistic against its baseline comparator.
///
/// Strict less-than: an exactly equal candidate is classified as slower.
pub fn classify(value: f64, comparator: f64, delta: f64) -> DeltaTier {
    if value < comparator {
        if delta < 10.0 {
            DeltaTier::Faster1
        } else if delta < 20.0 {
            DeltaTier::Faster2
        } else if delta < 40.0 {
            DeltaTier::Faster3
        } else {
            DeltaTier::Faster4
        }
    } else {
        DeltaTier::Slower
    }
}

/// Plain text of a candidate cell: the statistic plus its parenthesized
/// delta, with a minus sign on the slower branch.
///
/// 5 decimal places when the delta magnitude exceeds 100%, else 7.
pub fn delta_text(value: f64, comparator: f64, delta: f64) -> String {
    let minus = if classify(value, comparator, delta).is_faster() {
        ""
    } else {
        "-"
    };
    if delta.abs() > 100.0 {
        format!("{value:.5} ({minus}{delta:.1}%)")
    } else {
        format!("{value:.7} ({minus}{delta:.1}%)")
    }
}

/// Styled, width-padded candidate cell.
///
/// Padding is applied to the plain text before styling so escape codes do
/// not count against the column width.
pub fn delta_cell(value: f64, comparator: f64, delta: f64) -> String {
    let tier = classify(value, comparator, delta);
    let text = format!("{:<w$}", delta_text(value, comparator, delta), w = DELTA_WIDTH);
    format!("{}", text.with(tier.color()))
}

/// Render the full comparison table, one row per benchmark pair.
///
/// Zero rows is valid output: title and header print, no data rows follow.
pub fn render_table(title: &str, rows: &[Row]) -> String {
    let name_w = rows
        .iter()
        .map(|r| r.label.len())
        .max()
        .unwrap_or(0)
        .max("Benchmark".len());

    let mut out = String::new();
    out.push('\n');
    out.push_str(title);
    out.push('\n');
    out.push_str(&"=".repeat(TABLE_WIDTH));
    out.push('\n');

    out.push_str(&format!(
        "  {:>name_w$}  {:>sw$}  {:>sw$}  {:>sw$}  {:<dw$}  {:<dw$}  {:<dw$}\n",
        "Benchmark",
        "Min",
        "Max",
        "Mean",
        "Min (+)",
        "Max (+)",
        "Mean (+)",
        sw = STAT_WIDTH,
        dw = DELTA_WIDTH,
    ));
    out.push_str(&format!("  {}\n", "-".repeat(TABLE_WIDTH - 2)));

    for row in rows {
        let label = format!("{:>name_w$}", row.label).with(Color::Cyan);
        out.push_str(&format!(
            "  {}  {:>sw$.7}  {:>sw$.7}  {:>sw$.7}  {}  {}  {}\n",
            label,
            row.baseline.min,
            row.baseline.max,
            row.baseline.mean,
            delta_cell(row.candidate.min, row.baseline.min, row.comparison.delta_min),
            delta_cell(row.candidate.max, row.baseline.max, row.comparison.delta_max),
            delta_cell(
                row.candidate.mean,
                row.baseline.mean,
                row.comparison.delta_mean
            ),
            sw = STAT_WIDTH,
        ));
    }

    out
}

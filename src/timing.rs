//! Timing loop
//!
//! Wall-clock timing of a callable under the fixed repeat/iteration
//! protocol: each trial invokes the callable `iterations` times and records
//! the trial's total elapsed seconds. No warm-up phase, no outlier
//! rejection; perturbation from the first cold trial is part of the signal.

use std::time::Instant;

/// Time `f` for `repeat` trials of `iterations` invocations each.
///
/// Returns one sample per trial: the trial's total elapsed wall-clock time
/// in seconds (not per-invocation time).
pub fn collect_samples(f: fn(), repeat: u32, iterations: u32) -> Vec<f64> {
    let mut samples = Vec::with_capacity(repeat as usize);
    for _ in 0..repeat {
        let start = Instant::now();
        for _ in 0..iterations {
            f();
        }
        samples.push(start.elapsed().as_secs_f64());
    }
    samples
}

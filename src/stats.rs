//! Summary statistics and pairwise comparison
//!
//! Min/max/mean over a trial's samples, and the percentage deltas between a
//! baseline and a candidate: `abs(candidate - baseline) / baseline * 100`
//! per statistic. Deltas are magnitudes; direction is carried separately by
//! the rendering layer's faster/slower classification.

/// Errors from statistics computation
#[derive(Debug, Clone, thiserror::Error)]
pub enum StatsError {
    /// A sample sequence was empty
    #[error("sample sequence is empty")]
    EmptySamples,
    /// A baseline statistic was zero, leaving the percentage delta undefined
    #[error("baseline {stat} is zero; percentage delta is undefined")]
    ZeroBaseline {
        /// Which statistic had the zero denominator
        stat: &'static str,
    },
}

/// Min, max and arithmetic mean of one timing sample sequence
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleStats {
    /// Fastest trial, seconds
    pub min: f64,
    /// Slowest trial, seconds
    pub max: f64,
    /// Arithmetic mean over all trials, seconds
    pub mean: f64,
}

impl SampleStats {
    /// Compute summary statistics over a non-empty sample sequence.
    pub fn from_samples(samples: &[f64]) -> Result<Self, StatsError> {
        if samples.is_empty() {
            return Err(StatsError::EmptySamples);
        }

        let min = samples
            .iter()
            .cloned()
            .min_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
            .unwrap_or(0.0);
        let max = samples
            .iter()
            .cloned()
            .max_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
            .unwrap_or(0.0);
        let mean = samples.iter().sum::<f64>() / samples.len() as f64;

        Ok(Self { min, max, mean })
    }
}

/// Percentage deltas between a candidate and a baseline, one per statistic.
///
/// Always non-negative magnitudes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Comparison {
    /// Delta on the min statistic, percent
    pub delta_min: f64,
    /// Delta on the max statistic, percent
    pub delta_max: f64,
    /// Delta on the mean statistic, percent
    pub delta_mean: f64,
}

impl Comparison {
    /// Compute the three percentage deltas of `candidate` against
    /// `baseline`.
    ///
    /// A zero-valued baseline statistic leaves its delta undefined and
    /// fails the whole comparison rather than reporting a misleading
    /// number; a zero baseline is a measurement anomaly worth surfacing.
    pub fn between(baseline: &SampleStats, candidate: &SampleStats) -> Result<Self, StatsError> {
        Ok(Self {
            delta_min: pct_delta(candidate.min, baseline.min, "min")?,
            delta_max: pct_delta(candidate.max, baseline.max, "max")?,
            delta_mean: pct_delta(candidate.mean, baseline.mean, "mean")?,
        })
    }
}

fn pct_delta(candidate: f64, baseline: f64, stat: &'static str) -> Result<f64, StatsError> {
    if baseline == 0.0 {
        return Err(StatsError::ZeroBaseline { stat });
    }
    Ok((candidate - baseline).abs() / baseline * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_stats() {
        let stats = SampleStats::from_samples(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        assert_eq!(stats.min, 1.0);
        assert_eq!(stats.max, 5.0);
        assert!((stats.mean - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_single_sample() {
        let stats = SampleStats::from_samples(&[2.5]).unwrap();
        assert_eq!(stats.min, 2.5);
        assert_eq!(stats.max, 2.5);
        assert_eq!(stats.mean, 2.5);
    }

    #[test]
    fn test_empty_samples_rejected() {
        assert!(matches!(
            SampleStats::from_samples(&[]),
            Err(StatsError::EmptySamples)
        ));
    }

    #[test]
    fn test_delta_formula() {
        let baseline = SampleStats::from_samples(&[1.0, 1.0, 1.0, 1.0, 1.0]).unwrap();
        let candidate = SampleStats::from_samples(&[0.5, 0.5, 0.5, 0.5, 0.5]).unwrap();

        let cmp = Comparison::between(&baseline, &candidate).unwrap();
        assert!((cmp.delta_mean - 50.0).abs() < 1e-9);
        assert!((cmp.delta_min - 50.0).abs() < 1e-9);
        assert!((cmp.delta_max - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_delta_is_magnitude_regardless_of_direction() {
        let slow = SampleStats::from_samples(&[2.0; 5]).unwrap();
        let fast = SampleStats::from_samples(&[1.0; 5]).unwrap();

        // Candidate slower: abs(2 - 1) / 1 * 100 = 100
        let regression = Comparison::between(&fast, &slow).unwrap();
        assert!((regression.delta_mean - 100.0).abs() < 1e-9);

        // Candidate faster: abs(1 - 2) / 2 * 100 = 50
        let improvement = Comparison::between(&slow, &fast).unwrap();
        assert!((improvement.delta_mean - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_equal_sequences_have_zero_delta() {
        let stats = SampleStats::from_samples(&[2.0; 5]).unwrap();
        let cmp = Comparison::between(&stats, &stats).unwrap();
        assert_eq!(cmp.delta_mean, 0.0);
        assert_eq!(cmp.delta_min, 0.0);
        assert_eq!(cmp.delta_max, 0.0);
    }

    #[test]
    fn test_zero_baseline_is_an_error() {
        let zero = SampleStats {
            min: 0.0,
            max: 0.0,
            mean: 0.0,
        };
        let candidate = SampleStats {
            min: 1.0,
            max: 1.0,
            mean: 1.0,
        };

        let err = Comparison::between(&zero, &candidate).unwrap_err();
        assert!(matches!(err, StatsError::ZeroBaseline { stat: "min" }));
    }

    #[test]
    fn test_uneven_samples_delta_per_statistic() {
        let baseline = SampleStats::from_samples(&[1.0, 2.0, 3.0]).unwrap();
        let candidate = SampleStats::from_samples(&[2.0, 2.0, 2.0]).unwrap();

        let cmp = Comparison::between(&baseline, &candidate).unwrap();
        // min: abs(2 - 1) / 1 = 100%
        assert!((cmp.delta_min - 100.0).abs() < 1e-9);
        // max: abs(2 - 3) / 3 = 33.33%
        assert!((cmp.delta_max - 100.0 / 3.0).abs() < 1e-9);
        // mean: abs(2 - 2) / 2 = 0%
        assert!(cmp.delta_mean.abs() < 1e-9);
    }
}

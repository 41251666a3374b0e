//! Classical vs robust comparison

use crate::report::{CentralComparison, ComparisonReport, DispersionComparison, OutlierDetection};
use crate::verdict::Verdict;
use statguard_classical::ClassicalStats;
use statguard_core::{math, PreparedSample, Result, StatsEngine};
use statguard_robust::RobustStats;
use tracing::{debug, instrument};

/// Noise ratio reported when the robust deviation vanishes but the classical one does not
pub const UNBOUNDED_NOISE_RATIO: f64 = 2.0;
/// Noise ratio reported when both deviations vanish
pub const NEUTRAL_NOISE_RATIO: f64 = 1.0;

/// `classical / robust`, with sentinels for a vanishing robust deviation
pub fn noise_ratio(classical_deviation: f64, robust_deviation: f64) -> f64 {
    if !math::is_near_zero(robust_deviation) {
        classical_deviation / robust_deviation
    } else if !math::is_near_zero(classical_deviation) {
        UNBOUNDED_NOISE_RATIO
    } else {
        NEUTRAL_NOISE_RATIO
    }
}

/// Runs one robust and one classical engine over the same prepared sample
///
/// The sample is validated and sorted once; the engines only see the
/// [`PreparedSample`].
///
/// # Example
///
/// ```rust
/// use statguard_compare::{Comparator, Verdict};
///
/// let report = Comparator::new().compare(&[10.0, 10.0, 11.0, 12.0, 10.0, 500.0], 2).unwrap();
/// assert_eq!(report.verdict, Verdict::HighContamination);
/// assert_eq!(report.outlier_detection.tukey_count, 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Comparator<R = RobustStats, C = ClassicalStats>
where
    R: StatsEngine,
    C: StatsEngine,
{
    robust: R,
    classical: C,
}

impl Comparator {
    /// Comparator with default-configured engines
    pub fn new() -> Self {
        Self::default()
    }
}

impl<R: StatsEngine, C: StatsEngine> Comparator<R, C> {
    /// Comparator over caller-configured engines
    pub fn with_engines(robust: R, classical: C) -> Self {
        Self { robust, classical }
    }

    pub fn robust(&self) -> &R {
        &self.robust
    }

    pub fn classical(&self) -> &C {
        &self.classical
    }

    /// Compare both views of `data`, rounding reported values to `decimals`
    ///
    /// The verdict is taken from the unrounded bias and noise ratio.
    #[instrument(skip(self, data), fields(n = data.len(), robust = self.robust.name(), classical = self.classical.name()))]
    pub fn compare(&self, data: &[f64], decimals: u32) -> Result<ComparisonReport> {
        let sample = PreparedSample::new(data, true)?;

        let mean = self.classical.mean_prepared(&sample)?;
        let median = self.robust.median_prepared(&sample)?;
        let std_dev = self.classical.deviation_prepared(&sample)?;
        let robust_deviation = self.robust.deviation_prepared(&sample)?;

        let bias_percent = math::percent_of(mean - median, median);
        let ratio = noise_ratio(std_dev, robust_deviation);
        let verdict = Verdict::from_measures(bias_percent, ratio);
        debug!(bias_percent, noise_ratio = ratio, ?verdict, "comparison verdict");

        let round = |x: f64| math::round_to(x, decimals);
        Ok(ComparisonReport {
            central_comparison: CentralComparison {
                classical_mean: round(mean),
                robust_median: round(median),
                absolute_difference: round((mean - median).abs()),
                bias_percent: round(bias_percent),
            },
            dispersion_comparison: DispersionComparison {
                std_dev: round(std_dev),
                robust_deviation: round(robust_deviation),
                noise_ratio: round(ratio),
            },
            outlier_detection: OutlierDetection {
                tukey_count: self.robust.outliers_prepared(&sample)?.len(),
                z_score_count: self.classical.outliers_prepared(&sample)?.len(),
            },
            verdict,
        })
    }
}

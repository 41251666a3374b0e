//! The classical statistics engine

use crate::summary::ClassicalSummary;
use statguard_core::{math, PreparedSample, Result, StatsEngine, SummaryOptions};
use statguard_spread::{variance_unchecked, VarianceKind};
use tracing::{debug, instrument};

/// |Z| above which a value is reported as an outlier
pub const Z_SCORE_THRESHOLD: f64 = 3.0;

/// Mean and standard-deviation based statistics
///
/// Sensitive to contamination by construction; paired with the robust engine
/// by the comparator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassicalStats;

impl ClassicalStats {
    pub fn new() -> Self {
        Self
    }

    fn prepare(data: &[f64]) -> Result<PreparedSample> {
        PreparedSample::new(data, false)
    }

    /// Variance dividing by n - 1
    pub fn sample_variance(&self, data: &[f64]) -> Result<f64> {
        let sample = Self::prepare(data)?;
        Ok(variance_unchecked(sample.values(), VarianceKind::Sample))
    }

    /// Variance dividing by n
    pub fn population_variance(&self, data: &[f64]) -> Result<f64> {
        let sample = Self::prepare(data)?;
        Ok(variance_unchecked(sample.values(), VarianceKind::Population))
    }

    /// Square root of the sample variance
    pub fn std_dev(&self, data: &[f64]) -> Result<f64> {
        Ok(self.sample_variance(data)?.sqrt())
    }

    /// Z-scores `(x - mean) / std`, `None` for a constant sample
    pub fn z_scores(&self, data: &[f64]) -> Result<Option<Vec<f64>>> {
        let sample = Self::prepare(data)?;
        let mean = math::mean(sample.values());
        let std = variance_unchecked(sample.values(), VarianceKind::Sample).sqrt();
        if std == 0.0 {
            return Ok(None);
        }
        Ok(Some(sample.values().iter().map(|x| (x - mean) / std).collect()))
    }

    fn z_outliers(values: &[f64], mean: f64, std: f64) -> Vec<f64> {
        if std == 0.0 {
            return Vec::new();
        }
        values
            .iter()
            .copied()
            .filter(|x| ((x - mean) / std).abs() > Z_SCORE_THRESHOLD)
            .collect()
    }

    /// All classical statistics from one prepared sample
    #[instrument(skip(self, data), fields(n = data.len(), sort = options.sort, decimals = options.decimals))]
    pub fn classical_summary(&self, data: &[f64], options: &SummaryOptions) -> Result<ClassicalSummary> {
        let sample = PreparedSample::new(data, options.sort)?;
        let mean = math::mean(sample.values());
        let sample_variance = variance_unchecked(sample.values(), VarianceKind::Sample);
        let std = sample_variance.sqrt();
        let round = |x: f64| math::round_to(x, options.decimals);

        let summary = ClassicalSummary {
            mean: round(mean),
            median: round(math::median_sorted(sample.sorted())),
            standard_deviation: round(std),
            sample_variance: round(sample_variance),
            cv: round(math::percent_of(std, mean)),
            z_score_outliers: Self::z_outliers(sample.values(), mean, std),
            count: sample.len(),
        };
        debug!(outliers = summary.z_score_outliers.len(), "classical summary computed");
        Ok(summary)
    }
}

impl StatsEngine for ClassicalStats {
    type Summary = ClassicalSummary;

    fn name(&self) -> &str {
        "Classical"
    }

    fn mean(&self, data: &[f64]) -> Result<f64> {
        self.mean_prepared(&Self::prepare(data)?)
    }

    fn mean_prepared(&self, sample: &PreparedSample) -> Result<f64> {
        Ok(math::mean(sample.values()))
    }

    fn median_prepared(&self, sample: &PreparedSample) -> Result<f64> {
        Ok(math::median_sorted(sample.sorted()))
    }

    /// Sample standard deviation
    fn deviation(&self, data: &[f64]) -> Result<f64> {
        self.std_dev(data)
    }

    fn deviation_prepared(&self, sample: &PreparedSample) -> Result<f64> {
        Ok(variance_unchecked(sample.values(), VarianceKind::Sample).sqrt())
    }

    /// std / |mean| · 100, `0.0` for a mean near zero
    fn cv(&self, data: &[f64]) -> Result<f64> {
        self.cv_prepared(&Self::prepare(data)?)
    }

    fn cv_prepared(&self, sample: &PreparedSample) -> Result<f64> {
        let mean = math::mean(sample.values());
        let std = variance_unchecked(sample.values(), VarianceKind::Sample).sqrt();
        Ok(math::percent_of(std, mean))
    }

    /// Values with |Z| > 3 in the caller's order; none for a constant sample
    fn outliers(&self, data: &[f64]) -> Result<Vec<f64>> {
        self.outliers_prepared(&Self::prepare(data)?)
    }

    fn outliers_prepared(&self, sample: &PreparedSample) -> Result<Vec<f64>> {
        let mean = math::mean(sample.values());
        let std = variance_unchecked(sample.values(), VarianceKind::Sample).sqrt();
        Ok(Self::z_outliers(sample.values(), mean, std))
    }

    fn summary(&self, data: &[f64], options: &SummaryOptions) -> Result<ClassicalSummary> {
        self.classical_summary(data, options)
    }
}

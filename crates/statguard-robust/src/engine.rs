//! The robust statistics engine

use crate::confidence::{critical_value, ConfidenceInterval, DEFAULT_LEVEL, Z_95};
use crate::fences::{check_multiplier, TukeyFences, DEFAULT_MULTIPLIER};
use crate::huber::{Huber, HuberConfig, HuberEstimate};
use crate::summary::RobustSummary;
use serde::{Deserialize, Serialize};
use statguard_core::{math, PreparedSample, Result, StatsEngine, SummaryOptions};
use statguard_quantile::{HyndmanFan, QuantileType};
use statguard_spread::{quartiles_sorted, Mad, RobustDeviation, SpreadEstimator, NORMAL_CONSISTENCY};
use tracing::{debug, instrument};

/// Configuration of [`RobustStats`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RobustConfig {
    /// Quartile definition behind IQR, S* and the fences
    pub quantile_type: QuantileType,
    /// Tukey fence multiplier
    pub fence_multiplier: f64,
    /// Huber mean parameters
    pub huber: HuberConfig,
}

impl RobustConfig {
    pub fn new() -> Self {
        Self {
            quantile_type: QuantileType::Type7,
            fence_multiplier: DEFAULT_MULTIPLIER,
            huber: HuberConfig::new(),
        }
    }

    pub fn with_quantile_type(mut self, quantile_type: QuantileType) -> Self {
        self.quantile_type = quantile_type;
        self
    }

    pub fn with_fence_multiplier(mut self, multiplier: f64) -> Self {
        self.fence_multiplier = multiplier;
        self
    }

    pub fn with_huber(mut self, huber: HuberConfig) -> Self {
        self.huber = huber;
        self
    }

    pub fn validate(&self) -> Result<()> {
        check_multiplier(self.fence_multiplier)?;
        self.huber.validate()
    }
}

impl Default for RobustConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Outlier-resistant descriptive statistics
///
/// Each public slice method validates the sample (at least two finite values)
/// and works on a private sorted copy. The [`StatsEngine`] `*_prepared`
/// methods reuse a [`PreparedSample`] as given.
///
/// # Example
///
/// ```rust
/// use statguard_robust::{RobustStats, StatsEngine};
///
/// let stats = RobustStats::new();
/// let data = [1.0, 2.0, 3.0, 4.0, 5.0, 100.0];
///
/// assert_eq!(stats.median(&data).unwrap(), 3.5);
/// assert_eq!(stats.outliers(&data).unwrap(), vec![100.0]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RobustStats {
    config: RobustConfig,
}

/// Everything derived from one sorted sample
struct Measures {
    median: f64,
    q1: f64,
    q3: f64,
    mad: f64,
    robust_deviation: f64,
}

impl Measures {
    fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }
}

impl RobustStats {
    /// Engine with type-7 quartiles, 1.5 fences and default Huber parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with a validated configuration
    pub fn with_config(config: RobustConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Same engine with a different quartile definition
    pub fn with_quantile_type(mut self, quantile_type: QuantileType) -> Self {
        self.config.quantile_type = quantile_type;
        self
    }

    pub fn config(&self) -> &RobustConfig {
        &self.config
    }

    fn quartile_estimator(&self) -> HyndmanFan {
        HyndmanFan::new(self.config.quantile_type)
    }

    fn prepare(data: &[f64]) -> Result<PreparedSample> {
        PreparedSample::new(data, true)
    }

    fn measures(&self, sorted: &[f64]) -> Result<Measures> {
        let (q1, q3) = quartiles_sorted(sorted, &self.quartile_estimator())?;
        let mad = Mad.estimate_sorted(sorted, &HyndmanFan::default())?;
        Ok(Measures {
            median: math::median_sorted(sorted),
            q1,
            q3,
            mad,
            robust_deviation: RobustDeviation::from_iqr(q3 - q1, sorted.len()),
        })
    }

    fn fences_of(&self, measures: &Measures) -> TukeyFences {
        TukeyFences::from_quartiles(measures.q1, measures.q3, self.config.fence_multiplier)
    }

    /// Median of the sample
    pub fn median(&self, data: &[f64]) -> Result<f64> {
        self.median_prepared(&Self::prepare(data)?)
    }

    /// Interquartile range with the configured quartile definition
    pub fn iqr(&self, data: &[f64]) -> Result<f64> {
        let sample = Self::prepare(data)?;
        let (q1, q3) = quartiles_sorted(sample.sorted(), &self.quartile_estimator())?;
        Ok(q3 - q1)
    }

    /// Median absolute deviation from the median
    pub fn mad(&self, data: &[f64]) -> Result<f64> {
        let sample = Self::prepare(data)?;
        Mad.estimate_sorted(sample.sorted(), &HyndmanFan::default())
    }

    /// MAD scaled by 1.4826, comparable to a standard deviation
    pub fn scaled_mad(&self, data: &[f64]) -> Result<f64> {
        self.deviation_prepared(&Self::prepare(data)?)
    }

    /// S* = (1.25 / 1.35) · IQR / √n
    pub fn robust_deviation(&self, data: &[f64]) -> Result<f64> {
        let sample = Self::prepare(data)?;
        RobustDeviation.estimate_sorted(sample.sorted(), &self.quartile_estimator())
    }

    /// S² of the normalized IQR deviation
    pub fn robust_variance(&self, data: &[f64]) -> Result<f64> {
        Ok(self.robust_deviation(data)?.powi(2))
    }

    /// S* / |median| · 100, `0.0` for a median near zero
    pub fn robust_cv(&self, data: &[f64]) -> Result<f64> {
        let sample = Self::prepare(data)?;
        let measures = self.measures(sample.sorted())?;
        Ok(math::percent_of(measures.robust_deviation, measures.median))
    }

    /// Tukey fences of the sample
    pub fn fences(&self, data: &[f64]) -> Result<TukeyFences> {
        let sample = Self::prepare(data)?;
        let measures = self.measures(sample.sorted())?;
        Ok(self.fences_of(&measures))
    }

    /// 95% interval `median ± 1.96·S*`
    pub fn confidence_interval(&self, data: &[f64]) -> Result<ConfidenceInterval> {
        let sample = Self::prepare(data)?;
        let measures = self.measures(sample.sorted())?;
        Ok(ConfidenceInterval::symmetric(
            measures.median,
            measures.robust_deviation,
            Z_95,
            DEFAULT_LEVEL,
        ))
    }

    /// `median ± z·S*` for an arbitrary level in (0, 1)
    pub fn confidence_interval_at(&self, data: &[f64], level: f64) -> Result<ConfidenceInterval> {
        let z = critical_value(level)?;
        let sample = Self::prepare(data)?;
        let measures = self.measures(sample.sorted())?;
        Ok(ConfidenceInterval::symmetric(
            measures.median,
            measures.robust_deviation,
            z,
            level,
        ))
    }

    /// Huber M-estimate of location with the configured parameters
    pub fn huber_mean(&self, data: &[f64]) -> Result<HuberEstimate> {
        let sample = Self::prepare(data)?;
        Huber::new(self.config.huber)?.fit(sample.values())
    }

    /// All robust statistics from one prepared sample
    ///
    /// Scalars are rounded to `options.decimals`; outliers and interval
    /// bounds keep full precision.
    #[instrument(skip(self, data), fields(n = data.len(), sort = options.sort, decimals = options.decimals))]
    pub fn robust_summary(&self, data: &[f64], options: &SummaryOptions) -> Result<RobustSummary> {
        let sample = PreparedSample::new(data, options.sort)?;
        let measures = self.measures(sample.sorted())?;
        let fences = self.fences_of(&measures);
        let interval =
            ConfidenceInterval::symmetric(measures.median, measures.robust_deviation, Z_95, DEFAULT_LEVEL);
        let round = |x: f64| math::round_to(x, options.decimals);

        let summary = RobustSummary {
            mean: round(math::mean(sample.values())),
            median: round(measures.median),
            robust_deviation: round(measures.robust_deviation),
            robust_variance: round(measures.robust_deviation.powi(2)),
            robust_cv: round(math::percent_of(measures.robust_deviation, measures.median)),
            iqr: round(measures.iqr()),
            mad: round(measures.mad),
            outliers: fences.outliers(sample.values()),
            confidence_interval: interval.bounds(),
            count: sample.len(),
        };
        debug!(outliers = summary.outliers.len(), "robust summary computed");
        Ok(summary)
    }
}

impl StatsEngine for RobustStats {
    type Summary = RobustSummary;

    fn name(&self) -> &str {
        "Robust"
    }

    fn mean_prepared(&self, sample: &PreparedSample) -> Result<f64> {
        Ok(math::mean(sample.values()))
    }

    fn median_prepared(&self, sample: &PreparedSample) -> Result<f64> {
        Ok(math::median_sorted(sample.sorted()))
    }

    /// Scaled MAD, the robust counterpart of the standard deviation
    fn deviation_prepared(&self, sample: &PreparedSample) -> Result<f64> {
        Ok(Mad.estimate_sorted(sample.sorted(), &HyndmanFan::default())? * NORMAL_CONSISTENCY)
    }

    /// Scaled MAD / |median| · 100, `0.0` for a median near zero
    fn cv_prepared(&self, sample: &PreparedSample) -> Result<f64> {
        let measures = self.measures(sample.sorted())?;
        Ok(math::percent_of(measures.mad * NORMAL_CONSISTENCY, measures.median))
    }

    fn outliers_prepared(&self, sample: &PreparedSample) -> Result<Vec<f64>> {
        let measures = self.measures(sample.sorted())?;
        Ok(self.fences_of(&measures).outliers(sample.values()))
    }

    fn summary(&self, data: &[f64], options: &SummaryOptions) -> Result<RobustSummary> {
        self.robust_summary(data, options)
    }
}

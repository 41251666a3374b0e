//! Core traits for statistical estimation
//!
//! Algorithm-specific traits (`QuantileEstimator`, `SpreadEstimator`) are
//! defined in their respective crates and build on these.

use crate::sample::{sorted_copy, PreparedSample};
use crate::{Result, SummaryOptions};

/// Base trait for all central tendency estimators
///
/// Implementations include the mean, the median and the Huber M-estimator.
///
/// # API Convention
///
/// - `estimate` works on a private sorted copy and never mutates the input
/// - `estimate_sorted` requires pre-sorted data
///
/// # Example
///
/// ```rust
/// use statguard_core::{CentralTendencyEstimator, Result, Error};
///
/// #[derive(Clone)]
/// struct Midrange;
///
/// impl CentralTendencyEstimator for Midrange {
///     fn estimate_sorted(&self, sorted_data: &[f64]) -> Result<f64> {
///         match (sorted_data.first(), sorted_data.last()) {
///             (Some(lo), Some(hi)) => Ok((lo + hi) / 2.0),
///             _ => Err(Error::insufficient(1, 0)),
///         }
///     }
///
///     fn name(&self) -> &str { "Midrange" }
///     fn is_robust(&self) -> bool { false }
///     fn breakdown_point(&self) -> f64 { 0.0 }
/// }
///
/// assert_eq!(Midrange.estimate(&[3.0, 1.0, 2.0]).unwrap(), 2.0);
/// ```
pub trait CentralTendencyEstimator: Send + Sync + Clone {
    /// Estimate the central tendency from a sample in any order
    fn estimate(&self, data: &[f64]) -> Result<f64> {
        let sorted = sorted_copy(data);
        self.estimate_sorted(&sorted)
    }

    /// Estimate the central tendency from pre-sorted data
    fn estimate_sorted(&self, sorted_data: &[f64]) -> Result<f64>;

    /// Human-readable name of the estimator
    fn name(&self) -> &str;

    /// Whether this estimator is robust to outliers
    fn is_robust(&self) -> bool;

    /// The breakdown point (fraction of contamination the estimator can handle)
    /// - 0.0 for non-robust estimators (e.g., mean)
    /// - 0.5 for maximally robust estimators (e.g., median)
    fn breakdown_point(&self) -> f64;
}

/// Capability set shared by the classical and the robust engine
///
/// Both engines answer the same questions (where is the center, how wide is
/// the spread, which values are outliers) with different estimators. The
/// comparator holds one engine of each kind and contrasts the answers.
///
/// The slice methods validate their input and fail with
/// [`Error::InvalidDataSet`](crate::Error::InvalidDataSet) for fewer than two
/// values or a non-numeric entry. The `*_prepared` methods take a sample that
/// was validated and sorted once and do neither again.
pub trait StatsEngine: Send + Sync + Clone {
    /// Summary record produced by [`StatsEngine::summary`]
    type Summary;

    /// Human-readable engine name
    fn name(&self) -> &str;

    /// Arithmetic mean
    fn mean(&self, data: &[f64]) -> Result<f64> {
        self.mean_prepared(&PreparedSample::new(data, true)?)
    }

    /// Median
    fn median(&self, data: &[f64]) -> Result<f64> {
        self.median_prepared(&PreparedSample::new(data, true)?)
    }

    /// The engine's scale estimate, comparable to a standard deviation
    fn deviation(&self, data: &[f64]) -> Result<f64> {
        self.deviation_prepared(&PreparedSample::new(data, true)?)
    }

    /// Coefficient of variation in percent
    fn cv(&self, data: &[f64]) -> Result<f64> {
        self.cv_prepared(&PreparedSample::new(data, true)?)
    }

    /// Values the engine flags as outliers, in the caller's order
    fn outliers(&self, data: &[f64]) -> Result<Vec<f64>> {
        self.outliers_prepared(&PreparedSample::new(data, true)?)
    }

    fn mean_prepared(&self, sample: &PreparedSample) -> Result<f64>;

    fn median_prepared(&self, sample: &PreparedSample) -> Result<f64>;

    fn deviation_prepared(&self, sample: &PreparedSample) -> Result<f64>;

    fn cv_prepared(&self, sample: &PreparedSample) -> Result<f64>;

    fn outliers_prepared(&self, sample: &PreparedSample) -> Result<Vec<f64>>;

    /// All statistics of the engine computed from one prepared sample
    fn summary(&self, data: &[f64], options: &SummaryOptions) -> Result<Self::Summary>;
}

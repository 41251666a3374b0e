//! Core traits for spread estimation

use statguard_core::sample::sorted_copy;
use statguard_core::Result;
use statguard_quantile::{HyndmanFan, QuantileEstimator};

/// Intrinsic properties of a spread estimator that don't depend on implementation details
pub trait SpreadEstimatorProperties {
    /// Get the name of this spread estimator
    fn name(&self) -> &str;

    /// Check if this estimator is robust to outliers
    fn is_robust(&self) -> bool;

    /// Get the asymptotic breakdown point (0.0 to 0.5)
    fn breakdown_point(&self) -> f64;

    /// Get the efficiency of this estimator relative to the standard deviation
    /// for normal distributions (0.0 to 1.0)
    fn gaussian_efficiency(&self) -> f64;
}

/// Parameterized trait for spread/scale estimators
///
/// Estimators are parameterized by the quantile estimator they rely on rather
/// than storing it, so one engine can pair the same spread estimator with
/// different quantile definitions.
pub trait SpreadEstimator<Q: QuantileEstimator = HyndmanFan>: SpreadEstimatorProperties {
    /// Estimate spread from a sample in any order
    fn estimate(&self, data: &[f64], quantile_est: &Q) -> Result<f64> {
        let sorted = sorted_copy(data);
        self.estimate_sorted(&sorted, quantile_est)
    }

    /// Compute spread from pre-sorted data
    fn estimate_sorted(&self, sorted_data: &[f64], quantile_est: &Q) -> Result<f64>;
}

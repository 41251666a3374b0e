//! Core traits for quantile estimation

use crate::Result;
use statguard_core::sample::sorted_copy;
use statguard_core::CentralTendencyEstimator;

/// Main trait for quantile estimation
///
/// This extends `CentralTendencyEstimator` since the median (p = 0.5) is a
/// measure of central tendency.
///
/// Probabilities outside [0, 1] are clamped to the nearest bound. A sample of
/// one value yields that value for every probability.
pub trait QuantileEstimator: CentralTendencyEstimator {
    /// Estimate a single quantile from a sample in any order
    ///
    /// The input is left untouched; a private sorted copy is used.
    fn quantile(&self, data: &[f64], p: f64) -> Result<f64> {
        let sorted = sorted_copy(data);
        self.quantile_sorted(&sorted, p)
    }

    /// Estimate a single quantile from pre-sorted data
    fn quantile_sorted(&self, sorted_data: &[f64], p: f64) -> Result<f64>;

    /// Estimate several quantiles from a sample in any order
    fn quantiles(&self, data: &[f64], ps: &[f64]) -> Result<Vec<f64>> {
        let sorted = sorted_copy(data);
        self.quantiles_sorted(&sorted, ps)
    }

    /// Estimate several quantiles from pre-sorted data
    fn quantiles_sorted(&self, sorted_data: &[f64], ps: &[f64]) -> Result<Vec<f64>> {
        ps.iter()
            .map(|&p| self.quantile_sorted(sorted_data, p))
            .collect()
    }
}

//! Normalized IQR deviation S*
//!
//! `S* = (1.25 / 1.35) · IQR / √n`. The IQR of a normal distribution is
//! about 1.35σ; the 1.25 factor and the √n divisor make S* a standard-error
//! sized spread, used for the robust CV and the median confidence interval.

use crate::iqr::Iqr;
use crate::traits::{SpreadEstimator, SpreadEstimatorProperties};
use statguard_core::Result;
use statguard_quantile::QuantileEstimator;

/// Numerator of the S* normalization
pub const SCALE_NUMERATOR: f64 = 1.25;
/// Normal IQR in units of σ
pub const NORMAL_IQR_SIGMAS: f64 = 1.35;

/// The S* estimator
#[derive(Debug, Clone, Copy, Default)]
pub struct RobustDeviation;

impl RobustDeviation {
    pub fn new() -> Self {
        Self
    }

    /// S* from an already computed IQR and the sample size
    pub fn from_iqr(iqr: f64, n: usize) -> f64 {
        (SCALE_NUMERATOR / NORMAL_IQR_SIGMAS) * iqr / (n as f64).sqrt()
    }

    /// Square of S*
    pub fn variance_sorted<Q: QuantileEstimator>(&self, sorted_data: &[f64], quantile_est: &Q) -> Result<f64> {
        let deviation = self.estimate_sorted(sorted_data, quantile_est)?;
        Ok(deviation * deviation)
    }
}

impl SpreadEstimatorProperties for RobustDeviation {
    fn name(&self) -> &str {
        "Normalized IQR deviation"
    }

    fn is_robust(&self) -> bool {
        true
    }

    fn breakdown_point(&self) -> f64 {
        0.25
    }

    fn gaussian_efficiency(&self) -> f64 {
        0.37
    }
}

impl<Q: QuantileEstimator> SpreadEstimator<Q> for RobustDeviation {
    fn estimate_sorted(&self, sorted_data: &[f64], quantile_est: &Q) -> Result<f64> {
        let iqr = Iqr.estimate_sorted(sorted_data, quantile_est)?;
        Ok(Self::from_iqr(iqr, sorted_data.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use statguard_quantile::HyndmanFan;

    #[test]
    fn test_reference_sample() {
        let data = [87.30, 84.00, 85.40, 78.00, 85.00, 89.00, 79.00, 89.00, 76.00, 86.50];
        let q = HyndmanFan::default();
        let s = RobustDeviation.estimate(&data, &q).unwrap();
        assert_relative_eq!(s, 2.005703886310498, epsilon = 1e-9);

        let mut sorted = data.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
        let variance = RobustDeviation.variance_sorted(&sorted, &q).unwrap();
        assert_relative_eq!(variance, 4.022848, epsilon = 1e-6);
    }

    #[test]
    fn test_negative_values() {
        let s = RobustDeviation.estimate(&[-9.0, -7.0, -5.0, -3.0], &HyndmanFan::default()).unwrap();
        assert_relative_eq!(s, 1.388888888888889, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_spread() {
        assert_eq!(RobustDeviation::from_iqr(0.0, 25), 0.0);
    }
}

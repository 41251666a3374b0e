//! Interquartile Range (IQR) estimator

use crate::traits::{SpreadEstimator, SpreadEstimatorProperties};
use statguard_core::Result;
use statguard_quantile::QuantileEstimator;

/// First and third quartile of pre-sorted data
pub fn quartiles_sorted<Q: QuantileEstimator>(sorted_data: &[f64], quantile_est: &Q) -> Result<(f64, f64)> {
    let q1 = quantile_est.quantile_sorted(sorted_data, 0.25)?;
    let q3 = quantile_est.quantile_sorted(sorted_data, 0.75)?;
    Ok((q1, q3))
}

/// Interquartile Range estimator, Q3 - Q1
///
/// The quartile definition is whatever the supplied quantile estimator
/// applies; Hyndman-Fan type 7 is the usual choice.
#[derive(Debug, Clone, Copy, Default)]
pub struct Iqr;

impl Iqr {
    /// Create a new IQR estimator
    pub fn new() -> Self {
        Self
    }
}

impl SpreadEstimatorProperties for Iqr {
    fn name(&self) -> &str {
        "IQR"
    }

    fn is_robust(&self) -> bool {
        true
    }

    fn breakdown_point(&self) -> f64 {
        0.25
    }

    fn gaussian_efficiency(&self) -> f64 {
        0.37 // Approximate efficiency for IQR
    }
}

impl<Q: QuantileEstimator> SpreadEstimator<Q> for Iqr {
    fn estimate_sorted(&self, sorted_data: &[f64], quantile_est: &Q) -> Result<f64> {
        let (q1, q3) = quartiles_sorted(sorted_data, quantile_est)?;
        Ok(q3 - q1)
    }
}

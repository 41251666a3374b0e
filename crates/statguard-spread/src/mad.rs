//! Median Absolute Deviation (MAD) estimators

use crate::traits::{SpreadEstimator, SpreadEstimatorProperties};
use statguard_core::sample::sort_ascending;
use statguard_core::{Error, Result};
use statguard_quantile::QuantileEstimator;

/// Consistency factor making the MAD comparable to the standard deviation
/// for normally distributed data, 1 / Φ⁻¹(3/4)
pub const NORMAL_CONSISTENCY: f64 = 1.4826;

/// Median Absolute Deviation (MAD) estimator
///
/// `median(|xᵢ - median(x)|)`, both medians taken with the supplied quantile
/// estimator at p = 0.5.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mad;

impl Mad {
    /// Create a new MAD estimator
    pub fn new() -> Self {
        Self
    }
}

/// Absolute deviations from the median, sorted ascending
pub fn absolute_deviations_sorted<Q: QuantileEstimator>(
    sorted_data: &[f64],
    quantile_est: &Q,
) -> Result<Vec<f64>> {
    let center = quantile_est.quantile_sorted(sorted_data, 0.5)?;
    let mut deviations: Vec<f64> = sorted_data.iter().map(|x| (x - center).abs()).collect();
    sort_ascending(&mut deviations);
    Ok(deviations)
}

impl SpreadEstimatorProperties for Mad {
    fn name(&self) -> &str {
        "MAD"
    }

    fn is_robust(&self) -> bool {
        true
    }

    fn breakdown_point(&self) -> f64 {
        0.5
    }

    fn gaussian_efficiency(&self) -> f64 {
        0.3675 // 36.75% efficiency for MAD
    }
}

impl<Q: QuantileEstimator> SpreadEstimator<Q> for Mad {
    fn estimate_sorted(&self, sorted_data: &[f64], quantile_est: &Q) -> Result<f64> {
        let deviations = absolute_deviations_sorted(sorted_data, quantile_est)?;
        Ok(quantile_est.quantile_sorted(&deviations, 0.5)?)
    }
}

/// Standardized MAD estimator (scaled by consistency factor)
///
/// The consistency factor (1.4826) makes it comparable to standard deviation
/// for normally distributed data.
#[derive(Debug, Clone, Copy)]
pub struct StandardizedMad {
    consistency_factor: f64,
}

impl StandardizedMad {
    /// Create with default consistency factor
    pub fn new() -> Self {
        Self {
            consistency_factor: NORMAL_CONSISTENCY,
        }
    }

    /// Create with custom consistency factor
    pub fn with_factor(consistency_factor: f64) -> Result<Self> {
        if !consistency_factor.is_finite() || consistency_factor <= 0.0 {
            return Err(Error::invalid_argument(
                "Consistency factor",
                "must be a positive finite number",
            ));
        }
        Ok(Self { consistency_factor })
    }

    /// The multiplier applied to the raw MAD
    pub fn consistency_factor(&self) -> f64 {
        self.consistency_factor
    }
}

impl Default for StandardizedMad {
    fn default() -> Self {
        Self::new()
    }
}

impl SpreadEstimatorProperties for StandardizedMad {
    fn name(&self) -> &str {
        "Standardized MAD"
    }

    fn is_robust(&self) -> bool {
        true
    }

    fn breakdown_point(&self) -> f64 {
        0.5
    }

    fn gaussian_efficiency(&self) -> f64 {
        0.3675 // 36.75% efficiency for MAD
    }
}

impl<Q: QuantileEstimator> SpreadEstimator<Q> for StandardizedMad {
    fn estimate_sorted(&self, sorted_data: &[f64], quantile_est: &Q) -> Result<f64> {
        let mad = Mad.estimate_sorted(sorted_data, quantile_est)?;
        Ok(mad * self.consistency_factor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use statguard_quantile::HyndmanFan;

    const SAMPLE: [f64; 10] = [87.30, 84.00, 85.40, 78.00, 85.00, 89.00, 79.00, 89.00, 76.00, 86.50];

    #[test]
    fn test_mad_basic() {
        let data = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let result = Mad::new().estimate(&data, &HyndmanFan::default()).unwrap();
        assert_relative_eq!(result, 1.0);
    }

    #[test]
    fn test_mad_reference_sample() {
        let result = Mad.estimate(&SAMPLE, &HyndmanFan::default()).unwrap();
        assert_relative_eq!(result, 2.95, epsilon = 1e-10);
    }

    #[test]
    fn test_standardized_mad() {
        let smad = StandardizedMad::new();
        let result = smad.estimate(&SAMPLE, &HyndmanFan::default()).unwrap();
        assert_relative_eq!(result, 2.95 * 1.4826, epsilon = 1e-10);
    }

    #[test]
    fn test_custom_factor() {
        let smad = StandardizedMad::with_factor(2.0).unwrap();
        let result = smad.estimate(&[1.0, 2.0, 3.0, 4.0, 5.0], &HyndmanFan::default()).unwrap();
        assert_relative_eq!(result, 2.0);

        assert!(StandardizedMad::with_factor(0.0).unwrap_err().is_invalid_argument());
        assert!(StandardizedMad::with_factor(f64::NAN).is_err());
    }

    #[test]
    fn test_mad_with_outlier() {
        let data = vec![1.0, 2.0, 3.0, 4.0, 5.0, 100.0];
        let result = Mad.estimate(&data, &HyndmanFan::default()).unwrap();
        // Median 3.5, deviations 0.5 0.5 1.5 1.5 2.5 96.5
        assert_relative_eq!(result, 1.5);
    }

    #[test]
    fn test_constant_sample_has_zero_mad() {
        let result = Mad.estimate(&[4.0, 4.0, 4.0], &HyndmanFan::default()).unwrap();
        assert_eq!(result, 0.0);
    }
}

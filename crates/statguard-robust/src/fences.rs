//! Tukey outlier fences

use statguard_core::{Error, Result};
use statguard_quantile::QuantileEstimator;
use statguard_spread::quartiles_sorted;

/// Conventional fence multiplier
pub const DEFAULT_MULTIPLIER: f64 = 1.5;

/// Bounds `Q1 - m·IQR` and `Q3 + m·IQR`; values strictly outside are outliers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TukeyFences {
    pub lower: f64,
    pub upper: f64,
}

impl TukeyFences {
    pub fn from_quartiles(q1: f64, q3: f64, multiplier: f64) -> Self {
        let iqr = q3 - q1;
        Self {
            lower: q1 - multiplier * iqr,
            upper: q3 + multiplier * iqr,
        }
    }

    /// Fences from pre-sorted data, quartiles taken with `quantile_est`
    pub fn from_sorted<Q: QuantileEstimator>(
        sorted_data: &[f64],
        quantile_est: &Q,
        multiplier: f64,
    ) -> Result<Self> {
        check_multiplier(multiplier)?;
        let (q1, q3) = quartiles_sorted(sorted_data, quantile_est)?;
        Ok(Self::from_quartiles(q1, q3, multiplier))
    }

    /// Whether `value` lies within the fences (inclusive)
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }

    pub fn is_outlier(&self, value: f64) -> bool {
        !self.contains(value)
    }

    /// Outlying values of `data` in their given order, duplicates kept
    pub fn outliers(&self, data: &[f64]) -> Vec<f64> {
        data.iter().copied().filter(|&x| self.is_outlier(x)).collect()
    }
}

pub(crate) fn check_multiplier(multiplier: f64) -> Result<()> {
    if multiplier.is_finite() && multiplier > 0.0 {
        Ok(())
    } else {
        Err(Error::invalid_argument(
            "Fence multiplier",
            "must be a positive finite number",
        ))
    }
}

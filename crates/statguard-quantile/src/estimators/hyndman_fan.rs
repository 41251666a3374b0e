//! Hyndman-Fan sample quantiles

use super::{continuous, discrete};
use crate::{Error, QuantileEstimator, QuantileType, Result};
use statguard_core::sample::sorted_copy;
use statguard_core::CentralTendencyEstimator;
use tracing::trace;

/// Quantile estimator for one of the nine Hyndman-Fan definitions
///
/// # Example
///
/// ```rust
/// use statguard_quantile::{HyndmanFan, QuantileEstimator, QuantileType};
///
/// let estimator = HyndmanFan::new(QuantileType::Type6);
/// let q1 = estimator.quantile(&[4.0, 1.0, 3.0, 2.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0], 0.25).unwrap();
/// assert!((q1 - 2.75).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HyndmanFan {
    quantile_type: QuantileType,
}

impl HyndmanFan {
    /// Create an estimator for the given definition
    pub fn new(quantile_type: QuantileType) -> Self {
        Self { quantile_type }
    }

    /// Create an estimator from a numeric type identifier (1..=9)
    pub fn from_number(ty: i32) -> Result<Self> {
        Ok(Self::new(QuantileType::try_from(ty)?))
    }

    /// The definition this estimator applies
    pub fn quantile_type(&self) -> QuantileType {
        self.quantile_type
    }
}

impl CentralTendencyEstimator for HyndmanFan {
    fn estimate_sorted(&self, sorted_data: &[f64]) -> statguard_core::Result<f64> {
        Ok(self.quantile_sorted(sorted_data, 0.5)?)
    }

    fn name(&self) -> &str {
        match self.quantile_type {
            QuantileType::Type1 => "Hyndman-Fan Type 1",
            QuantileType::Type2 => "Hyndman-Fan Type 2",
            QuantileType::Type3 => "Hyndman-Fan Type 3",
            QuantileType::Type4 => "Hyndman-Fan Type 4",
            QuantileType::Type5 => "Hyndman-Fan Type 5",
            QuantileType::Type6 => "Hyndman-Fan Type 6",
            QuantileType::Type7 => "Hyndman-Fan Type 7",
            QuantileType::Type8 => "Hyndman-Fan Type 8",
            QuantileType::Type9 => "Hyndman-Fan Type 9",
        }
    }

    fn is_robust(&self) -> bool {
        true
    }

    fn breakdown_point(&self) -> f64 {
        0.5
    }
}

impl QuantileEstimator for HyndmanFan {
    fn quantile_sorted(&self, sorted_data: &[f64], p: f64) -> Result<f64> {
        Error::check_data(sorted_data)?;
        Error::check_probability(p)?;
        Ok(evaluate(sorted_data, p.clamp(0.0, 1.0), self.quantile_type))
    }

    fn quantiles_sorted(&self, sorted_data: &[f64], ps: &[f64]) -> Result<Vec<f64>> {
        Error::check_data(sorted_data)?;
        ps.iter()
            .map(|&p| {
                Error::check_probability(p)?;
                Ok(evaluate(sorted_data, p.clamp(0.0, 1.0), self.quantile_type))
            })
            .collect()
    }
}

/// Quantile of a sample in any order; the input is not modified
///
/// `ty` selects the definition (1..=9). Out-of-range probabilities are
/// clamped to [0, 1].
pub fn quantile(data: &[f64], p: f64, ty: i32) -> Result<f64> {
    let estimator = HyndmanFan::from_number(ty)?;
    Error::check_data(data)?;
    estimator.quantile_sorted(&sorted_copy(data), p)
}

/// Quantile of an ascending sample
pub fn quantile_sorted(sorted_data: &[f64], p: f64, ty: i32) -> Result<f64> {
    HyndmanFan::from_number(ty)?.quantile_sorted(sorted_data, p)
}

/// Dispatch on the definition; `sorted` is non-empty and `p` lies in [0, 1]
fn evaluate(sorted: &[f64], p: f64, ty: QuantileType) -> f64 {
    if sorted.len() == 1 {
        return sorted[0];
    }

    let value = match ty {
        QuantileType::Type1 => discrete::type1(sorted, p),
        QuantileType::Type2 => discrete::type2(sorted, p),
        QuantileType::Type3 => discrete::type3(sorted, p),
        continuous_type => {
            let (alpha, beta) = continuous_type
                .hyndman_fan_parameters()
                .unwrap_or((1.0, 1.0));
            continuous::interpolate(sorted, p, alpha, beta)
        }
    };
    trace!(n = sorted.len(), p, %ty, value, "quantile");
    value
}

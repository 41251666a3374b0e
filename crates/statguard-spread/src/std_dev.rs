//! Classical standard deviation

use crate::traits::{SpreadEstimator, SpreadEstimatorProperties};
use statguard_core::{math, sample, Error, Result};
use statguard_quantile::QuantileEstimator;

/// Divisor used for the variance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VarianceKind {
    /// Divide by n - 1
    #[default]
    Sample,
    /// Divide by n
    Population,
}

/// Variance of `data` around its mean
///
/// Sample variance needs two values, population variance one.
pub fn variance(data: &[f64], kind: VarianceKind) -> Result<f64> {
    let min_size = match kind {
        VarianceKind::Sample => 2,
        VarianceKind::Population => 1,
    };
    sample::validate(data, min_size)?;
    Ok(variance_unchecked(data, kind))
}

/// [`variance`] of a sample that is already known to be large enough and finite
pub fn variance_unchecked(data: &[f64], kind: VarianceKind) -> f64 {
    let mean = math::mean(data);
    let sum_sq: f64 = data.iter().map(|x| (x - mean).powi(2)).sum();
    let divisor = match kind {
        VarianceKind::Sample => data.len().saturating_sub(1),
        VarianceKind::Population => data.len(),
    };
    sum_sq / divisor as f64
}

/// Standard deviation, the square root of [`variance`]
///
/// Not robust: a single extreme value moves it without bound.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardDeviation {
    kind: VarianceKind,
}

impl StandardDeviation {
    /// Sample standard deviation (n - 1)
    pub fn sample() -> Self {
        Self {
            kind: VarianceKind::Sample,
        }
    }

    /// Population standard deviation (n)
    pub fn population() -> Self {
        Self {
            kind: VarianceKind::Population,
        }
    }

    pub fn kind(&self) -> VarianceKind {
        self.kind
    }

    /// Standard deviation without the quantile machinery
    pub fn compute(&self, data: &[f64]) -> Result<f64> {
        Ok(variance(data, self.kind)?.sqrt())
    }
}

impl SpreadEstimatorProperties for StandardDeviation {
    fn name(&self) -> &str {
        match self.kind {
            VarianceKind::Sample => "Standard deviation",
            VarianceKind::Population => "Population standard deviation",
        }
    }

    fn is_robust(&self) -> bool {
        false
    }

    fn breakdown_point(&self) -> f64 {
        0.0
    }

    fn gaussian_efficiency(&self) -> f64 {
        1.0
    }
}

impl<Q: QuantileEstimator> SpreadEstimator<Q> for StandardDeviation {
    fn estimate(&self, data: &[f64], _quantile_est: &Q) -> Result<f64> {
        self.compute(data)
    }

    fn estimate_sorted(&self, sorted_data: &[f64], _quantile_est: &Q) -> Result<f64> {
        self.compute(sorted_data)
    }
}

impl From<VarianceKind> for StandardDeviation {
    fn from(kind: VarianceKind) -> Self {
        Self { kind }
    }
}

/// Parse "sample" or "population", case-insensitively
impl std::str::FromStr for VarianceKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "sample" => Ok(Self::Sample),
            "population" => Ok(Self::Population),
            other => Err(Error::InvalidArgument(format!(
                "Variance kind must be 'sample' or 'population', got '{other}'"
            ))),
        }
    }
}

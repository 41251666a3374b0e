//! Normal-approximation confidence interval around the median

use serde::{Deserialize, Serialize};
use statguard_core::{Error, Result};
use statrs::distribution::{ContinuousCDF, Normal};
use std::fmt;

/// Two-sided 95% critical value of the standard normal distribution
pub const Z_95: f64 = 1.96;

/// Confidence level of the default interval
pub const DEFAULT_LEVEL: f64 = 0.95;

/// A confidence interval with lower and upper bounds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceInterval {
    /// Lower bound of the interval
    pub lower: f64,
    /// Upper bound of the interval
    pub upper: f64,
    /// The point estimate (center of interval)
    pub estimate: f64,
    /// Confidence level (e.g., 0.95 for 95% CI)
    pub confidence_level: f64,
}

impl ConfidenceInterval {
    /// `estimate ± z·scale`
    pub fn symmetric(estimate: f64, scale: f64, z: f64, confidence_level: f64) -> Self {
        let margin = z * scale;
        Self {
            lower: estimate - margin,
            upper: estimate + margin,
            estimate,
            confidence_level,
        }
    }

    /// Width of the confidence interval
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Check if a value is contained in the interval
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }

    pub fn bounds(&self) -> IntervalBounds {
        IntervalBounds {
            lower: self.lower,
            upper: self.upper,
        }
    }
}

impl fmt::Display for ConfidenceInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.1}% CI: [{}, {}], estimate: {}",
            self.confidence_level * 100.0,
            self.lower,
            self.upper,
            self.estimate
        )
    }
}

/// The exported form of an interval
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntervalBounds {
    pub lower: f64,
    pub upper: f64,
}

impl From<ConfidenceInterval> for IntervalBounds {
    fn from(ci: ConfidenceInterval) -> Self {
        ci.bounds()
    }
}

/// Two-sided critical value `Φ⁻¹(1/2 + level/2)`
///
/// The 95% level maps to exactly 1.96.
pub fn critical_value(level: f64) -> Result<f64> {
    if !(level > 0.0 && level < 1.0) {
        return Err(Error::InvalidArgument(format!(
            "Confidence level must be in (0, 1), got {level}"
        )));
    }
    if level == DEFAULT_LEVEL {
        return Ok(Z_95);
    }
    let normal = Normal::new(0.0, 1.0).map_err(|e| Error::InvalidArgument(e.to_string()))?;
    Ok(normal.inverse_cdf(0.5 + level / 2.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_critical_values() {
        assert_eq!(critical_value(0.95).unwrap(), 1.96);
        assert_relative_eq!(critical_value(0.90).unwrap(), 1.6448536269514722, epsilon = 1e-6);
        assert_relative_eq!(critical_value(0.99).unwrap(), 2.5758293035489004, epsilon = 1e-6);
    }

    #[test]
    fn test_invalid_levels() {
        for level in [0.0, 1.0, -0.5, 1.5, f64::NAN] {
            assert!(critical_value(level).unwrap_err().is_invalid_argument());
        }
    }

    #[test]
    fn test_symmetric_interval() {
        let ci = ConfidenceInterval::symmetric(10.0, 2.0, 1.96, 0.95);
        assert_relative_eq!(ci.lower, 6.08, epsilon = 1e-12);
        assert_relative_eq!(ci.upper, 13.92, epsilon = 1e-12);
        assert_relative_eq!(ci.width(), 7.84, epsilon = 1e-12);
        assert!(ci.contains(10.0));
        assert!(!ci.contains(14.0));

        let ci = ConfidenceInterval::symmetric(10.0, 2.0, 1.5, 0.9);
        assert_eq!(ci.to_string(), "90.0% CI: [7, 13], estimate: 10");
    }
}

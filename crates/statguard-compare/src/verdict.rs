//! Qualitative verdict of a comparison

use serde::{Deserialize, Serialize};
use std::fmt;

/// |bias%| above which the sample counts as heavily contaminated
pub const HIGH_BIAS_PERCENT: f64 = 10.0;
/// Noise ratio above which the sample counts as heavily contaminated
pub const HIGH_NOISE_RATIO: f64 = 1.5;
/// |bias%| above which the sample counts as moderately biased
pub const MODERATE_BIAS_PERCENT: f64 = 5.0;
/// Noise ratio above which the sample counts as moderately biased
pub const MODERATE_NOISE_RATIO: f64 = 1.2;

/// How far the classical view can be trusted for a sample
///
/// The thresholds are empirical rules of thumb, not derived from a test
/// statistic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// |bias| > 10% or noise ratio > 1.5
    HighContamination,
    /// |bias| > 5% or noise ratio > 1.2
    ModerateBias,
    /// Classical and robust views agree
    Stable,
}

impl Verdict {
    /// Classify from unrounded bias (percent) and noise ratio
    pub fn from_measures(bias_percent: f64, noise_ratio: f64) -> Self {
        let bias = bias_percent.abs();
        if bias > HIGH_BIAS_PERCENT || noise_ratio > HIGH_NOISE_RATIO {
            Self::HighContamination
        } else if bias > MODERATE_BIAS_PERCENT || noise_ratio > MODERATE_NOISE_RATIO {
            Self::ModerateBias
        } else {
            Self::Stable
        }
    }

    /// Whether robust metrics should be preferred
    pub fn recommends_robust(&self) -> bool {
        matches!(self, Self::HighContamination)
    }

    /// Human-readable advice
    pub fn message(&self) -> &'static str {
        match self {
            Self::HighContamination => {
                "ALERT: data heavily influenced by outliers. Robust metrics are recommended."
            }
            Self::ModerateBias => {
                "CAUTION: moderate bias present. Compare both metrics before deciding."
            }
            Self::Stable => {
                "STABLE: data follows a clean distribution. Classical statistics are reliable."
            }
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

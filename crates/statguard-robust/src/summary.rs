//! Summary record of the robust engine

use crate::confidence::IntervalBounds;
use serde::{Deserialize, Serialize};

/// Every robust statistic of one sample
///
/// Serialized with the keys `mean, median, robustDeviation, robustVariance,
/// robustCV, IQR, MAD, outliers, confidenceInterval, count`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RobustSummary {
    pub mean: f64,
    pub median: f64,
    /// S*
    #[serde(rename = "robustDeviation")]
    pub robust_deviation: f64,
    #[serde(rename = "robustVariance")]
    pub robust_variance: f64,
    /// S* relative to |median|, in percent
    #[serde(rename = "robustCV")]
    pub robust_cv: f64,
    #[serde(rename = "IQR")]
    pub iqr: f64,
    #[serde(rename = "MAD")]
    pub mad: f64,
    /// Values outside the Tukey fences, in the caller's order
    pub outliers: Vec<f64>,
    /// Unrounded 95% interval around the median
    #[serde(rename = "confidenceInterval")]
    pub confidence_interval: IntervalBounds,
    pub count: usize,
}

impl RobustSummary {
    pub fn has_outliers(&self) -> bool {
        !self.outliers.is_empty()
    }
}

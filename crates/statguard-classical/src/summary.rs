//! Summary record of the classical engine

use serde::{Deserialize, Serialize};

/// Every classical statistic of one sample
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassicalSummary {
    pub mean: f64,
    pub median: f64,
    /// Sample standard deviation (n - 1)
    pub standard_deviation: f64,
    pub sample_variance: f64,
    /// Standard deviation relative to |mean|, in percent
    #[serde(rename = "CV")]
    pub cv: f64,
    /// Values with |Z| > 3, in the caller's order
    pub z_score_outliers: Vec<f64>,
    pub count: usize,
}

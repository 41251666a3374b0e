//! Comparison report

use crate::verdict::Verdict;
use serde::{Deserialize, Serialize};

/// Classical mean against robust median
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CentralComparison {
    pub classical_mean: f64,
    pub robust_median: f64,
    pub absolute_difference: f64,
    /// (mean - median) / |median| · 100
    pub bias_percent: f64,
}

/// Standard deviation against scaled MAD
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DispersionComparison {
    pub std_dev: f64,
    /// MAD · 1.4826
    pub robust_deviation: f64,
    pub noise_ratio: f64,
}

/// Outlier counts of both rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutlierDetection {
    pub tukey_count: usize,
    pub z_score_count: usize,
}

/// Side-by-side view of one sample through both engines
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonReport {
    pub central_comparison: CentralComparison,
    pub dispersion_comparison: DispersionComparison,
    pub outlier_detection: OutlierDetection,
    pub verdict: Verdict,
}

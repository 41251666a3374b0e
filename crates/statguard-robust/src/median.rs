//! Sample median

use statguard_core::{math, sample, CentralTendencyEstimator, Result};

/// The sample median: the central order statistic, or the mean of the two
/// central ones for an even count
#[derive(Debug, Clone, Copy, Default)]
pub struct Median;

impl CentralTendencyEstimator for Median {
    fn estimate_sorted(&self, sorted_data: &[f64]) -> Result<f64> {
        sample::validate(sorted_data, 1)?;
        Ok(math::median_sorted(sorted_data))
    }

    fn name(&self) -> &str {
        "Median"
    }

    fn is_robust(&self) -> bool {
        true
    }

    fn breakdown_point(&self) -> f64 {
        0.5
    }
}

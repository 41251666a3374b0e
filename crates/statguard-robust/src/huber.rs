//! Huber M-estimator of location
//!
//! Iteratively reweighted mean: values within `k` of the current estimate get
//! weight 1, values further out get `k / |x - μ|`. Residuals are not rescaled,
//! so `k` is in the units of the data.

use serde::{Deserialize, Serialize};
use statguard_core::{math, sample, CentralTendencyEstimator, Error, Result};
use tracing::{debug, instrument, trace};

/// Default tuning constant (95% efficiency at the normal for unit scale)
pub const DEFAULT_K: f64 = 1.345;
/// Default iteration budget
pub const DEFAULT_MAX_ITERATIONS: usize = 50;
/// Default convergence tolerance between successive estimates
pub const DEFAULT_TOLERANCE: f64 = 1e-3;

/// Parameters of the Huber iteration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HuberConfig {
    /// Residual threshold beyond which values are downweighted
    pub k: f64,
    /// Maximum number of reweighting steps
    pub max_iterations: usize,
    /// Stop once successive estimates differ by less than this
    pub tolerance: f64,
}

impl HuberConfig {
    pub fn new() -> Self {
        Self {
            k: DEFAULT_K,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            tolerance: DEFAULT_TOLERANCE,
        }
    }

    pub fn with_k(mut self, k: f64) -> Self {
        self.k = k;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Check every parameter is usable
    pub fn validate(&self) -> Result<()> {
        if !(self.k.is_finite() && self.k > 0.0) {
            return Err(Error::invalid_argument("Huber k", "must be a positive finite number"));
        }
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(Error::invalid_argument(
                "Huber tolerance",
                "must be a positive finite number",
            ));
        }
        if self.max_iterations == 0 {
            return Err(Error::invalid_argument(
                "Huber max_iterations",
                "must be at least 1",
            ));
        }
        Ok(())
    }
}

impl Default for HuberConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome of a Huber fit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HuberEstimate {
    /// The location estimate
    pub value: f64,
    /// Reweighting steps performed
    pub iterations: usize,
    /// Whether the tolerance was reached within the budget
    pub converged: bool,
}

/// Huber location estimator
#[derive(Debug, Clone, Copy, Default)]
pub struct Huber {
    config: HuberConfig,
}

impl Huber {
    /// Create an estimator, rejecting an invalid configuration
    pub fn new(config: HuberConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &HuberConfig {
        &self.config
    }

    /// Run the iteration from the arithmetic mean
    ///
    /// Exhausting the budget is not an error: the last estimate is returned
    /// with `converged == false`.
    #[instrument(skip(self, data), fields(n = data.len(), k = self.config.k))]
    pub fn fit(&self, data: &[f64]) -> Result<HuberEstimate> {
        sample::validate(data, 1)?;
        let HuberConfig {
            k,
            max_iterations,
            tolerance,
        } = self.config;

        let mut mu = math::mean(data);
        for iteration in 1..=max_iterations {
            let (weighted_sum, weight_total) =
                data.iter().fold((0.0, 0.0), |(sum, total), &x| {
                    let residual = (x - mu).abs();
                    let weight = if residual <= k { 1.0 } else { k / residual };
                    (sum + weight * x, total + weight)
                });
            let next = weighted_sum / weight_total;
            trace!(iteration, mu = next, "huber step");

            if (next - mu).abs() < tolerance {
                debug!(iterations = iteration, value = next, "huber converged");
                return Ok(HuberEstimate {
                    value: next,
                    iterations: iteration,
                    converged: true,
                });
            }
            mu = next;
        }

        debug!(iterations = max_iterations, value = mu, "huber did not converge");
        Ok(HuberEstimate {
            value: mu,
            iterations: max_iterations,
            converged: false,
        })
    }
}

impl CentralTendencyEstimator for Huber {
    fn estimate(&self, data: &[f64]) -> Result<f64> {
        Ok(self.fit(data)?.value)
    }

    fn estimate_sorted(&self, sorted_data: &[f64]) -> Result<f64> {
        self.estimate(sorted_data)
    }

    fn name(&self) -> &str {
        "Huber M-estimator"
    }

    fn is_robust(&self) -> bool {
        true
    }

    fn breakdown_point(&self) -> f64 {
        0.5
    }
}

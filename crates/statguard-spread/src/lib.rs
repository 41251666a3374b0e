//! Spread measurements for statistical analysis
//!
//! This crate provides the estimators of scale used by the statguard engines:
//! - IQR (Interquartile Range)
//! - MAD (Median Absolute Deviation), raw and standardized
//! - S*, the IQR normalized to a standard-error sized deviation
//! - Standard deviation, the classical non-robust baseline
//!
//! # Estimator Properties
//!
//! | Estimator | Breakdown Point | Efficiency | Use When |
//! |-----------|----------------|------------|----------|
//! | Std Dev | 0% | 100% | Data is clean, normal |
//! | MAD | 50% | 37% | Heavy contamination possible |
//! | IQR / S* | 25% | 37% | Moderate robustness needed |
//!
//! # Example
//!
//! ```rust
//! use statguard_quantile::HyndmanFan;
//! use statguard_spread::{Mad, SpreadEstimator, StandardDeviation};
//!
//! let sample = [1.0, 2.0, 3.0, 4.0, 5.0, 100.0]; // Outlier!
//! let quantiles = HyndmanFan::default();
//!
//! let mad = Mad.estimate(&sample, &quantiles).unwrap();
//! let sd = StandardDeviation::sample().compute(&sample).unwrap();
//! assert_eq!(mad, 1.5);
//! assert!(sd > 30.0);
//! ```

pub mod iqr;
pub mod mad;
pub mod robust_deviation;
pub mod std_dev;
pub mod traits;

pub use iqr::{quartiles_sorted, Iqr};
pub use mad::{absolute_deviations_sorted, Mad, StandardizedMad, NORMAL_CONSISTENCY};
pub use robust_deviation::RobustDeviation;
pub use std_dev::{variance, variance_unchecked, StandardDeviation, VarianceKind};
pub use traits::{SpreadEstimator, SpreadEstimatorProperties};

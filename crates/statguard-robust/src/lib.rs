//! Robust statistics engine
//!
//! Descriptive statistics that resist contamination, built on the quantile
//! and spread crates:
//!
//! - **Location**: median and the Huber M-estimator
//! - **Spread**: IQR, MAD (raw and scaled by 1.4826) and S*
//! - **Relative spread**: robust CV, S* / |median| in percent
//! - **Outliers**: Tukey fences, `Q1 - 1.5·IQR` and `Q3 + 1.5·IQR`
//! - **Interval**: `median ± 1.96·S*`
//!
//! [`RobustStats::robust_summary`] computes everything from one prepared
//! sample so that every field of the [`RobustSummary`] sees the same data.
//!
//! # Example
//!
//! ```rust
//! use statguard_robust::{RobustStats, StatsEngine, SummaryOptions};
//!
//! let stats = RobustStats::new();
//! let data = [1.0, 2.0, 3.0, 4.0, 5.0, 100.0];
//!
//! assert_eq!(stats.outliers(&data).unwrap(), vec![100.0]);
//!
//! let summary = stats.summary(&data, &SummaryOptions::default()).unwrap();
//! assert_eq!(summary.iqr, 2.5);
//! assert_eq!(summary.count, 6);
//! ```

pub mod confidence;
pub mod engine;
pub mod fences;
pub mod huber;
pub mod median;
pub mod summary;

pub use confidence::{critical_value, ConfidenceInterval, IntervalBounds};
pub use engine::{RobustConfig, RobustStats};
pub use fences::TukeyFences;
pub use huber::{Huber, HuberConfig, HuberEstimate};
pub use median::Median;
pub use summary::RobustSummary;

// Re-export from statguard-core
pub use statguard_core::{StatsEngine, SummaryOptions};

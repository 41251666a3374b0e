//! Classical statistics engine
//!
//! Mean, variance, standard deviation, coefficient of variation and Z-score
//! outliers. These estimators have a breakdown point of zero; the comparator
//! contrasts them with the robust engine to expose contamination.
//!
//! # Example
//!
//! ```rust
//! use statguard_classical::{ClassicalStats, StatsEngine, SummaryOptions};
//!
//! let stats = ClassicalStats::new();
//! let summary = stats.summary(&[2.0, 4.0, 6.0], &SummaryOptions::default()).unwrap();
//! assert_eq!(summary.mean, 4.0);
//! assert_eq!(summary.sample_variance, 4.0);
//! assert_eq!(summary.cv, 50.0);
//! ```

pub mod engine;
pub mod summary;

pub use engine::{ClassicalStats, Z_SCORE_THRESHOLD};
pub use summary::ClassicalSummary;

// Re-export from statguard-core
pub use statguard_core::{StatsEngine, SummaryOptions};

//! Core traits and types for classical and robust statistics
//!
//! This crate provides the pieces every other statguard crate builds on:
//!
//! - **Error taxonomy**: [`Error::InvalidDataSet`] and [`Error::InvalidArgument`]
//! - **Validation and preparation**: [`PreparedSample`] validates a sample once
//!   and keeps an ascending copy next to the caller's order
//! - **Numeric guards**: near-zero denominators map to fixed sentinels
//! - **Shared traits**: [`CentralTendencyEstimator`] and the [`StatsEngine`]
//!   capability set implemented by both engines
//!
//! # Example
//!
//! ```rust
//! use statguard_core::{PreparedSample, math};
//!
//! let sample = PreparedSample::new(&[3.0, 1.0, 2.0, 10.0], true).unwrap();
//! assert_eq!(sample.sorted(), &[1.0, 2.0, 3.0, 10.0]);
//! assert_eq!(math::median_sorted(sample.sorted()), 2.5);
//! ```

pub mod error;
pub mod math;
pub mod options;
pub mod sample;
pub mod traits;

// Re-export core types
pub use error::{Error, Result};
pub use math::NEAR_ZERO;
pub use options::SummaryOptions;
pub use sample::{PreparedSample, MIN_SAMPLE_SIZE};
pub use traits::{CentralTendencyEstimator, StatsEngine};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        CentralTendencyEstimator, Error, PreparedSample, Result, StatsEngine, SummaryOptions,
    };
}

//! Sample quantiles for the nine Hyndman-Fan definitions
//!
//! Every definition maps a probability `p` to a value of the sample's
//! empirical distribution:
//!
//! - **Discrete** (types 1-3): return an order statistic, or the mean of two
//!   adjacent ones for type 2 at exact ties
//! - **Continuous** (types 4-9): interpolate linearly at the position
//!   `h = α + (n + 1 - α - β)·p`
//!
//! Type 7 is the default and matches R and NumPy.
//!
//! # Example
//!
//! ```rust
//! use statguard_quantile::{quantile, HyndmanFan, QuantileEstimator, QuantileType};
//!
//! let data = [87.3, 84.0, 85.4, 78.0, 85.0, 89.0, 79.0, 89.0, 76.0, 86.5];
//!
//! let q1 = quantile(&data, 0.25, 7).unwrap();
//! assert!((q1 - 80.25).abs() < 1e-10);
//!
//! // Discrete types always land on a sample value
//! let q = HyndmanFan::new(QuantileType::Type1).quantile(&data, 0.25).unwrap();
//! assert_eq!(q, 79.0);
//! ```

pub mod error;
pub mod estimators;
pub mod traits;
pub mod types;

// Re-export main types
pub use error::{Error, Result};
pub use estimators::{quantile, quantile_sorted, HyndmanFan};
pub use traits::QuantileEstimator;
pub use types::QuantileType;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{quantile, Error, HyndmanFan, QuantileEstimator, QuantileType, Result};
}

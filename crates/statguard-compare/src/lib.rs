//! Classical vs robust comparison
//!
//! Runs the classical and the robust engine over one sample and reports:
//!
//! - **Bias**: how far the mean sits from the median, relative to |median|
//! - **Noise ratio**: standard deviation over scaled MAD; about 1 for clean
//!   normal data, larger when outliers inflate the classical spread
//! - **Outlier counts**: Tukey fences against |Z| > 3
//! - **Verdict**: [`Verdict::HighContamination`], [`Verdict::ModerateBias`]
//!   or [`Verdict::Stable`]

pub mod comparator;
pub mod report;
pub mod verdict;

pub use comparator::{noise_ratio, Comparator, NEUTRAL_NOISE_RATIO, UNBOUNDED_NOISE_RATIO};
pub use report::{CentralComparison, ComparisonReport, DispersionComparison, OutlierDetection};
pub use verdict::Verdict;

//! # StatGuard
//!
//! Two views of one numeric sample, and a verdict on how far they disagree.
//!
//! The classical view (mean, variance, |Z| > 3) is efficient on clean normal
//! data and breaks down under a single wild value. The robust view (median,
//! IQR, MAD, S*, Tukey fences) trades some efficiency for a 25-50%
//! breakdown point. [`compare`] runs both and classifies the sample as
//! highly contaminated, moderately biased or stable.
//!
//! ## Crates
//!
//! - [`quantile`](mod@quantile): the nine Hyndman-Fan sample quantiles
//! - [`spread`]: IQR, MAD, scaled MAD, S*, standard deviation
//! - [`robust`]: the robust engine and its summary
//! - [`classical`]: the classical engine and its summary
//! - [`comparison`]: the classical vs robust comparator
//! - [`export`]: JSON and CSV encoding of summaries and reports
//!
//! ## Quick Start
//!
//! ```rust
//! use statguard::{compare, robust_summary, Verdict};
//!
//! let latencies = [12.0, 11.5, 12.3, 11.9, 12.1, 95.0];
//!
//! let summary = robust_summary(&latencies, true, 2).unwrap();
//! assert_eq!(summary.outliers, vec![95.0]);
//!
//! let report = compare(&latencies, 2).unwrap();
//! assert_eq!(report.verdict, Verdict::HighContamination);
//! ```
//!
//! Every entry point fails with [`Error::InvalidDataSet`] for fewer than two
//! values (one for the quantile functions) or a NaN/infinite value, and with
//! [`Error::InvalidArgument`] for a quantile type outside 1..=9.

use num_traits::ToPrimitive;

// Re-export the workspace crates
pub use statguard_classical as classical;
pub use statguard_compare as comparison;
pub use statguard_export as export;
pub use statguard_quantile as quantile;
pub use statguard_robust as robust;
pub use statguard_spread as spread;

pub use statguard_classical::{ClassicalStats, ClassicalSummary};
pub use statguard_compare::{Comparator, ComparisonReport, Verdict};
pub use statguard_core::{
    CentralTendencyEstimator, Error, PreparedSample, Result, StatsEngine, SummaryOptions,
};
pub use statguard_export::{robust_summary_from_csv, to_csv, to_json, to_json_pretty, CsvRecord};
pub use statguard_quantile::{HyndmanFan, QuantileEstimator, QuantileType};
pub use statguard_robust::{HuberConfig, HuberEstimate, RobustConfig, RobustStats, RobustSummary};

/// Sample quantile of `sample` at probability `p`, definition `ty` in 1..=9
///
/// A single value is accepted. `p` outside [0, 1] is clamped.
///
/// ```rust
/// let q = statguard::quantile(&[1, 2, 3, 4], 0.5, 7).unwrap();
/// assert_eq!(q, 2.5);
/// ```
pub fn quantile<T: ToPrimitive>(sample: &[T], p: f64, ty: i32) -> Result<f64> {
    QuantileType::try_from(ty)?;
    let values = statguard_core::sample::to_f64_values(sample)?;
    Ok(statguard_quantile::quantile(&values, p, ty)?)
}

/// Sample quantile of an ascending sample, without sorting it again
pub fn quantile_sorted(sorted_sample: &[f64], p: f64, ty: i32) -> Result<f64> {
    Ok(statguard_quantile::quantile_sorted(sorted_sample, p, ty)?)
}

/// Robust summary with the default engine (type 7 quartiles, 1.5 fences)
///
/// With `sort == false` the caller asserts the sample is already ascending.
pub fn robust_summary<T: ToPrimitive>(sample: &[T], sort: bool, decimals: u32) -> Result<RobustSummary> {
    let prepared = PreparedSample::from_numeric(sample, false)?;
    let options = SummaryOptions::new().with_sort(sort).with_decimals(decimals);
    RobustStats::new().robust_summary(prepared.values(), &options)
}

/// Classical summary: mean, median, standard deviation, variance, CV, |Z| > 3
pub fn classical_summary<T: ToPrimitive>(sample: &[T], decimals: u32) -> Result<ClassicalSummary> {
    let prepared = PreparedSample::from_numeric(sample, false)?;
    let options = SummaryOptions::new().with_decimals(decimals);
    ClassicalStats::new().classical_summary(prepared.values(), &options)
}

/// Classical vs robust comparison with a contamination verdict
pub fn compare<T: ToPrimitive>(sample: &[T], decimals: u32) -> Result<ComparisonReport> {
    let prepared = PreparedSample::from_numeric(sample, false)?;
    Comparator::new().compare(prepared.values(), decimals)
}

/// Huber M-estimate of location with the default tuning (k = 1.345)
pub fn huber_mean<T: ToPrimitive>(sample: &[T]) -> Result<HuberEstimate> {
    let prepared = PreparedSample::from_numeric(sample, false)?;
    RobustStats::new().huber_mean(prepared.values())
}

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        classical_summary, compare, huber_mean, quantile, quantile_sorted, robust_summary,
    };
    pub use crate::{
        CentralTendencyEstimator, ClassicalStats, Comparator, Error, QuantileEstimator,
        QuantileType, Result, RobustStats, StatsEngine, SummaryOptions, Verdict,
    };
}

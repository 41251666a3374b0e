//! Quantile estimator implementations

mod continuous;
mod discrete;
mod hyndman_fan;

pub use hyndman_fan::{quantile, quantile_sorted, HyndmanFan};

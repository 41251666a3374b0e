//! Error types for quantile estimation

use thiserror::Error;

/// Errors that can occur during quantile estimation
#[derive(Error, Debug)]
pub enum Error {
    /// Quantile type outside the nine Hyndman-Fan definitions
    #[error("Quantile type {ty} must be between 1 and 9")]
    InvalidType { ty: i32 },

    /// Probability is not a number
    #[error("Quantile probability must be a number, got {p}")]
    InvalidProbability { p: f64 },

    /// Empty data provided
    #[error("At least 1 numeric value is required")]
    EmptyData,

    /// A sample value is NaN or infinite
    #[error("All sample values must be numeric (value at index {index} is not)")]
    NonNumeric { index: usize },

    /// Core computation error
    #[error("Core computation error: {0}")]
    Core(#[from] statguard_core::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions
impl Error {
    /// Check that the probability is a number; range is clamped, not checked
    pub fn check_probability(p: f64) -> Result<()> {
        if p.is_nan() {
            return Err(Error::InvalidProbability { p });
        }
        Ok(())
    }

    /// Check that data is non-empty and every value is finite
    pub fn check_data(data: &[f64]) -> Result<()> {
        if data.is_empty() {
            return Err(Error::EmptyData);
        }
        if let Some(index) = data.iter().position(|x| !x.is_finite()) {
            return Err(Error::NonNumeric { index });
        }
        Ok(())
    }
}

impl From<Error> for statguard_core::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::InvalidType { .. } | Error::InvalidProbability { .. } => {
                statguard_core::Error::InvalidArgument(err.to_string())
            }
            Error::EmptyData | Error::NonNumeric { .. } => {
                statguard_core::Error::InvalidDataSet(err.to_string())
            }
            Error::Core(inner) => inner,
        }
    }
}

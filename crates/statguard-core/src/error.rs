//! Error types for classical and robust statistical analysis
//!
//! Provides the unified error taxonomy shared by every statguard crate.

use thiserror::Error;

/// Core error type for statistical operations
#[derive(Error, Debug)]
pub enum Error {
    /// The sample is too small or contains a non-numeric entry
    #[error("Invalid data set: {0}")]
    InvalidDataSet(String),

    /// A configuration value is outside its domain
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for a sample below the minimum size
    pub fn insufficient(expected: usize, actual: usize) -> Self {
        Self::InvalidDataSet(format!(
            "At least {expected} numeric values are required, got {actual}"
        ))
    }

    /// Create an error for a value that is not a finite number
    pub fn non_numeric(index: usize) -> Self {
        Self::InvalidDataSet(format!(
            "All sample values must be numeric (value at index {index} is not)"
        ))
    }

    /// Create an error for a parameter outside its domain
    pub fn invalid_argument(name: &str, reason: &str) -> Self {
        Self::InvalidArgument(format!("{name} {reason}"))
    }

    /// Whether this is a data-set validation failure
    pub fn is_invalid_data_set(&self) -> bool {
        matches!(self, Self::InvalidDataSet(_))
    }

    /// Whether this is a configuration failure
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidDataSet("empty".to_string());
        assert_eq!(err.to_string(), "Invalid data set: empty");

        let err = Error::InvalidArgument("type must be between 1 and 9".to_string());
        assert_eq!(err.to_string(), "Invalid argument: type must be between 1 and 9");
    }

    #[test]
    fn test_error_helper_functions() {
        let err = Error::insufficient(2, 1);
        assert!(err.is_invalid_data_set());
        assert_eq!(
            err.to_string(),
            "Invalid data set: At least 2 numeric values are required, got 1"
        );

        let err = Error::non_numeric(3);
        assert!(err.is_invalid_data_set());
        assert!(err.to_string().contains("index 3"));

        let err = Error::invalid_argument("tolerance", "must be positive");
        assert!(err.is_invalid_argument());
        assert_eq!(err.to_string(), "Invalid argument: tolerance must be positive");
    }

    #[test]
    fn test_error_from_anyhow() {
        let anyhow_err = anyhow::anyhow!("custom error message");
        let err: Error = anyhow_err.into();

        match err {
            Error::Other(_) => {
                assert!(err.to_string().contains("custom error message"));
            }
            _ => panic!("Wrong error type"),
        }
    }

    #[test]
    fn test_error_patterns() {
        fn check_sample_size(data: &[f64], min_size: usize) -> Result<()> {
            if data.len() < min_size {
                return Err(Error::insufficient(min_size, data.len()));
            }
            Ok(())
        }

        assert!(check_sample_size(&[1.0], 2).is_err());
        assert!(check_sample_size(&[1.0, 2.0], 2).is_ok());
    }
}

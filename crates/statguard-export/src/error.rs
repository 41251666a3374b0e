//! Error types for export and import

use thiserror::Error;

/// Errors that can occur while encoding or decoding summaries
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input or options that do not fit the export layout
    #[error("Invalid export format: {0}")]
    Format(String),

    #[error(transparent)]
    Core(#[from] statguard_core::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn format(msg: impl Into<String>) -> Self {
        Error::Format(msg.into())
    }
}

impl From<Error> for statguard_core::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::Core(inner) => inner,
            Error::Format(msg) => statguard_core::Error::InvalidArgument(msg),
            other => statguard_core::Error::Other(anyhow::Error::new(other)),
        }
    }
}

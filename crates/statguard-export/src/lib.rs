//! JSON and CSV export of statguard summaries
//!
//! JSON uses the serde field names of each record. CSV writes a header row
//! and a single data row; arrays are flattened with `|`.
//!
//! # Example
//!
//! ```rust
//! use statguard_export::{robust_summary_from_csv, to_csv, to_json};
//! use statguard_robust::{RobustStats, SummaryOptions};
//!
//! let summary = RobustStats::new()
//!     .robust_summary(&[1.0, 2.0, 3.0, 4.0, 5.0, 100.0], &SummaryOptions::default())
//!     .unwrap();
//!
//! let json = to_json(&summary).unwrap();
//! assert!(json.contains("\"outliers\":[100.0]"));
//!
//! let csv = to_csv(&summary, b',').unwrap();
//! assert_eq!(robust_summary_from_csv(&csv, b',').unwrap(), summary);
//! ```

pub mod csv_export;
pub mod error;
pub mod json;

pub use csv_export::{robust_summary_from_csv, to_csv, CsvRecord, ARRAY_SEPARATOR};
pub use error::{Error, Result};
pub use json::{from_json, to_json, to_json_pretty};

//! Options shared by the summary operations of both engines

use serde::{Deserialize, Serialize};

/// How a summary prepares its sample and rounds its fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryOptions {
    /// Sort the prepared copy; `false` asserts the input is already ascending
    pub sort: bool,
    /// Digits every scalar field is rounded to
    pub decimals: u32,
}

impl SummaryOptions {
    /// Defaults: sort, two decimals
    pub fn new() -> Self {
        Self {
            sort: true,
            decimals: 2,
        }
    }

    /// Set whether the prepared copy is sorted
    pub fn with_sort(mut self, sort: bool) -> Self {
        self.sort = sort;
        self
    }

    /// Set the rounding precision
    pub fn with_decimals(mut self, decimals: u32) -> Self {
        self.decimals = decimals;
        self
    }
}

impl Default for SummaryOptions {
    fn default() -> Self {
        Self::new()
    }
}

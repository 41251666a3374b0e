//! Sample validation and preparation
//!
//! Every engine goes through this module before computing anything. A
//! [`PreparedSample`] owns a validated copy of the caller's values, in their
//! original order, plus an ascending copy. The caller's slice is never touched.

use crate::{Error, Result};
use num_traits::ToPrimitive;
use ordered_float::OrderedFloat;

/// Minimum number of values the statistics engines accept
pub const MIN_SAMPLE_SIZE: usize = 2;

/// Check size and numeric validity of a sample
///
/// Fails with [`Error::InvalidDataSet`] when the sample holds fewer than
/// `min_size` values or any value is NaN or infinite.
pub fn validate(data: &[f64], min_size: usize) -> Result<()> {
    if data.len() < min_size {
        return Err(Error::insufficient(min_size, data.len()));
    }
    if let Some(index) = data.iter().position(|x| !x.is_finite()) {
        return Err(Error::non_numeric(index));
    }
    Ok(())
}

/// Convert any primitive numeric slice into `f64` values
///
/// A value that cannot be represented as a finite `f64` is rejected as
/// non-numeric.
pub fn to_f64_values<T: ToPrimitive>(data: &[T]) -> Result<Vec<f64>> {
    data.iter()
        .enumerate()
        .map(|(index, value)| {
            value
                .to_f64()
                .filter(|x| x.is_finite())
                .ok_or_else(|| Error::non_numeric(index))
        })
        .collect()
}

/// Sort a copy of `data` ascending
pub fn sorted_copy(data: &[f64]) -> Vec<f64> {
    let mut sorted = data.to_vec();
    sort_ascending(&mut sorted);
    sorted
}

/// Sort values ascending in place
pub fn sort_ascending(data: &mut [f64]) {
    data.sort_by_key(|&x| OrderedFloat(x));
}

/// A validated sample, ready for the engines
///
/// Computed once per public call and shared by every derived statistic so
/// that all fields of a summary see the same data.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedSample {
    values: Vec<f64>,
    sorted: Vec<f64>,
}

impl PreparedSample {
    /// Validate and prepare a sample of at least [`MIN_SAMPLE_SIZE`] values
    ///
    /// With `sort == false` the caller asserts the data is already ascending;
    /// the order is taken as-is and not re-checked.
    pub fn new(data: &[f64], sort: bool) -> Result<Self> {
        Self::with_min_size(data, sort, MIN_SAMPLE_SIZE)
    }

    /// Validate and prepare with a custom minimum size
    pub fn with_min_size(data: &[f64], sort: bool, min_size: usize) -> Result<Self> {
        validate(data, min_size)?;
        let values = data.to_vec();
        let sorted = if sort {
            sorted_copy(&values)
        } else {
            values.clone()
        };
        Ok(Self { values, sorted })
    }

    /// Validate and prepare any primitive numeric slice
    pub fn from_numeric<T: ToPrimitive>(data: &[T], sort: bool) -> Result<Self> {
        if data.len() < MIN_SAMPLE_SIZE {
            return Err(Error::insufficient(MIN_SAMPLE_SIZE, data.len()));
        }
        let values = to_f64_values(data)?;
        Self::new(&values, sort)
    }

    /// Values in the caller's original order
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Values in ascending order
    pub fn sorted(&self) -> &[f64] {
        &self.sorted
    }

    /// Number of values
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false for a validated sample
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_small_samples() {
        assert!(PreparedSample::new(&[], true).unwrap_err().is_invalid_data_set());
        assert!(PreparedSample::new(&[1.0], true).unwrap_err().is_invalid_data_set());
        assert!(PreparedSample::new(&[1.0, 2.0], true).is_ok());
    }

    #[test]
    fn test_rejects_non_finite() {
        let err = PreparedSample::new(&[1.0, f64::NAN, 3.0], true).unwrap_err();
        assert!(err.is_invalid_data_set());
        assert!(err.to_string().contains("index 1"));

        assert!(PreparedSample::new(&[1.0, f64::INFINITY], true).is_err());
        assert!(PreparedSample::new(&[f64::NEG_INFINITY, 1.0], false).is_err());
    }

    #[test]
    fn test_sorts_a_copy() {
        let data = vec![3.0, 1.0, 2.0];
        let prepared = PreparedSample::new(&data, true).unwrap();
        assert_eq!(prepared.sorted(), &[1.0, 2.0, 3.0]);
        assert_eq!(prepared.values(), &[3.0, 1.0, 2.0]);
        assert_eq!(data, vec![3.0, 1.0, 2.0]);
    }

    #[test]
    fn test_unsorted_flag_keeps_order() {
        let prepared = PreparedSample::new(&[1.0, 5.0, 9.0], false).unwrap();
        assert_eq!(prepared.sorted(), &[1.0, 5.0, 9.0]);
        assert_eq!(prepared.len(), 3);
        assert!(!prepared.is_empty());
    }

    #[test]
    fn test_from_numeric_integers() {
        let prepared = PreparedSample::from_numeric(&[5i32, -1, 3], true).unwrap();
        assert_eq!(prepared.sorted(), &[-1.0, 3.0, 5.0]);

        let prepared = PreparedSample::from_numeric(&[1.5f32, 0.5], true).unwrap();
        assert_eq!(prepared.sorted(), &[0.5, 1.5]);

        assert!(PreparedSample::from_numeric(&[7u8], true).is_err());
        assert!(PreparedSample::from_numeric(&[1.0f32, f32::NAN], true).is_err());
    }

    #[test]
    fn test_custom_min_size() {
        assert!(PreparedSample::with_min_size(&[4.0], true, 1).is_ok());
        assert!(PreparedSample::with_min_size(&[], true, 1).is_err());
    }
}

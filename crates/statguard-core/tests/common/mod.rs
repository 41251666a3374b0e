//! Shared utilities for integration tests

/// Special floating-point values that must be rejected as non-numeric
pub fn non_numeric_values() -> Vec<f64> {
    vec![f64::NAN, f64::INFINITY, f64::NEG_INFINITY]
}

/// Generate test data with a simple descending pattern
pub fn generate_descending(len: usize) -> Vec<f64> {
    (0..len).map(|i| (len - i) as f64 + 0.25).collect()
}

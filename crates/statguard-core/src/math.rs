//! Numeric guards and rounding shared by both engines

/// Denominators whose magnitude is below this are treated as zero
pub const NEAR_ZERO: f64 = 1e-9;

/// Whether `x` is within [`NEAR_ZERO`] of zero
#[inline]
pub fn is_near_zero(x: f64) -> bool {
    x.abs() < NEAR_ZERO
}

/// Percentage coefficient `numerator / |denominator| * 100`
///
/// Returns `0.0` instead of dividing when the denominator is near zero.
#[inline]
pub fn percent_of(numerator: f64, denominator: f64) -> f64 {
    if is_near_zero(denominator) {
        return 0.0;
    }
    numerator / denominator.abs() * 100.0
}

/// Significant digits an `f64` carries reliably
const SIGNIFICANT_DIGITS: i32 = 15;

/// Round to `decimals` digits, halves away from zero
///
/// The value is first rounded to 15 significant digits so that a decimal
/// half such as `1.005` (stored as `1.00499999...`) rounds up.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    if !value.is_finite() || value == 0.0 {
        return value;
    }
    let places = decimals.min(i32::MAX as u32) as i32;
    let factor = 10f64.powi(places);

    let magnitude = value.abs().log10().floor() as i32;
    let precision = SIGNIFICANT_DIGITS - 1 - magnitude;
    if precision > places && precision - SIGNIFICANT_DIGITS < places {
        let pre = (value * 10f64.powi(precision)).round();
        if pre.is_finite() {
            return (pre / 10f64.powi(precision - places)).round() / factor;
        }
    }

    let scaled = value * factor;
    if !scaled.is_finite() || scaled.abs() >= 2f64.powi(52) {
        return value;
    }
    scaled.round() / factor
}

/// Arithmetic mean, `NaN` for an empty slice
pub fn mean(data: &[f64]) -> f64 {
    data.iter().sum::<f64>() / data.len() as f64
}

/// Median of an ascending slice
///
/// Averages the two central elements when the length is even.
pub fn median_sorted(sorted: &[f64]) -> f64 {
    let n = sorted.len();
    let m = n / 2;
    if n % 2 == 0 {
        (sorted[m - 1] + sorted[m]) / 2.0
    } else {
        sorted[m]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(2.005703886310498, 2), 2.01);
        assert_eq!(round_to(83.92, 2), 83.92);
        assert_eq!(round_to(-1.5, 0), -2.0);
        assert_eq!(round_to(2.5, 0), 3.0);
        assert_eq!(round_to(1.23456, 4), 1.2346);
        assert!(round_to(f64::NAN, 2).is_nan());
    }

    #[test]
    fn test_round_to_decimal_halves() {
        assert_eq!(round_to(1.005, 2), 1.01);
        assert_eq!(round_to(-1.005, 2), -1.01);
        assert_eq!(round_to((1.0 + 1.01) / 2.0, 2), 1.01);
        assert_eq!(round_to(0.285, 2), 0.29);
        assert_eq!(round_to(1.255, 2), 1.26);
        assert_eq!(round_to(0.000123456, 6), 0.000123);
    }

    #[test]
    fn test_round_to_extreme_magnitudes() {
        assert_eq!(round_to(1e300, 2), 1e300);
        assert_eq!(round_to(123456789012345678.0, 2), 123456789012345678.0);
        assert_eq!(round_to(1e-300, 2), 0.0);
        assert_eq!(round_to(0.0, 3), 0.0);
    }

    #[test]
    fn test_percent_of_guards_zero() {
        assert_eq!(percent_of(5.0, 0.0), 0.0);
        assert_eq!(percent_of(5.0, 1e-10), 0.0);
        assert_relative_eq!(percent_of(5.0, -50.0), 10.0);
    }

    #[test]
    fn test_median_sorted() {
        assert_eq!(median_sorted(&[1.0, 2.0, 3.0]), 2.0);
        assert_eq!(median_sorted(&[-9.0, -7.0, -5.0, -3.0]), -6.0);
        assert_eq!(median_sorted(&[4.0]), 4.0);
    }

    #[test]
    fn test_mean() {
        assert_relative_eq!(mean(&[1.0, 2.0, 3.0, 4.0]), 2.5);
        assert!(mean(&[]).is_nan());
    }
}

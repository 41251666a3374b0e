//! Types 4-9: linear interpolation between adjacent order statistics

/// Interpolate at position `h = α + (n + 1 - α - β)·p`
///
/// Positions at or below the first order statistic return the minimum, at or
/// beyond the last return the maximum.
pub(super) fn interpolate(sorted: &[f64], p: f64, alpha: f64, beta: f64) -> f64 {
    let n = sorted.len();
    let h = alpha + (n as f64 + 1.0 - alpha - beta) * p;
    let k = h.floor();
    let fraction = h - k;

    if k <= 0.0 {
        return sorted[0];
    }
    if k >= n as f64 {
        return sorted[n - 1];
    }

    let lower = sorted[k as usize - 1];
    let upper = sorted[k as usize];
    lower + fraction * (upper - lower)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const TEN: [f64; 10] = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];

    #[test]
    fn test_known_first_quartiles() {
        // Reference values for quantile(1:10, 0.25, type = k)
        assert_relative_eq!(interpolate(&TEN, 0.25, 0.0, 1.0), 2.5);
        assert_relative_eq!(interpolate(&TEN, 0.25, 0.5, 0.5), 3.0);
        assert_relative_eq!(interpolate(&TEN, 0.25, 0.0, 0.0), 2.75);
        assert_relative_eq!(interpolate(&TEN, 0.25, 1.0, 1.0), 3.25);
        assert_relative_eq!(
            interpolate(&TEN, 0.25, 1.0 / 3.0, 1.0 / 3.0),
            2.916_666_666_666_667,
            epsilon = 1e-12
        );
        assert_relative_eq!(interpolate(&TEN, 0.25, 0.375, 0.375), 2.9375, epsilon = 1e-12);
    }

    #[test]
    fn test_clamps_at_the_ends() {
        // Type 6 at p = 0.05: h = 0.55
        assert_eq!(interpolate(&TEN, 0.05, 0.0, 0.0), 1.0);
        // Type 6 at p = 0.95: h = 10.45
        assert_eq!(interpolate(&TEN, 0.95, 0.0, 0.0), 10.0);
        assert_eq!(interpolate(&TEN, 1.0, 1.0, 1.0), 10.0);
        assert_eq!(interpolate(&TEN, 0.0, 1.0, 1.0), 1.0);
    }
}

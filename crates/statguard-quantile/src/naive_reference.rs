//! Naive reference implementations of the sample quantile definitions
//!
//! These follow the textbook formulation `Q(p) = (1 - γ)·x[j] + γ·x[j + 1]`
//! with `j = floor(n·p + m)`, which is written differently from the
//! plotting-position form used by the estimators. They exist to cross-check
//! the estimators and are intentionally simple.
//!
//! DO NOT USE IN PRODUCTION - these are for testing and debugging only!

/// Textbook Hyndman-Fan quantiles
pub struct NaiveHyndmanFan;

impl NaiveHyndmanFan {
    /// Compute a quantile of `data` (sorted internally) with definition `ty`
    pub fn quantile(data: &[f64], p: f64, ty: u8) -> f64 {
        assert!(!data.is_empty(), "Cannot compute quantile of empty data");
        assert!((0.0..=1.0).contains(&p), "Probability must be in [0, 1]");
        assert!((1..=9).contains(&ty), "Type must be in 1..=9");

        let mut sorted = data.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
        let n = sorted.len() as f64;

        let m = match ty {
            1 | 2 | 4 => 0.0,
            3 => -0.5,
            5 => 0.5,
            6 => p,
            7 => 1.0 - p,
            8 => (p + 1.0) / 3.0,
            _ => p / 4.0 + 3.0 / 8.0,
        };

        let np_m = n * p + m;
        let j = np_m.floor();
        let g = np_m - j;

        let gamma = match ty {
            1 => {
                if g == 0.0 {
                    0.0
                } else {
                    1.0
                }
            }
            2 => {
                if g == 0.0 {
                    0.5
                } else {
                    1.0
                }
            }
            3 => {
                if g == 0.0 && (j as i64) % 2 == 0 {
                    0.0
                } else {
                    1.0
                }
            }
            _ => g,
        };

        // x[0] and x[n + 1] are taken to be the extreme order statistics
        let x = |i: f64| -> f64 {
            let idx = i.clamp(1.0, n) as usize;
            sorted[idx - 1]
        };

        if gamma == 0.0 {
            x(j)
        } else if gamma == 1.0 {
            x(j + 1.0)
        } else {
            (1.0 - gamma) * x(j) + gamma * x(j + 1.0)
        }
    }
}

/// Linear interpolation between the order statistics at `p·(n - 1)`
///
/// Same values as type 7, derived from 0-based positions.
pub struct NaivePercentile;

impl NaivePercentile {
    pub fn percentile(data: &[f64], p: f64) -> f64 {
        assert!(!data.is_empty(), "Cannot compute percentile of empty data");

        let mut sorted = data.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());

        let index = p * (sorted.len() - 1) as f64;
        let low = index.floor() as usize;
        let high = index.ceil() as usize;
        if low == high {
            return sorted[low];
        }
        let fraction = index - low as f64;
        sorted[low] * (1.0 - fraction) + sorted[high] * fraction
    }
}

//! Types 1-3: order statistics without interpolation
//!
//! Positions are 1-based as in the literature; `sorted` is indexed 0-based.

/// Inverse of the empirical distribution function
pub(super) fn type1(sorted: &[f64], p: f64) -> f64 {
    let n = sorted.len();
    let position = (n as f64 * p).ceil() as usize;
    sorted[position.clamp(1, n) - 1]
}

/// Like type 1, averaging the two neighbours when n·p lands exactly on an order statistic
pub(super) fn type2(sorted: &[f64], p: f64) -> f64 {
    let n = sorted.len();
    let h = n as f64 * p;
    if h <= 0.0 {
        return sorted[0];
    }
    if h >= n as f64 {
        return sorted[n - 1];
    }

    let k = h.floor();
    let k_idx = k as usize;
    if h - k == 0.0 {
        (sorted[k_idx - 1] + sorted[k_idx]) / 2.0
    } else {
        sorted[k_idx]
    }
}

/// Nearest order statistic, ties broken towards the even position
pub(super) fn type3(sorted: &[f64], p: f64) -> f64 {
    let n = sorted.len();
    let position = (n as f64 * p).round_ties_even() as usize;
    sorted[position.clamp(1, n) - 1]
}

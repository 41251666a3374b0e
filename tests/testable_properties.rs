//! End-to-end properties of the public API

use approx::assert_abs_diff_eq;
use proptest::prelude::*;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use rand_distr::Normal;
use statguard::prelude::*;
use statguard::{
    classical_summary, robust_summary_from_csv, to_csv, to_json, ComparisonReport, RobustSummary,
};

const REFERENCE: [f64; 10] = [87.30, 84.00, 85.40, 78.00, 85.00, 89.00, 79.00, 89.00, 76.00, 86.50];

#[test]
fn test_single_element_quantiles() {
    for ty in 1..=9 {
        for p in [0.0, 0.25, 0.5, 0.75, 1.0] {
            assert_eq!(quantile(&[42.5], p, ty).unwrap(), 42.5, "type {ty}, p {p}");
        }
    }
}

#[test]
fn test_reference_sample() {
    let q1 = quantile(&REFERENCE, 0.25, 7).unwrap();
    let q3 = quantile(&REFERENCE, 0.75, 7).unwrap();
    assert_abs_diff_eq!(q3 - q1, 6.85, epsilon = 0.01);

    let summary = robust_summary(&REFERENCE, true, 6).unwrap();
    assert_eq!(summary.median, 85.2);
    assert_abs_diff_eq!(summary.robust_deviation, 2.0057, epsilon = 0.001);
    assert_abs_diff_eq!(summary.robust_cv, 2.354, epsilon = 0.001);
    assert_abs_diff_eq!(summary.confidence_interval.lower, 81.269, epsilon = 0.001);
    assert_abs_diff_eq!(summary.confidence_interval.upper, 89.131, epsilon = 0.001);
    assert!(summary.outliers.is_empty());
    assert_eq!(summary.count, 10);
}

#[test]
fn test_tukey_flags_single_outlier() {
    let summary = robust_summary(&[1, 2, 3, 4, 5, 100], true, 2).unwrap();
    assert_eq!(summary.outliers, vec![100.0]);
}

#[test]
fn test_zero_median_cv() {
    let summary = robust_summary(&[-1.0, 0.0, 1.0, 0.0], true, 2).unwrap();
    assert_eq!(summary.robust_cv, 0.0);
    assert_eq!(RobustStats::new().robust_cv(&[-1.0, 0.0, 1.0, 0.0]).unwrap(), 0.0);
}

#[test]
fn test_every_entry_point_validates() {
    let too_small = [7.0];
    let non_numeric = [1.0, f64::NAN, 3.0];

    for data in [&too_small[..], &non_numeric[..]] {
        assert!(robust_summary(data, true, 2).unwrap_err().is_invalid_data_set());
        assert!(classical_summary(data, 2).unwrap_err().is_invalid_data_set());
        assert!(compare(data, 2).unwrap_err().is_invalid_data_set());
        assert!(huber_mean(data).unwrap_err().is_invalid_data_set());

        let robust = RobustStats::new();
        assert!(robust.median(data).unwrap_err().is_invalid_data_set());
        assert!(robust.iqr(data).unwrap_err().is_invalid_data_set());
        assert!(robust.mad(data).unwrap_err().is_invalid_data_set());
        assert!(robust.robust_deviation(data).unwrap_err().is_invalid_data_set());
        assert!(robust.robust_cv(data).unwrap_err().is_invalid_data_set());
        assert!(robust.confidence_interval(data).unwrap_err().is_invalid_data_set());
        assert!(robust.outliers(data).unwrap_err().is_invalid_data_set());

        let classical = ClassicalStats::new();
        assert!(classical.mean(data).unwrap_err().is_invalid_data_set());
        assert!(classical.deviation(data).unwrap_err().is_invalid_data_set());
        assert!(classical.cv(data).unwrap_err().is_invalid_data_set());
        assert!(classical.outliers(data).unwrap_err().is_invalid_data_set());
    }

    // The quantile functions accept a single value but not an empty or non-numeric sample
    let empty: [f64; 0] = [];
    assert!(quantile(&empty, 0.5, 7).unwrap_err().is_invalid_data_set());
    assert!(quantile(&non_numeric, 0.5, 7).unwrap_err().is_invalid_data_set());
    assert!(quantile_sorted(&empty, 0.5, 7).unwrap_err().is_invalid_data_set());
}

#[test]
fn test_quantile_type_out_of_range() {
    for ty in [0, 10, -1] {
        assert!(quantile(&REFERENCE, 0.5, ty).unwrap_err().is_invalid_argument());
    }
    // The type is checked before the values
    assert!(quantile(&[f64::NAN], 0.5, 0).unwrap_err().is_invalid_argument());
    let empty: [i32; 0] = [];
    assert!(quantile(&empty, 0.5, 10).unwrap_err().is_invalid_argument());
    assert!(quantile_sorted(&[], 0.5, 0).unwrap_err().is_invalid_argument());
}

#[test]
fn test_decimal_halves_round_up() {
    let summary = robust_summary(&[1.0, 1.01], true, 2).unwrap();
    assert_eq!(summary.median, 1.01);

    let summary = classical_summary(&[1.0, 1.01], 2).unwrap();
    assert_eq!(summary.mean, 1.01);
    assert_eq!(summary.median, 1.01);
}

#[test]
fn test_export_reproduces_key_value_map() {
    let summary = robust_summary(&REFERENCE, true, 2).unwrap();
    let direct = serde_json::to_value(&summary).unwrap();

    let decoded: serde_json::Value = serde_json::from_str(&to_json(&summary).unwrap()).unwrap();
    assert_eq!(decoded, direct);

    let from_csv: RobustSummary = robust_summary_from_csv(&to_csv(&summary, b',').unwrap(), b',').unwrap();
    assert_eq!(serde_json::to_value(&from_csv).unwrap(), direct);

    let report = compare(&REFERENCE, 2).unwrap();
    let json = to_json(&report).unwrap();
    let decoded: ComparisonReport = statguard::export::from_json(&json).unwrap();
    assert_eq!(decoded, report);
}

#[test]
fn test_seeded_normal_sample_is_stable() {
    let mut rng = ChaCha8Rng::seed_from_u64(17);
    let normal = Normal::new(50.0, 2.0).unwrap();
    let data: Vec<f64> = (0..2000).map(|_| normal.sample(&mut rng)).collect();

    let report = compare(&data, 4).unwrap();
    assert_eq!(report.verdict, Verdict::Stable);
    assert!(report.central_comparison.bias_percent.abs() < 1.0);
    assert!((report.dispersion_comparison.noise_ratio - 1.0).abs() < 0.15);
}

proptest! {
    #[test]
    fn prop_single_element_any_probability(x in -1e9f64..1e9, p in 0.0f64..=1.0, ty in 1i32..=9) {
        prop_assert_eq!(quantile(&[x], p, ty).unwrap(), x);
    }

    #[test]
    fn prop_engine_calls_are_bit_identical(data in prop::collection::vec(-1e4f64..1e4, 2..60)) {
        let original = data.clone();

        let first = to_json(&robust_summary(&data, true, 4).unwrap()).unwrap();
        let second = to_json(&robust_summary(&data, true, 4).unwrap()).unwrap();
        prop_assert_eq!(first, second);

        let first = to_json(&compare(&data, 4).unwrap()).unwrap();
        let second = to_json(&compare(&data, 4).unwrap()).unwrap();
        prop_assert_eq!(first, second);

        let first = huber_mean(&data).unwrap();
        let second = huber_mean(&data).unwrap();
        prop_assert_eq!(first.value.to_bits(), second.value.to_bits());

        prop_assert_eq!(data, original);
    }

    #[test]
    fn prop_spreads_non_negative(data in prop::collection::vec(-1e4f64..1e4, 2..60)) {
        let summary = robust_summary(&data, true, 6).unwrap();
        prop_assert!(summary.iqr >= 0.0);
        prop_assert!(summary.mad >= 0.0);
        prop_assert!(summary.robust_deviation >= 0.0);
        prop_assert!(summary.confidence_interval.lower <= summary.confidence_interval.upper);
    }
}

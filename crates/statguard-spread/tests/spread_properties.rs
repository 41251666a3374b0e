//! Invariance properties of the spread estimators

use approx::assert_relative_eq;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};
use statguard_quantile::HyndmanFan;
use statguard_spread::{Iqr, Mad, RobustDeviation, SpreadEstimator, StandardDeviation};

fn contaminated_normal(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let normal = Normal::new(50.0, 5.0).unwrap();
    let mut data: Vec<f64> = (0..n).map(|_| normal.sample(&mut rng)).collect();
    data[0] = 5_000.0;
    data
}

#[test]
fn test_robust_estimators_resist_single_outlier() {
    let q = HyndmanFan::default();
    let data = contaminated_normal(200, 3);
    let clean = &data[1..];

    let mad_ratio = Mad.estimate(&data, &q).unwrap() / Mad.estimate(clean, &q).unwrap();
    let iqr_ratio = Iqr.estimate(&data, &q).unwrap() / Iqr.estimate(clean, &q).unwrap();
    let sd_ratio = StandardDeviation::sample().compute(&data).unwrap()
        / StandardDeviation::sample().compute(clean).unwrap();

    assert!(mad_ratio < 1.1, "MAD moved by {mad_ratio}");
    assert!(iqr_ratio < 1.1, "IQR moved by {iqr_ratio}");
    assert!(sd_ratio > 10.0, "standard deviation moved by only {sd_ratio}");
}

#[test]
fn test_robust_deviation_shrinks_with_sample_size() {
    let q = HyndmanFan::default();
    let small = RobustDeviation.estimate(&contaminated_normal(50, 9)[1..], &q).unwrap();
    let large = RobustDeviation.estimate(&contaminated_normal(5_000, 9)[1..], &q).unwrap();
    assert!(large < small);
}

proptest! {
    #[test]
    fn prop_spread_is_translation_invariant(
        data in prop::collection::vec(-1_000.0f64..1_000.0, 2..60),
        shift in -1_000.0f64..1_000.0,
    ) {
        let q = HyndmanFan::default();
        let shifted: Vec<f64> = data.iter().map(|x| x + shift).collect();

        let mad = Mad.estimate(&data, &q).unwrap();
        let iqr = Iqr.estimate(&data, &q).unwrap();
        assert_relative_eq!(Mad.estimate(&shifted, &q).unwrap(), mad, epsilon = 1e-8, max_relative = 1e-8);
        assert_relative_eq!(Iqr.estimate(&shifted, &q).unwrap(), iqr, epsilon = 1e-8, max_relative = 1e-8);
    }

    #[test]
    fn prop_spread_scales_with_data(
        data in prop::collection::vec(-1_000.0f64..1_000.0, 2..60),
        factor in 0.01f64..100.0,
    ) {
        let q = HyndmanFan::default();
        let scaled: Vec<f64> = data.iter().map(|x| x * factor).collect();

        let mad = Mad.estimate(&data, &q).unwrap();
        let s = RobustDeviation.estimate(&data, &q).unwrap();
        assert_relative_eq!(Mad.estimate(&scaled, &q).unwrap(), mad * factor, epsilon = 1e-7, max_relative = 1e-8);
        assert_relative_eq!(RobustDeviation.estimate(&scaled, &q).unwrap(), s * factor, epsilon = 1e-7, max_relative = 1e-8);
    }

    #[test]
    fn prop_spreads_are_non_negative(data in prop::collection::vec(-1e6f64..1e6, 2..80)) {
        let q = HyndmanFan::default();
        prop_assert!(Mad.estimate(&data, &q).unwrap() >= 0.0);
        prop_assert!(Iqr.estimate(&data, &q).unwrap() >= 0.0);
        prop_assert!(StandardDeviation::sample().compute(&data).unwrap() >= 0.0);
    }
}

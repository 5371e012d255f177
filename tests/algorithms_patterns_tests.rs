#![cfg(feature = "dev")]
//! Tests for random data-set generators.
//!
//! All tests use a seeded `StdRng` so results are reproducible.

use numeric_kernels::internals::algorithms::patterns::{
    DataPattern, jitter, noisy_line, randomize, reset,
};
use numeric_kernels::internals::primitives::point::DataPoint;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn lesson_points() -> Vec<DataPoint<f64>> {
    (1..=10).map(|id| DataPoint::new(id, 50.0)).collect()
}

// ============================================================================
// Pattern Tests
// ============================================================================

#[test]
fn test_pattern_default_and_all() {
    assert_eq!(DataPattern::default(), DataPattern::NormalLike);
    assert_eq!(DataPattern::ALL.len(), 4);
}

#[test]
fn test_pattern_sample_ranges() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..1000 {
        let v = DataPattern::NormalLike.sample(&mut rng);
        assert!((30.0..70.0).contains(&v), "normal-like {}", v);

        let v = DataPattern::Bimodal.sample(&mut rng);
        assert!(
            (20.0..40.0).contains(&v) || (60.0..80.0).contains(&v),
            "bimodal {}",
            v
        );

        let v = DataPattern::Uniform.sample(&mut rng);
        assert!((0.0..100.0).contains(&v), "uniform {}", v);

        let v = DataPattern::Skewed.sample(&mut rng);
        assert!((0.0..100.0).contains(&v), "skewed {}", v);
    }
}

#[test]
fn test_skewed_pattern_leans_low() {
    let mut rng = StdRng::seed_from_u64(7);
    let n = 5000;
    let below_25 = (0..n)
        .filter(|_| DataPattern::Skewed.sample(&mut rng) < 25.0)
        .count();
    // P(u² < 0.25) = 0.5
    assert!(below_25 > n * 2 / 5 && below_25 < n * 3 / 5, "{}", below_25);
}

#[test]
fn test_choose_is_reproducible() {
    let mut a = StdRng::seed_from_u64(99);
    let mut b = StdRng::seed_from_u64(99);
    let picks_a: Vec<DataPattern> = (0..20).map(|_| DataPattern::choose(&mut a)).collect();
    let picks_b: Vec<DataPattern> = (0..20).map(|_| DataPattern::choose(&mut b)).collect();
    assert_eq!(picks_a, picks_b);
}

// ============================================================================
// Data Set Tests
// ============================================================================

#[test]
fn test_randomize_preserves_ids_and_clamps_whole_numbers() {
    let mut rng = StdRng::seed_from_u64(1);
    let input = lesson_points();
    for pattern in DataPattern::ALL {
        let out = randomize(&input, pattern, &mut rng);
        assert_eq!(out.len(), input.len());
        for (before, after) in input.iter().zip(&out) {
            assert_eq!(before.id, after.id);
            assert_eq!(after.value.fract(), 0.0);
            assert!((0.0..=100.0).contains(&after.value));
        }
    }
    // Input untouched.
    assert!(input.iter().all(|p| p.value == 50.0));
}

#[test]
fn test_randomize_seeded_reproducible() {
    let input = lesson_points();
    let a = randomize(&input, DataPattern::Uniform, &mut StdRng::seed_from_u64(5));
    let b = randomize(&input, DataPattern::Uniform, &mut StdRng::seed_from_u64(5));
    assert_eq!(a, b);
}

#[test]
fn test_jitter_bounded_step_and_clamped() {
    let mut rng = StdRng::seed_from_u64(3);
    let edges: Vec<DataPoint<f64>> = vec![
        DataPoint::new(1, 0.0),
        DataPoint::new(2, 50.0),
        DataPoint::new(3, 100.0),
    ];
    for _ in 0..200 {
        let out = jitter(&edges, 10.0, &mut rng).unwrap();
        for (before, after) in edges.iter().zip(&out) {
            assert_eq!(before.id, after.id);
            assert!((after.value - before.value).abs() <= 5.0);
            assert!((0.0..=100.0).contains(&after.value));
        }
    }
}

#[test]
fn test_jitter_zero_step_is_identity() {
    let input = lesson_points();
    let out = jitter(&input, 0.0, &mut StdRng::seed_from_u64(0)).unwrap();
    assert_eq!(out, input);
}

#[test]
fn test_jitter_rejects_negative_step() {
    assert!(jitter(&lesson_points(), -1.0, &mut StdRng::seed_from_u64(0)).is_err());
}

#[test]
fn test_reset() {
    let input = vec![DataPoint::new(4, 12.0), DataPoint::new(9, 77.0)];
    assert_eq!(
        reset(&input, 50.0),
        vec![DataPoint::new(4, 50.0), DataPoint::new(9, 50.0)]
    );
}

// ============================================================================
// Noisy Line Tests
// ============================================================================

#[test]
fn test_noisy_line_bounds() {
    let mut rng = StdRng::seed_from_u64(11);
    let samples = noisy_line(1.2, 0.5, 0.8, 10, &mut rng).unwrap();
    assert_eq!(samples.len(), 10);
    for (i, s) in samples.iter().enumerate() {
        assert_eq!(s.x, i as f64);
        assert_eq!(s.true_y, 1.2 * i as f64 + 0.5);
        assert!((s.y - s.true_y).abs() <= 2.0 * 0.8);
    }
}

#[test]
fn test_noisy_line_without_noise_is_exact() {
    let mut rng = StdRng::seed_from_u64(11);
    let samples = noisy_line(2.0, -1.0, 0.0, 5, &mut rng).unwrap();
    assert!(samples.iter().all(|s| s.y == s.true_y));
}

#[test]
fn test_noisy_line_rejects_negative_noise() {
    let mut rng = StdRng::seed_from_u64(11);
    assert!(noisy_line(1.0, 0.0, -0.1, 5, &mut rng).is_err());
}

//! Normal transform tests
//!
//! Moment convergence for the Box-Muller output, the degenerate sigma = 0
//! case, sign mirroring for negative sigma, and the fixed two-draws-per-
//! sample contract.

use xorshift_rng_core_rs::XorshiftRng;

fn moments(values: &[f32]) -> (f64, f64) {
    let n = values.len() as f64;
    let mean = values.iter().map(|&v| f64::from(v)).sum::<f64>() / n;
    let var = values
        .iter()
        .map(|&v| (f64::from(v) - mean).powi(2))
        .sum::<f64>()
        / n;
    (mean, var)
}

#[test]
fn test_moments_converge() {
    let mut rng = XorshiftRng::new([1, 2, 3, 4]);
    let values = rng.generate_normal(100_000, 5.0, 2.0);

    let (mean, var) = moments(&values);
    assert!((mean - 5.0).abs() < 0.05, "mean {} too far from 5", mean);
    assert!((var - 4.0).abs() < 0.15, "variance {} too far from 4", var);
}

#[test]
fn test_standard_normal_moments() {
    let mut rng = XorshiftRng::new([42, 43, 44, 45]);
    let values = rng.generate_normal(100_000, 0.0, 1.0);

    let (mean, var) = moments(&values);
    assert!(mean.abs() < 0.025, "mean {} too far from 0", mean);
    assert!((var - 1.0).abs() < 0.05, "variance {} too far from 1", var);
}

#[test]
fn test_one_sigma_mass() {
    // ~68.27% of standard-normal mass lies within one sigma
    let mut rng = XorshiftRng::new([1, 2, 3, 4]);
    let values = rng.generate_normal(100_000, 0.0, 1.0);

    let within = values.iter().filter(|v| v.abs() < 1.0).count();
    let fraction = within as f64 / values.len() as f64;
    assert!((fraction - 0.6827).abs() < 0.01, "fraction {}", fraction);
}

#[test]
fn test_sigma_zero_yields_constant_mu() {
    let mut rng = XorshiftRng::new([1, 2, 3, 4]);
    let values = rng.generate_normal(1_000, 7.25, 0.0);
    assert_eq!(values.len(), 1_000);
    assert!(values.iter().all(|&v| v == 7.25));
}

#[test]
fn test_sigma_zero_still_consumes_draws() {
    // the draw-count contract holds even in the degenerate case
    let mut rng = XorshiftRng::new([1, 2, 3, 4]);
    let mut reference = XorshiftRng::new([1, 2, 3, 4]);

    let mut buf = [0.0f32; 10];
    rng.fill_normal(&mut buf, 7.25, 0.0);
    for _ in 0..20 {
        reference.next_u32();
    }
    assert_eq!(rng, reference);
}

#[test]
fn test_two_draws_per_sample_for_odd_counts() {
    for count in [1usize, 3, 7, 9] {
        let mut rng = XorshiftRng::new([1, 2, 3, 4]);
        let mut reference = XorshiftRng::new([1, 2, 3, 4]);

        let mut buf = vec![0.0f32; count];
        rng.fill_normal(&mut buf, 0.0, 1.0);
        for _ in 0..2 * count {
            reference.next_u32();
        }
        assert_eq!(rng, reference, "draw count wrong for {} samples", count);
    }
}

#[test]
fn test_negative_sigma_mirrors_deviates() {
    let mut pos = XorshiftRng::new([1, 2, 3, 4]);
    let mut neg = XorshiftRng::new([1, 2, 3, 4]);

    let a = pos.generate_normal(1_000, 0.0, 1.0);
    let b = neg.generate_normal(1_000, 0.0, -1.0);
    for (x, y) in a.iter().zip(&b) {
        assert_eq!(*y, -*x);
    }
}

#[test]
fn test_empty_fill_consumes_no_draws() {
    let mut rng = XorshiftRng::new([1, 2, 3, 4]);
    rng.fill_normal(&mut [], 0.0, 1.0);
    assert_eq!(rng.next_u32(), 2061);
}

#[test]
fn test_xorshift32_normal_moments() {
    let mut rng = XorshiftRng::new_xorshift32(12345);
    let values = rng.generate_normal(100_000, -3.0, 0.5);

    let (mean, var) = moments(&values);
    assert!((mean + 3.0).abs() < 0.02, "mean {} too far from -3", mean);
    assert!((var - 0.25).abs() < 0.01, "variance {} too far from 0.25", var);
}

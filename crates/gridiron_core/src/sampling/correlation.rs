//! Pairwise attribute correlation.
//!
//! A small fixed table of coefficients links physically related ratings
//! (a 330-pound lineman should not also run like a slot receiver). Pairs
//! absent from the table are independent.

use crate::archetype::AttributeRange;
use crate::sampling::bounded_normal;
use rand::Rng;
use rand_distr::{Distribution, Normal};

/// Symmetric coefficient table. Lookup tries both orders; anything not
/// listed has coefficient 0.
const COEFFICIENTS: &[(&str, &str, f32)] = &[
    ("size", "speed", -0.45),
    ("size", "acceleration", -0.35),
    ("size", "agility", -0.40),
    ("size", "strength", 0.50),
    ("size", "jumping", -0.25),
    ("speed", "acceleration", 0.60),
    ("strength", "run_blocking", 0.45),
    ("strength", "pass_blocking", 0.40),
    ("strength", "anchor", 0.45),
    ("strength", "break_tackle", 0.40),
    ("strength", "block_shedding", 0.45),
    ("strength", "pass_rush", 0.35),
    ("agility", "elusiveness", 0.50),
    ("agility", "route_running", 0.40),
    ("agility", "man_coverage", 0.45),
    ("speed", "pursuit", 0.40),
    ("speed", "release", 0.35),
];

/// Correlation coefficient between two attributes, 0.0 when unrelated.
pub fn coefficient(a: &str, b: &str) -> f32 {
    for (x, y, c) in COEFFICIENTS {
        if (*x == a && *y == b) || (*x == b && *y == a) {
            return *c;
        }
    }
    0.0
}

/// Derive a dependent attribute from an already-sampled base attribute.
///
/// The base value's deviation from its own mean (in standard deviations)
/// is scaled by the pair coefficient onto the target distribution, plus
/// Gaussian noise at 30% of the target spread. Uncorrelated pairs fall
/// back to an independent draw from the target range.
pub fn apply_correlation<R: Rng + ?Sized>(
    rng: &mut R,
    dep_attr: &str,
    base_attr: &str,
    base_value: f32,
    base: &AttributeRange,
    target: &AttributeRange,
) -> u8 {
    let coeff = coefficient(dep_attr, base_attr);
    if coeff == 0.0 {
        return bounded_normal(rng, target.mean, target.std_dev, target.min as f32, target.max as f32)
            .round() as u8;
    }

    let units = if base.std_dev > 0.0 {
        (base_value - base.mean) / base.std_dev
    } else {
        0.0
    };
    let correlated = target.mean + coeff * units * target.std_dev;
    let noise = match Normal::new(0.0, 0.3 * target.std_dev.max(0.0)) {
        Ok(dist) => dist.sample(rng),
        Err(_) => 0.0,
    };

    (correlated + noise).round().clamp(40.0, 99.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn range(min: u8, max: u8, mean: f32, std_dev: f32) -> AttributeRange {
        AttributeRange { min, max, mean, std_dev }
    }

    #[test]
    fn test_coefficient_is_symmetric() {
        assert_eq!(coefficient("size", "speed"), coefficient("speed", "size"));
        assert_eq!(coefficient("size", "speed"), -0.45);
        assert_eq!(coefficient("speed", "kick_power"), 0.0);
    }

    #[test]
    fn test_correlated_values_stay_in_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(17);
        let base = range(60, 95, 80.0, 6.0);
        let target = range(55, 95, 78.0, 7.0);
        for _ in 0..5_000 {
            let v = apply_correlation(&mut rng, "speed", "size", 92.0, &base, &target);
            assert!((40..=99).contains(&v));
        }
    }

    #[test]
    fn test_negative_correlation_orders_means() {
        let mut rng = ChaCha8Rng::seed_from_u64(23);
        let base = range(60, 95, 80.0, 6.0);
        let target = range(55, 95, 78.0, 7.0);

        let mean_for = |rng: &mut ChaCha8Rng, base_value: f32| {
            let mut sum = 0.0f64;
            for _ in 0..2_000 {
                sum += apply_correlation(rng, "speed", "size", base_value, &base, &target) as f64;
            }
            sum / 2_000.0
        };

        // size↔speed is negative: a big-bodied sample should produce a
        // slower dependent mean than a small-bodied one.
        let slow = mean_for(&mut rng, 93.0);
        let fast = mean_for(&mut rng, 65.0);
        assert!(
            slow < fast,
            "negative correlation violated: high-base mean {} >= low-base mean {}",
            slow,
            fast
        );
    }
}

//! Index-seeded pseudo-random function.
//!
//! `seeded_random(i) = frac(sin(i * 12.9898 + 78.233) * 43758.5453)`.
//! Stateless: the same index always yields the same value.

const K1: f64 = 12.9898;
const K2: f64 = 78.233;
const K3: f64 = 43758.5453;

/// Offset for the vertical draw. Far above any rendered index.
pub const Y_OFFSET: u64 = 10_000;
/// Offset for the rotation draw.
pub const ROTATION_OFFSET: u64 = 20_000;

/// Returns a value in `[0, 1)` determined solely by `index`.
pub fn seeded_random(index: u64) -> f64 {
    let x = ((index as f64) * K1 + K2).sin() * K3;
    let frac = x - x.floor();
    // x - floor(x) rounds up to 1.0 for tiny negative x.
    if frac >= 1.0 {
        0.0
    } else {
        frac
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_unit_interval() {
        for i in 0..50_000 {
            let r = seeded_random(i);
            assert!((0.0..1.0).contains(&r), "index {i} gave {r}");
        }
    }

    #[test]
    fn test_repeatable() {
        for i in [0, 1, 7, 999, 10_000, 20_999] {
            assert_eq!(seeded_random(i).to_bits(), seeded_random(i).to_bits());
        }
    }

    #[test]
    fn test_known_value_for_index_zero() {
        let expected = {
            let x = 78.233_f64.sin() * 43758.5453;
            x - x.floor()
        };
        assert_eq!(seeded_random(0), expected);
    }

    #[test]
    fn test_spread_across_buckets() {
        // Rough uniformity: every tenth of [0, 1) gets a fair share of 1000 draws.
        let mut buckets = [0u32; 10];
        for i in 0..1000 {
            buckets[(seeded_random(i) * 10.0) as usize] += 1;
        }
        assert!(buckets.iter().all(|&n| n > 30), "buckets: {buckets:?}");
    }
}

//! Deterministic PRNG based on the Xorshift64 algorithm.
//!
//! Every random draw in the simulation (initial magnet and particle state,
//! boundary resets, stir rolls) comes from one of these, so a run is fully
//! reproducible from its seed.

use serde::{Deserialize, Serialize};

/// Xorshift64 deterministic PRNG with shifts (13, 7, 17).
///
/// A seed of 0 is replaced with a non-zero fallback, since 0 is a fixed
/// point of the algorithm.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Xorshift64 {
    state: u64,
}

impl Xorshift64 {
    const FALLBACK_SEED: u64 = 0x5EED_DEAD_BEEF_CAFE;

    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { Self::FALLBACK_SEED } else { seed },
        }
    }

    /// Advances the state and returns the next 64-bit value.
    pub fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }

    /// Uniform f64 in [0, 1), built from the upper 53 bits.
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform f64 in [min, max).
    pub fn next_range(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_f64() * (max - min)
    }

    /// Uniform f64 in [-magnitude, magnitude).
    pub fn next_signed(&mut self, magnitude: f64) -> f64 {
        self.next_range(-magnitude, magnitude)
    }

    /// Returns `true` with the given probability.
    ///
    /// Always draws one value, so the stream position does not depend on
    /// `probability`. A probability of 1 always succeeds, 0 never does.
    pub fn chance(&mut self, probability: f64) -> bool {
        self.next_f64() < probability
    }

    /// Derives a 32-bit seed for collaborators (such as noise generators)
    /// that only accept `u32`.
    pub fn derive_u32(seed: u64) -> u32 {
        (seed ^ (seed >> 32)) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_u64_produces_known_golden_value_for_seed_42() {
        // If this breaks, every saved run seed replays differently.
        let mut rng = Xorshift64::new(42);
        assert_eq!(rng.next_u64(), 45_454_805_674);
    }

    #[test]
    fn seed_zero_does_not_produce_all_zeros() {
        let mut rng = Xorshift64::new(0);
        for _ in 0..3 {
            assert_ne!(rng.next_u64(), 0);
        }
    }

    #[test]
    fn two_instances_with_same_seed_produce_identical_sequences() {
        let mut a = Xorshift64::new(42);
        let mut b = Xorshift64::new(42);
        for i in 0..1000 {
            assert_eq!(a.next_u64(), b.next_u64(), "diverged at index {i}");
        }
    }

    #[test]
    fn next_signed_is_symmetric_range() {
        let mut rng = Xorshift64::new(5);
        let mut saw_negative = false;
        let mut saw_positive = false;
        for _ in 0..10_000 {
            let v = rng.next_signed(1.0);
            assert!((-1.0..1.0).contains(&v), "{v} outside [-1, 1)");
            saw_negative |= v < 0.0;
            saw_positive |= v > 0.0;
        }
        assert!(saw_negative && saw_positive);
    }

    #[test]
    fn chance_extremes_are_certain() {
        let mut rng = Xorshift64::new(77);
        for _ in 0..1000 {
            assert!(rng.chance(1.0));
            assert!(!rng.chance(0.0));
        }
    }

    #[test]
    fn chance_consumes_one_draw_regardless_of_probability() {
        let mut a = Xorshift64::new(9);
        let mut b = Xorshift64::new(9);
        a.chance(0.0);
        b.chance(1.0);
        assert_eq!(a.next_u64(), b.next_u64());
    }

    #[test]
    fn derive_u32_mixes_high_bits() {
        assert_ne!(
            Xorshift64::derive_u32(1),
            Xorshift64::derive_u32(1 | (1 << 40))
        );
    }

    #[test]
    fn serialization_roundtrip_preserves_state() {
        let mut rng = Xorshift64::new(42);
        for _ in 0..50 {
            rng.next_u64();
        }
        let json = serde_json::to_string(&rng).unwrap();
        let mut restored: Xorshift64 = serde_json::from_str(&json).unwrap();
        for _ in 0..100 {
            assert_eq!(rng.next_u64(), restored.next_u64());
        }
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn next_range_in_bounds_for_any_seed_and_range(
                seed: u64,
                min in -1e6_f64..1e6,
                width in 1.0_f64..1e6,
            ) {
                let max = min + width;
                let mut rng = Xorshift64::new(seed);
                for _ in 0..100 {
                    let v = rng.next_range(min, max);
                    prop_assert!(v >= min && v < max, "{v} outside [{min}, {max})");
                }
            }

            #[test]
            fn chance_rate_tracks_probability(seed: u64, p in 0.05_f64..0.95) {
                let mut rng = Xorshift64::new(seed);
                let hits = (0..10_000).filter(|_| rng.chance(p)).count();
                let rate = hits as f64 / 10_000.0;
                // Loose bound to keep the test from flaking.
                prop_assert!((rate - p).abs() < 0.05, "rate {rate} vs p {p}");
            }
        }
    }
}

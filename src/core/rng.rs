//! Deterministic Random Number Generator
//!
//! Counter-based 32-bit mixing generator. Given the same seed, produces
//! the identical sequence on all platforms, and the cursor can be stored
//! in a save file and resumed mid-stream.

use serde::{Deserialize, Serialize};

/// Deterministic PRNG with an explicit 32-bit cursor.
///
/// Each draw hashes the current counter through a xorshift-multiply mix
/// and then advances the counter by exactly 1. Because the counter never
/// feeds its own output back in, the generator has no short cycles and a
/// full period of 2^32.
///
/// # Determinism Guarantee
///
/// The cursor is the entire state. Two snapshots holding the same cursor
/// produce the same sequence of draws forever after — this is what makes
/// save/load resume exact.
///
/// # Example
///
/// ```
/// use lifetide::core::rng::LifeRng;
///
/// let mut rng = LifeRng::from_state(0);
/// let value = rng.next_u32();
/// assert_eq!(value, 1144304738); // Always the same!
/// assert_eq!(rng.state(), 1);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LifeRng {
    state: u32,
}

impl LifeRng {
    /// Create an RNG positioned at a raw cursor value.
    pub const fn from_state(state: u32) -> Self {
        Self { state }
    }

    /// Create an RNG seeded from a text seed via [`hash_seed`].
    pub fn from_seed(seed: &str) -> Self {
        Self::from_state(hash_seed(seed))
    }

    /// Get the current cursor (for snapshots and regression pins).
    pub const fn state(&self) -> u32 {
        self.state
    }

    /// Generate the next 32-bit random value and advance the cursor by 1.
    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        let mut t = self.state.wrapping_add(0x6D2B_79F5);
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        self.state = self.state.wrapping_add(1);
        t ^ (t >> 14)
    }

    /// Generate a random float in [0, 1).
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / 4_294_967_296.0
    }

    /// Generate a random integer in the inclusive range [min, max].
    ///
    /// Always consumes exactly one draw.
    #[inline]
    pub fn rand_int(&mut self, min: i32, max: i32) -> i32 {
        debug_assert!(min <= max);
        let span = f64::from(max - min + 1);
        (self.next_f64() * span).floor() as i32 + min
    }

    /// Pick an index from a weight table, proportionally to weight.
    ///
    /// Always consumes exactly one draw. Scans the cumulative weights and
    /// selects the first index whose running total exceeds the scaled
    /// draw; the last index absorbs floating-point rounding at the top of
    /// the range. Indexes with weight <= 0 are never selected unless they
    /// are that fallback. Returns `None` only for an empty table.
    pub fn weighted_index(&mut self, weights: &[f64]) -> Option<usize> {
        let total: f64 = weights.iter().sum();
        let scaled = self.next_f64() * total;
        if weights.is_empty() {
            return None;
        }
        let mut cumulative = 0.0;
        for (index, weight) in weights.iter().enumerate() {
            cumulative += weight;
            if scaled < cumulative {
                return Some(index);
            }
        }
        Some(weights.len() - 1)
    }
}

/// Hash a text seed to a 32-bit RNG cursor.
///
/// Multiply-by-31 polynomial accumulate over UTF-16 code units. Existing
/// save files store cursors derived with exactly this hash, so the
/// construction must never change.
pub fn hash_seed(text: &str) -> u32 {
    let mut h: u32 = 0;
    for unit in text.encode_utf16() {
        h = h.wrapping_mul(31).wrapping_add(u32::from(unit));
    }
    h
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_determinism() {
        // Same cursor must produce same sequence
        let mut rng1 = LifeRng::from_state(12345);
        let mut rng2 = LifeRng::from_state(12345);

        for _ in 0..1000 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_known_values() {
        // Verify specific output for regression testing.
        // These values must never change! If they do, existing
        // save files will replay differently.
        let mut rng = LifeRng::from_state(0);
        assert_eq!(rng.next_u32(), 1144304738);
        assert_eq!(rng.next_u32(), 2693262067);
        assert_eq!(rng.next_u32(), 3153583793);

        let mut rng = LifeRng::from_state(12345);
        assert_eq!(rng.next_u32(), 4207900869);
        assert_eq!(rng.next_u32(), 1669619971);
        assert_eq!(rng.next_u32(), 2861960630);
    }

    #[test]
    fn test_cursor_advances_by_one() {
        let mut rng = LifeRng::from_state(7000);
        rng.next_u32();
        assert_eq!(rng.state(), 7001);
        rng.next_f64();
        rng.rand_int(1, 6);
        rng.weighted_index(&[1.0, 2.0]);
        assert_eq!(rng.state(), 7004);
    }

    #[test]
    fn test_hash_seed_known_values() {
        assert_eq!(hash_seed(""), 0);
        assert_eq!(hash_seed("alpha"), 92909918);
        assert_eq!(hash_seed("Alex"), 2043454);
    }

    #[test]
    fn test_next_f64_range() {
        let mut rng = LifeRng::from_state(9999);
        for _ in 0..1000 {
            let val = rng.next_f64();
            assert!((0.0..1.0).contains(&val));
        }
    }

    #[test]
    fn test_rand_int_range() {
        let mut rng = LifeRng::from_state(5678);
        for _ in 0..1000 {
            let val = rng.rand_int(-10, 10);
            assert!((-10..=10).contains(&val));
        }
        // Degenerate range still consumes a draw
        let before = rng.state();
        assert_eq!(rng.rand_int(5, 5), 5);
        assert_eq!(rng.state(), before + 1);
    }

    #[test]
    fn test_weighted_index_bounds() {
        let mut rng = LifeRng::from_state(1234);
        let weights = [3.0, 1.0, 2.0];
        for _ in 0..1000 {
            let idx = rng.weighted_index(&weights).unwrap();
            assert!(idx < weights.len());
        }
        assert_eq!(rng.weighted_index(&[]), None);
    }

    #[test]
    fn test_weighted_index_skips_zero_weights() {
        let mut rng = LifeRng::from_state(777);
        // A zero-weight entry in the middle can never accumulate past the draw
        let weights = [1.0, 0.0, 1.0];
        for _ in 0..2000 {
            assert_ne!(rng.weighted_index(&weights), Some(1));
        }
    }

    #[test]
    fn test_uniformity_chi_square() {
        // 2^16 draws over 16 buckets; df=15, p=0.001 critical value is
        // 37.7. The statistic for this cursor range is ~10.
        let mut rng = LifeRng::from_state(0);
        let n = 1u32 << 16;
        let mut buckets = [0u32; 16];
        for _ in 0..n {
            buckets[(rng.next_u32() >> 28) as usize] += 1;
        }
        let expected = f64::from(n) / 16.0;
        let chi2: f64 = buckets
            .iter()
            .map(|&b| {
                let d = f64::from(b) - expected;
                d * d / expected
            })
            .sum();
        assert!(chi2 < 40.0, "chi-square too high: {chi2}");
    }

    #[test]
    fn test_no_immediate_cycle() {
        let mut rng = LifeRng::from_state(0);
        let mut prev = rng.next_u32();
        for _ in 0..100_000 {
            let next = rng.next_u32();
            assert_ne!(next, prev);
            prev = next;
        }
    }

    #[test]
    fn test_resume_from_snapshot() {
        let mut rng = LifeRng::from_state(5555);
        for _ in 0..50 {
            rng.next_u32();
        }

        let saved = rng.state();
        let ahead: Vec<u32> = (0..10).map(|_| rng.next_u32()).collect();

        let mut resumed = LifeRng::from_state(saved);
        for expected in ahead {
            assert_eq!(resumed.next_u32(), expected);
        }
    }
}

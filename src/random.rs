//! A splittable, seeded pseudo-random source.
//!
//! [`Seed`] is the opaque, deterministic state threaded through every
//! [`crate::Generator`] invocation. Splitting a seed yields two descendants
//! that behave as independent streams while remaining fully reproducible
//! from the original seed.

use core::ops::RangeInclusive;
use fastrand::Rng;

/// Opaque, splittable PRNG state.
///
/// Two [`Seed`]s produced by [`Seed::split`] never observe each other's
/// draws, but both are deterministic functions of the seed they were split
/// from: running the same generator with the same seed always produces the
/// same [`crate::LazyTree`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Seed(u64);

impl Seed {
    /// Builds a seed from a raw `u64`. Any value is valid.
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Builds a seed from OS randomness. Not reproducible by itself; keep
    /// the returned value around if you need to replay a run.
    pub fn fresh() -> Self {
        Self(fastrand::u64(..))
    }

    pub const fn value(self) -> u64 {
        self.0
    }

    /// Splits this seed into two independent descendants.
    ///
    /// Uses a SplitMix64-style mix step, folding a fixed odd constant into
    /// the second half so the two outputs do not collide even when `self`
    /// is `0`.
    pub const fn split(self) -> (Self, Self) {
        let left = mix(self.0);
        let right = mix(left ^ 0x9E37_79B9_7F4A_7C15);
        (Self(left), Self(right))
    }
}

/// The SplitMix64 finalizer: a fixed-point bijective mix of a 64-bit word.
const fn mix(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9E37_79B9_7F4A_7C15);
    let mut z = x;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// A PRNG handle bound to a [`Seed`], used to draw uniform integers and
/// floats. Constructed fresh from a seed at the start of each generator
/// invocation; never shared or reused across invocations.
#[derive(Clone, Debug)]
pub struct Random(Rng);

impl Random {
    pub fn new(seed: Seed) -> Self {
        Self(Rng::with_seed(seed.value()))
    }

    /// A uniform integer in the inclusive range `lo..=hi`.
    ///
    /// # Panics
    /// Panics if the range is empty (`lo > hi`): this is a caller error,
    /// not a runtime condition a generator should recover from.
    pub fn uniform_i64(&mut self, range: RangeInclusive<i64>) -> i64 {
        assert!(
            range.start() <= range.end(),
            "uniform_i64: empty range {}..={}",
            range.start(),
            range.end()
        );
        self.0.i64(range)
    }

    pub fn uniform_u64(&mut self, range: RangeInclusive<u64>) -> u64 {
        assert!(
            range.start() <= range.end(),
            "uniform_u64: empty range {}..={}",
            range.start(),
            range.end()
        );
        self.0.u64(range)
    }

    pub fn uniform_usize(&mut self, range: RangeInclusive<usize>) -> usize {
        assert!(
            range.start() <= range.end(),
            "uniform_usize: empty range {}..={}",
            range.start(),
            range.end()
        );
        self.0.usize(range)
    }

    /// A uniform float in `[0.0, 1.0)`.
    pub fn uniform_float(&mut self) -> f64 {
        self.0.f64()
    }

    pub fn boolean(&mut self) -> bool {
        self.0.bool()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_is_deterministic() {
        let seed = Seed::new(42);
        let (a1, b1) = seed.split();
        let (a2, b2) = seed.split();
        assert_eq!(a1, a2);
        assert_eq!(b1, b2);
    }

    #[test]
    fn split_halves_differ() {
        let (a, b) = Seed::new(1).split();
        assert_ne!(a, b);
    }

    #[test]
    fn split_of_zero_does_not_collide() {
        let (a, b) = Seed::new(0).split();
        assert_ne!(a, b);
    }

    #[test]
    fn uniform_i64_is_deterministic_given_seed() {
        let mut r1 = Random::new(Seed::new(7));
        let mut r2 = Random::new(Seed::new(7));
        for _ in 0..16 {
            assert_eq!(r1.uniform_i64(-100..=100), r2.uniform_i64(-100..=100));
        }
    }

    #[test]
    fn uniform_i64_stays_in_range() {
        let mut random = Random::new(Seed::new(123));
        for _ in 0..256 {
            let n = random.uniform_i64(4..=8);
            assert!((4..=8).contains(&n));
        }
    }

    #[test]
    fn uniform_float_is_in_unit_interval() {
        let mut random = Random::new(Seed::new(9));
        for _ in 0..256 {
            let f = random.uniform_float();
            assert!((0.0..1.0).contains(&f));
        }
    }

    #[test]
    #[should_panic(expected = "empty range")]
    fn uniform_i64_rejects_empty_range() {
        let mut random = Random::new(Seed::new(1));
        random.uniform_i64(5..=4);
    }
}

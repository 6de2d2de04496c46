//! Injected randomness.
//!
//! Nothing in this workspace reaches for an ambient generator: every
//! operation that needs random bytes takes a [`RandomSource`]. Any
//! [`rand::TryRngCore`] is one, which covers `OsRng` (fallible) as well as
//! seeded generators such as `StdRng` used by the tests.

use rand::TryRngCore;

use crate::error::{MathError, Result};

/// Source of uniformly random bytes.
pub trait RandomSource {
    /// Fill `dest` with random bytes, reporting failures of the underlying
    /// source instead of panicking. An empty `dest` never reaches the source.
    fn fill_random(&mut self, dest: &mut [u8]) -> Result<()>;

    /// Uniform Fisher–Yates shuffle of `values`.
    ///
    /// Used to draw distinct values: shuffle the candidates, keep a prefix.
    fn shuffle<T>(&mut self, values: &mut [T]) -> Result<()>
    where
        Self: Sized,
    {
        for upper in (1..values.len()).rev() {
            let index = uniform_index(self, upper + 1)?;
            values.swap(upper, index);
        }
        Ok(())
    }
}

impl<R: TryRngCore + ?Sized> RandomSource for R {
    fn fill_random(&mut self, dest: &mut [u8]) -> Result<()> {
        if dest.is_empty() {
            return Ok(());
        }
        self.try_fill_bytes(dest)
            .map_err(|err| MathError::Randomness(err.to_string()))
    }
}

/// Uniform index in `0..bound` by rejection sampling over `u32` draws.
fn uniform_index<R: RandomSource + ?Sized>(
    rng: &mut R,
    bound: usize,
) -> Result<usize> {
    debug_assert!(bound > 0 && bound <= u32::MAX as usize);
    let bound = bound as u32;
    // Values above `zone` would bias the low residues.
    let zone = u32::MAX - (u32::MAX - bound + 1) % bound;
    loop {
        let mut bytes = [0u8; 4];
        rng.fill_random(&mut bytes)?;
        let value = u32::from_le_bytes(bytes);
        if value <= zone {
            return Ok((value % bound) as usize);
        }
    }
}

/// Sources for exercising failure paths in tests.
#[cfg(any(test, feature = "test-util"))]
pub mod testing {
    use std::fmt;

    use rand::TryRngCore;

    /// Source that fails on every request.
    pub struct FailingRng;

    #[derive(Debug)]
    pub struct Exhausted;

    impl fmt::Display for Exhausted {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "entropy exhausted")
        }
    }

    impl TryRngCore for FailingRng {
        type Error = Exhausted;

        fn try_next_u32(&mut self) -> Result<u32, Exhausted> {
            Err(Exhausted)
        }

        fn try_next_u64(&mut self) -> Result<u64, Exhausted> {
            Err(Exhausted)
        }

        fn try_fill_bytes(&mut self, _dst: &mut [u8]) -> Result<(), Exhausted> {
            Err(Exhausted)
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::testing::FailingRng;
    use super::*;

    #[test]
    fn fill_random_reports_source_failure() {
        let mut buf = [0u8; 8];
        let err = FailingRng.fill_random(&mut buf).unwrap_err();
        assert_eq!(err, MathError::Randomness("entropy exhausted".into()));
    }

    #[test]
    fn empty_fill_skips_the_source() {
        FailingRng.fill_random(&mut []).unwrap();
    }

    #[test]
    fn shuffle_reports_source_failure() {
        let mut values = [1u8, 2, 3];
        assert!(FailingRng.shuffle(&mut values).is_err());
    }

    #[test]
    fn shuffle_produces_a_permutation() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut values: Vec<u8> = (1..=255).collect();
        rng.shuffle(&mut values).unwrap();

        let mut sorted = values.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (1..=255).collect::<Vec<u8>>());
        assert_ne!(values, sorted, "255 values left in order");
    }

    #[test]
    fn shuffle_is_deterministic_for_a_seed() {
        let mut first: Vec<u8> = (0..50).collect();
        let mut second = first.clone();
        StdRng::seed_from_u64(99).shuffle(&mut first).unwrap();
        StdRng::seed_from_u64(99).shuffle(&mut second).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn shuffle_of_short_slices_consumes_nothing() {
        let mut empty: [u8; 0] = [];
        FailingRng.shuffle(&mut empty).unwrap();
        let mut single = [9u8];
        FailingRng.shuffle(&mut single).unwrap();
        assert_eq!(single, [9]);
    }

    #[test]
    fn uniform_index_stays_below_bound() {
        let mut rng = StdRng::seed_from_u64(3);
        for bound in [1usize, 2, 3, 7, 255, 256] {
            for _ in 0..200 {
                assert!(uniform_index(&mut rng, bound).unwrap() < bound);
            }
        }
    }

    #[test]
    fn uniform_index_reaches_every_value() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut hits = [false; 5];
        for _ in 0..500 {
            hits[uniform_index(&mut rng, 5).unwrap()] = true;
        }
        assert!(hits.iter().all(|&hit| hit));
    }
}

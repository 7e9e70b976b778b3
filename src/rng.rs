use anyhow::{Result, anyhow};
use voxell_rng::{getrandom::MagicSeed, prelude::RngCore, rng::XorShift128};

/// A source of uniformly distributed integers.
///
/// The glitch pass takes one of these by argument instead of reaching for a process-wide
/// generator, so tests can hand it a fixed sequence.
pub trait RandomSource {
    /// Returns an integer in `[0, upper)`. `upper` must be non-zero.
    fn next_in_range(&mut self, upper: usize) -> usize;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_in_range(&mut self, upper: usize) -> usize {
        (**self).next_in_range(upper)
    }
}

/// [`XorShift128`] behind the [`RandomSource`] interface.
pub struct SeededRng {
    inner: XorShift128,
}

impl SeededRng {
    /// Same seed, same sequence.
    pub fn new(seed: u64) -> Self {
        Self {
            inner: XorShift128::new(seed),
        }
    }

    /// Seeds from OS entropy.
    pub fn from_entropy() -> Result<Self> {
        let seed = MagicSeed::u64().map_err(|e| anyhow!("could not gather entropy for the rng seed: {:?}", e))?;
        Ok(Self::new(seed))
    }
}

impl RandomSource for SeededRng {
    fn next_in_range(&mut self, upper: usize) -> usize {
        debug_assert!(upper > 0, "next_in_range called with an empty range");
        // widening multiply maps the full u64 range onto [0, upper)
        ((u128::from(self.inner.next_u64()) * upper as u128) >> 64) as usize
    }
}

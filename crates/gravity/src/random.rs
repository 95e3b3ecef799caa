//! Seeded randomness. The same seed always reproduces the same sequence of draws.

use rand::{Rng as _, SeedableRng as _};

use crate::errors::{InvalidRangeSnafu, Result};

/// A source of random numbers for spawning and seeding.
pub trait RandomSource {
    /// A float in `[min, max)`. Returns `min` when the range is empty.
    ///
    /// # Errors
    /// When either bound isn't finite, or the range is too wide to sample from.
    fn next_float(&mut self, min: f32, max: f32) -> Result<f32>;

    /// An integer in `[0, max)`. Returns 0 when `max` is 0.
    fn next_int(&mut self, max: u64) -> u64;
}

/// A reproducible random number generator that remembers its seed.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    /// The seed the generator was last (re)seeded with.
    seed: u64,
    /// The underlying generator.
    rng: rand::rngs::StdRng,
}

impl SeededRandom {
    /// Instantiate
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: rand::rngs::StdRng::seed_from_u64(seed),
        }
    }

    /// Pick a seed from `[0, range)` using the thread's entropy.
    #[must_use]
    pub fn fresh_seed(range: u64) -> u64 {
        if range == 0 {
            return 0;
        }
        rand::thread_rng().gen_range(0..range)
    }

    /// Restart the sequence of draws from the given seed.
    pub fn reseed(&mut self, seed: u64) {
        tracing::trace!("Reseeding with {seed}");
        *self = Self::new(seed);
    }

    /// The current seed.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SeededRandom {
    fn next_float(&mut self, min: f32, max: f32) -> Result<f32> {
        snafu::ensure!(
            min.is_finite() && max.is_finite() && (max - min).is_finite(),
            InvalidRangeSnafu { min, max }
        );
        if min >= max {
            return Ok(min);
        }
        Ok(self.rng.gen_range(min..max))
    }

    fn next_int(&mut self, max: u64) -> u64 {
        if max == 0 {
            return 0;
        }
        self.rng.gen_range(0..max)
    }
}

//! # RandomNumberGenerator
//!
//! The `RandomNumberGenerator` struct wraps a seeded `StdRng` from the `rand` crate and
//! exposes the handful of draws the genetic operators need. Every engine owns exactly one
//! generator, so a run is fully determined by its seed and configuration.
//!
//! ## Example
//!
//! ```rust
//! use knapsack_ga::rng::RandomNumberGenerator;
//!
//! let mut a = RandomNumberGenerator::from_seed(7);
//! let mut b = RandomNumberGenerator::from_seed(7);
//!
//! assert_eq!(a.uniform(), b.uniform());
//! assert_eq!(a.index(10), b.index(10));
//! ```

use rand::{rngs::StdRng, Rng, SeedableRng};

/// A seeded pseudo-random source. Cloning it forks the stream: both copies yield the
/// same sequence from the point of the clone onwards.
#[derive(Clone, Debug)]
pub struct RandomNumberGenerator {
    rng: StdRng,
}

impl RandomNumberGenerator {
    /// Creates a new `RandomNumberGenerator` instance with a specific seed.
    ///
    /// # Arguments
    ///
    /// * `seed` - The seed to use for the random number generator.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Returns `true` or `false` with equal probability.
    pub fn coin_flip(&mut self) -> bool {
        self.rng.gen_bool(0.5)
    }

    /// Draws a uniformly distributed value in `[0, 1)`.
    pub fn uniform(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    /// Returns `true` with probability `probability`.
    ///
    /// Always consumes exactly one uniform draw, even for probabilities of 0 or 1,
    /// so the position in the stream does not depend on the rate.
    pub fn chance(&mut self, probability: f64) -> bool {
        self.uniform() < probability
    }

    /// Draws a uniformly distributed index in `[0, len)`.
    ///
    /// # Panics
    ///
    /// Panics if `len` is zero.
    pub fn index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }

    /// Draws a uniformly distributed value in `[low, high)`.
    ///
    /// # Panics
    ///
    /// Panics if `low >= high`.
    pub fn range(&mut self, low: usize, high: usize) -> usize {
        self.rng.gen_range(low..high)
    }
}

//! # RandomNumberGenerator
//!
//! The `RandomNumberGenerator` struct is the single source of randomness handed to
//! selection and variation operators. It wraps the `rand` crate's `StdRng` so runs
//! can be reproduced from a seed.
//!
//! ## Example
//!
//! ```rust
//! use elitega::rng::RandomNumberGenerator;
//!
//! let mut rng = RandomNumberGenerator::from_seed(7);
//! let coin = rng.probability();
//! assert!((0.0..1.0).contains(&coin));
//!
//! let pick = rng.index(10);
//! assert!(pick < 10);
//! ```

use rand::{rngs::StdRng, Rng, SeedableRng};
use std::collections::VecDeque;

/// A wrapper around the `rand` crate's `StdRng` that provides the draws
/// needed by genetic operators.
#[derive(Debug, Clone)]
pub struct RandomNumberGenerator {
    pub rng: StdRng,
}

impl RandomNumberGenerator {
    /// Creates a new `RandomNumberGenerator` instance seeded from the system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a new `RandomNumberGenerator` instance with a specific seed.
    ///
    /// This is useful for reproducible runs, tests and benchmarks.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draws a uniform value in `[0, 1)`.
    ///
    /// Operators compare this against crossover and mutation probabilities.
    pub fn probability(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    /// Draws a uniform index in `[0, len)`.
    ///
    /// # Panics
    ///
    /// Panics if `len` is zero.
    pub fn index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }

    /// Generates a specified number of random floating-point numbers within the given range.
    ///
    /// # Parameters
    ///
    /// - `from`: The lower bound of the range (inclusive).
    /// - `to`: The upper bound of the range (exclusive).
    /// - `num`: The number of random numbers to generate.
    ///
    /// # Returns
    ///
    /// A `VecDeque` containing the generated random numbers.
    pub fn fetch_uniform(&mut self, from: f32, to: f32, num: usize) -> VecDeque<f32> {
        let mut uniform_numbers = VecDeque::with_capacity(num);
        uniform_numbers.extend((0..num).map(|_| self.rng.gen_range(from..to)));
        uniform_numbers
    }
}

impl Default for RandomNumberGenerator {
    fn default() -> Self {
        Self::new()
    }
}

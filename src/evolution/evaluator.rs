//! # Evaluation Maps
//!
//! An [`EvaluationMap`] applies a [`Challenge`] to a batch of genomes. It may
//! spread the work over threads, but it must return the results in input order:
//! the evolution loop assigns result `i` to genome `i` with no other key.
//!
//! ```rust
//! use elitega::evolution::{Challenge, EvaluationMap, ParallelMap, SequentialMap};
//! use elitega::error::Result;
//! # use elitega::phenotype::Phenotype;
//! # use elitega::rng::RandomNumberGenerator;
//! # #[derive(Clone, Debug, PartialEq)]
//! # struct Value(f64);
//! # impl Phenotype for Value {
//! #     fn crossover(&mut self, _other: &Self) {}
//! #     fn mutate(&mut self, _rng: &mut RandomNumberGenerator) {}
//! # }
//!
//! struct Square;
//!
//! impl Challenge<Value> for Square {
//!     fn score(&self, phenotype: &Value) -> Result<Vec<f64>> {
//!         Ok(vec![phenotype.0 * phenotype.0])
//!     }
//! }
//!
//! let genomes = [Value(1.0), Value(2.0), Value(3.0)];
//! let refs: Vec<&Value> = genomes.iter().collect();
//!
//! let sequential = SequentialMap.map(&Square, &refs).unwrap();
//! let parallel = ParallelMap::new(0).map(&Square, &refs).unwrap();
//! assert_eq!(sequential, parallel);
//! assert_eq!(parallel, vec![vec![1.0], vec![4.0], vec![9.0]]);
//! ```

use std::fmt::{self, Debug};
use std::sync::Arc;

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

use super::challenge::Challenge;
use crate::{
    error::{GeneticError, Result},
    phenotype::Phenotype,
};

/// Default number of genomes below which [`ParallelMap`] stays on the calling thread.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 64;

/// Order-preserving map of a challenge over genomes.
pub trait EvaluationMap: Debug + Send + Sync {
    /// Scores every genome; result `i` belongs to `genomes[i]`.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by the challenge.
    fn map<P, C>(&self, challenge: &C, genomes: &[&P]) -> Result<Vec<Vec<f64>>>
    where
        P: Phenotype,
        C: Challenge<P>;
}

/// Evaluates genomes one after another on the calling thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialMap;

impl EvaluationMap for SequentialMap {
    fn map<P, C>(&self, challenge: &C, genomes: &[&P]) -> Result<Vec<Vec<f64>>>
    where
        P: Phenotype,
        C: Challenge<P>,
    {
        genomes.iter().map(|genome| challenge.score(genome)).collect()
    }
}

/// Evaluates genomes with rayon.
///
/// Batches smaller than the threshold are evaluated sequentially. By default the
/// global rayon pool is used; [`ParallelMap::with_threads`] builds a dedicated one.
#[derive(Clone)]
pub struct ParallelMap {
    parallel_threshold: usize,
    pool: Option<Arc<ThreadPool>>,
}

impl ParallelMap {
    /// Creates a map on the global rayon pool.
    pub fn new(parallel_threshold: usize) -> Self {
        Self {
            parallel_threshold,
            pool: None,
        }
    }

    /// Creates a map on a dedicated pool of `num_threads` threads.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `num_threads` is 0 or the pool cannot be built.
    pub fn with_threads(num_threads: usize, parallel_threshold: usize) -> Result<Self> {
        if num_threads == 0 {
            return Err(GeneticError::Configuration(
                "Evaluation thread pool needs at least one thread".to_string(),
            ));
        }

        let pool = ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .thread_name(|i| format!("elitega-eval-{}", i))
            .build()
            .map_err(|e| {
                GeneticError::Configuration(format!("Failed to build evaluation pool: {}", e))
            })?;

        Ok(Self {
            parallel_threshold,
            pool: Some(Arc::new(pool)),
        })
    }

    pub fn parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    pub fn num_threads(&self) -> usize {
        match &self.pool {
            Some(pool) => pool.current_num_threads(),
            None => rayon::current_num_threads(),
        }
    }
}

impl Default for ParallelMap {
    fn default() -> Self {
        Self::new(DEFAULT_PARALLEL_THRESHOLD)
    }
}

impl Debug for ParallelMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParallelMap")
            .field("parallel_threshold", &self.parallel_threshold)
            .field("dedicated_pool", &self.pool.is_some())
            .finish()
    }
}

impl EvaluationMap for ParallelMap {
    fn map<P, C>(&self, challenge: &C, genomes: &[&P]) -> Result<Vec<Vec<f64>>>
    where
        P: Phenotype,
        C: Challenge<P>,
    {
        if genomes.len() < self.parallel_threshold {
            return SequentialMap.map(challenge, genomes);
        }

        // indexed collect keeps input order
        let run = || {
            genomes
                .par_iter()
                .map(|genome| challenge.score(genome))
                .collect::<Result<Vec<_>>>()
        };

        match &self.pool {
            Some(pool) => pool.install(run),
            None => run(),
        }
    }
}

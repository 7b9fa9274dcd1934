//! # Hall of Fame
//!
//! A bounded archive of the best individuals observed over a whole run, kept
//! sorted best-first. The evolution loop re-injects its members into every new
//! generation untouched, which is what makes the algorithm elitist.
//!
//! ```rust
//! use elitega::hall_of_fame::HallOfFame;
//! use elitega::individual::Individual;
//! # use elitega::phenotype::Phenotype;
//! # use elitega::rng::RandomNumberGenerator;
//! # #[derive(Clone, Debug, PartialEq)]
//! # struct Value(i64);
//! # impl Phenotype for Value {
//! #     fn crossover(&mut self, _other: &Self) {}
//! #     fn mutate(&mut self, _rng: &mut RandomNumberGenerator) {}
//! # }
//!
//! let mut hof = HallOfFame::new(2).unwrap();
//! let population = vec![
//!     Individual::with_fitness(Value(5), vec![5.0]),
//!     Individual::with_fitness(Value(1), vec![1.0]),
//!     Individual::with_fitness(Value(3), vec![3.0]),
//! ];
//! hof.update(&population).unwrap();
//!
//! let best: Vec<i64> = hof.items().iter().map(|ind| ind.genome().0).collect();
//! assert_eq!(best, vec![1, 3]);
//! ```

use crate::error::{GeneticError, Result};
use crate::individual::Individual;
use crate::phenotype::Phenotype;

/// Bounded, best-first collection of distinct individuals.
#[derive(Debug, Clone)]
pub struct HallOfFame<P: Phenotype> {
    capacity: usize,
    items: Vec<Individual<P>>,
}

impl<P> HallOfFame<P>
where
    P: Phenotype + PartialEq,
{
    /// Creates an empty hall of fame holding at most `capacity` individuals.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `capacity` is 0.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(GeneticError::Configuration(
                "Hall of fame capacity must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            capacity,
            items: Vec::with_capacity(capacity),
        })
    }

    /// Offers every candidate to the archive.
    ///
    /// A candidate enters if there is room left or if it strictly outranks the
    /// current worst member, which is then evicted. Candidates equal to an existing
    /// member (same genome and fitness) are skipped. Members with equal fitness keep
    /// their arrival order.
    ///
    /// # Errors
    ///
    /// Returns an error if a candidate has no valid fitness.
    pub fn update(&mut self, candidates: &[Individual<P>]) -> Result<()> {
        for candidate in candidates {
            if !candidate.fitness().is_valid() {
                return Err(GeneticError::UnevaluatedIndividual(
                    "Hall of fame candidates must have a valid fitness".to_string(),
                ));
            }

            let has_room = self.items.len() < self.capacity;
            let outranks_worst = self
                .items
                .last()
                .is_some_and(|worst| candidate.fitness().is_better_than(worst.fitness()));

            if !(has_room || outranks_worst) || self.items.contains(candidate) {
                continue;
            }

            if !has_room {
                self.items.pop();
            }

            let position = self
                .items
                .partition_point(|member| !candidate.fitness().is_better_than(member.fitness()));
            self.items.insert(position, candidate.clone());
        }

        Ok(())
    }

    /// Members, best first.
    pub fn items(&self) -> &[Individual<P>] {
        &self.items
    }

    pub fn best(&self) -> Option<&Individual<P>> {
        self.items.first()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

//! # VariationStrategy
//!
//! The `VariationStrategy` trait defines the interface for operators that apply
//! crossover and mutation to an offspring pool. Every individual whose genome is
//! altered must come back with an invalid fitness, so the evolution loop knows to
//! evaluate it again.
pub mod var_and;

use std::fmt::Debug;

use crate::{
    error::Result, individual::Individual, phenotype::Phenotype, rng::RandomNumberGenerator,
};

/// # VariationStrategy
///
/// Applies crossover and mutation to a pool of selected individuals.
pub trait VariationStrategy<Pheno: Phenotype>
where
    Self: Debug + Send + Sync,
{
    /// Varies `offspring` and returns the varied pool.
    ///
    /// ## Parameters
    ///
    /// - `offspring`: The selected individuals. Each slot is an independent value.
    /// - `crossover_probability`: Probability that a pair of slots is mated.
    /// - `mutation_probability`: Probability that a slot is mutated.
    /// - `rng`: The random number generator used for all draws.
    ///
    /// ## Returns
    ///
    /// A pool of the same length as `offspring`, with the fitness of every
    /// altered individual invalidated.
    fn vary(
        &self,
        offspring: Vec<Individual<Pheno>>,
        crossover_probability: f64,
        mutation_probability: f64,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Individual<Pheno>>>;
}

pub use var_and::VarAnd;

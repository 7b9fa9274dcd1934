use std::fmt::Debug;

use crate::error::{GeneticError, Result};
use crate::individual::Individual;
use crate::phenotype::Phenotype;
use crate::rng::RandomNumberGenerator;

/// Trait for selection strategies.
///
/// A selection strategy draws the offspring pool of the next generation from the
/// current population. It must return exactly `num_to_select` individuals; the same
/// individual may be picked more than once. Lower fitness is better.
///
/// # Examples
///
/// ```
/// use elitega::individual::Individual;
/// use elitega::selection::{ElitistSelection, SelectionStrategy};
/// use elitega::phenotype::Phenotype;
/// use elitega::rng::RandomNumberGenerator;
/// use elitega::error::Result;
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct MyPhenotype {
///     value: f64,
/// }
///
/// impl Phenotype for MyPhenotype {
///     fn crossover(&mut self, other: &Self) {
///         self.value = (self.value + other.value) / 2.0;
///     }
///
///     fn mutate(&mut self, _rng: &mut RandomNumberGenerator) {
///         self.value += 0.1;
///     }
/// }
///
/// fn main() -> Result<()> {
///     let population: Vec<_> = [0.5, 0.8, 0.3]
///         .iter()
///         .map(|&v| Individual::with_fitness(MyPhenotype { value: v }, vec![v]))
///         .collect();
///     let mut rng = RandomNumberGenerator::new();
///
///     let selected = ElitistSelection::default().select(&population, 2, &mut rng)?;
///
///     assert_eq!(selected.len(), 2);
///     assert_eq!(selected[0].genome().value, 0.3);
///
///     Ok(())
/// }
/// ```
pub trait SelectionStrategy<P>: Debug + Send + Sync
where
    P: Phenotype,
{
    /// Selects `num_to_select` individuals from `population`, with replacement.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The population is empty and `num_to_select` is positive
    /// - An individual of the population has no valid fitness
    fn select(
        &self,
        population: &[Individual<P>],
        num_to_select: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Individual<P>>>;
}

/// Primary fitness of every individual, failing on the first unevaluated one.
pub(crate) fn primary_fitness<P: Phenotype>(population: &[Individual<P>]) -> Result<Vec<f64>> {
    population
        .iter()
        .enumerate()
        .map(|(i, ind)| {
            ind.fitness().primary().ok_or_else(|| {
                GeneticError::Selection(format!(
                    "Individual {} has no valid fitness and cannot be ranked",
                    i
                ))
            })
        })
        .collect()
}

/// Validates the arguments every strategy shares.
pub(crate) fn check_population<P: Phenotype>(
    population: &[Individual<P>],
    num_to_select: usize,
) -> Result<()> {
    if population.is_empty() && num_to_select > 0 {
        return Err(GeneticError::EmptyPopulation);
    }
    Ok(())
}

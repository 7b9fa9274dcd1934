use crate::error::Result;
use crate::individual::Individual;
use crate::phenotype::Phenotype;
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_strategy::{check_population, SelectionStrategy};

/// Uniform selection with replacement, ignoring fitness.
///
/// Unevaluated individuals are accepted since no ranking takes place.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default)]
pub struct RandomSelection;

impl RandomSelection {
    pub fn new() -> Self {
        Self
    }
}

impl<P> SelectionStrategy<P> for RandomSelection
where
    P: Phenotype,
{
    fn select(
        &self,
        population: &[Individual<P>],
        num_to_select: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Individual<P>>> {
        check_population(population, num_to_select)?;

        Ok((0..num_to_select)
            .map(|_| population[rng.index(population.len())].clone())
            .collect())
    }
}

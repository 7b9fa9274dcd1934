use crate::error::Result;
use crate::individual::Individual;
use crate::phenotype::Phenotype;
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_strategy::{check_population, primary_fitness, SelectionStrategy};

/// A selection strategy that selects the best individuals based on fitness.
///
/// The population is ranked by ascending fitness and the top individuals are
/// taken in order. When more individuals are requested than the population
/// holds, the ranking is walked again from the top, so the best individuals are
/// repeated. Ties keep their population order. No randomness is used.
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
///     fn crossover(&mut self, _other: &Self) {}
///     fn mutate(&mut self, _rng: &mut RandomNumberGenerator) {}
/// }
///
/// fn main() -> Result<()> {
///     let population: Vec<_> = [1.0, 2.0, 3.0]
///         .iter()
///         .map(|&v| Individual::with_fitness(MyPhenotype { value: v }, vec![v]))
///         .collect();
///     let mut rng = RandomNumberGenerator::new();
///
///     let selected = ElitistSelection::default().select(&population, 4, &mut rng)?;
///     let values: Vec<f64> = selected.iter().map(|i| i.genome().value).collect();
///
///     assert_eq!(values, vec![1.0, 2.0, 3.0, 1.0]);
///
///     Ok(())
/// }
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default)]
pub struct ElitistSelection;

impl ElitistSelection {
    pub fn new() -> Self {
        Self
    }
}

impl<P> SelectionStrategy<P> for ElitistSelection
where
    P: Phenotype,
{
    fn select(
        &self,
        population: &[Individual<P>],
        num_to_select: usize,
        _rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Individual<P>>> {
        check_population(population, num_to_select)?;
        let fitness = primary_fitness(population)?;

        let mut ranked: Vec<usize> = (0..population.len()).collect();
        ranked.sort_by(|&a, &b| fitness[a].total_cmp(&fitness[b]));

        Ok(ranked
            .iter()
            .cycle()
            .take(num_to_select)
            .map(|&idx| population[idx].clone())
            .collect())
    }
}

use crate::error::{GeneticError, Result};
use crate::individual::Individual;
use crate::phenotype::Phenotype;
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_strategy::{check_population, primary_fitness, SelectionStrategy};

/// A selection strategy that selects individuals through tournament selection.
///
/// Each pick draws `tournament_size` contestants uniformly with replacement and
/// keeps the one with the lowest fitness. Picks are independent, so the result
/// may contain the same individual several times.
///
/// - Smaller tournament sizes lead to more exploration (more random selection)
/// - Larger tournament sizes lead to more exploitation (more focus on the best individuals)
///
/// # Examples
///
/// ```
/// use elitega::individual::Individual;
/// use elitega::selection::{SelectionStrategy, TournamentSelection};
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
///     let population: Vec<_> = [0.5, 0.8, 0.3, 0.9, 0.1]
///         .iter()
///         .map(|&v| Individual::with_fitness(MyPhenotype { value: v }, vec![v]))
///         .collect();
///     let mut rng = RandomNumberGenerator::from_seed(3);
///
///     let selection = TournamentSelection::new(3)?;
///     let selected = selection.select(&population, 8, &mut rng)?;
///
///     assert_eq!(selected.len(), 8);
///
///     Ok(())
/// }
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct TournamentSelection {
    tournament_size: usize,
}

impl TournamentSelection {
    /// Creates a new TournamentSelection strategy with the specified tournament size.
    ///
    /// # Errors
    ///
    /// Returns an error if `tournament_size` is 0.
    pub fn new(tournament_size: usize) -> Result<Self> {
        if tournament_size < 1 {
            return Err(GeneticError::Configuration(
                "Tournament size must be at least 1".to_string(),
            ));
        }

        Ok(Self { tournament_size })
    }

    pub fn tournament_size(&self) -> usize {
        self.tournament_size
    }

    /// Runs a single tournament and returns the index of the winner.
    fn run_tournament(&self, fitness: &[f64], rng: &mut RandomNumberGenerator) -> usize {
        let mut best_idx = rng.index(fitness.len());

        for _ in 1..self.tournament_size {
            let idx = rng.index(fitness.len());
            if fitness[idx] < fitness[best_idx] {
                best_idx = idx;
            }
        }

        best_idx
    }
}

impl Default for TournamentSelection {
    fn default() -> Self {
        Self { tournament_size: 3 }
    }
}

impl<P> SelectionStrategy<P> for TournamentSelection
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
        let fitness = primary_fitness(population)?;

        Ok((0..num_to_select)
            .map(|_| population[self.run_tournament(&fitness, rng)].clone())
            .collect())
    }
}

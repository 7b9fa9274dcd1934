//! # elitega
//!
//! A generational evolutionary optimizer with hall-of-fame elitism.
//!
//! Every generation draws a reduced offspring pool through a
//! [`SelectionStrategy`], varies it with a [`VariationStrategy`], evaluates the
//! individuals whose fitness was invalidated and then re-injects the members of a
//! [`HallOfFame`] untouched. The run produces a [`Logbook`] with one record per
//! generation.
//!
//! ```rust
//! use elitega::prelude::*;
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Guess(i64);
//!
//! impl Phenotype for Guess {
//!     fn crossover(&mut self, other: &Self) {
//!         self.0 = (self.0 + other.0) / 2;
//!     }
//!
//!     fn mutate(&mut self, rng: &mut RandomNumberGenerator) {
//!         self.0 += rng.index(21) as i64 - 10;
//!     }
//! }
//!
//! struct DistanceTo(i64);
//!
//! impl Challenge<Guess> for DistanceTo {
//!     fn score(&self, guess: &Guess) -> Result<Vec<f64>> {
//!         Ok(vec![(guess.0 - self.0).abs() as f64])
//!     }
//! }
//!
//! let launcher = EvolutionLauncher::new(
//!     TournamentSelection::default(),
//!     VarAnd::new(),
//!     DistanceTo(42),
//! )
//! .with_statistics(Statistics::standard());
//!
//! let population: Vec<_> = (0..20).map(|i| Individual::new(Guess(i * 10))).collect();
//! let mut hall_of_fame = HallOfFame::new(2)?;
//! let mut rng = RandomNumberGenerator::from_seed(1);
//!
//! let options = EvolutionOptions::builder().num_generations(10).build();
//! let result = launcher.evolve(&options, population, Some(&mut hall_of_fame), &mut rng)?;
//!
//! assert_eq!(result.logbook.len(), 11);
//! assert_eq!(result.population.len(), 20);
//! # Ok::<(), elitega::error::GeneticError>(())
//! ```

pub mod error;
pub mod evolution;
pub mod hall_of_fame;
pub mod individual;
pub mod logbook;
pub mod phenotype;
pub mod rng;
pub mod selection;
pub mod statistics;
pub mod variation;

// Re-export commonly used types for convenience
pub use error::{GeneticError, OptionExt, Result, Stage};
pub use evolution::{Challenge, EvolutionLauncher, EvolutionOptions, EvolutionResult};
pub use hall_of_fame::HallOfFame;
pub use individual::{Fitness, Individual};
pub use logbook::{GenerationRecord, Logbook};
pub use phenotype::Phenotype;
pub use rng::RandomNumberGenerator;
pub use selection::SelectionStrategy;
pub use statistics::Statistics;
pub use variation::VariationStrategy;

pub mod prelude {
    pub use crate::error::{GeneticError, Result};
    pub use crate::evolution::{
        Challenge, EvaluationMap, EvolutionLauncher, EvolutionOptions, EvolutionResult,
        GenerationObserver, LogLevel, ParallelMap, SequentialMap,
    };
    pub use crate::hall_of_fame::HallOfFame;
    pub use crate::individual::{Fitness, Individual};
    pub use crate::logbook::{GenerationRecord, Logbook};
    pub use crate::phenotype::Phenotype;
    pub use crate::rng::RandomNumberGenerator;
    pub use crate::selection::{
        ElitistSelection, RandomSelection, SelectionStrategy, TournamentSelection,
    };
    pub use crate::statistics::Statistics;
    pub use crate::variation::{VarAnd, VariationStrategy};
}

//! # EvolutionOptions
//!
//! The `EvolutionOptions` struct represents the configuration of an evolution run:
//! the number of generations, the crossover and mutation probabilities handed to
//! the variation operator, and how much of the per-generation logbook is emitted
//! through `tracing`.
//!
//! ## Example
//!
//! ```rust
//! use elitega::evolution::options::{EvolutionOptions, LogLevel};
//!
//! // Create a new EvolutionOptions instance with custom parameters
//! let custom_options = EvolutionOptions::new(200, 0.7, 0.2, LogLevel::Verbose);
//!
//! // Or through the builder
//! let built = EvolutionOptions::builder()
//!     .num_generations(50)
//!     .crossover_probability(0.9)
//!     .build();
//!
//! assert_eq!(built.get_num_generations(), 50);
//! assert!(built.validate().is_ok());
//! ```
//!
//! ### `LogLevel`
//!
//! - `Verbose`: Streams every logbook row, header first.
//! - `Minimal`: One short event per generation.
//! - `None`: Disables per-generation logging.

use crate::error::{GeneticError, Result};

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Verbose,
    Minimal,
    #[default]
    None,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionOptions {
    num_generations: usize,
    crossover_probability: f64,
    mutation_probability: f64,
    log_level: LogLevel,
}

impl EvolutionOptions {
    pub fn new(
        num_generations: usize,
        crossover_probability: f64,
        mutation_probability: f64,
        log_level: LogLevel,
    ) -> Self {
        Self {
            num_generations,
            crossover_probability,
            mutation_probability,
            log_level,
        }
    }

    /// Number of generations run after generation 0.
    pub fn get_num_generations(&self) -> usize {
        self.num_generations
    }

    pub fn get_crossover_probability(&self) -> f64 {
        self.crossover_probability
    }

    pub fn get_mutation_probability(&self) -> f64 {
        self.mutation_probability
    }

    pub fn get_log_level(&self) -> LogLevel {
        self.log_level
    }

    pub fn set_num_generations(&mut self, num_generations: usize) {
        self.num_generations = num_generations;
    }

    pub fn set_crossover_probability(&mut self, probability: f64) {
        self.crossover_probability = probability;
    }

    pub fn set_mutation_probability(&mut self, probability: f64) {
        self.mutation_probability = probability;
    }

    pub fn set_log_level(&mut self, log_level: LogLevel) {
        self.log_level = log_level;
    }

    /// Checks that both probabilities lie in `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("Crossover", self.crossover_probability),
            ("Mutation", self.mutation_probability),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(GeneticError::Configuration(format!(
                    "{} probability must be within [0, 1], got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }

    /// Returns a builder for creating an `EvolutionOptions` instance.
    pub fn builder() -> EvolutionOptionsBuilder {
        EvolutionOptionsBuilder::default()
    }
}

impl Default for EvolutionOptions {
    fn default() -> Self {
        Self {
            num_generations: 100,
            crossover_probability: 0.5,
            mutation_probability: 0.2,
            log_level: LogLevel::None,
        }
    }
}

/// Builder for `EvolutionOptions`.
///
/// Unset fields fall back to [`EvolutionOptions::default`].
#[derive(Debug, Clone, Default)]
pub struct EvolutionOptionsBuilder {
    num_generations: Option<usize>,
    crossover_probability: Option<f64>,
    mutation_probability: Option<f64>,
    log_level: Option<LogLevel>,
}

impl EvolutionOptionsBuilder {
    pub fn num_generations(mut self, value: usize) -> Self {
        self.num_generations = Some(value);
        self
    }

    pub fn crossover_probability(mut self, value: f64) -> Self {
        self.crossover_probability = Some(value);
        self
    }

    pub fn mutation_probability(mut self, value: f64) -> Self {
        self.mutation_probability = Some(value);
        self
    }

    pub fn log_level(mut self, value: LogLevel) -> Self {
        self.log_level = Some(value);
        self
    }

    pub fn build(self) -> EvolutionOptions {
        let defaults = EvolutionOptions::default();
        EvolutionOptions {
            num_generations: self.num_generations.unwrap_or(defaults.num_generations),
            crossover_probability: self
                .crossover_probability
                .unwrap_or(defaults.crossover_probability),
            mutation_probability: self
                .mutation_probability
                .unwrap_or(defaults.mutation_probability),
            log_level: self.log_level.unwrap_or(defaults.log_level),
        }
    }
}

//! # Error Types
//!
//! This module defines the error type shared by every part of the library.
//! Collaborator failures raised inside a generation are wrapped in
//! [`GeneticError::Generation`], which records the generation index and the
//! [`Stage`] that failed.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use elitega::error::{GeneticError, Result};
//!
//! fn some_function() -> Result<()> {
//!     Ok(())
//! }
//!
//! fn caller() {
//!     match some_function() {
//!         Ok(_) => println!("Success!"),
//!         Err(e) => println!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! Using the `OptionExt` trait to convert `Option` to `Result`:
//!
//! ```rust
//! use elitega::error::{GeneticError, OptionExt};
//!
//! fn find_best_candidate(candidates: &[i32]) -> elitega::error::Result<i32> {
//!     candidates.iter().min().cloned().ok_or_else_genetic(||
//!         GeneticError::EmptyPopulation
//!     )
//! }
//! ```

use std::fmt;

use thiserror::Error;

/// The step of a generation in which a failure occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Fitness evaluation of individuals with invalid fitness.
    Evaluation,
    /// Selection of the offspring pool.
    Selection,
    /// Crossover and mutation of the offspring pool.
    Variation,
    /// Updating the hall of fame.
    Archive,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Evaluation => "evaluation",
            Stage::Selection => "selection",
            Stage::Variation => "variation",
            Stage::Archive => "archive update",
        };
        f.write_str(name)
    }
}

/// Represents errors that can occur in the library.
#[derive(Error, Debug)]
pub enum GeneticError {
    /// Error that occurs when a variation (crossover/mutation) operation fails.
    #[error("Breeding error: {0}")]
    Breeding(String),

    /// Error that occurs when a selection operation fails.
    #[error("Selection error: {0}")]
    Selection(String),

    /// Error that occurs when an invalid configuration is provided.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error that occurs when an empty population is encountered.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,

    /// Error that occurs when a fitness calculation fails.
    #[error("Fitness calculation error: {0}")]
    FitnessCalculation(String),

    /// Error that occurs when an individual without a valid fitness is used
    /// where a ranked individual is required.
    #[error("Unevaluated individual: {0}")]
    UnevaluatedIndividual(String),

    /// Error that occurs when NaN values are encountered.
    #[error("Invalid numeric value: {0}")]
    InvalidNumericValue(String),

    /// A collaborator failure, tagged with the generation and stage it happened in.
    #[error("Generation {generation} failed during {stage}: {source}")]
    Generation {
        generation: usize,
        stage: Stage,
        #[source]
        source: Box<GeneticError>,
    },
}

impl GeneticError {
    /// Wraps this error with the generation and stage it occurred in.
    pub fn at(self, generation: usize, stage: Stage) -> Self {
        GeneticError::Generation {
            generation,
            stage,
            source: Box::new(self),
        }
    }

    /// Returns the stage of a [`GeneticError::Generation`] error.
    pub fn stage(&self) -> Option<Stage> {
        match self {
            GeneticError::Generation { stage, .. } => Some(*stage),
            _ => None,
        }
    }

    /// Returns the generation index of a [`GeneticError::Generation`] error.
    pub fn generation(&self) -> Option<usize> {
        match self {
            GeneticError::Generation { generation, .. } => Some(*generation),
            _ => None,
        }
    }
}

/// A specialized Result type for library operations.
///
/// ## Examples
///
/// ```rust
/// use elitega::error::Result;
///
/// fn may_fail() -> Result<i32> {
///     Ok(42)
/// }
/// ```
pub type Result<T> = std::result::Result<T, GeneticError>;

/// Extension trait for Option to convert to Result with a custom error.
pub trait OptionExt<T> {
    /// Converts an `Option<T>` to a `Result<T, GeneticError>` using
    /// a closure to generate the error.
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError,
    {
        self.ok_or_else(err_fn)
    }
}

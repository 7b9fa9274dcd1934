//! # Statistics
//!
//! A [`Statistics`] engine holds named reducers. Compiling a population runs every
//! reducer over the primary fitness component of the population's valid
//! individuals and collects the results by name.
//!
//! ```rust
//! use elitega::statistics::{self, Statistics};
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
//! let stats = Statistics::new()
//!     .register("min", statistics::min)
//!     .register("spread", |values: &[f64]| statistics::max(values) - statistics::min(values));
//!
//! let population = vec![
//!     Individual::with_fitness(Value(1), vec![1.0]),
//!     Individual::with_fitness(Value(4), vec![4.0]),
//! ];
//! let record = stats.compile(&population);
//!
//! assert_eq!(record["min"], 1.0);
//! assert_eq!(record["spread"], 3.0);
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::individual::Individual;
use crate::phenotype::Phenotype;

/// A reduction over a slice of fitness values.
pub type Reducer = Arc<dyn Fn(&[f64]) -> f64 + Send + Sync>;

/// Named reducers applied to a population's fitness values.
#[derive(Clone, Default)]
pub struct Statistics {
    reducers: Vec<(String, Reducer)>,
}

impl Statistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// The usual `avg`, `std`, `min` and `max` columns.
    pub fn standard() -> Self {
        Self::new()
            .register("avg", mean)
            .register("std", std_dev)
            .register("min", min)
            .register("max", max)
    }

    /// Adds a reducer under `name`. Registering an existing name replaces it.
    pub fn register<F>(mut self, name: impl Into<String>, reducer: F) -> Self
    where
        F: Fn(&[f64]) -> f64 + Send + Sync + 'static,
    {
        let name = name.into();
        let reducer: Reducer = Arc::new(reducer);
        match self.reducers.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = reducer,
            None => self.reducers.push((name, reducer)),
        }
        self
    }

    /// Registered names, in registration order.
    pub fn fields(&self) -> Vec<String> {
        self.reducers.iter().map(|(name, _)| name.clone()).collect()
    }

    /// Runs every reducer over the primary fitness of the valid individuals.
    pub fn compile<P: Phenotype>(&self, population: &[Individual<P>]) -> BTreeMap<String, f64> {
        let values: Vec<f64> = population
            .iter()
            .filter_map(|ind| ind.fitness().primary())
            .collect();

        self.reducers
            .iter()
            .map(|(name, reducer)| (name.clone(), reducer(&values)))
            .collect()
    }
}

impl fmt::Debug for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Statistics")
            .field("fields", &self.fields())
            .finish()
    }
}

/// Arithmetic mean; NaN for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation; NaN for an empty slice.
pub fn std_dev(values: &[f64]) -> f64 {
    let avg = mean(values);
    if avg.is_nan() {
        return f64::NAN;
    }
    let variance = values.iter().map(|v| (v - avg).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

/// Smallest value; NaN for an empty slice.
pub fn min(values: &[f64]) -> f64 {
    values.iter().copied().reduce(f64::min).unwrap_or(f64::NAN)
}

/// Largest value; NaN for an empty slice.
pub fn max(values: &[f64]) -> f64 {
    values.iter().copied().reduce(f64::max).unwrap_or(f64::NAN)
}

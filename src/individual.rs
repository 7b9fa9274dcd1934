//! # Individuals and Fitness
//!
//! An [`Individual`] pairs a genome with a [`Fitness`]. The fitness is *valid* when
//! it is up to date with the genome; any change to the genome clears it, and the
//! evolution loop re-evaluates exactly the individuals whose fitness is invalid.
//!
//! Fitness values are minimized. Multi-component fitnesses compare lexicographically.
//!
//! ```rust
//! use elitega::individual::Individual;
//! use elitega::phenotype::Phenotype;
//! use elitega::rng::RandomNumberGenerator;
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Value(i64);
//!
//! impl Phenotype for Value {
//!     fn crossover(&mut self, other: &Self) {
//!         self.0 = (self.0 + other.0) / 2;
//!     }
//!
//!     fn mutate(&mut self, _rng: &mut RandomNumberGenerator) {
//!         self.0 += 1;
//!     }
//! }
//!
//! let mut ind = Individual::with_fitness(Value(3), vec![3.0]);
//! assert!(ind.fitness().is_valid());
//!
//! ind.genome_mut().0 = 4;
//! assert!(!ind.fitness().is_valid());
//! ```

use std::cmp::Ordering;
use std::mem;

use crate::phenotype::Phenotype;

/// The fitness of an individual: one or more components, or nothing when invalid.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Fitness {
    values: Option<Vec<f64>>,
}

impl Fitness {
    /// An invalid fitness.
    pub fn invalid() -> Self {
        Self { values: None }
    }

    /// A valid fitness with the given components.
    pub fn new(values: Vec<f64>) -> Self {
        Self {
            values: Some(values),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.values.is_some()
    }

    /// All components, if the fitness is valid.
    pub fn values(&self) -> Option<&[f64]> {
        self.values.as_deref()
    }

    /// The first component, if the fitness is valid.
    pub fn primary(&self) -> Option<f64> {
        self.values.as_ref().and_then(|v| v.first().copied())
    }

    pub fn set_values(&mut self, values: Vec<f64>) {
        self.values = Some(values);
    }

    pub fn invalidate(&mut self) {
        self.values = None;
    }

    /// Lexicographic comparison where `Less` means `self` is better.
    ///
    /// Invalid fitnesses order after valid ones.
    pub fn compare(&self, other: &Self) -> Ordering {
        match (&self.values, &other.values) {
            (Some(a), Some(b)) => a
                .iter()
                .zip(b.iter())
                .map(|(x, y)| x.total_cmp(y))
                .find(|ord| *ord != Ordering::Equal)
                .unwrap_or_else(|| a.len().cmp(&b.len())),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }

    /// Returns `true` if `self` strictly outranks `other`.
    pub fn is_better_than(&self, other: &Self) -> bool {
        self.is_valid() && self.compare(other) == Ordering::Less
    }
}

/// A genome together with its fitness.
#[derive(Debug, Clone, PartialEq)]
pub struct Individual<P: Phenotype> {
    genome: P,
    fitness: Fitness,
}

impl<P: Phenotype> Individual<P> {
    /// Creates an individual whose fitness still has to be evaluated.
    pub fn new(genome: P) -> Self {
        Self {
            genome,
            fitness: Fitness::invalid(),
        }
    }

    /// Creates an individual with an already known fitness.
    pub fn with_fitness(genome: P, values: Vec<f64>) -> Self {
        Self {
            genome,
            fitness: Fitness::new(values),
        }
    }

    pub fn genome(&self) -> &P {
        &self.genome
    }

    /// Mutable access to the genome. Clears the fitness.
    pub fn genome_mut(&mut self) -> &mut P {
        self.fitness.invalidate();
        &mut self.genome
    }

    pub fn into_genome(self) -> P {
        self.genome
    }

    pub fn fitness(&self) -> &Fitness {
        &self.fitness
    }

    pub fn set_fitness(&mut self, values: Vec<f64>) {
        self.fitness.set_values(values);
    }

    pub fn invalidate(&mut self) {
        self.fitness.invalidate();
    }

    /// Estimated bytes occupied by this individual, heap included.
    pub fn footprint(&self) -> usize {
        let fitness_heap = self
            .fitness
            .values
            .as_ref()
            .map_or(0, |v| v.capacity() * mem::size_of::<f64>());
        mem::size_of::<Self>() + self.genome.heap_size() + fitness_heap
    }
}

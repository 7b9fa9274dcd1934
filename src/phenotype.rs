//! # Phenotype Trait
//!
//! The `Phenotype` trait defines the interface for genome payloads carried by
//! [`Individual`](crate::individual::Individual)s. It provides the crossover and
//! mutation hooks used by variation operators.
//!
//! Phenotypes are plain values: operators clone them before altering them, so two
//! offspring picked from the same parent never share genome storage.
//!
//! ## Example
//!
//! ```rust
//! use elitega::phenotype::Phenotype;
//! use elitega::rng::RandomNumberGenerator;
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct BitString {
//!     bits: Vec<bool>,
//! }
//!
//! impl Phenotype for BitString {
//!     fn crossover(&mut self, other: &Self) {
//!         let cut = self.bits.len() / 2;
//!         self.bits[cut..].copy_from_slice(&other.bits[cut..]);
//!     }
//!
//!     fn mutate(&mut self, rng: &mut RandomNumberGenerator) {
//!         let i = rng.index(self.bits.len());
//!         self.bits[i] = !self.bits[i];
//!     }
//!
//!     fn heap_size(&self) -> usize {
//!         self.bits.capacity()
//!     }
//! }
//! ```

use std::fmt::Debug;

use crate::rng::RandomNumberGenerator;

/// Trait for genome types evolved by the library.
///
/// Types implementing this trait must also implement `Clone`, `Debug`, `Send`, and `Sync`
/// so that populations can be copied between generations and evaluated in parallel.
pub trait Phenotype: Clone + Debug + Send + Sync {
    /// Combines the genetic material of `other` into `self`.
    ///
    /// Only `self` is altered. Operators that produce two children call this once
    /// on each child with the other parent's original genome.
    fn crossover(&mut self, other: &Self);

    /// Introduces random changes into the genome.
    fn mutate(&mut self, rng: &mut RandomNumberGenerator);

    /// Bytes owned on the heap by this genome.
    ///
    /// Only used for the diagnostic population footprint reported at the end of a
    /// run. The default reports no heap allocation.
    fn heap_size(&self) -> usize {
        0
    }
}

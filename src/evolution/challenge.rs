use crate::{error::Result, phenotype::Phenotype};

/// A fitness function.
///
/// `score` must be a pure function of the genome: the evolution loop caches its
/// result on the individual until the genome changes. The returned components are
/// minimized, compared lexicographically.
pub trait Challenge<Pheno: Phenotype>: Send + Sync {
    /// Scores a genome.
    ///
    /// # Errors
    ///
    /// Implementations report failures as
    /// [`GeneticError::FitnessCalculation`](crate::error::GeneticError::FitnessCalculation).
    fn score(&self, phenotype: &Pheno) -> Result<Vec<f64>>;
}

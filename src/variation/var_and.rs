//! # VarAnd
//!
//! Crossover *and* mutation: consecutive slots are paired and mated with the
//! crossover probability, then every slot is mutated with the mutation
//! probability. An individual may therefore undergo both operations, either one,
//! or none, in which case it keeps its fitness.
use super::VariationStrategy;
use crate::{
    error::Result, individual::Individual, phenotype::Phenotype, rng::RandomNumberGenerator,
};

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default)]
pub struct VarAnd;

impl VarAnd {
    pub fn new() -> Self {
        Self
    }
}

impl<Pheno> VariationStrategy<Pheno> for VarAnd
where
    Pheno: Phenotype,
{
    fn vary(
        &self,
        mut offspring: Vec<Individual<Pheno>>,
        crossover_probability: f64,
        mutation_probability: f64,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Individual<Pheno>>> {
        for i in (1..offspring.len()).step_by(2) {
            if rng.probability() < crossover_probability {
                let (left, right) = offspring.split_at_mut(i);
                let first = &mut left[i - 1];
                let second = &mut right[0];

                let first_parent = first.genome().clone();
                first.genome_mut().crossover(second.genome());
                second.genome_mut().crossover(&first_parent);
            }
        }

        for child in offspring.iter_mut() {
            if rng.probability() < mutation_probability {
                child.genome_mut().mutate(rng);
            }
        }

        Ok(offspring)
    }
}

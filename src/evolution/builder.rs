use std::marker::PhantomData;

use crate::{
    error::{GeneticError, Result},
    phenotype::Phenotype,
    selection::SelectionStrategy,
    statistics::Statistics,
    variation::VariationStrategy,
};

use super::{Challenge, EvaluationMap, EvolutionLauncher, SequentialMap};

pub struct EvolutionLauncherBuilder<P, S, V, C, M = SequentialMap>
where
    P: Phenotype,
{
    selection_strategy: Option<S>,
    variation_strategy: Option<V>,
    challenge: Option<C>,
    evaluator: M,
    statistics: Option<Statistics>,
    _marker: PhantomData<P>,
}

impl<P, S, V, C> EvolutionLauncherBuilder<P, S, V, C, SequentialMap>
where
    P: Phenotype,
{
    pub fn new() -> Self {
        Self {
            selection_strategy: None,
            variation_strategy: None,
            challenge: None,
            evaluator: SequentialMap,
            statistics: None,
            _marker: PhantomData,
        }
    }
}

impl<P, S, V, C, M> EvolutionLauncherBuilder<P, S, V, C, M>
where
    P: Phenotype,
    S: SelectionStrategy<P>,
    V: VariationStrategy<P>,
    C: Challenge<P>,
    M: EvaluationMap,
{
    pub fn with_selection_strategy(mut self, selection_strategy: S) -> Self {
        self.selection_strategy = Some(selection_strategy);
        self
    }

    pub fn with_variation_strategy(mut self, variation_strategy: V) -> Self {
        self.variation_strategy = Some(variation_strategy);
        self
    }

    pub fn with_challenge(mut self, challenge: C) -> Self {
        self.challenge = Some(challenge);
        self
    }

    pub fn with_statistics(mut self, statistics: Statistics) -> Self {
        self.statistics = Some(statistics);
        self
    }

    pub fn with_evaluator<N: EvaluationMap>(
        self,
        evaluator: N,
    ) -> EvolutionLauncherBuilder<P, S, V, C, N> {
        EvolutionLauncherBuilder {
            selection_strategy: self.selection_strategy,
            variation_strategy: self.variation_strategy,
            challenge: self.challenge,
            evaluator,
            statistics: self.statistics,
            _marker: PhantomData,
        }
    }

    pub fn build(self) -> Result<EvolutionLauncher<P, S, V, C, M>> {
        let selection_strategy = self.selection_strategy.ok_or_else(|| {
            GeneticError::Configuration("Selection strategy not specified".to_string())
        })?;

        let variation_strategy = self.variation_strategy.ok_or_else(|| {
            GeneticError::Configuration("Variation strategy not specified".to_string())
        })?;

        let challenge = self
            .challenge
            .ok_or_else(|| GeneticError::Configuration("Challenge not specified".to_string()))?;

        let launcher = EvolutionLauncher::new(selection_strategy, variation_strategy, challenge)
            .with_evaluator(self.evaluator);

        Ok(match self.statistics {
            Some(statistics) => launcher.with_statistics(statistics),
            None => launcher,
        })
    }
}

impl<P, S, V, C> Default for EvolutionLauncherBuilder<P, S, V, C, SequentialMap>
where
    P: Phenotype,
{
    fn default() -> Self {
        Self::new()
    }
}

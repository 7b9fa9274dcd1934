use std::collections::BTreeMap;
use std::marker::PhantomData;
use std::time::{Duration, Instant};

use tracing::{debug, info, trace};

use super::{
    builder::EvolutionLauncherBuilder,
    challenge::Challenge,
    evaluator::{EvaluationMap, SequentialMap},
    observer::{GenerationObserver, NoopObserver},
    options::{EvolutionOptions, LogLevel},
};
use crate::{
    error::{GeneticError, OptionExt, Result, Stage},
    hall_of_fame::HallOfFame,
    individual::Individual,
    logbook::{GenerationRecord, Logbook},
    phenotype::Phenotype,
    rng::RandomNumberGenerator,
    selection::SelectionStrategy,
    statistics::Statistics,
    variation::VariationStrategy,
};

/// Everything a finished run hands back.
#[derive(Debug, Clone)]
pub struct EvolutionResult<Pheno: Phenotype> {
    /// The population of the last generation.
    pub population: Vec<Individual<Pheno>>,
    /// One record per generation, 0 through `num_generations`.
    pub logbook: Logbook,
    /// Wall-clock time of each generation, in logbook order.
    pub execution_times: Vec<Duration>,
    /// Estimated bytes held by the initial population.
    pub population_footprint: usize,
    /// Earliest generation whose population contained the best fitness seen.
    pub first_gen_best: usize,
    /// Lowest primary fitness seen in any generation.
    pub best_fitness: f64,
}

/// Runs the generational loop with hall-of-fame elitism.
///
/// Each generation selects `population_size - elite_count` individuals, varies
/// them, evaluates the ones whose fitness was invalidated and then appends the
/// hall of fame's members unchanged, so the population size never changes and
/// the best individuals found so far are never lost.
#[derive(Debug, Clone)]
pub struct EvolutionLauncher<Pheno, Sel, Var, Chall, Map = SequentialMap>
where
    Pheno: Phenotype,
{
    selection: Sel,
    variation: Var,
    challenge: Chall,
    evaluator: Map,
    statistics: Option<Statistics>,
    _marker: PhantomData<Pheno>,
}

impl<Pheno, Sel, Var, Chall> EvolutionLauncher<Pheno, Sel, Var, Chall, SequentialMap>
where
    Pheno: Phenotype,
{
    /// Creates a launcher that evaluates sequentially and records no statistics.
    ///
    /// # Arguments
    ///
    /// * `selection` - Draws the offspring pool from the current population.
    /// * `variation` - Applies crossover and mutation to the offspring pool.
    /// * `challenge` - The fitness function.
    pub fn new(selection: Sel, variation: Var, challenge: Chall) -> Self {
        Self {
            selection,
            variation,
            challenge,
            evaluator: SequentialMap,
            statistics: None,
            _marker: PhantomData,
        }
    }

    pub fn builder() -> EvolutionLauncherBuilder<Pheno, Sel, Var, Chall> {
        EvolutionLauncherBuilder::new()
    }
}

impl<Pheno, Sel, Var, Chall, Map> EvolutionLauncher<Pheno, Sel, Var, Chall, Map>
where
    Pheno: Phenotype,
{
    /// Replaces the evaluation map, e.g. with a [`ParallelMap`](super::ParallelMap).
    pub fn with_evaluator<Next>(
        self,
        evaluator: Next,
    ) -> EvolutionLauncher<Pheno, Sel, Var, Chall, Next> {
        EvolutionLauncher {
            selection: self.selection,
            variation: self.variation,
            challenge: self.challenge,
            evaluator,
            statistics: self.statistics,
            _marker: PhantomData,
        }
    }

    /// Compiles `statistics` into every generation record.
    pub fn with_statistics(mut self, statistics: Statistics) -> Self {
        self.statistics = Some(statistics);
        self
    }

    pub fn statistics(&self) -> Option<&Statistics> {
        self.statistics.as_ref()
    }
}

impl<Pheno, Sel, Var, Chall, Map> EvolutionLauncher<Pheno, Sel, Var, Chall, Map>
where
    Pheno: Phenotype + PartialEq,
    Sel: SelectionStrategy<Pheno>,
    Var: VariationStrategy<Pheno>,
    Chall: Challenge<Pheno>,
    Map: EvaluationMap,
{
    /// Evolves `population` for `options.get_num_generations()` generations.
    ///
    /// # Arguments
    ///
    /// * `options` - Generation count, operator probabilities and log level.
    /// * `population` - The initial population. Individuals with a valid fitness
    ///   are not evaluated again.
    /// * `hall_of_fame` - The elite archive. It is required; it is updated in place
    ///   and left holding the best individuals of the whole run.
    /// * `rng` - Randomness for selection and variation.
    ///
    /// # Errors
    ///
    /// Configuration errors (missing hall of fame, empty population, invalid
    /// probabilities) are returned before any evaluation. Failures of the
    /// selection, variation or fitness collaborators abort the run and are
    /// returned as [`GeneticError::Generation`] carrying the generation and stage.
    pub fn evolve(
        &self,
        options: &EvolutionOptions,
        population: Vec<Individual<Pheno>>,
        hall_of_fame: Option<&mut HallOfFame<Pheno>>,
        rng: &mut RandomNumberGenerator,
    ) -> Result<EvolutionResult<Pheno>> {
        self.evolve_with_observer(options, population, hall_of_fame, rng, &mut NoopObserver)
    }

    /// Same as [`evolve`](Self::evolve), calling `observer` after each
    /// generation's record is appended.
    pub fn evolve_with_observer<Obs>(
        &self,
        options: &EvolutionOptions,
        mut population: Vec<Individual<Pheno>>,
        hall_of_fame: Option<&mut HallOfFame<Pheno>>,
        rng: &mut RandomNumberGenerator,
        observer: &mut Obs,
    ) -> Result<EvolutionResult<Pheno>>
    where
        Obs: GenerationObserver<Pheno> + ?Sized,
    {
        let hall_of_fame = hall_of_fame.ok_or_else_genetic(|| {
            GeneticError::Configuration("A hall of fame is required for elitism".to_string())
        })?;
        options.validate()?;
        if population.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        let population_size = population.len();
        let population_footprint = population.iter().map(Individual::footprint).sum();
        let mut logbook = Logbook::new(
            self.statistics
                .as_ref()
                .map(Statistics::fields)
                .unwrap_or_default(),
        );
        let mut execution_times = Vec::with_capacity(options.get_num_generations() + 1);

        // Generation 0
        let started = Instant::now();
        let evaluations = self.evaluate_invalid(&mut population, 0)?;
        hall_of_fame
            .update(&population)
            .map_err(|e| e.at(0, Stage::Archive))?;
        // a reused archive may hold more members than the population
        let elite_count = hall_of_fame.len().min(population_size);
        let elapsed = started.elapsed();
        execution_times.push(elapsed);

        debug!(population_size, elite_count, "initial population evaluated");

        let mut best_fitness = Self::lowest_fitness(&population)?;
        let mut first_gen_best = 0;

        let record = GenerationRecord::new(0, evaluations, elapsed, self.compile(&population));
        self.publish(options, &mut logbook, record, &population, observer);

        for generation in 1..=options.get_num_generations() {
            let started = Instant::now();

            let num_to_select = population_size.saturating_sub(elite_count);
            let selected = self
                .selection
                .select(&population, num_to_select, rng)
                .map_err(|e| e.at(generation, Stage::Selection))?;
            if selected.len() != num_to_select {
                return Err(GeneticError::Selection(format!(
                    "Selected {} individuals, expected {}",
                    selected.len(),
                    num_to_select
                ))
                .at(generation, Stage::Selection));
            }

            let mut offspring = self
                .variation
                .vary(
                    selected,
                    options.get_crossover_probability(),
                    options.get_mutation_probability(),
                    rng,
                )
                .map_err(|e| e.at(generation, Stage::Variation))?;
            if offspring.len() != num_to_select {
                return Err(GeneticError::Breeding(format!(
                    "Variation returned {} individuals, expected {}",
                    offspring.len(),
                    num_to_select
                ))
                .at(generation, Stage::Variation));
            }

            let evaluations = self.evaluate_invalid(&mut offspring, generation)?;

            // elites bypass selection and variation
            offspring.extend(hall_of_fame.items().iter().take(elite_count).cloned());
            hall_of_fame
                .update(&offspring)
                .map_err(|e| e.at(generation, Stage::Archive))?;
            population = offspring;

            let current_best = Self::lowest_fitness(&population)?;
            if current_best < best_fitness {
                best_fitness = current_best;
                first_gen_best = generation;
            }

            let statistics = self.compile(&population);
            let elapsed = started.elapsed();
            execution_times.push(elapsed);

            trace!(generation, current_best, best_fitness, "generation replaced");

            let record = GenerationRecord::new(generation, evaluations, elapsed, statistics);
            self.publish(options, &mut logbook, record, &population, observer);
        }

        debug!(first_gen_best, best_fitness, "evolution finished");

        Ok(EvolutionResult {
            population,
            logbook,
            execution_times,
            population_footprint,
            first_gen_best,
            best_fitness,
        })
    }

    /// Evaluates every individual with an invalid fitness and returns how many
    /// were evaluated.
    fn evaluate_invalid(
        &self,
        individuals: &mut [Individual<Pheno>],
        generation: usize,
    ) -> Result<usize> {
        let invalid: Vec<usize> = individuals
            .iter()
            .enumerate()
            .filter(|(_, ind)| !ind.fitness().is_valid())
            .map(|(i, _)| i)
            .collect();

        if invalid.is_empty() {
            return Ok(0);
        }

        let fitnesses = {
            let genomes: Vec<&Pheno> =
                invalid.iter().map(|&i| individuals[i].genome()).collect();
            self.evaluator.map(&self.challenge, &genomes)
        }
        .map_err(|e| e.at(generation, Stage::Evaluation))?;

        if fitnesses.len() != invalid.len() {
            return Err(GeneticError::FitnessCalculation(format!(
                "Evaluator returned {} results for {} individuals",
                fitnesses.len(),
                invalid.len()
            ))
            .at(generation, Stage::Evaluation));
        }

        for (&idx, values) in invalid.iter().zip(fitnesses) {
            if values.is_empty() {
                return Err(GeneticError::FitnessCalculation(format!(
                    "Empty fitness returned for individual {}",
                    idx
                ))
                .at(generation, Stage::Evaluation));
            }
            if values.iter().any(|v| v.is_nan()) {
                return Err(GeneticError::InvalidNumericValue(format!(
                    "NaN fitness returned for individual {}",
                    idx
                ))
                .at(generation, Stage::Evaluation));
            }
            individuals[idx].set_fitness(values);
        }

        trace!(generation, evaluations = invalid.len(), "evaluated invalid individuals");
        Ok(invalid.len())
    }

    fn lowest_fitness(population: &[Individual<Pheno>]) -> Result<f64> {
        population
            .iter()
            .filter_map(|ind| ind.fitness().primary())
            .reduce(f64::min)
            .ok_or_else_genetic(|| {
                GeneticError::UnevaluatedIndividual(
                    "Population has no individual with a valid fitness".to_string(),
                )
            })
    }

    fn compile(&self, population: &[Individual<Pheno>]) -> BTreeMap<String, f64> {
        self.statistics
            .as_ref()
            .map(|stats| stats.compile(population))
            .unwrap_or_default()
    }

    /// Appends the record, emits it at the configured log level and notifies the observer.
    fn publish<Obs>(
        &self,
        options: &EvolutionOptions,
        logbook: &mut Logbook,
        record: GenerationRecord,
        population: &[Individual<Pheno>],
        observer: &mut Obs,
    ) where
        Obs: GenerationObserver<Pheno> + ?Sized,
    {
        logbook.record(record);

        match options.get_log_level() {
            LogLevel::Verbose => {
                for line in logbook.stream().lines() {
                    info!("{}", line);
                }
            }
            LogLevel::Minimal => {
                if let Some(record) = logbook.last() {
                    info!(
                        generation = record.generation,
                        evaluations = record.evaluations,
                        seconds = record.duration_seconds(),
                        "generation complete"
                    );
                }
            }
            LogLevel::None => {}
        }

        if let Some(record) = logbook.last() {
            observer.on_generation(record, population);
        }
    }
}

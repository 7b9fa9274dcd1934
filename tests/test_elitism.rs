use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use elitega::{
    error::Result,
    evolution::{
        Challenge, EvolutionLauncher, EvolutionOptions, GenerationObserver, LogLevel, ParallelMap,
    },
    hall_of_fame::HallOfFame,
    individual::Individual,
    logbook::GenerationRecord,
    phenotype::Phenotype,
    rng::RandomNumberGenerator,
    selection::{ElitistSelection, RandomSelection, TournamentSelection},
    statistics::Statistics,
    variation::VarAnd,
};

#[derive(Clone, Debug, PartialEq)]
struct Number {
    value: i64,
}

impl Number {
    fn new(value: i64) -> Self {
        Self { value }
    }
}

impl Phenotype for Number {
    fn crossover(&mut self, other: &Self) {
        self.value = (self.value + other.value) / 2;
    }

    fn mutate(&mut self, rng: &mut RandomNumberGenerator) {
        self.value += rng.index(11) as i64 - 5;
    }
}

/// Fitness is the genome value itself; counts every call.
#[derive(Default)]
struct CountingIdentity {
    calls: Arc<AtomicUsize>,
}

impl Challenge<Number> for CountingIdentity {
    fn score(&self, phenotype: &Number) -> Result<Vec<f64>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(vec![phenotype.value as f64])
    }
}

fn random_population(size: usize, seed: u64) -> Vec<Individual<Number>> {
    let mut rng = RandomNumberGenerator::from_seed(seed);
    (0..size)
        .map(|_| Individual::new(Number::new(rng.index(101) as i64)))
        .collect()
}

fn distinct_population(size: usize) -> Vec<Individual<Number>> {
    (0..size as i64)
        .map(|i| Individual::new(Number::new(100 - 7 * i)))
        .collect()
}

/// Checks the per-generation invariants from the outside.
struct InvariantObserver {
    initial_size: usize,
    shadow: HallOfFame<Number>,
    calls: Arc<AtomicUsize>,
    last_calls: usize,
    sizes: Vec<usize>,
    evaluation_calls: Vec<usize>,
    records: Vec<GenerationRecord>,
}

impl InvariantObserver {
    fn new(initial_size: usize, capacity: usize, calls: Arc<AtomicUsize>) -> Self {
        Self {
            initial_size,
            shadow: HallOfFame::new(capacity).unwrap(),
            calls,
            last_calls: 0,
            sizes: Vec::new(),
            evaluation_calls: Vec::new(),
            records: Vec::new(),
        }
    }
}

impl GenerationObserver<Number> for InvariantObserver {
    fn on_generation(&mut self, record: &GenerationRecord, population: &[Individual<Number>]) {
        assert_eq!(population.len(), self.initial_size);
        assert!(population.iter().all(|ind| ind.fitness().is_valid()));

        if record.generation > 0 {
            for elite in self.shadow.items() {
                assert!(
                    population.contains(elite),
                    "elite {:?} missing from generation {}",
                    elite,
                    record.generation
                );
            }
        }
        self.shadow.update(population).unwrap();

        let calls = self.calls.load(Ordering::SeqCst);
        self.evaluation_calls.push(calls - self.last_calls);
        self.last_calls = calls;

        self.sizes.push(population.len());
        self.records.push(record.clone());
    }
}

#[test]
fn test_end_to_end_identity_variation() {
    let population = random_population(10, 2024);
    let global_min = population
        .iter()
        .map(|ind| ind.genome().value)
        .min()
        .unwrap() as f64;

    let launcher = EvolutionLauncher::new(
        ElitistSelection::new(),
        VarAnd::new(),
        CountingIdentity::default(),
    )
    .with_statistics(Statistics::standard());
    let options = EvolutionOptions::new(3, 0.0, 0.0, LogLevel::None);
    let mut hall_of_fame = HallOfFame::new(2).unwrap();
    let mut rng = RandomNumberGenerator::from_seed(1);

    let result = launcher
        .evolve(&options, population, Some(&mut hall_of_fame), &mut rng)
        .unwrap();

    assert_eq!(result.logbook.len(), 4);
    assert_eq!(result.logbook.select("gen"), vec![0.0, 1.0, 2.0, 3.0]);
    assert_eq!(result.population.len(), 10);
    assert_eq!(result.execution_times.len(), 4);
    assert_eq!(result.best_fitness, global_min);
    assert_eq!(result.first_gen_best, 0);
    assert!(result.population_footprint > 0);

    // only generation 0 needs evaluating under identity variation
    assert_eq!(result.logbook.select("nevals"), vec![10.0, 0.0, 0.0, 0.0]);
    assert!(result
        .logbook
        .select("min")
        .iter()
        .all(|&min| min == global_min));
    assert_eq!(
        hall_of_fame.best().map(|ind| ind.genome().value as f64),
        Some(global_min)
    );
}

#[test]
fn test_invariants_hold_under_variation() {
    let calls = Arc::new(AtomicUsize::new(0));
    let challenge = CountingIdentity {
        calls: Arc::clone(&calls),
    };
    let launcher = EvolutionLauncher::new(
        TournamentSelection::new(2).unwrap(),
        VarAnd::new(),
        challenge,
    )
    .with_statistics(Statistics::standard());

    let mut population = distinct_population(12);
    // pre-evaluated individuals are not scored again in generation 0
    for ind in population.iter_mut().take(4) {
        let value = ind.genome().value as f64;
        ind.set_fitness(vec![value]);
    }

    let options = EvolutionOptions::new(15, 0.6, 0.4, LogLevel::None);
    let mut hall_of_fame = HallOfFame::new(3).unwrap();
    let mut observer = InvariantObserver::new(12, 3, Arc::clone(&calls));
    let mut rng = RandomNumberGenerator::from_seed(99);

    let result = launcher
        .evolve_with_observer(
            &options,
            population,
            Some(&mut hall_of_fame),
            &mut rng,
            &mut observer,
        )
        .unwrap();

    assert_eq!(observer.sizes, vec![12; 16]);
    assert_eq!(observer.records, result.logbook.records());

    // recorded evaluations match real calls
    let recorded: Vec<usize> = result.logbook.iter().map(|r| r.evaluations).collect();
    assert_eq!(recorded, observer.evaluation_calls);
    assert_eq!(recorded[0], 8);
    assert!(recorded[1..].iter().all(|&n| n <= 12 - 3));

    // best fitness never gets worse and first_gen_best is its first occurrence
    let mins = result.logbook.select("min");
    assert!(mins.windows(2).all(|w| w[1] <= w[0]));
    let expected_first = mins
        .iter()
        .position(|&m| m == result.best_fitness)
        .unwrap();
    assert_eq!(result.first_gen_best, expected_first);
    assert_eq!(*mins.last().unwrap(), result.best_fitness);
}

#[test]
fn test_ties_do_not_advance_first_gen_best() {
    // generation 0 already holds the best value; mutation cannot go below it
    #[derive(Clone, Debug, PartialEq)]
    struct Floor(u32);

    impl Phenotype for Floor {
        fn crossover(&mut self, _other: &Self) {}

        fn mutate(&mut self, rng: &mut RandomNumberGenerator) {
            self.0 = rng.index(5) as u32;
        }
    }

    struct Value;

    impl Challenge<Floor> for Value {
        fn score(&self, phenotype: &Floor) -> Result<Vec<f64>> {
            Ok(vec![phenotype.0 as f64])
        }
    }

    let population: Vec<_> = (0..8).map(|i| Individual::new(Floor(i))).collect();
    let launcher = EvolutionLauncher::new(RandomSelection, VarAnd::new(), Value);
    let options = EvolutionOptions::new(10, 0.0, 1.0, LogLevel::None);
    let mut hall_of_fame = HallOfFame::new(1).unwrap();
    let mut rng = RandomNumberGenerator::from_seed(5);

    let result = launcher
        .evolve(&options, population, Some(&mut hall_of_fame), &mut rng)
        .unwrap();

    assert_eq!(result.best_fitness, 0.0);
    assert_eq!(result.first_gen_best, 0);
}

#[test]
fn test_zero_generations_runs_only_generation_zero() {
    let launcher = EvolutionLauncher::new(
        ElitistSelection::new(),
        VarAnd::new(),
        CountingIdentity::default(),
    );
    let options = EvolutionOptions::new(0, 0.5, 0.5, LogLevel::None);
    let mut hall_of_fame = HallOfFame::new(2).unwrap();
    let mut rng = RandomNumberGenerator::from_seed(3);

    let result = launcher
        .evolve(&options, distinct_population(5), Some(&mut hall_of_fame), &mut rng)
        .unwrap();

    assert_eq!(result.logbook.len(), 1);
    assert_eq!(result.first_gen_best, 0);
    assert_eq!(result.best_fitness, 72.0);
    // no statistics engine, no statistic columns
    assert!(result.logbook.records()[0].statistics.is_empty());
    assert_eq!(result.logbook.header().len(), 3);
}

/// Records the population size of every generation.
#[derive(Default)]
struct SizeObserver {
    sizes: Vec<usize>,
}

impl GenerationObserver<Number> for SizeObserver {
    fn on_generation(&mut self, _record: &GenerationRecord, population: &[Individual<Number>]) {
        self.sizes.push(population.len());
    }
}

#[test]
fn test_reused_archive_larger_than_population_keeps_size() {
    let launcher = EvolutionLauncher::new(
        TournamentSelection::default(),
        VarAnd::new(),
        CountingIdentity::default(),
    );
    let options = EvolutionOptions::new(4, 0.5, 0.5, LogLevel::None);
    let mut hall_of_fame = HallOfFame::new(5).unwrap();

    launcher
        .evolve(
            &options,
            distinct_population(8),
            Some(&mut hall_of_fame),
            &mut RandomNumberGenerator::from_seed(1),
        )
        .unwrap();
    assert_eq!(hall_of_fame.len(), 5);

    let mut observer = SizeObserver::default();
    let result = launcher
        .evolve_with_observer(
            &options,
            random_population(3, 2),
            Some(&mut hall_of_fame),
            &mut RandomNumberGenerator::from_seed(2),
            &mut observer,
        )
        .unwrap();

    assert_eq!(result.population.len(), 3);
    assert_eq!(observer.sizes, vec![3; 5]);
    // every slot is taken by an elite, so nothing is bred or evaluated
    assert!(result.logbook.select("nevals")[1..].iter().all(|&n| n == 0.0));
    assert_eq!(hall_of_fame.len(), 5);
}

#[test]
fn test_archive_growth_does_not_change_population_size() {
    // identical genomes leave a single distinct member in the archive after generation 0
    let population: Vec<_> = (0..6).map(|_| Individual::new(Number::new(50))).collect();
    let launcher = EvolutionLauncher::new(
        RandomSelection,
        VarAnd::new(),
        CountingIdentity::default(),
    );
    let options = EvolutionOptions::new(10, 0.0, 1.0, LogLevel::None);
    let mut hall_of_fame = HallOfFame::new(3).unwrap();
    let mut observer = SizeObserver::default();

    let result = launcher
        .evolve_with_observer(
            &options,
            population,
            Some(&mut hall_of_fame),
            &mut RandomNumberGenerator::from_seed(11),
            &mut observer,
        )
        .unwrap();

    assert_eq!(observer.sizes, vec![6; 11]);
    assert_eq!(result.population.len(), 6);
    // mutation filled the archive beyond the single elite injected each generation
    assert_eq!(hall_of_fame.len(), 3);
    // one elite slot, five bred slots that were all mutated
    assert!(result.logbook.select("nevals")[1..].iter().all(|&n| n == 5.0));
}

#[test]
fn test_parallel_evaluation_matches_sequential() {
    let options = EvolutionOptions::new(8, 0.7, 0.3, LogLevel::None);

    let sequential = EvolutionLauncher::new(
        TournamentSelection::default(),
        VarAnd::new(),
        CountingIdentity::default(),
    );
    let parallel = EvolutionLauncher::new(
        TournamentSelection::default(),
        VarAnd::new(),
        CountingIdentity::default(),
    )
    .with_evaluator(ParallelMap::with_threads(3, 0).unwrap());

    let mut hof_a = HallOfFame::new(2).unwrap();
    let mut hof_b = HallOfFame::new(2).unwrap();
    let a = sequential
        .evolve(
            &options,
            random_population(30, 8),
            Some(&mut hof_a),
            &mut RandomNumberGenerator::from_seed(17),
        )
        .unwrap();
    let b = parallel
        .evolve(
            &options,
            random_population(30, 8),
            Some(&mut hof_b),
            &mut RandomNumberGenerator::from_seed(17),
        )
        .unwrap();

    assert_eq!(a.population, b.population);
    assert_eq!(a.logbook.select("nevals"), b.logbook.select("nevals"));
    assert_eq!(a.first_gen_best, b.first_gen_best);
    assert_eq!(hof_a.items(), hof_b.items());
}

#[test]
fn test_verbose_logging_streams_logbook() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();

    let launcher = EvolutionLauncher::builder()
        .with_selection_strategy(TournamentSelection::default())
        .with_variation_strategy(VarAnd::new())
        .with_challenge(CountingIdentity::default())
        .with_statistics(Statistics::standard())
        .build()
        .unwrap();

    let mut rng = RandomNumberGenerator::from_seed(4);
    for level in [LogLevel::Verbose, LogLevel::Minimal] {
        let options = EvolutionOptions::new(2, 0.5, 0.5, level);
        let mut hall_of_fame = HallOfFame::new(1).unwrap();
        let result = launcher
            .evolve(&options, random_population(6, 1), Some(&mut hall_of_fame), &mut rng)
            .unwrap();
        assert_eq!(result.logbook.len(), 3);
    }
}

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use elitega::{
    error::Result,
    evolution::{Challenge, EvolutionLauncher, EvolutionOptions, LogLevel, ParallelMap},
    hall_of_fame::HallOfFame,
    individual::Individual,
    phenotype::Phenotype,
    rng::RandomNumberGenerator,
    selection::TournamentSelection,
    variation::VarAnd,
};

#[derive(Clone, Debug, PartialEq)]
struct Vector {
    coords: Vec<f64>,
}

impl Phenotype for Vector {
    fn crossover(&mut self, other: &Self) {
        let half = self.coords.len() / 2;
        self.coords[half..].copy_from_slice(&other.coords[half..]);
    }

    fn mutate(&mut self, rng: &mut RandomNumberGenerator) {
        let i = rng.index(self.coords.len());
        let delta = *rng.fetch_uniform(-0.5, 0.5, 1).front().unwrap() as f64;
        self.coords[i] += delta;
    }

    fn heap_size(&self) -> usize {
        self.coords.capacity() * std::mem::size_of::<f64>()
    }
}

/// Rastrigin function, made artificially heavier so evaluation dominates.
struct Rastrigin;

impl Challenge<Vector> for Rastrigin {
    fn score(&self, phenotype: &Vector) -> Result<Vec<f64>> {
        let mut total = 0.0;
        for _ in 0..50 {
            total = 10.0 * phenotype.coords.len() as f64
                + phenotype
                    .coords
                    .iter()
                    .map(|x| x * x - 10.0 * (2.0 * std::f64::consts::PI * x).cos())
                    .sum::<f64>();
        }
        Ok(vec![total])
    }
}

fn population(size: usize) -> Vec<Individual<Vector>> {
    let mut rng = RandomNumberGenerator::from_seed(7);
    (0..size)
        .map(|_| {
            let coords = rng
                .fetch_uniform(-5.12, 5.12, 16)
                .into_iter()
                .map(f64::from)
                .collect();
            Individual::new(Vector { coords })
        })
        .collect()
}

fn bench_elitism(c: &mut Criterion) {
    let options = EvolutionOptions::new(10, 0.7, 0.3, LogLevel::None);
    let sequential =
        EvolutionLauncher::new(TournamentSelection::default(), VarAnd::new(), Rastrigin);
    let parallel = EvolutionLauncher::new(TournamentSelection::default(), VarAnd::new(), Rastrigin)
        .with_evaluator(ParallelMap::new(0));

    let mut group = c.benchmark_group("elitism_evolve");
    for size in [100, 1000].iter() {
        group.bench_function(format!("sequential_{}", size), |b| {
            b.iter(|| {
                let mut hall_of_fame = HallOfFame::new(5).unwrap();
                let mut rng = RandomNumberGenerator::from_seed(1);
                let result = sequential.evolve(
                    black_box(&options),
                    population(*size),
                    Some(&mut hall_of_fame),
                    &mut rng,
                );
                assert!(result.is_ok());
            })
        });

        group.bench_function(format!("parallel_{}", size), |b| {
            b.iter(|| {
                let mut hall_of_fame = HallOfFame::new(5).unwrap();
                let mut rng = RandomNumberGenerator::from_seed(1);
                let result = parallel.evolve(
                    black_box(&options),
                    population(*size),
                    Some(&mut hall_of_fame),
                    &mut rng,
                );
                assert!(result.is_ok());
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_elitism);
criterion_main!(benches);

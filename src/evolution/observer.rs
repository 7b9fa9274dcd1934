use crate::{individual::Individual, logbook::GenerationRecord, phenotype::Phenotype};

/// Receives each generation's record as soon as it is appended to the logbook.
///
/// Observers see the population that was just installed, so they can plot,
/// print or persist progress while the run is still going.
pub trait GenerationObserver<P: Phenotype> {
    fn on_generation(&mut self, record: &GenerationRecord, population: &[Individual<P>]);
}

/// Observer that ignores every generation.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl<P: Phenotype> GenerationObserver<P> for NoopObserver {
    fn on_generation(&mut self, _record: &GenerationRecord, _population: &[Individual<P>]) {}
}

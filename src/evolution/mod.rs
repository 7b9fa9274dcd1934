pub mod builder;
pub mod challenge;
pub mod evaluator;
pub mod launcher;
pub mod observer;
pub mod options;

pub use builder::EvolutionLauncherBuilder;
pub use challenge::Challenge;
pub use evaluator::{EvaluationMap, ParallelMap, SequentialMap};
pub use launcher::{EvolutionLauncher, EvolutionResult};
pub use observer::{GenerationObserver, NoopObserver};
pub use options::{EvolutionOptions, LogLevel};

//! Per-generation observation records and observers.

use std::fmt::Debug;
use std::time::Duration;

/// What the engine reports after each generation.
///
/// The best candidate is a copy, independent of the live population.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationObservation<C> {
    /// Generation index, starting at 0 for the initial population.
    pub generation: usize,
    /// Best score in this generation.
    pub best_fitness: f64,
    /// Best candidate in this generation.
    pub best_candidate: C,
    /// Mean score in this generation.
    pub mean_fitness: f64,
    /// Population standard deviation of the scores.
    pub fitness_std_dev: f64,
    /// Number of candidates (constant across a run).
    pub population_size: usize,
    /// Number of elites carried into the next generation.
    pub elite_count: usize,
    /// Wall-clock time since the run started.
    pub elapsed: Duration,
}

/// Receives one observation per generation.
///
/// Observers run on the engine's thread between generations and should
/// return quickly. Any `FnMut(&GenerationObservation<C>)` closure is an
/// observer.
pub trait EvolutionObserver<C> {
    fn population_update(&mut self, observation: &GenerationObservation<C>);
}

impl<C, F> EvolutionObserver<C> for F
where
    F: FnMut(&GenerationObservation<C>),
{
    fn population_update(&mut self, observation: &GenerationObservation<C>) {
        self(observation)
    }
}

/// Logs every generation at `info` level.
///
/// With `show_candidate`, the best candidate is logged at `debug` level
/// as well.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingObserver {
    pub show_candidate: bool,
}

impl LoggingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_candidate(mut self) -> Self {
        self.show_candidate = true;
        self
    }
}

impl<C: Debug> EvolutionObserver<C> for LoggingObserver {
    fn population_update(&mut self, obs: &GenerationObservation<C>) {
        log::info!(
            "generation {}: best={} mean={:.6} pop={}",
            obs.generation,
            obs.best_fitness,
            obs.mean_fitness,
            obs.population_size
        );
        if self.show_candidate {
            log::debug!("best solution = {:?}", obs.best_candidate);
        }
    }
}

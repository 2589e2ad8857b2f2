//! Engine configuration.
//!
//! [`EvolutionConfig`] holds the parameters of the generational loop.
//! Operator probabilities belong to the representation, not to this struct.

use super::selection::Selection;
use crate::error::EvolveError;

/// Configuration for the evolution engine.
///
/// # Defaults
///
/// ```
/// use u_evolve::ga::{EvolutionConfig, Selection};
///
/// let config = EvolutionConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.elite_count, 0);
/// assert_eq!(config.selection, Selection::RouletteWheel);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_evolve::ga::{EvolutionConfig, Selection};
///
/// let config = EvolutionConfig::default()
///     .with_population_size(20)
///     .with_elite_count(2)
///     .with_selection(Selection::Tournament(3))
///     .with_max_generations(20_000)
///     .with_seed(1);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvolutionConfig {
    /// Number of candidates per generation. Constant for the whole run.
    pub population_size: usize,

    /// Number of top-ranked candidates copied unchanged into the next
    /// generation. They bypass crossover and mutation but remain eligible
    /// as parents.
    pub elite_count: usize,

    /// Selection strategy for building the mating pool.
    pub selection: Selection,

    /// Index of the last generation. The run observes generations
    /// `0..=max_generations`.
    pub max_generations: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` draws a fresh seed, which is logged so the run can be replayed.
    pub seed: Option<u64>,

    /// Whether to evaluate candidates in parallel.
    ///
    /// Only takes effect when the crate is built with the `parallel` feature.
    pub parallel: bool,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            elite_count: 0,
            selection: Selection::default(),
            max_generations: 500,
            seed: None,
            parallel: true,
        }
    }
}

impl EvolutionConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of elites.
    pub fn with_elite_count(mut self, n: usize) -> Self {
        self.elite_count = n;
        self
    }

    /// Sets the selection strategy.
    pub fn with_selection(mut self, sel: Selection) -> Self {
        self.selection = sel;
        self
    }

    /// Convenience builder for tournament selection.
    ///
    /// Equivalent to `.with_selection(Selection::Tournament(k))`.
    pub fn with_tournament_size(self, k: usize) -> Self {
        self.with_selection(Selection::Tournament(k))
    }

    /// Sets the generation limit.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), EvolveError> {
        if self.population_size < 1 {
            return Err(EvolveError::config("population_size must be at least 1"));
        }
        if self.elite_count >= self.population_size {
            return Err(EvolveError::config(format!(
                "elite_count ({}) must be smaller than population_size ({})",
                self.elite_count, self.population_size
            )));
        }
        if self.selection == Selection::Tournament(0) {
            return Err(EvolveError::config("tournament size must be at least 1"));
        }
        Ok(())
    }
}

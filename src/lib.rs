//! Generational genetic algorithm engine.
//!
//! Evolves a fixed-size population of candidate solutions toward better
//! fitness by repeating evaluate → select → recombine → mutate, with optional
//! elitism. The engine is generic over a [`ga::Representation`], and two
//! encodings are provided:
//!
//! - **Real vectors**: fixed-length `Vec<f64>` with genes drawn from `[min, max]`,
//!   uniform swap crossover and Gaussian mutation.
//! - **Permutations**: orderings of a fixed element set, ordered crossover (OX)
//!   and segment-reversal mutation. Every operator preserves the element set.
//!
//! Fitness evaluation is supplied by the caller through
//! [`ga::FitnessEvaluator`], which also declares whether higher or lower scores
//! are better. Selection, ranking, and termination all respect that ordering.
//!
//! # Example
//!
//! ```
//! use u_evolve::ga::{
//!     EvolutionConfig, EvolutionEngine, FitnessFn, FitnessOrdering, RealVectorRepresentation,
//! };
//!
//! let representation = RealVectorRepresentation::new(5, -5.0, 5.0);
//! let evaluator = FitnessFn::new(FitnessOrdering::LowerIsBetter, |genes: &Vec<f64>| {
//!     Ok(genes.iter().map(|x| x * x).sum())
//! });
//! let config = EvolutionConfig::default()
//!     .with_population_size(30)
//!     .with_elite_count(2)
//!     .with_max_generations(20)
//!     .with_seed(7);
//!
//! let mut engine = EvolutionEngine::new(representation, evaluator, config);
//! let result = engine.evolve().unwrap();
//! assert_eq!(result.fitness_history.len(), 21);
//! ```

pub mod error;
pub mod ga;
pub mod random;

pub use error::EvolveError;

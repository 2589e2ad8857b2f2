//! Generational genetic algorithm.
//!
//! A generic GA built on two traits. Users plug in a problem by choosing
//! (or implementing) a [`Representation`] and supplying a
//! [`FitnessEvaluator`]; the [`EvolutionEngine`] does the rest.
//!
//! # Core Traits
//!
//! - [`Representation`]: candidate encoding plus its crossover and mutation
//! - [`FitnessEvaluator`]: scoring function with a declared [`FitnessOrdering`]
//! - [`TerminationCondition`]: when to stop
//! - [`EvolutionObserver`]: per-generation reporting
//!
//! # Key Types
//!
//! - [`EvolutionConfig`]: population size, elites, selection, generation limit, seed
//! - [`EvolutionEngine`]: executes the evolutionary loop
//! - [`EvolutionResult`]: best candidate, history, and final population
//! - [`GenerationObservation`]: what observers receive each generation
//!
//! # Submodules
//!
//! - [`operators`]: slice-level crossover and mutation primitives
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - De Jong (2006), *Evolutionary Computation: A Unified Approach*

mod config;
mod engine;
mod observer;
pub mod operators;
mod population;
mod representation;
mod selection;
mod termination;
mod types;

pub use config::EvolutionConfig;
pub use engine::{EvolutionEngine, EvolutionResult};
pub use observer::{EvolutionObserver, GenerationObservation, LoggingObserver};
pub use population::{
    evaluate_population, generate_population, rank_population, FitnessRecord, PopulationStats,
};
pub use representation::{PermutationRepresentation, RealVectorRepresentation};
pub use selection::Selection;
pub use termination::{
    ElapsedTime, EvolutionState, GenerationCount, Stagnation, TargetFitness, TerminationCondition,
};
pub use types::{FitnessEvaluator, FitnessFn, FitnessOrdering, Representation};

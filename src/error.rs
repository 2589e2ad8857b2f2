//! Error types for the evolution engine.

use thiserror::Error;

/// Boxed error returned by a fitness evaluator.
pub type EvaluatorFailure = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors raised while configuring or running an evolution.
///
/// None of these are transient: the engine is an in-process computation,
/// so every error either reports a configuration bug or a failure coming
/// from the caller's fitness evaluator.
#[derive(Debug, Error)]
pub enum EvolveError {
    /// Invalid parameters, detected before any generation runs.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// Operator invoked on a candidate of the wrong length.
    #[error("representation mismatch: expected length {expected}, got {actual}")]
    RepresentationMismatch { expected: usize, actual: usize },

    /// Permutation operator invoked on candidates over different element sets.
    #[error("representation mismatch: candidates are not permutations of the same element set")]
    ElementSetMismatch,

    /// The fitness evaluator failed. The engine never retries.
    #[error("fitness evaluation failed")]
    Evaluator(#[source] EvaluatorFailure),

    /// A score that cannot be ranked or weighted.
    #[error("invalid fitness score {score}")]
    InvalidFitness { score: f64 },
}

impl EvolveError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        EvolveError::Configuration(msg.into())
    }
}

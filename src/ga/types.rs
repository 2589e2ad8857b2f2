//! Core trait definitions for the evolution engine.
//!
//! [`FitnessEvaluator`] and [`Representation`] form the contract between the
//! generic engine and problem-specific code: the representation knows how to
//! create, recombine, and perturb candidates; the evaluator knows how good
//! a candidate is and in which direction "better" points.

use crate::error::{EvaluatorFailure, EvolveError};
use rand::Rng;
use std::cmp::Ordering;
use std::fmt::Debug;

/// Direction of the fitness scale.
///
/// The engine never compares raw scores directly; every comparison goes
/// through this flag, so selection and ranking work the same way for
/// maximization and minimization problems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FitnessOrdering {
    /// Higher scores are better ("natural" fitness).
    HigherIsBetter,
    /// Lower scores are better (costs, distances, errors).
    LowerIsBetter,
}

impl FitnessOrdering {
    /// Returns `true` if `a` is strictly better than `b`.
    pub fn is_better(self, a: f64, b: f64) -> bool {
        self.compare(a, b) == Ordering::Less
    }

    /// Orders two scores best-first.
    ///
    /// `Ordering::Less` means `a` ranks ahead of `b`.
    pub fn compare(self, a: f64, b: f64) -> Ordering {
        let natural = a.partial_cmp(&b).unwrap_or(Ordering::Equal);
        match self {
            FitnessOrdering::HigherIsBetter => natural.reverse(),
            FitnessOrdering::LowerIsBetter => natural,
        }
    }

    /// The worst representable score under this ordering.
    pub fn worst(self) -> f64 {
        match self {
            FitnessOrdering::HigherIsBetter => f64::NEG_INFINITY,
            FitnessOrdering::LowerIsBetter => f64::INFINITY,
        }
    }
}

/// Computes the fitness of a candidate.
///
/// Implementations must be pure functions of the candidate's genes. Run-wide
/// constants (a fixed noise offset, a loaded coordinate list) are fine as long
/// as they are fixed when the evaluator is constructed; re-randomizing per call
/// makes "better" meaningless across generations.
///
/// `Send + Sync` is required because the engine may evaluate a population
/// in parallel with the `parallel` feature.
pub trait FitnessEvaluator<C>: Send + Sync {
    /// Scores one candidate.
    ///
    /// Errors are propagated by the engine unchanged and abort the run.
    fn evaluate(&self, candidate: &C) -> Result<f64, EvaluatorFailure>;

    /// Whether higher or lower scores are better.
    fn ordering(&self) -> FitnessOrdering;
}

/// Adapts a closure into a [`FitnessEvaluator`].
///
/// ```
/// use u_evolve::ga::{FitnessEvaluator, FitnessFn, FitnessOrdering};
///
/// let sum = FitnessFn::new(FitnessOrdering::HigherIsBetter, |genes: &Vec<f64>| {
///     Ok(genes.iter().sum())
/// });
/// assert_eq!(sum.evaluate(&vec![1.0, 2.0]).unwrap(), 3.0);
/// ```
pub struct FitnessFn<F> {
    ordering: FitnessOrdering,
    func: F,
}

impl<F> FitnessFn<F> {
    /// Wraps `func` with the given ordering.
    pub fn new<C>(ordering: FitnessOrdering, func: F) -> Self
    where
        F: Fn(&C) -> Result<f64, EvaluatorFailure> + Send + Sync,
    {
        Self { ordering, func }
    }
}

impl<C, F> FitnessEvaluator<C> for FitnessFn<F>
where
    F: Fn(&C) -> Result<f64, EvaluatorFailure> + Send + Sync,
{
    fn evaluate(&self, candidate: &C) -> Result<f64, EvaluatorFailure> {
        (self.func)(candidate)
    }

    fn ordering(&self) -> FitnessOrdering {
        self.ordering
    }
}

/// A candidate encoding together with its genetic operators.
///
/// One implementation exists per encoding, and the engine is generic over
/// this trait instead of branching on the encoding. Operators take their
/// inputs by reference or by value and return new candidates; they never
/// touch the engine's live population.
pub trait Representation: Send + Sync {
    /// The candidate type produced and consumed by the operators.
    type Candidate: Clone + Debug + PartialEq + Send + Sync;

    /// Checks the encoding parameters.
    ///
    /// Called by the engine before any generation runs.
    fn validate(&self) -> Result<(), EvolveError>;

    /// Creates one random, valid candidate.
    fn generate<R: Rng>(&self, rng: &mut R) -> Self::Candidate;

    /// Recombines two parents into exactly two children.
    fn crossover<R: Rng>(
        &self,
        parent1: &Self::Candidate,
        parent2: &Self::Candidate,
        rng: &mut R,
    ) -> Result<(Self::Candidate, Self::Candidate), EvolveError>;

    /// Possibly perturbs a candidate.
    ///
    /// Returns the candidate unchanged when it is not selected for mutation.
    fn mutate<R: Rng>(
        &self,
        candidate: Self::Candidate,
        rng: &mut R,
    ) -> Result<Self::Candidate, EvolveError>;
}

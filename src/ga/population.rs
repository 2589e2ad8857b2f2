//! Population bookkeeping: initial generation, evaluation, and ranking.

use super::types::{FitnessEvaluator, FitnessOrdering, Representation};
use crate::error::EvolveError;
use rand::Rng;

/// A candidate paired with its score and rank for the current generation.
///
/// Records are rebuilt every generation and never carried over.
#[derive(Debug, Clone, PartialEq)]
pub struct FitnessRecord<C> {
    /// The candidate.
    pub candidate: C,
    /// The evaluator's score.
    pub score: f64,
    /// Position in the ranked population, 0 = best.
    pub rank: usize,
}

/// Creates `count` independent random candidates.
///
/// Fails if `count` is zero or the representation is invalid.
pub fn generate_population<P, R>(
    representation: &P,
    count: usize,
    rng: &mut R,
) -> Result<Vec<P::Candidate>, EvolveError>
where
    P: Representation,
    R: Rng,
{
    if count == 0 {
        return Err(EvolveError::config("population count must be at least 1"));
    }
    representation.validate()?;
    Ok((0..count).map(|_| representation.generate(rng)).collect())
}

/// Scores every candidate, in population order.
///
/// With the `parallel` feature and `parallel = true`, candidates are scored
/// on the rayon pool. Evaluation draws no randomness, so the result is the
/// same either way. The first evaluator error aborts the generation.
pub fn evaluate_population<C, E>(
    evaluator: &E,
    population: &[C],
    parallel: bool,
) -> Result<Vec<f64>, EvolveError>
where
    C: Send + Sync,
    E: FitnessEvaluator<C> + ?Sized,
{
    let score = |candidate: &C| -> Result<f64, EvolveError> {
        let s = evaluator.evaluate(candidate).map_err(EvolveError::Evaluator)?;
        if s.is_nan() {
            return Err(EvolveError::InvalidFitness { score: s });
        }
        Ok(s)
    };

    #[cfg(feature = "parallel")]
    if parallel {
        use rayon::prelude::*;
        return population.par_iter().map(score).collect();
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    population.iter().map(score).collect()
}

/// Sorts candidates best-first and assigns ranks.
///
/// The sort is stable: equal scores keep their population order, so a
/// seeded run always ranks the same way.
///
/// # Panics
/// Panics if the lengths of `population` and `scores` differ.
pub fn rank_population<C>(
    population: Vec<C>,
    scores: Vec<f64>,
    ordering: FitnessOrdering,
) -> Vec<FitnessRecord<C>> {
    assert_eq!(population.len(), scores.len(), "one score per candidate");

    let mut records: Vec<FitnessRecord<C>> = population
        .into_iter()
        .zip(scores)
        .map(|(candidate, score)| FitnessRecord {
            candidate,
            score,
            rank: 0,
        })
        .collect();
    records.sort_by(|a, b| ordering.compare(a.score, b.score));
    for (rank, record) in records.iter_mut().enumerate() {
        record.rank = rank;
    }
    records
}

/// Summary statistics over one generation's scores.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PopulationStats {
    pub best: f64,
    pub mean: f64,
    /// Population (not sample) standard deviation.
    pub std_dev: f64,
}

impl PopulationStats {
    /// Computes statistics for a ranked, non-empty population.
    pub fn from_ranked<C>(ranked: &[FitnessRecord<C>]) -> Self {
        let n = ranked.len() as f64;
        let mean = ranked.iter().map(|r| r.score).sum::<f64>() / n;
        let variance = ranked.iter().map(|r| (r.score - mean).powi(2)).sum::<f64>() / n;
        Self {
            best: ranked[0].score,
            mean,
            std_dev: variance.sqrt(),
        }
    }
}

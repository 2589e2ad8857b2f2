//! Selection strategies for building the mating pool.
//!
//! Selection determines which candidates become parents. Both strategies
//! sample with replacement, so any number of parents can be drawn from a
//! population of any non-zero size.
//!
//! # References
//!
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use super::population::FitnessRecord;
use super::types::FitnessOrdering;
use crate::error::EvolveError;
use rand::Rng;

/// Selection strategy for choosing parents.
///
/// # Examples
///
/// ```
/// use u_evolve::ga::Selection;
///
/// // Fitness-proportional
/// let sel = Selection::RouletteWheel;
///
/// // Best of 3 random draws
/// let sel = Selection::Tournament(3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    /// Fitness-proportional (roulette wheel) selection.
    ///
    /// Probability of selection is proportional to the normalized score:
    /// the raw score when higher is better, its reciprocal when lower is
    /// better. Raw scores must be non-negative. If every score is zero
    /// (higher is better), selection falls back to uniform.
    ///
    /// # Complexity
    /// O(n) to build the wheel, O(log n) per draw
    RouletteWheel,

    /// Tournament selection: draw `k` candidates uniformly, keep the best.
    ///
    /// Higher `k` = stronger selection pressure. `k = 1` is uniform.
    ///
    /// # Complexity
    /// O(k) per draw
    Tournament(usize),
}

impl Default for Selection {
    fn default() -> Self {
        Selection::RouletteWheel
    }
}

impl Selection {
    /// Draws `count` parents from a ranked population.
    ///
    /// Returns indices into `ranked`. The result depends only on the
    /// population and the state of `rng`.
    ///
    /// # Panics
    /// Panics if `ranked` is empty.
    pub fn select<C, R: Rng>(
        &self,
        ranked: &[FitnessRecord<C>],
        ordering: FitnessOrdering,
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<usize>, EvolveError> {
        assert!(!ranked.is_empty(), "cannot select from empty population");

        match self {
            Selection::RouletteWheel => roulette(ranked, ordering, count, rng),
            Selection::Tournament(k) => Ok((0..count)
                .map(|_| tournament(ranked.len(), *k, rng))
                .collect()),
        }
    }
}

/// Tournament over a ranked population.
///
/// Rank order already encodes "better", ties included, so the winner is
/// simply the lowest index drawn.
fn tournament<R: Rng>(n: usize, k: usize, rng: &mut R) -> usize {
    (0..k.max(1))
        .map(|_| rng.random_range(0..n))
        .min()
        .unwrap_or(0)
}

/// Roulette wheel over normalized scores.
fn roulette<C, R: Rng>(
    ranked: &[FitnessRecord<C>],
    ordering: FitnessOrdering,
    count: usize,
    rng: &mut R,
) -> Result<Vec<usize>, EvolveError> {
    let n = ranked.len();
    if n == 1 {
        return Ok(vec![0; count]);
    }

    if let Some(bad) = ranked.iter().find(|r| r.score < 0.0) {
        return Err(EvolveError::InvalidFitness { score: bad.score });
    }

    // Weights are scaled by the best score so they lie in [0, 1] and the
    // wheel total stays finite however extreme the raw scores are.
    let weights: Vec<f64> = match ordering {
        FitnessOrdering::HigherIsBetter => {
            let best = ranked.iter().map(|r| r.score).fold(0.0, f64::max);
            if best.is_infinite() {
                collapse_onto(ranked, best)
            } else if best > 0.0 {
                ranked.iter().map(|r| r.score / best).collect()
            } else {
                vec![0.0; n]
            }
        }
        FitnessOrdering::LowerIsBetter => {
            let best = ranked
                .iter()
                .map(|r| r.score)
                .fold(f64::INFINITY, f64::min);
            // A zero cost is infinitely better than any positive one: the
            // wheel collapses onto the zero-cost candidates.
            if best == 0.0 || best.is_infinite() {
                collapse_onto(ranked, best)
            } else {
                ranked.iter().map(|r| best / r.score).collect()
            }
        }
    };

    let cumulative: Vec<f64> = weights
        .iter()
        .scan(0.0, |acc, &w| {
            *acc += w;
            Some(*acc)
        })
        .collect();
    let total = cumulative[n - 1];

    if total <= 0.0 {
        log::trace!("roulette wheel total {total}, selecting uniformly");
        return Ok((0..count).map(|_| rng.random_range(0..n)).collect());
    }

    Ok((0..count)
        .map(|_| {
            let threshold = rng.random_range(0.0..total);
            cumulative
                .partition_point(|&c| c <= threshold)
                .min(n - 1) // floating-point fallback
        })
        .collect())
}

/// Unit weight for candidates scoring exactly `target`, zero elsewhere.
fn collapse_onto<C>(ranked: &[FitnessRecord<C>], target: f64) -> Vec<f64> {
    ranked
        .iter()
        .map(|r| if r.score == target { 1.0 } else { 0.0 })
        .collect()
}

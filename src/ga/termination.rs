//! Termination conditions.
//!
//! The engine checks every installed condition right after each generation
//! is evaluated and stops as soon as any one of them holds.

use super::types::FitnessOrdering;
use std::time::Duration;

/// Snapshot handed to termination conditions.
#[derive(Debug, Clone, Copy)]
pub struct EvolutionState<'a> {
    /// Index of the generation just evaluated (0 = initial population).
    pub generation: usize,
    /// Best score of this generation.
    pub best_fitness: f64,
    /// Best-of-generation scores so far, one per generation, oldest first.
    pub fitness_history: &'a [f64],
    /// Direction of the fitness scale.
    pub ordering: FitnessOrdering,
    /// Wall-clock time since the run started.
    pub elapsed: Duration,
}

/// Decides when an evolution stops.
pub trait TerminationCondition: Send + Sync {
    /// Returns `true` to stop after the current generation.
    fn should_terminate(&self, state: &EvolutionState<'_>) -> bool;

    /// Human-readable reason, reported in the run result.
    fn reason(&self) -> &'static str;
}

/// Stop once the generation index reaches the limit.
///
/// A limit of `N` yields generations `0..=N`, i.e. `N + 1` observations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationCount(pub usize);

impl TerminationCondition for GenerationCount {
    fn should_terminate(&self, state: &EvolutionState<'_>) -> bool {
        state.generation >= self.0
    }

    fn reason(&self) -> &'static str {
        "generation limit reached"
    }
}

/// Stop once the best score reaches `target`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetFitness(pub f64);

impl TerminationCondition for TargetFitness {
    fn should_terminate(&self, state: &EvolutionState<'_>) -> bool {
        !state.ordering.is_better(self.0, state.best_fitness)
    }

    fn reason(&self) -> &'static str {
        "target fitness reached"
    }
}

/// Stop when the best-so-far score has not improved for `generations`
/// consecutive generations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stagnation {
    pub generations: usize,
}

impl Stagnation {
    pub fn new(generations: usize) -> Self {
        Self { generations }
    }
}

impl TerminationCondition for Stagnation {
    fn should_terminate(&self, state: &EvolutionState<'_>) -> bool {
        let history = state.fitness_history;
        if self.generations == 0 || history.len() <= self.generations {
            return false;
        }

        let mut best = history[0];
        let mut last_improvement = 0;
        for (gen, &score) in history.iter().enumerate().skip(1) {
            if state.ordering.is_better(score, best) {
                best = score;
                last_improvement = gen;
            }
        }
        history.len() - 1 - last_improvement >= self.generations
    }

    fn reason(&self) -> &'static str {
        "fitness stagnated"
    }
}

/// Stop once the run has used up its time budget.
///
/// Checked between generations, so a run may overshoot by up to one
/// generation's worth of work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElapsedTime(pub Duration);

impl TerminationCondition for ElapsedTime {
    fn should_terminate(&self, state: &EvolutionState<'_>) -> bool {
        state.elapsed >= self.0
    }

    fn reason(&self) -> &'static str {
        "time limit reached"
    }
}

//! Candidate encodings.
//!
//! - [`RealVectorRepresentation`]: `Vec<f64>` of fixed dimension, genes
//!   initialized uniformly in `[min, max]`.
//! - [`PermutationRepresentation`]: orderings of a fixed element set.

use super::operators::{
    distinct_cut_points, gaussian_mutation, ordered_crossover, reverse_segment, same_element_set,
    swap_crossover,
};
use super::types::Representation;
use crate::error::EvolveError;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

fn check_probability(name: &str, p: f64) -> Result<(), EvolveError> {
    if (0.0..=1.0).contains(&p) {
        Ok(())
    } else {
        Err(EvolveError::config(format!("{name} must be in [0, 1], got {p}")))
    }
}

fn check_length(expected: usize, actual: usize) -> Result<(), EvolveError> {
    if expected == actual {
        Ok(())
    } else {
        Err(EvolveError::RepresentationMismatch { expected, actual })
    }
}

// ============================================================================
// Real vector
// ============================================================================

/// Fixed-length real-valued vectors.
///
/// # Defaults
///
/// | parameter | default |
/// |---|---|
/// | `swap_probability` | 0.2 |
/// | `individual_mutation_probability` | 0.01 |
/// | `gene_mutation_probability` | 0.5 |
/// | `clamp_mutations` | `false` |
///
/// Mutated genes are allowed to drift outside `[min, max]` unless
/// `clamp_mutations` is enabled. Crossover only exchanges existing genes
/// and never leaves the range on its own.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RealVectorRepresentation {
    /// Number of genes per candidate.
    pub dimension: usize,
    /// Lower bound for initial genes.
    pub min: f64,
    /// Upper bound for initial genes.
    pub max: f64,
    /// Per-gene probability that crossover exchanges the gene.
    pub swap_probability: f64,
    /// Probability that a candidate is picked for mutation at all.
    pub individual_mutation_probability: f64,
    /// Per-gene probability of Gaussian noise once a candidate is picked.
    pub gene_mutation_probability: f64,
    /// Clamp mutated genes back into `[min, max]`.
    pub clamp_mutations: bool,
}

impl RealVectorRepresentation {
    /// Creates a representation with default operator probabilities.
    pub fn new(dimension: usize, min: f64, max: f64) -> Self {
        Self {
            dimension,
            min,
            max,
            swap_probability: 0.2,
            individual_mutation_probability: 0.01,
            gene_mutation_probability: 0.5,
            clamp_mutations: false,
        }
    }

    /// Sets the per-gene swap probability used by crossover.
    pub fn with_swap_probability(mut self, p: f64) -> Self {
        self.swap_probability = p;
        self
    }

    /// Sets the per-candidate and per-gene mutation probabilities.
    pub fn with_mutation_probabilities(mut self, individual: f64, gene: f64) -> Self {
        self.individual_mutation_probability = individual;
        self.gene_mutation_probability = gene;
        self
    }

    /// Enables or disables clamping of mutated genes.
    pub fn with_clamp_mutations(mut self, clamp: bool) -> Self {
        self.clamp_mutations = clamp;
        self
    }
}

impl Representation for RealVectorRepresentation {
    type Candidate = Vec<f64>;

    fn validate(&self) -> Result<(), EvolveError> {
        if self.dimension == 0 {
            return Err(EvolveError::config("dimension must be at least 1"));
        }
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(EvolveError::config("gene bounds must be finite"));
        }
        if !(self.max - self.min).is_finite() {
            return Err(EvolveError::config("gene range max - min overflows"));
        }
        if self.min > self.max {
            return Err(EvolveError::config(format!(
                "min ({}) must not exceed max ({})",
                self.min, self.max
            )));
        }
        check_probability("swap_probability", self.swap_probability)?;
        check_probability(
            "individual_mutation_probability",
            self.individual_mutation_probability,
        )?;
        check_probability("gene_mutation_probability", self.gene_mutation_probability)
    }

    fn generate<R: Rng>(&self, rng: &mut R) -> Vec<f64> {
        let span = self.max - self.min;
        (0..self.dimension)
            .map(|_| self.min + span * rng.random::<f64>())
            .collect()
    }

    fn crossover<R: Rng>(
        &self,
        parent1: &Vec<f64>,
        parent2: &Vec<f64>,
        rng: &mut R,
    ) -> Result<(Vec<f64>, Vec<f64>), EvolveError> {
        check_length(self.dimension, parent1.len())?;
        check_length(self.dimension, parent2.len())?;
        Ok(swap_crossover(parent1, parent2, self.swap_probability, rng))
    }

    fn mutate<R: Rng>(
        &self,
        mut candidate: Vec<f64>,
        rng: &mut R,
    ) -> Result<Vec<f64>, EvolveError> {
        check_length(self.dimension, candidate.len())?;
        let mutated = gaussian_mutation(
            &mut candidate,
            self.individual_mutation_probability,
            self.gene_mutation_probability,
            rng,
        );
        if mutated && self.clamp_mutations {
            for gene in candidate.iter_mut() {
                *gene = gene.clamp(self.min, self.max);
            }
        }
        Ok(candidate)
    }
}

// ============================================================================
// Permutation
// ============================================================================

/// Orderings of a fixed element set.
///
/// Every candidate contains each element exactly once. Crossover (OX) and
/// mutation (segment reversal) only reorder elements.
///
/// # Defaults
///
/// | parameter | default |
/// |---|---|
/// | `crossover_probability` | 1.0 |
/// | `mutation_probability` | 0.1 |
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PermutationRepresentation<T> {
    elements: Vec<T>,
    /// Probability that a parent pair is recombined; otherwise the children
    /// are copies of the parents.
    pub crossover_probability: f64,
    /// Probability that a candidate has a segment reversed.
    pub mutation_probability: f64,
}

impl<T> PermutationRepresentation<T>
where
    T: Clone + Debug + Eq + Hash + Send + Sync,
{
    /// Creates a representation over `elements`.
    pub fn new(elements: Vec<T>) -> Self {
        Self {
            elements,
            crossover_probability: 1.0,
            mutation_probability: 0.1,
        }
    }

    /// The fixed element set, in its original order.
    pub fn elements(&self) -> &[T] {
        &self.elements
    }

    /// Sets the pairwise crossover probability.
    pub fn with_crossover_probability(mut self, p: f64) -> Self {
        self.crossover_probability = p;
        self
    }

    /// Sets the segment-reversal probability.
    pub fn with_mutation_probability(mut self, p: f64) -> Self {
        self.mutation_probability = p;
        self
    }

    fn check_elements(&self, candidate: &[T]) -> Result<(), EvolveError> {
        if same_element_set(candidate, &self.elements) {
            Ok(())
        } else {
            Err(EvolveError::ElementSetMismatch)
        }
    }
}

impl PermutationRepresentation<usize> {
    /// Permutations of `0..n`.
    pub fn indices(n: usize) -> Self {
        Self::new((0..n).collect())
    }
}

impl<T> Representation for PermutationRepresentation<T>
where
    T: Clone + Debug + Eq + Hash + Send + Sync,
{
    type Candidate = Vec<T>;

    fn validate(&self) -> Result<(), EvolveError> {
        if self.elements.is_empty() {
            return Err(EvolveError::config("element set must not be empty"));
        }
        let distinct: HashSet<&T> = self.elements.iter().collect();
        if distinct.len() != self.elements.len() {
            return Err(EvolveError::config("element set contains duplicates"));
        }
        check_probability("crossover_probability", self.crossover_probability)?;
        check_probability("mutation_probability", self.mutation_probability)
    }

    fn generate<R: Rng>(&self, rng: &mut R) -> Vec<T> {
        let mut perm = self.elements.clone();
        perm.shuffle(rng);
        perm
    }

    fn crossover<R: Rng>(
        &self,
        parent1: &Vec<T>,
        parent2: &Vec<T>,
        rng: &mut R,
    ) -> Result<(Vec<T>, Vec<T>), EvolveError> {
        check_length(self.elements.len(), parent1.len())?;
        check_length(self.elements.len(), parent2.len())?;
        self.check_elements(parent1)?;
        self.check_elements(parent2)?;
        if rng.random::<f64>() >= self.crossover_probability {
            return Ok((parent1.clone(), parent2.clone()));
        }
        Ok(ordered_crossover(parent1, parent2, rng))
    }

    fn mutate<R: Rng>(&self, mut candidate: Vec<T>, rng: &mut R) -> Result<Vec<T>, EvolveError> {
        check_length(self.elements.len(), candidate.len())?;
        self.check_elements(&candidate)?;
        if candidate.len() >= 2 && rng.random::<f64>() < self.mutation_probability {
            let (start, end) = distinct_cut_points(candidate.len(), rng);
            reverse_segment(&mut candidate, start, end);
        }
        Ok(candidate)
    }
}

//! Slice-level genetic operators.
//!
//! These are the building blocks behind the two encodings in
//! [`representation`](super::representation). They work on plain slices, so
//! they can be reused directly by callers with their own encodings.
//!
//! # Permutation operators
//!
//! - [`ordered_crossover`] (OX): copies a segment from one parent, fills the
//!   rest in the other parent's relative order. Never duplicates an element.
//! - [`reverse_segment`]: reverses the elements between two cut positions.
//!
//! # Real-vector operators
//!
//! - [`swap_crossover`]: uniform crossover, one Bernoulli trial per gene.
//! - [`gaussian_mutation`]: additive standard-normal noise on a random
//!   subset of genes.
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"
//! - Syswerda (1989), "Uniform Crossover in Genetic Algorithms"

use rand::Rng;
use rand_distr::StandardNormal;
use std::collections::HashSet;
use std::hash::Hash;

// ============================================================================
// Cut points
// ============================================================================

/// Draws two cut points in `0..=n` and returns them as `(min, max)`.
///
/// The segment `start..end` may be empty.
pub fn random_cut_points<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    let a = rng.random_range(0..=n);
    let b = rng.random_range(0..=n);
    (a.min(b), a.max(b))
}

/// Draws two distinct cut points in `0..=n`, as `(min, max)`.
///
/// Equal draws are rejected, so the segment `start..end` is never empty.
///
/// # Panics
/// Panics if `n == 0` (no two distinct cut points exist).
pub fn distinct_cut_points<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    assert!(n > 0, "need at least one element to cut");
    loop {
        let (start, end) = random_cut_points(n, rng);
        if start != end {
            return (start, end);
        }
    }
}

// ============================================================================
// Permutation operators
// ============================================================================

/// Ordered crossover (OX) producing two children.
///
/// Child 1 keeps `parent1[start..end]` in place and takes the remaining
/// elements in `parent2`'s order; child 2 is the mirror image.
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Panics
/// Panics if the parents differ in length.
pub fn ordered_crossover<T, R>(parent1: &[T], parent2: &[T], rng: &mut R) -> (Vec<T>, Vec<T>)
where
    T: Clone + Eq + Hash,
    R: Rng,
{
    assert_eq!(parent1.len(), parent2.len(), "parents must have equal length");
    let (start, end) = random_cut_points(parent1.len(), rng);
    (
        ordered_crossover_child(parent1, parent2, start, end),
        ordered_crossover_child(parent2, parent1, start, end),
    )
}

/// Builds one OX child from fixed cut points.
///
/// `template[start..end]` is copied verbatim to the same positions. The
/// elements of `donor` not in that segment are laid out in `donor`'s order:
/// the first `start` of them before the segment, the rest after it.
///
/// ```
/// use u_evolve::ga::operators::ordered_crossover_child;
///
/// let child = ordered_crossover_child(&[1, 2, 3, 4, 5], &[5, 4, 3, 2, 1], 1, 3);
/// assert_eq!(child, vec![5, 2, 3, 4, 1]);
/// ```
///
/// # Panics
/// Panics if `start > end` or `end` exceeds the parent length.
pub fn ordered_crossover_child<T>(template: &[T], donor: &[T], start: usize, end: usize) -> Vec<T>
where
    T: Clone + Eq + Hash,
{
    assert!(start <= end && end <= template.len(), "invalid segment {start}..{end}");

    let segment = &template[start..end];
    let taken: HashSet<&T> = segment.iter().collect();
    let mut rest = donor.iter().filter(|gene| !taken.contains(gene)).cloned();

    let mut child = Vec::with_capacity(template.len());
    child.extend(rest.by_ref().take(start));
    child.extend_from_slice(segment);
    child.extend(rest);
    child
}

/// Reverses `perm[start..end]` in place.
///
/// ```
/// use u_evolve::ga::operators::reverse_segment;
///
/// let mut perm = vec![1, 2, 3, 4, 5];
/// reverse_segment(&mut perm, 1, 4);
/// assert_eq!(perm, vec![1, 4, 3, 2, 5]);
/// ```
pub fn reverse_segment<T>(perm: &mut [T], start: usize, end: usize) {
    perm[start..end].reverse();
}

/// Checks that two slices hold the same elements, each exactly once.
pub fn same_element_set<T: Eq + Hash>(a: &[T], b: &[T]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let set_a: HashSet<&T> = a.iter().collect();
    let set_b: HashSet<&T> = b.iter().collect();
    set_a.len() == a.len() && set_b.len() == b.len() && set_a == set_b
}

// ============================================================================
// Real-vector operators
// ============================================================================

/// Uniform swap crossover.
///
/// For each index independently, with probability `swap_probability` the
/// children exchange that gene; otherwise each keeps its own parent's gene.
///
/// # Panics
/// Panics if the parents differ in length.
pub fn swap_crossover<R: Rng>(
    parent1: &[f64],
    parent2: &[f64],
    swap_probability: f64,
    rng: &mut R,
) -> (Vec<f64>, Vec<f64>) {
    assert_eq!(parent1.len(), parent2.len(), "parents must have equal length");

    let mut child1 = parent1.to_vec();
    let mut child2 = parent2.to_vec();
    for i in 0..child1.len() {
        if rng.random::<f64>() < swap_probability {
            std::mem::swap(&mut child1[i], &mut child2[i]);
        }
    }
    (child1, child2)
}

/// Gaussian mutation.
///
/// With probability `individual_probability` the vector is picked; each gene
/// of a picked vector then receives `N(0, 1)` noise with probability
/// `gene_probability`. Returns whether the vector was picked.
pub fn gaussian_mutation<R: Rng>(
    genes: &mut [f64],
    individual_probability: f64,
    gene_probability: f64,
    rng: &mut R,
) -> bool {
    if rng.random::<f64>() >= individual_probability {
        return false;
    }
    for gene in genes.iter_mut() {
        if rng.random::<f64>() < gene_probability {
            let noise: f64 = rng.sample(StandardNormal);
            *gene += noise;
        }
    }
    true
}

// ============================================================================
// Tests
// ============================================================================

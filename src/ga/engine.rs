//! Generational evolution loop.
//!
//! [`EvolutionEngine`] runs: initialize → evaluate → (select → recombine →
//! mutate → keep elites → evaluate)*, checking termination after every
//! evaluation and notifying observers once per generation.

use super::config::EvolutionConfig;
use super::observer::{EvolutionObserver, GenerationObservation};
use super::population::{
    evaluate_population, generate_population, rank_population, FitnessRecord, PopulationStats,
};
use super::termination::{EvolutionState, GenerationCount, TerminationCondition};
use super::types::{FitnessEvaluator, FitnessOrdering, Representation};
use crate::error::EvolveError;
use crate::random::{create_rng, fresh_seed};
use rand::Rng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Result of an evolution run.
#[derive(Debug, Clone)]
pub struct EvolutionResult<C> {
    /// Best candidate seen in any generation.
    pub best: C,

    /// Score of `best`.
    pub best_fitness: f64,

    /// Index of the last generation evaluated.
    pub generations: usize,

    /// Why the run stopped.
    pub termination_reason: &'static str,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Best score of each generation, generation 0 first.
    pub fitness_history: Vec<f64>,

    /// The final generation, ranked best-first.
    pub population: Vec<FitnessRecord<C>>,
}

/// Evolves a population of `P::Candidate` scored by `E`.
///
/// The engine owns the live population; observers and operators only ever
/// see copies or shared references.
///
/// # Usage
///
/// ```
/// use u_evolve::ga::{
///     EvolutionConfig, EvolutionEngine, FitnessFn, FitnessOrdering, PermutationRepresentation,
///     Selection,
/// };
///
/// // Sort 0..8 by evolving permutations: count misplaced elements.
/// let evaluator = FitnessFn::new(FitnessOrdering::LowerIsBetter, |perm: &Vec<usize>| {
///     Ok(perm.iter().enumerate().filter(|(i, v)| i != *v).count() as f64)
/// });
/// let config = EvolutionConfig::default()
///     .with_population_size(40)
///     .with_elite_count(2)
///     .with_selection(Selection::Tournament(3))
///     .with_max_generations(50)
///     .with_seed(42);
///
/// let mut engine = EvolutionEngine::new(PermutationRepresentation::indices(8), evaluator, config);
/// let result = engine.evolve().unwrap();
/// assert_eq!(result.population.len(), 40);
/// ```
pub struct EvolutionEngine<P: Representation, E> {
    representation: P,
    evaluator: E,
    config: EvolutionConfig,
    terminations: Vec<Box<dyn TerminationCondition>>,
    observers: Vec<Box<dyn EvolutionObserver<P::Candidate>>>,
}

impl<P, E> EvolutionEngine<P, E>
where
    P: Representation,
    E: FitnessEvaluator<P::Candidate>,
{
    /// Creates an engine. Nothing is validated until a run starts.
    pub fn new(representation: P, evaluator: E, config: EvolutionConfig) -> Self {
        Self {
            representation,
            evaluator,
            config,
            terminations: Vec::new(),
            observers: Vec::new(),
        }
    }

    /// Adds a termination condition on top of the generation limit.
    pub fn with_termination<T: TerminationCondition + 'static>(mut self, condition: T) -> Self {
        self.add_termination(condition);
        self
    }

    /// Adds a termination condition on top of the generation limit.
    pub fn add_termination<T: TerminationCondition + 'static>(&mut self, condition: T) {
        self.terminations.push(Box::new(condition));
    }

    /// Registers an observer, called once per generation.
    pub fn add_observer<O>(&mut self, observer: O)
    where
        O: EvolutionObserver<P::Candidate> + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    /// The engine configuration.
    pub fn config(&self) -> &EvolutionConfig {
        &self.config
    }

    /// The candidate representation.
    pub fn representation(&self) -> &P {
        &self.representation
    }

    /// Runs the evolution until a termination condition holds.
    pub fn evolve(&mut self) -> Result<EvolutionResult<P::Candidate>, EvolveError> {
        self.evolve_with_cancel(None)
    }

    /// Runs the evolution with an optional cancellation flag.
    ///
    /// The flag is checked between generations; once set, the run returns
    /// the current population and the best candidate found so far.
    pub fn evolve_with_cancel(
        &mut self,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<EvolutionResult<P::Candidate>, EvolveError> {
        self.config.validate()?;
        self.representation.validate()?;

        let seed = self.config.seed.unwrap_or_else(fresh_seed);
        let mut rng = create_rng(seed);
        let ordering = self.evaluator.ordering();
        let limit = GenerationCount(self.config.max_generations);

        log::info!(
            "starting evolution: population={} elites={} selection={:?} generations={} seed={}",
            self.config.population_size,
            self.config.elite_count,
            self.config.selection,
            self.config.max_generations,
            seed
        );

        let start = Instant::now();
        let initial =
            generate_population(&self.representation, self.config.population_size, &mut rng)?;
        let mut ranked = self.evaluate(initial, ordering)?;

        let mut best = ranked[0].candidate.clone();
        let mut best_fitness = ranked[0].score;
        let mut fitness_history = Vec::new();
        let mut generation = 0;

        let (termination_reason, cancelled) = loop {
            let stats = PopulationStats::from_ranked(&ranked);
            fitness_history.push(stats.best);
            if ordering.is_better(stats.best, best_fitness) {
                best = ranked[0].candidate.clone();
                best_fitness = stats.best;
            }
            log::debug!(
                "generation {generation}: best={} mean={} std_dev={}",
                stats.best,
                stats.mean,
                stats.std_dev
            );

            let elapsed = start.elapsed();
            let observation = GenerationObservation {
                generation,
                best_fitness: stats.best,
                best_candidate: ranked[0].candidate.clone(),
                mean_fitness: stats.mean,
                fitness_std_dev: stats.std_dev,
                population_size: ranked.len(),
                elite_count: self.config.elite_count,
                elapsed,
            };
            for observer in self.observers.iter_mut() {
                observer.population_update(&observation);
            }

            let state = EvolutionState {
                generation,
                best_fitness: stats.best,
                fitness_history: &fitness_history,
                ordering,
                elapsed,
            };
            let stop = if limit.should_terminate(&state) {
                Some(limit.reason())
            } else {
                self.terminations
                    .iter()
                    .find(|c| c.should_terminate(&state))
                    .map(|c| c.reason())
            };
            if let Some(reason) = stop {
                break (reason, false);
            }
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    break ("cancelled", true);
                }
            }

            let offspring = self.breed(&ranked, ordering, &mut rng)?;
            ranked = self.evaluate(offspring, ordering)?;
            generation += 1;
        };

        log::info!(
            "evolution finished after {generation} generations ({termination_reason}): \
             best={best_fitness}"
        );

        Ok(EvolutionResult {
            best,
            best_fitness,
            generations: generation,
            termination_reason,
            cancelled,
            fitness_history,
            population: ranked,
        })
    }

    /// Scores and ranks a new generation.
    fn evaluate(
        &self,
        population: Vec<P::Candidate>,
        ordering: FitnessOrdering,
    ) -> Result<Vec<FitnessRecord<P::Candidate>>, EvolveError> {
        let scores = evaluate_population(&self.evaluator, &population, self.config.parallel)?;
        Ok(rank_population(population, scores, ordering))
    }

    /// Builds the next generation from a ranked one.
    ///
    /// The first `elite_count` entries are the current elites, unchanged;
    /// the rest are mutated offspring of consecutive mating-pool pairs.
    fn breed<R: Rng>(
        &self,
        ranked: &[FitnessRecord<P::Candidate>],
        ordering: FitnessOrdering,
        rng: &mut R,
    ) -> Result<Vec<P::Candidate>, EvolveError> {
        let size = self.config.population_size;
        let elites = self.config.elite_count;
        let needed = size - elites;

        let mut next: Vec<P::Candidate> = ranked[..elites]
            .iter()
            .map(|r| r.candidate.clone())
            .collect();

        // Round up to whole pairs; the surplus child is dropped.
        let pool_size = needed + needed % 2;
        let parents = self.config.selection.select(ranked, ordering, pool_size, rng)?;
        log::trace!("mating pool: {parents:?}");

        let mut offspring = Vec::with_capacity(pool_size);
        for pair in parents.chunks_exact(2) {
            let (child1, child2) = self.representation.crossover(
                &ranked[pair[0]].candidate,
                &ranked[pair[1]].candidate,
                rng,
            )?;
            offspring.push(child1);
            offspring.push(child2);
        }
        offspring.truncate(needed);

        for child in offspring {
            next.push(self.representation.mutate(child, rng)?);
        }
        Ok(next)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EvaluatorFailure;
    use crate::ga::operators::same_element_set;
    use crate::ga::termination::{Stagnation, TargetFitness};
    use crate::ga::{FitnessFn, PermutationRepresentation, RealVectorRepresentation, Selection};
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::sync::atomic::AtomicUsize;

    type Log<C> = Rc<RefCell<Vec<GenerationObservation<C>>>>;

    fn record<P, E>(engine: &mut EvolutionEngine<P, E>) -> Log<P::Candidate>
    where
        P: Representation,
        P::Candidate: 'static,
        E: FitnessEvaluator<P::Candidate>,
    {
        let log: Log<P::Candidate> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        engine.add_observer(move |obs: &GenerationObservation<P::Candidate>| {
            sink.borrow_mut().push(obs.clone())
        });
        log
    }

    fn sphere() -> FitnessFn<impl Fn(&Vec<f64>) -> Result<f64, EvaluatorFailure> + Send + Sync> {
        FitnessFn::new(FitnessOrdering::LowerIsBetter, |genes: &Vec<f64>| {
            Ok(genes.iter().map(|x| x * x).sum())
        })
    }

    /// Ackley-style landscape shifted by a fixed per-gene offset, rescaled
    /// so that higher is better and every score is non-negative.
    struct ShiftedAckley {
        offsets: Vec<f64>,
    }

    impl ShiftedAckley {
        fn new(dimension: usize) -> Self {
            let mut rng = create_rng(1);
            Self {
                offsets: (0..dimension).map(|_| rng.random::<f64>()).collect(),
            }
        }
    }

    impl FitnessEvaluator<Vec<f64>> for ShiftedAckley {
        fn evaluate(&self, genes: &Vec<f64>) -> Result<f64, EvaluatorFailure> {
            let dn = 1.0 / genes.len() as f64;
            let (mut s1, mut s2) = (0.0, 0.0);
            for (gene, offset) in genes.iter().zip(&self.offsets) {
                let v = gene + offset;
                s1 += v * v;
                s2 += (2.0 * std::f64::consts::PI * v).cos();
            }
            let ackley = -10.0 * (-0.2 * (dn * s1).sqrt()).exp() - (dn * s2).exp()
                + 10.0
                + std::f64::consts::E;
            Ok((10.0 - ackley).abs())
        }

        fn ordering(&self) -> FitnessOrdering {
            FitnessOrdering::HigherIsBetter
        }
    }

    fn ring_tour_length(perm: &Vec<usize>) -> Result<f64, EvaluatorFailure> {
        let n = perm.len() as f64;
        let point = |i: usize| {
            let angle = 2.0 * std::f64::consts::PI * i as f64 / n;
            (angle.cos(), angle.sin())
        };
        let mut total = 0.0;
        for k in 0..perm.len() {
            let (x1, y1) = point(perm[k]);
            let (x2, y2) = point(perm[(k + 1) % perm.len()]);
            total += ((x1 - x2).powi(2) + (y1 - y2).powi(2)).sqrt();
        }
        Ok(total)
    }

    // ---- Termination ----

    #[test]
    fn test_observation_count_is_generations_plus_one() {
        let config = EvolutionConfig::default()
            .with_population_size(10)
            .with_max_generations(25)
            .with_seed(42)
            .with_parallel(false);
        let mut engine =
            EvolutionEngine::new(RealVectorRepresentation::new(3, -1.0, 1.0), sphere(), config);
        let log = record(&mut engine);

        let result = engine.evolve().unwrap();

        let gens: Vec<usize> = log.borrow().iter().map(|o| o.generation).collect();
        assert_eq!(gens, (0..=25).collect::<Vec<_>>());
        assert_eq!(result.generations, 25);
        assert_eq!(result.fitness_history.len(), 26);
        assert_eq!(result.termination_reason, "generation limit reached");
        assert!(!result.cancelled);
    }

    #[test]
    fn test_zero_generations_observes_initial_population_only() {
        let config = EvolutionConfig::default()
            .with_population_size(5)
            .with_max_generations(0)
            .with_seed(1);
        let evaluator = FitnessFn::new(FitnessOrdering::LowerIsBetter, ring_tour_length);
        let mut engine =
            EvolutionEngine::new(PermutationRepresentation::indices(4), evaluator, config);
        let log = record(&mut engine);

        let result = engine.evolve().unwrap();
        assert_eq!(log.borrow().len(), 1);
        assert_eq!(result.generations, 0);
    }

    #[test]
    fn test_target_fitness_stops_early() {
        let config = EvolutionConfig::default()
            .with_population_size(10)
            .with_max_generations(1000)
            .with_seed(42);
        let mut engine =
            EvolutionEngine::new(RealVectorRepresentation::new(2, -1.0, 1.0), sphere(), config)
                .with_termination(TargetFitness(f64::MAX));

        let result = engine.evolve().unwrap();
        assert_eq!(result.generations, 0);
        assert_eq!(result.termination_reason, "target fitness reached");
    }

    #[test]
    fn test_stagnation_stops_converged_run() {
        // Identical candidates: nothing can ever improve.
        let config = EvolutionConfig::default()
            .with_population_size(6)
            .with_max_generations(1000)
            .with_seed(42);
        let representation =
            RealVectorRepresentation::new(3, 0.5, 0.5).with_mutation_probabilities(0.0, 0.0);
        let mut engine = EvolutionEngine::new(representation, sphere(), config)
            .with_termination(Stagnation::new(5));

        let result = engine.evolve().unwrap();
        assert_eq!(result.generations, 5);
        assert_eq!(result.termination_reason, "fitness stagnated");
    }

    #[test]
    fn test_cancelled_before_start_stops_after_initial_generation() {
        let config = EvolutionConfig::default()
            .with_population_size(10)
            .with_max_generations(10_000)
            .with_seed(42);
        let mut engine =
            EvolutionEngine::new(RealVectorRepresentation::new(3, -1.0, 1.0), sphere(), config);

        let cancel = Arc::new(AtomicBool::new(true));
        let result = engine.evolve_with_cancel(Some(cancel)).unwrap();

        assert!(result.cancelled);
        assert_eq!(result.generations, 0);
        assert_eq!(result.population.len(), 10);
    }

    #[test]
    fn test_cancellation_from_observer_thread() {
        let config = EvolutionConfig::default()
            .with_population_size(10)
            .with_max_generations(10_000)
            .with_seed(42);
        let mut engine =
            EvolutionEngine::new(RealVectorRepresentation::new(3, -1.0, 1.0), sphere(), config);

        let cancel = Arc::new(AtomicBool::new(false));
        let trigger = Arc::clone(&cancel);
        engine.add_observer(move |obs: &GenerationObservation<Vec<f64>>| {
            if obs.generation == 7 {
                trigger.store(true, Ordering::Relaxed);
            }
        });

        let result = engine.evolve_with_cancel(Some(cancel)).unwrap();
        assert!(result.cancelled);
        assert_eq!(result.generations, 7);
        assert_eq!(result.termination_reason, "cancelled");
    }

    // ---- Population size ----

    #[test]
    fn test_population_size_constant_with_odd_offspring_count() {
        let config = EvolutionConfig::default()
            .with_population_size(7)
            .with_elite_count(2)
            .with_max_generations(30)
            .with_seed(3);
        let mut engine =
            EvolutionEngine::new(RealVectorRepresentation::new(4, -2.0, 2.0), sphere(), config);
        let log = record(&mut engine);

        let result = engine.evolve().unwrap();
        assert!(log.borrow().iter().all(|o| o.population_size == 7));
        assert_eq!(result.population.len(), 7);
    }

    #[test]
    fn test_single_candidate_population() {
        let config = EvolutionConfig::default()
            .with_population_size(1)
            .with_max_generations(10)
            .with_seed(3);
        let evaluator = FitnessFn::new(FitnessOrdering::LowerIsBetter, ring_tour_length);
        let mut engine =
            EvolutionEngine::new(PermutationRepresentation::indices(5), evaluator, config);

        let result = engine.evolve().unwrap();
        assert_eq!(result.population.len(), 1);
        assert!(same_element_set(&result.best, &[0, 1, 2, 3, 4]));
    }

    // ---- Elitism ----

    #[test]
    fn test_breed_carries_elites_verbatim() {
        let config = EvolutionConfig::default()
            .with_population_size(8)
            .with_elite_count(3);
        let representation = RealVectorRepresentation::new(5, -3.0, 3.0)
            .with_swap_probability(0.5)
            .with_mutation_probabilities(1.0, 1.0);
        let engine = EvolutionEngine::new(representation, sphere(), config);

        let mut rng = create_rng(42);
        let population = generate_population(engine.representation(), 8, &mut rng).unwrap();
        let ranked = engine.evaluate(population, FitnessOrdering::LowerIsBetter).unwrap();
        let next = engine.breed(&ranked, FitnessOrdering::LowerIsBetter, &mut rng).unwrap();

        assert_eq!(next.len(), 8);
        for i in 0..3 {
            assert_eq!(next[i], ranked[i].candidate, "elite {i} was modified");
        }
    }

    #[test]
    fn test_elitism_never_loses_best() {
        let config = EvolutionConfig::default()
            .with_population_size(12)
            .with_elite_count(1)
            .with_max_generations(60)
            .with_seed(42);
        let representation =
            RealVectorRepresentation::new(6, -5.0, 5.0).with_mutation_probabilities(0.5, 0.5);
        let mut engine = EvolutionEngine::new(representation, sphere(), config);
        let log = record(&mut engine);

        engine.evolve().unwrap();

        let log = log.borrow();
        for pair in log.windows(2) {
            assert!(
                pair[1].best_fitness <= pair[0].best_fitness,
                "best got worse: {} -> {}",
                pair[0].best_fitness,
                pair[1].best_fitness
            );
            if pair[1].best_fitness == pair[0].best_fitness {
                assert_eq!(pair[1].best_candidate, pair[0].best_candidate);
            }
        }
    }

    // ---- Determinism ----

    #[test]
    fn test_same_seed_same_observations() {
        let run = || {
            let config = EvolutionConfig::default()
                .with_population_size(16)
                .with_elite_count(2)
                .with_max_generations(40)
                .with_seed(2024);
            let representation =
                PermutationRepresentation::indices(12).with_mutation_probability(0.3);
            let evaluator = FitnessFn::new(FitnessOrdering::LowerIsBetter, ring_tour_length);
            let mut engine = EvolutionEngine::new(representation, evaluator, config);
            let log = record(&mut engine);
            engine.evolve().unwrap();
            let trace: Vec<_> = log
                .borrow()
                .iter()
                .map(|o| {
                    (
                        o.generation,
                        o.best_fitness.to_bits(),
                        o.best_candidate.clone(),
                        o.population_size,
                    )
                })
                .collect();
            trace
        };
        assert_eq!(run(), run());
    }

    // ---- Failures ----

    #[test]
    fn test_evaluator_error_aborts_run() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let evaluator = FitnessFn::new(FitnessOrdering::LowerIsBetter, move |genes: &Vec<f64>| {
            if counter.fetch_add(1, Ordering::SeqCst) >= 25 {
                Err("evaluator exhausted".into())
            } else {
                Ok(genes[0].abs())
            }
        });
        let config = EvolutionConfig::default()
            .with_population_size(10)
            .with_max_generations(100)
            .with_seed(42)
            .with_parallel(false);
        let mut engine =
            EvolutionEngine::new(RealVectorRepresentation::new(1, -1.0, 1.0), evaluator, config);

        let err = engine.evolve().unwrap_err();
        assert!(matches!(err, EvolveError::Evaluator(_)));
        assert_eq!(calls.load(Ordering::SeqCst), 26);
    }

    #[test]
    fn test_invalid_config_fails_before_evaluation() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let evaluator = FitnessFn::new(FitnessOrdering::LowerIsBetter, move |_: &Vec<f64>| {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(0.0)
        });

        let config = EvolutionConfig::default()
            .with_population_size(4)
            .with_elite_count(4);
        let mut engine =
            EvolutionEngine::new(RealVectorRepresentation::new(2, 0.0, 1.0), evaluator, config);
        assert!(matches!(engine.evolve(), Err(EvolveError::Configuration(_))));

        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_invalid_representation_fails_before_evaluation() {
        let config = EvolutionConfig::default().with_population_size(4);
        let evaluator = FitnessFn::new(FitnessOrdering::LowerIsBetter, |_: &Vec<i32>| Ok(0.0));
        let mut engine =
            EvolutionEngine::new(PermutationRepresentation::new(vec![1, 1, 2]), evaluator, config);
        assert!(matches!(engine.evolve(), Err(EvolveError::Configuration(_))));
    }

    #[test]
    fn test_roulette_with_negative_scores_fails() {
        let evaluator =
            FitnessFn::new(FitnessOrdering::HigherIsBetter, |genes: &Vec<f64>| Ok(genes[0]));
        let config = EvolutionConfig::default()
            .with_population_size(4)
            .with_max_generations(3)
            .with_seed(42);
        let mut engine =
            EvolutionEngine::new(RealVectorRepresentation::new(1, -2.0, -1.0), evaluator, config);
        assert!(matches!(engine.evolve(), Err(EvolveError::InvalidFitness { .. })));
    }

    // ---- Optimization quality ----

    #[test]
    fn test_sphere_improves_with_tournament() {
        let config = EvolutionConfig::default()
            .with_population_size(50)
            .with_elite_count(2)
            .with_tournament_size(3)
            .with_max_generations(150)
            .with_seed(42)
            .with_parallel(false);
        let representation = RealVectorRepresentation::new(5, -5.0, 5.0)
            .with_mutation_probabilities(0.3, 0.2)
            .with_clamp_mutations(true);
        let mut engine = EvolutionEngine::new(representation, sphere(), config);

        let result = engine.evolve().unwrap();
        let initial = result.fitness_history[0];
        assert!(
            result.best_fitness < initial / 4.0,
            "expected a 4x improvement on 5D sphere, got {initial} -> {}",
            result.best_fitness
        );
    }

    #[test]
    fn test_shifted_ackley_with_roulette() {
        let config = EvolutionConfig::default()
            .with_population_size(20)
            .with_elite_count(1)
            .with_max_generations(200)
            .with_seed(7);
        let representation =
            RealVectorRepresentation::new(10, -5.0, 5.0).with_mutation_probabilities(0.2, 0.5);
        let mut engine = EvolutionEngine::new(representation, ShiftedAckley::new(10), config);

        let result = engine.evolve().unwrap();
        assert!(result.best_fitness > result.fitness_history[0]);
        assert!(result.best_fitness <= 10.0 + 1e-9);
    }

    #[test]
    fn test_ring_tour_keeps_permutations_and_improves() {
        let n = 15;
        let config = EvolutionConfig::default()
            .with_population_size(60)
            .with_elite_count(2)
            .with_tournament_size(3)
            .with_max_generations(200)
            .with_seed(42);
        let representation = PermutationRepresentation::indices(n).with_mutation_probability(0.3);
        let evaluator = FitnessFn::new(FitnessOrdering::LowerIsBetter, ring_tour_length);
        let mut engine = EvolutionEngine::new(representation, evaluator, config);

        let result = engine.evolve().unwrap();
        let elements: Vec<usize> = (0..n).collect();
        for record in &result.population {
            assert!(same_element_set(&record.candidate, &elements));
        }
        assert!(result.best_fitness < result.fitness_history[0]);
    }

    #[test]
    fn test_result_best_matches_history() {
        let config = EvolutionConfig::default()
            .with_population_size(10)
            .with_max_generations(20)
            .with_seed(5);
        let mut engine =
            EvolutionEngine::new(RealVectorRepresentation::new(3, -1.0, 1.0), sphere(), config);

        let result = engine.evolve().unwrap();
        let min = result.fitness_history.iter().cloned().fold(f64::INFINITY, f64::min);
        assert_eq!(result.best_fitness, min);
        assert_eq!(sphere().evaluate(&result.best).unwrap(), result.best_fitness);
    }
}

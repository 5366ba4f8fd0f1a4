//! Generational genetic search over fixed-endpoint tours.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::constructive::nearest_neighbor;
use crate::distance::DistanceMatrix;
use crate::local_search::two_opt_improve;
use crate::models::Tour;

use super::operators::{order_crossover, swap_mutation};

/// Genetic search parameters.
///
/// # Examples
///
/// ```
/// use route_seq::ga::GaConfig;
///
/// let config = GaConfig::default().with_generations(20);
/// assert_eq!(config.population_size, 50);
/// assert_eq!(config.generations, 20);
/// assert_eq!(config.mutation_rate, 0.2);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct GaConfig {
    /// Number of individuals per generation.
    pub population_size: usize,
    /// Number of generations to evolve.
    pub generations: usize,
    /// Per-child probability of a swap mutation.
    pub mutation_rate: f64,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            generations: 100,
            mutation_rate: 0.2,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, size: usize) -> Self {
        self.population_size = size.max(2);
        self
    }

    /// Sets the generation count.
    pub fn with_generations(mut self, generations: usize) -> Self {
        self.generations = generations;
        self
    }

    /// Sets the per-child mutation probability.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }
}

/// Evolves a near-optimal tour by genetic search.
///
/// Individuals are permutations of the free (non-endpoint) indices.
/// Each generation evaluates fitness as `1 / cost`, selects parents by
/// roulette wheel, produces one ordered-crossover child per non-elite
/// slot with swap mutation at the configured rate, and carries the
/// single best individual forward polished by 2-opt. The best tour
/// found over the whole run gets a final 2-opt polish before being
/// returned.
///
/// Instances with two or fewer free points skip the search entirely:
/// the permutation space is at most two orderings, which greedy
/// construction plus 2-opt already covers exactly.
///
/// # Examples
///
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
/// use route_seq::distance::DistanceMatrix;
/// use route_seq::ga::{genetic_optimize, GaConfig};
/// use route_seq::models::Point;
///
/// let points: Vec<Point> = (0..7)
///     .map(|i| Point::new(i as f64, ((i * 3) % 4) as f64).unwrap())
///     .collect();
/// let dm = DistanceMatrix::from_points(&points);
///
/// let mut rng = StdRng::seed_from_u64(9);
/// let tour = genetic_optimize(&dm, &GaConfig::default(), &mut rng);
/// assert!(tour.is_valid());
/// ```
pub fn genetic_optimize<R: Rng>(distances: &DistanceMatrix, config: &GaConfig, rng: &mut R) -> Tour {
    let n = distances.size();
    let free = n.saturating_sub(2);
    if free <= 2 {
        // Search space of at most 2 orderings
        return two_opt_improve(&nearest_neighbor(distances), distances);
    }

    let base: Vec<usize> = (1..n - 1).collect();
    let mut population: Vec<Vec<usize>> = (0..config.population_size.max(2))
        .map(|_| {
            let mut perm = base.clone();
            perm.shuffle(rng);
            perm
        })
        .collect();

    let mut best = population[0].clone();
    let mut best_cost = free_cost(&best, distances, n);

    for generation in 0..config.generations {
        let costs: Vec<f64> = population
            .iter()
            .map(|ind| free_cost(ind, distances, n))
            .collect();

        let elite_idx = costs
            .iter()
            .enumerate()
            .min_by(|a, b| a.1.partial_cmp(b.1).expect("costs are finite"))
            .map(|(i, _)| i)
            .expect("population is non-empty");

        // Elite survives polished by local search
        let elite = polish(&population[elite_idx], distances, n);
        let elite_cost = free_cost(&elite, distances, n);
        if elite_cost < best_cost {
            best = elite.clone();
            best_cost = elite_cost;
            log::debug!("generation {generation}: best cost {best_cost:.3}");
        }

        // Offspring are scored at the top of the next iteration, so
        // breeding after the last evaluation would only be thrown away
        if generation + 1 == config.generations {
            break;
        }

        // Duplicate points can drive a cost to zero; clamp so the
        // roulette total stays finite
        let fitness: Vec<f64> = costs.iter().map(|c| 1.0 / c.max(f64::EPSILON)).collect();
        let total_fitness: f64 = fitness.iter().sum();

        let mut next = Vec::with_capacity(population.len());
        next.push(elite);
        while next.len() < population.len() {
            let parent_a = roulette(&population, &fitness, total_fitness, rng);
            let parent_b = roulette(&population, &fitness, total_fitness, rng);
            let mut child = order_crossover(parent_a, parent_b, rng);
            if rng.random::<f64>() < config.mutation_rate {
                swap_mutation(&mut child, rng);
            }
            next.push(child);
        }
        population = next;
    }

    two_opt_improve(&wrap(&best, n), distances)
}

/// Fitness-proportional selection.
fn roulette<'a, R: Rng>(
    population: &'a [Vec<usize>],
    fitness: &[f64],
    total_fitness: f64,
    rng: &mut R,
) -> &'a [usize] {
    let mut pick = rng.random::<f64>() * total_fitness;
    for (individual, f) in population.iter().zip(fitness) {
        pick -= f;
        if pick <= 0.0 {
            return individual;
        }
    }
    population.last().expect("population is non-empty")
}

/// Wraps a free-index permutation with the fixed endpoints.
fn wrap(free: &[usize], n: usize) -> Tour {
    let mut indices = Vec::with_capacity(n);
    indices.push(0);
    indices.extend_from_slice(free);
    indices.push(n - 1);
    Tour::new(indices)
}

/// Cost of a free-index permutation including the endpoint edges.
fn free_cost(free: &[usize], distances: &DistanceMatrix, n: usize) -> f64 {
    wrap(free, n).cost(distances)
}

/// 2-opt-polishes a free-index permutation.
fn polish(free: &[usize], distances: &DistanceMatrix, n: usize) -> Vec<usize> {
    let improved = two_opt_improve(&wrap(free, n), distances);
    improved.indices()[1..n - 1].to_vec()
}

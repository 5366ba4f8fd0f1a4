//! Simulated annealing over fixed-endpoint tours.
//!
//! Stochastic refinement seeded from the nearest-neighbor construction.
//! Candidate moves swap two random non-endpoint positions; worse
//! candidates are accepted with the Metropolis probability
//! `exp(-(candidate - current) / temperature)`, which decays as the
//! temperature cools geometrically. The best tour ever seen is tracked
//! separately from the current state and is what gets returned, since
//! the walk can wander away from the optimum late in the run.
//!
//! # Reference
//!
//! Kirkpatrick, S., Gelatt, C.D., Vecchi, M.P. (1983). "Optimization by
//! simulated annealing", *Science* 220(4598), 671-680.

use rand::Rng;

use crate::constructive::nearest_neighbor;
use crate::distance::DistanceMatrix;
use crate::models::Tour;

/// Annealing schedule parameters.
///
/// The defaults run roughly 900 iterations (100.0 cooling by ×0.99 down
/// to 0.01) regardless of input size; callers with large instances can
/// widen the schedule.
///
/// # Examples
///
/// ```
/// use route_seq::annealing::SaConfig;
///
/// let config = SaConfig::default().with_cooling_rate(0.995);
/// assert_eq!(config.initial_temperature, 100.0);
/// assert_eq!(config.cooling_rate, 0.995);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SaConfig {
    /// Starting temperature.
    pub initial_temperature: f64,
    /// Geometric cooling factor applied each iteration.
    pub cooling_rate: f64,
    /// The run stops once the temperature falls to this value or below.
    pub min_temperature: f64,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 100.0,
            cooling_rate: 0.99,
            min_temperature: 0.01,
        }
    }
}

impl SaConfig {
    /// Sets the starting temperature.
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    /// Sets the geometric cooling factor.
    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    /// Sets the stopping temperature.
    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }
}

/// Refines a tour by simulated annealing.
///
/// Seeds from [`nearest_neighbor`] and returns the best tour observed
/// over the whole schedule, never a worse one than the seed. The caller
/// supplies the RNG, so a seeded generator makes the run reproducible.
///
/// # Examples
///
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
/// use route_seq::annealing::{simulated_annealing, SaConfig};
/// use route_seq::constructive::nearest_neighbor;
/// use route_seq::distance::DistanceMatrix;
/// use route_seq::models::Point;
///
/// let points: Vec<Point> = (0..6)
///     .map(|i| Point::new(i as f64, ((i * 7) % 5) as f64).unwrap())
///     .collect();
/// let dm = DistanceMatrix::from_points(&points);
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let tour = simulated_annealing(&dm, &SaConfig::default(), &mut rng);
/// assert!(tour.is_valid());
/// assert!(tour.cost(&dm) <= nearest_neighbor(&dm).cost(&dm));
/// ```
pub fn simulated_annealing<R: Rng>(
    distances: &DistanceMatrix,
    config: &SaConfig,
    rng: &mut R,
) -> Tour {
    let n = distances.size();
    let seed = nearest_neighbor(distances);
    if n <= 3 {
        // Fewer than two free positions: no swap move exists
        return seed;
    }

    let mut current = seed.indices().to_vec();
    let mut current_cost = distances.path_cost(&current);
    let mut best = current.clone();
    let mut best_cost = current_cost;

    let mut temperature = config.initial_temperature;
    while temperature > config.min_temperature {
        let mut candidate = current.clone();
        let (i, j) = random_free_pair(n, rng);
        candidate.swap(i, j);
        let candidate_cost = distances.path_cost(&candidate);

        if candidate_cost < best_cost {
            best = candidate.clone();
            best_cost = candidate_cost;
        }

        let accept = candidate_cost < current_cost
            || rng.random::<f64>() < (-(candidate_cost - current_cost) / temperature).exp();
        if accept {
            current = candidate;
            current_cost = candidate_cost;
        }

        temperature *= config.cooling_rate;
    }

    log::debug!("annealing done: best_cost={best_cost:.3}");
    Tour::new(best)
}

/// Picks two distinct random non-endpoint positions in a tour of `n`
/// points. Requires `n >= 4`.
fn random_free_pair<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    let i = rng.random_range(1..n - 1);
    let mut j = rng.random_range(1..n - 1);
    while j == i {
        j = rng.random_range(1..n - 1);
    }
    (i, j)
}

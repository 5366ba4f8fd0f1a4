//! Strategy dispatch and result aggregation.
//!
//! The dispatcher ties the pieces together: build the distance matrix
//! over `[start, waypoints…, end]`, run the selected strategy, then
//! compute the aggregate statistics (total distance, estimated
//! duration) from the final tour. Each call is a single-pass pipeline
//! with no state carried across calls; the RNG backing the stochastic
//! strategies is constructed per call, so concurrent optimizations need
//! no coordination.

mod brute_force;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::annealing::{simulated_annealing, SaConfig};
use crate::constructive::nearest_neighbor;
use crate::distance::DistanceMatrix;
use crate::ga::{genetic_optimize, GaConfig};
use crate::local_search::two_opt_improve;
use crate::models::{Algorithm, Problem, Solution};

pub use brute_force::brute_force;

/// Optimizes a problem with a fresh OS-seeded RNG.
///
/// The `nearest` and `2opt` strategies are fully deterministic; the
/// stochastic strategies vary across calls. Use [`optimize_seeded`] for
/// reproducible runs.
///
/// # Examples
///
/// ```
/// use route_seq::models::{Point, Problem};
/// use route_seq::solver;
///
/// let problem = Problem::new(
///     Point::new(30.00, 31.00).unwrap(),
///     Point::new(30.10, 31.20).unwrap(),
///     vec![
///         Point::new(30.05, 31.05).unwrap(),
///         Point::new(30.08, 31.15).unwrap(),
///     ],
/// );
///
/// let solution = solver::optimize(&problem);
/// assert_eq!(solution.route().len(), 4);
/// assert_eq!(solution.algorithm(), "Nearest Neighbor with 2-opt improvement");
/// ```
pub fn optimize(problem: &Problem) -> Solution {
    optimize_with_rng(problem, &mut StdRng::from_os_rng())
}

/// Optimizes a problem reproducibly from a fixed seed.
pub fn optimize_seeded(problem: &Problem, seed: u64) -> Solution {
    optimize_with_rng(problem, &mut StdRng::seed_from_u64(seed))
}

/// Optimizes a problem with a caller-supplied RNG.
pub fn optimize_with_rng<R: Rng>(problem: &Problem, rng: &mut R) -> Solution {
    let points = problem.points();
    let distances = DistanceMatrix::from_points(&points);
    log::debug!(
        "optimizing {} points with {:?}",
        points.len(),
        problem.algorithm()
    );

    let (tour, name) = match problem.algorithm() {
        Algorithm::Nearest => (nearest_neighbor(&distances), "Nearest Neighbor"),
        Algorithm::Simulated => (
            simulated_annealing(&distances, &SaConfig::default(), rng),
            "Simulated Annealing",
        ),
        Algorithm::Genetic => (
            genetic_optimize(&distances, &GaConfig::default(), rng),
            "Genetic Algorithm",
        ),
        Algorithm::TwoOpt => (
            two_opt_improve(&nearest_neighbor(&distances), &distances),
            "Nearest Neighbor with 2-opt improvement",
        ),
    };

    let total_distance = tour.cost(&distances);
    let duration_secs = total_distance / problem.travel_mode().average_speed_kmh() * 3600.0;
    let route = tour.indices().iter().map(|&i| points[i]).collect();

    Solution::new(
        tour,
        route,
        round2(total_distance),
        round2(duration_secs),
        name,
    )
}

/// Rounds to 2 decimal places.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

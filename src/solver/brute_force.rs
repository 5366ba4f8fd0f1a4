//! Exact solver by exhaustive enumeration.

use crate::distance::DistanceMatrix;
use crate::models::Tour;

/// Finds the exact optimal tour by trying every waypoint permutation.
///
/// Factorial time in the number of waypoints; intended for small
/// instances (up to roughly 10 points total), mainly as a ground-truth
/// oracle for testing the heuristics.
///
/// # Examples
///
/// ```
/// use route_seq::distance::DistanceMatrix;
/// use route_seq::solver::brute_force;
///
/// let dm = DistanceMatrix::from_data(
///     4,
///     vec![
///         0.0, 2.0, 1.0, 3.0,
///         2.0, 0.0, 1.0, 1.0,
///         1.0, 1.0, 0.0, 2.0,
///         3.0, 1.0, 2.0, 0.0,
///     ],
/// )
/// .unwrap();
///
/// let optimal = brute_force(&dm);
/// assert_eq!(optimal.indices(), &[0, 2, 1, 3]);
/// ```
pub fn brute_force(distances: &DistanceMatrix) -> Tour {
    let n = distances.size();
    if n <= 3 {
        return Tour::new((0..n).collect());
    }

    let mut free: Vec<usize> = (1..n - 1).collect();
    let mut best = free.clone();
    let mut best_cost = f64::INFINITY;
    permute(&mut free, 0, distances, n, &mut best, &mut best_cost);

    let mut indices = Vec::with_capacity(n);
    indices.push(0);
    indices.extend_from_slice(&best);
    indices.push(n - 1);
    Tour::new(indices)
}

fn permute(
    free: &mut Vec<usize>,
    k: usize,
    distances: &DistanceMatrix,
    n: usize,
    best: &mut Vec<usize>,
    best_cost: &mut f64,
) {
    if k == free.len() {
        let cost = distances.get(0, free[0])
            + distances.path_cost(free)
            + distances.get(free[free.len() - 1], n - 1);
        if cost < *best_cost {
            *best_cost = cost;
            best.clone_from(free);
        }
        return;
    }
    for i in k..free.len() {
        free.swap(k, i);
        permute(free, k + 1, distances, n, best, best_cost);
        free.swap(k, i);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constructive::nearest_neighbor;
    use crate::local_search::two_opt_improve;

    fn scattered_matrix(n: usize) -> DistanceMatrix {
        let mut dm = DistanceMatrix::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let d = 1.0 + ((i * 19 + j * 11) % 17) as f64;
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        dm
    }

    #[test]
    fn test_brute_force_degenerate() {
        let dm = DistanceMatrix::from_data(2, vec![0.0, 4.0, 4.0, 0.0]).expect("valid");
        assert_eq!(brute_force(&dm).indices(), &[0, 1]);
    }

    #[test]
    fn test_brute_force_line() {
        let mut dm = DistanceMatrix::new(5);
        for i in 0..5 {
            for j in 0..5 {
                dm.set(i, j, ((i as f64) - (j as f64)).abs());
            }
        }
        let optimal = brute_force(&dm);
        assert_eq!(optimal.indices(), &[0, 1, 2, 3, 4]);
        assert!((optimal.cost(&dm) - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_brute_force_is_lower_bound() {
        for n in 4..8 {
            let dm = scattered_matrix(n);
            let optimal_cost = brute_force(&dm).cost(&dm);
            let heuristic = two_opt_improve(&nearest_neighbor(&dm), &dm);
            assert!(
                heuristic.cost(&dm) >= optimal_cost - 1e-10,
                "heuristic beat the exact optimum at n={n}"
            );
        }
    }

    #[test]
    fn test_brute_force_valid() {
        let dm = scattered_matrix(7);
        assert!(brute_force(&dm).is_valid());
    }
}

//! 2-opt improvement for fixed-endpoint tours.
//!
//! # Algorithm
//!
//! For each pair of edges `(i, i+1)` and `(j, j+1)` with
//! `0 <= i < j <= n-2`, compute the change in length from reversing the
//! segment between them:
//!
//! ```text
//! delta = d(t[i], t[j]) + d(t[i+1], t[j+1]) - d(t[i], t[i+1]) - d(t[j], t[j+1])
//! ```
//!
//! If delta < 0, reverse `t[i+1..=j]` and accept the improvement
//! (first-improvement strategy). Sweeps repeat until one completes with
//! no improving move. Positions 0 and n-1 (the fixed endpoints) are
//! never moved.
//!
//! # Complexity
//!
//! O(n²) per sweep; typically few sweeps to convergence for tens of
//! points.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use crate::distance::DistanceMatrix;
use crate::models::Tour;

/// Improves a tour to a 2-opt local optimum.
///
/// The returned tour's cost is never greater than the input's, and the
/// fixed endpoints stay in place. No global-optimality guarantee.
///
/// # Examples
///
/// ```
/// use route_seq::local_search::two_opt_improve;
/// use route_seq::distance::DistanceMatrix;
/// use route_seq::models::{Point, Tour};
///
/// let points = vec![
///     Point::new(0.0, 0.0).unwrap(),
///     Point::new(0.0, 1.0).unwrap(),
///     Point::new(0.0, 2.0).unwrap(),
///     Point::new(0.0, 3.0).unwrap(),
/// ];
/// let dm = DistanceMatrix::from_points(&points);
///
/// // Visiting 2 before 1 zig-zags; 2-opt untangles it
/// let crossed = Tour::new(vec![0, 2, 1, 3]);
/// let improved = two_opt_improve(&crossed, &dm);
/// assert_eq!(improved.indices(), &[0, 1, 2, 3]);
/// assert!(improved.cost(&dm) <= crossed.cost(&dm));
/// ```
pub fn two_opt_improve(tour: &Tour, distances: &DistanceMatrix) -> Tour {
    let n = tour.len();
    if n <= 3 {
        // Nothing between the endpoints to reorder
        return tour.clone();
    }

    let mut current = tour.indices().to_vec();
    let mut improved = true;

    while improved {
        improved = false;
        for i in 0..n - 2 {
            for j in (i + 1)..n - 1 {
                let old_cost = distances.get(current[i], current[i + 1])
                    + distances.get(current[j], current[j + 1]);
                let new_cost = distances.get(current[i], current[j])
                    + distances.get(current[i + 1], current[j + 1]);
                if new_cost - old_cost < -1e-10 {
                    current[i + 1..=j].reverse();
                    improved = true;
                }
            }
        }
    }

    Tour::new(current)
}

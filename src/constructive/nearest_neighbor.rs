//! Nearest-neighbor constructive heuristic.
//!
//! Builds an initial fixed-endpoint tour greedily: starting from the
//! start point, always move to the nearest unvisited waypoint; the end
//! point joins only after every waypoint is consumed.
//!
//! # Complexity
//!
//! O(n²) where n = number of points.
//!
//! # Reference
//!
//! The simplest TSP constructive heuristic. Solution quality is
//! typically 15-25% above optimal, but it is deterministic and fast,
//! which makes it the seed for the improvement strategies.

use crate::distance::DistanceMatrix;
use crate::models::Tour;

/// Constructs an initial tour using the nearest-neighbor heuristic.
///
/// Index 0 is the start, index `size - 1` the end; the end is excluded
/// from candidacy until all waypoints are placed. Ties between equally
/// near waypoints break toward the lower index, so the result is fully
/// deterministic for a fixed matrix. With zero waypoints the tour
/// degenerates to `[start, end]`.
///
/// # Examples
///
/// ```
/// use route_seq::constructive::nearest_neighbor;
/// use route_seq::distance::DistanceMatrix;
/// use route_seq::models::Point;
///
/// // Points strung along the equator, supplied out of order
/// let points = vec![
///     Point::new(0.0, 0.0).unwrap(), // start
///     Point::new(0.0, 2.0).unwrap(),
///     Point::new(0.0, 1.0).unwrap(),
///     Point::new(0.0, 3.0).unwrap(), // end
/// ];
/// let dm = DistanceMatrix::from_points(&points);
///
/// let tour = nearest_neighbor(&dm);
/// assert_eq!(tour.indices(), &[0, 2, 1, 3]);
/// ```
pub fn nearest_neighbor(distances: &DistanceMatrix) -> Tour {
    let n = distances.size();
    if n <= 2 {
        return Tour::new((0..n).collect());
    }

    let mut remaining: Vec<usize> = (1..n - 1).collect();
    let mut order = Vec::with_capacity(n);
    order.push(0);
    let mut current = 0;

    while !remaining.is_empty() {
        let next = distances
            .nearest(current, &remaining)
            .expect("remaining is non-empty");
        remaining.retain(|&c| c != next);
        order.push(next);
        current = next;
    }

    order.push(n - 1);
    Tour::new(order)
}

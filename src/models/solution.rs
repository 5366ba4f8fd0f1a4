//! Optimization result type.

use serde::Serialize;

use super::{Point, Tour};

/// The result of a single optimization run.
///
/// Carries the final tour both as point indices ([`Solution::tour`]) and
/// as the ordered coordinate list ([`Solution::route`]), plus the
/// aggregate statistics the boundary layer reports. Serializes with the
/// response field names the surrounding service uses (`optimalRoute`,
/// `totalDistance`, `estimatedDuration`, `algorithm`).
///
/// # Examples
///
/// ```
/// use route_seq::models::{Algorithm, Point, Problem};
/// use route_seq::solver;
///
/// let start = Point::new(30.0, 31.0).unwrap();
/// let end = Point::new(30.1, 31.2).unwrap();
/// let problem = Problem::new(start, end, vec![]);
///
/// let solution = solver::optimize(&problem);
/// assert_eq!(solution.route(), &[start, end]);
/// assert!(solution.total_distance() > 0.0);
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct Solution {
    #[serde(skip)]
    tour: Tour,
    #[serde(rename = "optimalRoute")]
    route: Vec<Point>,
    #[serde(rename = "totalDistance")]
    total_distance: f64,
    #[serde(rename = "estimatedDuration")]
    estimated_duration: f64,
    algorithm: String,
}

impl Solution {
    /// Creates a solution from a final tour and its aggregates.
    pub fn new(
        tour: Tour,
        route: Vec<Point>,
        total_distance: f64,
        estimated_duration: f64,
        algorithm: impl Into<String>,
    ) -> Self {
        Self {
            tour,
            route,
            total_distance,
            estimated_duration,
            algorithm: algorithm.into(),
        }
    }

    /// The final tour as point indices into `[start, waypoints…, end]`.
    pub fn tour(&self) -> &Tour {
        &self.tour
    }

    /// The ordered coordinate list: start, sequenced waypoints, end.
    pub fn route(&self) -> &[Point] {
        &self.route
    }

    /// Total route length in kilometers, rounded to 2 decimal places.
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }

    /// Estimated travel time in seconds, rounded to 2 decimal places.
    pub fn estimated_duration(&self) -> f64 {
        self.estimated_duration
    }

    /// Human-readable name of the strategy actually used.
    pub fn algorithm(&self) -> &str {
        &self.algorithm
    }
}

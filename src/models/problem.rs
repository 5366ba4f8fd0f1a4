//! Problem definition: endpoints, waypoints, and strategy selection.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

use super::Point;

/// The optimization strategy to run.
///
/// Resolved once at the input boundary from a request tag; unknown tags
/// map to the default ([`Algorithm::TwoOpt`]) rather than failing, which
/// keeps the selection permissive without string-matching inside the
/// solver.
///
/// # Examples
///
/// ```
/// use route_seq::models::Algorithm;
///
/// assert_eq!(Algorithm::from_tag("genetic"), Algorithm::Genetic);
/// assert_eq!(Algorithm::from_tag("no-such-thing"), Algorithm::TwoOpt);
/// assert_eq!(Algorithm::default(), Algorithm::TwoOpt);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Algorithm {
    /// Nearest-neighbor construction only.
    Nearest,
    /// Nearest-neighbor construction followed by 2-opt improvement.
    #[default]
    #[serde(rename = "2opt")]
    TwoOpt,
    /// Simulated annealing seeded from nearest-neighbor.
    Simulated,
    /// Genetic search polished by 2-opt.
    Genetic,
}

impl Algorithm {
    /// Resolves a request tag, mapping unrecognized tags to the default.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "nearest" => Self::Nearest,
            "2opt" => Self::TwoOpt,
            "simulated" => Self::Simulated,
            "genetic" => Self::Genetic,
            _ => Self::TwoOpt,
        }
    }
}

impl From<String> for Algorithm {
    fn from(tag: String) -> Self {
        Self::from_tag(&tag)
    }
}

/// Travel mode used to turn distance into an estimated duration.
///
/// # Examples
///
/// ```
/// use route_seq::models::TravelMode;
///
/// assert_eq!(TravelMode::Walking.average_speed_kmh(), 5.0);
/// assert_eq!(TravelMode::from_tag("hovercraft"), TravelMode::Driving);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum TravelMode {
    #[default]
    Driving,
    Walking,
    Bicycling,
    Transit,
}

impl TravelMode {
    /// Resolves a request tag, mapping unrecognized tags to driving.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "driving" => Self::Driving,
            "walking" => Self::Walking,
            "bicycling" => Self::Bicycling,
            "transit" => Self::Transit,
            _ => Self::Driving,
        }
    }

    /// Assumed average speed for this mode, in km/h.
    pub fn average_speed_kmh(&self) -> f64 {
        match self {
            Self::Driving => 60.0,
            Self::Walking => 5.0,
            Self::Bicycling => 15.0,
            Self::Transit => 30.0,
        }
    }
}

impl From<String> for TravelMode {
    fn from(tag: String) -> Self {
        Self::from_tag(&tag)
    }
}

/// A route-sequencing problem: fixed start, fixed end, and an unordered
/// set of waypoints to visit in between.
///
/// The waypoint order supplied here is irrelevant; finding a good order
/// is the solver's job.
///
/// # Examples
///
/// ```
/// use route_seq::models::{Algorithm, Point, Problem, TravelMode};
///
/// let start = Point::new(30.0, 31.0).unwrap();
/// let end = Point::new(30.1, 31.2).unwrap();
/// let wp = Point::new(30.05, 31.05).unwrap();
///
/// let problem = Problem::new(start, end, vec![wp])
///     .with_algorithm(Algorithm::Genetic)
///     .with_travel_mode(TravelMode::Walking);
///
/// assert_eq!(problem.num_points(), 3);
/// assert_eq!(problem.algorithm(), Algorithm::Genetic);
/// ```
#[derive(Debug, Clone)]
pub struct Problem {
    start: Point,
    end: Point,
    waypoints: Vec<Point>,
    algorithm: Algorithm,
    travel_mode: TravelMode,
}

impl Problem {
    /// Creates a problem with the default strategy (2-opt) and travel
    /// mode (driving).
    pub fn new(start: Point, end: Point, waypoints: Vec<Point>) -> Self {
        Self {
            start,
            end,
            waypoints,
            algorithm: Algorithm::default(),
            travel_mode: TravelMode::default(),
        }
    }

    /// Creates a problem from optional endpoints, failing fast when
    /// either is absent.
    ///
    /// This is the boundary-layer constructor: a request that omitted
    /// `start` or `end` surfaces here as `None` and is rejected with
    /// [`Error::MissingEndpoint`], so absence is never conflated with a
    /// point at (0,0).
    pub fn from_parts(
        start: Option<Point>,
        end: Option<Point>,
        waypoints: Vec<Point>,
    ) -> Result<Self> {
        let start = start.ok_or(Error::MissingEndpoint("start"))?;
        let end = end.ok_or(Error::MissingEndpoint("end"))?;
        Ok(Self::new(start, end, waypoints))
    }

    /// Sets the optimization strategy.
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Sets the travel mode.
    pub fn with_travel_mode(mut self, travel_mode: TravelMode) -> Self {
        self.travel_mode = travel_mode;
        self
    }

    /// Start point.
    pub fn start(&self) -> Point {
        self.start
    }

    /// End point.
    pub fn end(&self) -> Point {
        self.end
    }

    /// Intermediate waypoints (unordered).
    pub fn waypoints(&self) -> &[Point] {
        &self.waypoints
    }

    /// Selected strategy.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Selected travel mode.
    pub fn travel_mode(&self) -> TravelMode {
        self.travel_mode
    }

    /// Total number of points including both endpoints.
    pub fn num_points(&self) -> usize {
        self.waypoints.len() + 2
    }

    /// The concatenated point list `[start, waypoints…, end]` the
    /// distance matrix is built over.
    pub fn points(&self) -> Vec<Point> {
        let mut points = Vec::with_capacity(self.num_points());
        points.push(self.start);
        points.extend_from_slice(&self.waypoints);
        points.push(self.end);
        points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(lat: f64, lng: f64) -> Point {
        Point::new(lat, lng).expect("valid")
    }

    #[test]
    fn test_algorithm_tags() {
        assert_eq!(Algorithm::from_tag("nearest"), Algorithm::Nearest);
        assert_eq!(Algorithm::from_tag("2opt"), Algorithm::TwoOpt);
        assert_eq!(Algorithm::from_tag("simulated"), Algorithm::Simulated);
        assert_eq!(Algorithm::from_tag("genetic"), Algorithm::Genetic);
        assert_eq!(Algorithm::from_tag(""), Algorithm::TwoOpt);
        assert_eq!(Algorithm::from_tag("NEAREST"), Algorithm::TwoOpt);
    }

    #[test]
    fn test_algorithm_deserialize_permissive() {
        let a: Algorithm = serde_json::from_str(r#""simulated""#).expect("valid");
        assert_eq!(a, Algorithm::Simulated);
        let a: Algorithm = serde_json::from_str(r#""bogus""#).expect("valid");
        assert_eq!(a, Algorithm::TwoOpt);
    }

    #[test]
    fn test_travel_mode_speeds() {
        assert_eq!(TravelMode::Driving.average_speed_kmh(), 60.0);
        assert_eq!(TravelMode::Walking.average_speed_kmh(), 5.0);
        assert_eq!(TravelMode::Bicycling.average_speed_kmh(), 15.0);
        assert_eq!(TravelMode::Transit.average_speed_kmh(), 30.0);
        // Unknown tag falls back to driving's speed
        assert_eq!(TravelMode::from_tag("rowing").average_speed_kmh(), 60.0);
    }

    #[test]
    fn test_problem_points_order() {
        let problem = Problem::new(p(0.0, 0.0), p(1.0, 1.0), vec![p(0.5, 0.5)]);
        let points = problem.points();
        assert_eq!(points.len(), 3);
        assert_eq!(points[0], p(0.0, 0.0));
        assert_eq!(points[1], p(0.5, 0.5));
        assert_eq!(points[2], p(1.0, 1.0));
    }

    #[test]
    fn test_problem_defaults() {
        let problem = Problem::new(p(0.0, 0.0), p(1.0, 1.0), vec![]);
        assert_eq!(problem.algorithm(), Algorithm::TwoOpt);
        assert_eq!(problem.travel_mode(), TravelMode::Driving);
    }

    #[test]
    fn test_from_parts_missing_endpoint() {
        let err = Problem::from_parts(None, Some(p(1.0, 1.0)), vec![]).unwrap_err();
        assert_eq!(err, Error::MissingEndpoint("start"));

        let err = Problem::from_parts(Some(p(1.0, 1.0)), None, vec![]).unwrap_err();
        assert_eq!(err, Error::MissingEndpoint("end"));

        assert!(Problem::from_parts(Some(p(0.0, 0.0)), Some(p(1.0, 1.0)), vec![]).is_ok());
    }
}

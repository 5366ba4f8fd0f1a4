//! # route-seq
//!
//! Route-sequencing optimization: given a fixed start, a fixed end, and
//! an unordered set of waypoints, find a visiting order that
//! approximately minimizes total great-circle travel distance, using
//! one of four interchangeable strategies.
//!
//! ## Modules
//!
//! - [`models`] — Domain types (Point, Problem, Tour, Solution, strategy enums)
//! - [`distance`] — Haversine distance and the pairwise distance matrix
//! - [`constructive`] — Nearest-neighbor tour construction
//! - [`local_search`] — 2-opt improvement
//! - [`annealing`] — Simulated annealing refinement
//! - [`ga`] — Genetic search (ordered crossover, roulette selection, elitism)
//! - [`solver`] — Strategy dispatch, aggregation, and the brute-force oracle
//!
//! ## Example
//!
//! ```
//! use route_seq::models::{Algorithm, Point, Problem};
//! use route_seq::solver;
//!
//! let problem = Problem::new(
//!     Point::new(30.00, 31.00).unwrap(),
//!     Point::new(30.10, 31.20).unwrap(),
//!     vec![
//!         Point::new(30.05, 31.05).unwrap(),
//!         Point::new(30.08, 31.15).unwrap(),
//!     ],
//! )
//! .with_algorithm(Algorithm::Genetic);
//!
//! let solution = solver::optimize(&problem);
//! assert_eq!(solution.route().len(), 4);
//! assert!(solution.total_distance() > 0.0);
//! ```

pub mod annealing;
pub mod constructive;
pub mod distance;
pub mod error;
pub mod ga;
pub mod local_search;
pub mod models;
pub mod solver;

pub use error::{Error, Result};

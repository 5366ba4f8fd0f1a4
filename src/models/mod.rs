//! Domain model types for route sequencing.
//!
//! Provides the core abstractions: validated geographic points, the
//! problem definition with strategy and travel-mode selection, tours as
//! fixed-endpoint permutations, and the solution aggregate.

mod point;
mod problem;
mod solution;
mod tour;

pub use point::Point;
pub use problem::{Algorithm, Problem, TravelMode};
pub use solution::Solution;
pub use tour::Tour;

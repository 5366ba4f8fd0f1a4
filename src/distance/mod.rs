//! Geographic distance model.
//!
//! - [`haversine_km`] — great-circle distance between two points
//! - [`DistanceMatrix`] — dense pairwise matrix over a point list

mod haversine;
mod matrix;

pub use haversine::{haversine_km, EARTH_RADIUS_KM};
pub use matrix::DistanceMatrix;

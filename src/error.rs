//! Crate error type.

use thiserror::Error as ThisError;

/// Errors surfaced at the input boundary.
///
/// Everything past input validation is infallible: the optimizers operate
/// on already-validated problems and return plain values.
#[derive(Debug, Clone, PartialEq, ThisError)]
pub enum Error {
    /// Latitude or longitude outside the valid degree ranges, or non-finite.
    #[error("coordinate out of range: lat={lat}, lng={lng}")]
    InvalidCoordinate {
        /// Offending latitude.
        lat: f64,
        /// Offending longitude.
        lng: f64,
    },
    /// A required endpoint (start or end) was not supplied.
    #[error("missing required endpoint: {0}")]
    MissingEndpoint(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;

//! Geographic point type.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A geographic coordinate in degrees.
///
/// Valid latitude is `[-90, 90]` and valid longitude is `[-180, 180]`;
/// [`Point::new`] rejects anything outside those ranges (or non-finite)
/// so the optimizers never see an out-of-domain coordinate.
/// Deserialization goes through the same validation, so parsed input
/// cannot sidestep the range check.
///
/// # Examples
///
/// ```
/// use route_seq::models::Point;
///
/// let p = Point::new(30.05, 31.25).unwrap();
/// assert_eq!(p.lat(), 30.05);
/// assert_eq!(p.lng(), 31.25);
///
/// assert!(Point::new(91.0, 0.0).is_err());
/// assert!(Point::new(0.0, 180.5).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPoint")]
pub struct Point {
    lat: f64,
    lng: f64,
}

/// Wire shape of a point before validation.
#[derive(Deserialize)]
struct RawPoint {
    lat: f64,
    lng: f64,
}

impl TryFrom<RawPoint> for Point {
    type Error = Error;

    fn try_from(raw: RawPoint) -> Result<Self> {
        Self::new(raw.lat, raw.lng)
    }
}

impl Point {
    /// Creates a validated point.
    ///
    /// Returns [`Error::InvalidCoordinate`] if either component is
    /// non-finite or outside the valid degree range.
    pub fn new(lat: f64, lng: f64) -> Result<Self> {
        if !lat.is_finite()
            || !lng.is_finite()
            || !(-90.0..=90.0).contains(&lat)
            || !(-180.0..=180.0).contains(&lng)
        {
            return Err(Error::InvalidCoordinate { lat, lng });
        }
        Ok(Self { lat, lng })
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    pub fn lng(&self) -> f64 {
        self.lng
    }
}

//! Haversine great-circle distance.

use crate::models::Point;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two points in kilometers.
///
/// Uses the haversine formula on a sphere of radius
/// [`EARTH_RADIUS_KM`]. Symmetric, zero for identical points, and
/// non-negative for all in-domain coordinates.
///
/// # Examples
///
/// ```
/// use route_seq::distance::haversine_km;
/// use route_seq::models::Point;
///
/// let a = Point::new(36.17, -115.14).unwrap(); // Las Vegas
/// let b = Point::new(34.05, -118.24).unwrap(); // Los Angeles
///
/// let d = haversine_km(a, b);
/// assert!(d > 350.0 && d < 400.0);
/// assert_eq!(haversine_km(a, a), 0.0);
/// ```
pub fn haversine_km(a: Point, b: Point) -> f64 {
    let lat1 = a.lat().to_radians();
    let lat2 = b.lat().to_radians();
    let dlat = (b.lat() - a.lat()).to_radians();
    let dlng = (b.lng() - a.lng()).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlng / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().asin();

    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(lat: f64, lng: f64) -> Point {
        Point::new(lat, lng).expect("valid")
    }

    #[test]
    fn test_identity() {
        assert_eq!(haversine_km(p(36.1, -115.1), p(36.1, -115.1)), 0.0);
        assert_eq!(haversine_km(p(0.0, 0.0), p(0.0, 0.0)), 0.0);
    }

    #[test]
    fn test_symmetry() {
        let a = p(30.0, 31.0);
        let b = p(30.1, 31.2);
        assert!((haversine_km(a, b) - haversine_km(b, a)).abs() < 1e-12);
    }

    #[test]
    fn test_known_distance() {
        // Las Vegas to Los Angeles, roughly 370 km
        let d = haversine_km(p(36.17, -115.14), p(34.05, -118.24));
        assert!(d > 350.0 && d < 400.0, "expected ~370 km, got {d}");
    }

    #[test]
    fn test_one_degree_of_latitude() {
        // One degree of latitude is ~111.19 km on a 6371 km sphere
        let d = haversine_km(p(0.0, 0.0), p(1.0, 0.0));
        assert!((d - 111.19).abs() < 0.1, "got {d}");
    }

    #[test]
    fn test_monotone_in_separation() {
        let origin = p(0.0, 0.0);
        let near = haversine_km(origin, p(0.0, 1.0));
        let far = haversine_km(origin, p(0.0, 2.0));
        assert!(far > near);
    }

    #[test]
    fn test_antipodal() {
        // Half the Earth's circumference: pi * R
        let d = haversine_km(p(0.0, 0.0), p(0.0, 180.0));
        assert!((d - std::f64::consts::PI * EARTH_RADIUS_KM).abs() < 1e-6);
    }
}

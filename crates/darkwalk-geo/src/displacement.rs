//! Great-circle distance and initial bearing.

use crate::coordinate::Coordinate;

/// Mean Earth radius in metres.
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Distance and initial bearing from an origin to a current position.
///
/// Derived per sample, never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Displacement {
    /// Great-circle distance in metres, non-negative.
    pub distance_m: f64,
    /// Initial bearing in degrees, in (-180, 180]. 0 = true north,
    /// +90 = east, 180 = south, -90 = west.
    pub bearing_deg: f64,
}

/// Computes the great-circle displacement from `origin` to `current`.
///
/// Distance uses the haversine formula with R = 6 371 000 m; bearing is
/// the standard initial-bearing two-argument arctangent, normalized to
/// (-180, 180]. Double precision throughout.
///
/// When `origin == current` the bearing is mathematically undefined; this
/// function returns the sentinel `0.0` (with distance `0.0`) rather than
/// an error.
#[must_use]
pub fn displacement(origin: Coordinate, current: Coordinate) -> Displacement {
    let lat1 = origin.latitude.to_radians();
    let lat2 = current.latitude.to_radians();
    let d_lat = (current.latitude - origin.latitude).to_radians();
    let d_lon = (current.longitude - origin.longitude).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    let distance_m = EARTH_RADIUS_M * c;

    let y = d_lon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos();
    let bearing_deg = normalize_bearing(y.atan2(x).to_degrees());

    Displacement {
        distance_m,
        bearing_deg,
    }
}

/// Folds a bearing in degrees into (-180, 180].
fn normalize_bearing(deg: f64) -> f64 {
    if deg <= -180.0 { deg + 360.0 } else { deg }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_zero_displacement_for_identical_points() {
        let here = Coordinate::new(59.3293, 18.0686);
        let d = displacement(here, here);
        assert!(d.distance_m.abs() < EPS);
        assert!(d.bearing_deg.abs() < EPS, "sentinel bearing is 0.0");
    }

    #[test]
    fn test_distance_is_symmetric() {
        let a = Coordinate::new(59.3293, 18.0686);
        let b = Coordinate::new(57.7089, 11.9746);
        let ab = displacement(a, b).distance_m;
        let ba = displacement(b, a).distance_m;
        assert!((ab - ba).abs() < 1e-6);
    }

    #[test]
    fn test_hundred_metres_north_of_equator() {
        // 0.0009 deg of latitude is roughly 100 m.
        let origin = Coordinate::new(0.0, 0.0);
        let north = Coordinate::new(0.0009, 0.0);
        let d = displacement(origin, north);
        assert!(d.distance_m > 99.0 && d.distance_m < 101.0);
        assert!(d.bearing_deg.abs() < EPS);
    }

    #[test]
    fn test_cardinal_bearings_from_equator() {
        let origin = Coordinate::new(0.0, 0.0);
        let east = displacement(origin, Coordinate::new(0.0, 0.0009));
        assert!((east.bearing_deg - 90.0).abs() < 1e-6);

        let south = displacement(origin, Coordinate::new(-0.0009, 0.0));
        assert!((south.bearing_deg - 180.0).abs() < 1e-6);

        let west = displacement(origin, Coordinate::new(0.0, -0.0009));
        assert!((west.bearing_deg + 90.0).abs() < 1e-6);
    }

    #[test]
    fn test_bearing_stays_in_half_open_range() {
        assert!((normalize_bearing(-180.0) - 180.0).abs() < EPS);
        assert!((normalize_bearing(180.0) - 180.0).abs() < EPS);
        assert!((normalize_bearing(-90.0) + 90.0).abs() < EPS);
    }

    #[test]
    fn test_stockholm_to_gothenburg_distance() {
        // Roughly 398 km between the two city centres.
        let sthlm = Coordinate::new(59.3293, 18.0686);
        let gbg = Coordinate::new(57.7089, 11.9746);
        let d = displacement(sthlm, gbg).distance_m;
        assert!(d > 390_000.0 && d < 410_000.0, "got {d}");
    }
}

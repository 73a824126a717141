//! Great-circle distance.
//!
//! Spherical Earth model, accurate to well under a percent at the scale of a
//! day's sightseeing.

use crate::itinerary::Coordinate;
use crate::traits::DistanceMetric;

/// Mean Earth radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Haversine distance between two points in meters.
pub fn haversine_distance(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lng = (lng2 - lng1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();

    EARTH_RADIUS_M * c
}

/// Planar (equirectangular) distance approximation in meters.
///
/// Good enough for offsets of a few hundred meters; used to size the GCJ-02
/// shift.
pub fn equirectangular_distance(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let mean_lat = ((lat1 + lat2) / 2.0).to_radians();
    let x = (lng2 - lng1).to_radians() * mean_lat.cos();
    let y = (lat2 - lat1).to_radians();
    EARTH_RADIUS_M * x.hypot(y)
}

/// Haversine metric for the clustering engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct Haversine;

impl DistanceMetric for Haversine {
    fn distance_m(&self, from: &Coordinate, to: &Coordinate) -> f64 {
        haversine_distance(from.lat, from.lng, to.lat, to.lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_haversine_same_point() {
        let dist = haversine_distance(39.915, 116.404, 39.915, 116.404);
        assert_eq!(dist, 0.0, "Same point should have zero distance");
    }

    #[test]
    fn test_haversine_known_distance() {
        // Beijing to Shanghai is ~1068 km in a straight line
        let dist = haversine_distance(39.915, 116.404, 31.231, 121.472);
        assert!(dist > 1_050_000.0 && dist < 1_090_000.0, "BJ to SH should be ~1068km, got {}", dist);
    }

    #[test]
    fn test_haversine_symmetric() {
        let a = haversine_distance(39.915, 116.404, 39.990, 116.310);
        let b = haversine_distance(39.990, 116.310, 39.915, 116.404);
        assert_eq!(a, b);
    }

    #[test]
    fn test_haversine_monotonic() {
        let near = haversine_distance(30.0, 120.0, 30.01, 120.0);
        let far = haversine_distance(30.0, 120.0, 30.02, 120.0);
        assert!(near < far);
    }

    #[test]
    fn test_one_arc_minute_latitude() {
        // 1/60 degree of latitude on a 6371 km sphere is ~1853 m
        let dist = haversine_distance(0.0, 0.0, 1.0 / 60.0, 0.0);
        assert!((dist - 1853.25).abs() < 0.5, "got {}", dist);
    }

    #[test]
    fn test_equirectangular_close_to_haversine() {
        let h = haversine_distance(39.915, 116.404, 39.9164, 116.4102);
        let e = equirectangular_distance(39.915, 116.404, 39.9164, 116.4102);
        assert!((h - e).abs() < 0.1, "haversine {} vs equirectangular {}", h, e);
    }

    #[test]
    fn test_nan_propagates() {
        assert!(haversine_distance(f64::NAN, 0.0, 0.0, 0.0).is_nan());
    }

    #[test]
    fn test_metric_uses_haversine() {
        let from = Coordinate::new(116.404, 39.915);
        let to = Coordinate::new(121.472, 31.231);
        assert_eq!(
            Haversine.distance_m(&from, &to),
            haversine_distance(from.lat, from.lng, to.lat, to.lng)
        );
    }
}

//! WGS84 <-> GCJ-02 conversion.
//!
//! Mainland Chinese map providers publish coordinates in GCJ-02, a frame
//! shifted from WGS84 by a smooth, position-dependent offset of a few hundred
//! meters. The offset polynomial below is the widely published reverse
//! engineered form; its constants must not be touched.
//!
//! Every function here is total: out-of-range input gives meaningless but
//! finite output, and NaN/Infinity pass straight through.

use std::f64::consts::PI;

use crate::itinerary::Coordinate;

/// Semi-major axis of the Krasovsky 1940 ellipsoid used by GCJ-02, meters.
const SEMI_MAJOR_AXIS: f64 = 6_378_245.0;

/// Squared first eccentricity of the same ellipsoid.
const ECCENTRICITY_SQ: f64 = 0.006_693_421_622_965_943_23;

// Rectangular region where the offset applies.
const CHINA_MIN_LNG: f64 = 72.004;
const CHINA_MAX_LNG: f64 = 137.8347;
const CHINA_MIN_LAT: f64 = 0.8293;
const CHINA_MAX_LAT: f64 = 55.8271;

const EXACT_TOLERANCE_DEG: f64 = 1e-9;
const EXACT_MAX_ITERATIONS: usize = 30;

/// Coarse geofence: true when the offset should NOT be applied.
pub fn out_of_china(lng: f64, lat: f64) -> bool {
    lng < CHINA_MIN_LNG || lng > CHINA_MAX_LNG || lat < CHINA_MIN_LAT || lat > CHINA_MAX_LAT
}

fn transform_lat(x: f64, y: f64) -> f64 {
    let mut ret = -100.0 + 2.0 * x + 3.0 * y + 0.2 * y * y + 0.1 * x * y + 0.2 * x.abs().sqrt();
    ret += (20.0 * (6.0 * x * PI).sin() + 20.0 * (2.0 * x * PI).sin()) * 2.0 / 3.0;
    ret += (20.0 * (y * PI).sin() + 40.0 * (y / 3.0 * PI).sin()) * 2.0 / 3.0;
    ret += (160.0 * (y / 12.0 * PI).sin() + 320.0 * (y * PI / 30.0).sin()) * 2.0 / 3.0;
    ret
}

fn transform_lng(x: f64, y: f64) -> f64 {
    let mut ret = 300.0 + x + 2.0 * y + 0.1 * x * x + 0.1 * x * y + 0.1 * x.abs().sqrt();
    ret += (20.0 * (6.0 * x * PI).sin() + 20.0 * (2.0 * x * PI).sin()) * 2.0 / 3.0;
    ret += (20.0 * (x * PI).sin() + 40.0 * (x / 3.0 * PI).sin()) * 2.0 / 3.0;
    ret += (150.0 * (x / 12.0 * PI).sin() + 300.0 * (x / 30.0 * PI).sin()) * 2.0 / 3.0;
    ret
}

/// GCJ-02 offset `(d_lng, d_lat)` in degrees, evaluated at the given point.
fn offset(lng: f64, lat: f64) -> (f64, f64) {
    let d_lat = transform_lat(lng - 105.0, lat - 35.0);
    let d_lng = transform_lng(lng - 105.0, lat - 35.0);

    let rad_lat = lat / 180.0 * PI;
    let magic = 1.0 - ECCENTRICITY_SQ * rad_lat.sin().powi(2);
    let sqrt_magic = magic.sqrt();

    let d_lat = (d_lat * 180.0) / ((SEMI_MAJOR_AXIS * (1.0 - ECCENTRICITY_SQ)) / (magic * sqrt_magic) * PI);
    let d_lng = (d_lng * 180.0) / (SEMI_MAJOR_AXIS / sqrt_magic * rad_lat.cos() * PI);
    (d_lng, d_lat)
}

/// Shift a WGS84 point into GCJ-02; identity outside China.
pub fn wgs84_to_gcj02(lng: f64, lat: f64) -> (f64, f64) {
    if out_of_china(lng, lat) {
        return (lng, lat);
    }
    let (d_lng, d_lat) = offset(lng, lat);
    (lng + d_lng, lat + d_lat)
}

/// Single-step inverse: subtracts the offset evaluated at the GCJ-02 point.
///
/// Recovers WGS84 to ~1-2 m for the major cities; the residual can reach
/// ~5e-5 degrees in the steepest parts of the offset field. Use
/// [`gcj02_to_wgs84_exact`] when that matters.
pub fn gcj02_to_wgs84(lng: f64, lat: f64) -> (f64, f64) {
    if out_of_china(lng, lat) {
        return (lng, lat);
    }
    let (d_lng, d_lat) = offset(lng, lat);
    (lng - d_lng, lat - d_lat)
}

/// Iterative inverse, refined until the forward transform reproduces the
/// input to within 1e-9 degrees.
pub fn gcj02_to_wgs84_exact(lng: f64, lat: f64) -> (f64, f64) {
    if out_of_china(lng, lat) {
        return (lng, lat);
    }

    let (mut wgs_lng, mut wgs_lat) = gcj02_to_wgs84(lng, lat);
    for _ in 0..EXACT_MAX_ITERATIONS {
        let (d_lng, d_lat) = offset(wgs_lng, wgs_lat);
        let err_lng = wgs_lng + d_lng - lng;
        let err_lat = wgs_lat + d_lat - lat;
        if err_lng.abs() < EXACT_TOLERANCE_DEG && err_lat.abs() < EXACT_TOLERANCE_DEG {
            break;
        }
        wgs_lng -= err_lng;
        wgs_lat -= err_lat;
    }
    (wgs_lng, wgs_lat)
}

/// [`wgs84_to_gcj02`] over a slice, order preserved.
pub fn batch_wgs84_to_gcj02(coords: &[(f64, f64)]) -> Vec<(f64, f64)> {
    coords.iter().map(|&(lng, lat)| wgs84_to_gcj02(lng, lat)).collect()
}

/// [`gcj02_to_wgs84`] over a slice, order preserved.
pub fn batch_gcj02_to_wgs84(coords: &[(f64, f64)]) -> Vec<(f64, f64)> {
    coords.iter().map(|&(lng, lat)| gcj02_to_wgs84(lng, lat)).collect()
}

/// Hint only: whether a point could be an unshifted WGS84 coordinate.
///
/// The GCJ-02 shift is a smooth field of a few hundred meters with no gaps,
/// so every point inside the region is both a plausible WGS84 point and a
/// plausible GCJ-02 point. Inside the region this is therefore the geofence:
/// it is false outside, false where the forward shift would leave the region
/// or is not finite, and true everywhere else, including points that are
/// already GCJ-02. Callers must not treat it as a frame detector.
pub fn is_possibly_wgs84(lng: f64, lat: f64) -> bool {
    if out_of_china(lng, lat) {
        return false;
    }
    let (gcj_lng, gcj_lat) = wgs84_to_gcj02(lng, lat);
    gcj_lng.is_finite() && gcj_lat.is_finite() && !out_of_china(gcj_lng, gcj_lat)
}

impl Coordinate {
    /// This coordinate, read as WGS84, shifted into GCJ-02.
    pub fn to_gcj02(&self) -> Coordinate {
        let (lng, lat) = wgs84_to_gcj02(self.lng, self.lat);
        Coordinate::new(lng, lat)
    }

    /// This coordinate, read as GCJ-02, shifted back to WGS84 (single step).
    pub fn to_wgs84(&self) -> Coordinate {
        let (lng, lat) = gcj02_to_wgs84(self.lng, self.lat);
        Coordinate::new(lng, lat)
    }
}

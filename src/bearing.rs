//! Planar bearing/distance primitives
//!
//! All distances are in nautical miles (one arc-minute of latitude = 1 NM),
//! all azimuths in degrees clockwise from true north. The math is a planar
//! equirectangular approximation, not great-circle geodesics: longitude
//! deltas are scaled by the cosine of the *origin* latitude so that
//! [`bearing_between`] and [`destination_point`] are exact numeric inverses
//! of each other.

use crate::types::GeoPoint;

/// Nautical miles per degree of latitude
const NM_PER_DEG: f64 = 60.0;

/// A computed azimuth/distance pair
///
/// Derived from two points, never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bearing {
    /// Degrees clockwise from true north, in [0, 360)
    pub azimuth_deg: f64,
    /// Nautical miles, >= 0
    pub distance: f64,
}

/// Compute azimuth and distance from `a` to `b`
///
/// Identical points yield azimuth 0 and distance 0 (never NaN).
pub fn bearing_between(a: GeoPoint, b: GeoPoint) -> Bearing {
    let dlat = (b.latitude - a.latitude) * NM_PER_DEG;
    let dlon = (b.longitude - a.longitude) * NM_PER_DEG * a.latitude.to_radians().cos();

    let distance = dlat.hypot(dlon);
    let mut azimuth_deg = dlon.atan2(dlat).to_degrees();
    if azimuth_deg < 0.0 {
        azimuth_deg += 360.0;
    }

    Bearing {
        azimuth_deg,
        distance,
    }
}

/// Compute the point at `azimuth_deg`/`distance` from `origin`
///
/// Exact inverse of [`bearing_between`]: both use the cosine of the origin
/// latitude for the longitude scale, so
/// `bearing_between(p, destination_point(p, az, d))` reproduces `(az, d)`
/// up to floating-point rounding.
pub fn destination_point(origin: GeoPoint, azimuth_deg: f64, distance: f64) -> GeoPoint {
    let az = azimuth_deg.to_radians();
    let dlat = distance * az.cos() / NM_PER_DEG;
    let dlon = distance * az.sin() / (NM_PER_DEG * origin.latitude.to_radians().cos());

    GeoPoint::new(origin.latitude + dlat, origin.longitude + dlon)
}

/// Convert a mathematical angle (degrees, counter-clockwise from east) to a
/// compass azimuth (degrees, clockwise from north)
///
/// This is the exact piecewise rule the display code hand-tuned, including
/// its boundary behavior at 0°/90°/180°/360°; do not replace it with a
/// generic `(90 - angle).rem_euclid(360)`, which differs at the wrap
/// boundaries. Inputs outside [-360, 360] fall through unchanged.
pub fn angle_to_azimuth(angle_deg: f64) -> f64 {
    if (0.0..=90.0).contains(&angle_deg) {
        90.0 - angle_deg
    } else if angle_deg > 90.0 && angle_deg <= 180.0 {
        360.0 + (90.0 - angle_deg)
    } else if angle_deg < 0.0 && angle_deg >= -180.0 {
        90.0 - angle_deg
    } else if angle_deg > 180.0 && angle_deg <= 360.0 {
        450.0 - angle_deg
    } else if angle_deg < -180.0 && angle_deg >= -360.0 {
        -270.0 - angle_deg
    } else {
        angle_deg
    }
}

/// Mathematical angle (radians) of the direction from `a` to `b`
///
/// `atan2` over raw degree deltas, latitude as y and longitude as x. The
/// missing cosine scale mirrors the flat lat/lon projection the original
/// display code used for this angle; keeping it ensures cones match its
/// output.
pub fn plane_angle(a: GeoPoint, b: GeoPoint) -> f64 {
    let dx = b.longitude - a.longitude;
    let dy = b.latitude - a.latitude;
    dy.atan2(dx)
}

/// Half-angle (radians) subtended at `a` by the tangent lines to the circle
/// of radius `r` around `b`
///
/// Callers must ensure `r <= distance(a, b)` before calling; the `asin`
/// argument is not clamped here.
pub fn tangency_angle(a: GeoPoint, b: GeoPoint, r: f64) -> f64 {
    let bearing = bearing_between(a, b);
    (r / bearing.distance).asin()
}

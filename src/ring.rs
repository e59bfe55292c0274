//! Discretized uncertainty circles
//!
//! Rings serve two purposes: standalone "uncertainty ring" display around
//! individual track points, and the terminal half-circle that caps a cone.

use crate::bearing::{angle_to_azimuth, destination_point};
use crate::types::GeoPoint;

/// Default number of vertices in a full ring
///
/// 72 five-degree steps plus the repeated closing point.
pub const RING_POINTS: usize = 73;

/// Number of vertices in the terminal half-circle cap
pub const HALF_CIRCLE_POINTS: usize = 11;

/// Discretize the circle of `radius` around `center`
///
/// Produces `point_count` points stepping the azimuth from 0° to 360° in
/// equal increments of `360 / (point_count - 1)`; the first and last points
/// coincide, closing the ring. `point_count` must be at least 2.
pub fn generate_ring(center: GeoPoint, radius: f64, point_count: usize) -> Vec<GeoPoint> {
    let angle_delta = 360.0 / (point_count.saturating_sub(1).max(1)) as f64;

    let mut azimuth = 0.0;
    let mut points = Vec::with_capacity(point_count);
    for _ in 0..point_count {
        points.push(destination_point(center, azimuth, radius));
        azimuth += angle_delta;
    }
    points
}

/// The half-circle capping the end of a cone
///
/// Eleven points spanning 150° in 15° increments, starting one increment
/// past `start_angle` (the mathematical angle, in radians, from the last
/// track point toward the cone's current end point).
pub fn half_circle(
    center: GeoPoint,
    start_angle: f64,
    radius: f64,
) -> [GeoPoint; HALF_CIRCLE_POINTS] {
    std::array::from_fn(|i| {
        let af = (start_angle + (i + 1) as f64 * 15.0f64.to_radians()).to_degrees();
        let az = angle_to_azimuth(af);
        destination_point(center, az, radius)
    })
}

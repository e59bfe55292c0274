//! Circle tangency solver
//!
//! Computes the points where the cone outline grazes the uncertainty circle
//! around a track point, for the right or left side of the track. Three
//! problems are solved: the single perpendicular point (inside-circle
//! fallback and tail rule), the point-to-circle tangent arc at the head of
//! a track, and the circle-to-circle tangent arc between consecutive
//! uncertainty circles.
//!
//! The azimuth-wrap branch tables below look ad hoc but are reproduced
//! exactly from the operational display code; the wrap boundaries
//! (0°/180°/360°) are where cones visibly distort if the cases are
//! "simplified" into one signed formula.

use crate::bearing::{angle_to_azimuth, bearing_between, destination_point, plane_angle,
                     tangency_angle};
use crate::types::GeoPoint;

/// Which side of the track the outline runs along
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Right,
    Left,
}

/// Whether a radius can form a tangent circle
///
/// NaN (the upstream missing sentinel), infinities, zero and negative
/// values all disqualify the point from tangency construction.
pub fn radius_is_usable(r: f64) -> bool {
    r.is_finite() && r > 0.0
}

/// The point on the circle 90° from the `p1`→`p2` direction
///
/// Offset −90° for the right side, +90° for the left. This is the
/// non-interpolated fallback used when `p1` lies inside the circle and for
/// the tail of the track; it is an approximation policy, not true tangency.
pub fn perpendicular_point(p1: GeoPoint, p2: GeoPoint, r: f64, side: Side) -> Option<GeoPoint> {
    if !radius_is_usable(r) {
        return None;
    }

    let mut af = plane_angle(p1, p2).to_degrees();
    af = match side {
        Side::Right => af - 90.0,
        Side::Left => af + 90.0,
    };
    let az = angle_to_azimuth(af);

    Some(destination_point(p2, az, r))
}

/// Tangent arc from an outside point `p1` to the circle around `p2`, swept
/// toward the direction of the next point `p3`
///
/// Returns `None` when the radius is degenerate (the caller skips the
/// point). With `p3` absent this degrades to the two-point stepped variant.
/// When `p1` lies inside the circle the single perpendicular point is
/// returned instead.
pub fn point_to_circle_arc(
    p1: GeoPoint,
    p2: GeoPoint,
    p3: Option<GeoPoint>,
    r: f64,
    side: Side,
) -> Option<Vec<GeoPoint>> {
    let Some(p3) = p3 else {
        return point_to_circle_steps(p1, p2, r, side);
    };

    if !radius_is_usable(r) {
        return None;
    }

    let b = bearing_between(p1, p2);
    let c = bearing_between(p2, p3);

    if b.distance < r {
        // first point is inside the circle
        return perpendicular_point(p1, p2, r, side).map(|pt| vec![pt]);
    }

    let af = plane_angle(p1, p2).to_degrees();
    let bt = tangency_angle(p1, p2, r).to_degrees();

    let az = match side {
        Side::Right => angle_to_azimuth(af - 90.0) + bt,
        Side::Left => angle_to_azimuth(af + 90.0) - bt,
    };

    let gap = (b.azimuth_deg - c.azimuth_deg).abs();
    let mut ddt = gap;
    if ddt > 270.0 {
        ddt = 360.0 - ddt;
    } else if ddt > 180.0 {
        ddt -= 180.0;
    } else if ddt > 90.0 {
        ddt -= 90.0;
    }

    // Four cases, right/left × next-bearing-greater/less, with explicit
    // handling of the >180° wrap. Not reducible to one signed formula.
    let dt = match side {
        Side::Right => {
            if c.azimuth_deg < b.azimuth_deg && gap < 90.0 {
                bt + ddt
            } else if c.azimuth_deg > b.azimuth_deg && gap > 180.0 {
                bt + ddt
            } else {
                bt - ddt
            }
        }
        Side::Left => {
            if c.azimuth_deg > b.azimuth_deg && gap < 90.0 {
                bt + ddt
            } else if c.azimuth_deg < b.azimuth_deg && gap > 180.0 {
                bt + ddt
            } else {
                bt - ddt
            }
        }
    };

    let mut n = dt as i32 / 5 + 1;
    if n <= 0 {
        n = 1;
    }
    let mut dtt = dt / n as f64;
    if dtt < 0.0 {
        dtt = 0.0;
        n = 1;
    }

    Some(sweep(p2, r, az, dtt, side, n))
}

/// Tangent arc from `p1` to the circle around `p2` with no look-ahead point
///
/// Sweeps from the tangent point through the full tangency angle in ≤5°
/// steps.
fn point_to_circle_steps(p1: GeoPoint, p2: GeoPoint, r: f64, side: Side) -> Option<Vec<GeoPoint>> {
    if !radius_is_usable(r) {
        return None;
    }

    let b = bearing_between(p1, p2);
    if b.distance < r {
        // first point is inside the circle
        return perpendicular_point(p1, p2, r, side).map(|pt| vec![pt]);
    }

    let af = plane_angle(p1, p2).to_degrees();
    let bt = tangency_angle(p1, p2, r).to_degrees();

    let az = match side {
        Side::Right => angle_to_azimuth(af - 90.0) + bt,
        Side::Left => angle_to_azimuth(af + 90.0) - bt,
    };

    let dt = bt;
    let n = dt as i32 / 5 + 1;
    let dtt = dt / n as f64;

    Some(sweep(p2, r, az, dtt, side, n))
}

/// Approximate tangent arc between the circles around `p2` and the next
/// point `p3`, entered from `p1`
///
/// The tail of a track passes `p3 = None`, which degrades to the single
/// perpendicular point against `p2`. When the next bearing does not open up
/// any new arc on the requested side, the same single-point degradation
/// applies (early exit).
pub fn circle_to_circle_arc(
    p1: GeoPoint,
    p2: Option<GeoPoint>,
    p3: Option<GeoPoint>,
    r: f64,
    side: Side,
) -> Option<Vec<GeoPoint>> {
    let p2 = p2?;

    let Some(p3) = p3 else {
        return Some(perpendicular_point(p1, p2, r, side).into_iter().collect());
    };

    if !radius_is_usable(r) {
        return None;
    }

    let b = bearing_between(p1, p2);
    let c = bearing_between(p2, p3);
    let x = (c.azimuth_deg - b.azimuth_deg).abs();

    let no_new_points = match side {
        Side::Right => c.azimuth_deg > b.azimuth_deg || x > 180.0,
        Side::Left => c.azimuth_deg < b.azimuth_deg && x < 90.0,
    };
    if no_new_points {
        return Some(perpendicular_point(p1, p2, r, side).into_iter().collect());
    }

    let dt = if x > 270.0 {
        360.0 - x
    } else if x > 180.0 {
        x - 180.0
    } else if x > 90.0 {
        x - 90.0
    } else {
        x
    };

    let af = plane_angle(p1, p2).to_degrees();
    let az = match side {
        Side::Right => angle_to_azimuth(af - 90.0),
        Side::Left => angle_to_azimuth(af + 90.0),
    };

    let n = dt as i32 / 5 + 1;
    let dtt = dt / n as f64;

    Some(sweep(p2, r, az, dtt, side, n))
}

/// Walk `n` points along the circle, stepping the azimuth by `dtt`
///
/// The right side sweeps with decreasing azimuth, the left side with
/// increasing azimuth.
fn sweep(center: GeoPoint, r: f64, mut az: f64, dtt: f64, side: Side, n: i32) -> Vec<GeoPoint> {
    let mut points = Vec::with_capacity(n.max(0) as usize);
    for _ in 0..n {
        points.push(destination_point(center, az, r));
        match side {
            Side::Right => az -= dtt,
            Side::Left => az += dtt,
        }
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_none, assert_some};

    const TOLERANCE: f64 = 1e-6;

    #[test]
    fn test_degenerate_radius() {
        let p1 = GeoPoint::new(0.0, 0.0);
        let p2 = GeoPoint::new(1.0, 0.0);
        let p3 = GeoPoint::new(2.0, 0.0);

        for r in [f64::NAN, 0.0, -10.0, f64::INFINITY] {
            assert_none!(perpendicular_point(p1, p2, r, Side::Right));
            assert_none!(point_to_circle_arc(p1, p2, Some(p3), r, Side::Right));
            assert_none!(point_to_circle_arc(p1, p2, None, r, Side::Left));
            assert_none!(circle_to_circle_arc(p1, Some(p2), Some(p3), r, Side::Right));
        }
    }

    #[test]
    fn test_inside_circle_fallback() {
        // P2 is 0.06 NM from P1; a 50 NM radius swallows P1 entirely.
        let p1 = GeoPoint::new(0.0, 0.0);
        let p2 = GeoPoint::new(0.0, 0.001);
        let p3 = GeoPoint::new(0.0, 0.002);
        let r = 50.0;

        let points = assert_some!(point_to_circle_arc(p1, p2, Some(p3), r, Side::Right));
        assert_eq!(points.len(), 1);

        // perpendicular rule: bearing(P1,P2) is due east (90°), so the
        // right-side point sits at azimuth 180 from the center
        let bearing = bearing_between(p2, points[0]);
        assert!((bearing.azimuth_deg - 180.0).abs() < 1e-3);
        assert!((bearing.distance - r).abs() / r < TOLERANCE);

        let points = assert_some!(point_to_circle_arc(p1, p2, Some(p3), r, Side::Left));
        assert_eq!(points.len(), 1);
        let bearing = bearing_between(p2, points[0]);
        assert!(bearing.azimuth_deg < 1e-3 || (bearing.azimuth_deg - 360.0).abs() < 1e-3);
    }

    #[test]
    fn test_perpendicular_point_offsets() {
        let p1 = GeoPoint::new(0.0, 0.0);
        let p2 = GeoPoint::new(1.0, 0.0); // due north, 60 NM
        let r = 20.0;

        let right = perpendicular_point(p1, p2, r, Side::Right).unwrap();
        let left = perpendicular_point(p1, p2, r, Side::Left).unwrap();

        // heading north: right-side point east of the center, left-side west
        let right_bearing = bearing_between(p2, right);
        assert!((right_bearing.azimuth_deg - 90.0).abs() < 1e-3);
        let left_bearing = bearing_between(p2, left);
        assert!((left_bearing.azimuth_deg - 270.0).abs() < 1e-3);
    }

    #[test]
    fn test_point_to_circle_steps_subdivision() {
        // straight shot with tangency angle asin(30/120) ≈ 14.5°,
        // so the arc is subdivided into 14/5 + 1 = 3 steps
        let p1 = GeoPoint::new(0.0, 0.0);
        let p2 = GeoPoint::new(2.0, 0.0); // 120 NM
        let r = 30.0;

        let points = assert_some!(point_to_circle_arc(p1, p2, None, r, Side::Right));
        assert_eq!(points.len(), 3);
        for pt in &points {
            let d = bearing_between(p2, *pt).distance;
            assert!((d - r).abs() / r < TOLERANCE);
        }
    }

    #[test]
    fn test_circle_to_circle_straight_track() {
        // collinear northward track: the azimuth gap is zero, both sides
        // reduce to a single point on the circle
        let p1 = GeoPoint::new(0.0, 0.0);
        let p2 = GeoPoint::new(1.0, 0.0);
        let p3 = GeoPoint::new(2.0, 0.0);
        let r = 25.0;

        for side in [Side::Right, Side::Left] {
            let points = assert_some!(circle_to_circle_arc(p1, Some(p2), Some(p3), r, side));
            assert_eq!(points.len(), 1);
            let d = bearing_between(p2, points[0]).distance;
            assert!((d - r).abs() / r < TOLERANCE);
        }
    }

    #[test]
    fn test_circle_to_circle_outside_of_bend() {
        // heading east, then bending toward north-east: the right side is
        // the outside of the bend and fans extra points around the circle,
        // the left side closes up and takes the early exit
        let p1 = GeoPoint::new(0.0, 0.0);
        let p2 = GeoPoint::new(0.0, 1.0);
        let p3 = GeoPoint::new(1.0, 1.5);
        let r = 25.0;

        let right = assert_some!(circle_to_circle_arc(p1, Some(p2), Some(p3), r, Side::Right));
        assert!(right.len() > 1, "expected a fanned arc, got {}", right.len());
        for pt in &right {
            let d = bearing_between(p2, *pt).distance;
            assert!((d - r).abs() / r < TOLERANCE);
        }

        let left = assert_some!(circle_to_circle_arc(p1, Some(p2), Some(p3), r, Side::Left));
        assert_eq!(left.len(), 1);
    }

    #[test]
    fn test_circle_to_circle_tail() {
        let p1 = GeoPoint::new(0.0, 0.0);
        let p2 = GeoPoint::new(1.0, 0.0);

        let points = assert_some!(circle_to_circle_arc(p1, Some(p2), None, 25.0, Side::Right));
        assert_eq!(points.len(), 1);

        // degenerate radius at the tail: non-None but empty batch, the
        // caller still advances past the point
        let points = assert_some!(circle_to_circle_arc(p1, Some(p2), None, f64::NAN, Side::Right));
        assert!(points.is_empty());

        assert_none!(circle_to_circle_arc(p1, None, None, 25.0, Side::Right));
    }
}

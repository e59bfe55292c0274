//! Cone track builder
//!
//! Walks the ordered track points for one parameter, chaining
//! point-to-circle and circle-to-circle tangent arcs separately along the
//! right and left sides of the track, then merges the two sides with a
//! terminal half-circle into one closed polygon.

use crate::bearing::plane_angle;
use crate::ring::{HALF_CIRCLE_POINTS, half_circle};
use crate::tangency::{Side, circle_to_circle_arc, point_to_circle_arc};
use crate::types::{GeoPoint, Param, Track, TrackPoint};

/// Fewer usable points than this cannot anchor a tangent chain
const MIN_POINTS: usize = 3;

/// Build the closed cone polygon for one (track, parameter) pair
///
/// Returns `None` when too few points carry a usable radius, or when no
/// head segment can be found before the track ends. Callers treat a
/// cone-less track as a normal state and draw nothing.
pub(crate) fn build_cone(track: &Track, param: &Param) -> Option<Vec<GeoPoint>> {
    let (right, cap, left) = build_cone_sides(track, param)?;

    let mut cone = right;
    cone.extend(cap);
    cone.extend(left.into_iter().rev());
    Some(cone)
}

/// The three pieces of a cone: right side forward, terminal half-circle,
/// left side (still in forward order; the merge reverses it)
type ConeSides = (Vec<GeoPoint>, [GeoPoint; HALF_CIRCLE_POINTS], Vec<GeoPoint>);

fn build_cone_sides(track: &Track, param: &Param) -> Option<ConeSides> {
    let points = points_with_attribute(track, param);
    let size = points.len();
    if size < MIN_POINTS {
        return None;
    }

    let seed = points[0];
    let mut right = vec![seed.location()];
    let mut left = vec![seed.location()];

    // head segment: search forward from the track start for the first
    // point with a usable radius
    let mut sp2 = Some(points[1]);
    let mut sp3 = Some(points[2]);
    let mut nn = MIN_POINTS;

    let mut head = head_arc(seed, sp2, sp3, param, Side::Right);
    while head.is_none() {
        sp2 = sp3;
        sp3 = (nn < size).then(|| points[nn]);
        head = head_arc(seed, sp2, sp3, param, Side::Right);
        nn += 1;
        if nn >= size {
            break;
        }
    }

    // search exhausted without a usable radius: no cone for this track
    right.extend(head?);
    if let Some(batch) = head_arc(seed, sp2, sp3, param, Side::Left) {
        left.extend(batch);
    }

    // body segments: advance the chain anchor only after a segment with a
    // usable radius, so skipped points do not break the chain
    let mut sp1 = sp2?;
    let mut sp2 = sp3;
    for &point in &points[nn..size] {
        if let Some(batch) = body_arc(sp1, sp2, Some(point), param, Side::Right) {
            right.extend(batch);
            if let Some(batch) = body_arc(sp1, sp2, Some(point), param, Side::Left) {
                left.extend(batch);
            }
            sp1 = sp2?;
        }
        sp2 = Some(point);
    }

    // tail segment: no look-ahead point left
    if let Some(batch) = body_arc(sp1, sp2, None, param, Side::Right) {
        right.extend(batch);
        if let Some(batch) = body_arc(sp1, sp2, None, param, Side::Left) {
            left.extend(batch);
        }
    }

    if right.len() <= 1 || left.len() <= 1 {
        return None;
    }

    // terminal cap: half-circle around the last usable track point,
    // starting at the angle of the current cone end
    let last = sp2.unwrap_or(sp1);
    let end_point = *right.last()?;
    let start_angle = plane_angle(last.location(), end_point);
    let radius = last.attribute(param).unwrap_or(0.0);
    let cap = half_circle(last.location(), start_angle, radius);

    Some((right, cap, left))
}

/// Working point list for one parameter
///
/// The raw first point always seeds the list even without the attribute;
/// when it does carry the attribute it appears a second time. The
/// duplication is inherited from the operational display code and the
/// downstream geometry depends on it.
fn points_with_attribute<'a>(track: &'a Track, param: &Param) -> Vec<&'a TrackPoint> {
    let points = track.points();
    let mut working = Vec::with_capacity(points.len() + 1);
    if let Some(first) = points.first() {
        working.push(first);
    }
    working.extend(points.iter().filter(|p| p.attribute(param).is_some()));
    working
}

fn head_arc(
    sp1: &TrackPoint,
    sp2: Option<&TrackPoint>,
    sp3: Option<&TrackPoint>,
    param: &Param,
    side: Side,
) -> Option<Vec<GeoPoint>> {
    let sp2 = sp2?;
    let r = sp2.attribute(param).unwrap_or(f64::NAN);
    point_to_circle_arc(
        sp1.location(),
        sp2.location(),
        sp3.map(|p| p.location()),
        r,
        side,
    )
}

fn body_arc(
    sp1: &TrackPoint,
    sp2: Option<&TrackPoint>,
    sp3: Option<&TrackPoint>,
    param: &Param,
    side: Side,
) -> Option<Vec<GeoPoint>> {
    let r = sp2
        .and_then(|p| p.attribute(param))
        .unwrap_or(f64::NAN);
    circle_to_circle_arc(
        sp1.location(),
        sp2.map(|p| p.location()),
        sp3.map(|p| p.location()),
        r,
        side,
    )
}

//! High-level entry points for the rendering layer
//!
//! These are the only functions display code calls; the tangency, ring and
//! merge logic behind them is fully encapsulated. Both return `None` for
//! tracks that cannot produce the requested geometry — a normal,
//! displayable state (nothing drawn), never an error.

use crate::cone::build_cone;
use crate::ring::{RING_POINTS, generate_ring};
use crate::types::{ConePolygon, Param, Ring, RingPolygon, Track};

/// Build the forecast-uncertainty cone for one track and parameter
///
/// The polygon carries a derived way (`<way>_CONE`), the track's start
/// time, and the parameter it was built from.
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
/// use storm_cone::{build_cone_track, DateTime, GeoPoint, Param, Track, TrackPoint, Way};
///
/// let param = Param::new("track_error");
/// let points = (0..4)
///     .map(|i| {
///         TrackPoint::new(
///             GeoPoint::new(20.0 + i as f64, -75.0),
///             DateTime::new(2024, 8, 30, 6 * i as u8, 0),
///             6 * i,
///             HashMap::from([(param.clone(), 30.0)]),
///         )
///     })
///     .collect();
/// let track = Track::new(Way::new("GFS"), points)?;
///
/// let cone = build_cone_track(&track, &param).expect("usable radii on every point");
/// assert_eq!(cone.way.name(), "GFS_CONE");
/// # Ok::<(), storm_cone::Error>(())
/// ```
pub fn build_cone_track(track: &Track, param: &Param) -> Option<ConePolygon> {
    let points = build_cone(track, param)?;

    Some(ConePolygon {
        way: track.way().suffixed("CONE"),
        param: param.clone(),
        time: track.start_time(),
        points,
    })
}

/// Build the uncertainty rings for one track and parameter
///
/// One 73-point ring per track point whose attribute for `param` is
/// present and finite, each tagged with that point's time. Returns `None`
/// when no point qualifies.
pub fn build_ring_track(track: &Track, param: &Param) -> Option<RingPolygon> {
    let rings: Vec<Ring> = track
        .points()
        .iter()
        .filter_map(|point| {
            let radius = point.attribute(param).filter(|r| r.is_finite())?;
            Some(Ring {
                time: point.time(),
                points: generate_ring(point.location(), radius, RING_POINTS),
            })
        })
        .collect();

    if rings.is_empty() {
        return None;
    }

    Some(RingPolygon {
        way: track.way().suffixed("RING"),
        param: param.clone(),
        rings,
    })
}

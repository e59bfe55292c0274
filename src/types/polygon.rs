use crate::types::{DateTime, GeoPoint, Param, Way};

/// A closed forecast-uncertainty cone polygon
///
/// Built fresh for one (track, parameter) pair; the point list starts and
/// ends near the track's first point (right side forward, terminal
/// half-circle, left side reversed).
///
/// # Limitations
///
/// For tracks with sharply varying radii or sharp turns the outline is not
/// guaranteed to be a simple (non-self-intersecting) polygon. This matches
/// the operational display code and is documented behavior, not a defect.
#[derive(Debug, Clone, PartialEq)]
pub struct ConePolygon {
    /// Derived way of the cone (source way suffixed with `_CONE`)
    pub way: Way,
    /// Parameter that supplied the uncertainty radii
    pub param: Param,
    /// Start time of the source track
    pub time: DateTime,
    /// Ordered, closed vertex sequence
    pub points: Vec<GeoPoint>,
}

/// One discretized uncertainty circle around a track point
#[derive(Debug, Clone, PartialEq)]
pub struct Ring {
    /// Time of the track point the ring surrounds
    pub time: DateTime,
    /// Ordered vertex sequence; first and last points coincide
    pub points: Vec<GeoPoint>,
}

/// The uncertainty rings of one track for one parameter
#[derive(Debug, Clone, PartialEq)]
pub struct RingPolygon {
    /// Derived way of the rings (source way suffixed with `_RING`)
    pub way: Way,
    /// Parameter that supplied the radii
    pub param: Param,
    /// One ring per track point with a usable attribute value
    pub rings: Vec<Ring>,
}

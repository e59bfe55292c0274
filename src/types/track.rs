use crate::error::{Error, Result};
use crate::types::{DateTime, GeoPoint, Param, Way};
use std::collections::HashMap;

/// A single forecast-track point
///
/// Owned by its track and never mutated after construction; the geometry
/// code only reads it. Attribute values are radius-like quantities in the
/// same linear unit the bearing primitives use (nautical miles). A missing
/// parameter reads as `None`; a stored NaN is the upstream "missing"
/// sentinel and is treated as degenerate by the tangency solver.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackPoint {
    location: GeoPoint,
    time: DateTime,
    forecast_hour: i32,
    attributes: HashMap<Param, f64>,
}

impl TrackPoint {
    pub fn new(
        location: GeoPoint,
        time: DateTime,
        forecast_hour: i32,
        attributes: HashMap<Param, f64>,
    ) -> Self {
        Self {
            location,
            time,
            forecast_hour,
            attributes,
        }
    }

    pub fn location(&self) -> GeoPoint {
        self.location
    }

    pub fn time(&self) -> DateTime {
        self.time
    }

    pub fn forecast_hour(&self) -> i32 {
        self.forecast_hour
    }

    /// Look up an attribute value
    ///
    /// Returns `None` when the point does not carry the parameter. The
    /// value itself may still be NaN (upstream missing sentinel).
    pub fn attribute(&self, param: &Param) -> Option<f64> {
        self.attributes.get(param).copied()
    }
}

/// An ordered, time-increasing sequence of track points
///
/// Immutable for the duration of one cone/ring construction call.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    way: Way,
    start_time: DateTime,
    points: Vec<TrackPoint>,
}

impl Track {
    /// Create a track, validating the point sequence
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyTrack`] for an empty point list and
    /// [`Error::OutOfOrderTrack`] when a point's time goes backwards
    /// relative to its predecessor.
    pub fn new(way: Way, points: Vec<TrackPoint>) -> Result<Self> {
        let first = points.first().ok_or(Error::EmptyTrack)?;
        let start_time = first.time();

        for (index, pair) in points.windows(2).enumerate() {
            if pair[1].time() < pair[0].time() {
                return Err(Error::OutOfOrderTrack { index: index + 1 });
            }
        }

        Ok(Self {
            way,
            start_time,
            points,
        })
    }

    pub fn way(&self) -> &Way {
        &self.way
    }

    pub fn start_time(&self) -> DateTime {
        self.start_time
    }

    pub fn points(&self) -> &[TrackPoint] {
        &self.points
    }
}

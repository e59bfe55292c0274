use claims::{assert_none, assert_some};
use std::collections::HashMap;
use storm_cone::bearing::bearing_between;
use storm_cone::{DateTime, GeoPoint, Param, Track, TrackPoint, Way, build_cone_track, build_ring_track};

/// A 5-day forecast track loosely shaped like an Atlantic hurricane
/// recurving northeast, with the track-error radius growing with lead time.
fn forecast_track() -> (Track, Param) {
    let param = Param::new("track_error");
    let positions = [
        (15.0, -55.0),
        (16.2, -58.0),
        (17.6, -61.0),
        (19.3, -63.5),
        (21.4, -65.5),
        (24.0, -66.8),
        (27.0, -67.2),
        (30.2, -66.4),
        (33.5, -64.2),
    ];

    let points = positions
        .iter()
        .enumerate()
        .map(|(i, &(lat, lon))| {
            let forecast_hour = 12 * i as i32;
            let radius = 25.0 + 15.0 * i as f64;
            TrackPoint::new(
                GeoPoint::new(lat, lon),
                valid_time(forecast_hour),
                forecast_hour,
                HashMap::from([(param.clone(), radius)]),
            )
        })
        .collect();

    (Track::new(Way::new("OFCL"), points).unwrap(), param)
}

fn valid_time(forecast_hour: i32) -> DateTime {
    DateTime::new(2024, 9, 2 + (forecast_hour / 24) as u8, (forecast_hour % 24) as u8, 0)
}

#[test]
fn cone_for_recurving_forecast() {
    let (track, param) = forecast_track();
    let cone = assert_some!(build_cone_track(&track, &param));

    assert_eq!(cone.way.name(), "OFCL_CONE");
    assert_eq!(cone.time, DateTime::new(2024, 9, 2, 0, 0));

    // the polygon closes back at the track's first point
    let first = *cone.points.first().unwrap();
    let last = *cone.points.last().unwrap();
    assert_eq!(first, last);
    assert_eq!(first, GeoPoint::new(15.0, -55.0));

    // growing radii: the envelope is substantially longer than the cap alone
    assert!(cone.points.len() > 20, "got {} vertices", cone.points.len());

    // every vertex is finite and within plausible range of the track
    for pt in &cone.points {
        assert!(pt.latitude.is_finite() && pt.longitude.is_finite());
        assert!((5.0..45.0).contains(&pt.latitude));
        assert!((-80.0..-45.0).contains(&pt.longitude));
    }

    // determinism across repeated calls
    let again = assert_some!(build_cone_track(&track, &param));
    assert_eq!(cone, again);
}

#[test]
fn rings_for_recurving_forecast() {
    let (track, param) = forecast_track();
    let rings = assert_some!(build_ring_track(&track, &param));

    assert_eq!(rings.way.name(), "OFCL_RING");
    assert_eq!(rings.rings.len(), track.points().len());

    for (i, ring) in rings.rings.iter().enumerate() {
        assert_eq!(ring.points.len(), 73);

        let center = track.points()[i].location();
        let expected_radius = 25.0 + 15.0 * i as f64;
        for pt in &ring.points {
            let d = bearing_between(center, *pt).distance;
            assert!(
                (d - expected_radius).abs() / expected_radius < 1e-6,
                "ring {i}: distance {d}, expected {expected_radius}"
            );
        }
    }
}

#[test]
fn unknown_parameter_yields_nothing() {
    let (track, _) = forecast_track();
    let other = Param::new("wind_radius_64kt");

    assert_none!(build_cone_track(&track, &other));
    assert_none!(build_ring_track(&track, &other));
}

//! Position-history polylines.

use super::waypoints;
use crate::compute::places::resolve_coordinate;
use crate::time::Timestamp;
use geo::{Distance, Haversine, Point};
use kantai_types::{Coordinate, Places, Vessel};

/// Known positions of `vessel` at or before `time`, in event order.
///
/// Events without a place or with an unparseable date are left out, as are
/// events whose place cannot be resolved; the remaining points keep their
/// order. A result shorter than two points cannot be drawn as a line.
pub fn track_up_to(vessel: &Vessel, places: &Places, time: Timestamp) -> Vec<Coordinate> {
    waypoints(vessel)
        .filter_map(|waypoint| {
            let at = waypoint.time.filter(|t| *t <= time)?;
            match resolve_coordinate(waypoint.place, places) {
                Ok(coordinate) => Some(coordinate),
                Err(e) => {
                    log::warn!("Dropping track point of '{}' at {}: {}", vessel.name, at, e);
                    None
                }
            }
        })
        .collect()
}

/// Great-circle length of a track in meters.
pub fn track_distance(track: &[Coordinate]) -> f64 {
    track
        .windows(2)
        .map(|pair| {
            let from: Point<f64> = pair[0].into();
            let to: Point<f64> = pair[1].into();
            Haversine.distance(from, to)
        })
        .sum()
}

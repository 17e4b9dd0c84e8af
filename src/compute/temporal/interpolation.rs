//! Interpolated vessel positions.

use super::{Waypoint, waypoints};
use crate::compute::places::resolve_coordinate;
use crate::time::Timestamp;
use kantai_types::{Coordinate, Places, Vessel};

/// Position of `vessel` at `time`, or `None` when it cannot be placed.
///
/// Only events with a place take part. The vessel is unpositioned before
/// the first such event, after the last one, and when there are fewer than
/// two of them; positions are never extrapolated.
///
/// Otherwise the first consecutive pair `(ev1, ev2)` with
/// `time(ev1) <= time <= time(ev2)` is interpolated linearly, per axis, by
/// the fraction of the pair's time span that has elapsed. A pair with an
/// unparseable date never matches, so the vessel is unpositioned across
/// that gap. Two events at the same instant yield the first event's
/// coordinate. If either place of the matching pair cannot be resolved the
/// vessel is unpositioned at `time`.
///
/// # Examples
///
/// ```
/// use kantai::compute::temporal::position_at;
/// use kantai::Timestamp;
/// use kantai_types::{Coordinate, Place, Places, Vessel, VesselEvent};
///
/// let mut places = Places::new();
/// places.insert("a".into(), Place::new("A", Coordinate::new(10.0, 20.0)));
/// places.insert("b".into(), Place::new("B", Coordinate::new(30.0, 40.0)));
///
/// let vessel = Vessel::new("Nagato", "IJN").with_events(vec![
///     VesselEvent::new("2024-01-01", "a"),
///     VesselEvent::new("2024-01-11", "b"),
/// ]);
///
/// let midway = Timestamp::parse("2024-01-06").unwrap();
/// assert_eq!(position_at(&vessel, &places, midway), Some(Coordinate::new(20.0, 30.0)));
///
/// let before = Timestamp::parse("2023-12-31").unwrap();
/// assert_eq!(position_at(&vessel, &places, before), None);
/// ```
pub fn position_at(vessel: &Vessel, places: &Places, time: Timestamp) -> Option<Coordinate> {
    let placed: Vec<Waypoint<'_>> = waypoints(vessel).collect();

    let (first, last) = match (placed.first(), placed.last()) {
        (Some(first), Some(last)) if placed.len() >= 2 => (first, last),
        _ => return None,
    };
    if first.time.is_some_and(|t| time < t) || last.time.is_some_and(|t| time > t) {
        return None;
    }

    let (from, to, t1, t2) = placed.windows(2).find_map(|pair| {
        let (from, to) = (pair[0], pair[1]);
        let (t1, t2) = (from.time?, to.time?);
        (t1 <= time && time <= t2).then_some((from, to, t1, t2))
    })?;

    let resolved = resolve_coordinate(from.place, places)
        .and_then(|c1| resolve_coordinate(to.place, places).map(|c2| (c1, c2)));
    match resolved {
        Ok((c1, c2)) => Some(c1.lerp(c2, ratio(t1, t2, time))),
        Err(e) => {
            log::warn!(
                "Cannot position '{}' between {} and {}: {}",
                vessel.name,
                t1,
                t2,
                e
            );
            None
        }
    }
}

/// Elapsed fraction of `[start, end]` at `time`; zero for an empty span.
fn ratio(start: Timestamp, end: Timestamp, time: Timestamp) -> f64 {
    let span = end.as_millis() as f64 - start.as_millis() as f64;
    if span == 0.0 {
        return 0.0;
    }
    (time.as_millis() as f64 - start.as_millis() as f64) / span
}

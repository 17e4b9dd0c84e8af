//! Temporal computation over vessel histories.
//!
//! - `interpolation`: position of a vessel at a query time
//! - `tracks`: polyline of known positions up to a query time
//! - `bounds`: overall begin/end of a dataset

pub mod bounds;
pub mod interpolation;
pub mod tracks;

pub use bounds::time_bounds;
pub use interpolation::position_at;
pub use tracks::{track_distance, track_up_to};

use crate::time::{Timestamp, parse_date};
use kantai_types::{PlaceRef, Vessel};

/// A vessel event that has a location. `time` is `None` when its date
/// does not parse; such an event can never bracket a query time.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Waypoint<'a> {
    pub time: Option<Timestamp>,
    pub place: &'a PlaceRef,
}

/// Events with a place, in their stored order.
pub(crate) fn waypoints(vessel: &Vessel) -> impl Iterator<Item = Waypoint<'_>> {
    vessel.events.iter().filter_map(move |event| {
        let place = event.place.as_ref()?;
        let time = parse_date(&event.date);
        if time.is_none() {
            log::debug!(
                "Event of '{}' has unparseable date '{}'",
                vessel.name,
                event.date
            );
        }
        Some(Waypoint { time, place })
    })
}

#[cfg(test)]
pub(crate) mod fixtures {
    use kantai_types::{Coordinate, Place, Places, Vessel, VesselEvent};

    /// `{a: (10, 20), b: (30, 40), c: (50, 60)}`
    pub fn places() -> Places {
        let mut places = Places::new();
        places.insert("a".to_string(), Place::new("A", Coordinate::new(10.0, 20.0)));
        places.insert("b".to_string(), Place::new("B", Coordinate::new(30.0, 40.0)));
        places.insert("c".to_string(), Place::new("C", Coordinate::new(50.0, 60.0)));
        places
    }

    pub fn vessel(events: Vec<VesselEvent>) -> Vessel {
        Vessel::new("Test", "IJN").with_events(events)
    }
}

//! Snapshot of every vessel at one query time.

use crate::compute::temporal::{position_at, track_up_to};
use crate::time::Timestamp;
use kantai_types::{Coordinate, Dataset, VesselType};
use serde::Serialize;

/// Marker and track of a single vessel at a frame's time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VesselFrame {
    pub id: String,
    pub name: String,
    pub affiliation: String,
    pub vessel_type: VesselType,
    /// `None` when the vessel cannot be placed at this time
    pub position: Option<Coordinate>,
    pub track: Vec<Coordinate>,
}

impl VesselFrame {
    pub fn is_positioned(&self) -> bool {
        self.position.is_some()
    }

    /// A track needs two points before it can be drawn as a line.
    pub fn is_drawable(&self) -> bool {
        self.track.len() >= 2
    }
}

/// Everything the map needs to draw the fleet at `time`.
///
/// Vessels appear in identifier order. A vessel whose history has a bad
/// place reference still gets a frame; only the affected points are missing.
///
/// # Examples
///
/// ```
/// use kantai::{Frame, Timestamp};
/// use kantai_types::{Coordinate, Dataset, Place, Vessel, VesselEvent};
///
/// let dataset = Dataset::new()
///     .with_place("a", Place::new("A", Coordinate::new(10.0, 20.0)))
///     .with_place("b", Place::new("B", Coordinate::new(30.0, 40.0)))
///     .with_vessel(
///         "nagato",
///         Vessel::new("Nagato", "IJN").with_events(vec![
///             VesselEvent::new("2024-01-01", "a"),
///             VesselEvent::new("2024-01-11", "b"),
///         ]),
///     );
///
/// let frame = Frame::at(&dataset, Timestamp::parse("2024-01-06").unwrap());
/// let (vessel, position) = frame.markers().next().unwrap();
/// assert_eq!(vessel.name, "Nagato");
/// assert_eq!(position, Coordinate::new(20.0, 30.0));
/// assert!(!vessel.is_drawable());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub time: Timestamp,
    pub vessels: Vec<VesselFrame>,
}

impl Frame {
    pub fn at(dataset: &Dataset, time: Timestamp) -> Self {
        let vessels = dataset
            .vessels
            .iter()
            .map(|(id, vessel)| VesselFrame {
                id: id.clone(),
                name: vessel.name.clone(),
                affiliation: vessel.affiliation.clone(),
                vessel_type: vessel.vessel_type,
                position: position_at(vessel, &dataset.places, time),
                track: track_up_to(vessel, &dataset.places, time),
            })
            .collect();

        Self { time, vessels }
    }

    pub fn vessel(&self, id: &str) -> Option<&VesselFrame> {
        self.vessels.iter().find(|v| v.id == id)
    }

    /// Vessels that have a position at this time, with that position.
    pub fn markers(&self) -> impl Iterator<Item = (&VesselFrame, Coordinate)> {
        self.vessels
            .iter()
            .filter_map(|v| v.position.map(|position| (v, position)))
    }

    pub fn drawable_tracks(&self) -> impl Iterator<Item = &VesselFrame> {
        self.vessels.iter().filter(|v| v.is_drawable())
    }
}

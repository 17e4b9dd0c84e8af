use crate::event::TimelineEvent;
use crate::place::{Place, Places};
use crate::vessel::{Vessel, Vessels};
use serde::{Deserialize, Serialize};

/// The complete, immutable input of a timeline view.
///
/// # Examples
///
/// ```
/// use kantai_types::{Coordinate, Dataset, Place, Vessel, VesselEvent};
///
/// let dataset = Dataset::new()
///     .with_place("kure", Place::new("Kure", Coordinate::new(34.24, 132.55)))
///     .with_vessel(
///         "yamato",
///         Vessel::new("Yamato", "IJN").with_events(vec![VesselEvent::new("1941-12-16", "kure")]),
///     );
/// assert_eq!(dataset.places.len(), 1);
/// assert!(dataset.vessel("yamato").is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub places: Places,
    #[serde(default, alias = "entities")]
    pub vessels: Vessels,
    #[serde(default)]
    pub events: Vec<TimelineEvent>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn with_place(mut self, id: impl Into<String>, place: Place) -> Self {
        self.places.insert(id.into(), place);
        self
    }

    pub fn with_vessel(mut self, id: impl Into<String>, vessel: Vessel) -> Self {
        self.vessels.insert(id.into(), vessel);
        self
    }

    pub fn with_event(mut self, event: TimelineEvent) -> Self {
        self.events.push(event);
        self
    }

    pub fn place(&self, id: &str) -> Option<&Place> {
        self.places.get(id)
    }

    pub fn vessel(&self, id: &str) -> Option<&Vessel> {
        self.vessels.get(id)
    }
}

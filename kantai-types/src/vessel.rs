use crate::place::PlaceRef;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Vessel registry keyed by vessel identifier.
pub type Vessels = BTreeMap<String, Vessel>;

/// Hull classification of a vessel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VesselType {
    #[default]
    Battleship,
    Battlecruiser,
    AircraftCarrier,
    Cruiser,
    Destroyer,
    Submarine,
    #[serde(other)]
    Other,
}

/// What happened to a vessel at a dated event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Commissioning,
    Departure,
    Arrival,
    Waypoint,
    Battle,
    Damaged,
    Repair,
    Sinking,
    Decommissioning,
    #[serde(other)]
    Other,
}

/// A dated entry in a vessel's history.
///
/// `date` is kept as the raw ISO-8601 string from the source document;
/// parsing happens in the engine so that a bad date only affects the
/// computations that need it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VesselEvent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub date: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<EventKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place: Option<PlaceRef>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub references: Vec<String>,
}

impl VesselEvent {
    pub fn new(date: impl Into<String>, place: impl Into<PlaceRef>) -> Self {
        Self {
            name: None,
            date: date.into(),
            kind: None,
            place: Some(place.into()),
            references: Vec::new(),
        }
    }

    /// An event with no location, e.g. a refit recorded without a port.
    pub fn unplaced(date: impl Into<String>) -> Self {
        Self {
            name: None,
            date: date.into(),
            kind: None,
            place: None,
            references: Vec::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_kind(mut self, kind: EventKind) -> Self {
        self.kind = Some(kind);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vessel {
    pub name: String,
    pub affiliation: String,
    #[serde(rename = "type", default)]
    pub vessel_type: VesselType,
    #[serde(default)]
    pub events: Vec<VesselEvent>,
}

impl Vessel {
    pub fn new(name: impl Into<String>, affiliation: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            affiliation: affiliation.into(),
            vessel_type: VesselType::default(),
            events: Vec::new(),
        }
    }

    pub fn with_type(mut self, vessel_type: VesselType) -> Self {
        self.vessel_type = vessel_type;
        self
    }

    pub fn with_events(mut self, events: Vec<VesselEvent>) -> Self {
        self.events = events;
        self
    }

    pub fn push_event(&mut self, event: VesselEvent) {
        self.events.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vessel_from_json() {
        let json = r#"{
            "name": "Yamato",
            "affiliation": "IJN",
            "type": "battleship",
            "events": [
                {"date": "1941-12-16", "type": "commissioning", "place": "kure"},
                {"date": "1945-04-07", "type": "sinking", "place": {"coordinate": [30.43, 128.07]}},
                {"date": "1942-02-12", "name": "Flagship"}
            ]
        }"#;
        let vessel: Vessel = serde_json::from_str(json).unwrap();
        assert_eq!(vessel.vessel_type, VesselType::Battleship);
        assert_eq!(vessel.events.len(), 3);
        assert_eq!(vessel.events[0].kind, Some(EventKind::Commissioning));
        assert_eq!(vessel.events[0].place, Some(PlaceRef::named("kure")));
        assert!(vessel.events[2].place.is_none());
    }

    #[test]
    fn test_unknown_enums_fall_back_to_other() {
        let kind: EventKind = serde_json::from_str(r#""scuttled""#).unwrap();
        assert_eq!(kind, EventKind::Other);

        let vessel_type: VesselType = serde_json::from_str(r#""seaplane_tender""#).unwrap();
        assert_eq!(vessel_type, VesselType::Other);
    }

    #[test]
    fn test_event_kind_serializes_as_type() {
        let event = VesselEvent::new("1942-06-04", "midway").with_kind(EventKind::Battle);
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains(r#""type":"battle""#));
        assert!(!json.contains("references"));
    }
}

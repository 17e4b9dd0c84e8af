//! GeoJSON export of coordinates and frames for the map surface.
//!
//! GeoJSON positions are `[longitude, latitude]`, the reverse of the
//! dataset's `[lat, lng]` order.

use crate::config::ExportConfig;
use crate::error::{KantaiError, Result};
use crate::frame::Frame;
use geojson::{Feature, FeatureCollection, Geometry, Value};
use kantai_types::{Coordinate, Places};
use serde_json::Map;

fn position(coord: &Coordinate) -> Vec<f64> {
    vec![coord.lng(), coord.lat()]
}

fn feature(value: Value, properties: Map<String, serde_json::Value>) -> Feature {
    Feature {
        bbox: None,
        geometry: Some(Geometry::new(value)),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}

fn properties<const N: usize>(pairs: [(&str, &str); N]) -> Map<String, serde_json::Value> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), serde_json::Value::String(v.to_string())))
        .collect()
}

/// Converts a coordinate to a GeoJSON Point string.
pub fn coordinate_to_geojson(coord: &Coordinate) -> Result<String> {
    let geom = Geometry::new(Value::Point(position(coord)));

    serde_json::to_string(&geom).map_err(|e| {
        KantaiError::SerializationErrorWithContext(format!("Failed to serialize point: {}", e))
    })
}

/// Builds the feature collection drawn for `frame`.
///
/// Feature `kind` is one of `place`, `vessel` (position marker) or `track`
/// (LineString with a `stroke` colour taken from the palette by vessel
/// index, so a vessel keeps its colour from frame to frame).
pub fn frame_to_feature_collection(
    frame: &Frame,
    places: &Places,
    config: &ExportConfig,
) -> FeatureCollection {
    let mut features = Vec::new();

    if config.include_places {
        for (id, place) in places {
            features.push(feature(
                Value::Point(position(&place.coordinate)),
                properties([
                    ("kind", "place"),
                    ("id", id.as_str()),
                    ("name", place.name.as_str()),
                ]),
            ));
        }
    }

    for (vessel, coord) in frame.markers() {
        let mut props = properties([
            ("kind", "vessel"),
            ("id", vessel.id.as_str()),
            ("name", vessel.name.as_str()),
            ("affiliation", vessel.affiliation.as_str()),
        ]);
        if let Ok(vessel_type) = serde_json::to_value(vessel.vessel_type) {
            props.insert("type".to_string(), vessel_type);
        }
        features.push(feature(Value::Point(position(&coord)), props));
    }

    for (index, vessel) in frame.vessels.iter().enumerate() {
        if vessel.track.len() < config.min_track_points {
            continue;
        }
        let mut props = properties([
            ("kind", "track"),
            ("id", vessel.id.as_str()),
            ("name", vessel.name.as_str()),
        ]);
        if let Some(color) = config.color_for(index) {
            props.insert(
                "stroke".to_string(),
                serde_json::Value::String(color.to_string()),
            );
        }
        let line = vessel.track.iter().map(position).collect();
        features.push(feature(Value::LineString(line), props));
    }

    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}

/// Serializes [`frame_to_feature_collection`] to a string.
pub fn frame_to_geojson(frame: &Frame, places: &Places, config: &ExportConfig) -> Result<String> {
    let collection = frame_to_feature_collection(frame, places, config);

    serde_json::to_string(&collection).map_err(|e| {
        KantaiError::SerializationErrorWithContext(format!(
            "Failed to serialize frame at {}: {}",
            frame.time, e
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::Timestamp;
    use kantai_types::{Dataset, Place, Vessel, VesselEvent};

    fn dataset() -> Dataset {
        Dataset::new()
            .with_place("a", Place::new("A", Coordinate::new(10.0, 20.0)))
            .with_place("b", Place::new("B", Coordinate::new(30.0, 40.0)))
            .with_vessel(
                "kongo",
                Vessel::new("Kongo", "IJN").with_events(vec![
                    VesselEvent::new("2024-01-01", "a"),
                    VesselEvent::new("2024-01-03", "b"),
                ]),
            )
            .with_vessel(
                "yamato",
                Vessel::new("Yamato", "IJN").with_events(vec![
                    VesselEvent::new("2024-01-01", "b"),
                    VesselEvent::new("2024-01-02", "a"),
                    VesselEvent::new("2024-01-05", "b"),
                ]),
            )
    }

    fn kinds(collection: &FeatureCollection, kind: &str) -> Vec<Feature> {
        collection
            .features
            .iter()
            .filter(|f| f.property("kind").and_then(|k| k.as_str()) == Some(kind))
            .cloned()
            .collect()
    }

    #[test]
    fn test_coordinate_to_geojson_is_lng_lat() {
        let json = coordinate_to_geojson(&Coordinate::new(34.5, 132.25)).unwrap();
        assert!(json.contains("[132.25,34.5]"));
    }

    #[test]
    fn test_frame_features() {
        let dataset = dataset();
        let frame = Frame::at(&dataset, Timestamp::parse("2024-01-02").unwrap());
        let collection =
            frame_to_feature_collection(&frame, &dataset.places, &ExportConfig::default());

        assert_eq!(kinds(&collection, "place").len(), 2);
        assert_eq!(kinds(&collection, "vessel").len(), 2);

        let tracks = kinds(&collection, "track");
        assert_eq!(tracks.len(), 1);
        let track = &tracks[0];
        assert_eq!(track.property("id").and_then(|v| v.as_str()), Some("yamato"));
        // Second vessel in id order gets the second palette colour.
        assert_eq!(track.property("stroke").and_then(|v| v.as_str()), Some("red"));
        match track.geometry.as_ref().map(|g| &g.value) {
            Some(Value::LineString(line)) => {
                assert_eq!(line, &vec![vec![40.0, 30.0], vec![20.0, 10.0]]);
            }
            other => panic!("expected LineString, got {:?}", other),
        }
    }

    #[test]
    fn test_export_config_filters() {
        let dataset = dataset();
        let frame = Frame::at(&dataset, Timestamp::parse("2024-01-05").unwrap());
        let config = ExportConfig::default()
            .with_include_places(false)
            .with_min_track_points(3);
        let collection = frame_to_feature_collection(&frame, &dataset.places, &config);

        assert!(kinds(&collection, "place").is_empty());
        let tracks = kinds(&collection, "track");
        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks[0].property("name").and_then(|v| v.as_str()), Some("Yamato"));
    }

    #[test]
    fn test_frame_to_geojson_parses_back() {
        let dataset = dataset();
        let frame = Frame::at(&dataset, Timestamp::parse("2024-01-02").unwrap());
        let json = frame_to_geojson(&frame, &dataset.places, &ExportConfig::default()).unwrap();
        let parsed: FeatureCollection = json.parse().unwrap();
        assert_eq!(parsed.features.len(), 5);
    }
}

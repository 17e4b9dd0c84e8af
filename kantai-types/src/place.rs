use crate::coordinate::Coordinate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Place registry keyed by place identifier.
pub type Places = BTreeMap<String, Place>;

/// A named, fixed location such as a naval base or anchorage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub name: String,
    pub coordinate: Coordinate,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub references: Vec<String>,
}

impl Place {
    pub fn new(name: impl Into<String>, coordinate: Coordinate) -> Self {
        Self {
            name: name.into(),
            coordinate,
            references: Vec::new(),
        }
    }

    pub fn with_references(mut self, references: Vec<String>) -> Self {
        self.references = references;
        self
    }
}

/// Location of an event: either a key into the place registry or an
/// anonymous inline coordinate.
///
/// In the source document a named reference is a bare string and an inline
/// one is a `{ coordinate: [lat, lng] }` object.
///
/// # Examples
///
/// ```
/// use kantai_types::place::PlaceRef;
///
/// let named: PlaceRef = serde_json::from_str(r#""truk""#).unwrap();
/// assert_eq!(named, PlaceRef::named("truk"));
///
/// let inline: PlaceRef = serde_json::from_str(r#"{"coordinate": [7.5, 151.8]}"#).unwrap();
/// assert!(inline.name().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PlaceRef {
    Named(String),
    Inline { coordinate: Coordinate },
}

impl PlaceRef {
    pub fn named(id: impl Into<String>) -> Self {
        PlaceRef::Named(id.into())
    }

    pub fn inline(coordinate: Coordinate) -> Self {
        PlaceRef::Inline { coordinate }
    }

    /// Registry key, if this is a named reference.
    pub fn name(&self) -> Option<&str> {
        match self {
            PlaceRef::Named(id) => Some(id),
            PlaceRef::Inline { .. } => None,
        }
    }

    /// Inline coordinate, if this is an anonymous reference.
    pub fn coordinate(&self) -> Option<Coordinate> {
        match self {
            PlaceRef::Named(_) => None,
            PlaceRef::Inline { coordinate } => Some(*coordinate),
        }
    }
}

impl From<&str> for PlaceRef {
    fn from(id: &str) -> Self {
        PlaceRef::Named(id.to_string())
    }
}

impl From<Coordinate> for PlaceRef {
    fn from(coordinate: Coordinate) -> Self {
        PlaceRef::Inline { coordinate }
    }
}

//! Place reference resolution.

use crate::error::{KantaiError, Result};
use kantai_types::{Coordinate, PlaceRef, Places};

/// Resolve a place reference to a coordinate.
///
/// Inline references return their coordinate without consulting the
/// registry. Named references fail with [`KantaiError::PlaceNotFound`] when
/// the registry has no such key.
///
/// # Examples
///
/// ```
/// use kantai::compute::places::resolve_coordinate;
/// use kantai_types::{Coordinate, Place, PlaceRef, Places};
///
/// let mut places = Places::new();
/// places.insert("kure".into(), Place::new("Kure", Coordinate::new(34.24, 132.55)));
///
/// let kure = resolve_coordinate(&PlaceRef::named("kure"), &places).unwrap();
/// assert_eq!(kure, Coordinate::new(34.24, 132.55));
///
/// let inline = PlaceRef::inline(Coordinate::new(7.5, 151.8));
/// assert_eq!(resolve_coordinate(&inline, &Places::new()).unwrap(), Coordinate::new(7.5, 151.8));
///
/// assert!(resolve_coordinate(&PlaceRef::named("atlantis"), &places).is_err());
/// ```
pub fn resolve_coordinate(place_ref: &PlaceRef, places: &Places) -> Result<Coordinate> {
    match place_ref {
        PlaceRef::Named(id) => places
            .get(id)
            .map(|place| place.coordinate)
            .ok_or_else(|| KantaiError::PlaceNotFound(id.clone())),
        PlaceRef::Inline { coordinate } => Ok(*coordinate),
    }
}

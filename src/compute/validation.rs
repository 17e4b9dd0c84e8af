//! Validation for coordinates and dataset referential integrity.

use crate::error::{KantaiError, Result};
use kantai_types::{Coordinate, Dataset, PlaceRef};

/// Validates a coordinate has finite, in-range latitude and longitude.
///
/// Latitude: [-90.0, 90.0], Longitude: [-180.0, 180.0]
///
/// # Examples
///
/// ```
/// use kantai::compute::validation::validate_coordinate;
/// use kantai_types::Coordinate;
///
/// // Kure naval arsenal
/// assert!(validate_coordinate(&Coordinate::new(34.24, 132.55)).is_ok());
///
/// // Latitude and longitude swapped
/// assert!(validate_coordinate(&Coordinate::new(132.55, 34.24)).is_err());
/// ```
pub fn validate_coordinate(coord: &Coordinate) -> Result<()> {
    let (lat, lng) = (coord.lat(), coord.lng());

    if !lat.is_finite() {
        return Err(KantaiError::InvalidInput(format!(
            "Latitude must be finite, got: {}",
            lat
        )));
    }

    if !lng.is_finite() {
        return Err(KantaiError::InvalidInput(format!(
            "Longitude must be finite, got: {}",
            lng
        )));
    }

    if !(-90.0..=90.0).contains(&lat) {
        return Err(KantaiError::InvalidInput(format!(
            "Latitude out of range [-90.0, 90.0]: {}",
            lat
        )));
    }

    if !(-180.0..=180.0).contains(&lng) {
        return Err(KantaiError::InvalidInput(format!(
            "Longitude out of range [-180.0, 180.0]: {}",
            lng
        )));
    }

    Ok(())
}

/// Every integrity problem in `dataset`, as human-readable messages.
///
/// Checks place coordinates, inline coordinates and that every named place
/// reference exists in the registry. Dates are not checked: an unparseable
/// date only drops that event from time computations.
pub fn dataset_issues(dataset: &Dataset) -> Vec<String> {
    let mut issues = Vec::new();

    for (id, place) in &dataset.places {
        if let Err(e) = validate_coordinate(&place.coordinate) {
            issues.push(format!("Place '{}': {}", id, e));
        }
    }

    for (id, vessel) in &dataset.vessels {
        for (idx, event) in vessel.events.iter().enumerate() {
            if let Some(place_ref) = &event.place {
                check_place_ref(
                    dataset,
                    place_ref,
                    || format!("Vessel '{}' event {}", id, idx),
                    &mut issues,
                );
            }
        }
    }

    for (idx, event) in dataset.events.iter().enumerate() {
        check_place_ref(
            dataset,
            &event.place,
            || format!("Event {} ('{}')", idx, event.name),
            &mut issues,
        );
    }

    issues
}

fn check_place_ref(
    dataset: &Dataset,
    place_ref: &PlaceRef,
    context: impl Fn() -> String,
    issues: &mut Vec<String>,
) {
    match place_ref {
        PlaceRef::Named(id) => {
            if !dataset.places.contains_key(id) {
                issues.push(format!("{}: place '{}' is not defined", context(), id));
            }
        }
        PlaceRef::Inline { coordinate } => {
            if let Err(e) = validate_coordinate(coordinate) {
                issues.push(format!("{}: {}", context(), e));
            }
        }
    }
}

/// Fails with [`KantaiError::InvalidDataset`] listing every issue found.
///
/// # Examples
///
/// ```
/// use kantai::compute::validation::validate_dataset;
/// use kantai_types::{Dataset, Vessel, VesselEvent};
///
/// let dataset = Dataset::new().with_vessel(
///     "yamato",
///     Vessel::new("Yamato", "IJN").with_events(vec![VesselEvent::new("1941-12-16", "kure")]),
/// );
///
/// // "kure" is referenced but never defined
/// assert!(validate_dataset(&dataset).is_err());
/// ```
pub fn validate_dataset(dataset: &Dataset) -> Result<()> {
    let issues = dataset_issues(dataset);
    if issues.is_empty() {
        return Ok(());
    }
    Err(KantaiError::InvalidDataset(issues.join("; ")))
}

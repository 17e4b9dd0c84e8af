//! Timeline facade over an immutable dataset.

use crate::compute::geojson::frame_to_geojson;
use crate::compute::places::resolve_coordinate;
use crate::compute::temporal::{position_at, time_bounds, track_up_to};
use crate::compute::validation::validate_dataset;
use crate::config::Config;
use crate::error::{KantaiError, Result};
use crate::frame::Frame;
use crate::time::{TimeBounds, TimeRange, Timestamp};
use kantai_types::{Coordinate, Dataset, PlaceRef, Vessel};

/// A loaded dataset plus the configuration it is viewed with.
///
/// All queries are pure: nothing is cached between calls, and the same
/// query time always produces the same answer.
#[derive(Debug, Clone)]
pub struct Timeline {
    dataset: Dataset,
    config: Config,
}

impl Timeline {
    /// Wrap a dataset with the default configuration, without validation.
    pub fn new(dataset: Dataset) -> Self {
        Self {
            dataset,
            config: Config::default(),
        }
    }

    /// Wrap a dataset, validating it first if `config.validate_on_load` is set.
    pub fn with_config(dataset: Dataset, config: Config) -> Result<Self> {
        config.validate().map_err(KantaiError::InvalidInput)?;
        if config.validate_on_load {
            validate_dataset(&dataset)?;
        }
        Ok(Self { dataset, config })
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn into_dataset(self) -> Dataset {
        self.dataset
    }

    pub fn resolve_coordinate(&self, place_ref: &PlaceRef) -> Result<Coordinate> {
        resolve_coordinate(place_ref, &self.dataset.places)
    }

    pub fn vessel(&self, id: &str) -> Result<&Vessel> {
        self.dataset
            .vessel(id)
            .ok_or_else(|| KantaiError::VesselNotFound(id.to_string()))
    }

    /// Interpolated position of vessel `id`; `Ok(None)` when not positioned.
    pub fn position_at(&self, id: &str, time: Timestamp) -> Result<Option<Coordinate>> {
        let vessel = self.vessel(id)?;
        Ok(position_at(vessel, &self.dataset.places, time))
    }

    pub fn track_up_to(&self, id: &str, time: Timestamp) -> Result<Vec<Coordinate>> {
        let vessel = self.vessel(id)?;
        Ok(track_up_to(vessel, &self.dataset.places, time))
    }

    pub fn time_bounds(&self) -> TimeBounds {
        time_bounds(&self.dataset)
    }

    /// Scrubber range; fails with [`KantaiError::EmptyDataset`] when no date parses.
    pub fn time_range(&self) -> Result<TimeRange> {
        self.time_bounds().to_range()
    }

    pub fn frame(&self, time: Timestamp) -> Frame {
        Frame::at(&self.dataset, time)
    }

    pub fn frame_geojson(&self, time: Timestamp) -> Result<String> {
        frame_to_geojson(&self.frame(time), &self.dataset.places, &self.config.export)
    }
}

impl From<Dataset> for Timeline {
    fn from(dataset: Dataset) -> Self {
        Timeline::new(dataset)
    }
}

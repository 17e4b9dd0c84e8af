//! Timeline builder for loading datasets from JSON (or YAML)
//!
//! This module provides a builder pattern for creating a [`Timeline`] from
//! an in-memory dataset, a JSON string or a dataset file. With the `yaml`
//! feature, YAML documents and `.yml`/`.yaml` files are accepted too.

use crate::config::Config;
use crate::error::{KantaiError, Result};
use crate::timeline::Timeline;
use kantai_types::Dataset;
use std::path::{Path, PathBuf};

#[derive(Debug)]
enum Source {
    Dataset(Dataset),
    Json(String),
    #[cfg(feature = "yaml")]
    Yaml(String),
    Path(PathBuf),
}

/// Builder for a [`Timeline`] with a dataset source and settings.
///
/// # Examples
///
/// ```
/// use kantai::{Config, TimelineBuilder};
///
/// let json = r#"{
///     "places": {"kure": {"name": "Kure", "coordinate": [34.24, 132.55]}},
///     "vessels": {
///         "yamato": {
///             "name": "Yamato",
///             "affiliation": "IJN",
///             "type": "battleship",
///             "events": [{"date": "1941-12-16", "place": "kure"}]
///         }
///     },
///     "events": []
/// }"#;
///
/// let timeline = TimelineBuilder::new()
///     .config(Config::default())
///     .json(json)
///     .build()?;
/// assert_eq!(timeline.time_range()?.begin().to_date_string(), "1941-12-16");
/// # Ok::<(), kantai::KantaiError>(())
/// ```
#[derive(Debug)]
pub struct TimelineBuilder {
    source: Option<Source>,
    config: Config,
}

impl TimelineBuilder {
    pub fn new() -> Self {
        Self {
            source: None,
            config: Config::default(),
        }
    }

    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    pub fn dataset(mut self, dataset: Dataset) -> Self {
        self.source = Some(Source::Dataset(dataset));
        self
    }

    /// Load the dataset from a JSON document.
    pub fn json(mut self, json: impl Into<String>) -> Self {
        self.source = Some(Source::Json(json.into()));
        self
    }

    /// Load the dataset from a YAML document.
    #[cfg(feature = "yaml")]
    pub fn yaml(mut self, yaml: impl Into<String>) -> Self {
        self.source = Some(Source::Yaml(yaml.into()));
        self
    }

    /// Load the dataset from a file; JSON unless the extension is
    /// `yml`/`yaml` and the `yaml` feature is enabled.
    pub fn path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.source = Some(Source::Path(path.into()));
        self
    }

    /// Build the timeline. Without a source the dataset is empty.
    pub fn build(self) -> Result<Timeline> {
        let dataset = match self.source {
            None => Dataset::default(),
            Some(Source::Dataset(dataset)) => dataset,
            Some(Source::Json(json)) => parse_dataset(&json, "inline JSON")?,
            #[cfg(feature = "yaml")]
            Some(Source::Yaml(yaml)) => parse_yaml(&yaml, "inline YAML")?,
            Some(Source::Path(path)) => {
                let text = std::fs::read_to_string(&path)?;
                parse_file(&text, &path)?
            }
        };

        log::debug!(
            "Loaded dataset with {} places, {} vessels, {} events",
            dataset.places.len(),
            dataset.vessels.len(),
            dataset.events.len()
        );

        Timeline::with_config(dataset, self.config)
    }
}

impl Default for TimelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_dataset(json: &str, origin: &str) -> Result<Dataset> {
    Dataset::from_json(json).map_err(|e| {
        KantaiError::SerializationErrorWithContext(format!(
            "Failed to parse dataset from {}: {}",
            origin, e
        ))
    })
}

fn parse_file(text: &str, path: &Path) -> Result<Dataset> {
    let origin = path.display().to_string();
    match path.extension().and_then(|ext| ext.to_str()) {
        #[cfg(feature = "yaml")]
        Some("yml" | "yaml") => parse_yaml(text, &origin),
        _ => parse_dataset(text, &origin),
    }
}

#[cfg(feature = "yaml")]
fn parse_yaml(yaml: &str, origin: &str) -> Result<Dataset> {
    serde_yaml::from_str(yaml).map_err(|e| {
        KantaiError::SerializationErrorWithContext(format!(
            "Failed to parse dataset from {}: {}",
            origin, e
        ))
    })
}

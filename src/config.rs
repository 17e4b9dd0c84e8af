//! Timeline configuration.
//!
//! Controls load-time validation and how frames are exported for the map
//! surface. Loadable from JSON (and TOML with the `toml` feature).
use serde::de::Error;

/// Track colours, cycled by vessel index.
pub const DEFAULT_PALETTE: [&str; 10] = [
    "blue", "red", "green", "orange", "purple", "brown", "pink", "gray", "cyan", "magenta",
];

/// Timeline configuration
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Reject datasets with dangling place references or invalid coordinates.
    /// Off by default: a bad reference only drops the points that use it.
    #[serde(default = "Config::default_validate_on_load")]
    pub validate_on_load: bool,

    #[serde(default)]
    pub export: ExportConfig,
}

/// Settings for GeoJSON frame export
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExportConfig {
    /// Emit a marker for every registry place
    #[serde(default = "ExportConfig::default_include_places")]
    pub include_places: bool,

    /// Tracks shorter than this are not emitted as lines
    #[serde(default = "ExportConfig::default_min_track_points")]
    pub min_track_points: usize,

    #[serde(default = "ExportConfig::default_palette")]
    pub palette: Vec<String>,
}

impl ExportConfig {
    const fn default_include_places() -> bool {
        true
    }

    const fn default_min_track_points() -> usize {
        2
    }

    fn default_palette() -> Vec<String> {
        DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect()
    }

    pub fn with_include_places(mut self, include: bool) -> Self {
        self.include_places = include;
        self
    }

    pub fn with_min_track_points(mut self, points: usize) -> Self {
        assert!(points >= 2, "A track line needs at least two points");
        self.min_track_points = points;
        self
    }

    pub fn with_palette<I, S>(mut self, palette: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.palette = palette.into_iter().map(Into::into).collect();
        self
    }

    /// Colour for the track at `index`, if a palette is configured.
    pub fn color_for(&self, index: usize) -> Option<&str> {
        if self.palette.is_empty() {
            return None;
        }
        Some(&self.palette[index % self.palette.len()])
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            include_places: Self::default_include_places(),
            min_track_points: Self::default_min_track_points(),
            palette: Self::default_palette(),
        }
    }
}

impl Config {
    const fn default_validate_on_load() -> bool {
        false
    }

    pub fn with_validate_on_load(mut self, validate: bool) -> Self {
        self.validate_on_load = validate;
        self
    }

    pub fn with_export(mut self, export: ExportConfig) -> Self {
        self.export = export;
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.export.min_track_points < 2 {
            return Err("Minimum track points must be at least two".to_string());
        }

        if self.export.palette.iter().any(|c| c.trim().is_empty()) {
            return Err("Palette colours must not be empty".to_string());
        }

        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let config: Config = serde_json::from_str(json)?;
        if let Err(e) = config.validate() {
            return Err(Error::custom(e));
        }
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    #[cfg(feature = "toml")]
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let config: Config = toml::from_str(toml_str)?;
        if let Err(e) = config.validate() {
            return Err(toml::de::Error::custom(e));
        }
        Ok(config)
    }

    #[cfg(feature = "toml")]
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            validate_on_load: Self::default_validate_on_load(),
            export: ExportConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(!config.validate_on_load);
        assert!(config.export.include_places);
        assert_eq!(config.export.min_track_points, 2);
        assert_eq!(config.export.palette.len(), 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_partial() {
        let config = Config::from_json(r#"{"export": {"include_places": false}}"#).unwrap();
        assert!(!config.validate_on_load);
        assert!(!config.export.include_places);
        assert_eq!(config.export.color_for(0), Some("blue"));
    }

    #[test]
    fn test_from_json_rejects_invalid() {
        assert!(Config::from_json(r#"{"export": {"min_track_points": 1}}"#).is_err());
        assert!(Config::from_json(r#"{"export": {"palette": ["red", " "]}}"#).is_err());
        assert!(Config::from_json(r#"{"unknown": true}"#).is_err());
    }

    #[test]
    fn test_json_round_trip() {
        let config = Config::default()
            .with_validate_on_load(true)
            .with_export(ExportConfig::default().with_palette(["navy"]));
        let json = config.to_json().unwrap();
        assert_eq!(Config::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_palette_cycles() {
        let export = ExportConfig::default().with_palette(["red", "blue"]);
        assert_eq!(export.color_for(0), Some("red"));
        assert_eq!(export.color_for(3), Some("blue"));
        assert_eq!(ExportConfig::default().with_palette(Vec::<String>::new()).color_for(0), None);
    }

    #[cfg(feature = "toml")]
    #[test]
    fn test_toml() {
        let config = Config::from_toml("validate_on_load = true\n[export]\nmin_track_points = 3\n").unwrap();
        assert!(config.validate_on_load);
        assert_eq!(config.export.min_track_points, 3);
    }
}

//! Temporal position engine for historical fleet timelines.
//!
//! Vessel positions are known only at dated events, each tied to a named
//! place or an inline coordinate. Given any query time this crate computes:
//! - **Positions**: planar interpolation between the surrounding events
//! - **Tracks**: the polyline of known positions up to that time
//! - **Time bounds**: the overall begin/end of the dataset, for a scrubber
//!
//! Every query is a pure function of the dataset and the query time.
//!
//! ```rust
//! use kantai::{Timeline, Timestamp};
//! use kantai_types::{Coordinate, Dataset, Place, Vessel, VesselEvent};
//!
//! let dataset = Dataset::new()
//!     .with_place("a", Place::new("A", Coordinate::new(10.0, 20.0)))
//!     .with_place("b", Place::new("B", Coordinate::new(30.0, 40.0)))
//!     .with_vessel(
//!         "nagato",
//!         Vessel::new("Nagato", "IJN").with_events(vec![
//!             VesselEvent::new("2024-01-01", "a"),
//!             VesselEvent::new("2024-01-11", "b"),
//!         ]),
//!     );
//!
//! let timeline = Timeline::new(dataset);
//! let range = timeline.time_range()?;
//! assert_eq!(range.begin().to_date_string(), "2024-01-01");
//!
//! let t = Timestamp::parse("2024-01-06")?;
//! assert_eq!(timeline.position_at("nagato", t)?, Some(Coordinate::new(20.0, 30.0)));
//! # Ok::<(), kantai::KantaiError>(())
//! ```

pub mod builder;
pub mod compute;
pub mod config;
pub mod error;
pub mod frame;
pub mod time;
pub mod timeline;

pub use builder::TimelineBuilder;
pub use config::{Config, ExportConfig};
pub use error::{KantaiError, Result};
pub use frame::{Frame, VesselFrame};
pub use time::{TimeBounds, TimeRange, Timestamp, parse_date};
pub use timeline::Timeline;

pub use compute::places::resolve_coordinate;
pub use compute::temporal::{position_at, time_bounds, track_distance, track_up_to};
pub use compute::{geojson, validation};

pub use kantai_types::{
    Coordinate, Dataset, EventKind, Place, PlaceRef, Places, TimelineEvent, Vessel, VesselEvent,
    VesselType,
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports
pub mod prelude {

    pub use crate::{Config, KantaiError, Result, Timeline, TimelineBuilder};

    pub use crate::{Frame, TimeBounds, TimeRange, Timestamp, VesselFrame};

    pub use crate::{position_at, resolve_coordinate, time_bounds, track_up_to};

    pub use crate::{Coordinate, Dataset, Place, PlaceRef, Vessel, VesselEvent};

    pub use crate::{geojson, validation};
}

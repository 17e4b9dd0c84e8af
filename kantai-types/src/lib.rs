//! # kantai-types
//!
//! Core data types for the Kantai explorer timeline.
//!
//! This crate provides the in-memory model of a historical fleet dataset:
//!
//! - **Coordinates**: `Coordinate`, a `[lat, lng]` pair convertible to `geo` types
//! - **Places**: `Place`, `Places` registry and `PlaceRef` (named or inline)
//! - **Vessels**: `Vessel`, `VesselType`, `VesselEvent`, `EventKind`
//! - **Timeline markers**: `TimelineEvent`
//! - **Dataset**: `Dataset`, the immutable bundle handed to the engine
//!
//! All types are serializable with Serde and match the layout of the source
//! document (places keyed by identifier, coordinates as two-element arrays).
//!
//! ## Examples
//!
//! ```rust
//! use kantai_types::coordinate::Coordinate;
//! use kantai_types::place::PlaceRef;
//!
//! let kure = Coordinate::new(34.24, 132.55);
//! let inline = PlaceRef::inline(kure);
//! assert_eq!(inline.coordinate(), Some(kure));
//!
//! let named = PlaceRef::named("kure");
//! assert_eq!(named.name(), Some("kure"));
//! ```

pub mod coordinate;
pub mod dataset;
pub mod event;
pub mod place;
pub mod vessel;

pub use coordinate::Coordinate;
pub use dataset::Dataset;
pub use event::TimelineEvent;
pub use place::{Place, PlaceRef, Places};
pub use vessel::{EventKind, Vessel, VesselEvent, VesselType, Vessels};

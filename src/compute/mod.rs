//! Compute layer for timeline queries.
//!
//! This module holds the pure query logic, separate from loading and
//! configuration:
//! - `places`: place reference resolution
//! - `temporal`: interpolated positions, tracks and dataset time bounds
//! - `validation`: coordinate and referential integrity checks
//! - `geojson`: map-surface export of computed frames
//!
//! Every function takes the dataset (or the pieces it needs) explicitly and
//! returns freshly computed values.

pub mod geojson;
pub mod places;
pub mod temporal;
pub mod validation;

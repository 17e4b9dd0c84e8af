//! Error types for timeline queries and dataset loading.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, KantaiError>;

#[derive(Debug, Error)]
pub enum KantaiError {
    /// A named place reference has no entry in the place registry.
    #[error("Place {0} not found")]
    PlaceNotFound(String),

    #[error("Vessel {0} not found")]
    VesselNotFound(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// No parseable date anywhere in the dataset, so there is no time range.
    #[error("Dataset has no parseable dates")]
    EmptyDataset,

    #[error("Invalid dataset: {0}")]
    InvalidDataset(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    SerializationErrorWithContext(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

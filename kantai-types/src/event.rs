use crate::place::PlaceRef;
use serde::{Deserialize, Serialize};

/// A dataset-level marker on the timeline, independent of any vessel.
///
/// Either a point in time (`date`) or a span (`begin_date`/`end_date`); any
/// combination may be present. These only widen the dataset's time bounds and
/// never contribute to a track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub begin_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    pub place: PlaceRef,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub references: Vec<String>,
}

impl TimelineEvent {
    /// A single-day event.
    pub fn on(name: impl Into<String>, date: impl Into<String>, place: impl Into<PlaceRef>) -> Self {
        Self {
            name: name.into(),
            date: Some(date.into()),
            begin_date: None,
            end_date: None,
            place: place.into(),
            references: Vec::new(),
        }
    }

    /// An event spanning `begin_date..=end_date`.
    pub fn spanning(
        name: impl Into<String>,
        begin_date: impl Into<String>,
        end_date: impl Into<String>,
        place: impl Into<PlaceRef>,
    ) -> Self {
        Self {
            name: name.into(),
            date: None,
            begin_date: Some(begin_date.into()),
            end_date: Some(end_date.into()),
            place: place.into(),
            references: Vec::new(),
        }
    }
}

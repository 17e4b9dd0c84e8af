//! Dataset-wide time bounds.

use crate::time::{TimeBounds, Timestamp, parse_date};
use kantai_types::Dataset;

/// Earliest and latest dates found anywhere in `dataset`.
///
/// Timeline events contribute `begin_date` to the begin, `end_date` to the
/// end and `date` to both; every vessel event `date` contributes to both.
/// Unparseable dates are skipped. If nothing parses the result is
/// [`TimeBounds::EMPTY`]; use [`TimeBounds::to_range`] to turn the bounds
/// into a range that rejects that case.
///
/// # Examples
///
/// ```
/// use kantai::compute::temporal::time_bounds;
/// use kantai::Timestamp;
/// use kantai_types::{Coordinate, Dataset, TimelineEvent};
///
/// let dataset = Dataset::new().with_event(TimelineEvent::on(
///     "Pearl Harbor",
///     "1941-12-08",
///     Coordinate::new(21.35, -157.97),
/// ));
///
/// let bounds = time_bounds(&dataset);
/// assert_eq!(bounds.begin, Timestamp::parse("1941-12-08").unwrap());
/// assert_eq!(bounds.begin, bounds.end);
/// ```
pub fn time_bounds(dataset: &Dataset) -> TimeBounds {
    let mut bounds = TimeBounds::EMPTY;

    for event in &dataset.events {
        if let Some(begin) = parsed(event.begin_date.as_deref(), &event.name) {
            bounds.include_begin(begin);
        }
        if let Some(end) = parsed(event.end_date.as_deref(), &event.name) {
            bounds.include_end(end);
        }
        if let Some(date) = parsed(event.date.as_deref(), &event.name) {
            bounds.include(date);
        }
    }

    for vessel in dataset.vessels.values() {
        for event in &vessel.events {
            if let Some(date) = parsed(Some(event.date.as_str()), &vessel.name) {
                bounds.include(date);
            }
        }
    }

    bounds
}

fn parsed(date: Option<&str>, owner: &str) -> Option<Timestamp> {
    let date = date?;
    let parsed = parse_date(date);
    if parsed.is_none() {
        log::debug!("Skipping unparseable date '{}' of '{}'", date, owner);
    }
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::KantaiError;
    use kantai_types::{Coordinate, TimelineEvent, Vessel, VesselEvent};

    fn at(date: &str) -> Timestamp {
        Timestamp::parse(date).unwrap()
    }

    fn somewhere() -> Coordinate {
        Coordinate::new(0.0, 0.0)
    }

    #[test]
    fn test_single_dated_event() {
        let dataset =
            Dataset::new().with_event(TimelineEvent::on("Pearl Harbor", "1941-12-08", somewhere()));
        let bounds = time_bounds(&dataset);
        assert_eq!(bounds.begin, at("1941-12-08"));
        assert_eq!(bounds.end, at("1941-12-08"));
        assert!(!bounds.is_empty());
    }

    #[test]
    fn test_span_sides_fold_separately() {
        let dataset = Dataset::new().with_event(TimelineEvent::spanning(
            "Guadalcanal",
            "1942-08-07",
            "1943-02-09",
            somewhere(),
        ));
        let bounds = time_bounds(&dataset);
        assert_eq!(bounds.begin, at("1942-08-07"));
        assert_eq!(bounds.end, at("1943-02-09"));
    }

    #[test]
    fn test_begin_only_event_leaves_end_open() {
        let mut event = TimelineEvent::on("Start", "1942-01-01", somewhere());
        event.date = None;
        event.begin_date = Some("1942-01-01".to_string());
        let bounds = time_bounds(&Dataset::new().with_event(event));
        assert_eq!(bounds.begin, at("1942-01-01"));
        assert_eq!(bounds.end, Timestamp::MIN);
        assert!(bounds.is_empty());
    }

    #[test]
    fn test_vessel_events_widen_bounds() {
        let dataset = Dataset::new()
            .with_event(TimelineEvent::on("Midway", "1942-06-04", somewhere()))
            .with_vessel(
                "yamato",
                Vessel::new("Yamato", "IJN").with_events(vec![
                    VesselEvent::new("1941-12-16", "kure"),
                    VesselEvent::unplaced("1945-04-07"),
                ]),
            );
        let bounds = time_bounds(&dataset);
        assert_eq!(bounds.begin, at("1941-12-16"));
        assert_eq!(bounds.end, at("1945-04-07"));
    }

    #[test]
    fn test_unparseable_dates_skipped() {
        let dataset = Dataset::new()
            .with_event(TimelineEvent::on("Unknown", "a long time ago", somewhere()))
            .with_event(TimelineEvent::on("Known", "1944-06-19", somewhere()))
            .with_vessel(
                "zuikaku",
                Vessel::new("Zuikaku", "IJN").with_events(vec![VesselEvent::new("???", "kure")]),
            );
        let bounds = time_bounds(&dataset);
        assert_eq!(bounds.begin, at("1944-06-19"));
        assert_eq!(bounds.end, at("1944-06-19"));
    }

    #[test]
    fn test_no_dates_gives_sentinels() {
        let dataset = Dataset::new().with_vessel("mutsu", Vessel::new("Mutsu", "IJN"));
        let bounds = time_bounds(&dataset);
        assert_eq!(bounds, TimeBounds::EMPTY);
        assert!(matches!(bounds.to_range(), Err(KantaiError::EmptyDataset)));
    }
}

//! Calendar date parsing and the linear time axis used by every query.
//!
//! Dates in a dataset are ISO-8601 strings of varying precision. They are
//! converted to [`Timestamp`] (milliseconds since the Unix epoch, UTC) before
//! any comparison or arithmetic. Strings without an explicit offset are read
//! as UTC so results do not depend on the host time zone.

use crate::error::{KantaiError, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

const NAIVE_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// A point on the timeline in milliseconds since 1970-01-01T00:00:00Z.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(i64);

impl Timestamp {
    pub const MIN: Timestamp = Timestamp(i64::MIN);
    pub const MAX: Timestamp = Timestamp(i64::MAX);

    pub const fn from_millis(millis: i64) -> Self {
        Timestamp(millis)
    }

    pub const fn as_millis(&self) -> i64 {
        self.0
    }

    /// Parse a dataset or query date, failing with [`KantaiError::InvalidDate`].
    ///
    /// # Examples
    ///
    /// ```
    /// use kantai::Timestamp;
    ///
    /// let pearl_harbor = Timestamp::parse("1941-12-08").unwrap();
    /// assert_eq!(pearl_harbor.to_date_string(), "1941-12-08");
    /// assert!(Timestamp::parse("not a date").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self> {
        parse_date(input).ok_or_else(|| KantaiError::InvalidDate(input.to_string()))
    }

    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.0)
    }

    /// `YYYY-MM-DD` label, as shown under the scrubber.
    pub fn to_date_string(&self) -> String {
        match self.to_datetime() {
            Some(dt) => dt.format("%Y-%m-%d").to_string(),
            None => self.0.to_string(),
        }
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_datetime() {
            Some(dt) => write!(f, "{}", dt.format("%Y-%m-%dT%H:%M:%S%.3fZ")),
            None => write!(f, "{}ms", self.0),
        }
    }
}

impl FromStr for Timestamp {
    type Err = KantaiError;

    fn from_str(s: &str) -> Result<Self> {
        Timestamp::parse(s)
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Timestamp(dt.timestamp_millis())
    }
}

/// Parse an ISO-8601 date or date-time into a [`Timestamp`].
///
/// Accepted forms, most specific first: RFC 3339 with offset, naive
/// date-time (`T` or space separator, optional trailing `Z`), `YYYY-MM-DD`,
/// `YYYY-MM` and `YYYY`. Date-only forms resolve to midnight UTC of the
/// first day they cover. Returns `None` for anything else.
pub fn parse_date(input: &str) -> Option<Timestamp> {
    let s = input.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(Timestamp(dt.timestamp_millis()));
    }

    let naive = s.strip_suffix('Z').unwrap_or(s);
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(naive, format) {
            return Some(Timestamp(dt.and_utc().timestamp_millis()));
        }
    }

    let padded = match s.len() {
        4 => format!("{}-01-01", s),
        7 => format!("{}-01", s),
        _ => s.to_string(),
    };
    NaiveDate::parse_from_str(&padded, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|dt| Timestamp(dt.and_utc().timestamp_millis()))
}

/// Running begin/end fold over dataset dates.
///
/// Starts at [`TimeBounds::EMPTY`], where `begin` is [`Timestamp::MAX`] and
/// `end` is [`Timestamp::MIN`]; these play the role of +/- infinity. A
/// bounds value where `begin > end` has not seen a usable date on at least
/// one side and must not be used as a real range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeBounds {
    pub begin: Timestamp,
    pub end: Timestamp,
}

impl TimeBounds {
    pub const EMPTY: TimeBounds = TimeBounds {
        begin: Timestamp::MAX,
        end: Timestamp::MIN,
    };

    pub fn include_begin(&mut self, time: Timestamp) {
        self.begin = self.begin.min(time);
    }

    pub fn include_end(&mut self, time: Timestamp) {
        self.end = self.end.max(time);
    }

    pub fn include(&mut self, time: Timestamp) {
        self.include_begin(time);
        self.include_end(time);
    }

    pub fn is_empty(&self) -> bool {
        self.begin > self.end
    }

    /// Convert to a usable range, rejecting degenerate bounds.
    pub fn to_range(&self) -> Result<TimeRange> {
        if self.is_empty() {
            return Err(KantaiError::EmptyDataset);
        }
        Ok(TimeRange {
            begin: self.begin,
            end: self.end,
        })
    }
}

impl Default for TimeBounds {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// A closed, non-empty interval `[begin, end]` on the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    begin: Timestamp,
    end: Timestamp,
}

impl TimeRange {
    pub fn new(begin: Timestamp, end: Timestamp) -> Result<Self> {
        if begin > end {
            return Err(KantaiError::InvalidInput(format!(
                "Range begin {} is after end {}",
                begin, end
            )));
        }
        Ok(Self { begin, end })
    }

    pub fn begin(&self) -> Timestamp {
        self.begin
    }

    pub fn end(&self) -> Timestamp {
        self.end
    }

    pub fn contains(&self, time: Timestamp) -> bool {
        self.begin <= time && time <= self.end
    }

    pub fn clamp(&self, time: Timestamp) -> Timestamp {
        time.clamp(self.begin, self.end)
    }

    pub fn duration_millis(&self) -> i64 {
        self.end.0.saturating_sub(self.begin.0)
    }

    /// Query times from `begin` to `end` inclusive, `step` apart.
    ///
    /// The last step is shortened so that `end` is always yielded.
    ///
    /// # Examples
    ///
    /// ```
    /// use kantai::{TimeRange, Timestamp};
    /// use std::time::Duration;
    ///
    /// let range = TimeRange::new(Timestamp::from_millis(0), Timestamp::from_millis(25)).unwrap();
    /// let steps: Vec<i64> = range
    ///     .steps(Duration::from_millis(10))
    ///     .unwrap()
    ///     .map(|t| t.as_millis())
    ///     .collect();
    /// assert_eq!(steps, vec![0, 10, 20, 25]);
    /// ```
    pub fn steps(&self, step: Duration) -> Result<TimeSteps> {
        let step = i64::try_from(step.as_millis()).unwrap_or(i64::MAX);
        if step == 0 {
            return Err(KantaiError::InvalidInput(
                "Step must be at least one millisecond".to_string(),
            ));
        }
        Ok(TimeSteps {
            next: Some(self.begin),
            end: self.end,
            step,
        })
    }
}

/// Iterator returned by [`TimeRange::steps`].
#[derive(Debug, Clone)]
pub struct TimeSteps {
    next: Option<Timestamp>,
    end: Timestamp,
    step: i64,
}

impl Iterator for TimeSteps {
    type Item = Timestamp;

    fn next(&mut self) -> Option<Timestamp> {
        let current = self.next?;
        self.next = if current >= self.end {
            None
        } else {
            let advanced = current
                .0
                .checked_add(self.step)
                .map_or(self.end, |t| Timestamp(t).min(self.end));
            Some(advanced)
        };
        Some(current)
    }
}

//! Core type definitions with validation.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation errors for core types.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// The tolerance was not a positive, finite number of seconds within range.
    #[error("tolerance must be greater than 0 and at most {max} seconds, got {value}")]
    ToleranceOutOfRange { value: f64, max: f64 },
}

/// A timestamp field that is present but cannot be parsed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("malformed {field} {value:?}: {reason}")]
pub struct MalformedTimestamp {
    /// Which field held the value (e.g. "acquisition date").
    pub field: &'static str,
    /// The raw value as read from the file.
    pub value: String,
    /// Why the value was rejected.
    pub reason: String,
}

impl MalformedTimestamp {
    pub(crate) fn new(field: &'static str, value: &str, reason: impl Into<String>) -> Self {
        Self {
            field,
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

/// The two file families being matched against each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    /// DICOM file carrying acquisition date/time attributes.
    Dicom,
    /// Raw acquisition TIFF carrying a `DateTime` tag on its first page.
    Raw,
}

impl FileKind {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Dicom => "dicom",
            Self::Raw => "raw",
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An acquisition time with whole-second resolution and no time zone.
///
/// Both source encodings are naive local times from the acquiring machine, so
/// the value is kept as a [`NaiveDateTime`] with the sub-second part dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(NaiveDateTime);

impl Timestamp {
    /// Wraps a naive date-time, discarding any sub-second part.
    #[must_use]
    pub fn from_naive(value: NaiveDateTime) -> Self {
        Self(value.with_nanosecond(0).unwrap_or(value))
    }

    /// Parses the DICOM acquisition date (`YYYYMMDD`) and time (`HHMMSS[.ffffff]`).
    ///
    /// The time needs at least six digits; anything after them (further digits
    /// or a `.` fraction) is ignored once validated as numeric.
    pub fn from_dicom(date: &str, time: &str) -> Result<Self, MalformedTimestamp> {
        let date = date.trim();
        let time = time.trim();

        if date.len() != 8 || !is_digits(date) {
            return Err(MalformedTimestamp::new(
                "acquisition date",
                date,
                "expected 8 digits (YYYYMMDD)",
            ));
        }

        let (hms, fraction) = time.split_once('.').unwrap_or((time, ""));
        if hms.len() < 6 || !is_digits(hms) || !is_digits(fraction) {
            return Err(MalformedTimestamp::new(
                "acquisition time",
                time,
                "expected at least 6 digits (HHMMSS[.ffffff])",
            ));
        }

        let day = NaiveDate::parse_from_str(date, "%Y%m%d")
            .map_err(|e| MalformedTimestamp::new("acquisition date", date, e.to_string()))?;
        let clock = NaiveTime::parse_from_str(&hms[..6], "%H%M%S")
            .map_err(|e| MalformedTimestamp::new("acquisition time", time, e.to_string()))?;

        Ok(Self::from_naive(day.and_time(clock)))
    }

    /// Parses a TIFF `DateTime` value (`YYYY:MM:DD HH:MM:SS`).
    pub fn from_tiff(value: &str) -> Result<Self, MalformedTimestamp> {
        let trimmed = value.trim_end_matches('\0').trim();
        NaiveDateTime::parse_from_str(trimmed, "%Y:%m:%d %H:%M:%S")
            .map(Self::from_naive)
            .map_err(|e| MalformedTimestamp::new("TIFF DateTime", trimmed, e.to_string()))
    }

    /// Returns the wrapped date-time.
    #[must_use]
    pub const fn as_naive(&self) -> NaiveDateTime {
        self.0
    }

    /// Absolute distance between two timestamps, independent of argument order.
    #[must_use]
    pub fn abs_diff(self, other: Self) -> TimeDelta {
        (self.0 - other.0).abs()
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d %H:%M:%S"))
    }
}

fn is_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

/// Maximum window between two timestamps for them to count as the same acquisition.
///
/// The bound is exclusive: a pair is compatible only when its distance is
/// strictly smaller than the tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tolerance(TimeDelta);

impl Tolerance {
    /// Default window in seconds.
    pub const DEFAULT_SECS: f64 = 2.0;

    /// Largest accepted window (one day).
    pub const MAX_SECS: f64 = 86_400.0;

    /// Creates a tolerance from a number of seconds, at millisecond precision.
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_secs_f64(secs: f64) -> Result<Self, ValidationError> {
        let err = ValidationError::ToleranceOutOfRange {
            value: secs,
            max: Self::MAX_SECS,
        };
        if !secs.is_finite() || secs <= 0.0 || secs > Self::MAX_SECS {
            return Err(err);
        }
        let millis = (secs * 1000.0).round() as i64;
        if millis == 0 {
            return Err(err);
        }
        Ok(Self(TimeDelta::milliseconds(millis)))
    }

    /// Returns the window as a duration.
    #[must_use]
    pub const fn as_delta(self) -> TimeDelta {
        self.0
    }

    /// Returns the window in seconds.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn as_secs_f64(self) -> f64 {
        self.0.num_milliseconds() as f64 / 1000.0
    }

    /// Whether a distance (of either sign) falls inside the window.
    #[must_use]
    pub fn admits(self, delta: TimeDelta) -> bool {
        delta.abs() < self.0
    }

    /// Whether two timestamps describe the same acquisition.
    #[must_use]
    pub fn compatible(self, a: Timestamp, b: Timestamp) -> bool {
        self.admits(a.abs_diff(b))
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self(TimeDelta::seconds(2))
    }
}

impl fmt::Display for Tolerance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.as_secs_f64())
    }
}

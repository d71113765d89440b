//! Time-of-day and reservation slot types.
//!
//! This module provides the two time types the reservation engine is built
//! on: [`TimeOfDay`], a wall-clock time used for operating hours and peak
//! windows, and [`TimeSlot`], a half-open interval of absolute instants
//! during which a table is occupied.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, Timelike, Utc};
use serde::{Deserialize, Serialize};

/// A wall-clock time of day with minute precision.
///
/// Stored as minutes from midnight, parsed from and displayed in `HH:MM`
/// form. Dates are irrelevant: operating-hour and peak-window checks compare
/// time-of-day components only.
///
/// # Examples
///
/// ```
/// use maitred::TimeOfDay;
///
/// let open: TimeOfDay = "09:00".parse().unwrap();
/// let close: TimeOfDay = "22:00".parse().unwrap();
/// assert!(open < close);
/// assert_eq!(close.to_string(), "22:00");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(into = "String", try_from = "String")]
pub struct TimeOfDay {
    minutes: u16,
}

impl TimeOfDay {
    /// Creates a time of day from hour and minute components.
    ///
    /// # Errors
    ///
    /// Returns an error if `hour > 23` or `minute > 59`.
    ///
    /// # Examples
    ///
    /// ```
    /// use maitred::TimeOfDay;
    ///
    /// let t = TimeOfDay::new(19, 30).unwrap();
    /// assert_eq!(t.hour(), 19);
    /// assert_eq!(t.minute(), 30);
    ///
    /// assert!(TimeOfDay::new(24, 0).is_err());
    /// assert!(TimeOfDay::new(12, 60).is_err());
    /// ```
    pub fn new(hour: u16, minute: u16) -> Result<Self, InvalidTimeOfDayError> {
        if hour > 23 {
            return Err(InvalidTimeOfDayError {
                value: format!("{hour:02}:{minute:02}"),
                reason: "hour must be 0-23".into(),
            });
        }
        if minute > 59 {
            return Err(InvalidTimeOfDayError {
                value: format!("{hour:02}:{minute:02}"),
                reason: "minute must be 0-59".into(),
            });
        }
        Ok(Self {
            minutes: hour * 60 + minute,
        })
    }

    /// Returns the hour component (0-23).
    #[must_use]
    pub const fn hour(self) -> u16 {
        self.minutes / 60
    }

    /// Returns the minute component (0-59).
    #[must_use]
    pub const fn minute(self) -> u16 {
        self.minutes % 60
    }

    /// Returns the total minutes from midnight (0-1439).
    #[must_use]
    pub const fn minutes_from_midnight(self) -> u16 {
        self.minutes
    }

    /// Extracts the time-of-day component of an absolute instant.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_datetime(instant: &DateTime<Utc>) -> Self {
        Self {
            minutes: (instant.hour() * 60 + instant.minute()) as u16,
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeOfDay {
    type Err = InvalidTimeOfDayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| InvalidTimeOfDayError {
            value: s.to_string(),
            reason: reason.into(),
        };

        let (hour_part, minute_part) = s
            .split_once(':')
            .ok_or_else(|| invalid("expected HH:MM"))?;
        let hour: u16 = hour_part
            .parse()
            .map_err(|_| invalid("hour is not a number"))?;
        let minute: u16 = minute_part
            .parse()
            .map_err(|_| invalid("minute is not a number"))?;
        Self::new(hour, minute)
    }
}

impl From<TimeOfDay> for String {
    fn from(value: TimeOfDay) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = InvalidTimeOfDayError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Error type for invalid time-of-day values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidTimeOfDayError {
    /// The rejected input.
    pub value: String,
    /// The reason the value is invalid.
    pub reason: String,
}

impl fmt::Display for InvalidTimeOfDayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid time of day '{}': {}", self.value, self.reason)
    }
}

impl std::error::Error for InvalidTimeOfDayError {}

/// A half-open interval `[start, end)` during which a table is occupied.
///
/// Two slots overlap iff they share at least one instant under half-open
/// semantics; touching endpoints (back-to-back bookings) do not conflict.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use maitred::TimeSlot;
///
/// let dinner = TimeSlot::from_start_duration(
///     Utc.with_ymd_and_hms(2024, 5, 1, 19, 0, 0).unwrap(),
///     90,
/// )
/// .unwrap();
/// let late = TimeSlot::from_start_duration(
///     Utc.with_ymd_and_hms(2024, 5, 1, 20, 30, 0).unwrap(),
///     60,
/// )
/// .unwrap();
///
/// // Back-to-back bookings do not conflict.
/// assert!(!dinner.overlaps(&late));
/// assert_eq!(dinner.duration_minutes(), 90);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl TimeSlot {
    /// Creates a slot from explicit start and end instants.
    ///
    /// # Errors
    ///
    /// Returns an error if `end <= start`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, InvalidSlotError> {
        if end <= start {
            return Err(InvalidSlotError {
                reason: "end must be after start".into(),
            });
        }
        Ok(Self { start, end })
    }

    /// Creates a slot from a start instant and a duration in minutes.
    ///
    /// # Errors
    ///
    /// Returns an error if `minutes` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use maitred::TimeSlot;
    ///
    /// let start = Utc.with_ymd_and_hms(2024, 5, 1, 19, 0, 0).unwrap();
    /// let slot = TimeSlot::from_start_duration(start, 90).unwrap();
    /// assert_eq!(slot.end(), Utc.with_ymd_and_hms(2024, 5, 1, 20, 30, 0).unwrap());
    /// ```
    pub fn from_start_duration(
        start: DateTime<Utc>,
        minutes: u32,
    ) -> Result<Self, InvalidSlotError> {
        if minutes == 0 {
            return Err(InvalidSlotError {
                reason: "duration must be at least one minute".into(),
            });
        }
        Self::new(start, start + chrono::Duration::minutes(i64::from(minutes)))
    }

    /// Returns the start instant (inclusive).
    #[must_use]
    pub const fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// Returns the end instant (exclusive).
    #[must_use]
    pub const fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Returns the slot length in whole minutes.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn duration_minutes(&self) -> u32 {
        (self.end - self.start).num_minutes() as u32
    }

    /// Checks whether this slot shares any instant with `other`.
    ///
    /// Half-open comparison: `[s1, e1)` and `[s2, e2)` overlap iff
    /// `s1 < e2 && e1 > s2`.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && self.end > other.start
    }

    /// Returns the day of week of the slot's start, 0 = Sunday through
    /// 6 = Saturday.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn day_of_week(&self) -> u8 {
        self.start.weekday().num_days_from_sunday() as u8
    }

    /// Returns the time-of-day component of the start instant.
    #[must_use]
    pub fn start_time_of_day(&self) -> TimeOfDay {
        TimeOfDay::from_datetime(&self.start)
    }

    /// Returns the time-of-day component of the end instant.
    #[must_use]
    pub fn end_time_of_day(&self) -> TimeOfDay {
        TimeOfDay::from_datetime(&self.end)
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}..{}",
            self.start.format("%Y-%m-%d %H:%M"),
            self.end.format("%Y-%m-%d %H:%M")
        )
    }
}

/// Error type for invalid slot bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidSlotError {
    /// The reason the slot is invalid.
    pub reason: String,
}

impl fmt::Display for InvalidSlotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid slot: {}", self.reason)
    }
}

impl std::error::Error for InvalidSlotError {}

//! Time-of-day handling for opening intervals.
//!
//! Configured opening hours arrive as "H:MM" or "HH:MM" strings. A
//! [`ClockTime`] is only a wall-clock reading; it becomes an instant once it
//! is placed on a calendar date in a civil timezone (see [`ClockTime::on`]).

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone, Timelike};
use std::fmt;

/// Error returned when parsing an invalid time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// An hour:minute time of day, without seconds.
///
/// # Examples
///
/// ```
/// use opening_hours::domain::ClockTime;
///
/// let time = ClockTime::parse("9:30").unwrap();
/// assert_eq!(time.hour(), 9);
/// assert_eq!(time.minute(), 30);
/// assert_eq!(time.to_string(), "09:30");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClockTime(NaiveTime);

impl ClockTime {
    /// Create a time from hour and minute components.
    ///
    /// Returns `None` if the hour is not 0-23 or the minute is not 0-59.
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(Self)
    }

    /// Parse a time from "H:MM" or "HH:MM" format.
    ///
    /// # Examples
    ///
    /// ```
    /// use opening_hours::domain::ClockTime;
    ///
    /// // Valid times
    /// assert!(ClockTime::parse("0:00").is_ok());
    /// assert!(ClockTime::parse("09:00").is_ok());
    /// assert!(ClockTime::parse("23:59").is_ok());
    ///
    /// // Invalid formats
    /// assert!(ClockTime::parse("0900").is_err());
    /// assert!(ClockTime::parse("9:0").is_err());
    /// assert!(ClockTime::parse("24:00").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, TimeError> {
        let (hour_part, minute_part) = s
            .split_once(':')
            .ok_or_else(|| TimeError::new("expected H:MM format"))?;

        let hour = match hour_part.as_bytes() {
            [d] => parse_digit(*d),
            [d1, d2] => parse_digit(*d1).zip(parse_digit(*d2)).map(|(a, b)| a * 10 + b),
            _ => None,
        }
        .ok_or_else(|| TimeError::new("invalid hour digits"))?;
        if hour > 23 {
            return Err(TimeError::new("hour must be 0-23"));
        }

        let minute = match minute_part.as_bytes() {
            [d1, d2] => parse_digit(*d1).zip(parse_digit(*d2)).map(|(a, b)| a * 10 + b),
            _ => None,
        }
        .ok_or_else(|| TimeError::new("invalid minute digits"))?;
        if minute > 59 {
            return Err(TimeError::new("minute must be 0-59"));
        }

        Self::from_hm(hour, minute).ok_or_else(|| TimeError::new("invalid time"))
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// Place this time on `date` in the timezone `tz`.
    ///
    /// A wall-clock reading that falls into a DST gap is moved forward by
    /// one hour. An ambiguous reading resolves to the earlier instant.
    pub fn on<Tz: TimeZone>(&self, date: NaiveDate, tz: &Tz) -> Option<DateTime<Tz>> {
        let local = date.and_time(self.0);
        tz.from_local_datetime(&local).earliest().or_else(|| {
            let shifted = local.checked_add_signed(Duration::hours(1))?;
            tz.from_local_datetime(&shifted).earliest()
        })
    }
}

impl fmt::Debug for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClockTime({:02}:{:02})", self.hour(), self.minute())
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

fn parse_digit(b: u8) -> Option<u32> {
    (b as char).to_digit(10)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Roundtrip: Display output parses back to the same time
        #[test]
        fn roundtrip(hour in 0u32..24, minute in 0u32..60) {
            let t = ClockTime::from_hm(hour, minute).unwrap();
            prop_assert_eq!(ClockTime::parse(&t.to_string()).unwrap(), t);
        }

        /// Unpadded hours parse to the same value as padded ones
        #[test]
        fn unpadded_hour_accepted(hour in 0u32..10, minute in 0u32..60) {
            let padded = ClockTime::parse(&format!("{hour:02}:{minute:02}")).unwrap();
            let unpadded = ClockTime::parse(&format!("{hour}:{minute:02}")).unwrap();
            prop_assert_eq!(padded, unpadded);
        }

        /// Hours past 23 are always rejected
        #[test]
        fn large_hour_rejected(hour in 24u32..100, minute in 0u32..60) {
            let text = format!("{hour}:{minute:02}");
            prop_assert!(ClockTime::parse(&text).is_err());
        }
    }
}

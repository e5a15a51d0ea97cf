//! Opening intervals within a single day.

use chrono::{DateTime, NaiveDate, TimeZone};

use super::ClockTime;

/// A start/end pair of wall-clock times on one calendar day.
///
/// Either bound may be missing, mirroring half-filled configuration rows.
/// An interval without both bounds is inert: it never opens and is never
/// reported as a next opening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeInterval {
    pub start: Option<ClockTime>,
    pub end: Option<ClockTime>,
}

impl TimeInterval {
    /// Create an interval with both bounds present.
    pub fn new(start: ClockTime, end: ClockTime) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    /// Returns both bounds, or `None` if the interval is inert.
    pub fn bounds(&self) -> Option<(ClockTime, ClockTime)> {
        self.start.zip(self.end)
    }

    /// Whether the interval is missing a bound.
    pub fn is_inert(&self) -> bool {
        self.bounds().is_none()
    }

    /// Resolve the interval to instants on `date` in `tz`.
    ///
    /// Returns `None` for inert intervals.
    pub fn on<Tz: TimeZone>(
        &self,
        date: NaiveDate,
        tz: &Tz,
    ) -> Option<(DateTime<Tz>, DateTime<Tz>)> {
        let (start, end) = self.bounds()?;
        Some((start.on(date, tz)?, end.on(date, tz)?))
    }
}

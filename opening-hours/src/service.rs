//! Opening hours for one configured business.
//!
//! Ties the pieces together: statutory holidays for the region, manual
//! closures on top, then evaluation against the weekly schedule in the
//! configured civil timezone.

use chrono::{DateTime, Datelike, Days, TimeZone, Utc};
use chrono_tz::Tz;
use tracing::debug;

use crate::domain::{ClosedDateMap, ClosedDayEntry, Region, WeeklySchedule, merge_closed_dates};
use crate::holidays::{HolidayCalculator, HolidaySet};
use crate::status::{LOOKAHEAD_DAYS, StatusResult, determine_status};

/// The timezone used when none is configured.
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::Europe::Berlin;

/// A validated opening-hours configuration.
///
/// Immutable once built; share it behind an `Arc` to evaluate from many
/// tasks at once.
#[derive(Debug, Clone)]
pub struct OpeningHours {
    pub region: Region,
    pub timezone: Tz,
    pub schedule: WeeklySchedule,
    pub closed_days: Vec<ClosedDayEntry>,
    pub bridge_days: Vec<ClosedDayEntry>,
    calculator: HolidayCalculator,
}

impl OpeningHours {
    /// Create opening hours with no manual closures.
    pub fn new(region: Region, timezone: Tz, schedule: WeeklySchedule) -> Self {
        Self {
            region,
            timezone,
            schedule,
            closed_days: Vec::new(),
            bridge_days: Vec::new(),
            calculator: HolidayCalculator::default(),
        }
    }

    /// Add custom closed days.
    pub fn with_closed_days(mut self, entries: Vec<ClosedDayEntry>) -> Self {
        self.closed_days = entries;
        self
    }

    /// Add bridge days.
    pub fn with_bridge_days(mut self, entries: Vec<ClosedDayEntry>) -> Self {
        self.bridge_days = entries;
        self
    }

    /// Statutory holidays for `region` in `year`.
    pub fn holidays(&self, region: &Region, year: i32) -> HolidaySet {
        self.calculator.compute(region, year)
    }

    /// All closed dates for `region` across `years`.
    ///
    /// Holidays of every year are merged first, then custom closed days,
    /// then bridge days, so manual entries always win.
    pub fn closed_dates(&self, region: &Region, years: impl IntoIterator<Item = i32>) -> ClosedDateMap {
        let holidays: Vec<_> = years
            .into_iter()
            .flat_map(|year| self.holidays(region, year).labels().collect::<Vec<_>>())
            .collect();
        merge_closed_dates(holidays, &self.closed_days, &self.bridge_days)
    }

    /// Evaluate the configured region at `now`.
    pub fn status_at(&self, now: DateTime<Utc>) -> StatusResult<Tz> {
        self.status_for_region(&self.region, now)
    }

    /// Evaluate a specific region at `now`.
    pub fn status_for_region(&self, region: &Region, now: DateTime<Utc>) -> StatusResult<Tz> {
        let local = now.with_timezone(&self.timezone);
        let closed = self.closed_dates(region, lookahead_years(&local));

        let status = determine_status(&local, &self.schedule, &closed);
        debug!(
            region = %region,
            now = %local,
            open = status.open,
            closed_dates = closed.len(),
            "evaluated opening status"
        );
        status
    }
}

/// Calendar years touched by the lookahead window starting at `now`.
fn lookahead_years<Tz2: TimeZone>(now: &DateTime<Tz2>) -> Vec<i32> {
    let today = now.date_naive();
    let last = today
        .checked_add_days(Days::new(LOOKAHEAD_DAYS - 1))
        .unwrap_or(today);
    (today.year()..=last.year()).collect()
}

//! Weekly opening schedule.

use chrono::Weekday;

use super::TimeInterval;

/// The seven weekdays, Monday first.
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Opening intervals for each day of the week.
///
/// Intervals within a day keep their insertion order. The evaluator scans
/// them in that order and the first match wins, so the order decides which
/// end time is reported when intervals overlap.
///
/// # Examples
///
/// ```
/// use opening_hours::domain::{ClockTime, TimeInterval, WeeklySchedule};
/// use chrono::Weekday;
///
/// let nine = ClockTime::parse("9:00").unwrap();
/// let five = ClockTime::parse("17:00").unwrap();
///
/// let schedule = WeeklySchedule::new().with_day(Weekday::Mon, vec![TimeInterval::new(nine, five)]);
/// assert_eq!(schedule.intervals(Weekday::Mon).len(), 1);
/// assert!(schedule.intervals(Weekday::Tue).is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WeeklySchedule {
    days: [Vec<TimeInterval>; 7],
}

impl WeeklySchedule {
    /// Create a schedule that is closed every day.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the intervals for `day`, returning the updated schedule.
    pub fn with_day(mut self, day: Weekday, intervals: Vec<TimeInterval>) -> Self {
        self.set(day, intervals);
        self
    }

    /// Replace the intervals for `day`.
    pub fn set(&mut self, day: Weekday, intervals: Vec<TimeInterval>) {
        self.days[day.num_days_from_monday() as usize] = intervals;
    }

    /// Append an interval to `day`.
    pub fn push(&mut self, day: Weekday, interval: TimeInterval) {
        self.days[day.num_days_from_monday() as usize].push(interval);
    }

    /// The intervals configured for `day`, in insertion order.
    pub fn intervals(&self, day: Weekday) -> &[TimeInterval] {
        &self.days[day.num_days_from_monday() as usize]
    }

    /// Iterate over every weekday, Monday first.
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &[TimeInterval])> {
        WEEKDAYS.iter().map(|&day| (day, self.intervals(day)))
    }

    /// Whether no day has a usable interval.
    pub fn is_always_closed(&self) -> bool {
        self.days.iter().flatten().all(TimeInterval::is_inert)
    }
}

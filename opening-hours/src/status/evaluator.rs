//! Open/closed evaluation against a weekly schedule.

use chrono::{DateTime, Datelike, Days, TimeZone};
use tracing::trace;

use crate::domain::{ClosedDateMap, TimeInterval, WeeklySchedule};

use super::StatusResult;

/// How many calendar days, starting with today, are searched for the next
/// opening.
pub const LOOKAHEAD_DAYS: u64 = 14;

/// Determine whether the business is open at `now`.
///
/// `now`'s timezone is the civil timezone: it decides the calendar date, the
/// weekday and where each interval bound falls. A date present in `closed`
/// is closed regardless of the schedule.
///
/// # Examples
///
/// ```
/// use opening_hours::domain::{ClockTime, ClosedDateMap, TimeInterval, WeeklySchedule};
/// use opening_hours::status::determine_status;
/// use chrono::{TimeZone, Utc, Weekday};
///
/// let schedule = WeeklySchedule::new().with_day(
///     Weekday::Mon,
///     vec![TimeInterval::new(
///         ClockTime::parse("9:00").unwrap(),
///         ClockTime::parse("17:00").unwrap(),
///     )],
/// );
///
/// // 2024-06-03 is a Monday
/// let now = Utc.with_ymd_and_hms(2024, 6, 3, 12, 0, 0).unwrap();
/// let status = determine_status(&now, &schedule, &ClosedDateMap::new());
/// assert!(status.open);
/// assert_eq!(status.until, Some(Utc.with_ymd_and_hms(2024, 6, 3, 17, 0, 0).unwrap()));
/// ```
pub fn determine_status<Tz: TimeZone>(
    now: &DateTime<Tz>,
    schedule: &WeeklySchedule,
    closed: &ClosedDateMap,
) -> StatusResult<Tz> {
    let today = now.date_naive();

    if let Some(label) = closed.get(today) {
        trace!(%today, reason = label, "closed date");
        return StatusResult::closed(
            Some(label.to_string()),
            find_next_opening(now, schedule, closed),
        );
    }

    match current_interval_end(now, schedule.intervals(today.weekday())) {
        Some(until) => StatusResult::open_until(until),
        None => StatusResult::closed(None, find_next_opening(now, schedule, closed)),
    }
}

/// End of the first interval containing `now`, bounds inclusive.
fn current_interval_end<Tz: TimeZone>(
    now: &DateTime<Tz>,
    intervals: &[TimeInterval],
) -> Option<DateTime<Tz>> {
    let today = now.date_naive();
    let tz = now.timezone();

    intervals
        .iter()
        .filter_map(|interval| interval.on(today, &tz))
        .find(|(start, end)| start <= now && now <= end)
        .map(|(_, end)| end)
}

/// First interval start strictly after `now` within the lookahead window.
///
/// Days present in `closed` are skipped entirely. Within a day, intervals
/// are taken in schedule order, not sorted by start.
pub fn find_next_opening<Tz: TimeZone>(
    now: &DateTime<Tz>,
    schedule: &WeeklySchedule,
    closed: &ClosedDateMap,
) -> Option<DateTime<Tz>> {
    let today = now.date_naive();
    let tz = now.timezone();

    (0..LOOKAHEAD_DAYS)
        .filter_map(|offset| today.checked_add_days(Days::new(offset)))
        .filter(|day| !closed.contains(*day))
        .find_map(|day| {
            schedule
                .intervals(day.weekday())
                .iter()
                .filter(|interval| !interval.is_inert())
                .filter_map(|interval| interval.start?.on(day, &tz))
                .find(|start| start > now)
        })
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::{ClockTime, WEEKDAYS};
    use chrono::{Duration, NaiveDate, Utc};
    use chrono_tz::Europe::Berlin;
    use proptest::prelude::*;

    /// An interval as (start minute of day, length in minutes).
    fn interval_strategy() -> impl Strategy<Value = TimeInterval> {
        (0u32..1439, 1u32..600).prop_map(|(start, len)| {
            let end = (start + len).min(1439);
            TimeInterval::new(
                ClockTime::from_hm(start / 60, start % 60).unwrap(),
                ClockTime::from_hm(end / 60, end % 60).unwrap(),
            )
        })
    }

    fn schedule_strategy() -> impl Strategy<Value = WeeklySchedule> {
        prop::collection::vec(prop::collection::vec(interval_strategy(), 0..3), 7).prop_map(
            |days| {
                let mut schedule = WeeklySchedule::new();
                for (day, intervals) in WEEKDAYS.into_iter().zip(days) {
                    schedule.set(day, intervals);
                }
                schedule
            },
        )
    }

    fn closed_strategy() -> impl Strategy<Value = ClosedDateMap> {
        prop::collection::vec(0u64..20, 0..5).prop_map(|offsets| {
            let base = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
            let mut closed = ClosedDateMap::new();
            for offset in offsets {
                closed.insert(base + Days::new(offset), "closed");
            }
            closed
        })
    }

    fn now_strategy() -> impl Strategy<Value = DateTime<Utc>> {
        (0i64..14 * 24 * 60).prop_map(|mins| {
            Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap() + Duration::minutes(mins)
        })
    }

    proptest! {
        /// until is set exactly when open; next_open only when closed
        #[test]
        fn result_invariants(
            schedule in schedule_strategy(),
            closed in closed_strategy(),
            now in now_strategy(),
        ) {
            let status = determine_status(&now, &schedule, &closed);
            prop_assert_eq!(status.open, status.until.is_some());
            if status.open {
                prop_assert!(status.next_open.is_none());
                prop_assert!(status.until.unwrap() >= now);
            }
            if let Some(next) = status.next_open {
                prop_assert!(!status.open);
                prop_assert!(next > now);
                prop_assert!(!closed.contains(next.date_naive()));
            }
            prop_assert_eq!(status.reason.is_some(), closed.contains(now.date_naive()));
        }

        /// A closed date is never open
        #[test]
        fn closed_dates_never_open(schedule in schedule_strategy(), now in now_strategy()) {
            let mut closed = ClosedDateMap::new();
            closed.insert(now.date_naive(), "holiday");
            let status = determine_status(&now, &schedule, &closed);
            prop_assert!(!status.open);
            prop_assert_eq!(status.reason.as_deref(), Some("holiday"));
        }

        /// Evaluating twice gives the same result
        #[test]
        fn idempotent(
            schedule in schedule_strategy(),
            closed in closed_strategy(),
            now in now_strategy(),
        ) {
            let now = now.with_timezone(&Berlin);
            let first = determine_status(&now, &schedule, &closed);
            let second = determine_status(&now, &schedule, &closed);
            prop_assert_eq!(first, second);
        }
    }
}

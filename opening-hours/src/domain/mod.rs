//! Domain types for opening hours.
//!
//! Times, dates and regions are parsed and validated here, at the edge.
//! Everything downstream works with these types and cannot fail.

mod closed;
mod date;
mod interval;
mod region;
mod schedule;
mod time;

pub use closed::{
    ClosedDateMap, ClosedDayEntry, DEFAULT_BRIDGE_DAY_LABEL, DEFAULT_CLOSED_DAY_LABEL,
    merge_closed_dates,
};
pub use date::{DateError, parse_date};
pub use interval::TimeInterval;
pub use region::{DEFAULT_REGION, Region};
pub use schedule::{WEEKDAYS, WeeklySchedule};
pub use time::{ClockTime, TimeError};

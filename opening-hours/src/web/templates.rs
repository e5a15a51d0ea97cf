//! Askama templates for the status page.

use askama::Template;
use chrono::{TimeZone, Weekday};

use crate::domain::{Region, WeeklySchedule};
use crate::status::StatusResult;

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Home page showing the current status.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub region: String,
    pub region_name: Option<String>,
    pub regions: Vec<RegionOptionView>,
    pub show_schedule: bool,
    pub status: StatusView,
    pub schedule: Option<Vec<ScheduleRowView>>,
}

// ============================================================================
// Fragment Templates (embeddable, no base.html)
// ============================================================================

/// Status fragment for embedding into other pages.
#[derive(Template)]
#[template(path = "status.html")]
pub struct StatusTemplate {
    pub status: StatusView,
    pub schedule: Option<Vec<ScheduleRowView>>,
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// Status view model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusView {
    pub open: bool,
    pub message: String,
}

impl StatusView {
    /// Create from an evaluation result.
    pub fn from_status<Tz: TimeZone>(status: &StatusResult<Tz>) -> Self
    where
        Tz::Offset: std::fmt::Display,
    {
        Self {
            open: status.open,
            message: status_message(status),
        }
    }

    /// CSS classes for the status container.
    pub fn css_class(&self) -> &'static str {
        if self.open {
            "opening-status is-open"
        } else {
            "opening-status is-closed"
        }
    }
}

/// One row of the weekly schedule table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleRowView {
    pub day: &'static str,
    pub times: String,
}

/// One entry of the region picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionOptionView {
    pub code: String,
    pub name: String,
    pub selected: bool,
}

/// Picker entries for every federal state, with `current` selected.
pub fn region_options(current: &Region) -> Vec<RegionOptionView> {
    Region::federal_states()
        .map(|region| RegionOptionView {
            name: region.name().unwrap_or(region.as_str()).to_string(),
            selected: region == *current,
            code: region.as_str().to_string(),
        })
        .collect()
}

/// Build schedule table rows, Monday first.
///
/// Inert intervals are left out; a day without any complete interval reads
/// "Closed".
pub fn schedule_rows(schedule: &WeeklySchedule) -> Vec<ScheduleRowView> {
    schedule
        .iter()
        .map(|(day, intervals)| {
            let times: Vec<String> = intervals
                .iter()
                .filter_map(|interval| interval.bounds())
                .map(|(start, end)| format!("{start} – {end}"))
                .collect();
            ScheduleRowView {
                day: weekday_label(day),
                times: if times.is_empty() {
                    "Closed".to_string()
                } else {
                    times.join(", ")
                },
            }
        })
        .collect()
}

/// Human-readable summary of a status.
///
/// Times are shown in the result's own timezone.
pub fn status_message<Tz: TimeZone>(status: &StatusResult<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let mut message = if let Some(until) = status.until.as_ref().filter(|_| status.open) {
        format!("We are open until {}.", until.format("%H:%M"))
    } else if let Some(next) = &status.next_open {
        format!(
            "Currently closed. Next opening: {} at {}.",
            next.format("%d.%m.%Y"),
            next.format("%H:%M")
        )
    } else {
        "Currently closed. No upcoming opening hours found.".to_string()
    };

    if let Some(reason) = &status.reason {
        message.push(' ');
        message.push_str(reason);
    }
    message
}

fn weekday_label(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

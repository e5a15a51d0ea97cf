//! JSON configuration document.
//!
//! The document mirrors what an editor would store: a region code, a
//! timezone name, per-weekday lists of `{start, end}` rows and two lists of
//! `{date, reason}` rows. Every field is optional, `null` and `""` count as
//! missing, and malformed values are rejected here so that the evaluator
//! only ever sees valid domain types.

use std::path::Path;

use chrono::Weekday;
use chrono_tz::Tz;
use serde::{Deserialize, Deserializer};
use tracing::warn;

use crate::domain::{
    ClockTime, ClosedDayEntry, Region, TimeInterval, WEEKDAYS, WeeklySchedule, parse_date,
};
use crate::service::{DEFAULT_TIMEZONE, OpeningHours};

use super::ConfigError;

/// Raw opening-hours configuration, as read from JSON.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OpeningHoursConfig {
    /// Region code for statutory holidays (defaults to "BY")
    pub region: Option<String>,

    /// IANA timezone name (defaults to "Europe/Berlin")
    pub timezone: Option<String>,

    /// Opening intervals per weekday
    #[serde(deserialize_with = "null_as_default")]
    pub schedule: ScheduleConfig,

    /// Bridge days; these override every other closure label
    #[serde(deserialize_with = "null_as_default")]
    pub bridge_days: Vec<ClosedDayConfig>,

    /// Additional closed days; these override statutory holiday labels
    #[serde(deserialize_with = "null_as_default")]
    pub closed_days: Vec<ClosedDayConfig>,
}

/// Opening intervals keyed by lowercase English weekday name.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    #[serde(deserialize_with = "null_as_default")]
    pub monday: Vec<IntervalConfig>,
    #[serde(deserialize_with = "null_as_default")]
    pub tuesday: Vec<IntervalConfig>,
    #[serde(deserialize_with = "null_as_default")]
    pub wednesday: Vec<IntervalConfig>,
    #[serde(deserialize_with = "null_as_default")]
    pub thursday: Vec<IntervalConfig>,
    #[serde(deserialize_with = "null_as_default")]
    pub friday: Vec<IntervalConfig>,
    #[serde(deserialize_with = "null_as_default")]
    pub saturday: Vec<IntervalConfig>,
    #[serde(deserialize_with = "null_as_default")]
    pub sunday: Vec<IntervalConfig>,
}

impl ScheduleConfig {
    /// The rows configured for `day`.
    pub fn day(&self, day: Weekday) -> &[IntervalConfig] {
        match day {
            Weekday::Mon => &self.monday,
            Weekday::Tue => &self.tuesday,
            Weekday::Wed => &self.wednesday,
            Weekday::Thu => &self.thursday,
            Weekday::Fri => &self.friday,
            Weekday::Sat => &self.saturday,
            Weekday::Sun => &self.sunday,
        }
    }
}

/// One schedule row. Times are "H:MM" or "HH:MM".
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct IntervalConfig {
    pub start: Option<String>,
    pub end: Option<String>,
}

/// One closure row. The date is "YYYY-MM-DD".
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ClosedDayConfig {
    pub date: Option<String>,
    pub reason: Option<String>,
}

impl OpeningHoursConfig {
    /// Read and parse a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Parse a configuration document.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Validate the document into [`OpeningHours`].
    ///
    /// An unknown timezone name falls back to Europe/Berlin with a warning;
    /// malformed times and dates are errors.
    pub fn into_opening_hours(self) -> Result<OpeningHours, ConfigError> {
        let region = non_empty(self.region.as_deref())
            .map(Region::new)
            .unwrap_or_default();
        let timezone = resolve_timezone(self.timezone.as_deref());

        let mut schedule = WeeklySchedule::new();
        for day in WEEKDAYS {
            let intervals = self
                .schedule
                .day(day)
                .iter()
                .enumerate()
                .map(|(i, row)| {
                    let field = format!("schedule.{}[{i}]", weekday_key(day));
                    parse_interval(row, &field)
                })
                .collect::<Result<Vec<_>, _>>()?;
            schedule.set(day, intervals);
        }

        let closed_days = parse_entries(&self.closed_days, "closed_days")?;
        let bridge_days = parse_entries(&self.bridge_days, "bridge_days")?;

        Ok(OpeningHours::new(region, timezone, schedule)
            .with_closed_days(closed_days)
            .with_bridge_days(bridge_days))
    }
}

/// Configuration key for a weekday.
pub fn weekday_key(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
        Weekday::Sun => "sunday",
    }
}

fn resolve_timezone(name: Option<&str>) -> Tz {
    let Some(name) = non_empty(name) else {
        return DEFAULT_TIMEZONE;
    };
    name.parse().unwrap_or_else(|_| {
        warn!(
            timezone = name,
            fallback = %DEFAULT_TIMEZONE,
            "unknown timezone, using fallback"
        );
        DEFAULT_TIMEZONE
    })
}

fn parse_interval(row: &IntervalConfig, field: &str) -> Result<TimeInterval, ConfigError> {
    Ok(TimeInterval {
        start: parse_bound(row.start.as_deref(), &format!("{field}.start"))?,
        end: parse_bound(row.end.as_deref(), &format!("{field}.end"))?,
    })
}

fn parse_bound(value: Option<&str>, field: &str) -> Result<Option<ClockTime>, ConfigError> {
    non_empty(value)
        .map(|v| {
            ClockTime::parse(v).map_err(|source| ConfigError::InvalidTime {
                field: field.to_string(),
                value: v.to_string(),
                source,
            })
        })
        .transpose()
}

fn parse_entries(rows: &[ClosedDayConfig], list: &str) -> Result<Vec<ClosedDayEntry>, ConfigError> {
    rows.iter()
        .enumerate()
        .map(|(i, row)| {
            let date = non_empty(row.date.as_deref())
                .map(|d| {
                    parse_date(d).map_err(|source| ConfigError::InvalidDate {
                        field: format!("{list}[{i}].date"),
                        source,
                    })
                })
                .transpose()?;
            Ok(ClosedDayEntry {
                date,
                reason: non_empty(row.reason.as_deref()).map(str::to_string),
            })
        })
        .collect()
}

/// Trimmed value, treating blank strings as missing.
fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::io::Write;

    const FULL: &str = r#"{
        "region": "sn",
        "timezone": "Europe/Vienna",
        "schedule": {
            "monday": [{ "start": "9:00", "end": "12:30" }, { "start": "13:30", "end": "18:00" }],
            "tuesday": [],
            "saturday": [{ "start": "10:00", "end": "" }]
        },
        "bridge_days": [{ "date": "2024-05-10", "reason": "Brückentag" }],
        "closed_days": [{ "date": "2024-12-24", "reason": null }, { "date": "", "reason": "ignored" }]
    }"#;

    #[test]
    fn full_document() {
        let hours = OpeningHoursConfig::from_json(FULL)
            .unwrap()
            .into_opening_hours()
            .unwrap();

        assert_eq!(hours.region, Region::new("SN"));
        assert_eq!(hours.timezone, chrono_tz::Europe::Vienna);

        let monday = hours.schedule.intervals(Weekday::Mon);
        assert_eq!(monday.len(), 2);
        assert_eq!(monday[1].start, ClockTime::from_hm(13, 30));
        assert!(hours.schedule.intervals(Weekday::Tue).is_empty());
        assert!(hours.schedule.intervals(Weekday::Sun).is_empty());

        let saturday = hours.schedule.intervals(Weekday::Sat);
        assert_eq!(saturday.len(), 1);
        assert!(saturday[0].is_inert());

        assert_eq!(
            hours.bridge_days,
            vec![ClosedDayEntry::new(
                NaiveDate::from_ymd_opt(2024, 5, 10).unwrap(),
                Some("Brückentag")
            )]
        );
        assert_eq!(hours.closed_days.len(), 2);
        assert_eq!(hours.closed_days[0].reason, None);
        assert_eq!(hours.closed_days[1].date, None);
    }

    #[test]
    fn empty_document_uses_defaults() {
        let hours = OpeningHoursConfig::from_json("{}")
            .unwrap()
            .into_opening_hours()
            .unwrap();
        assert_eq!(hours.region, Region::new("BY"));
        assert_eq!(hours.timezone, DEFAULT_TIMEZONE);
        assert!(hours.schedule.is_always_closed());
        assert!(hours.closed_days.is_empty());
        assert!(hours.bridge_days.is_empty());
    }

    #[test]
    fn nulls_are_empty() {
        let json = r#"{ "region": null, "schedule": { "monday": null }, "bridge_days": null }"#;
        let hours = OpeningHoursConfig::from_json(json)
            .unwrap()
            .into_opening_hours()
            .unwrap();
        assert_eq!(hours.region, Region::new("BY"));
        assert!(hours.bridge_days.is_empty());
    }

    #[test]
    fn unknown_timezone_falls_back() {
        let hours = OpeningHoursConfig::from_json(r#"{ "timezone": "Mars/Olympus_Mons" }"#)
            .unwrap()
            .into_opening_hours()
            .unwrap();
        assert_eq!(hours.timezone, DEFAULT_TIMEZONE);
    }

    #[test]
    fn malformed_time_names_field() {
        let json = r#"{ "schedule": { "friday": [{ "start": "9:00", "end": "25:00" }] } }"#;
        let err = OpeningHoursConfig::from_json(json)
            .unwrap()
            .into_opening_hours()
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "schedule.friday[0].end: invalid time: hour must be 0-23 (got \"25:00\")"
        );
    }

    #[test]
    fn malformed_date_names_field() {
        let json = r#"{ "bridge_days": [{ "date": "2024-05-10" }, { "date": "10.05.2024" }] }"#;
        let err = OpeningHoursConfig::from_json(json)
            .unwrap()
            .into_opening_hours()
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidDate { .. }));
        assert!(err.to_string().starts_with("bridge_days[1].date: "));
    }

    #[test]
    fn wrong_shape_is_json_error() {
        let err = OpeningHoursConfig::from_json(r#"{ "schedule": "weekdays" }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(FULL.as_bytes()).unwrap();

        let config = OpeningHoursConfig::load(file.path()).unwrap();
        assert_eq!(config.region.as_deref(), Some("sn"));
        assert_eq!(config.schedule.monday.len(), 2);
    }

    #[test]
    fn load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = OpeningHoursConfig::load(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("missing.json"));
    }

    #[test]
    fn weekday_keys() {
        let keys: Vec<_> = WEEKDAYS.into_iter().map(weekday_key).collect();
        assert_eq!(
            keys,
            ["monday", "tuesday", "wednesday", "thursday", "friday", "saturday", "sunday"]
        );
    }
}

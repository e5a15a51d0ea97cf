//! Data transfer objects for web requests and responses.

use chrono::{DateTime, SecondsFormat};
use chrono_tz::Tz;
use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::Region;
use crate::holidays::HolidaySet;
use crate::status::StatusResult;

use super::templates::status_message;

/// Query for the status endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct StatusQuery {
    /// Region override (defaults to the configured region)
    pub region: Option<String>,

    /// Include the weekly schedule table (HTML only)
    #[serde(default, deserialize_with = "flag")]
    pub show_schedule: bool,

    /// Instant to evaluate, RFC 3339 (defaults to now)
    pub at: Option<String>,
}

/// Opening status.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    /// Whether the business is open
    pub open: bool,

    /// End of the current opening interval (only while open)
    pub until: Option<String>,

    /// Closed-date label when today is a holiday or closure
    pub reason: Option<String>,

    /// Next opening instant (only while closed)
    pub next_open: Option<String>,

    /// Region the holidays were computed for
    pub region: String,

    /// Civil timezone used for evaluation
    pub timezone: String,

    /// Human-readable summary
    pub message: String,
}

impl StatusResponse {
    /// Create from an evaluation result.
    pub fn from_status(status: &StatusResult<Tz>, region: &Region, timezone: Tz) -> Self {
        Self {
            open: status.open,
            until: status.until.as_ref().map(rfc3339),
            reason: status.reason.clone(),
            next_open: status.next_open.as_ref().map(rfc3339),
            region: region.to_string(),
            timezone: timezone.name().to_string(),
            message: status_message(status),
        }
    }
}

/// Query for the holiday listing.
#[derive(Debug, Deserialize)]
pub struct HolidaysQuery {
    /// Region (defaults to the configured region)
    pub region: Option<String>,

    /// Year (defaults to the current year)
    pub year: Option<i32>,
}

/// A statutory holiday.
#[derive(Debug, Serialize)]
pub struct HolidayResult {
    /// Date as YYYY-MM-DD
    pub date: String,

    /// Stable identifier
    pub id: String,

    /// Statutory name
    pub label: String,
}

/// Holidays of one region and year.
#[derive(Debug, Serialize)]
pub struct HolidaysResponse {
    pub region: String,
    pub region_name: Option<String>,
    pub year: i32,
    pub holidays: Vec<HolidayResult>,
}

impl HolidaysResponse {
    /// Create from a computed holiday set.
    pub fn from_set(set: &HolidaySet) -> Self {
        Self {
            region: set.region().to_string(),
            region_name: set.region().name().map(str::to_string),
            year: set.year(),
            holidays: set
                .iter()
                .map(|(date, holiday)| HolidayResult {
                    date: date.format("%Y-%m-%d").to_string(),
                    id: holiday.id().to_string(),
                    label: holiday.label().to_string(),
                })
                .collect(),
        }
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

/// Query flag: set unless empty, `0` or `false`.
fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    let value = value.trim();
    Ok(!(value.is_empty() || value == "0" || value.eq_ignore_ascii_case("false")))
}

fn rfc3339(dt: &DateTime<Tz>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Secs, false)
}

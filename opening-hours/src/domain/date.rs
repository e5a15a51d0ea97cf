//! Calendar date parsing.

use chrono::NaiveDate;

/// Error returned when parsing an invalid calendar date.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid date {value:?}: expected YYYY-MM-DD")]
pub struct DateError {
    value: String,
}

/// Parse a calendar date in `YYYY-MM-DD` format.
///
/// # Examples
///
/// ```
/// use opening_hours::domain::parse_date;
/// use chrono::NaiveDate;
///
/// assert_eq!(
///     parse_date("2024-12-24").unwrap(),
///     NaiveDate::from_ymd_opt(2024, 12, 24).unwrap()
/// );
/// assert!(parse_date("24.12.2024").is_err());
/// assert!(parse_date("2024-02-30").is_err());
/// ```
pub fn parse_date(s: &str) -> Result<NaiveDate, DateError> {
    let bytes = s.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !well_formed {
        return Err(DateError {
            value: s.to_string(),
        });
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| DateError {
        value: s.to_string(),
    })
}

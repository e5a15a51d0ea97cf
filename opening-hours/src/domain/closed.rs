//! Closed dates and the precedence rules for merging them.

use std::collections::BTreeMap;

use chrono::NaiveDate;

/// Label used for a custom closed day configured without a reason.
pub const DEFAULT_CLOSED_DAY_LABEL: &str = "Individual closed day";

/// Label used for a bridge day configured without a reason.
pub const DEFAULT_BRIDGE_DAY_LABEL: &str = "Bridge day";

/// A manually configured closure: a custom closed day or a bridge day.
///
/// Entries without a date are ignored when merging. Entries without a
/// reason receive a default label.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClosedDayEntry {
    pub date: Option<NaiveDate>,
    pub reason: Option<String>,
}

impl ClosedDayEntry {
    /// Create an entry for `date` with an optional reason.
    pub fn new(date: NaiveDate, reason: Option<&str>) -> Self {
        Self {
            date: Some(date),
            reason: reason.map(str::to_string),
        }
    }
}

/// Calendar dates on which the business is closed, each with a reason.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClosedDateMap {
    dates: BTreeMap<NaiveDate, String>,
}

impl ClosedDateMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `date` closed, replacing any existing label.
    pub fn insert(&mut self, date: NaiveDate, label: impl Into<String>) {
        self.dates.insert(date, label.into());
    }

    /// The label for `date`, if it is closed.
    pub fn get(&self, date: NaiveDate) -> Option<&str> {
        self.dates.get(&date).map(String::as_str)
    }

    /// Whether `date` is closed.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.contains_key(&date)
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Iterate over closed dates in calendar order.
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, &str)> {
        self.dates.iter().map(|(date, label)| (*date, label.as_str()))
    }

    /// Overlay manual entries, replacing labels on matching dates.
    ///
    /// Dateless entries are skipped; a missing or blank reason becomes
    /// `default_label`.
    pub fn overlay(&mut self, entries: &[ClosedDayEntry], default_label: &str) {
        for entry in entries {
            let Some(date) = entry.date else {
                continue;
            };
            let label = entry
                .reason
                .as_deref()
                .map(str::trim)
                .filter(|r| !r.is_empty())
                .unwrap_or(default_label);
            self.insert(date, label);
        }
    }
}

impl FromIterator<(NaiveDate, String)> for ClosedDateMap {
    fn from_iter<I: IntoIterator<Item = (NaiveDate, String)>>(iter: I) -> Self {
        Self {
            dates: iter.into_iter().collect(),
        }
    }
}

/// Merge statutory holidays with manual closures.
///
/// Precedence, lowest first: statutory holidays, custom closed days, bridge
/// days. A later source replaces the label of an earlier one on the same date.
pub fn merge_closed_dates(
    holidays: impl IntoIterator<Item = (NaiveDate, String)>,
    custom: &[ClosedDayEntry],
    bridges: &[ClosedDayEntry],
) -> ClosedDateMap {
    let mut closed: ClosedDateMap = holidays.into_iter().collect();
    closed.overlay(custom, DEFAULT_CLOSED_DAY_LABEL);
    closed.overlay(bridges, DEFAULT_BRIDGE_DAY_LABEL);
    closed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn holidays() -> Vec<(NaiveDate, String)> {
        vec![
            (date(2024, 5, 9), "Christi Himmelfahrt".to_string()),
            (date(2024, 12, 25), "1. Weihnachtstag".to_string()),
        ]
    }

    #[test]
    fn holidays_alone() {
        let closed = merge_closed_dates(holidays(), &[], &[]);
        assert_eq!(closed.len(), 2);
        assert_eq!(closed.get(date(2024, 5, 9)), Some("Christi Himmelfahrt"));
    }

    #[test]
    fn custom_overrides_holiday() {
        let custom = [ClosedDayEntry::new(date(2024, 12, 25), Some("Inventory"))];
        let closed = merge_closed_dates(holidays(), &custom, &[]);
        assert_eq!(closed.get(date(2024, 12, 25)), Some("Inventory"));
    }

    #[test]
    fn bridge_overrides_custom_and_holiday() {
        let custom = [
            ClosedDayEntry::new(date(2024, 5, 9), Some("Staff outing")),
            ClosedDayEntry::new(date(2024, 5, 10), Some("Staff outing")),
        ];
        let bridges = [
            ClosedDayEntry::new(date(2024, 5, 9), Some("Long weekend")),
            ClosedDayEntry::new(date(2024, 5, 10), Some("Long weekend")),
        ];
        let closed = merge_closed_dates(holidays(), &custom, &bridges);
        assert_eq!(closed.get(date(2024, 5, 9)), Some("Long weekend"));
        assert_eq!(closed.get(date(2024, 5, 10)), Some("Long weekend"));
    }

    #[test]
    fn missing_reason_uses_default_label() {
        let custom = [ClosedDayEntry::new(date(2024, 7, 1), None)];
        let bridges = [ClosedDayEntry::new(date(2024, 7, 2), Some("   "))];
        let closed = merge_closed_dates(Vec::new(), &custom, &bridges);
        assert_eq!(closed.get(date(2024, 7, 1)), Some(DEFAULT_CLOSED_DAY_LABEL));
        assert_eq!(closed.get(date(2024, 7, 2)), Some(DEFAULT_BRIDGE_DAY_LABEL));
    }

    #[test]
    fn dateless_entries_are_skipped() {
        let custom = [ClosedDayEntry {
            date: None,
            reason: Some("Never applied".to_string()),
        }];
        let closed = merge_closed_dates(Vec::new(), &custom, &[]);
        assert!(closed.is_empty());
    }

    #[test]
    fn iter_is_in_calendar_order() {
        let bridges = [ClosedDayEntry::new(date(2024, 1, 2), None)];
        let closed = merge_closed_dates(holidays(), &[], &bridges);
        let dates: Vec<_> = closed.iter().map(|(d, _)| d).collect();
        assert_eq!(dates, vec![date(2024, 1, 2), date(2024, 5, 9), date(2024, 12, 25)]);
    }
}

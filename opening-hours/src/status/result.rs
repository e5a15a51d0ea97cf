//! Evaluation result.

use chrono::{DateTime, TimeZone};

/// Whether the business is open at a given instant.
///
/// `until` is only set while open, `next_open` only while closed. `reason`
/// carries the closed-date label when the evaluated day is a holiday or
/// configured closure, and is `None` for ordinary schedule closures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusResult<Tz: TimeZone> {
    pub open: bool,
    pub until: Option<DateTime<Tz>>,
    pub reason: Option<String>,
    pub next_open: Option<DateTime<Tz>>,
}

impl<Tz: TimeZone> StatusResult<Tz> {
    /// Open until `until`.
    pub fn open_until(until: DateTime<Tz>) -> Self {
        Self {
            open: true,
            until: Some(until),
            reason: None,
            next_open: None,
        }
    }

    /// Closed, optionally with a reason and a next opening.
    pub fn closed(reason: Option<String>, next_open: Option<DateTime<Tz>>) -> Self {
        Self {
            open: false,
            until: None,
            reason,
            next_open,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn constructors_respect_invariants() {
        let at = Utc.with_ymd_and_hms(2024, 6, 3, 15, 0, 0).unwrap();

        let open = StatusResult::open_until(at);
        assert!(open.open);
        assert_eq!(open.until, Some(at));
        assert!(open.next_open.is_none());
        assert!(open.reason.is_none());

        let closed = StatusResult::closed(Some("Neujahr".to_string()), Some(at));
        assert!(!closed.open);
        assert!(closed.until.is_none());
        assert_eq!(closed.next_open, Some(at));
    }
}

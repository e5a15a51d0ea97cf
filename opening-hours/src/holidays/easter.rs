//! Gregorian computus.

use chrono::NaiveDate;

/// Date of Easter Sunday in the Gregorian calendar.
///
/// Uses the anonymous Gregorian algorithm (Meeus/Jones/Butcher), which is
/// exact for every Gregorian year. Returns `None` for years outside the
/// range [`NaiveDate`] can represent.
///
/// # Examples
///
/// ```
/// use opening_hours::holidays::easter_sunday;
/// use chrono::NaiveDate;
///
/// assert_eq!(easter_sunday(2024), NaiveDate::from_ymd_opt(2024, 3, 31));
/// assert_eq!(easter_sunday(2025), NaiveDate::from_ymd_opt(2025, 4, 20));
/// assert_eq!(easter_sunday(i32::MAX), None);
/// ```
pub fn easter_sunday(year: i32) -> Option<NaiveDate> {
    let a = year.rem_euclid(19);
    let b = year.div_euclid(100);
    let c = year.rem_euclid(100);
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15).rem_euclid(30);
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k).rem_euclid(7);
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;

    // month is 3 or 4 and day is 1..=31 by construction
    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use chrono::{Datelike, Weekday};
    use proptest::prelude::*;

    proptest! {
        /// Easter always falls between March 22 and April 25
        #[test]
        fn within_bounds(year in 1583i32..10000) {
            let easter = easter_sunday(year).unwrap();
            prop_assert!(easter >= NaiveDate::from_ymd_opt(year, 3, 22).unwrap());
            prop_assert!(easter <= NaiveDate::from_ymd_opt(year, 4, 25).unwrap());
        }

        /// Easter is always a Sunday
        #[test]
        fn is_sunday(year in 1583i32..10000) {
            prop_assert_eq!(easter_sunday(year).unwrap().weekday(), Weekday::Sun);
        }
    }
}

//! Statutory holiday rule table.
//!
//! Each row pairs a holiday with how its date is derived and which regions
//! observe it. Adding a holiday or extending a region list is a change to
//! [`RULES`] alone.

use chrono::{Datelike, Days, NaiveDate};

use super::Holiday;

/// How a holiday's date is derived for a given year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateRule {
    /// Same calendar day every year.
    Fixed { month: u32, day: u32 },
    /// Days relative to Easter Sunday.
    EasterOffset(i64),
    /// The last Wednesday strictly before November 23.
    WednesdayBeforeNov23,
}

impl DateRule {
    /// Resolve the rule for `year`, given that year's Easter Sunday.
    pub fn resolve(&self, year: i32, easter: NaiveDate) -> Option<NaiveDate> {
        match *self {
            DateRule::Fixed { month, day } => NaiveDate::from_ymd_opt(year, month, day),
            DateRule::EasterOffset(offset) => {
                let days = Days::new(offset.unsigned_abs());
                if offset < 0 {
                    easter.checked_sub_days(days)
                } else {
                    easter.checked_add_days(days)
                }
            }
            DateRule::WednesdayBeforeNov23 => {
                let anchor = NaiveDate::from_ymd_opt(year, 11, 23)?;
                // Strictly before: a Wednesday the 23rd steps back a full week.
                let offset = (anchor.weekday().num_days_from_monday() + 5) % 7;
                let back = if offset == 0 { 7 } else { offset };
                anchor.checked_sub_days(Days::new(u64::from(back)))
            }
        }
    }
}

/// Which regions observe a holiday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Observance {
    Nationwide,
    Regions(&'static [&'static str]),
}

/// One row of the holiday table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HolidayRule {
    pub holiday: Holiday,
    pub date: DateRule,
    pub observance: Observance,
}

const fn fixed(holiday: Holiday, month: u32, day: u32, observance: Observance) -> HolidayRule {
    HolidayRule {
        holiday,
        date: DateRule::Fixed { month, day },
        observance,
    }
}

const fn easter(holiday: Holiday, offset: i64, observance: Observance) -> HolidayRule {
    HolidayRule {
        holiday,
        date: DateRule::EasterOffset(offset),
        observance,
    }
}

/// Every statutory holiday, in application order.
///
/// Rules are applied top to bottom; on a shared date the later row's
/// holiday is kept.
pub const RULES: &[HolidayRule] = &[
    fixed(Holiday::NewYearsDay, 1, 1, Observance::Nationwide),
    fixed(Holiday::LabourDay, 5, 1, Observance::Nationwide),
    fixed(Holiday::GermanUnityDay, 10, 3, Observance::Nationwide),
    fixed(Holiday::ChristmasDay, 12, 25, Observance::Nationwide),
    fixed(Holiday::SecondChristmasDay, 12, 26, Observance::Nationwide),
    easter(Holiday::GoodFriday, -2, Observance::Nationwide),
    easter(Holiday::EasterMonday, 1, Observance::Nationwide),
    easter(Holiday::AscensionDay, 39, Observance::Nationwide),
    easter(Holiday::WhitMonday, 50, Observance::Nationwide),
    easter(
        Holiday::CorpusChristi,
        60,
        Observance::Regions(&["BW", "BY", "HE", "NW", "RP", "SL"]),
    ),
    fixed(Holiday::Epiphany, 1, 6, Observance::Regions(&["BW", "BY", "ST"])),
    fixed(
        Holiday::ReformationDay,
        10,
        31,
        Observance::Regions(&["BB", "HB", "HH", "MV", "NI", "SH", "SN", "ST", "TH"]),
    ),
    fixed(Holiday::AssumptionDay, 8, 15, Observance::Regions(&["BY", "SL"])),
    fixed(Holiday::WorldChildrensDay, 9, 20, Observance::Regions(&["TH"])),
    fixed(Holiday::InternationalWomensDay, 3, 8, Observance::Regions(&["BE", "MV"])),
    HolidayRule {
        holiday: Holiday::RepentanceDay,
        date: DateRule::WednesdayBeforeNov23,
        observance: Observance::Regions(&["SN"]),
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn fixed_rule() {
        let rule = DateRule::Fixed { month: 10, day: 3 };
        assert_eq!(rule.resolve(2024, date(2024, 3, 31)), Some(date(2024, 10, 3)));
    }

    #[test]
    fn easter_offsets() {
        let easter = date(2024, 3, 31);
        assert_eq!(
            DateRule::EasterOffset(-2).resolve(2024, easter),
            Some(date(2024, 3, 29))
        );
        assert_eq!(
            DateRule::EasterOffset(39).resolve(2024, easter),
            Some(date(2024, 5, 9))
        );
        assert_eq!(DateRule::EasterOffset(0).resolve(2024, easter), Some(easter));
    }

    #[test]
    fn repentance_day_is_wednesday_before_nov_23() {
        // Nov 23 2024 is a Saturday
        assert_eq!(
            DateRule::WednesdayBeforeNov23.resolve(2024, date(2024, 3, 31)),
            Some(date(2024, 11, 20))
        );
        // Nov 23 2023 is a Thursday
        assert_eq!(
            DateRule::WednesdayBeforeNov23.resolve(2023, date(2023, 4, 9)),
            Some(date(2023, 11, 22))
        );
    }

    #[test]
    fn repentance_day_skips_a_wednesday_anchor() {
        // Nov 23 2022 is itself a Wednesday; the previous week's is used
        assert_eq!(date(2022, 11, 23).weekday(), Weekday::Wed);
        assert_eq!(
            DateRule::WednesdayBeforeNov23.resolve(2022, date(2022, 4, 17)),
            Some(date(2022, 11, 16))
        );
    }

    #[test]
    fn repentance_day_always_wednesday() {
        for year in 1990..2100 {
            let day = DateRule::WednesdayBeforeNov23
                .resolve(year, date(year, 4, 1))
                .unwrap();
            assert_eq!(day.weekday(), Weekday::Wed);
            assert!(day < date(year, 11, 23));
            assert!(day >= date(year, 11, 16));
        }
    }

    #[test]
    fn every_holiday_has_one_rule() {
        for rule in RULES {
            let count = RULES.iter().filter(|r| r.holiday == rule.holiday).count();
            assert_eq!(count, 1, "{:?}", rule.holiday);
        }
    }
}

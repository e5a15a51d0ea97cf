//! Statutory holiday calculation for German federal states.
//!
//! A [`HolidaySet`] covers one region and one year. It contains the
//! nationwide fixed-date holidays, the Easter-relative movable feasts, and
//! whatever regional holidays the rule table grants the region. Unknown
//! regions receive only the nationwide holidays.

mod easter;
mod rules;

use std::collections::BTreeMap;
use std::fmt;
use std::ops::RangeInclusive;

use chrono::NaiveDate;
use tracing::debug;

use crate::domain::Region;

pub use easter::easter_sunday;
pub use rules::{DateRule, HolidayRule, Observance, RULES};

/// Years accepted from callers: Gregorian and four digits.
pub const SUPPORTED_YEARS: RangeInclusive<i32> = 1583..=9999;

/// A statutory holiday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Holiday {
    NewYearsDay,
    Epiphany,
    InternationalWomensDay,
    GoodFriday,
    EasterMonday,
    LabourDay,
    AscensionDay,
    WhitMonday,
    CorpusChristi,
    AssumptionDay,
    WorldChildrensDay,
    GermanUnityDay,
    ReformationDay,
    RepentanceDay,
    ChristmasDay,
    SecondChristmasDay,
}

impl Holiday {
    /// Stable machine-readable identifier.
    pub fn id(&self) -> &'static str {
        match self {
            Holiday::NewYearsDay => "new_years_day",
            Holiday::Epiphany => "epiphany",
            Holiday::InternationalWomensDay => "international_womens_day",
            Holiday::GoodFriday => "good_friday",
            Holiday::EasterMonday => "easter_monday",
            Holiday::LabourDay => "labour_day",
            Holiday::AscensionDay => "ascension_day",
            Holiday::WhitMonday => "whit_monday",
            Holiday::CorpusChristi => "corpus_christi",
            Holiday::AssumptionDay => "assumption_day",
            Holiday::WorldChildrensDay => "world_childrens_day",
            Holiday::GermanUnityDay => "german_unity_day",
            Holiday::ReformationDay => "reformation_day",
            Holiday::RepentanceDay => "day_of_prayer_and_repentance",
            Holiday::ChristmasDay => "christmas_day",
            Holiday::SecondChristmasDay => "second_christmas_day",
        }
    }

    /// The statutory German name.
    pub fn label(&self) -> &'static str {
        match self {
            Holiday::NewYearsDay => "Neujahr",
            Holiday::Epiphany => "Heilige Drei Könige",
            Holiday::InternationalWomensDay => "Internationaler Frauentag",
            Holiday::GoodFriday => "Karfreitag",
            Holiday::EasterMonday => "Ostermontag",
            Holiday::LabourDay => "Tag der Arbeit",
            Holiday::AscensionDay => "Christi Himmelfahrt",
            Holiday::WhitMonday => "Pfingstmontag",
            Holiday::CorpusChristi => "Fronleichnam",
            Holiday::AssumptionDay => "Mariä Himmelfahrt",
            Holiday::WorldChildrensDay => "Weltkindertag",
            Holiday::GermanUnityDay => "Tag der Deutschen Einheit",
            Holiday::ReformationDay => "Reformationstag",
            Holiday::RepentanceDay => "Buß- und Bettag",
            Holiday::ChristmasDay => "1. Weihnachtstag",
            Holiday::SecondChristmasDay => "2. Weihnachtstag",
        }
    }
}

impl fmt::Display for Holiday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The statutory holidays of one region in one year, keyed by date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidaySet {
    region: Region,
    year: i32,
    holidays: BTreeMap<NaiveDate, Holiday>,
}

impl HolidaySet {
    pub fn region(&self) -> &Region {
        &self.region
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// The holiday on `date`, if any.
    pub fn get(&self, date: NaiveDate) -> Option<Holiday> {
        self.holidays.get(&date).copied()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.holidays.contains_key(&date)
    }

    pub fn len(&self) -> usize {
        self.holidays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty()
    }

    /// Iterate over holidays in calendar order.
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, Holiday)> + '_ {
        self.holidays.iter().map(|(date, holiday)| (*date, *holiday))
    }

    /// Date/label pairs, suitable for merging into a
    /// [`ClosedDateMap`](crate::domain::ClosedDateMap).
    pub fn labels(&self) -> impl Iterator<Item = (NaiveDate, String)> + '_ {
        self.iter()
            .map(|(date, holiday)| (date, holiday.label().to_string()))
    }
}

/// Derives statutory holidays from a rule table.
///
/// The calculator holds no state besides its rules; the default instance
/// uses the German table in [`RULES`].
///
/// # Examples
///
/// ```
/// use opening_hours::domain::Region;
/// use opening_hours::holidays::{Holiday, HolidayCalculator};
/// use chrono::NaiveDate;
///
/// let set = HolidayCalculator::default().compute(&Region::new("sn"), 2024);
/// let repentance = NaiveDate::from_ymd_opt(2024, 11, 20).unwrap();
/// assert_eq!(set.get(repentance), Some(Holiday::RepentanceDay));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct HolidayCalculator {
    rules: &'static [HolidayRule],
}

impl HolidayCalculator {
    /// Create a calculator over a custom rule table.
    pub fn new(rules: &'static [HolidayRule]) -> Self {
        Self { rules }
    }

    /// Compute every holiday `region` observes in `year`.
    ///
    /// A year outside the representable date range yields an empty set.
    pub fn compute(&self, region: &Region, year: i32) -> HolidaySet {
        let mut holidays = BTreeMap::new();
        let Some(easter) = easter_sunday(year) else {
            debug!(region = %region, year, "year outside supported date range");
            return HolidaySet {
                region: region.clone(),
                year,
                holidays,
            };
        };

        for rule in self.rules {
            let observed = match rule.observance {
                Observance::Nationwide => true,
                Observance::Regions(codes) => region.is_any_of(codes),
            };
            if !observed {
                continue;
            }
            if let Some(date) = rule.date.resolve(year, easter) {
                holidays.insert(date, rule.holiday);
            }
        }

        debug!(
            region = %region,
            year,
            holidays = holidays.len(),
            "computed statutory holidays"
        );

        HolidaySet {
            region: region.clone(),
            year,
            holidays,
        }
    }
}

impl Default for HolidayCalculator {
    fn default() -> Self {
        Self::new(RULES)
    }
}

/// Compute the statutory holidays for `region` in `year`.
pub fn compute(region: &Region, year: i32) -> HolidaySet {
    HolidayCalculator::default().compute(region, year)
}

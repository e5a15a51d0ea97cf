//! Region codes for holiday lookup.

use std::fmt;

/// The region used when none is configured.
pub const DEFAULT_REGION: &str = "BY";

/// German federal states and their display names.
const FEDERAL_STATES: &[(&str, &str)] = &[
    ("BW", "Baden-Württemberg"),
    ("BY", "Bayern"),
    ("BE", "Berlin"),
    ("BB", "Brandenburg"),
    ("HB", "Bremen"),
    ("HH", "Hamburg"),
    ("HE", "Hessen"),
    ("MV", "Mecklenburg-Vorpommern"),
    ("NI", "Niedersachsen"),
    ("NW", "Nordrhein-Westfalen"),
    ("RP", "Rheinland-Pfalz"),
    ("SL", "Saarland"),
    ("SN", "Sachsen"),
    ("ST", "Sachsen-Anhalt"),
    ("SH", "Schleswig-Holstein"),
    ("TH", "Thüringen"),
];

/// An opaque jurisdiction code such as `"BY"` or `"SN"`.
///
/// Codes are trimmed and uppercased on construction but never validated:
/// an unknown code is a valid region that simply has no regional holidays.
///
/// # Examples
///
/// ```
/// use opening_hours::domain::Region;
///
/// let region = Region::new(" sn ");
/// assert_eq!(region.as_str(), "SN");
/// assert_eq!(region.name(), Some("Sachsen"));
///
/// let unknown = Region::new("xx");
/// assert_eq!(unknown.as_str(), "XX");
/// assert_eq!(unknown.name(), None);
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Region(String);

impl Region {
    /// Create a region from a code, normalising it to uppercase.
    pub fn new(code: &str) -> Self {
        Self(code.trim().to_uppercase())
    }

    /// Returns the normalised code.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the display name if this is a German federal state.
    pub fn name(&self) -> Option<&'static str> {
        FEDERAL_STATES
            .iter()
            .find(|(code, _)| *code == self.0)
            .map(|(_, name)| *name)
    }

    /// Whether this region appears in `codes`.
    pub fn is_any_of(&self, codes: &[&str]) -> bool {
        codes.contains(&self.0.as_str())
    }

    /// All German federal states, in display order.
    pub fn federal_states() -> impl Iterator<Item = Region> {
        FEDERAL_STATES.iter().map(|(code, _)| Region::new(code))
    }
}

impl Default for Region {
    fn default() -> Self {
        Self::new(DEFAULT_REGION)
    }
}

impl fmt::Debug for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Region({})", self.0)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

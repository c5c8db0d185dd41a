//! User-driven control state: selected site and payload range.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Wire value of the "all sites" sentinel.
pub const ALL_SITES_VALUE: &str = "All";
/// Dropdown label of the "all sites" sentinel.
pub const ALL_SITES_LABEL: &str = "All sites";

/// Site dropdown value. Serialized as a bare string, `"All"` for the sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SiteSelection {
    #[default]
    All,
    Site(String),
}

impl SiteSelection {
    pub fn site(name: impl Into<String>) -> Self {
        SiteSelection::Site(name.into())
    }

    pub fn matches(&self, launch_site: &str) -> bool {
        match self {
            SiteSelection::All => true,
            SiteSelection::Site(name) => name == launch_site,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            SiteSelection::All => ALL_SITES_VALUE,
            SiteSelection::Site(name) => name,
        }
    }
}

impl From<String> for SiteSelection {
    fn from(value: String) -> Self {
        if value == ALL_SITES_VALUE {
            SiteSelection::All
        } else {
            SiteSelection::Site(value)
        }
    }
}

impl From<&str> for SiteSelection {
    fn from(value: &str) -> Self {
        SiteSelection::from(value.to_string())
    }
}

impl From<SiteSelection> for String {
    fn from(value: SiteSelection) -> Self {
        match value {
            SiteSelection::All => ALL_SITES_VALUE.to_string(),
            SiteSelection::Site(name) => name,
        }
    }
}

impl fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inclusive payload mass range in kg. Serialized as `[lower, upper]`.
///
/// A range with `lower > upper` is valid and contains nothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct PayloadRange {
    pub lower: f64,
    pub upper: f64,
}

impl PayloadRange {
    pub fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    pub fn contains(&self, payload_mass_kg: f64) -> bool {
        self.lower <= payload_mass_kg && payload_mass_kg <= self.upper
    }
}

impl From<[f64; 2]> for PayloadRange {
    fn from([lower, upper]: [f64; 2]) -> Self {
        Self { lower, upper }
    }
}

impl From<PayloadRange> for [f64; 2] {
    fn from(range: PayloadRange) -> Self {
        [range.lower, range.upper]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_wire_value() {
        assert_eq!(SiteSelection::from("All"), SiteSelection::All);
        assert_eq!(SiteSelection::from("KSC LC-39A"), SiteSelection::site("KSC LC-39A"));
        assert_eq!(serde_json::to_string(&SiteSelection::All).unwrap(), "\"All\"");

        let parsed: SiteSelection = serde_json::from_str("\"VAFB SLC-4E\"").unwrap();
        assert_eq!(parsed, SiteSelection::site("VAFB SLC-4E"));
    }

    #[test]
    fn test_site_matches() {
        assert!(SiteSelection::All.matches("anything"));
        assert!(SiteSelection::site("KSC LC-39A").matches("KSC LC-39A"));
        assert!(!SiteSelection::site("KSC LC-39A").matches("CCAFS LC-40"));
    }

    #[test]
    fn test_range_is_inclusive() {
        let range = PayloadRange::new(500.0, 2490.0);
        assert!(range.contains(500.0));
        assert!(range.contains(2490.0));
        assert!(!range.contains(499.9));
        assert!(!range.contains(2490.1));
    }

    #[test]
    fn test_inverted_range_is_empty() {
        let range = PayloadRange::new(5000.0, 1000.0);
        assert!(!range.contains(1000.0));
        assert!(!range.contains(3000.0));
        assert!(!range.contains(5000.0));
    }

    #[test]
    fn test_range_wire_form() {
        let range: PayloadRange = serde_json::from_str("[0, 10000]").unwrap();
        assert_eq!(range, PayloadRange::new(0.0, 10000.0));
        assert_eq!(serde_json::to_string(&range).unwrap(), "[0.0,10000.0]");
    }
}

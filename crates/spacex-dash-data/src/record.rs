//! A single launch attempt.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Launch outcome, decoded from the 0/1 `class` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Outcome {
    Failure,
    Success,
}

impl Outcome {
    /// Both outcomes in category-axis order.
    pub const ALL: [Outcome; 2] = [Outcome::Failure, Outcome::Success];

    /// Decode the raw `class` value. Accepts `0`/`1` and their float
    /// spellings (`0.0`, `1.0`); anything else is `None`.
    pub fn from_class(raw: &str) -> Option<Self> {
        match raw.parse::<f64>().ok()? {
            v if v == 0.0 => Some(Outcome::Failure),
            v if v == 1.0 => Some(Outcome::Success),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Outcome::Failure => "Failure",
            Outcome::Success => "Success",
        }
    }

    pub fn is_success(self) -> bool {
        self == Outcome::Success
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchRecord {
    pub launch_site: String,
    pub payload_mass_kg: f64,
    pub booster_version_category: String,
    pub outcome: Outcome,
    pub flight_number: Option<u32>,
    pub booster_version: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_class() {
        assert_eq!(Outcome::from_class("0"), Some(Outcome::Failure));
        assert_eq!(Outcome::from_class("1"), Some(Outcome::Success));
        assert_eq!(Outcome::from_class("1.0"), Some(Outcome::Success));
        assert_eq!(Outcome::from_class("2"), None);
        assert_eq!(Outcome::from_class("0.5"), None);
        assert_eq!(Outcome::from_class("yes"), None);
        assert_eq!(Outcome::from_class(""), None);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Outcome::Failure.label(), "Failure");
        assert_eq!(Outcome::Success.to_string(), "Success");
        assert!(Outcome::Success.is_success());
        assert!(!Outcome::Failure.is_success());
    }
}

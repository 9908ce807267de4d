//! Format module - the layout conventions a results page can follow

use serde::{Deserialize, Serialize};
use std::fmt;

/// Layout convention of a results page
///
/// Determined once per page; every race section on a page shares it:
/// - FormatOne: "Mens 5,000 Meters Varsity Boys" headers with a Team Scores block
/// - FormatTwo: "Event 1  Boys 5k Run CC Varsity" numbered events
/// - FormatThree: free-form headings such as "Freshman Girls 5k Run Results"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormatVariant {
    /// Mens/Womens ... Meters headers
    FormatOne,

    /// Event N numbering
    FormatTwo,

    /// Free-form race-name headings
    FormatThree,
}

impl FormatVariant {
    /// Get the variant name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            FormatVariant::FormatOne => "format-one",
            FormatVariant::FormatTwo => "format-two",
            FormatVariant::FormatThree => "format-three",
        }
    }

    /// Parse a variant from its name
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "format-one" | "one" | "1" => Some(FormatVariant::FormatOne),
            "format-two" | "two" | "2" => Some(FormatVariant::FormatTwo),
            "format-three" | "three" | "3" => Some(FormatVariant::FormatThree),
            _ => None,
        }
    }
}

impl fmt::Display for FormatVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for FormatVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid format variant: {}", s))
    }
}

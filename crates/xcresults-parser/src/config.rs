//! Configuration for the parser

use serde::{Deserialize, Serialize};

/// Configuration for [`MeetParser`](crate::MeetParser)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Maximum accepted page size (bytes)
    pub max_page_bytes: usize,

    /// Fail with `NoRaces` when a recognized page assembles zero races
    pub require_races: bool,

    /// How many lines before the first race header are searched for a date
    pub date_scan_lines: usize,

    /// Site names stripped from the end of the page title ("Invite - MileSplit Missouri")
    #[serde(default = "default_site_suffixes")]
    pub site_suffixes: Vec<String>,
}

fn default_site_suffixes() -> Vec<String> {
    vec!["MileSplit".to_string()]
}

impl ParserConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_page_bytes == 0 {
            return Err("max_page_bytes must be greater than 0".to_string());
        }
        if self.site_suffixes.iter().any(|s| s.trim().is_empty()) {
            return Err("site_suffixes cannot contain empty entries".to_string());
        }
        Ok(())
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_page_bytes: 5_000_000,
            require_races: true,
            date_scan_lines: 25,
            site_suffixes: default_site_suffixes(),
        }
    }
}

impl ParserConfig {
    /// Lenient preset: larger pages, empty race lists are returned instead of failing
    pub fn lenient() -> Self {
        Self {
            max_page_bytes: 20_000_000,
            require_races: false,
            date_scan_lines: 60,
            site_suffixes: default_site_suffixes(),
        }
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str)
            .map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

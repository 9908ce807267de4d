//! Meet module - the unit handed to the storage collaborator

use crate::format::FormatVariant;
use crate::race::Race;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Every race parsed from one results page
///
/// Races keep their page order. No deduplication happens here: two races with
/// the same header stay distinct, merging is a storage concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeetResultSet {
    /// Meet name from page-level markup
    pub meet_name: Option<String>,

    /// Meet date, when one could be parsed
    pub meet_date: Option<NaiveDate>,

    /// URL the page came from; storage upserts by this key
    pub source_url: String,

    /// Layout the page was parsed as
    pub format: FormatVariant,

    /// Races in page order
    pub races: Vec<Race>,
}

impl MeetResultSet {
    /// Number of races
    pub fn race_count(&self) -> usize {
        self.races.len()
    }

    /// Total team score rows across all races
    pub fn team_score_count(&self) -> usize {
        self.races.iter().map(|r| r.team_scores.len()).sum()
    }

    /// Total individual result rows across all races
    pub fn individual_count(&self) -> usize {
        self.races.iter().map(|r| r.individual_results.len()).sum()
    }
}

//! Race module - headers, team scores and individual results

use crate::time::RaceTime;
use serde::{Deserialize, Serialize};

/// Gender a race is contested in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    /// Boys / Men
    Male,

    /// Girls / Women
    Female,

    /// Both genders named in the header (mixed or combined race)
    Unknown,
}

impl Gender {
    /// Single-letter code used by the storage collaborator
    pub fn code(&self) -> &'static str {
        match self {
            Gender::Male => "M",
            Gender::Female => "F",
            Gender::Unknown => "U",
        }
    }
}

/// Parsed race-section header
///
/// Built by the header tokenizer; `raw_label` keeps the original text so a
/// collaborator can always show what the page said.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaceHeader {
    /// Gender of the race
    pub gender: Gender,

    /// Classification such as Varsity, JV or Freshman
    pub race_type: Option<String>,

    /// Distance in meters; `None` means unknown, never zero
    pub distance_meters: Option<u32>,

    /// Free text left over after the known tokens (e.g. a color division)
    pub division_label: Option<String>,

    /// Header text as it appeared on the page
    pub raw_label: String,
}

/// Team placement within a race
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamScoreRow {
    /// Finishing place, starting at 1
    pub place: u32,

    /// Team name, never empty
    pub team_name: String,

    /// Team points, when the page lists them
    pub points: Option<u32>,
}

/// One athlete's result within a race
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndividualResultRow {
    /// Finishing place; `None` for DNF/DNS/DQ markers
    pub place: Option<u32>,

    /// Athlete name as printed
    pub athlete_name: String,

    /// Year or grade (e.g. "12", "SR")
    pub year_grade: Option<String>,

    /// Team or school name
    pub team_name: String,

    /// Canonical `M:SS.ss` time text
    pub time_text: String,

    /// Seconds, always equal to the parse of `time_text`
    pub time_seconds: f64,
}

impl IndividualResultRow {
    /// Create a result row; both time fields derive from `time`
    pub fn new(
        place: Option<u32>,
        athlete_name: impl Into<String>,
        year_grade: Option<String>,
        team_name: impl Into<String>,
        time: RaceTime,
    ) -> Self {
        Self {
            place,
            athlete_name: athlete_name.into(),
            year_grade,
            team_name: team_name.into(),
            time_text: time.to_string(),
            time_seconds: time.seconds(),
        }
    }

    /// Re-parse the canonical time text
    pub fn time(&self) -> Option<RaceTime> {
        RaceTime::parse(&self.time_text).ok()
    }
}

/// One timed competition within a meet
///
/// Rows are kept in finish order as they appeared on the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Race {
    /// Parsed header
    pub header: RaceHeader,

    /// Team scores in finish order
    pub team_scores: Vec<TeamScoreRow>,

    /// Individual results in finish order
    pub individual_results: Vec<IndividualResultRow>,
}

impl Race {
    /// Create a race from its parts
    pub fn new(
        header: RaceHeader,
        team_scores: Vec<TeamScoreRow>,
        individual_results: Vec<IndividualResultRow>,
    ) -> Self {
        Self {
            header,
            team_scores,
            individual_results,
        }
    }

    /// Fastest recorded time in the race
    pub fn winning_time(&self) -> Option<RaceTime> {
        self.individual_results.iter().filter_map(|r| r.time()).min()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header() -> RaceHeader {
        RaceHeader {
            gender: Gender::Female,
            race_type: Some("Varsity".to_string()),
            distance_meters: Some(5000),
            division_label: None,
            raw_label: "Girls Varsity 5k".to_string(),
        }
    }

    #[test]
    fn test_row_time_fields_agree() {
        let time = RaceTime::parse("16:42.3").unwrap();
        let row = IndividualResultRow::new(Some(1), "Ava Cole", None, "Rockhurst", time);
        assert_eq!(row.time_text, "16:42.30");
        assert_eq!(row.time_seconds, 1002.30);
        assert_eq!(row.time(), Some(time));
    }

    #[test]
    fn test_winning_time_ignores_order() {
        let slow = RaceTime::parse("19:00.00").unwrap();
        let fast = RaceTime::parse("18:10.55").unwrap();
        let race = Race::new(
            header(),
            Vec::new(),
            vec![
                IndividualResultRow::new(None, "B", None, "T", slow),
                IndividualResultRow::new(Some(1), "A", None, "T", fast),
            ],
        );
        assert_eq!(race.winning_time(), Some(fast));
    }

    #[test]
    fn test_gender_codes() {
        assert_eq!(Gender::Male.code(), "M");
        assert_eq!(Gender::Female.code(), "F");
        assert_eq!(Gender::Unknown.code(), "U");
    }

    #[test]
    fn test_race_serializes() {
        let race = Race::new(header(), Vec::new(), Vec::new());
        let json = serde_json::to_string(&race).unwrap();
        let back: Race = serde_json::from_str(&json).unwrap();
        assert_eq!(back, race);
    }
}

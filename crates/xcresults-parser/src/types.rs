//! Parse outcome, warnings and the intermediate row shape

use regex::Captures;
use serde::{Deserialize, Serialize};
use std::fmt;
use xcresults_domain::MeetResultSet;

/// Successful parse: the meet plus every non-fatal problem met on the way
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParseOutcome {
    /// Assembled meet
    pub meet: MeetResultSet,

    /// Non-fatal warnings in page order
    pub warnings: Vec<ParseWarning>,
}

impl ParseOutcome {
    /// Number of warnings of the given kind
    pub fn count(&self, kind: WarningKind) -> usize {
        self.warnings.iter().filter(|w| w.kind == kind).count()
    }

    /// Number of dropped rows, whatever the reason
    pub fn skipped_rows(&self) -> usize {
        self.warnings.iter().filter(|w| w.kind.is_row_skip()).count()
    }
}

/// Why a row was dropped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkipReason {
    /// Row does not start with a place or DNF marker
    MissingPlace,

    /// Place is not a positive integer
    InvalidPlace,

    /// No athlete name between place and year
    MissingName,

    /// No team name
    MissingTeam,

    /// Row does not fit the layout's row shape
    Malformed,

    /// Time could not be parsed; the row is never kept with a default time
    TimeParseRejected,
}

/// Kind of non-fatal problem
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WarningKind {
    /// Race header had no gender token; the whole section was skipped
    UnparseableHeader,

    /// One row was dropped
    RowSkipped(SkipReason),

    /// Race header carried no recognizable distance
    UnparsedDistance,

    /// No meet date could be parsed
    UnparsedDate,

    /// No meet name in page markup
    MissingMeetName,
}

impl WarningKind {
    /// Whether this warning stands for a dropped row
    pub fn is_row_skip(&self) -> bool {
        matches!(self, WarningKind::RowSkipped(_))
    }
}

/// A non-fatal problem
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseWarning {
    /// What went wrong
    pub kind: WarningKind,

    /// Raw header of the race involved, if any
    pub race: Option<String>,

    /// 1-based line in the page text
    pub line: Option<usize>,

    /// Offending text or explanation
    pub detail: String,
}

impl ParseWarning {
    pub(crate) fn new(kind: WarningKind, detail: impl Into<String>) -> Self {
        Self {
            kind,
            race: None,
            line: None,
            detail: detail.into(),
        }
    }

    pub(crate) fn in_race(mut self, race: &str) -> Self {
        self.race = Some(race.to_string());
        self
    }

    pub(crate) fn at_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }
}

impl fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.kind)?;
        if let Some(race) = &self.race {
            write!(f, " in '{}'", race)?;
        }
        if let Some(line) = self.line {
            write!(f, " at line {}", line)?;
        }
        write!(f, ": {}", self.detail)
    }
}

/// A row as cut from the page, before any typing
///
/// One shape for every layout; the per-layout differences stay in the
/// pattern tables that feed these constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum RawRow {
    Team {
        line: usize,
        place: String,
        team: String,
        points: Option<String>,
    },
    Individual {
        line: usize,
        place: String,
        athlete: String,
        year: Option<String>,
        team: String,
        time: String,
    },
}

impl RawRow {
    /// Team row from a `team_row` pattern match (`place`, `team`, `points`)
    pub fn team(line: usize, caps: &Captures<'_>) -> Self {
        RawRow::Team {
            line,
            place: group(caps, "place"),
            team: group(caps, "team"),
            points: caps.name("points").map(|m| m.as_str().trim().to_string()),
        }
    }

    /// Individual row from a place token and an `individual_row` pattern match
    pub fn individual(line: usize, place: &str, caps: &Captures<'_>) -> Self {
        RawRow::Individual {
            line,
            place: place.trim().to_string(),
            athlete: group(caps, "name"),
            year: caps
                .name("year")
                .map(|m| m.as_str().trim().to_string())
                .filter(|y| !y.is_empty()),
            team: group(caps, "team"),
            time: group(caps, "time"),
        }
    }

    pub fn line(&self) -> usize {
        match self {
            RawRow::Team { line, .. } | RawRow::Individual { line, .. } => *line,
        }
    }
}

fn group(caps: &Captures<'_>, name: &str) -> String {
    caps.name(name)
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warning_display() {
        let kind = WarningKind::RowSkipped(SkipReason::MissingName);
        let w = ParseWarning::new(kind, "4  12 Rockhurst")
            .in_race("Mens 5,000 Meters Varsity Boys")
            .at_line(17);
        assert_eq!(
            w.to_string(),
            "RowSkipped(MissingName) in 'Mens 5,000 Meters Varsity Boys' at line 17: 4  12 Rockhurst"
        );
    }

    #[test]
    fn test_row_skip_classification() {
        assert!(WarningKind::RowSkipped(SkipReason::TimeParseRejected).is_row_skip());
        assert!(!WarningKind::UnparseableHeader.is_row_skip());
        assert!(!WarningKind::UnparsedDate.is_row_skip());
    }
}

//! Layout table
//!
//! Every known layout is one [`FormatSpec`] entry. Detection, section splitting
//! and row extraction read their behaviour from here, so supporting another
//! layout means adding an entry rather than another code path.

use regex::Regex;
use std::sync::LazyLock;
use xcresults_domain::FormatVariant;

/// Patterns describing one layout
#[derive(Debug)]
pub(crate) struct FormatSpec {
    pub variant: FormatVariant,
    /// Page-level marker identifying the layout (multi-line mode)
    pub signature: Regex,
    /// Page-level marker proving there is a results table to extract
    pub table_marker: Regex,
    /// Line that opens a race section
    pub boundary: Regex,
    /// Line that opens a team score block
    pub team_block: Regex,
    /// Line that opens an individual results block
    pub individual_block: Regex,
    /// Rows outside any block count as individual rows
    pub implicit_individuals: bool,
    /// A blank line closes the individual block
    pub blank_ends_individuals: bool,
    /// Team score row: `place`, `team`, optional `points`
    pub team_row: Regex,
    /// Individual row after the place token: `name`, `year`, `team`, `time`
    pub individual_row: Regex,
    /// Fallback for rows whose year column is empty: `name`, `team`, `time`
    pub individual_row_no_year: Regex,
}

fn re(pattern: &str) -> Regex {
    Regex::new(pattern).expect("static regex must compile")
}

/// Team row where scorer columns may follow the total
const TEAM_ROW_WITH_SCORERS: &str =
    r"^\s*(?P<place>\d+)\s+(?P<team>.*?[A-Za-z].*?)(?:\s+(?P<points>\d+)(?:\s+.*)?)?\s*$";

/// Individual row with an optional trailing points column
///
/// The time must be a clock or decimal value so a lone points number in a row
/// with a blank time is never read as the time.
const INDIVIDUAL_ROW_WITH_POINTS: &str = r"^(?P<name>.*?)(?:^|\s+)(?P<year>\d{1,2}|SR|JR|SO|FR|--)\s+(?P<team>.+?)\s+(?P<time>\d+(?::\d{2})+(?:\.\d+)?|\d+\.\d+|DNF|DNS|DQ|SCR|NT)(?:\s+(?P<points>\d+|-+))?\s*$";

/// Individual row ending at the time
const INDIVIDUAL_ROW: &str = r"^(?P<name>.*?)(?:^|\s+)(?P<year>\d{1,2}|SR|JR|SO|FR|--)\s+(?P<team>.+?)\s+(?P<time>\d[\d:.]*|DNF|DNS|DQ|SCR|NT)\s*$";

/// Points row with an empty year column; name and team sit two or more spaces apart
const INDIVIDUAL_ROW_WITH_POINTS_NO_YEAR: &str = r"^(?P<name>\S.*?[A-Za-z].*?)\s{2,}(?P<team>\S.*?)\s+(?P<time>\d+(?::\d{2})+(?:\.\d+)?|\d+\.\d+|DNF|DNS|DQ|SCR|NT)(?:\s+(?P<points>\d+|-+))?\s*$";

/// Row with an empty year column; name and team sit two or more spaces apart
const INDIVIDUAL_ROW_NO_YEAR: &str = r"^(?P<name>\S.*?[A-Za-z].*?)\s{2,}(?P<team>\S.*?)\s+(?P<time>\d[\d:.]*|DNF|DNS|DQ|SCR|NT)\s*$";

/// Known layouts in detection priority order
///
/// Event numbering is the most structured signature and goes first, so an
/// "Event 3  Womens 5,000 Meters" page is never taken for a FormatOne page.
pub(crate) static FORMATS: LazyLock<Vec<FormatSpec>> = LazyLock::new(|| {
    vec![
        FormatSpec {
            variant: FormatVariant::FormatTwo,
            signature: re(r"(?im)^\s*Event\s+\d+\s+\S"),
            table_marker: re(r"(?im)^\s*(?:Pl\s+)?Name\s+Year\s+School\b"),
            boundary: re(r"(?i)^\s*Event\s+\d+\b"),
            team_block: re(r"(?i)^\s*(?:Team\s+Scores\b|Rank\s+Team\b)"),
            individual_block: re(r"(?i)^\s*(?:Pl\s+)?Name\s+Year\s+School\b"),
            implicit_individuals: false,
            blank_ends_individuals: true,
            team_row: re(TEAM_ROW_WITH_SCORERS),
            individual_row: re(INDIVIDUAL_ROW_WITH_POINTS),
            individual_row_no_year: re(INDIVIDUAL_ROW_WITH_POINTS_NO_YEAR),
        },
        FormatSpec {
            variant: FormatVariant::FormatOne,
            signature: re(r"(?im)^\s*(?:Mens|Womens|Men's|Women's)\s+[\d,]+\s+Meters\b"),
            table_marker: re(r"(?im)^\s*Pl\s+Athlete\b"),
            boundary: re(r"(?i)^\s*[A-Za-z']+\s+[\d,]+\s+Meters\b"),
            team_block: re(r"(?i)^\s*Team\s+Scores\b"),
            individual_block: re(r"(?i)^\s*Pl\s+Athlete\b"),
            implicit_individuals: false,
            blank_ends_individuals: true,
            team_row: re(TEAM_ROW_WITH_SCORERS),
            individual_row: re(INDIVIDUAL_ROW_WITH_POINTS),
            individual_row_no_year: re(INDIVIDUAL_ROW_WITH_POINTS_NO_YEAR),
        },
        FormatSpec {
            variant: FormatVariant::FormatThree,
            signature: re(
                r"(?im)^.*\b(?:Boys|Girls|Mens?|Womens?)\b.*\b\d+(?:\.\d+)?\s*k\s+Run\b.*\bResults\s*$",
            ),
            table_marker: re(r"(?m)^\s*\d+\s+\S.*\s\d{1,3}:\d{2}(?:\.\d+)?\s*$"),
            boundary: re(r"(?i)^.*\b\d+(?:\.\d+)?\s*k\s+Run\b.*\bResults\s*$"),
            team_block: re(r"(?i)^\s*Team\s+Scores\b"),
            individual_block: re(r"(?i)^\s*Pl\s+Athlete\b"),
            implicit_individuals: true,
            blank_ends_individuals: false,
            team_row: re(TEAM_ROW_WITH_SCORERS),
            individual_row: re(INDIVIDUAL_ROW),
            individual_row_no_year: re(INDIVIDUAL_ROW_NO_YEAR),
        },
    ]
});

/// Look up the table entry for a variant
#[cfg(test)]
pub(crate) fn spec_for(variant: FormatVariant) -> &'static FormatSpec {
    FORMATS
        .iter()
        .find(|spec| spec.variant == variant)
        .expect("every variant has a table entry")
}

/// Lines that are page furniture in every layout
pub(crate) static FURNITURE: LazyLock<Regex> = LazyLock::new(|| {
    re(r"(?i)^\s*(?:[=\-_*\s]+|.*Hy-Tek.*|.*MEET\s+MANAGER.*|Page\s+\d+.*|Results)\s*$")
});

/// Leading place token of an individual row, DNF-style markers included
pub(crate) static PLACE_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    re(r"^\s*(?P<place>\d+|DNF|DNS|DQ|SCR|NT|-{1,2})\s+(?P<rest>.*)$")
});

/// A line that looks like it was meant to be a result row
pub(crate) static ROW_CANDIDATE: LazyLock<Regex> = LazyLock::new(|| {
    re(r"^\s*(?:\d+|DNF|DNS|DQ|SCR|NT|-{1,2})\s|\s(?:\d{1,3}:\d{2}(?:\.\d+)?|DNF|DNS|DQ)(?:\s+\d+)?\s*$")
});

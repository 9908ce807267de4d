//! Race assembly
//!
//! Collects races in page order. Nothing is merged or deduplicated: a page
//! that lists the same race twice yields two races.

use crate::extract::SectionRows;
use crate::meet::MeetInfo;
use crate::types::{ParseOutcome, ParseWarning, WarningKind};
use tracing::{debug, warn};
use xcresults_domain::{FormatVariant, MeetResultSet, Race, RaceHeader};

/// Accumulates races and warnings for one page
#[derive(Debug, Default)]
pub(crate) struct RaceAssembler {
    races: Vec<Race>,
    warnings: Vec<ParseWarning>,
}

impl RaceAssembler {
    pub fn new(meet_warnings: Vec<ParseWarning>) -> Self {
        Self {
            races: Vec::new(),
            warnings: meet_warnings,
        }
    }

    /// Record a section whose header could not be tokenised
    pub fn skip_section(&mut self, header: &str, line: usize, reason: impl Into<String>) {
        let reason = reason.into();
        warn!("Skipping race section at line {}: {}", line, reason);
        self.warnings.push(
            ParseWarning::new(WarningKind::UnparseableHeader, reason)
                .in_race(header)
                .at_line(line),
        );
    }

    /// Add one race built from a parsed header and its extracted rows
    pub fn add_race(&mut self, header: RaceHeader, line: usize, rows: SectionRows) {
        if header.distance_meters.is_none() {
            debug!("No distance in '{}'", header.raw_label);
            self.warnings.push(
                ParseWarning::new(WarningKind::UnparsedDistance, "distance unknown")
                    .in_race(&header.raw_label)
                    .at_line(line),
            );
        }
        self.warnings.extend(rows.warnings);
        self.races
            .push(Race::new(header, rows.team_scores, rows.individuals));
    }

    pub fn race_count(&self) -> usize {
        self.races.len()
    }

    pub fn finish(self, info: MeetInfo, source_url: &str, format: FormatVariant) -> ParseOutcome {
        ParseOutcome {
            meet: MeetResultSet {
                meet_name: info.name,
                meet_date: info.date,
                source_url: source_url.to_string(),
                format,
                races: self.races,
            },
            warnings: self.warnings,
        }
    }
}

//! Row extraction
//!
//! Walks one race section with a three-state block machine. Team rows are only
//! read inside a team block; individual rows inside an individual block, or
//! anywhere outside a block for layouts without column headers. Each cut row is
//! normalised before the next line is read.

use crate::detect::Section;
use crate::formats::{FormatSpec, FURNITURE, PLACE_TOKEN, ROW_CANDIDATE};
use crate::normalize::{normalize_row, TypedRow};
use crate::types::{ParseWarning, RawRow, SkipReason, WarningKind};
use tracing::{debug, warn};
use xcresults_domain::{IndividualResultRow, TeamScoreRow};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Block {
    Idle,
    Team,
    Individual,
}

/// Typed rows of one race section plus the rows that were dropped
#[derive(Debug, Default)]
pub(crate) struct SectionRows {
    pub team_scores: Vec<TeamScoreRow>,
    pub individuals: Vec<IndividualResultRow>,
    pub warnings: Vec<ParseWarning>,
}

impl SectionRows {
    fn accept(&mut self, race: &str, row: RawRow) {
        let line = row.line();
        match normalize_row(row) {
            Ok(TypedRow::Team(team)) => self.team_scores.push(team),
            Ok(TypedRow::Individual(result)) => self.individuals.push(result),
            Err(rejection) => self.skip(race, line, rejection.reason, rejection.detail),
        }
    }

    fn skip(&mut self, race: &str, line: usize, reason: SkipReason, detail: String) {
        warn!("Skipping row at line {} in '{}': {:?} ({})", line, race, reason, detail);
        self.warnings.push(
            ParseWarning::new(WarningKind::RowSkipped(reason), detail)
                .in_race(race)
                .at_line(line),
        );
    }
}

/// Cut and normalise every row of a section, in source order
pub(crate) fn extract_section(spec: &FormatSpec, section: &Section<'_>) -> SectionRows {
    let race = section.header;
    let mut rows = SectionRows::default();
    let mut block = Block::Idle;

    for &(line_no, line) in &section.lines {
        if line.trim().is_empty() {
            block = match block {
                Block::Team => Block::Idle,
                Block::Individual if spec.blank_ends_individuals => Block::Idle,
                other => other,
            };
            continue;
        }
        if spec.team_block.is_match(line) {
            block = Block::Team;
            continue;
        }
        if spec.individual_block.is_match(line) {
            block = Block::Individual;
            continue;
        }
        if FURNITURE.is_match(line) {
            continue;
        }

        match block {
            Block::Team => team_line(spec, race, line_no, line, &mut rows),
            Block::Individual => individual_line(spec, race, line_no, line, &mut rows),
            Block::Idle if spec.implicit_individuals => {
                individual_line(spec, race, line_no, line, &mut rows)
            }
            Block::Idle => {}
        }
    }

    debug!(
        "Section '{}': {} team rows, {} individual rows, {} skipped",
        race,
        rows.team_scores.len(),
        rows.individuals.len(),
        rows.warnings.len()
    );
    rows
}

fn team_line(spec: &FormatSpec, race: &str, line_no: usize, line: &str, rows: &mut SectionRows) {
    // Scorer breakdowns and "Total Time" lines carry no place
    if !line.trim_start().starts_with(|c: char| c.is_ascii_digit()) {
        return;
    }
    match spec.team_row.captures(line) {
        Some(caps) => rows.accept(race, RawRow::team(line_no, &caps)),
        None => rows.skip(race, line_no, SkipReason::Malformed, line.trim().to_string()),
    }
}

fn individual_line(
    spec: &FormatSpec,
    race: &str,
    line_no: usize,
    line: &str,
    rows: &mut SectionRows,
) {
    if !ROW_CANDIDATE.is_match(line) {
        return;
    }
    let Some(token) = PLACE_TOKEN.captures(line) else {
        rows.skip(race, line_no, SkipReason::MissingPlace, line.trim().to_string());
        return;
    };
    let place = token.name("place").map_or("", |m| m.as_str());
    let rest = token.name("rest").map_or("", |m| m.as_str());

    let caps = spec
        .individual_row
        .captures(rest)
        .or_else(|| spec.individual_row_no_year.captures(rest));
    match caps {
        Some(caps) => rows.accept(race, RawRow::individual(line_no, place, &caps)),
        None => rows.skip(race, line_no, SkipReason::Malformed, line.trim().to_string()),
    }
}

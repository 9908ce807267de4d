//! Raw row to typed row
//!
//! Every check that can drop a row lives here, so the extractor only decides
//! what a row is and this module decides whether it is usable.

use crate::types::{RawRow, SkipReason};
use xcresults_domain::{IndividualResultRow, RaceTime, TeamScoreRow};

/// Place markers that mean "finished without a place"
const UNPLACED: &[&str] = &["DNF", "DNS", "DQ", "SCR", "NT", "-", "--"];

/// A row ready for assembly
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum TypedRow {
    Team(TeamScoreRow),
    Individual(IndividualResultRow),
}

/// Why a row was dropped, with the offending text
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Rejection {
    pub reason: SkipReason,
    pub detail: String,
}

impl Rejection {
    fn new(reason: SkipReason, detail: impl Into<String>) -> Self {
        Self {
            reason,
            detail: detail.into(),
        }
    }
}

pub(crate) fn normalize_row(row: RawRow) -> Result<TypedRow, Rejection> {
    match row {
        RawRow::Team {
            place,
            team,
            points,
            ..
        } => {
            let place = positive_place(&place)?;
            if team.is_empty() {
                return Err(Rejection::new(SkipReason::MissingTeam, "team row without a team name"));
            }
            let points = points.and_then(|p| p.parse::<u32>().ok());
            Ok(TypedRow::Team(TeamScoreRow {
                place,
                team_name: team,
                points,
            }))
        }
        RawRow::Individual {
            place,
            athlete,
            year,
            team,
            time,
            ..
        } => {
            let place = if UNPLACED.contains(&place.to_ascii_uppercase().as_str()) {
                None
            } else {
                Some(positive_place(&place)?)
            };
            if !athlete.chars().any(char::is_alphabetic) {
                return Err(Rejection::new(
                    SkipReason::MissingName,
                    format!("no athlete name before '{}'", team),
                ));
            }
            if team.is_empty() {
                return Err(Rejection::new(
                    SkipReason::MissingTeam,
                    format!("no team for '{}'", athlete),
                ));
            }
            let race_time = RaceTime::parse(&time).map_err(|e| {
                Rejection::new(SkipReason::TimeParseRejected, format!("{}: {}", athlete, e))
            })?;
            let year = year.filter(|y| !y.chars().all(|c| c == '-'));

            Ok(TypedRow::Individual(IndividualResultRow::new(
                place, athlete, year, team, race_time,
            )))
        }
    }
}

fn positive_place(text: &str) -> Result<u32, Rejection> {
    match text.parse::<u32>() {
        Ok(place) if place >= 1 => Ok(place),
        _ => Err(Rejection::new(
            SkipReason::InvalidPlace,
            format!("place '{}' is not a positive integer", text),
        )),
    }
}

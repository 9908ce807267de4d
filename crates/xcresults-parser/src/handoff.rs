//! Handing a parsed meet to storage
//!
//! The parser never writes anywhere itself. [`import_page`] parses, passes the
//! assembled meet to a [`ResultSink`], and reports what was stored.

use crate::error::ImportError;
use crate::parser::MeetParser;
use crate::types::ParseWarning;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use tracing::{info, warn};
use xcresults_domain::traits::ResultSink;
use xcresults_domain::{FormatVariant, RawPage};

/// What one import stored, for operator review
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportReport {
    /// Page the meet came from
    pub source_url: String,

    /// Detected layout
    pub format: FormatVariant,

    /// Races stored
    pub races: usize,

    /// Team score rows stored
    pub team_scores: usize,

    /// Individual result rows stored
    pub individual_results: usize,

    /// Non-fatal problems met while parsing
    pub warnings: Vec<ParseWarning>,
}

impl ImportReport {
    /// One-line summary
    pub fn summary(&self) -> String {
        format!(
            "{} ({}): {} races, {} team scores, {} results, {} warnings",
            self.source_url,
            self.format,
            self.races,
            self.team_scores,
            self.individual_results,
            self.warnings.len()
        )
    }
}

/// Parse a page and store the resulting meet
///
/// Nothing reaches the sink when parsing fails.
pub fn import_page<S>(
    parser: &MeetParser,
    page: &RawPage,
    sink: &mut S,
) -> Result<ImportReport, ImportError>
where
    S: ResultSink,
    S::Error: Display,
{
    let outcome = parser.parse(page)?;

    sink.store_meet(&outcome.meet).map_err(|e| {
        warn!("Store failed for {}: {}", page.source_url(), e);
        ImportError::Sink(e.to_string())
    })?;

    let report = ImportReport {
        source_url: outcome.meet.source_url.clone(),
        format: outcome.meet.format,
        races: outcome.meet.race_count(),
        team_scores: outcome.meet.team_score_count(),
        individual_results: outcome.meet.individual_count(),
        warnings: outcome.warnings,
    };
    info!("Imported {}", report.summary());
    Ok(report)
}

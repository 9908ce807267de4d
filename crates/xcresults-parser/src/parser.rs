//! Core parser implementation

use crate::assemble::RaceAssembler;
use crate::config::ParserConfig;
use crate::detect::{detect_format, split_sections};
use crate::error::ParseError;
use crate::extract::extract_section;
use crate::header::tokenize_header;
use crate::markup::PageMarkup;
use crate::meet::meet_info;
use crate::types::ParseOutcome;
use tracing::{debug, info, warn};
use xcresults_domain::RawPage;

/// Turns a fetched results page into a [`MeetResultSet`](xcresults_domain::MeetResultSet)
///
/// Holds only configuration; the pattern tables are process-wide statics, so
/// one parser can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct MeetParser {
    config: ParserConfig,
}

impl MeetParser {
    /// Create a parser, validating the configuration
    pub fn new(config: ParserConfig) -> Result<Self, ParseError> {
        config.validate().map_err(ParseError::Config)?;
        Ok(Self { config })
    }

    /// Create a parser with the default configuration
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Configuration in use
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse one page
    ///
    /// Fails only when the page is too large, matches no known layout, or
    /// (with `require_races`) yields no race at all. Everything else is a
    /// warning on the returned outcome.
    pub fn parse(&self, page: &RawPage) -> Result<ParseOutcome, ParseError> {
        if page.len() > self.config.max_page_bytes {
            return Err(ParseError::PageTooLarge(page.len(), self.config.max_page_bytes));
        }

        info!("Parsing results page {} ({} bytes)", page.source_url(), page.len());

        let markup = PageMarkup::from_html(page.html());
        let spec = match detect_format(&markup.text) {
            Ok(spec) => spec,
            Err(e) => {
                warn!("No known layout in {}", page.source_url());
                return Err(e);
            }
        };

        let split = split_sections(spec, &markup.text);
        let mut info = meet_info(&markup, &split.preamble, &self.config);
        let mut assembler = RaceAssembler::new(std::mem::take(&mut info.warnings));

        for section in &split.sections {
            debug!("Race section at line {}: '{}'", section.header_line, section.header);
            match tokenize_header(section.header) {
                Ok(header) => {
                    let rows = extract_section(spec, section);
                    assembler.add_race(header, section.header_line, rows);
                }
                Err(e) => {
                    assembler.skip_section(section.header, section.header_line, e.to_string())
                }
            }
        }

        if assembler.race_count() == 0 && self.config.require_races {
            warn!("No race results found in {}", page.source_url());
            return Err(ParseError::NoRaces);
        }

        let outcome = assembler.finish(info, page.source_url(), spec.variant);
        info!(
            "Parsed {} as {}: {} races, {} results, {} warnings",
            outcome.meet.source_url,
            outcome.meet.format,
            outcome.meet.race_count(),
            outcome.meet.individual_count(),
            outcome.warnings.len()
        );
        Ok(outcome)
    }
}

/// Parse a page with the default configuration
///
/// # Examples
///
/// ```
/// use xcresults_parser::{parse_meet_page, ParseError};
///
/// let err = parse_meet_page("<html><body>Parking info</body></html>", "https://example.test/raw")
///     .unwrap_err();
/// assert_eq!(err, ParseError::UnrecognizedFormat);
/// ```
pub fn parse_meet_page(raw_html: &str, source_url: &str) -> Result<ParseOutcome, ParseError> {
    MeetParser::default().parse(&RawPage::new(raw_html, source_url))
}

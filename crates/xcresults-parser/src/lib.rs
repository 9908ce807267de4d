//! xcresults Parser
//!
//! Converts MileSplit "raw" cross country results pages into structured meet,
//! race, team and individual records.
//!
//! # Overview
//!
//! Results pages come in several loosely structured layouts, all of them
//! Hy-Tek style column text wrapped in HTML. The parser recognises which
//! layout a page follows, splits it into race sections, reads each race
//! header by token class, and extracts team scores and individual results.
//! Rows that cannot be read are dropped with a warning rather than guessed at.
//!
//! # Architecture
//!
//! ```text
//! RawPage → page text → Format Detector → per race: Header Tokenizer
//!         → Row Extractor → Result Normalizer → Race Assembler → MeetResultSet
//! ```
//!
//! # Key Features
//!
//! - **Declarative layouts**: each layout is one pattern table entry
//! - **Order-independent headers**: "Freshman Girls 5k" and "Girls Varsity 5k" alike
//! - **One time rule**: `M:SS`, `M:SS.f{1,3}` or bare seconds, held as hundredths
//! - **Warnings, not guesses**: skipped rows and unknown distances are reported
//! - **Storage seam**: [`import_page`] hands results to any `ResultSink`
//!
//! # Example Usage
//!
//! ```no_run
//! use xcresults_parser::{MeetParser, ParserConfig};
//! use xcresults_domain::{raw_results_url, RawPage};
//!
//! # fn example(html: String) -> Result<(), Box<dyn std::error::Error>> {
//! let parser = MeetParser::new(ParserConfig::default())?;
//! let url = raw_results_url("https://mo.milesplit.com/meets/1/results/2/formatted/");
//! let outcome = parser.parse(&RawPage::new(html, url))?;
//!
//! for race in &outcome.meet.races {
//!     println!("{}: {} finishers", race.header.raw_label, race.individual_results.len());
//! }
//! for warning in &outcome.warnings {
//!     println!("warning: {}", warning);
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod assemble;
mod config;
mod detect;
mod error;
mod extract;
mod formats;
mod handoff;
mod header;
mod markup;
mod meet;
mod normalize;
mod parser;
mod types;

#[cfg(test)]
mod tests;

pub use config::ParserConfig;
pub use error::{HeaderError, ImportError, ParseError};
pub use handoff::{import_page, ImportReport};
pub use header::tokenize_header;
pub use parser::{parse_meet_page, MeetParser};
pub use types::{ParseOutcome, ParseWarning, SkipReason, WarningKind};

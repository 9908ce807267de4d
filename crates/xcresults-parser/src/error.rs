//! Error types for the parser

use thiserror::Error;

/// Fatal errors: the page yields no result at all
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// None of the known layout signatures is present
    #[error("Unrecognized format: no known race-header layout with a results table")]
    UnrecognizedFormat,

    /// A layout was recognized but every race section was unusable
    #[error("No race results found on page")]
    NoRaces,

    /// Page exceeds the configured size limit
    #[error("Page too large: {0} bytes (max: {1})")]
    PageTooLarge(usize, usize),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Header tokenization failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HeaderError {
    /// No gender token, so the race cannot be grouped
    #[error("Unparseable header (no gender token): '{0}'")]
    UnparseableHeader(String),
}

/// Errors from parsing a page and handing it to storage
#[derive(Error, Debug)]
pub enum ImportError {
    /// The page did not parse
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The storage collaborator refused the meet
    #[error("Store error: {0}")]
    Sink(String),
}

//! Format detection and race-section splitting

use crate::error::ParseError;
use crate::formats::{FormatSpec, FORMATS};
use tracing::debug;

/// One race section: its header line and the lines up to the next header
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Section<'a> {
    /// Header text, trimmed
    pub header: &'a str,
    /// 1-based line number of the header
    pub header_line: usize,
    /// Body lines with their 1-based line numbers
    pub lines: Vec<(usize, &'a str)>,
}

/// Page text split into the part before the first race and the races
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SplitPage<'a> {
    /// Lines before the first race header (meet banner, print stamps)
    pub preamble: Vec<&'a str>,
    pub sections: Vec<Section<'a>>,
}

/// Pick the layout of a page
///
/// Signatures are checked in table priority order; a layout only matches when
/// its results-table marker is present too.
pub(crate) fn detect_format(text: &str) -> Result<&'static FormatSpec, ParseError> {
    for spec in FORMATS.iter() {
        if !spec.signature.is_match(text) {
            continue;
        }
        if spec.table_marker.is_match(text) {
            debug!("Detected {}", spec.variant);
            return Ok(spec);
        }
        debug!("{} signature present but no results table", spec.variant);
    }
    Err(ParseError::UnrecognizedFormat)
}

/// Cut the page text into race sections at the layout's boundary lines
pub(crate) fn split_sections<'a>(spec: &FormatSpec, text: &'a str) -> SplitPage<'a> {
    let mut preamble = Vec::new();
    let mut sections: Vec<Section<'a>> = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        let line_no = idx + 1;
        if spec.boundary.is_match(line) {
            sections.push(Section {
                header: line.trim(),
                header_line: line_no,
                lines: Vec::new(),
            });
            continue;
        }
        match sections.last_mut() {
            Some(section) => section.lines.push((line_no, line)),
            None => preamble.push(line),
        }
    }

    SplitPage { preamble, sections }
}

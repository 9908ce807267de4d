//! Raw page module - fetched HTML handed to the parser

use serde::{Deserialize, Serialize};

/// A fetched results page
///
/// Immutable once built. The fetch collaborator is expected to have applied
/// [`raw_results_url`] before fetching, so `source_url` is the raw-results URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPage {
    html: String,
    source_url: String,
}

impl RawPage {
    /// Create a page from its HTML text and source URL
    pub fn new(html: impl Into<String>, source_url: impl Into<String>) -> Self {
        Self {
            html: html.into(),
            source_url: source_url.into(),
        }
    }

    /// The page HTML
    pub fn html(&self) -> &str {
        &self.html
    }

    /// The URL the page was fetched from
    pub fn source_url(&self) -> &str {
        &self.source_url
    }

    /// Size of the HTML in bytes
    pub fn len(&self) -> usize {
        self.html.len()
    }

    /// Whether the page has no content at all
    pub fn is_empty(&self) -> bool {
        self.html.trim().is_empty()
    }
}

/// Rewrite a "formatted" results URL to its raw-text equivalent
///
/// Formatted pages render results as styled tables; the raw view carries the
/// preformatted text the parser understands.
///
/// # Examples
///
/// ```
/// use xcresults_domain::raw_results_url;
///
/// assert_eq!(
///     raw_results_url("https://mo.milesplit.com/meets/1/results/2/formatted/"),
///     "https://mo.milesplit.com/meets/1/results/2/raw"
/// );
/// ```
pub fn raw_results_url(url: &str) -> String {
    let url = url.trim();
    if url.contains("/formatted/") {
        return url.replacen("/formatted/", "/raw", 1);
    }
    match url.strip_suffix("/formatted") {
        Some(base) => format!("{}/raw", base),
        None => url.to_string(),
    }
}

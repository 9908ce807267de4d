//! Meet name and date from page metadata
//!
//! Both are best effort. A missing name or date is reported as a warning and
//! left as `None`; the date is never filled in with "today".

use crate::config::ParserConfig;
use crate::markup::PageMarkup;
use crate::types::{ParseWarning, WarningKind};
use chrono::NaiveDate;
use regex::{Captures, Regex};
use std::sync::LazyLock;
use tracing::warn;

/// Licence and print-stamp lines carry the print date, not the meet date
static STAMP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)hy-tek|meet\s+manager|licensed|printed|page\s+\d+")
        .expect("static regex must compile")
});

const MONTH: &str = r"(jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\.?";

type DateBuilder = fn(&Captures<'_>) -> Option<NaiveDate>;

/// Date patterns in preference order
static DATE_PATTERNS: LazyLock<Vec<(Regex, DateBuilder)>> = LazyLock::new(|| {
    let re = |p: &str| Regex::new(p).expect("static regex must compile");
    vec![
        // 9/27/2025, 9/27/25
        (re(r"\b(\d{1,2})/(\d{1,2})/(\d{4}|\d{2})\b"), numeric_date as DateBuilder),
        // 2025-09-27
        (re(r"\b(\d{4})-(\d{2})-(\d{2})\b"), iso_date),
        // September 13, 2025 / Sept. 13th 2025
        (
            re(&format!(r"(?i)\b{MONTH}\s+(\d{{1,2}})(?:st|nd|rd|th)?,?\s+(\d{{4}})\b")),
            month_day_year,
        ),
        // 13 September 2025
        (
            re(&format!(r"(?i)\b(\d{{1,2}})(?:st|nd|rd|th)?\s+{MONTH},?\s+(\d{{4}})\b")),
            day_month_year,
        ),
        // 13-Sep-25
        (
            re(&format!(r"(?i)\b(\d{{1,2}})-{MONTH}-(\d{{4}}|\d{{2}})\b")),
            day_month_year,
        ),
    ]
});

fn numeric_date(c: &Captures<'_>) -> Option<NaiveDate> {
    ymd(year(&c[3])?, c[1].parse().ok()?, c[2].parse().ok()?)
}

fn iso_date(c: &Captures<'_>) -> Option<NaiveDate> {
    ymd(c[1].parse().ok()?, c[2].parse().ok()?, c[3].parse().ok()?)
}

fn month_day_year(c: &Captures<'_>) -> Option<NaiveDate> {
    ymd(year(&c[3])?, month(&c[1])?, c[2].parse().ok()?)
}

fn day_month_year(c: &Captures<'_>) -> Option<NaiveDate> {
    ymd(year(&c[3])?, month(&c[2])?, c[1].parse().ok()?)
}

fn ymd(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
}

fn year(text: &str) -> Option<i32> {
    let y: i32 = text.parse().ok()?;
    Some(if text.len() == 2 { 2000 + y } else { y })
}

fn month(name: &str) -> Option<u32> {
    let key = name.get(..3)?.to_ascii_lowercase();
    let months = [
        "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
    ];
    months.iter().position(|m| *m == key).map(|i| i as u32 + 1)
}

/// First parseable date in a piece of text
pub(crate) fn find_date(text: &str) -> Option<NaiveDate> {
    DATE_PATTERNS.iter().find_map(|(pattern, build)| {
        pattern.captures_iter(text).find_map(|caps| build(&caps))
    })
}

/// Cut a trailing " - MileSplit ..." style suffix off a page title
pub(crate) fn strip_site_suffix(title: &str, suffixes: &[String]) -> String {
    let mut name = title.trim();
    for suffix in suffixes {
        let pattern = format!(r"(?i)\s*[-|–]\s*{}.*$", regex::escape(suffix.trim()));
        if let Ok(re) = Regex::new(&pattern) {
            if let Some(m) = re.find(name) {
                name = name[..m.start()].trim();
            }
        }
    }
    name.to_string()
}

/// Meet-level fields and the warnings raised finding them
#[derive(Debug, Default)]
pub(crate) struct MeetInfo {
    pub name: Option<String>,
    pub date: Option<NaiveDate>,
    pub warnings: Vec<ParseWarning>,
}

pub(crate) fn meet_info(markup: &PageMarkup, preamble: &[&str], config: &ParserConfig) -> MeetInfo {
    let mut info = MeetInfo::default();

    info.name = markup
        .title
        .as_deref()
        .map(|t| strip_site_suffix(t, &config.site_suffixes))
        .filter(|t| !t.is_empty())
        .or_else(|| {
            markup
                .heading
                .as_deref()
                .map(|h| strip_site_suffix(h, &config.site_suffixes))
                .filter(|h| !h.is_empty())
        });
    if info.name.is_none() {
        warn!("No meet name in page title or heading");
        info.warnings.push(ParseWarning::new(
            WarningKind::MissingMeetName,
            "no <title> or <h1> text",
        ));
    }

    let metadata = [markup.title.as_deref(), markup.heading.as_deref()];
    info.date = metadata
        .into_iter()
        .flatten()
        .chain(
            preamble
                .iter()
                .take(config.date_scan_lines)
                .copied()
                .filter(|line| !STAMP.is_match(line)),
        )
        .find_map(find_date);
    if info.date.is_none() {
        warn!("No meet date found");
        info.warnings.push(ParseWarning::new(
            WarningKind::UnparsedDate,
            format!(
                "no date in title, heading or first {} lines",
                config.date_scan_lines
            ),
        ));
    }

    info
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, day)
    }

    #[test]
    fn test_date_formats() {
        assert_eq!(find_date("Frank Schultz Invitational - 9/27/2025"), d(2025, 9, 27));
        assert_eq!(find_date("Meet 09/27/25"), d(2025, 9, 27));
        assert_eq!(find_date("2025-10-04 Conference"), d(2025, 10, 4));
        assert_eq!(find_date("Saturday, September 13, 2025"), d(2025, 9, 13));
        assert_eq!(find_date("Sept. 13th 2025"), d(2025, 9, 13));
        assert_eq!(find_date("13 September 2025"), d(2025, 9, 13));
        assert_eq!(find_date("Held 13-Sep-25 at Pere Marquette"), d(2025, 9, 13));
    }

    #[test]
    fn test_invalid_dates_are_skipped() {
        assert_eq!(find_date("13/45/2025"), None);
        assert_eq!(find_date("Time 16:42.30"), None);
        assert_eq!(find_date("Smarch 13, 2025"), None);
    }

    #[test]
    fn test_strip_site_suffix() {
        let suffixes = vec!["MileSplit".to_string()];
        assert_eq!(
            strip_site_suffix("Frank Schultz Invitational - MileSplit Missouri", &suffixes),
            "Frank Schultz Invitational"
        );
        assert_eq!(
            strip_site_suffix("Hornet Classic | milesplit", &suffixes),
            "Hornet Classic"
        );
        assert_eq!(strip_site_suffix("Hornet Classic", &suffixes), "Hornet Classic");
    }

    #[test]
    fn test_name_falls_back_to_heading() {
        let markup = PageMarkup {
            title: Some("- MileSplit".to_string()),
            heading: Some("Hornet Classic 2025".to_string()),
            text: String::new(),
        };
        let info = meet_info(&markup, &[], &ParserConfig::default());
        assert_eq!(info.name.as_deref(), Some("Hornet Classic 2025"));
    }

    #[test]
    fn test_print_stamp_date_is_ignored() {
        let markup = PageMarkup {
            title: None,
            heading: None,
            text: String::new(),
        };
        let preamble = [
            "Licensed to Hy-Tek's MEET MANAGER 9:49 AM  9/28/2025  Page 1",
            "Frank Schultz Invitational - 9/27/2025",
        ];
        let info = meet_info(&markup, &preamble, &ParserConfig::default());
        assert_eq!(info.date, d(2025, 9, 27));
        assert_eq!(info.name, None);

        let kinds: Vec<WarningKind> = info.warnings.iter().map(|w| w.kind).collect();
        assert_eq!(kinds, vec![WarningKind::MissingMeetName]);
    }

    #[test]
    fn test_missing_date_warns() {
        let markup = PageMarkup {
            title: Some("Hornet Classic - MileSplit".to_string()),
            heading: None,
            text: String::new(),
        };
        let info = meet_info(&markup, &["Results"], &ParserConfig::default());
        assert_eq!(info.date, None);
        assert_eq!(info.warnings.len(), 1);
        assert_eq!(info.warnings[0].kind, WarningKind::UnparsedDate);
    }
}

//! Race header tokenizer
//!
//! Headers are read by token class, not by position. Each recogniser claims the
//! spans it matches, earlier recognisers win overlaps, and whatever no
//! recogniser claimed becomes the division label. "Freshman Girls 5k" and
//! "Girls Freshman 5k" therefore yield the same fields.

use crate::error::HeaderError;
use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;
use xcresults_domain::{Gender, RaceHeader};

/// Longest distance accepted as a cross country race, in meters
const MAX_DISTANCE_METERS: f64 = 50_000.0;

const METERS_PER_MILE: f64 = 1609.344;

#[derive(Debug, Clone, Copy)]
enum TokenClass {
    /// Recognised and discarded (event numbering, "Run", "Results")
    Noise,
    /// Number in capture group 1, scaled to meters
    Distance(f64),
    Gender(Gender),
    /// Canonical race-type label
    RaceType(&'static str),
}

struct Recognizer {
    class: TokenClass,
    pattern: Regex,
}

fn recognizer(class: TokenClass, pattern: &str) -> Recognizer {
    Recognizer {
        class,
        pattern: Regex::new(pattern).expect("static regex must compile"),
    }
}

/// Recognisers in claim order
static RECOGNIZERS: LazyLock<Vec<Recognizer>> = LazyLock::new(|| {
    vec![
        recognizer(TokenClass::Noise, r"(?i)\bevent\s*#?\s*\d+\b"),
        recognizer(
            TokenClass::Distance(1000.0),
            r"(?i)\b(\d+(?:\.\d+)?)\s*(?:k|km|kilometers?|kilometres?)\b",
        ),
        recognizer(
            TokenClass::Distance(1.0),
            r"(?i)\b(\d{1,3}(?:,\d{3})+|\d+)\s*(?:m|meters?|metres?)\b",
        ),
        recognizer(
            TokenClass::Distance(METERS_PER_MILE),
            r"(?i)\b(\d+(?:\.\d+)?)\s*(?:mi|miles?)\b",
        ),
        recognizer(
            TokenClass::Gender(Gender::Female),
            r"(?i)\b(?:girls?|women'?s?|ladies|female)\b",
        ),
        recognizer(TokenClass::Gender(Gender::Male), r"(?i)\b(?:boys?|men'?s?|male)\b"),
        recognizer(TokenClass::RaceType("JV"), r"(?i)\b(?:jv|junior\s+varsity)\b"),
        recognizer(TokenClass::RaceType("Varsity"), r"(?i)\bvarsity\b"),
        recognizer(TokenClass::RaceType("Frosh-Soph"), r"(?i)\bfrosh[\s/-]*soph(?:omores?)?\b"),
        recognizer(TokenClass::RaceType("Freshman"), r"(?i)\b(?:freshm[ae]n|frosh)\b"),
        recognizer(TokenClass::RaceType("Sophomore"), r"(?i)\bsophomores?\b"),
        recognizer(TokenClass::RaceType("Junior"), r"(?i)\bjuniors?\b"),
        recognizer(TokenClass::RaceType("Senior"), r"(?i)\bseniors?\b"),
        recognizer(TokenClass::RaceType("Open"), r"(?i)\bopen\b"),
        recognizer(TokenClass::RaceType("Reserve"), r"(?i)\breserves?\b"),
        recognizer(TokenClass::RaceType("Championship"), r"(?i)\bchampionships?\b"),
        recognizer(TokenClass::Noise, r"(?i)\b(?:run|results?|cc|xc|race|cross\s+country)\b"),
    ]
});

/// Parse a race header into structured fields
///
/// Distance and race type are best effort. Fails only when the header carries
/// no gender token; a header naming both genders yields [`Gender::Unknown`].
///
/// # Examples
///
/// ```
/// use xcresults_parser::tokenize_header;
/// use xcresults_domain::Gender;
///
/// let header = tokenize_header("Mens 5,000 Meters Varsity Boys").unwrap();
/// assert_eq!(header.gender, Gender::Male);
/// assert_eq!(header.distance_meters, Some(5000));
/// assert_eq!(header.race_type.as_deref(), Some("Varsity"));
/// ```
pub fn tokenize_header(raw: &str) -> Result<RaceHeader, HeaderError> {
    let mut claimed: Vec<Range<usize>> = Vec::new();
    let mut genders: Vec<Gender> = Vec::new();
    let mut distance: Option<(usize, Option<u32>)> = None;
    let mut race_type: Option<(usize, &'static str)> = None;

    for rec in RECOGNIZERS.iter() {
        for caps in rec.pattern.captures_iter(raw) {
            let Some(whole) = caps.get(0) else {
                continue;
            };
            let span = whole.range();
            if claimed.iter().any(|c| c.start < span.end && span.start < c.end) {
                continue;
            }
            claimed.push(span.clone());

            match rec.class {
                TokenClass::Noise => {}
                TokenClass::Gender(gender) => {
                    if !genders.contains(&gender) {
                        genders.push(gender);
                    }
                }
                TokenClass::Distance(scale) => {
                    if distance.map_or(true, |(start, _)| span.start < start) {
                        let meters = caps.get(1).and_then(|n| to_meters(n.as_str(), scale));
                        distance = Some((span.start, meters));
                    }
                }
                TokenClass::RaceType(label) => {
                    if race_type.map_or(true, |(start, _)| span.start < start) {
                        race_type = Some((span.start, label));
                    }
                }
            }
        }
    }

    let gender = match genders.as_slice() {
        [] => return Err(HeaderError::UnparseableHeader(raw.trim().to_string())),
        [only] => *only,
        _ => Gender::Unknown,
    };

    Ok(RaceHeader {
        gender,
        race_type: race_type.map(|(_, label)| label.to_string()),
        distance_meters: distance.and_then(|(_, meters)| meters),
        division_label: leftover_words(raw, &mut claimed),
        raw_label: raw.trim().to_string(),
    })
}

fn to_meters(number: &str, scale: f64) -> Option<u32> {
    let value: f64 = number.replace(',', "").parse().ok()?;
    let meters = (value * scale).round();
    if meters <= 0.0 || meters > MAX_DISTANCE_METERS {
        return None;
    }
    Some(meters as u32)
}

/// Words outside every claimed span, punctuation trimmed
fn leftover_words(raw: &str, claimed: &mut [Range<usize>]) -> Option<String> {
    claimed.sort_by_key(|c| c.start);

    let mut rest = String::with_capacity(raw.len());
    let mut cursor = 0;
    for span in claimed.iter() {
        rest.push_str(&raw[cursor..span.start]);
        rest.push(' ');
        cursor = span.end;
    }
    rest.push_str(&raw[cursor..]);

    let words: Vec<&str> = rest
        .split_whitespace()
        .map(|w| w.trim_matches(|c: char| "()[],-:#/|".contains(c)))
        .filter(|w| !w.is_empty())
        .collect();

    if words.is_empty() {
        None
    } else {
        Some(words.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_one_header() {
        let header = tokenize_header("Mens 5,000 Meters Varsity Boys").unwrap();
        assert_eq!(header.gender, Gender::Male);
        assert_eq!(header.distance_meters, Some(5000));
        assert_eq!(header.race_type.as_deref(), Some("Varsity"));
        assert_eq!(header.division_label, None);
        assert_eq!(header.raw_label, "Mens 5,000 Meters Varsity Boys");
    }

    #[test]
    fn test_format_two_header() {
        let header = tokenize_header("Event 1  Boys 5k Run CC Varsity").unwrap();
        assert_eq!(header.gender, Gender::Male);
        assert_eq!(header.distance_meters, Some(5000));
        assert_eq!(header.race_type.as_deref(), Some("Varsity"));
        assert_eq!(header.division_label, None);
    }

    #[test]
    fn test_format_three_headers() {
        let header = tokenize_header("Freshman Girls 5k Run Results").unwrap();
        assert_eq!(header.gender, Gender::Female);
        assert_eq!(header.race_type.as_deref(), Some("Freshman"));
        assert_eq!(header.distance_meters, Some(5000));

        let header = tokenize_header("Girls JV 3k Run White Results").unwrap();
        assert_eq!(header.race_type.as_deref(), Some("JV"));
        assert_eq!(header.distance_meters, Some(3000));
        assert_eq!(header.division_label.as_deref(), Some("White"));
    }

    #[test]
    fn test_token_order_does_not_matter() {
        let a = tokenize_header("Freshman Girls 5k").unwrap();
        let b = tokenize_header("Girls Freshman 5k").unwrap();
        let c = tokenize_header("5k Freshman Girls").unwrap();
        for h in [&b, &c] {
            assert_eq!(h.gender, a.gender);
            assert_eq!(h.race_type, a.race_type);
            assert_eq!(h.distance_meters, a.distance_meters);
        }

        let d = tokenize_header("Girls Varsity 5k").unwrap();
        assert_eq!(d.gender, Gender::Female);
        assert_eq!(d.distance_meters, Some(5000));
    }

    #[test]
    fn test_junior_varsity_is_not_junior() {
        let header = tokenize_header("Boys Junior Varsity 2 Mile").unwrap();
        assert_eq!(header.race_type.as_deref(), Some("JV"));
        assert_eq!(header.distance_meters, Some(3219));
    }

    #[test]
    fn test_womens_is_not_mens() {
        let header = tokenize_header("Women's 4,000 Meters Open").unwrap();
        assert_eq!(header.gender, Gender::Female);
        assert_eq!(header.distance_meters, Some(4000));
        assert_eq!(header.race_type.as_deref(), Some("Open"));
    }

    #[test]
    fn test_missing_distance_is_none_not_zero() {
        let header = tokenize_header("Varsity Girls Green").unwrap();
        assert_eq!(header.distance_meters, None);
        assert_eq!(header.division_label.as_deref(), Some("Green"));

        let header = tokenize_header("Boys 0k Varsity").unwrap();
        assert_eq!(header.distance_meters, None);
    }

    #[test]
    fn test_fractional_kilometers() {
        let header = tokenize_header("Boys 3.2k Run").unwrap();
        assert_eq!(header.distance_meters, Some(3200));
    }

    #[test]
    fn test_both_genders_is_unknown() {
        let header = tokenize_header("Boys & Girls Open 2k").unwrap();
        assert_eq!(header.gender, Gender::Unknown);
        assert_eq!(header.race_type.as_deref(), Some("Open"));
    }

    #[test]
    fn test_no_gender_fails() {
        let err = tokenize_header("Event 3  Open 5k Run CC").unwrap_err();
        assert_eq!(err, HeaderError::UnparseableHeader("Event 3  Open 5k Run CC".to_string()));
    }

    #[test]
    fn test_division_label_keeps_leftover_order() {
        let header = tokenize_header("Girls Varsity 5k Run (Large School Division)").unwrap();
        assert_eq!(header.division_label.as_deref(), Some("Large School Division"));
    }
}

//! Race time module - the one canonical time rule
//!
//! Accepted text: `M:SS`, `M:SS.f`, `M:SS.ff`, `M:SS.fff` and bare seconds
//! (`59.9`). Values are held as whole hundredths of a second so the same text
//! always yields the same `seconds()` value, and the canonical text re-parses
//! to exactly the value it was printed from.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Reasons a time string is rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeError {
    /// Nothing to parse
    #[error("empty time")]
    Empty,

    /// Not a clock time or a number
    #[error("malformed time '{0}'")]
    Malformed(String),

    /// Seconds field of a clock time is 60 or more
    #[error("seconds out of range in '{0}'")]
    SecondsOutOfRange(String),

    /// Zero is never a real finishing time
    #[error("non-positive time '{0}'")]
    NonPositive(String),
}

/// A finishing time in hundredths of a second
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RaceTime(u64);

impl RaceTime {
    /// Parse a time string
    ///
    /// `seconds = minutes * 60 + seconds_and_fraction` for the clock form,
    /// otherwise a direct numeric parse. Fractions beyond hundredths are
    /// rounded half up.
    ///
    /// # Examples
    ///
    /// ```
    /// use xcresults_domain::RaceTime;
    ///
    /// let t = RaceTime::parse("16:42.30").unwrap();
    /// assert_eq!(t.seconds(), 1002.30);
    /// assert_eq!(t.to_string(), "16:42.30");
    ///
    /// assert_eq!(RaceTime::parse("4:59").unwrap().seconds(), 299.0);
    /// assert_eq!(RaceTime::parse("59.9").unwrap().seconds(), 59.9);
    /// assert!(RaceTime::parse("DNF").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, TimeError> {
        let t = text.trim();
        if t.is_empty() {
            return Err(TimeError::Empty);
        }
        let malformed = || TimeError::Malformed(t.to_string());

        let hundredths = match t.split_once(':') {
            Some((minutes, rest)) => {
                if minutes.is_empty()
                    || !minutes.bytes().all(|b| b.is_ascii_digit())
                    || rest.contains(':')
                {
                    return Err(malformed());
                }
                let whole_len = rest.split('.').next().map_or(0, str::len);
                if whole_len != 2 {
                    return Err(malformed());
                }
                let minutes: u64 = minutes.parse().map_err(|_| malformed())?;
                let (whole, fraction) = split_seconds(rest).ok_or_else(malformed)?;
                if whole >= 60 {
                    return Err(TimeError::SecondsOutOfRange(t.to_string()));
                }
                minutes
                    .checked_mul(6000)
                    .and_then(|m| m.checked_add(whole * 100 + fraction))
                    .ok_or_else(malformed)?
            }
            None => {
                let (whole, fraction) = split_seconds(t).ok_or_else(malformed)?;
                whole
                    .checked_mul(100)
                    .and_then(|w| w.checked_add(fraction))
                    .ok_or_else(malformed)?
            }
        };

        if hundredths == 0 {
            return Err(TimeError::NonPositive(t.to_string()));
        }
        Ok(Self(hundredths))
    }

    /// Create a time from whole hundredths of a second
    pub fn from_hundredths(hundredths: u64) -> Self {
        Self(hundredths)
    }

    /// Whole hundredths of a second
    pub fn hundredths(&self) -> u64 {
        self.0
    }

    /// Time in seconds
    pub fn seconds(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

impl fmt::Display for RaceTime {
    /// Canonical `M:SS.ss` text
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let minutes = self.0 / 6000;
        let rest = self.0 % 6000;
        write!(f, "{}:{:02}.{:02}", minutes, rest / 100, rest % 100)
    }
}

impl std::str::FromStr for RaceTime {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Split `SS[.fff]` into whole seconds and rounded hundredths
fn split_seconds(s: &str) -> Option<(u64, u64)> {
    let (whole, fraction) = match s.split_once('.') {
        Some((w, f)) => (w, Some(f)),
        None => (s, None),
    };
    if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let whole: u64 = whole.parse().ok()?;

    let hundredths = match fraction {
        None => 0,
        Some(f) if f.is_empty() || f.len() > 3 || !f.bytes().all(|b| b.is_ascii_digit()) => {
            return None;
        }
        Some(f) => {
            let thousandths: u64 = format!("{:0<3}", f).parse().ok()?;
            (thousandths + 5) / 10
        }
    };
    Some((whole, hundredths))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_times() {
        assert_eq!(RaceTime::parse("16:42.30").unwrap().seconds(), 1002.30);
        assert_eq!(RaceTime::parse("4:59").unwrap().seconds(), 299.0);
        assert_eq!(RaceTime::parse("22:06.6").unwrap().hundredths(), 132_660);
        assert_eq!(RaceTime::parse(" 15:54.29 ").unwrap().to_string(), "15:54.29");
    }

    #[test]
    fn test_bare_seconds() {
        let t = RaceTime::parse("59.9").unwrap();
        assert_eq!(t.seconds(), 59.9);
        assert_eq!(t.to_string(), "0:59.90");
    }

    #[test]
    fn test_fraction_rounding_carries_into_minutes() {
        let t = RaceTime::parse("4:59.996").unwrap();
        assert_eq!(t.to_string(), "5:00.00");
    }

    #[test]
    fn test_rejections() {
        assert_eq!(RaceTime::parse(""), Err(TimeError::Empty));
        assert!(matches!(RaceTime::parse("DNF"), Err(TimeError::Malformed(_))));
        assert!(matches!(RaceTime::parse("1:02:03"), Err(TimeError::Malformed(_))));
        assert!(matches!(RaceTime::parse("16:4"), Err(TimeError::Malformed(_))));
        assert!(matches!(RaceTime::parse("16:42."), Err(TimeError::Malformed(_))));
        assert!(matches!(RaceTime::parse(":42.1"), Err(TimeError::Malformed(_))));
        assert!(matches!(
            RaceTime::parse("16:75.00"),
            Err(TimeError::SecondsOutOfRange(_))
        ));
        assert!(matches!(RaceTime::parse("0:00.00"), Err(TimeError::NonPositive(_))));
        assert!(matches!(RaceTime::parse("-5"), Err(TimeError::Malformed(_))));
    }
}

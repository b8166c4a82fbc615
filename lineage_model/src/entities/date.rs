//! In-world calendar dates.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// A date on the in-world calendar.
///
/// Ordering is chronological: by year, then month, then day. Years may be
/// negative for eras before the calendar epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HistoricDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl HistoricDate {
    /// Sorts after every real date. Used as the birth date of people whose
    /// birth was never recorded.
    pub const FAR_FUTURE: HistoricDate = HistoricDate {
        year: i32::MAX,
        month: u8::MAX,
        day: u8::MAX,
    };

    /// Create a new date.
    pub fn new(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// First day of the given year.
    pub fn year(year: i32) -> Self {
        Self::new(year, 1, 1)
    }
}

impl std::fmt::Display for HistoricDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.year < 0 {
            write!(f, "-{:04}-{:02}-{:02}", -(self.year as i64), self.month, self.day)
        } else {
            write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
        }
    }
}

/// Errors produced when parsing a date string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DateParseError {
    #[error("empty date string")]
    Empty,

    #[error("invalid {component} '{value}' in date")]
    InvalidComponent {
        component: &'static str,
        value: String,
    },

    #[error("too many components in date '{0}'")]
    TooManyComponents(String),
}

impl FromStr for HistoricDate {
    type Err = DateParseError;

    /// Accepts `YYYY`, `YYYY-MM` or `YYYY-MM-DD`, with an optional leading `-`
    /// on the year. Missing month and day default to 1.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(DateParseError::Empty);
        }

        let (negative, body) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };

        let mut parts = body.split('-');
        let year_text = parts.next().unwrap_or_default();
        let year: i32 = year_text
            .parse()
            .map_err(|_| DateParseError::InvalidComponent {
                component: "year",
                value: year_text.to_string(),
            })?;
        let month = parse_component(parts.next(), "month", 12)?;
        let day = parse_component(parts.next(), "day", 31)?;

        if parts.next().is_some() {
            return Err(DateParseError::TooManyComponents(s.to_string()));
        }

        Ok(Self::new(if negative { -year } else { year }, month, day))
    }
}

fn parse_component(
    text: Option<&str>,
    component: &'static str,
    max: u8,
) -> Result<u8, DateParseError> {
    let Some(text) = text else {
        return Ok(1);
    };
    match text.parse::<u8>() {
        Ok(value) if (1..=max).contains(&value) => Ok(value),
        _ => Err(DateParseError::InvalidComponent {
            component,
            value: text.to_string(),
        }),
    }
}

//! # Temporal Types: Calendar Dates
//!
//! Defines `PostDate`, the publication date of a post. Only the calendar day
//! is kept; there is no time-of-day or timezone component.
//!
//! ## Accepted Inputs
//!
//! - `YYYY-MM-DD` (e.g. `2025-05-04`), the canonical form.
//! - RFC 3339 timestamps (e.g. `2025-05-04T09:30:00+02:00`). The instant is
//!   converted to UTC and the time of day is discarded.
//!
//! Impossible dates such as `2025-02-30` are rejected at construction.
//! Output is always the canonical `YYYY-MM-DD` form.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A validated calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PostDate(NaiveDate);

impl PostDate {
    /// Build a date from year, month and day.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidDate`] if the components do not
    /// form a real calendar day.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, ValidationError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| ValidationError::InvalidDate {
                input: format!("{year:04}-{month:02}-{day:02}"),
                reason: "no such calendar day".to_string(),
            })
    }

    /// Parse a date from `YYYY-MM-DD` or an RFC 3339 timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidDate`] if the string matches neither
    /// form or names an impossible day.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        match NaiveDate::parse_from_str(s, DATE_FORMAT) {
            Ok(date) => Ok(Self(date)),
            Err(date_err) => DateTime::parse_from_rfc3339(s)
                .map(|dt| Self(dt.with_timezone(&Utc).date_naive()))
                .map_err(|_| ValidationError::InvalidDate {
                    input: s.to_string(),
                    reason: date_err.to_string(),
                }),
        }
    }

    /// Access the inner `NaiveDate`.
    pub fn as_naive(&self) -> &NaiveDate {
        &self.0
    }

    /// Render as `YYYY-MM-DD`.
    pub fn to_iso8601(&self) -> String {
        self.0.format(DATE_FORMAT).to_string()
    }
}

impl TryFrom<String> for PostDate {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<PostDate> for String {
    fn from(date: PostDate) -> Self {
        date.to_iso8601()
    }
}

impl std::fmt::Display for PostDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_iso8601())
    }
}

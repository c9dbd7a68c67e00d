//! Date-like inputs and their coercion to calendar dates.

use crate::error::MambuClientError;

use common::ErrorLocation;
use models::DATE_FORMAT;

use std::panic::Location;

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};

const TEXT_DATETIME_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f%z",
];

/// A value that names a calendar day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateLike {
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    Text(String),
}

impl DateLike {
    /// Reduce to a calendar date.
    ///
    /// Text is accepted as `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM:SS[.f]`,
    /// `YYYY-MM-DDTHH:MM:SS±HHMM` or RFC 3339. Zoned values keep their own
    /// calendar day; no timezone conversion is applied.
    #[track_caller]
    pub fn coerce_date(&self) -> Result<NaiveDate, MambuClientError> {
        match self {
            DateLike::Date(date) => Ok(*date),
            DateLike::DateTime(datetime) => Ok(datetime.date()),
            DateLike::Text(text) => match parse_date_text(text.trim()) {
                Some(date) => Ok(date),
                None => Err(MambuClientError::InvalidDate {
                    value: text.clone(),
                    location: ErrorLocation::from(Location::caller()),
                }),
            },
        }
    }

    /// Format as the platform's `YYYY-MM-DD`.
    #[track_caller]
    pub fn mambu_date(&self) -> Result<String, MambuClientError> {
        Ok(self.coerce_date()?.format(DATE_FORMAT).to_string())
    }
}

fn parse_date_text(text: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(text, DATE_FORMAT) {
        return Some(date);
    }
    if let Ok(stamp) = DateTime::parse_from_rfc3339(text) {
        return Some(stamp.date_naive());
    }
    for format in TEXT_DATETIME_FORMATS {
        if let Ok(stamp) = DateTime::parse_from_str(text, format) {
            return Some(stamp.date_naive());
        }
        if let Ok(datetime) = NaiveDateTime::parse_from_str(text, format) {
            return Some(datetime.date());
        }
    }
    None
}

/// The local calendar date.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// The date to send for a dated transaction, or `None` to let the platform
/// default to now.
///
/// `None` is returned when no date is given or when it falls on `today`.
#[track_caller]
pub fn explicit_date(
    date: Option<&DateLike>,
    today: NaiveDate,
) -> Result<Option<NaiveDate>, MambuClientError> {
    match date {
        None => Ok(None),
        Some(candidate) => {
            let coerced = candidate.coerce_date()?;
            Ok((coerced != today).then_some(coerced))
        }
    }
}

impl From<NaiveDate> for DateLike {
    fn from(value: NaiveDate) -> Self {
        DateLike::Date(value)
    }
}

impl From<NaiveDateTime> for DateLike {
    fn from(value: NaiveDateTime) -> Self {
        DateLike::DateTime(value)
    }
}

impl From<&str> for DateLike {
    fn from(value: &str) -> Self {
        DateLike::Text(value.to_string())
    }
}

impl From<String> for DateLike {
    fn from(value: String) -> Self {
        DateLike::Text(value)
    }
}

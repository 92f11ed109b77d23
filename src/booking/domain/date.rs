//! Strict calendar dates for travel itineraries.

use super::BookingDomainError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Calendar date parsed from the fixed `dd/mm/yyyy` layout.
///
/// Parsing is strict: two-digit day, two-digit month, four-digit year,
/// `/` separators and nothing else. Combinations that do not name a real
/// day (31 April, 29 February outside a leap year) are rejected rather
/// than rolled over.
///
/// # Examples
///
/// ```
/// use concourse::booking::domain::TravelDate;
///
/// assert!(TravelDate::parse("29/02/2028").is_ok());
/// assert!(TravelDate::parse("29/02/2026").is_err());
/// assert!(TravelDate::parse("1/12/2025").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TravelDate(NaiveDate);

impl TravelDate {
    /// Parses a `dd/mm/yyyy` date.
    ///
    /// # Errors
    ///
    /// Returns [`BookingDomainError::MalformedDate`] when the input does not
    /// follow the layout, or [`BookingDomainError::NonexistentDate`] when the
    /// fields name a day that does not exist.
    pub fn parse(input: &str) -> Result<Self, BookingDomainError> {
        let [d1, d2, s1, m1, m2, s2, y1, y2, y3, y4] = <[u8; 10]>::try_from(input.as_bytes())
            .map_err(|_| BookingDomainError::MalformedDate(input.to_owned()))?;

        if s1 != b'/' || s2 != b'/' {
            return Err(BookingDomainError::MalformedDate(input.to_owned()));
        }

        let day = digits(&[d1, d2]);
        let month = digits(&[m1, m2]);
        let year = digits(&[y1, y2, y3, y4]);
        let (Some(day), Some(month), Some(year)) = (day, month, year) else {
            return Err(BookingDomainError::MalformedDate(input.to_owned()));
        };

        i32::try_from(year)
            .ok()
            .and_then(|y| NaiveDate::from_ymd_opt(y, month, day))
            .map(Self)
            .ok_or_else(|| BookingDomainError::NonexistentDate(input.to_owned()))
    }

    /// Wraps an existing calendar date.
    #[must_use]
    pub const fn from_naive(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Returns the underlying calendar date.
    #[must_use]
    pub const fn into_inner(self) -> NaiveDate {
        self.0
    }
}

/// Folds ASCII digits into a number, rejecting anything else.
fn digits(bytes: &[u8]) -> Option<u32> {
    bytes.iter().try_fold(0_u32, |acc, byte| {
        byte.is_ascii_digit()
            .then(|| acc * 10 + u32::from(byte - b'0'))
    })
}

impl From<NaiveDate> for TravelDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for TravelDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}/{:02}/{:04}",
            self.0.day(),
            self.0.month(),
            self.0.year()
        )
    }
}

//! Fare tiers offered on a booking.

use super::BookingDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Seating class (fare tier) of a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeatingClass {
    /// Standard cabin; the only class with emergency-row seats.
    Economy,
    /// Economy with extra legroom and service.
    PremiumEconomy,
    /// Business cabin; infants may not be seated here.
    Business,
    /// First cabin; children may not be seated here.
    First,
}

impl SeatingClass {
    /// Every supported class, in fare order.
    pub const ALL: [Self; 4] = [
        Self::Economy,
        Self::PremiumEconomy,
        Self::Business,
        Self::First,
    ];

    /// Returns the canonical name callers submit.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Economy => "economy",
            Self::PremiumEconomy => "premium economy",
            Self::Business => "business",
            Self::First => "first",
        }
    }

    /// Returns whether `name` denotes this class.
    ///
    /// When `case_sensitive` is `false` the comparison ignores ASCII case.
    #[must_use]
    pub fn matches(self, name: &str, case_sensitive: bool) -> bool {
        if case_sensitive {
            self.as_str() == name
        } else {
            self.as_str().eq_ignore_ascii_case(name)
        }
    }
}

impl TryFrom<&str> for SeatingClass {
    type Error = BookingDomainError;

    /// Parses a class name using an exact, case-sensitive match.
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|class| class.as_str() == value)
            .ok_or_else(|| BookingDomainError::UnknownSeatingClass(value.to_owned()))
    }
}

impl fmt::Display for SeatingClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

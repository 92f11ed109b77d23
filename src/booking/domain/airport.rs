//! Airports served by the booking system.

use super::BookingDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Code of a served airport.
///
/// Codes are lower-case and matched exactly; `"SYD"` is not `"syd"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AirportCode {
    /// Sydney.
    Syd,
    /// Melbourne.
    Mel,
    /// Los Angeles.
    Lax,
    /// Paris Charles de Gaulle.
    Cdg,
    /// Delhi.
    Del,
    /// Shanghai Pudong.
    Pvg,
    /// Doha.
    Doh,
}

impl AirportCode {
    /// Every served airport.
    pub const ALL: [Self; 7] = [
        Self::Syd,
        Self::Mel,
        Self::Lax,
        Self::Cdg,
        Self::Del,
        Self::Pvg,
        Self::Doh,
    ];

    /// Returns the code as submitted by callers.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Syd => "syd",
            Self::Mel => "mel",
            Self::Lax => "lax",
            Self::Cdg => "cdg",
            Self::Del => "del",
            Self::Pvg => "pvg",
            Self::Doh => "doh",
        }
    }
}

impl TryFrom<&str> for AirportCode {
    type Error = BookingDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|code| code.as_str() == value)
            .ok_or_else(|| BookingDomainError::UnknownAirport(value.to_owned()))
    }
}

impl fmt::Display for AirportCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

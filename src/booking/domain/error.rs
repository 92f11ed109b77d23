//! Error types for booking domain parsing.

use thiserror::Error;

/// Errors returned while constructing typed booking values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BookingDomainError {
    /// The date does not follow the `dd/mm/yyyy` layout.
    #[error("malformed date '{0}', expected dd/mm/yyyy")]
    MalformedDate(String),

    /// The date follows the layout but names no real calendar day.
    #[error("date '{0}' does not exist in the calendar")]
    NonexistentDate(String),

    /// The seating class is not one of the supported fare tiers.
    #[error("unknown seating class: {0}")]
    UnknownSeatingClass(String),

    /// The airport code is not served.
    #[error("unknown airport code: {0}")]
    UnknownAirport(String),
}

//! Rejection reasons produced by the booking rule chain.
//!
//! Every variant corresponds to exactly one [`RuleId`], so callers can
//! tell which constraint a request broke without matching on messages.

use super::{domain::BookingDomainError, validation::RuleId};
use chrono::NaiveDate;
use thiserror::Error;

/// Which of the two travel dates a rejection refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateField {
    /// The outbound date.
    Departure,
    /// The return date.
    Return,
}

/// Which of the two airport codes a rejection refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AirportField {
    /// The departure airport.
    Departure,
    /// The destination airport.
    Destination,
}

/// Seat placement that a child or infant may not occupy.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RestrictedSeating {
    /// A seat in an emergency-exit row.
    EmergencyRow,
    /// A seat in the named class.
    Class(String),
}

/// Broad category of a rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectionKind {
    /// A date could not be read as a real calendar day.
    MalformedDate,
    /// Well-formed input broke a business constraint.
    RuleViolation,
}

/// Reason a booking request was rejected.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BookingRejection {
    /// The party is empty or larger than a single booking allows.
    #[error("party of {total} passengers is outside the allowed range {min}..={max}")]
    PassengerTotalOutOfRange {
        /// Total passengers requested.
        total: u64,
        /// Smallest permitted party.
        min: u64,
        /// Largest permitted party.
        max: u64,
    },

    /// Children were placed in a seat they may not occupy.
    #[error("children cannot be seated in {0}")]
    ChildSeatingRestricted(RestrictedSeating),

    /// Infants were placed in a seat they may not occupy.
    #[error("infants cannot be seated in {0}")]
    InfantSeatingRestricted(RestrictedSeating),

    /// More than two children per adult.
    #[error("{children} children exceed the limit of two per adult for {adults} adults")]
    TooManyChildrenPerAdult {
        /// Children requested.
        children: u32,
        /// Adults requested.
        adults: u32,
    },

    /// More than one infant per adult.
    #[error("{infants} infants exceed the limit of one per adult for {adults} adults")]
    TooManyInfantsPerAdult {
        /// Infants requested.
        infants: u32,
        /// Adults requested.
        adults: u32,
    },

    /// A travel date is malformed or does not exist.
    #[error("invalid {field} date: {source}")]
    MalformedDate {
        /// The offending date.
        field: DateField,
        /// Parse failure detail.
        source: BookingDomainError,
    },

    /// The departure date lies before today.
    #[error("departure date {departure} is before today ({today})")]
    DepartureInPast {
        /// Requested departure.
        departure: NaiveDate,
        /// Date the request was evaluated on.
        today: NaiveDate,
    },

    /// The return date lies before the departure date.
    #[error("return date {return_date} is before departure date {departure}")]
    ReturnBeforeDeparture {
        /// Requested departure.
        departure: NaiveDate,
        /// Requested return.
        return_date: NaiveDate,
    },

    /// The seating class is not offered.
    #[error("unknown seating class '{0}'")]
    UnknownSeatingClass(String),

    /// Emergency-row seating was requested outside economy.
    #[error("emergency-row seating is only available in economy, not '{0}'")]
    EmergencyRowOutsideEconomy(String),

    /// An airport code is not served.
    #[error("unknown {field} airport '{code}'")]
    UnknownAirport {
        /// The offending airport.
        field: AirportField,
        /// Code as submitted.
        code: String,
    },

    /// Departure and destination are the same airport.
    #[error("departure and destination are both '{0}'")]
    SameAirport(String),
}

impl BookingRejection {
    /// Returns the rule that produced this rejection.
    #[must_use]
    pub const fn rule(&self) -> RuleId {
        match self {
            Self::PassengerTotalOutOfRange { .. } => RuleId::PassengerTotal,
            Self::ChildSeatingRestricted(_) => RuleId::ChildSeating,
            Self::InfantSeatingRestricted(_) => RuleId::InfantSeating,
            Self::TooManyChildrenPerAdult { .. } => RuleId::ChildRatio,
            Self::TooManyInfantsPerAdult { .. } => RuleId::InfantRatio,
            Self::MalformedDate { .. } => RuleId::DateFormat,
            Self::DepartureInPast { .. } => RuleId::DepartureNotPast,
            Self::ReturnBeforeDeparture { .. } => RuleId::ReturnAfterDeparture,
            Self::UnknownSeatingClass(_) => RuleId::SeatingClass,
            Self::EmergencyRowOutsideEconomy(_) => RuleId::EmergencyRowClass,
            Self::UnknownAirport { .. } | Self::SameAirport(_) => RuleId::Airports,
        }
    }

    /// Returns the broad category of this rejection.
    #[must_use]
    pub const fn kind(&self) -> RejectionKind {
        match self {
            Self::MalformedDate { .. } => RejectionKind::MalformedDate,
            _ => RejectionKind::RuleViolation,
        }
    }
}

impl std::fmt::Display for DateField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Departure => "departure",
            Self::Return => "return",
        })
    }
}

impl std::fmt::Display for AirportField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Departure => "departure",
            Self::Destination => "destination",
        })
    }
}

impl std::fmt::Display for RestrictedSeating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmergencyRow => f.write_str("an emergency row"),
            Self::Class(class) => write!(f, "{class} class"),
        }
    }
}

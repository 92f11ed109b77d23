//! Flight booking validation for Concourse.
//!
//! This module decides whether a flight booking request is eligible under
//! the fixed business rules (party size and composition, seating
//! restrictions, travel dates, fare tier and airports) and retains the most
//! recently accepted booking. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Rejection reasons in [`error`]
//! - Port contracts in [`ports`]
//! - The rule table and stateful validator in [`validation`]
//! - Adapter implementations in [`adapters`]
//! - Caller-facing services in [`services`]
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use concourse::booking::{
//!     adapters::FixedClock,
//!     domain::{BookingRequest, Itinerary, PassengerCounts, SeatingPreference},
//!     ports::{BookingValidation, ValidationConfig},
//!     validation::{BookingValidator, RuleId},
//! };
//! use std::sync::Arc;
//!
//! let today = NaiveDate::from_ymd_opt(2025, 12, 1).expect("valid date");
//! let validator =
//!     BookingValidator::with_clock(ValidationConfig::default(), Arc::new(FixedClock::new(today)));
//!
//! let request = BookingRequest::new(
//!     Itinerary::new("syd", "10/12/2025", "cdg", "25/12/2025"),
//!     SeatingPreference::new("first"),
//!     PassengerCounts::new(1, 1, 0),
//! );
//! let rejection = validator.validate(&request).expect_err("children in first class");
//! assert_eq!(rejection.rule(), RuleId::ChildSeating);
//! assert!(validator.committed().is_none());
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod ports;
pub mod services;
pub mod validation;

#[cfg(test)]
mod tests;

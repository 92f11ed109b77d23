//! Concourse: flight booking eligibility validation.
//!
//! This crate decides whether a flight booking request satisfies the
//! airline's static booking rules as of today's date, and keeps the most
//! recently accepted booking for later inspection.
//!
//! # Architecture
//!
//! Concourse follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business types with no clock or locking concerns
//! - **Ports**: Abstract trait interfaces for validation
//! - **Adapters**: Concrete implementations of external capabilities (clocks)
//!
//! # Modules
//!
//! - [`booking`]: Booking requests, the ordered rule chain, and the
//!   stateful validator
//!
//! The current date is read through [`mockable::Clock`], so tests can pin
//! it with [`booking::adapters::FixedClock`].

pub mod booking;

//! Booking validation implementation.
//!
//! This module provides the ordered rule table and the stateful validator
//! that evaluates it and retains the last accepted booking.

pub mod rules;
pub mod service;

pub use rules::{Rule, RuleChain, RuleContext, RuleId};
pub use service::BookingValidator;

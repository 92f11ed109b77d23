//! Port contracts for booking validation.
//!
//! Ports define the seams services depend on, keeping them independent of
//! the concrete validator and its clock.

pub mod validator;

pub use validator::{BookingValidation, ConfigError, ValidationConfig, ValidationResult};

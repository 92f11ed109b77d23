//! Validator port and its configuration.

use crate::booking::{
    domain::{BookingRequest, BookingState, ValidatedBooking},
    error::BookingRejection,
};
use serde::Deserialize;
use thiserror::Error;

/// Result type for booking validation.
pub type ValidationResult<T> = Result<T, BookingRejection>;

/// Port for stateful booking validation.
///
/// # Implementation Notes
///
/// Implementations should:
/// - Evaluate rules in order and stop at the first failure
/// - Commit the booking only when every rule passes
/// - Leave the committed state untouched on rejection
/// - Be thread-safe, treating one call as a single critical section
pub trait BookingValidation: Send + Sync {
    /// Validates a request and commits it on success.
    ///
    /// # Errors
    ///
    /// Returns the [`BookingRejection`] of the first rule the request
    /// breaks.
    fn validate(&self, request: &BookingRequest) -> ValidationResult<ValidatedBooking>;

    /// Returns a snapshot of the committed state.
    fn state(&self) -> BookingState;

    /// Validates a request, reporting only whether it was accepted.
    fn check(&self, request: &BookingRequest) -> bool {
        self.validate(request).is_ok()
    }

    /// Returns the committed booking, if any.
    fn committed(&self) -> Option<ValidatedBooking> {
        match self.state() {
            BookingState::Empty => None,
            BookingState::Committed(booking) => Some(booking),
        }
    }
}

/// Errors raised while loading a [`ValidationConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration document could not be parsed.
    #[error("invalid validation config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Configuration for the booking rule chain.
///
/// Earlier rule sets disagreed on class-name casing and on whether airports
/// are checked at all. Both behaviours are explicit flags here; the default
/// is the complete, case-sensitive rule set.
///
/// # Examples
///
/// ```
/// use concourse::booking::ports::ValidationConfig;
///
/// let config = ValidationConfig::default();
/// assert!(config.strict_case_matching);
/// assert!(config.enforce_airport_rules);
///
/// let lenient = ValidationConfig::lenient();
/// assert!(!lenient.strict_case_matching);
/// assert!(!lenient.enforce_airport_rules);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidationConfig {
    /// When `false`, the child and infant seating restrictions compare class
    /// names ignoring ASCII case. Every other comparison stays exact.
    pub strict_case_matching: bool,
    /// Whether airport codes are checked against the served set and for
    /// distinctness.
    pub enforce_airport_rules: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self::reference()
    }
}

impl ValidationConfig {
    /// Creates the complete, case-sensitive rule set.
    #[must_use]
    pub const fn reference() -> Self {
        Self {
            strict_case_matching: true,
            enforce_airport_rules: true,
        }
    }

    /// Creates the permissive rule set: case-insensitive seating restrictions
    /// and no airport checks.
    #[must_use]
    pub const fn lenient() -> Self {
        Self {
            strict_case_matching: false,
            enforce_airport_rules: false,
        }
    }

    /// Loads a configuration from a JSON document.
    ///
    /// Missing keys take their reference values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown keys.
    pub fn from_json(document: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(document)?)
    }
}

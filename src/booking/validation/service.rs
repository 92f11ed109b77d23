//! Stateful booking validator.
//!
//! Combines the rule chain with an injected clock and retains the most
//! recently accepted booking.

use crate::booking::{
    domain::{BookingRequest, BookingState, ValidatedBooking},
    ports::{BookingValidation, ValidationConfig, ValidationResult},
    validation::rules::{Rule, RuleChain, RuleContext},
};
use chrono::NaiveDate;
use mockable::{Clock, DefaultClock};
use std::{
    fmt,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};
use tracing::{debug, info};

/// Validator that evaluates booking requests and commits accepted ones.
///
/// Each call reads the clock once, evaluates the rule chain against that
/// date and, only if every rule passes, replaces the committed booking.
/// The state lock is held for the whole call, so concurrent callers never
/// observe a half-finished commit and rejections never disturb the state.
///
/// # Examples
///
/// ```
/// use concourse::booking::{
///     domain::{BookingRequest, Itinerary, PassengerCounts, SeatingPreference},
///     ports::BookingValidation,
///     validation::BookingValidator,
/// };
///
/// let validator = BookingValidator::new();
/// let request = BookingRequest::new(
///     Itinerary::new("syd", "10/12/2025", "syd", "25/12/2025"),
///     SeatingPreference::new("economy"),
///     PassengerCounts::new(1, 0, 0),
/// );
///
/// assert!(!validator.check(&request));
/// assert!(validator.committed().is_none());
/// ```
pub struct BookingValidator<C = DefaultClock>
where
    C: Clock + Send + Sync,
{
    config: ValidationConfig,
    chain: RuleChain,
    clock: Arc<C>,
    state: Mutex<BookingState>,
}

impl BookingValidator<DefaultClock> {
    /// Creates a validator with the reference rule set and the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(ValidationConfig::default())
    }

    /// Creates a validator with custom configuration and the system clock.
    #[must_use]
    pub fn with_config(config: ValidationConfig) -> Self {
        Self::with_clock(config, Arc::new(DefaultClock))
    }
}

impl Default for BookingValidator<DefaultClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> BookingValidator<C>
where
    C: Clock + Send + Sync,
{
    /// Creates a validator reading the current date from `clock`.
    #[must_use]
    pub fn with_clock(config: ValidationConfig, clock: Arc<C>) -> Self {
        Self {
            config,
            chain: RuleChain::from_config(config),
            clock,
            state: Mutex::new(BookingState::Empty),
        }
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> ValidationConfig {
        self.config
    }

    /// Returns the active rules in evaluation order.
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        self.chain.rules()
    }

    /// Evaluates a request without committing it.
    ///
    /// # Errors
    ///
    /// Returns the rejection of the first failing rule.
    pub fn evaluate(&self, request: &BookingRequest) -> ValidationResult<()> {
        let context = RuleContext::new(request, self.config, self.today());
        self.chain.evaluate(&context)
    }

    fn today(&self) -> NaiveDate {
        self.clock.local().date_naive()
    }

    /// Commits are a single assignment, so a poisoned lock still guards a
    /// consistent state.
    fn lock_state(&self) -> MutexGuard<'_, BookingState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<C> BookingValidation for BookingValidator<C>
where
    C: Clock + Send + Sync,
{
    fn validate(&self, request: &BookingRequest) -> ValidationResult<ValidatedBooking> {
        let mut state = self.lock_state();
        let context = RuleContext::new(request, self.config, self.today());

        let booking = self.chain.accept(&context).inspect_err(|rejection| {
            debug!(
                rule = %rejection.rule(),
                kind = ?rejection.kind(),
                reason = %rejection,
                "booking request rejected"
            );
        })?;

        state.commit(booking.clone());
        info!(
            departure_airport = request.departure_airport(),
            destination_airport = request.destination_airport(),
            departure_date = %booking.departure(),
            passengers = booking.passengers().total(),
            "booking committed"
        );
        Ok(booking)
    }

    fn state(&self) -> BookingState {
        self.lock_state().clone()
    }
}

impl<C> fmt::Debug for BookingValidator<C>
where
    C: Clock + Send + Sync,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BookingValidator")
            .field("config", &self.config)
            .field("chain", &self.chain)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

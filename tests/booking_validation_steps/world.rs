//! Shared world state for booking validation BDD scenarios.

use std::sync::Arc;

use chrono::NaiveDate;
use concourse::booking::{
    adapters::FixedClock,
    domain::{BookingRequest, Itinerary, PassengerCounts, SeatingPreference, ValidatedBooking},
    error::BookingRejection,
    ports::ValidationConfig,
    validation::BookingValidator,
};
use rstest::fixture;

/// Validator type used by the BDD world.
pub type TestValidator = BookingValidator<FixedClock>;

/// Scenario world for booking validation behaviour tests.
pub struct BookingWorld {
    pub config: ValidationConfig,
    pub today: NaiveDate,
    pub validator: TestValidator,
    pub itinerary: Option<Itinerary>,
    pub seating: Option<SeatingPreference>,
    pub passengers: Option<PassengerCounts>,
    pub last_result: Option<Result<ValidatedBooking, BookingRejection>>,
}

impl BookingWorld {
    /// Creates a world with the reference configuration and an empty
    /// request draft.
    #[must_use]
    pub fn new() -> Self {
        let config = ValidationConfig::default();
        let today = NaiveDate::MIN;
        Self {
            config,
            today,
            validator: build_validator(config, today),
            itinerary: None,
            seating: None,
            passengers: None,
            last_result: None,
        }
    }

    /// Rebuilds the validator after the date or configuration changed.
    pub fn rebuild_validator(&mut self) {
        self.validator = build_validator(self.config, self.today);
    }

    /// Assembles the drafted request.
    pub fn request(&self) -> Result<BookingRequest, eyre::Report> {
        let itinerary = self
            .itinerary
            .clone()
            .ok_or_else(|| eyre::eyre!("missing itinerary in scenario world"))?;
        let seating = self
            .seating
            .clone()
            .ok_or_else(|| eyre::eyre!("missing seating preference in scenario world"))?;
        let passengers = self
            .passengers
            .ok_or_else(|| eyre::eyre!("missing passenger counts in scenario world"))?;
        Ok(BookingRequest::new(itinerary, seating, passengers))
    }
}

impl Default for BookingWorld {
    fn default() -> Self {
        Self::new()
    }
}

fn build_validator(config: ValidationConfig, today: NaiveDate) -> TestValidator {
    BookingValidator::with_clock(config, Arc::new(FixedClock::new(today)))
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BookingWorld {
    BookingWorld::default()
}

//! Flat flight-search surface over a booking validator.

use crate::booking::{
    domain::{BookingRequest, Itinerary, PassengerCounts, SeatingPreference, ValidatedBooking},
    ports::BookingValidation,
};
use std::sync::Arc;

/// Flight search service exposing the nine-field form and per-field
/// accessors for the last accepted search.
///
/// Accessors return `None` until a search has been accepted, then the
/// values exactly as they were submitted.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use concourse::booking::{
///     adapters::FixedClock, ports::ValidationConfig, services::FlightSearchService,
///     validation::BookingValidator,
/// };
/// use std::sync::Arc;
///
/// let today = NaiveDate::from_ymd_opt(2025, 12, 1).expect("valid date");
/// let validator = BookingValidator::with_clock(
///     ValidationConfig::default(),
///     Arc::new(FixedClock::new(today)),
/// );
/// let search = FlightSearchService::new(Arc::new(validator));
///
/// assert!(search.search("10/12/2025", "syd", false, "25/12/2025", "cdg", "economy", 3, 2, 1));
/// assert_eq!(search.departure_airport_code().as_deref(), Some("syd"));
/// assert_eq!(search.infant_passenger_count(), Some(1));
/// ```
#[derive(Debug)]
pub struct FlightSearchService<V>
where
    V: BookingValidation,
{
    validator: Arc<V>,
}

impl<V> Clone for FlightSearchService<V>
where
    V: BookingValidation,
{
    fn clone(&self) -> Self {
        Self {
            validator: Arc::clone(&self.validator),
        }
    }
}

impl<V> FlightSearchService<V>
where
    V: BookingValidation,
{
    /// Creates a service backed by `validator`.
    #[must_use]
    pub const fn new(validator: Arc<V>) -> Self {
        Self { validator }
    }

    /// Returns the backing validator.
    #[must_use]
    pub const fn validator(&self) -> &Arc<V> {
        &self.validator
    }

    /// Validates a search and records it when accepted.
    ///
    /// Returns `true` if every rule passed; a rejected search leaves the
    /// previously accepted values in place.
    #[must_use]
    #[expect(
        clippy::too_many_arguments,
        reason = "mirrors the flat nine-field search form"
    )]
    pub fn search(
        &self,
        departure_date: &str,
        departure_airport_code: &str,
        emergency_row_seating: bool,
        return_date: &str,
        destination_airport_code: &str,
        seating_class: &str,
        adult_passenger_count: u32,
        child_passenger_count: u32,
        infant_passenger_count: u32,
    ) -> bool {
        let seating = SeatingPreference {
            class: seating_class.to_owned(),
            emergency_row: emergency_row_seating,
        };
        let request = BookingRequest::new(
            Itinerary::new(
                departure_airport_code,
                departure_date,
                destination_airport_code,
                return_date,
            ),
            seating,
            PassengerCounts::new(
                adult_passenger_count,
                child_passenger_count,
                infant_passenger_count,
            ),
        );
        self.validator.check(&request)
    }

    fn with_committed<T>(&self, read: impl FnOnce(&ValidatedBooking) -> T) -> Option<T> {
        self.validator.committed().as_ref().map(read)
    }

    /// Returns the accepted departure date.
    #[must_use]
    pub fn departure_date(&self) -> Option<String> {
        self.with_committed(|booking| booking.request().departure_date().to_owned())
    }

    /// Returns the accepted departure airport code.
    #[must_use]
    pub fn departure_airport_code(&self) -> Option<String> {
        self.with_committed(|booking| booking.request().departure_airport().to_owned())
    }

    /// Returns whether the accepted search requested emergency-row seating.
    #[must_use]
    pub fn emergency_row_seating(&self) -> Option<bool> {
        self.with_committed(|booking| booking.request().emergency_row())
    }

    /// Returns the accepted return date.
    #[must_use]
    pub fn return_date(&self) -> Option<String> {
        self.with_committed(|booking| booking.request().return_date().to_owned())
    }

    /// Returns the accepted destination airport code.
    #[must_use]
    pub fn destination_airport_code(&self) -> Option<String> {
        self.with_committed(|booking| booking.request().destination_airport().to_owned())
    }

    /// Returns the accepted seating class.
    #[must_use]
    pub fn seating_class(&self) -> Option<String> {
        self.with_committed(|booking| booking.request().seating_class().to_owned())
    }

    /// Returns the accepted number of adults.
    #[must_use]
    pub fn adult_passenger_count(&self) -> Option<u32> {
        self.with_committed(|booking| booking.passengers().adults)
    }

    /// Returns the accepted number of children.
    #[must_use]
    pub fn child_passenger_count(&self) -> Option<u32> {
        self.with_committed(|booking| booking.passengers().children)
    }

    /// Returns the accepted number of infants.
    #[must_use]
    pub fn infant_passenger_count(&self) -> Option<u32> {
        self.with_committed(|booking| booking.passengers().infants)
    }
}

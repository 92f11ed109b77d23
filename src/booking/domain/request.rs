//! Raw booking requests as submitted by callers.

use super::PassengerCounts;
use serde::{Deserialize, Serialize};

/// Route and travel dates of a request, exactly as submitted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Itinerary {
    /// Departure date in `dd/mm/yyyy` form.
    pub departure_date: String,
    /// Code of the departure airport.
    pub departure_airport: String,
    /// Return date in `dd/mm/yyyy` form.
    pub return_date: String,
    /// Code of the destination airport.
    pub destination_airport: String,
}

impl Itinerary {
    /// Creates an itinerary from outbound and return legs.
    #[must_use]
    pub fn new(
        departure_airport: impl Into<String>,
        departure_date: impl Into<String>,
        destination_airport: impl Into<String>,
        return_date: impl Into<String>,
    ) -> Self {
        Self {
            departure_date: departure_date.into(),
            departure_airport: departure_airport.into(),
            return_date: return_date.into(),
            destination_airport: destination_airport.into(),
        }
    }
}

/// Requested cabin and seat position.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeatingPreference {
    /// Seating class name, e.g. `"premium economy"`.
    pub class: String,
    /// Whether seats in an emergency-exit row are requested.
    pub emergency_row: bool,
}

impl SeatingPreference {
    /// Creates a seating preference away from the emergency exits.
    #[must_use]
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            emergency_row: false,
        }
    }

    /// Requests emergency-row seating.
    #[must_use]
    pub const fn in_emergency_row(mut self) -> Self {
        self.emergency_row = true;
        self
    }
}

/// Candidate booking submitted for validation.
///
/// The request is transient and unchecked: any strings and counts are
/// accepted here, and eligibility is decided by the validator.
///
/// # Examples
///
/// ```
/// use concourse::booking::domain::{
///     BookingRequest, Itinerary, PassengerCounts, SeatingPreference,
/// };
///
/// let request = BookingRequest::new(
///     Itinerary::new("syd", "10/12/2025", "cdg", "25/12/2025"),
///     SeatingPreference::new("economy"),
///     PassengerCounts::new(3, 2, 1),
/// );
/// assert_eq!(request.passengers().total(), 6);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BookingRequest {
    itinerary: Itinerary,
    seating: SeatingPreference,
    passengers: PassengerCounts,
}

impl BookingRequest {
    /// Creates a request from its parts.
    #[must_use]
    pub const fn new(
        itinerary: Itinerary,
        seating: SeatingPreference,
        passengers: PassengerCounts,
    ) -> Self {
        Self {
            itinerary,
            seating,
            passengers,
        }
    }

    /// Returns the route and dates.
    #[must_use]
    pub const fn itinerary(&self) -> &Itinerary {
        &self.itinerary
    }

    /// Returns the seating preference.
    #[must_use]
    pub const fn seating(&self) -> &SeatingPreference {
        &self.seating
    }

    /// Returns the passenger composition.
    #[must_use]
    pub const fn passengers(&self) -> PassengerCounts {
        self.passengers
    }

    /// Returns the departure date as submitted.
    #[must_use]
    pub fn departure_date(&self) -> &str {
        &self.itinerary.departure_date
    }

    /// Returns the departure airport code as submitted.
    #[must_use]
    pub fn departure_airport(&self) -> &str {
        &self.itinerary.departure_airport
    }

    /// Returns the return date as submitted.
    #[must_use]
    pub fn return_date(&self) -> &str {
        &self.itinerary.return_date
    }

    /// Returns the destination airport code as submitted.
    #[must_use]
    pub fn destination_airport(&self) -> &str {
        &self.itinerary.destination_airport
    }

    /// Returns the seating class name as submitted.
    #[must_use]
    pub fn seating_class(&self) -> &str {
        &self.seating.class
    }

    /// Returns whether emergency-row seating was requested.
    #[must_use]
    pub const fn emergency_row(&self) -> bool {
        self.seating.emergency_row
    }
}

//! Committed bookings and the validator's two-state lifecycle.

use super::{BookingRequest, PassengerCounts, SeatingClass, TravelDate};
use serde::{Deserialize, Serialize};

/// Booking accepted by the validator.
///
/// Holds a verbatim copy of the accepted request together with the typed
/// values the rule chain established for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatedBooking {
    request: BookingRequest,
    departure: TravelDate,
    return_date: TravelDate,
    seating_class: SeatingClass,
}

impl ValidatedBooking {
    /// Creates a booking from an accepted request and its parsed values.
    ///
    /// Only the rule chain should call this; it does not re-check the
    /// request.
    #[must_use]
    pub(crate) const fn new(
        request: BookingRequest,
        departure: TravelDate,
        return_date: TravelDate,
        seating_class: SeatingClass,
    ) -> Self {
        Self {
            request,
            departure,
            return_date,
            seating_class,
        }
    }

    /// Returns the accepted request exactly as submitted.
    #[must_use]
    pub const fn request(&self) -> &BookingRequest {
        &self.request
    }

    /// Returns the parsed departure date.
    #[must_use]
    pub const fn departure(&self) -> TravelDate {
        self.departure
    }

    /// Returns the parsed return date.
    #[must_use]
    pub const fn return_date(&self) -> TravelDate {
        self.return_date
    }

    /// Returns the parsed seating class.
    #[must_use]
    pub const fn seating_class(&self) -> SeatingClass {
        self.seating_class
    }

    /// Returns the passenger composition.
    #[must_use]
    pub const fn passengers(&self) -> PassengerCounts {
        self.request.passengers()
    }

    /// Consumes the booking and returns the accepted request.
    #[must_use]
    pub fn into_request(self) -> BookingRequest {
        self.request
    }
}

/// Lifecycle of the validator's committed booking.
///
/// Starts `Empty`; every accepted request moves it to (or keeps it in)
/// `Committed`. Rejections never change it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum BookingState {
    /// No request has been accepted yet.
    #[default]
    Empty,
    /// Holds the most recently accepted booking.
    Committed(ValidatedBooking),
}

impl BookingState {
    /// Returns the committed booking, if any.
    #[must_use]
    pub const fn committed(&self) -> Option<&ValidatedBooking> {
        match self {
            Self::Empty => None,
            Self::Committed(booking) => Some(booking),
        }
    }

    /// Returns `true` when no booking has been committed.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Replaces the state with `booking`.
    pub(crate) fn commit(&mut self, booking: ValidatedBooking) {
        *self = Self::Committed(booking);
    }
}

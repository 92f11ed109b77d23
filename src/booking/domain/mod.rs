//! Domain model for flight booking requests.
//!
//! The booking domain models the raw request a caller submits, the typed
//! values parsed from it, and the committed booking the validator retains
//! after a successful check. No clock or locking concerns live here.

mod airport;
mod booking;
mod date;
mod error;
mod passengers;
mod request;
mod seating;

pub use airport::AirportCode;
pub use booking::{BookingState, ValidatedBooking};
pub use date::TravelDate;
pub use error::BookingDomainError;
pub use passengers::PassengerCounts;
pub use request::{BookingRequest, Itinerary, SeatingPreference};
pub use seating::SeatingClass;

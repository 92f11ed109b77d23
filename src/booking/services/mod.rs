//! Application services for flight search requests.

mod search;

pub use search::FlightSearchService;

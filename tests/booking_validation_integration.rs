//! Behavioural integration tests for flight search validation.
//!
//! These tests drive the public search surface end to end: every search is
//! made against a validator pinned to 1 December 2025, starting from an
//! accepted Melbourne to Shanghai baseline.

use chrono::NaiveDate;
use concourse::booking::{
    adapters::FixedClock,
    domain::{BookingRequest, Itinerary, PassengerCounts, SeatingPreference},
    error::RejectionKind,
    ports::{BookingValidation, ValidationConfig},
    services::FlightSearchService,
    validation::{BookingValidator, RuleId},
};
use std::sync::Arc;

const D_OK: &str = "10/12/2025";
const R_OK: &str = "25/12/2025";
const D_LEAP: &str = "29/02/2028";
const R_LEAP: &str = "10/03/2028";

type Search = FlightSearchService<BookingValidator<FixedClock>>;

fn search_on(config: ValidationConfig) -> Search {
    let today = NaiveDate::from_ymd_opt(2025, 12, 1).expect("valid date");
    let validator = BookingValidator::with_clock(config, Arc::new(FixedClock::new(today)));
    FlightSearchService::new(Arc::new(validator))
}

fn primed_search() -> Search {
    let search = search_on(ValidationConfig::default());
    assert!(
        search.search("05/12/2025", "mel", false, "20/12/2025", "pvg", "economy", 1, 0, 0),
        "baseline search should be accepted"
    );
    search
}

fn assert_state_unchanged(search: &Search) {
    assert_eq!(search.departure_date().as_deref(), Some("05/12/2025"));
    assert_eq!(search.departure_airport_code().as_deref(), Some("mel"));
    assert_eq!(search.emergency_row_seating(), Some(false));
    assert_eq!(search.return_date().as_deref(), Some("20/12/2025"));
    assert_eq!(search.destination_airport_code().as_deref(), Some("pvg"));
    assert_eq!(search.seating_class().as_deref(), Some("economy"));
    assert_eq!(search.adult_passenger_count(), Some(1));
    assert_eq!(search.child_passenger_count(), Some(0));
    assert_eq!(search.infant_passenger_count(), Some(0));
}

// ============================================================================
// Scenario: Party size
// ============================================================================

/// Parties must hold between one and nine passengers.
#[test]
fn total_passengers_must_be_between_one_and_nine() {
    let search = primed_search();

    assert!(!search.search(D_OK, "mel", false, R_OK, "pvg", "economy", 0, 0, 0));
    assert_state_unchanged(&search);

    assert!(!search.search(D_OK, "mel", false, R_OK, "pvg", "economy", 9, 1, 0));
    assert_state_unchanged(&search);
}

// ============================================================================
// Scenario: Seating restrictions for children and infants
// ============================================================================

/// Children may not sit in an emergency row or in first class.
#[test]
fn children_cannot_sit_in_emergency_row_or_first_class() {
    let search = primed_search();

    assert!(!search.search(D_OK, "mel", true, R_OK, "pvg", "economy", 1, 1, 0));
    assert_state_unchanged(&search);

    assert!(!search.search(D_OK, "mel", false, R_OK, "pvg", "first", 1, 1, 0));
    assert_state_unchanged(&search);
}

/// Infants may not sit in an emergency row or in business class.
#[test]
fn infants_cannot_sit_in_emergency_row_or_business_class() {
    let search = primed_search();

    assert!(!search.search(D_OK, "mel", true, R_OK, "pvg", "economy", 1, 0, 1));
    assert_state_unchanged(&search);

    assert!(!search.search(D_OK, "mel", false, R_OK, "pvg", "business", 1, 0, 1));
    assert_state_unchanged(&search);
}

// ============================================================================
// Scenario: Adult supervision ratios
// ============================================================================

/// Each adult may accompany at most two children.
#[test]
fn at_most_two_children_per_adult() {
    let search = primed_search();

    assert!(search.search(D_OK, "mel", false, R_OK, "pvg", "economy", 2, 4, 0));
    assert!(!search.search(D_OK, "mel", false, R_OK, "pvg", "economy", 2, 5, 0));
    assert_eq!(search.child_passenger_count(), Some(4));
}

/// Each adult may hold at most one infant.
#[test]
fn at_most_one_infant_per_adult() {
    let search = primed_search();

    assert!(search.search(D_OK, "mel", false, R_OK, "pvg", "economy", 2, 0, 2));
    assert!(!search.search(D_OK, "mel", false, R_OK, "pvg", "economy", 2, 0, 3));
    assert_eq!(search.infant_passenger_count(), Some(2));
}

// ============================================================================
// Scenario: Travel dates
// ============================================================================

/// Departures before today are rejected; later departures are accepted.
#[test]
fn departure_date_cannot_be_in_the_past() {
    let search = primed_search();

    assert!(!search.search("01/01/2020", "mel", false, R_OK, "pvg", "economy", 1, 0, 0));
    assert_state_unchanged(&search);

    assert!(search.search(D_OK, "mel", false, R_OK, "pvg", "economy", 1, 0, 0));
}

/// Dates must be real calendar days in strict `dd/mm/yyyy` form.
#[test]
fn dates_are_parsed_strictly() {
    let search = primed_search();

    assert!(!search.search("31/04/2026", "mel", false, R_OK, "pvg", "economy", 1, 0, 0));
    assert_state_unchanged(&search);

    assert!(!search.search("29/02/2026", "mel", false, "05/03/2026", "pvg", "economy", 1, 0, 0));
    assert_state_unchanged(&search);

    assert!(!search.search("5/12/2025", "mel", false, R_OK, "pvg", "economy", 1, 0, 0));
    assert_state_unchanged(&search);
}

/// Return dates may not precede the departure but may equal it.
#[test]
fn return_date_cannot_be_before_departure() {
    let search = primed_search();

    assert!(!search.search(D_OK, "mel", false, "01/12/2025", "pvg", "economy", 1, 0, 0));
    assert_state_unchanged(&search);

    assert!(search.search(D_OK, "mel", false, D_OK, "pvg", "economy", 1, 0, 0));
}

// ============================================================================
// Scenario: Seating class
// ============================================================================

/// Only the four fare tiers are offered.
#[test]
fn seating_class_must_be_offered() {
    let search = primed_search();

    assert!(!search.search(D_OK, "mel", false, R_OK, "pvg", "ultra", 1, 0, 0));
    assert_state_unchanged(&search);

    assert!(search.search(D_OK, "mel", false, R_OK, "pvg", "premium economy", 1, 0, 0));
}

/// Emergency-row seats are only sold in economy.
#[test]
fn emergency_row_only_in_economy() {
    let search = primed_search();

    assert!(!search.search(D_OK, "mel", true, R_OK, "pvg", "business", 1, 0, 0));
    assert_state_unchanged(&search);

    assert!(search.search(D_OK, "mel", true, R_OK, "pvg", "economy", 1, 0, 0));
    assert_eq!(search.emergency_row_seating(), Some(true));
}

// ============================================================================
// Scenario: Airports
// ============================================================================

/// Airports must be served and must differ.
#[test]
fn airports_must_be_served_and_distinct() {
    let search = primed_search();

    assert!(!search.search(D_OK, "mel", false, R_OK, "mel", "economy", 1, 0, 0));
    assert_state_unchanged(&search);

    assert!(!search.search(D_OK, "xxx", false, R_OK, "pvg", "economy", 1, 0, 0));
    assert_state_unchanged(&search);

    assert!(search.search(D_OK, "syd", false, R_OK, "cdg", "economy", 2, 0, 0));
}

// ============================================================================
// Scenario: Fully valid searches
// ============================================================================

/// Searches meeting every rule are accepted and become the committed values.
#[test]
fn valid_searches_are_accepted() {
    let search = primed_search();

    assert!(search.search("10/12/2025", "syd", false, "25/12/2025", "cdg", "economy", 3, 2, 1));
    assert!(search.search("05/12/2025", "mel", false, "20/12/2025", "doh", "premium economy", 2, 0, 0));
    assert!(search.search("05/12/2025", "del", false, "20/12/2025", "lax", "business", 2, 2, 0));
    assert!(search.search(D_LEAP, "pvg", true, R_LEAP, "syd", "economy", 2, 0, 0));

    assert_eq!(search.departure_date().as_deref(), Some(D_LEAP));
    assert_eq!(search.departure_airport_code().as_deref(), Some("pvg"));
    assert_eq!(search.emergency_row_seating(), Some(true));
    assert_eq!(search.return_date().as_deref(), Some(R_LEAP));
    assert_eq!(search.destination_airport_code().as_deref(), Some("syd"));
    assert_eq!(search.seating_class().as_deref(), Some("economy"));
    assert_eq!(search.adult_passenger_count(), Some(2));
    assert_eq!(search.child_passenger_count(), Some(0));
    assert_eq!(search.infant_passenger_count(), Some(0));
}

// ============================================================================
// Scenario: Tagged results through the validator port
// ============================================================================

/// Rejections report which rule failed and what kind of failure it was.
#[test]
fn rejections_identify_rule_and_kind() {
    let search = search_on(ValidationConfig::default());
    let validator = search.validator();

    let malformed = BookingRequest::new(
        Itinerary::new("syd", "31/04/2026", "cdg", "05/05/2026"),
        SeatingPreference::new("economy"),
        PassengerCounts::new(1, 0, 0),
    );
    let date_rejection = validator
        .validate(&malformed)
        .expect_err("April has thirty days");
    assert_eq!(date_rejection.rule(), RuleId::DateFormat);
    assert_eq!(date_rejection.kind(), RejectionKind::MalformedDate);

    let same_airport = BookingRequest::new(
        Itinerary::new("syd", D_OK, "syd", R_OK),
        SeatingPreference::new("economy"),
        PassengerCounts::new(1, 0, 0),
    );
    let airport_rejection = validator
        .validate(&same_airport)
        .expect_err("same airport");
    assert_eq!(airport_rejection.rule(), RuleId::Airports);
    assert_eq!(airport_rejection.kind(), RejectionKind::RuleViolation);
    assert_eq!(
        airport_rejection.to_string(),
        "departure and destination are both 'syd'"
    );

    assert!(search.departure_date().is_none());
}

/// A configuration loaded from JSON changes which rules apply.
#[test]
fn configuration_from_json_disables_airport_rules() {
    let config = ValidationConfig::from_json(r#"{"enforce_airport_rules": false}"#)
        .expect("config should parse");
    let search = search_on(config);

    assert!(search.search(D_OK, "jfk", false, R_OK, "jfk", "economy", 1, 0, 0));
    assert_eq!(search.departure_airport_code().as_deref(), Some("jfk"));
    assert_eq!(search.validator().rules().len(), 10);
}

//! Individual eligibility rules and the ordered chain that evaluates them.
//!
//! Each rule is a pure predicate over a [`RuleContext`]. Rules return
//! `Ok(())` on success or the [`BookingRejection`] describing the failure,
//! and never depend on another rule having run first.

use crate::booking::{
    domain::{AirportCode, BookingRequest, SeatingClass, TravelDate, ValidatedBooking},
    error::{AirportField, BookingRejection, DateField, RestrictedSeating},
    ports::{ValidationConfig, ValidationResult},
};
use chrono::NaiveDate;
use std::fmt;

/// Smallest party a booking may carry.
pub const MIN_PASSENGERS: u64 = 1;

/// Largest party a booking may carry.
pub const MAX_PASSENGERS: u64 = 9;

/// Children permitted per adult.
pub const CHILDREN_PER_ADULT: u64 = 2;

/// Infants permitted per adult.
pub const INFANTS_PER_ADULT: u64 = 1;

/// Identifier of an eligibility rule, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RuleId {
    /// Party size between one and nine.
    PassengerTotal,
    /// No children in emergency rows or first class.
    ChildSeating,
    /// No infants in emergency rows or business class.
    InfantSeating,
    /// At most two children per adult.
    ChildRatio,
    /// At most one infant per adult.
    InfantRatio,
    /// Both dates are real `dd/mm/yyyy` dates.
    DateFormat,
    /// Departure is today or later.
    DepartureNotPast,
    /// Return is on or after departure.
    ReturnAfterDeparture,
    /// Seating class is offered.
    SeatingClass,
    /// Emergency rows only in economy.
    EmergencyRowClass,
    /// Both airports served and distinct.
    Airports,
}

impl RuleId {
    /// Returns the stable snake-case identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PassengerTotal => "passenger_total",
            Self::ChildSeating => "child_seating",
            Self::InfantSeating => "infant_seating",
            Self::ChildRatio => "child_ratio",
            Self::InfantRatio => "infant_ratio",
            Self::DateFormat => "date_format",
            Self::DepartureNotPast => "departure_not_past",
            Self::ReturnAfterDeparture => "return_after_departure",
            Self::SeatingClass => "seating_class",
            Self::EmergencyRowClass => "emergency_row_class",
            Self::Airports => "airports",
        }
    }

    /// Returns the one-based position of the rule in the full chain.
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        match self {
            Self::PassengerTotal => 1,
            Self::ChildSeating => 2,
            Self::InfantSeating => 3,
            Self::ChildRatio => 4,
            Self::InfantRatio => 5,
            Self::DateFormat => 6,
            Self::DepartureNotPast => 7,
            Self::ReturnAfterDeparture => 8,
            Self::SeatingClass => 9,
            Self::EmergencyRowClass => 10,
            Self::Airports => 11,
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inputs every rule is evaluated against.
///
/// `today` is captured once by the caller so that all rules in one
/// evaluation agree on the current date.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    request: &'a BookingRequest,
    config: ValidationConfig,
    today: NaiveDate,
}

impl<'a> RuleContext<'a> {
    /// Creates a context for one evaluation.
    #[must_use]
    pub const fn new(request: &'a BookingRequest, config: ValidationConfig, today: NaiveDate) -> Self {
        Self {
            request,
            config,
            today,
        }
    }

    /// Returns the request under evaluation.
    #[must_use]
    pub const fn request(&self) -> &'a BookingRequest {
        self.request
    }

    /// Returns the evaluation date.
    #[must_use]
    pub const fn today(&self) -> NaiveDate {
        self.today
    }

    /// Parses the departure date.
    ///
    /// # Errors
    ///
    /// Returns [`BookingRejection::MalformedDate`] if the date is invalid.
    pub fn departure_date(&self) -> ValidationResult<TravelDate> {
        parse_date(self.request.departure_date(), DateField::Departure)
    }

    /// Parses the return date.
    ///
    /// # Errors
    ///
    /// Returns [`BookingRejection::MalformedDate`] if the date is invalid.
    pub fn return_date(&self) -> ValidationResult<TravelDate> {
        parse_date(self.request.return_date(), DateField::Return)
    }
}

fn parse_date(input: &str, field: DateField) -> ValidationResult<TravelDate> {
    TravelDate::parse(input).map_err(|source| BookingRejection::MalformedDate { field, source })
}

/// Predicate implementing a single rule.
pub type RuleCheck = fn(&RuleContext<'_>) -> ValidationResult<()>;

/// An eligibility rule: identifier, human-readable description and
/// predicate.
#[derive(Clone, Copy)]
pub struct Rule {
    id: RuleId,
    description: &'static str,
    check: RuleCheck,
}

impl Rule {
    /// Creates a rule.
    #[must_use]
    pub const fn new(id: RuleId, description: &'static str, check: RuleCheck) -> Self {
        Self {
            id,
            description,
            check,
        }
    }

    /// Returns the rule identifier.
    #[must_use]
    pub const fn id(&self) -> RuleId {
        self.id
    }

    /// Returns the rule description.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        self.description
    }

    /// Evaluates the rule.
    ///
    /// # Errors
    ///
    /// Returns the rejection describing how `context` breaks the rule.
    pub fn check(&self, context: &RuleContext<'_>) -> ValidationResult<()> {
        (self.check)(context)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("id", &self.id)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// The full rule set, in evaluation order.
pub const STANDARD_RULES: [Rule; 11] = [
    Rule::new(
        RuleId::PassengerTotal,
        "a booking carries between 1 and 9 passengers",
        validate_passenger_total,
    ),
    Rule::new(
        RuleId::ChildSeating,
        "children cannot sit in an emergency row or in first class",
        validate_child_seating,
    ),
    Rule::new(
        RuleId::InfantSeating,
        "infants cannot sit in an emergency row or in business class",
        validate_infant_seating,
    ),
    Rule::new(
        RuleId::ChildRatio,
        "each adult may accompany at most two children",
        validate_child_ratio,
    ),
    Rule::new(
        RuleId::InfantRatio,
        "each adult may hold at most one infant",
        validate_infant_ratio,
    ),
    Rule::new(
        RuleId::DateFormat,
        "both dates are real calendar dates in dd/mm/yyyy form",
        validate_date_format,
    ),
    Rule::new(
        RuleId::DepartureNotPast,
        "the departure date is today or later",
        validate_departure_not_past,
    ),
    Rule::new(
        RuleId::ReturnAfterDeparture,
        "the return date is on or after the departure date",
        validate_return_after_departure,
    ),
    Rule::new(
        RuleId::SeatingClass,
        "the seating class is economy, premium economy, business or first",
        validate_seating_class,
    ),
    Rule::new(
        RuleId::EmergencyRowClass,
        "emergency-row seating is only offered in economy",
        validate_emergency_row_class,
    ),
    Rule::new(
        RuleId::Airports,
        "both airports are served and differ from each other",
        validate_airports,
    ),
];

/// Ordered, short-circuiting chain of rules.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use concourse::booking::{
///     domain::{BookingRequest, Itinerary, PassengerCounts, SeatingPreference},
///     ports::ValidationConfig,
///     validation::{RuleChain, RuleContext, RuleId},
/// };
///
/// let chain = RuleChain::from_config(ValidationConfig::default());
/// let request = BookingRequest::new(
///     Itinerary::new("syd", "10/12/2025", "cdg", "25/12/2025"),
///     SeatingPreference::new("economy"),
///     PassengerCounts::new(0, 0, 0),
/// );
/// let today = NaiveDate::from_ymd_opt(2025, 12, 1).expect("valid date");
/// let context = RuleContext::new(&request, ValidationConfig::default(), today);
///
/// let rejection = chain.evaluate(&context).expect_err("empty party");
/// assert_eq!(rejection.rule(), RuleId::PassengerTotal);
/// ```
#[derive(Debug, Clone)]
pub struct RuleChain {
    rules: Vec<Rule>,
}

impl RuleChain {
    /// Creates a chain from explicit rules, evaluated in the given order.
    #[must_use]
    pub const fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Creates the chain selected by `config`.
    ///
    /// The airport rule is dropped when airport enforcement is disabled.
    #[must_use]
    pub fn from_config(config: ValidationConfig) -> Self {
        let rules = STANDARD_RULES
            .into_iter()
            .filter(|rule| config.enforce_airport_rules || rule.id() != RuleId::Airports)
            .collect();
        Self { rules }
    }

    /// Returns the rules in evaluation order.
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Evaluates every rule in order, stopping at the first failure.
    ///
    /// # Errors
    ///
    /// Returns the rejection of the first failing rule; later rules are not
    /// evaluated.
    pub fn evaluate(&self, context: &RuleContext<'_>) -> ValidationResult<()> {
        self.rules.iter().try_for_each(|rule| rule.check(context))
    }

    /// Evaluates the chain and, on success, builds the accepted booking.
    ///
    /// # Errors
    ///
    /// Returns the rejection of the first failing rule, or the parse
    /// failure of a value no rule in this chain checked.
    pub fn accept(&self, context: &RuleContext<'_>) -> ValidationResult<ValidatedBooking> {
        self.evaluate(context)?;
        let request = context.request();
        let seating_class = parse_seating_class(request.seating_class())?;
        Ok(ValidatedBooking::new(
            request.clone(),
            context.departure_date()?,
            context.return_date()?,
            seating_class,
        ))
    }
}

impl Default for RuleChain {
    fn default() -> Self {
        Self::from_config(ValidationConfig::default())
    }
}

/// Validates that the party holds between one and nine passengers.
///
/// # Errors
///
/// Returns [`BookingRejection::PassengerTotalOutOfRange`] otherwise.
pub fn validate_passenger_total(context: &RuleContext<'_>) -> ValidationResult<()> {
    let total = context.request().passengers().total();
    if !(MIN_PASSENGERS..=MAX_PASSENGERS).contains(&total) {
        return Err(BookingRejection::PassengerTotalOutOfRange {
            total,
            min: MIN_PASSENGERS,
            max: MAX_PASSENGERS,
        });
    }
    Ok(())
}

/// Validates that children are not seated in an emergency row or first
/// class.
///
/// # Errors
///
/// Returns [`BookingRejection::ChildSeatingRestricted`] if they are.
pub fn validate_child_seating(context: &RuleContext<'_>) -> ValidationResult<()> {
    let request = context.request();
    if !request.passengers().has_children() {
        return Ok(());
    }
    restricted_seating(context, SeatingClass::First)
        .map_or(Ok(()), |seat| Err(BookingRejection::ChildSeatingRestricted(seat)))
}

/// Validates that infants are not seated in an emergency row or business
/// class.
///
/// # Errors
///
/// Returns [`BookingRejection::InfantSeatingRestricted`] if they are.
pub fn validate_infant_seating(context: &RuleContext<'_>) -> ValidationResult<()> {
    let request = context.request();
    if !request.passengers().has_infants() {
        return Ok(());
    }
    restricted_seating(context, SeatingClass::Business)
        .map_or(Ok(()), |seat| Err(BookingRejection::InfantSeatingRestricted(seat)))
}

/// Returns the restricted placement the request asks for, if any.
fn restricted_seating(
    context: &RuleContext<'_>,
    forbidden: SeatingClass,
) -> Option<RestrictedSeating> {
    let request = context.request();
    if request.emergency_row() {
        return Some(RestrictedSeating::EmergencyRow);
    }
    forbidden
        .matches(request.seating_class(), context.config.strict_case_matching)
        .then(|| RestrictedSeating::Class(request.seating_class().to_owned()))
}

/// Validates that there are at most two children per adult.
///
/// # Errors
///
/// Returns [`BookingRejection::TooManyChildrenPerAdult`] otherwise.
pub fn validate_child_ratio(context: &RuleContext<'_>) -> ValidationResult<()> {
    let passengers = context.request().passengers();
    if u64::from(passengers.children) > CHILDREN_PER_ADULT * u64::from(passengers.adults) {
        return Err(BookingRejection::TooManyChildrenPerAdult {
            children: passengers.children,
            adults: passengers.adults,
        });
    }
    Ok(())
}

/// Validates that there is at most one infant per adult.
///
/// # Errors
///
/// Returns [`BookingRejection::TooManyInfantsPerAdult`] otherwise.
pub fn validate_infant_ratio(context: &RuleContext<'_>) -> ValidationResult<()> {
    let passengers = context.request().passengers();
    if u64::from(passengers.infants) > INFANTS_PER_ADULT * u64::from(passengers.adults) {
        return Err(BookingRejection::TooManyInfantsPerAdult {
            infants: passengers.infants,
            adults: passengers.adults,
        });
    }
    Ok(())
}

/// Validates that both dates are real calendar dates.
///
/// # Errors
///
/// Returns [`BookingRejection::MalformedDate`] for the first bad date,
/// departure before return.
pub fn validate_date_format(context: &RuleContext<'_>) -> ValidationResult<()> {
    context.departure_date()?;
    context.return_date()?;
    Ok(())
}

/// Validates that the departure date is not before today.
///
/// # Errors
///
/// Returns [`BookingRejection::DepartureInPast`] if it is, or
/// [`BookingRejection::MalformedDate`] if the date cannot be read.
pub fn validate_departure_not_past(context: &RuleContext<'_>) -> ValidationResult<()> {
    let departure = context.departure_date()?.into_inner();
    if departure < context.today() {
        return Err(BookingRejection::DepartureInPast {
            departure,
            today: context.today(),
        });
    }
    Ok(())
}

/// Validates that the return date is not before the departure date.
///
/// # Errors
///
/// Returns [`BookingRejection::ReturnBeforeDeparture`] if it is, or
/// [`BookingRejection::MalformedDate`] if either date cannot be read.
pub fn validate_return_after_departure(context: &RuleContext<'_>) -> ValidationResult<()> {
    let departure = context.departure_date()?.into_inner();
    let return_date = context.return_date()?.into_inner();
    if return_date < departure {
        return Err(BookingRejection::ReturnBeforeDeparture {
            departure,
            return_date,
        });
    }
    Ok(())
}

/// Validates that the seating class is offered, matching names exactly.
///
/// # Errors
///
/// Returns [`BookingRejection::UnknownSeatingClass`] otherwise.
pub fn validate_seating_class(context: &RuleContext<'_>) -> ValidationResult<()> {
    parse_seating_class(context.request().seating_class()).map(|_| ())
}

fn parse_seating_class(name: &str) -> ValidationResult<SeatingClass> {
    SeatingClass::try_from(name).map_err(|_| BookingRejection::UnknownSeatingClass(name.to_owned()))
}

/// Validates that emergency-row seating is only requested in economy.
///
/// # Errors
///
/// Returns [`BookingRejection::EmergencyRowOutsideEconomy`] otherwise.
pub fn validate_emergency_row_class(context: &RuleContext<'_>) -> ValidationResult<()> {
    let request = context.request();
    if request.emergency_row() && !SeatingClass::Economy.matches(request.seating_class(), true) {
        return Err(BookingRejection::EmergencyRowOutsideEconomy(
            request.seating_class().to_owned(),
        ));
    }
    Ok(())
}

/// Validates that both airports are served and are not the same airport.
///
/// # Errors
///
/// Returns [`BookingRejection::UnknownAirport`] for the first unserved code,
/// or [`BookingRejection::SameAirport`] when both codes match.
pub fn validate_airports(context: &RuleContext<'_>) -> ValidationResult<()> {
    let request = context.request();
    let departure = parse_airport(request.departure_airport(), AirportField::Departure)?;
    let destination = parse_airport(request.destination_airport(), AirportField::Destination)?;
    if departure == destination {
        return Err(BookingRejection::SameAirport(departure.as_str().to_owned()));
    }
    Ok(())
}

fn parse_airport(code: &str, field: AirportField) -> ValidationResult<AirportCode> {
    AirportCode::try_from(code).map_err(|_| BookingRejection::UnknownAirport {
        field,
        code: code.to_owned(),
    })
}

//! Given steps for booking validation BDD scenarios.

use super::world::BookingWorld;
use concourse::booking::{
    domain::{Itinerary, PassengerCounts, SeatingPreference, TravelDate},
    ports::{BookingValidation, ValidationConfig},
};
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given(r#"today is "{date}""#)]
fn today_is(world: &mut BookingWorld, date: String) -> Result<(), eyre::Report> {
    let today = TravelDate::parse(&date).wrap_err("parse scenario date")?;
    world.today = today.into_inner();
    world.rebuild_validator();
    Ok(())
}

#[given("case-insensitive seating restrictions without airport checks")]
fn lenient_configuration(world: &mut BookingWorld) {
    world.config = ValidationConfig::lenient();
    world.rebuild_validator();
}

#[given(
    r#"a trip from "{departure}" to "{destination}" departing "{departure_date}" and returning "{return_date}""#
)]
fn a_trip(
    world: &mut BookingWorld,
    departure: String,
    destination: String,
    departure_date: String,
    return_date: String,
) {
    world.itinerary = Some(Itinerary::new(
        departure,
        departure_date,
        destination,
        return_date,
    ));
}

#[given(r#"seating in "{class}" class"#)]
fn seating_in(world: &mut BookingWorld, class: String) {
    world.seating = Some(SeatingPreference::new(class));
}

#[given("emergency-row seating is requested")]
fn emergency_row_requested(world: &mut BookingWorld) -> Result<(), eyre::Report> {
    let seating = world
        .seating
        .take()
        .ok_or_else(|| eyre::eyre!("missing seating preference in scenario world"))?;
    world.seating = Some(seating.in_emergency_row());
    Ok(())
}

#[given("a party of {adults:u32} adults, {children:u32} children and {infants:u32} infants")]
fn a_party_of(world: &mut BookingWorld, adults: u32, children: u32, infants: u32) {
    world.passengers = Some(PassengerCounts::new(adults, children, infants));
}

#[given("the booking has been accepted")]
fn booking_has_been_accepted(world: &mut BookingWorld) -> Result<(), eyre::Report> {
    let request = world.request()?;
    world
        .validator
        .validate(&request)
        .wrap_err("accept booking in scenario setup")?;
    Ok(())
}

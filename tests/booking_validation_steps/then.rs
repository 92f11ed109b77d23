//! Then steps for booking validation BDD scenarios.

use super::world::BookingWorld;
use concourse::booking::{domain::ValidatedBooking, ports::BookingValidation};
use rstest_bdd_macros::then;

fn committed(world: &BookingWorld) -> Result<ValidatedBooking, eyre::Report> {
    world
        .validator
        .committed()
        .ok_or_else(|| eyre::eyre!("expected a committed booking, found none"))
}

#[then("the booking is accepted")]
fn booking_is_accepted(world: &BookingWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing validation result"))?;
    if let Err(rejection) = result {
        return Err(eyre::eyre!("expected acceptance, got rejection: {rejection}"));
    }
    Ok(())
}

#[then(r#"the booking is rejected by the "{rule}" rule"#)]
fn booking_is_rejected_by(world: &BookingWorld, rule: String) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing validation result"))?;
    match result {
        Ok(booking) => Err(eyre::eyre!("expected rejection, got acceptance: {booking:?}")),
        Err(rejection) if rejection.rule().as_str() == rule => Ok(()),
        Err(rejection) => Err(eyre::eyre!(
            "expected rejection by {rule}, got {}: {rejection}",
            rejection.rule()
        )),
    }
}

#[then("no booking is committed")]
fn no_booking_committed(world: &BookingWorld) -> Result<(), eyre::Report> {
    if let Some(booking) = world.validator.committed() {
        return Err(eyre::eyre!("expected no committed booking, found {booking:?}"));
    }
    Ok(())
}

#[then(
    r#"the committed trip is from "{departure}" to "{destination}" departing "{departure_date}" and returning "{return_date}""#
)]
fn committed_trip_is(
    world: &BookingWorld,
    departure: String,
    destination: String,
    departure_date: String,
    return_date: String,
) -> Result<(), eyre::Report> {
    let booking = committed(world)?;
    let request = booking.request();
    let actual = (
        request.departure_airport(),
        request.destination_airport(),
        request.departure_date(),
        request.return_date(),
    );
    let expected = (
        departure.as_str(),
        destination.as_str(),
        departure_date.as_str(),
        return_date.as_str(),
    );
    if actual != expected {
        return Err(eyre::eyre!("expected trip {expected:?}, found {actual:?}"));
    }
    Ok(())
}

#[then(r#"the committed seating is "{class}" class without emergency-row seats"#)]
fn committed_seating_is(world: &BookingWorld, class: String) -> Result<(), eyre::Report> {
    let booking = committed(world)?;
    let request = booking.request();
    if request.seating_class() != class || request.emergency_row() {
        return Err(eyre::eyre!(
            "expected {class} without emergency row, found {:?}",
            request.seating()
        ));
    }
    Ok(())
}

#[then("the committed party is {adults:u32} adults, {children:u32} children and {infants:u32} infants")]
fn committed_party_is(
    world: &BookingWorld,
    adults: u32,
    children: u32,
    infants: u32,
) -> Result<(), eyre::Report> {
    let passengers = committed(world)?.passengers();
    if (passengers.adults, passengers.children, passengers.infants) != (adults, children, infants) {
        return Err(eyre::eyre!("unexpected committed party {passengers:?}"));
    }
    Ok(())
}

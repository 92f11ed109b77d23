//! When steps for booking validation BDD scenarios.

use super::world::BookingWorld;
use concourse::booking::{domain::PassengerCounts, ports::BookingValidation};
use rstest_bdd_macros::when;

#[when("the party is changed to {adults:u32} adults, {children:u32} children and {infants:u32} infants")]
fn party_is_changed(world: &mut BookingWorld, adults: u32, children: u32, infants: u32) {
    world.passengers = Some(PassengerCounts::new(adults, children, infants));
}

#[when("the booking is validated")]
fn booking_is_validated(world: &mut BookingWorld) -> Result<(), eyre::Report> {
    let request = world.request()?;
    world.last_result = Some(world.validator.validate(&request));
    Ok(())
}

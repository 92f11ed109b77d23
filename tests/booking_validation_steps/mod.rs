//! Step definitions for booking validation BDD scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;

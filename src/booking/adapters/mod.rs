//! Adapter implementations for booking validation ports.

pub mod clock;

pub use clock::FixedClock;

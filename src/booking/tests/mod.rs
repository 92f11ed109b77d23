//! Unit tests for the booking module.

//! Test utilities for pmk unit tests.

pub mod fixtures;

pub use fixtures::*;

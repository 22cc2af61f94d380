//! pmk - a small build helper for C/C++ projects
//!
//! This crate provides the library behind the `pmk` command: project
//! configuration, include-driven source discovery, and compiler invocation.

pub mod builder;
pub mod core;
pub mod discover;
pub mod ops;
pub mod util;

/// Test fixtures shared by the unit tests.
#[cfg(test)]
pub mod test_support;

pub use crate::core::manifest::{Manifest, MANIFEST_NAME};
pub use discover::{DiscoverError, FileIndex, IncludeResolver, Resolution};
pub use util::context::GlobalContext;

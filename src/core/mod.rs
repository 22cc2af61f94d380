//! Core project types.

pub mod manifest;

pub use manifest::{Manifest, ShellHooks, MANIFEST_NAME};

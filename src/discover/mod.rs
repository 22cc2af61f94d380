//! Include-driven project discovery.
//!
//! Discovery runs in two steps:
//! - [`FileIndex`] walks the project tree once and records every C/C++
//!   source or header file.
//! - [`IncludeResolver`] starts at an entry point and follows quoted
//!   `#include` directives through the index, collecting the directories of
//!   every reached header and the implementation files that pair with them.
//!
//! The resulting [`Resolution`] feeds the `includes` and `files` lists of
//! the project configuration.

pub mod errors;
pub mod file_index;
pub mod include;
pub mod resolver;

pub use errors::DiscoverError;
pub use file_index::{FileIndex, FileRecord};
pub use resolver::{IncludeResolver, Resolution};

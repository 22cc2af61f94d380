//! High-level operations.
//!
//! This module contains the implementation of pmk commands.

pub mod pmk_build;
pub mod pmk_generate;
pub mod pmk_init;
pub mod pmk_run;
pub mod pmk_shell;
pub mod pmk_update;

pub use pmk_build::{build, BuildOptions, BuildResult};
pub use pmk_generate::{discover, generate, Discovery, GenerateOptions};
pub use pmk_init::{init_config, InitOptions};
pub use pmk_run::run;
pub use pmk_shell::run_shell;
pub use pmk_update::{update_config, UpdateMode};

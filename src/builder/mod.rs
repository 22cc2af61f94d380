//! Compiler invocation and build hooks.
//!
//! A project builds with a single compiler invocation composed from the
//! configuration; shell hooks may run around it.

pub mod command;
pub mod hooks;

pub use command::{compose_build_command, include_flags, CommandSpec};
pub use hooks::{run_hooks, HookSet};

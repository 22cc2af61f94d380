//! Command implementations

pub mod build;
pub mod completions;
pub mod generate;
pub mod init;
pub mod run;
pub mod shell;
pub mod update;
pub mod version;

use std::path::PathBuf;

use anyhow::Result;

use crate::cli::ConfigArg;
use pmk::core::Manifest;
use pmk::util::GlobalContext;

/// Resolve the config path and load it.
pub(crate) fn load_manifest(ctx: &GlobalContext, config: &ConfigArg) -> Result<(PathBuf, Manifest)> {
    let path = ctx.config_path(config.config.as_deref());
    let manifest = Manifest::load(&path)?;
    Ok((path, manifest))
}

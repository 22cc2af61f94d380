//! Implementation of `pmk update`.

use std::path::Path;

use anyhow::Result;

use crate::core::manifest::Manifest;
use crate::ops::pmk_init::{init_config, InitOptions};
use crate::util::fs::remove_file_if_exists;

/// How to refresh a configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UpdateMode {
    /// Re-render current values through the latest template
    #[default]
    Restructure,
    /// Discard the file and start from the default template
    Recreate,
}

/// Refresh the configuration file at `config_path`.
pub fn update_config(config_path: &Path, mode: UpdateMode) -> Result<Manifest> {
    match mode {
        UpdateMode::Recreate => {
            tracing::debug!("recreating config file {}", config_path.display());
            remove_file_if_exists(config_path)?;
            init_config(config_path, &InitOptions::default())
        }
        UpdateMode::Restructure => {
            tracing::debug!("restructuring config file {}", config_path.display());
            let manifest = Manifest::load(config_path)?;
            manifest.save(config_path)?;
            Ok(manifest)
        }
    }
}

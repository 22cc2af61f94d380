//! Implementation of `pmk init`.

use std::path::Path;

use anyhow::{bail, Result};

use crate::core::manifest::Manifest;

/// Options for creating a new configuration.
#[derive(Debug, Clone, Default)]
pub struct InitOptions {
    /// Project name (defaults to the directory name)
    pub name: Option<String>,

    /// Compiler to record (defaults to `gcc`)
    pub compiler: Option<String>,
}

/// Determines the project name from the options or the config's directory.
pub fn determine_project_name(name: &Option<String>, config_path: &Path) -> String {
    name.clone().unwrap_or_else(|| {
        config_path
            .parent()
            .and_then(|p| p.file_name())
            .and_then(|n| n.to_str())
            .map(str::to_string)
            .unwrap_or_else(|| Manifest::default().name)
    })
}

/// Write a fresh commented configuration file.
pub fn init_config(config_path: &Path, opts: &InitOptions) -> Result<Manifest> {
    if config_path.exists() {
        bail!(
            "config file `{}` already exists\n\
             \n\
             help: Run `pmk update --new` to recreate it",
            config_path.display()
        );
    }

    let mut manifest = Manifest {
        name: determine_project_name(&opts.name, config_path),
        ..Default::default()
    };
    if let Some(ref compiler) = opts.compiler {
        manifest.compiler = compiler.clone();
    }

    manifest.save(config_path)?;
    tracing::debug!("created config file {}", config_path.display());

    Ok(manifest)
}

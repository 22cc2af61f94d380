//! Global context for pmk operations.
//!
//! The project root is the directory pmk runs in: source discovery walks it,
//! and relative paths in the configuration are resolved against it.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::core::manifest::MANIFEST_NAME;

/// Process-wide paths shared by every command.
#[derive(Debug, Clone)]
pub struct GlobalContext {
    cwd: PathBuf,
}

impl GlobalContext {
    /// Create a context rooted at the current directory.
    pub fn new() -> Result<Self> {
        let cwd = std::env::current_dir().context("failed to get current directory")?;
        Ok(GlobalContext { cwd })
    }

    /// Create a context rooted at an explicit directory.
    pub fn with_cwd(cwd: impl Into<PathBuf>) -> Self {
        GlobalContext { cwd: cwd.into() }
    }

    /// The project root.
    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Resolve a path given on the command line against the project root.
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.cwd.join(path)
        }
    }

    /// Path of the configuration file, defaulting to `pmk.toml`.
    pub fn config_path(&self, config: Option<&Path>) -> PathBuf {
        self.resolve_path(config.unwrap_or(Path::new(MANIFEST_NAME)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_path_default() {
        let ctx = GlobalContext::with_cwd("/work/proj");
        assert_eq!(ctx.config_path(None), PathBuf::from("/work/proj/pmk.toml"));
    }

    #[test]
    fn test_config_path_relative_and_absolute() {
        let ctx = GlobalContext::with_cwd("/work/proj");
        assert_eq!(
            ctx.config_path(Some(Path::new("conf/debug.toml"))),
            PathBuf::from("/work/proj/conf/debug.toml")
        );

        let absolute = std::env::temp_dir().join("other.toml");
        assert_eq!(ctx.config_path(Some(&absolute)), absolute);
    }
}

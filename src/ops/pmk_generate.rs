//! Implementation of `pmk generate`.
//!
//! Traces the includes of an entry point and writes the result into the
//! configuration: header directories become `includes`, and the entry point
//! plus every discovered implementation file become `files`.

use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::Serialize;

use crate::core::manifest::{replace_lists, Manifest};
use crate::discover::{FileIndex, IncludeResolver};
use crate::util::fs::{self, relative_path};
use crate::util::GlobalContext;

/// Options for `pmk generate`.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Entry point source file
    pub entry: PathBuf,

    /// Write the updated config here instead of in place
    pub output: Option<PathBuf>,
}

/// Lists discovered from an entry point, ready for the configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Discovery {
    /// Header directories, most recently discovered first
    pub includes: Vec<String>,

    /// Entry point followed by implementation files, most recently discovered first
    pub files: Vec<String>,
}

/// Index the tree under `root` and trace `entry` through it.
pub fn discover(root: &Path, entry: &Path) -> Result<Discovery> {
    let index = FileIndex::build(root)?;
    let entry_path = if entry.is_absolute() {
        entry.to_path_buf()
    } else {
        root.join(entry)
    };

    let resolution = IncludeResolver::new(&index).resolve(&entry_path)?;

    let entry_name = relative_path(root, &entry_path)
        .to_string_lossy()
        .replace('\\', "/");

    tracing::debug!(
        "{} reaches {} headers and {} implementation files",
        entry_name,
        resolution.visited_headers().len(),
        resolution.discovered_impl_files().len()
    );

    let mut files = vec![entry_name.clone()];
    files.extend(
        resolution
            .impl_files()
            .into_iter()
            .filter(|file| *file != entry_name),
    );

    Ok(Discovery {
        includes: resolution.header_dirs(),
        files,
    })
}

/// Discover from `opts.entry` and write the lists into the configuration.
///
/// Returns the discovered lists and the path that was written.
pub fn generate(
    ctx: &GlobalContext,
    config_path: &Path,
    opts: &GenerateOptions,
) -> Result<(Discovery, PathBuf)> {
    // Validates the existing file before touching it
    Manifest::load(config_path)?;

    let discovery = discover(ctx.cwd(), &opts.entry)?;

    let content = fs::read_to_string(config_path)?;
    let edited = replace_lists(
        &content,
        &[
            ("includes", discovery.includes.as_slice()),
            ("files", discovery.files.as_slice()),
        ],
    )?;

    let target = match opts.output {
        Some(ref output) => ctx.resolve_path(output),
        None => config_path.to_path_buf(),
    };
    fs::write_string(&target, &edited)?;

    Ok((discovery, target))
}

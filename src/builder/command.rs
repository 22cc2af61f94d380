//! Single-invocation compiler command composition.
//!
//! The command is laid out as:
//!
//! ```text
//! <compiler> -o <output> <files...> -I<includes...> -L<libs...> -l<libraries...> <flags...>
//! ```
//!
//! Arguments are passed to the compiler directly, never through a shell, so
//! paths with spaces need no quoting.

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};

use crate::core::manifest::Manifest;
use crate::util::fs::{glob_files, is_glob_pattern};
use crate::util::process::ProcessBuilder;

/// A command to execute, with program and arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    /// The program to run (e.g., "gcc", "clang++")
    pub program: PathBuf,
    /// Command arguments
    pub args: Vec<String>,
}

impl CommandSpec {
    /// Create a new command spec.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        CommandSpec {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Add an argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Add multiple arguments.
    pub fn args(mut self, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.args.extend(args.into_iter().map(|a| a.into()));
        self
    }

    /// Convert into a runnable process in `cwd`.
    pub fn to_process(&self, cwd: &Path) -> ProcessBuilder {
        ProcessBuilder::new(&self.program)
            .args(&self.args)
            .cwd(cwd)
    }

    /// One argument per line, for build logs.
    pub fn display_pretty(&self) -> String {
        let mut out = self.program.display().to_string();
        for arg in &self.args {
            out.push_str(" \\\n    ");
            out.push_str(arg);
        }
        out
    }
}

/// Prefix each header directory with `-I`, keeping order.
pub fn include_flags(dirs: &[String]) -> Vec<String> {
    dirs.iter().map(|dir| format!("-I{}", dir)).collect()
}

/// Normalize a configured compiler flag: `std=c++17` becomes `-std=c++17`.
fn compiler_flag(flag: &str) -> String {
    if flag.starts_with('-') {
        flag.to_string()
    } else {
        format!("-{}", flag)
    }
}

/// Expand the configured `files` list against the project root.
///
/// Glob patterns expand to their sorted matches; plain entries are kept
/// verbatim so the compiler reports missing files itself.
fn expand_sources(root: &Path, files: &[String]) -> Result<Vec<String>> {
    let mut sources = Vec::new();

    for entry in files {
        if is_glob_pattern(entry) {
            let matches = glob_files(root, entry)?;
            if matches.is_empty() {
                tracing::warn!("`{}` matched no files", entry);
            }
            sources.extend(matches.iter().map(|p| p.to_string_lossy().replace('\\', "/")));
        } else {
            sources.push(entry.clone());
        }
    }

    Ok(sources)
}

/// Build the compiler invocation for a project.
pub fn compose_build_command(manifest: &Manifest, root: &Path) -> Result<CommandSpec> {
    if !manifest.has_sources() {
        bail!(
            "nothing to build: `files` is empty\n\
             \n\
             help: List sources in `files`, or run `pmk generate <entry>`"
        );
    }

    let sources = expand_sources(root, &manifest.files)?;
    if sources.is_empty() {
        bail!("nothing to build: no file matched the `files` patterns");
    }

    let cmd = CommandSpec::new(&manifest.compiler)
        .arg("-o")
        .arg(manifest.output.clone())
        .args(sources)
        .args(include_flags(&manifest.includes))
        .args(manifest.libs.iter().map(|dir| format!("-L{}", dir)))
        .args(manifest.libraries.iter().map(|lib| format!("-l{}", lib)))
        .args(manifest.flags.iter().map(|flag| compiler_flag(flag)));

    Ok(cmd)
}

//! Implementation of `pmk build`.

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};

use crate::builder::command::{compose_build_command, CommandSpec};
use crate::builder::hooks::{run_hooks, HookSet};
use crate::core::manifest::Manifest;
use crate::util::process::find_executable;
use crate::util::GlobalContext;

/// Options for the build command.
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    /// Run `shell.before` first and `shell.after` on success
    pub with_hooks: bool,
}

/// Result of a successful build.
#[derive(Debug, Clone)]
pub struct BuildResult {
    /// The compiler invocation that ran
    pub command: CommandSpec,

    /// The produced output file
    pub output: PathBuf,
}

/// Compose and run the project's compiler invocation.
pub fn build(ctx: &GlobalContext, manifest: &Manifest, opts: &BuildOptions) -> Result<BuildResult> {
    if opts.with_hooks {
        run_hooks(HookSet::Before.select(&manifest.shell), ctx.cwd())?;
    }

    let command = compose_build_command(manifest, ctx.cwd())?;

    if find_executable(&manifest.compiler).is_none() {
        bail!(
            "compiler `{}` not found\n\
             \n\
             help: Install it or set `compiler` in the config file",
            manifest.compiler
        );
    }

    tracing::info!("Building {}", manifest.name);
    tracing::debug!("{}", command.display_pretty());

    let process = command.to_process(ctx.cwd());
    let status = process.status()?;
    if !status.success() {
        bail!(
            "build failed: `{}` exited with {}",
            process.display_command(),
            status
        );
    }

    if opts.with_hooks {
        run_hooks(HookSet::After.select(&manifest.shell), ctx.cwd())?;
    }

    Ok(BuildResult {
        command,
        output: ctx.resolve_path(Path::new(&manifest.output)),
    })
}

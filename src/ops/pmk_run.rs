//! Implementation of `pmk run`.

use std::path::Path;
use std::process::ExitStatus;

use anyhow::{bail, Result};

use crate::core::manifest::Manifest;
use crate::util::process::ProcessBuilder;
use crate::util::GlobalContext;

/// Run the built program with `args`, returning its exit status.
pub fn run(ctx: &GlobalContext, manifest: &Manifest, args: &[String]) -> Result<ExitStatus> {
    let program = ctx.resolve_path(Path::new(&manifest.output));

    if !program.exists() {
        bail!(
            "`{}` has not been built yet\n\
             \n\
             help: Run `pmk run --build` to build it first",
            manifest.output
        );
    }

    tracing::info!("Running {}", manifest.name);

    ProcessBuilder::new(&program)
        .args(args)
        .cwd(ctx.cwd())
        .status()
}

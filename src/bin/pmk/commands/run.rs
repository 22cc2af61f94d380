//! `pmk run` command

use anyhow::{bail, Result};

use super::load_manifest;
use crate::cli::RunArgs;
use pmk::ops::pmk_build::{build, BuildOptions};
use pmk::ops::pmk_run::run;
use pmk::util::GlobalContext;

pub fn execute(args: RunArgs) -> Result<()> {
    let ctx = GlobalContext::new()?;
    let (_, manifest) = load_manifest(&ctx, &args.config)?;

    if args.build {
        build(&ctx, &manifest, &BuildOptions::default())?;
    }

    let status = run(&ctx, &manifest, &args.args)?;
    if !status.success() {
        bail!("`{}` exited with {}", manifest.output, status);
    }

    Ok(())
}

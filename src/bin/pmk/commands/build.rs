//! `pmk build` command

use anyhow::Result;

use super::load_manifest;
use crate::cli::BuildArgs;
use pmk::ops::pmk_build::{build, BuildOptions};
use pmk::util::GlobalContext;

pub fn execute(args: BuildArgs) -> Result<()> {
    let ctx = GlobalContext::new()?;
    let (_, manifest) = load_manifest(&ctx, &args.config)?;

    let opts = BuildOptions {
        with_hooks: args.shell,
    };

    let result = build(&ctx, &manifest, &opts)?;

    eprintln!(
        "    Finished `{}` -> {}",
        manifest.name,
        result.output.display()
    );

    Ok(())
}

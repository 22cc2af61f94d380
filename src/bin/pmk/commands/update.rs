//! `pmk update` command

use anyhow::Result;

use crate::cli::UpdateArgs;
use pmk::ops::pmk_update::{update_config, UpdateMode};
use pmk::util::GlobalContext;

pub fn execute(args: UpdateArgs) -> Result<()> {
    let ctx = GlobalContext::new()?;
    let path = ctx.config_path(args.config.config.as_deref());

    let mode = if args.new {
        UpdateMode::Recreate
    } else {
        UpdateMode::Restructure
    };

    update_config(&path, mode)?;

    let verb = match mode {
        UpdateMode::Recreate => "Recreated",
        UpdateMode::Restructure => "Updated",
    };
    eprintln!("     {} {}", verb, path.display());

    Ok(())
}

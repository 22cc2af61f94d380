//! Implementation of `pmk shell`.

use anyhow::Result;

use crate::builder::hooks::{run_hooks, HookSet};
use crate::core::manifest::Manifest;
use crate::util::GlobalContext;

/// Run the selected `[shell]` commands. Returns how many failed.
pub fn run_shell(ctx: &GlobalContext, manifest: &Manifest, which: HookSet) -> Result<usize> {
    let commands = which.select(&manifest.shell);
    if commands.is_empty() {
        tracing::debug!("no `{}` shell commands configured", which);
        return Ok(0);
    }

    run_hooks(commands, ctx.cwd())
}

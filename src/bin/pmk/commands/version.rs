//! `pmk version` command

use anyhow::Result;

pub fn execute() -> Result<()> {
    println!("{}", env!("CARGO_PKG_VERSION"));
    Ok(())
}

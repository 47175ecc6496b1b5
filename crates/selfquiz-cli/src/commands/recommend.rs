//! The `selfquiz recommend` command.

use anyhow::Result;

use super::GlobalArgs;

pub fn execute(global: &GlobalArgs) -> Result<()> {
    let ctx = global.context()?;
    println!("{}", ctx.recommendations());
    Ok(())
}

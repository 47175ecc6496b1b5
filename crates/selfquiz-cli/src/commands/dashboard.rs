//! The `selfquiz dashboard` command.

use std::path::PathBuf;

use anyhow::Result;

use super::GlobalArgs;

pub fn execute(global: &GlobalArgs, output: PathBuf) -> Result<()> {
    let ctx = global.context()?;
    let log = ctx.history();

    selfquiz_report::write_dashboard(&log, &ctx.recommendations(), &ctx.summary(), &output)?;
    println!(
        "Wrote dashboard for {} attempt(s) to {}",
        log.len(),
        output.display()
    );
    Ok(())
}

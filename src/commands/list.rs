use crate::app_builder::AppContext;
use crate::error::Result;
use std::io::Write;

/// `list`: one id per line, indented, or a notice when the store is empty
pub fn run(ctx: &AppContext, out: &mut dyn Write) -> Result<()> {
    let ids = ctx.storage.list()?;

    if ids.is_empty() {
        writeln!(out, "No items found")?;
        return Ok(());
    }

    for id in ids {
        writeln!(out, "  {}", id)?;
    }
    Ok(())
}

use crate::app_builder::AppContext;
use crate::error::Result;
use std::io::Write;

/// `delete <id>`
pub fn run(ctx: &AppContext, id: &str, out: &mut dyn Write) -> Result<()> {
    ctx.storage.delete(id)?;
    writeln!(out, "Deleted '{}'", id)?;
    Ok(())
}

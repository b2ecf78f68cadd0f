use crate::app_builder::AppContext;
use crate::error::Result;
use std::io::Write;

/// `add <id> --content <text>`
pub fn run(ctx: &AppContext, id: &str, content: &str, out: &mut dyn Write) -> Result<()> {
    ctx.storage.add(id, content)?;
    writeln!(out, "Added '{}'", id)?;
    Ok(())
}

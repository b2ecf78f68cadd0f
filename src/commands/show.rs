use crate::app_builder::AppContext;
use crate::error::{AppError, Result};
use std::io::Write;

/// `show <id>`: the payload as stored, newline-terminated
pub fn run(ctx: &AppContext, id: &str, out: &mut dyn Write) -> Result<()> {
    let content = ctx
        .storage
        .get(id)?
        .ok_or_else(|| AppError::NotFound(id.to_string()))?;

    write!(out, "{}", content)?;
    if !content.ends_with('\n') {
        writeln!(out)?;
    }
    Ok(())
}

use crate::app_builder::AppContext;
use crate::error::Result;
use std::io::Write;

/// `greet hello <name>`
pub fn hello(ctx: &AppContext, name: &str, out: &mut dyn Write) -> Result<()> {
    let message = ctx.greeting_service.generate_greeting(name);
    writeln!(out, "{}", message)?;
    Ok(())
}

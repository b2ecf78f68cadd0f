// Command handlers
//
// Each handler calls exactly one capability operation on the AppContext and
// renders the result. Item errors are turned into a message on stderr and
// exit code 1 here, and nowhere else; other errors are returned to main as
// fatal.

pub mod add;
pub mod delete;
pub mod greet;
pub mod list;
pub mod show;

use crate::app_builder::AppContext;
use crate::cli::{Command, GreetCommand};
use crate::error::Result;
use crate::exit_codes;
use std::io::Write;

/// Run `command` against `ctx` and return the process exit code
///
/// # Errors
///
/// Anything that is not an item error (I/O failures from the store, failing
/// to write output) is passed through for the caller to report.
pub fn run(
    ctx: &AppContext,
    command: &Command,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> anyhow::Result<i32> {
    tracing::debug!(?command, storage = ctx.storage.backend(), "running command");

    let result = match command {
        Command::Add { id, content } => add::run(ctx, id, content, out),
        Command::List => list::run(ctx, out),
        Command::Delete { id } => delete::run(ctx, id, out),
        Command::Show { id } => show::run(ctx, id, out),
        Command::Greet {
            command: GreetCommand::Hello { name },
        } => greet::hello(ctx, name, out),
    };

    report(result, err)
}

fn report(result: Result<()>, err: &mut dyn Write) -> anyhow::Result<i32> {
    match result {
        Ok(()) => Ok(exit_codes::OK),
        Err(e) if e.is_item_error() => {
            tracing::debug!(error = %e, "command failed");
            writeln!(err, "Error: {}", e)?;
            Ok(exit_codes::ITEM_ERROR)
        }
        Err(e) => Err(e.into()),
    }
}

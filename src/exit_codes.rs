//! Stable exit codes for typ-tmpl commands.

/// Command succeeded.
pub const OK: i32 = 0;
/// An item error (not found, already exists, invalid id) was reported.
pub const ITEM_ERROR: i32 = 1;
/// Fatal failure: I/O, configuration, or anything else not handled by a command.
pub const FAILURE: i32 = 1;
/// Malformed invocation; the value clap uses when it rejects arguments.
pub const USAGE: i32 = 2;

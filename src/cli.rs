// Command-line surface
//
// `--version`/`-V` is a plain global flag instead of clap's built-in version
// action so the output can carry the configured application name.

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "typ-tmpl",
    about = "A minimal CLI template with swappable storage and greeting services",
    disable_version_flag = true
)]
pub struct Cli {
    /// Show version and exit
    #[arg(short = 'V', long, global = true)]
    pub version: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Add a new item
    #[command(visible_alias = "a")]
    Add {
        /// Unique identifier for the item
        id: String,

        /// Content of the item
        #[arg(short, long)]
        content: String,
    },

    /// List all items
    #[command(visible_alias = "ls")]
    List,

    /// Delete an item
    #[command(visible_alias = "rm")]
    Delete {
        /// Identifier of the item to delete
        id: String,
    },

    /// Print the content of an item
    #[command(visible_alias = "cat")]
    Show {
        /// Identifier of the item to show
        id: String,
    },

    /// Greeting commands
    Greet {
        #[command(subcommand)]
        command: GreetCommand,
    },
}

#[derive(Debug, Subcommand)]
pub enum GreetCommand {
    /// Greet someone by name
    Hello {
        /// Name of the person to greet
        name: String,
    },
}

//! Command implementations for the Kiln CLI.
//!
//! - [`inspect`] - Print the assembled configuration
//! - [`check`] - Validate the project and summarize the pipeline
//! - [`filename`] - Render one output filename
//! - [`schema`] - Print the project file JSON Schema
//!
//! Each command provides an `execute` function that takes the parsed
//! arguments and the global flags.

pub mod check;
pub mod filename;
pub mod inspect;
pub mod schema;

use crate::cli::{Command, GlobalArgs};
use crate::error::Result;

pub use check::execute as check_execute;
pub use filename::execute as filename_execute;
pub use inspect::execute as inspect_execute;
pub use schema::execute as schema_execute;

/// Run a parsed subcommand.
pub fn run(command: Command, global: &GlobalArgs) -> Result<()> {
    match command {
        Command::Inspect(args) => inspect_execute(args, global),
        Command::Check(args) => check_execute(args, global),
        Command::Filename(args) => filename_execute(args, global),
        Command::Schema => schema_execute(),
    }
}

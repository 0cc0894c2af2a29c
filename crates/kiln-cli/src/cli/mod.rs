//! Command-line interface definition for Kiln.
//!
//! # Command Structure
//!
//! - `kiln inspect` - Print the assembled configuration as JSON
//! - `kiln check` - Validate the project layout and summarize the pipeline
//! - `kiln filename` - Render an output filename for one asset
//! - `kiln schema` - Print the JSON Schema of `kiln.toml`

mod commands;
pub mod enums;
mod tests;

use clap::Parser;
use std::path::PathBuf;

pub use commands::{CheckArgs, Command, FilenameArgs, InspectArgs};
pub use enums::*;

/// Kiln - build configuration assembler for static-asset pipelines
#[derive(Parser, Debug)]
#[command(
    name = "kiln",
    version,
    about = "Assemble build configurations for static-asset pipelines",
    long_about = "Kiln turns a build mode and a project layout into a complete bundler\n\
                  configuration: entry points, hashed output filenames, plugins and\n\
                  file-transformation rules for scripts, stylesheets, images and fonts."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Build mode (overrides NODE_ENV)
    ///
    /// When omitted, NODE_ENV must be set to "development" or "production".
    #[arg(short, long, global = true, value_enum, value_name = "MODE")]
    pub mode: Option<Mode>,

    /// Project root directory (default: current directory)
    #[arg(long, global = true, value_name = "DIR")]
    pub cwd: Option<PathBuf>,

    /// Project file to load instead of discovering kiln.toml / package.json
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Flags shared by every command once parsing is done.
#[derive(Debug, Clone, Default)]
pub struct GlobalArgs {
    pub mode: Option<Mode>,
    pub cwd: Option<PathBuf>,
    pub config: Option<PathBuf>,
}

impl Cli {
    pub fn global_args(&self) -> GlobalArgs {
        GlobalArgs {
            mode: self.mode,
            cwd: self.cwd.clone(),
            config: self.config.clone(),
        }
    }
}

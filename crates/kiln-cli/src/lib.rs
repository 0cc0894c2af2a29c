//! Kiln CLI - assemble and check static-asset build configurations.
//!
//! # Architecture
//!
//! - [`cli`] - Argument definitions (clap derive)
//! - [`config`] - Project loading: discovery, profiles, `KILN_*` overrides
//! - [`commands`] - Subcommand implementations
//! - [`error`] - CLI error types and miette conversion
//! - [`logger`] - tracing subscriber setup
//! - [`ui`] - Terminal status output
//!
//! # Example
//!
//! ```rust,no_run
//! use kiln_cli::cli::{GlobalArgs, InspectArgs, Mode};
//! use kiln_cli::commands;
//!
//! let global = GlobalArgs {
//!     mode: Some(Mode::Production),
//!     ..GlobalArgs::default()
//! };
//! commands::inspect_execute(InspectArgs::default(), &global)?;
//! # Ok::<(), kiln_cli::CliError>(())
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, Result, ResultExt};

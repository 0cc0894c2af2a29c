use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::cli::enums::AssetKind;

/// Available Kiln subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the assembled build configuration as JSON
    ///
    /// Loads the project file, applies the profile for the build mode,
    /// assembles the configuration and validates the project directories.
    Inspect(InspectArgs),

    /// Validate the project without printing the configuration
    ///
    /// Reports enabled plugins, transformation rules and any extensions
    /// claimed by more than one rule.
    Check(CheckArgs),

    /// Render the output filename of an asset
    ///
    /// In production the filename embeds a hash of the file content, so
    /// --file is required.
    Filename(FilenameArgs),

    /// Print the JSON Schema of the project file
    Schema,
}

/// Arguments for the inspect command
#[derive(Args, Debug, Default)]
pub struct InspectArgs {
    /// Print single-line JSON instead of pretty output
    #[arg(long)]
    pub compact: bool,

    /// Skip filesystem checks (source directory, template, assets)
    #[arg(long)]
    pub no_fs_check: bool,
}

/// Arguments for the check command
#[derive(Args, Debug, Default)]
pub struct CheckArgs {
    /// List each rule's loaders in the order they process a file
    #[arg(long)]
    pub loaders: bool,
}

/// Arguments for the filename command
#[derive(Args, Debug)]
pub struct FilenameArgs {
    /// Logical asset name (e.g. "main")
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Output extension (e.g. "js")
    #[arg(value_name = "EXT")]
    pub ext: String,

    /// Asset kind, selects the output sub-directory
    #[arg(short, long, value_enum, default_value = "bare")]
    pub kind: AssetKind,

    /// File whose content is hashed in production
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,
}

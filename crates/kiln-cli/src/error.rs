//! Error handling for the Kiln CLI.
//!
//! `CliError` wraps the library's [`ConfigError`] and adds the failures that
//! only happen at the command line: bad arguments, unreadable files and
//! environment overrides that do not fit the project config.
//!
//! # Example
//!
//! ```rust,no_run
//! use kiln_cli::error::{Result, ResultExt};
//! use std::path::Path;
//!
//! fn read_asset(path: &Path) -> Result<Vec<u8>> {
//!     std::fs::read(path).with_path(path)
//! }
//! ```

mod report;

use std::path::PathBuf;
use thiserror::Error;

pub use kiln_config::ConfigError;
pub use report::cli_error_to_miette;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Mode, layout, project file or validation failures from `kiln-config`
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Invalid command-line arguments or options
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// File or directory not found
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// I/O errors from file system operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A `KILN_*` variable whose value does not fit the project config
    #[error("Invalid environment override {var}: {message}")]
    Env { var: String, message: String },
}

impl CliError {
    /// Actionable hint shown under the error, when one applies.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            CliError::Config(err) => config_hint(err),
            CliError::InvalidArgument(_) => Some("Run 'kiln --help' for usage"),
            CliError::Env { .. } => {
                Some("Override nested keys with '__', e.g. KILN_DEV_SERVER__PORT=4000")
            }
            _ => None,
        }
    }
}

fn config_hint(err: &ConfigError) -> Option<&'static str> {
    match err {
        ConfigError::ModeMissing { .. } | ConfigError::InvalidMode { .. } => {
            Some("Set NODE_ENV=production or pass --mode development")
        }
        ConfigError::InvalidPath { .. } => {
            Some("Keep layout.src_dir and layout.out_dir as separate, non-nested directories")
        }
        ConfigError::SourceDirNotFound { .. } => {
            Some("Create the source directory or set layout.src_dir in kiln.toml")
        }
        ConfigError::OutputParentNotFound { .. } => {
            Some("Create the parent directory or set layout.out_dir in kiln.toml")
        }
        ConfigError::TemplateNotFound { .. } => {
            Some("Add an index.html to the source directory or set layout.html_template")
        }
        ConfigError::AssetsDirNotFound { .. } => {
            Some("Create the assets directory or set layout.assets_dir")
        }
        ConfigError::InvalidValue { .. } | ConfigError::InvalidProfileOverride { .. } => {
            Some("Run 'kiln schema' to see the accepted project file fields")
        }
        ConfigError::NoEntries => Some("Add at least one entry under [entry] in kiln.toml"),
        _ => None,
    }
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Extension trait for adding context to `Result` types.
pub trait ResultExt<T> {
    /// Turn a `NotFound` I/O error into [`CliError::FileNotFound`] for `path`.
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T>;
}

impl<T, E: Into<CliError>> ResultExt<T> for std::result::Result<T, E> {
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T> {
        self.map_err(|e| match e.into() {
            CliError::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound => {
                CliError::FileNotFound(path.as_ref().to_path_buf())
            }
            other => other,
        })
    }
}

//! Error types for mode resolution, layout validation and config loading.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    // Build mode errors
    #[error("build mode is not set: define {var} as \"development\" or \"production\"")]
    ModeMissing { var: String },

    #[error("unrecognized build mode '{value}': expected \"development\" or \"production\"")]
    InvalidMode { value: String },

    // Layout errors (pure, raised before any filesystem access)
    #[error("invalid {field} path: {message}")]
    InvalidPath { field: &'static str, message: String },

    // Filesystem validation errors (for CLI use)
    #[error("source directory not found: {}", path.display())]
    SourceDirNotFound { path: PathBuf },

    #[error("expected a directory: {}", path.display())]
    NotADirectory { path: PathBuf },

    #[error("parent of output directory not found: {}", path.display())]
    OutputParentNotFound { path: PathBuf },

    #[error("HTML template not found: {}", path.display())]
    TemplateNotFound { path: PathBuf },

    #[error("static assets directory not found: {}", path.display())]
    AssetsDirNotFound { path: PathBuf },

    // Config parsing/loading errors
    #[error("invalid config value for '{field}': {message}")]
    InvalidValue { field: String, message: String },

    #[error("invalid profile override: {message}")]
    InvalidProfileOverride { message: String },

    // Schema validation errors (no filesystem checks)
    #[error("no entries specified")]
    NoEntries,

    #[error("schema validation failed: {message}")]
    SchemaValidation { message: String },

    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

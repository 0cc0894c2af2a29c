//! Typed configuration for a static-asset build pipeline.
//!
//! Given a [`BuildMode`] and a [`ProjectLayout`], [`assemble`] produces a
//! [`Configuration`]: entry points, output filename templates, the plugin
//! list and the file-transformation rules consumed by an external bundler.
//! Assembly is pure; filesystem checks live in [`FsValidator`].

pub mod bundle;
pub mod config;
pub mod dev;
pub mod discovery;
pub mod error;
pub mod mode;
pub mod settings;
pub mod validation;

// Re-export main types
pub use bundle::*;
pub use config::*;
pub use dev::*;
pub use error::*;
pub use mode::*;
pub use settings::*;

// Re-export discovery and validation
pub use discovery::{CONFIG_FILE, ConfigDiscovery, PACKAGE_JSON_FIELD};
pub use validation::{ConfigValidator, FsValidator, SchemaValidator, validate_fs, validate_schema};

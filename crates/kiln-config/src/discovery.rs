//! Locating and reading the project file.
//!
//! A project is configured by `kiln.toml` in its root or, failing that, by a
//! `kiln` field in `package.json`. Library users that already hold a parsed
//! document should call [`ProjectConfig::from_value`] instead.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::config::ProjectConfig;
use crate::error::{ConfigError, Result};
use crate::mode::BuildMode;

/// Name of the dedicated project file.
pub const CONFIG_FILE: &str = "kiln.toml";

/// Field read from `package.json` when no `kiln.toml` exists.
pub const PACKAGE_JSON_FIELD: &str = "kiln";

const PACKAGE_JSON: &str = "package.json";

/// Project file lookup rooted at one directory.
///
/// # Example
///
/// ```no_run
/// use kiln_config::{BuildMode, ConfigDiscovery};
///
/// let project = ConfigDiscovery::new("site").load_for_mode(BuildMode::Production)?;
/// println!("{}", project.html.title);
/// # Ok::<(), kiln_config::ConfigError>(())
/// ```
pub struct ConfigDiscovery {
    root: PathBuf,
}

impl ConfigDiscovery {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Path of the file that configures this project.
    ///
    /// `kiln.toml` wins; `package.json` only counts when its `kiln` field is
    /// present and not null.
    pub fn find(&self) -> Option<PathBuf> {
        let dedicated = self.root.join(CONFIG_FILE);
        if dedicated.is_file() {
            return Some(dedicated);
        }

        let manifest = self.root.join(PACKAGE_JSON);
        let declares_field = fs::read_to_string(&manifest)
            .ok()
            .and_then(|text| serde_json::from_str::<Value>(&text).ok())
            .and_then(|doc| doc.get(PACKAGE_JSON_FIELD).map(|field| !field.is_null()))
            .unwrap_or(false);
        declares_field.then_some(manifest)
    }

    /// Load the discovered file, or defaults when there is none
    pub fn load_or_default(&self) -> Result<ProjectConfig> {
        let Some(path) = self.find() else {
            tracing::debug!(root = %self.root.display(), "no project file, using defaults");
            return Ok(ProjectConfig::default());
        };
        Self::load_from(&path)
    }

    /// Load and apply the profile for `mode`
    pub fn load_for_mode(&self, mode: BuildMode) -> Result<ProjectConfig> {
        self.load_or_default()?.materialize_profile(mode)
    }

    /// Read one file; `package.json` is recognized by name, anything else is TOML.
    pub fn load_from(path: &Path) -> Result<ProjectConfig> {
        tracing::debug!(path = %path.display(), "loading project file");
        let text = fs::read_to_string(path)?;

        let document = if path.file_name() == Some(OsStr::new(PACKAGE_JSON)) {
            package_json_document(&text)?
        } else {
            toml_document(&text)?
        };
        ProjectConfig::from_value(document)
    }
}

fn toml_document(text: &str) -> Result<Value> {
    let table: toml::Table = toml::from_str(text).map_err(|err| ConfigError::InvalidValue {
        field: CONFIG_FILE.to_string(),
        message: format!("Invalid TOML syntax: {err}"),
    })?;

    serde_json::to_value(table).map_err(|err| ConfigError::InvalidValue {
        field: CONFIG_FILE.to_string(),
        message: format!("TOML to JSON conversion failed: {err}"),
    })
}

fn package_json_document(text: &str) -> Result<Value> {
    let mut manifest: Value = serde_json::from_str(text).map_err(|err| ConfigError::InvalidValue {
        field: PACKAGE_JSON.to_string(),
        message: format!("Invalid JSON: {err}"),
    })?;

    match manifest.get_mut(PACKAGE_JSON_FIELD).map(Value::take) {
        Some(Value::Null) => Err(ConfigError::InvalidValue {
            field: PACKAGE_JSON_FIELD.to_string(),
            message: "The 'kiln' field cannot be null".to_string(),
        }),
        Some(section) => Ok(section),
        None => Err(ConfigError::InvalidValue {
            field: PACKAGE_JSON_FIELD.to_string(),
            message: "Add a 'kiln' field to your package.json".to_string(),
        }),
    }
}

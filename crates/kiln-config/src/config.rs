//! Project-level configuration for Kiln.
//!
//! This module provides the `ProjectConfig` struct and per-mode profile merging.
//! For file discovery, see the `discovery` module.

use std::collections::HashMap;

use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::bundle::LayoutOptions;
use crate::bundle::helpers::{default_entries, default_title};
use crate::dev::DevServerOptions;
use crate::error::{ConfigError, Result as ConfigResult};
use crate::mode::BuildMode;
use crate::settings::GlobalSettings;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ProjectConfig {
    #[serde(default)]
    pub layout: LayoutOptions,

    /// Named entry points, each a list of modules bundled together
    #[serde(default = "default_entries")]
    pub entry: IndexMap<String, Vec<String>>,

    #[serde(default)]
    pub html: HtmlSettings,

    #[serde(default)]
    pub dev_server: DevServerOptions,

    #[serde(default)]
    pub settings: GlobalSettings,

    /// Partial documents merged over the base, keyed by build mode
    #[serde(default)]
    pub profiles: HashMap<String, Value>,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            layout: LayoutOptions::default(),
            entry: default_entries(),
            html: HtmlSettings::default(),
            dev_server: DevServerOptions::default(),
            settings: GlobalSettings::default(),
            profiles: HashMap::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct HtmlSettings {
    /// Page title passed to the HTML template
    #[serde(default = "default_title")]
    pub title: String,
}

impl Default for HtmlSettings {
    fn default() -> Self {
        Self {
            title: default_title(),
        }
    }
}

impl ProjectConfig {
    /// Create from serde_json::Value (for programmatic config)
    ///
    /// # Example
    ///
    /// ```
    /// use kiln_config::ProjectConfig;
    /// use serde_json::json;
    ///
    /// let value = json!({
    ///     "html": { "title": "Portfolio" },
    ///     "dev_server": { "port": 8080 }
    /// });
    ///
    /// let config = ProjectConfig::from_value(value).unwrap();
    /// assert_eq!(config.html.title, "Portfolio");
    /// assert_eq!(config.dev_server.port, 8080);
    /// ```
    pub fn from_value(value: Value) -> ConfigResult<Self> {
        serde_json::from_value(value).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            message: e.to_string(),
        })
    }

    /// Convert to serde_json::Value
    pub fn to_value(&self) -> ConfigResult<Value> {
        serde_json::to_value(self).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            message: e.to_string(),
        })
    }

    /// Generate the JSON Schema of the project config file.
    pub fn json_schema() -> Value {
        let schema = schemars::schema_for!(ProjectConfig);
        schema.to_value()
    }

    /// Apply the profile named after `mode`, if any.
    ///
    /// Objects merge key by key; arrays and scalars in the profile replace
    /// the base value. The `profiles` table itself is left untouched.
    pub fn materialize_profile(self, mode: BuildMode) -> ConfigResult<Self> {
        let Some(overrides) = self.profiles.get(mode.as_str()) else {
            return Ok(self);
        };

        if overrides.is_null() {
            return Ok(self);
        }
        if !overrides.is_object() {
            return Err(ConfigError::InvalidProfileOverride {
                message: format!("profile '{mode}' must be a table"),
            });
        }
        if overrides.get("profiles").is_some() {
            return Err(ConfigError::InvalidProfileOverride {
                message: format!("profile '{mode}' cannot define nested profiles"),
            });
        }

        tracing::debug!(profile = %mode, "applying config profile");

        let overrides = overrides.clone();
        self.with_overrides(&overrides)
            .map_err(|err| ConfigError::InvalidProfileOverride {
                message: err.to_string(),
            })
    }

    /// Deep-merge `overrides` over this config.
    ///
    /// Used for profiles and for environment overrides. Key order of the base
    /// document is kept; new keys are appended. `profiles` is never replaced.
    pub fn with_overrides(self, overrides: &Value) -> ConfigResult<Self> {
        let Some(map) = overrides.as_object() else {
            return Err(ConfigError::InvalidValue {
                field: "overrides".to_string(),
                message: "overrides must be a table".to_string(),
            });
        };
        if map.is_empty() {
            return Ok(self);
        }

        let profiles = self.profiles.clone();
        let mut base = self.to_value()?;
        merge_values(&mut base, overrides);

        let mut merged = Self::from_value(base)?;
        merged.profiles = profiles;
        Ok(merged)
    }
}

fn merge_values(target: &mut Value, update: &Value) {
    match (target, update) {
        (Value::Object(target_map), Value::Object(update_map)) => {
            for (key, value) in update_map {
                merge_values(target_map.entry(key.clone()).or_insert(Value::Null), value);
            }
        }
        (target_slot, _) => {
            *target_slot = update.clone();
        }
    }
}

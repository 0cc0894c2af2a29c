//! Build mode selection.
//!
//! The mode is read once at startup and passed explicitly to the assembler.
//! Parsing is exhaustive: only `development` and `production` are accepted.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Environment variable holding the build mode.
pub const MODE_ENV_VAR: &str = "NODE_ENV";

/// Development vs. production selector.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    /// Readable output, inline source maps, no minification
    Development,
    /// Content-hashed filenames, minified styles and images
    Production,
}

impl BuildMode {
    pub const ALL: [BuildMode; 2] = [BuildMode::Development, BuildMode::Production];

    pub fn as_str(self) -> &'static str {
        match self {
            BuildMode::Development => "development",
            BuildMode::Production => "production",
        }
    }

    pub fn is_development(self) -> bool {
        matches!(self, BuildMode::Development)
    }

    pub fn is_production(self) -> bool {
        matches!(self, BuildMode::Production)
    }

    /// Read the mode from `NODE_ENV`.
    ///
    /// # Errors
    ///
    /// `ConfigError::ModeMissing` when the variable is unset and
    /// `ConfigError::InvalidMode` for any unrecognized value.
    pub fn from_env() -> Result<Self> {
        Self::from_env_var(MODE_ENV_VAR)
    }

    /// Read the mode from an arbitrary environment variable.
    pub fn from_env_var(var: &str) -> Result<Self> {
        match std::env::var(var) {
            Ok(value) => {
                let mode = value.parse()?;
                tracing::debug!(var, mode = %mode, "resolved build mode from environment");
                Ok(mode)
            }
            Err(std::env::VarError::NotPresent) => Err(ConfigError::ModeMissing {
                var: var.to_string(),
            }),
            Err(std::env::VarError::NotUnicode(raw)) => Err(ConfigError::InvalidMode {
                value: raw.to_string_lossy().into_owned(),
            }),
        }
    }
}

impl FromStr for BuildMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "development" => Ok(BuildMode::Development),
            "production" => Ok(BuildMode::Production),
            other => Err(ConfigError::InvalidMode {
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for BuildMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn parses_exact_names() {
        assert_eq!(
            "development".parse::<BuildMode>().unwrap(),
            BuildMode::Development
        );
        assert_eq!(
            "production".parse::<BuildMode>().unwrap(),
            BuildMode::Production
        );
    }

    #[test]
    fn rejects_anything_else() {
        for input in ["", "prod", "dev", "Production", " production", "test", "staging"] {
            let err = input.parse::<BuildMode>().unwrap_err();
            assert!(
                matches!(err, ConfigError::InvalidMode { ref value } if value == input),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn display_round_trips_through_parse() {
        for mode in BuildMode::ALL {
            assert_eq!(mode.to_string().parse::<BuildMode>().unwrap(), mode);
        }
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&BuildMode::Production).unwrap();
        assert_eq!(json, "\"production\"");
    }

    #[test]
    #[serial]
    fn missing_env_var_is_an_error() {
        unsafe { std::env::remove_var("KILN_TEST_MODE") };
        let err = BuildMode::from_env_var("KILN_TEST_MODE").unwrap_err();
        assert!(matches!(err, ConfigError::ModeMissing { ref var } if var == "KILN_TEST_MODE"));
    }

    #[test]
    #[serial]
    fn reads_mode_from_env_var() {
        unsafe { std::env::set_var("KILN_TEST_MODE", "production") };
        let mode = BuildMode::from_env_var("KILN_TEST_MODE");
        unsafe { std::env::remove_var("KILN_TEST_MODE") };
        assert_eq!(mode.unwrap(), BuildMode::Production);
    }

    #[test]
    #[serial]
    fn unknown_env_value_fails_fast() {
        unsafe { std::env::set_var("KILN_TEST_MODE", "prod") };
        let result = BuildMode::from_env_var("KILN_TEST_MODE");
        unsafe { std::env::remove_var("KILN_TEST_MODE") };
        assert!(matches!(result, Err(ConfigError::InvalidMode { .. })));
    }
}

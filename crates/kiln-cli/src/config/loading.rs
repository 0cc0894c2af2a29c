use figment::providers::Env;
use kiln_config::{BuildMode, ConfigError, ProjectConfig};
use serde_json::{Map, Value};

use crate::cli::GlobalArgs;
use crate::config::{read_project_file, resolve_root};
use crate::error::{CliError, Result};

/// Prefix of environment variables that override the project file.
pub const ENV_PREFIX: &str = "KILN_";

/// Separator for nested keys: `KILN_DEV_SERVER__PORT` sets `dev_server.port`.
pub const ENV_SEPARATOR: &str = "__";

/// One `KILN_*` variable, split into its config path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvOverride {
    /// Variable name as reported in errors, e.g. `KILN_HTML__TITLE`
    pub var: String,
    /// Lowercased key path, e.g. `["html", "title"]`
    pub path: Vec<String>,
    /// Unparsed value
    pub raw: String,
}

impl EnvOverride {
    /// Typed value for this override, shaped after the field it replaces.
    ///
    /// String fields (and unset optional ones) take the raw text as is, so
    /// `KILN_HTML__TITLE=2024` stays a string. Other fields parse the text as
    /// JSON, falling back to a string when it does not parse.
    pub fn value_for(&self, current: &Value) -> Value {
        let target = self
            .path
            .iter()
            .try_fold(current, |node, key| node.get(key.as_str()));

        match target {
            Some(Value::String(_) | Value::Null) | None => Value::String(self.raw.clone()),
            Some(_) => {
                serde_json::from_str(&self.raw).unwrap_or_else(|_| Value::String(self.raw.clone()))
            }
        }
    }

    /// Partial project document setting only this override.
    pub fn document(&self, current: &Value) -> Value {
        self.path
            .iter()
            .rev()
            .fold(self.value_for(current), |inner, key| {
                let mut map = Map::new();
                map.insert(key.clone(), inner);
                Value::Object(map)
            })
    }
}

/// `KILN_*` variables in name order.
pub fn env_overrides() -> Vec<EnvOverride> {
    let mut overrides: Vec<EnvOverride> = Env::prefixed(ENV_PREFIX)
        .split(ENV_SEPARATOR)
        .iter()
        .map(|(key, raw)| {
            let key = key.as_str().to_ascii_lowercase();
            EnvOverride {
                var: format!(
                    "{ENV_PREFIX}{}",
                    key.replace('.', ENV_SEPARATOR).to_ascii_uppercase()
                ),
                path: key.split('.').map(str::to_string).collect(),
                raw,
            }
        })
        .collect();
    overrides.sort_by(|a, b| a.var.cmp(&b.var));
    overrides
}

/// Apply every `KILN_*` variable on top of `config`.
///
/// # Errors
///
/// [`CliError::Env`] naming the first variable whose value does not fit.
pub fn apply_env_overrides(mut config: ProjectConfig) -> Result<ProjectConfig> {
    for entry in env_overrides() {
        let patch = entry.document(&config.to_value()?);
        config = config.with_overrides(&patch).map_err(|err| CliError::Env {
            var: entry.var,
            message: match err {
                ConfigError::InvalidValue { message, .. } => message,
                other => other.to_string(),
            },
        })?;
    }
    Ok(config)
}

/// Log level from `settings.log_level`, read before the logger exists.
///
/// The profile applies when the mode can be resolved. Loading problems are
/// ignored here; the command reports them properly.
pub fn log_level_hint(global: &GlobalArgs) -> Option<String> {
    let root = resolve_root(global.cwd.as_deref()).ok()?;
    let mode = match global.mode {
        Some(mode) => Some(BuildMode::from(mode)),
        None => BuildMode::from_env().ok(),
    };
    let (_, project) = read_project_file(&root, global.config.as_deref(), mode).ok()?;
    apply_env_overrides(project).ok()?.settings.log_level
}

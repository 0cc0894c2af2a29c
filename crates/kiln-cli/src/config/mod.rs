//! Project loading for CLI commands.
//!
//! Layers, lowest priority first: built-in defaults, the project file
//! (`kiln.toml` or the `kiln` field of `package.json`), the profile named
//! after the build mode, then `KILN_*` environment variables.

mod loading;

use std::path::{Path, PathBuf};

use kiln_config::{
    Assembler, BuildMode, ConfigDiscovery, Configuration, ProjectConfig, ProjectLayout,
};

use crate::cli::{GlobalArgs, Mode};
use crate::error::{CliError, Result};

pub use loading::{
    ENV_PREFIX, ENV_SEPARATOR, EnvOverride, apply_env_overrides, env_overrides, log_level_hint,
};

/// A project resolved for one build mode.
#[derive(Debug, Clone)]
pub struct Project {
    pub mode: BuildMode,
    pub layout: ProjectLayout,
    pub config: ProjectConfig,
    /// Project file that was loaded, if any
    pub source: Option<PathBuf>,
}

impl Project {
    /// Resolve mode and root from the global flags, then load.
    pub fn load(global: &GlobalArgs) -> Result<Self> {
        let mode = resolve_mode(global.mode)?;
        let root = resolve_root(global.cwd.as_deref())?;
        Self::load_in(&root, mode, global.config.as_deref())
    }

    pub fn load_in(root: &Path, mode: BuildMode, config_path: Option<&Path>) -> Result<Self> {
        let (source, profiled) = read_project_file(root, config_path, Some(mode))?;
        let config = apply_env_overrides(profiled)?;
        let layout = ProjectLayout::resolve(root, &config.layout)?;

        tracing::debug!(
            mode = %mode,
            root = %layout.root().display(),
            source = ?source,
            "project loaded"
        );

        Ok(Self {
            mode,
            layout,
            config,
            source,
        })
    }

    /// Assemble the build configuration. No filesystem access.
    pub fn assemble(&self) -> Result<Configuration> {
        Ok(Assembler::new(&self.layout)
            .with_project(&self.config)
            .assemble(self.mode)?)
    }
}

/// `--mode` when given, otherwise `NODE_ENV` read once.
pub fn resolve_mode(flag: Option<Mode>) -> Result<BuildMode> {
    match flag {
        Some(mode) => Ok(mode.into()),
        None => Ok(BuildMode::from_env()?),
    }
}

/// Absolute project root from `--cwd`, defaulting to the working directory.
pub fn resolve_root(cwd: Option<&Path>) -> Result<PathBuf> {
    let current = std::env::current_dir()?;
    let root = match cwd {
        Some(dir) if dir.is_absolute() => dir.to_path_buf(),
        Some(dir) => current.join(dir),
        None => current,
    };

    if !root.is_dir() {
        return Err(CliError::FileNotFound(root));
    }
    Ok(root)
}

/// Project file with the profile for `mode` applied, and the path it came from.
pub(crate) fn read_project_file(
    root: &Path,
    config_path: Option<&Path>,
    mode: Option<BuildMode>,
) -> Result<(Option<PathBuf>, ProjectConfig)> {
    if let Some(path) = config_path {
        if !path.is_file() {
            return Err(CliError::FileNotFound(path.to_path_buf()));
        }
        let config = ConfigDiscovery::load_from(path)?;
        let config = match mode {
            Some(mode) => config.materialize_profile(mode)?,
            None => config,
        };
        return Ok((Some(path.to_path_buf()), config));
    }

    let discovery = ConfigDiscovery::new(root);
    let config = match mode {
        Some(mode) => discovery.load_for_mode(mode)?,
        None => discovery.load_or_default()?,
    };
    Ok((discovery.find(), config))
}

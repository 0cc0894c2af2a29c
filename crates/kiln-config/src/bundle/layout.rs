use path_clean::PathClean;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::bundle::helpers::{
    default_assets_dir, default_html_template, default_output_dir, default_src_dir,
};
use crate::error::{ConfigError, Result};

/// Directory layout as written in the project config.
///
/// `assets_dir` and `html_template` are relative to `src_dir`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct LayoutOptions {
    /// Source directory, also the bundler context (default: "src")
    #[serde(default = "default_src_dir")]
    pub src_dir: PathBuf,

    /// Output directory, emptied before each build (default: "dist")
    #[serde(default = "default_output_dir")]
    pub out_dir: PathBuf,

    /// Static assets copied verbatim (default: "assets")
    #[serde(default = "default_assets_dir")]
    pub assets_dir: PathBuf,

    /// HTML template for the entry document (default: "index.html")
    #[serde(default = "default_html_template")]
    pub html_template: PathBuf,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            src_dir: default_src_dir(),
            out_dir: default_output_dir(),
            assets_dir: default_assets_dir(),
            html_template: default_html_template(),
        }
    }
}

/// Resolved, normalized project paths.
///
/// Resolution touches no filesystem state; existence checks live in
/// [`FsValidator`](crate::FsValidator).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    root: PathBuf,
    context: PathBuf,
    output: PathBuf,
    assets: PathBuf,
    html_template: PathBuf,
}

impl ProjectLayout {
    /// Resolve `options` against the project root.
    ///
    /// # Errors
    ///
    /// `ConfigError::InvalidPath` when a path is empty, or when the source
    /// and output directories are equal or nested in each other.
    ///
    /// # Example
    ///
    /// ```
    /// use kiln_config::{LayoutOptions, ProjectLayout};
    /// use std::path::Path;
    ///
    /// let layout = ProjectLayout::resolve("/work/site", &LayoutOptions::default()).unwrap();
    /// assert_eq!(layout.context(), Path::new("/work/site/src"));
    /// assert_eq!(layout.output(), Path::new("/work/site/dist"));
    /// ```
    pub fn resolve(root: impl AsRef<Path>, options: &LayoutOptions) -> Result<Self> {
        let root = root.as_ref();
        require_non_empty("root", root)?;
        require_non_empty("src_dir", &options.src_dir)?;
        require_non_empty("out_dir", &options.out_dir)?;
        require_non_empty("assets_dir", &options.assets_dir)?;
        require_non_empty("html_template", &options.html_template)?;

        let root = root.to_path_buf().clean();
        let context = root.join(&options.src_dir).clean();
        let output = root.join(&options.out_dir).clean();

        if context == output {
            return Err(ConfigError::InvalidPath {
                field: "out_dir",
                message: format!(
                    "output directory {} is the source directory",
                    output.display()
                ),
            });
        }
        if context.starts_with(&output) {
            return Err(ConfigError::InvalidPath {
                field: "out_dir",
                message: format!(
                    "output directory {} contains the source directory and would be cleaned",
                    output.display()
                ),
            });
        }
        if output.starts_with(&context) {
            return Err(ConfigError::InvalidPath {
                field: "out_dir",
                message: format!(
                    "output directory {} is inside the source directory {}",
                    output.display(),
                    context.display()
                ),
            });
        }

        let assets = context.join(&options.assets_dir).clean();
        let html_template = context.join(&options.html_template).clean();

        tracing::debug!(
            context = %context.display(),
            output = %output.display(),
            "resolved project layout"
        );

        Ok(Self {
            root,
            context,
            output,
            assets,
            html_template,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Source directory
    pub fn context(&self) -> &Path {
        &self.context
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    pub fn assets(&self) -> &Path {
        &self.assets
    }

    pub fn html_template(&self) -> &Path {
        &self.html_template
    }
}

fn require_non_empty(field: &'static str, path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(ConfigError::InvalidPath {
            field,
            message: "path cannot be empty".to_string(),
        });
    }
    Ok(())
}

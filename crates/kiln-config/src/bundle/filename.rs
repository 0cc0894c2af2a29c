//! Output filename templates.
//!
//! Development builds keep `name.ext`; production builds insert a hash of
//! the asset content.

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::mode::BuildMode;

/// Number of hex digits of the content hash kept in filenames.
pub const HASH_LENGTH: usize = 8;

/// Placeholder that keeps the source file extension.
pub const EXT_PLACEHOLDER: &str = "[ext]";

/// Hash asset content using SHA-256.
///
/// Returns the first [`HASH_LENGTH`] lowercase hex digits.
pub fn content_hash(content: &[u8]) -> String {
    let digest = Sha256::digest(content);
    let hex = format!("{:x}", digest);
    hex[..HASH_LENGTH].to_string()
}

/// Mapping from a logical asset name to its output path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilenameTemplate {
    mode: BuildMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    dir: Option<String>,
}

impl FilenameTemplate {
    pub fn new(mode: BuildMode) -> Self {
        Self { mode, dir: None }
    }

    /// Place rendered files under `dir` inside the output directory.
    pub fn in_dir(mut self, dir: impl Into<String>) -> Self {
        let dir = dir.into();
        let trimmed = dir.trim_matches('/');
        self.dir = (!trimmed.is_empty()).then(|| trimmed.to_string());
        self
    }

    pub fn mode(&self) -> BuildMode {
        self.mode
    }

    pub fn dir(&self) -> Option<&str> {
        self.dir.as_deref()
    }

    pub fn is_hashed(&self) -> bool {
        self.mode.is_production()
    }

    /// Render the output path for an asset.
    ///
    /// `content` is only read in production, where its hash becomes part of
    /// the filename.
    ///
    /// # Example
    ///
    /// ```
    /// use kiln_config::{BuildMode, FilenameTemplate};
    ///
    /// let dev = FilenameTemplate::new(BuildMode::Development);
    /// assert_eq!(dev.render("main", "js", b"console.log(1)"), "main.js");
    ///
    /// let prod = FilenameTemplate::new(BuildMode::Production).in_dir("js");
    /// let path = prod.render("main", "js", b"console.log(1)");
    /// assert!(path.starts_with("js/main."));
    /// assert!(path.ends_with(".js"));
    /// ```
    pub fn render(&self, name: &str, ext: &str, content: &[u8]) -> String {
        let ext = ext.trim_start_matches('.');
        let file = match self.mode {
            BuildMode::Development => format!("{name}.{ext}"),
            BuildMode::Production => format!("{name}.{}.{ext}", content_hash(content)),
        };
        self.prefixed(file)
    }

    /// Render the template with bundler placeholders instead of concrete
    /// values, e.g. `js/[name].[contenthash:8].js`.
    ///
    /// Pass [`EXT_PLACEHOLDER`] to keep the source extension.
    pub fn pattern(&self, ext: &str) -> String {
        let ext = if ext == EXT_PLACEHOLDER {
            ext
        } else {
            ext.trim_start_matches('.')
        };
        let file = match self.mode {
            BuildMode::Development => format!("[name].{ext}"),
            BuildMode::Production => format!("[name].[contenthash:{HASH_LENGTH}].{ext}"),
        };
        self.prefixed(file)
    }

    fn prefixed(&self, file: String) -> String {
        match &self.dir {
            Some(dir) => format!("{dir}/{file}"),
            None => file,
        }
    }
}

/// The templates used by one assembled configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssetTemplates {
    pub script: FilenameTemplate,
    pub style: FilenameTemplate,
    pub image: FilenameTemplate,
    pub font: FilenameTemplate,
    pub svg: FilenameTemplate,
}

impl AssetTemplates {
    pub fn for_mode(mode: BuildMode) -> Self {
        Self {
            script: FilenameTemplate::new(mode).in_dir("js"),
            style: FilenameTemplate::new(mode).in_dir("css"),
            image: FilenameTemplate::new(mode).in_dir("img"),
            font: FilenameTemplate::new(mode).in_dir("fonts"),
            svg: FilenameTemplate::new(mode).in_dir("assets"),
        }
    }
}

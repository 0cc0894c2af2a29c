use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::bundle::html::HtmlOptions;
use crate::bundle::rule::ExtensionPattern;

/// Identity of a build-lifecycle plugin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PluginKind {
    Html,
    CleanOutput,
    CopyAssets,
    CssExtract,
    ImageMinify,
    CssMinify,
}

impl PluginKind {
    /// Package that implements this plugin
    pub fn package(self) -> &'static str {
        match self {
            PluginKind::Html => "html-webpack-plugin",
            PluginKind::CleanOutput => "clean-webpack-plugin",
            PluginKind::CopyAssets => "copy-webpack-plugin",
            PluginKind::CssExtract => "mini-css-extract-plugin",
            PluginKind::ImageMinify => "imagemin-webpack-plugin",
            PluginKind::CssMinify => "css-minimizer-webpack-plugin",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CleanOptions {
    /// Directory emptied before the bundle is written
    pub path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CopyPattern {
    pub from: PathBuf,
    /// Destination relative to the output directory
    pub to: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CopyOptions {
    pub patterns: Vec<CopyPattern>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CssExtractOptions {
    /// Filename pattern of the extracted stylesheet
    pub filename: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageMinifyOptions {
    pub test: ExtensionPattern,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CssMinifyOptions {
    pub preset: String,
}

/// A plugin with its typed options
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "options", rename_all = "kebab-case")]
pub enum Plugin {
    Html(HtmlOptions),
    CleanOutput(CleanOptions),
    CopyAssets(CopyOptions),
    CssExtract(CssExtractOptions),
    ImageMinify(ImageMinifyOptions),
    CssMinify(CssMinifyOptions),
}

impl Plugin {
    pub fn kind(&self) -> PluginKind {
        match self {
            Plugin::Html(_) => PluginKind::Html,
            Plugin::CleanOutput(_) => PluginKind::CleanOutput,
            Plugin::CopyAssets(_) => PluginKind::CopyAssets,
            Plugin::CssExtract(_) => PluginKind::CssExtract,
            Plugin::ImageMinify(_) => PluginKind::ImageMinify,
            Plugin::CssMinify(_) => PluginKind::CssMinify,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PluginEntry {
    /// Whether the plugin should run in this build
    pub enabled: bool,

    #[serde(flatten)]
    pub plugin: Plugin,
}

impl PluginEntry {
    pub fn kind(&self) -> PluginKind {
        self.plugin.kind()
    }
}

/// Plugins in execution order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PluginList {
    entries: Vec<PluginEntry>,
}

impl PluginList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, plugin: Plugin, enabled: bool) {
        self.entries.push(PluginEntry { enabled, plugin });
    }

    pub fn iter(&self) -> impl Iterator<Item = &PluginEntry> {
        self.entries.iter()
    }

    /// Only the plugins that run in this build
    pub fn enabled(&self) -> impl Iterator<Item = &Plugin> {
        self.entries
            .iter()
            .filter(|entry| entry.enabled)
            .map(|entry| &entry.plugin)
    }

    pub fn get(&self, kind: PluginKind) -> Option<&PluginEntry> {
        self.entries.iter().find(|entry| entry.kind() == kind)
    }

    /// `false` for plugins that are disabled or absent
    pub fn is_enabled(&self, kind: PluginKind) -> bool {
        self.get(kind).is_some_and(|entry| entry.enabled)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

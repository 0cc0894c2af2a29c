//! The assembled build configuration and the assembler that produces it.

mod css;
mod filename;
pub(crate) mod helpers;
mod html;
mod layout;
mod plugin;
mod rule;
mod transform;
mod types;

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Value, json};
use std::path::PathBuf;

pub use css::CSS_IMPORT_LOADERS;
pub use filename::{AssetTemplates, EXT_PLACEHOLDER, FilenameTemplate, HASH_LENGTH, content_hash};
pub use html::{HtmlMinifyOptions, HtmlOptions};
pub use layout::{LayoutOptions, ProjectLayout};
pub use plugin::{
    CleanOptions, CopyOptions, CopyPattern, CssExtractOptions, CssMinifyOptions,
    ImageMinifyOptions, Plugin, PluginEntry, PluginKind, PluginList,
};
pub use rule::{ExtensionPattern, Loader, Rule, RuleOverlap, RuleSet, Step};
pub use transform::{BabelOptions, COREJS_VERSION, Preset, TYPESCRIPT_PRESET};
pub use types::{Minimizer, SourceMapOptions};

use crate::config::ProjectConfig;
use crate::dev::DevServerOptions;
use crate::error::Result;
use crate::mode::BuildMode;
use crate::validation::validate_schema;
use helpers::{default_html_filename, default_resolve_extensions};

/// Directory excluded from script transpilation
pub const VENDOR_DIR: &str = "node_modules";

/// Alias that resolves to the source directory in imports (`@/components/x`)
pub const SOURCE_ALIAS: &str = "@";

/// Everything the external bundler needs for one build
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Configuration {
    pub mode: BuildMode,

    /// Source directory; entry modules are resolved against it
    pub context: PathBuf,

    /// Named entry points
    pub entry: IndexMap<String, Vec<String>>,

    pub output: OutputOptions,

    pub dev_server: DevServerOptions,

    /// Source map generation
    pub devtool: SourceMapOptions,

    pub optimization: OptimizationOptions,

    pub resolve: ResolveOptions,

    pub plugins: PluginList,

    pub rules: RuleSet,

    #[serde(skip)]
    pub templates: AssetTemplates,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutputOptions {
    pub path: PathBuf,
    /// Script filename pattern
    pub filename: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptimizationOptions {
    pub minimize: bool,
    pub minimizers: Vec<Minimizer>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolveOptions {
    /// Extensions tried, in order, for extensionless imports
    pub extensions: Vec<String>,
    pub alias: IndexMap<String, PathBuf>,
}

impl Configuration {
    /// Convert to serde_json::Value
    pub fn to_value(&self) -> Result<Value> {
        serde_json::to_value(self).map_err(|e| crate::error::ConfigError::InvalidValue {
            field: "configuration".to_string(),
            message: e.to_string(),
        })
    }

    /// The rule that handles `path`, first match wins
    pub fn rule_for(&self, path: impl AsRef<std::path::Path>) -> Option<&Rule> {
        self.rules.match_path(path)
    }
}

/// Builds a [`Configuration`] from a resolved layout and project settings.
///
/// # Example
///
/// ```
/// use kiln_config::{Assembler, BuildMode, LayoutOptions, PluginKind, ProjectConfig, ProjectLayout};
///
/// let layout = ProjectLayout::resolve("/work/site", &LayoutOptions::default()).unwrap();
/// let mut project = ProjectConfig::default();
/// project.html.title = "Portfolio".to_string();
///
/// let config = Assembler::new(&layout)
///     .with_project(&project)
///     .assemble(BuildMode::Production)
///     .unwrap();
///
/// assert!(config.plugins.is_enabled(PluginKind::ImageMinify));
/// assert_eq!(config.output.filename, "js/[name].[contenthash:8].js");
/// ```
pub struct Assembler<'a> {
    layout: &'a ProjectLayout,
    project: Option<&'a ProjectConfig>,
}

impl<'a> Assembler<'a> {
    pub fn new(layout: &'a ProjectLayout) -> Self {
        Self {
            layout,
            project: None,
        }
    }

    pub fn with_project(mut self, project: &'a ProjectConfig) -> Self {
        self.project = Some(project);
        self
    }

    /// Assemble the configuration for `mode`.
    ///
    /// Pure: no filesystem access. The result has passed schema validation.
    pub fn assemble(&self, mode: BuildMode) -> Result<Configuration> {
        let defaults;
        let project = match self.project {
            Some(project) => project,
            None => {
                defaults = ProjectConfig::default();
                &defaults
            }
        };

        let templates = AssetTemplates::for_mode(mode);
        let layout = self.layout;

        let mut alias = IndexMap::new();
        alias.insert(SOURCE_ALIAS.to_string(), layout.context().to_path_buf());

        let config = Configuration {
            mode,
            context: layout.context().to_path_buf(),
            entry: project.entry.clone(),
            output: OutputOptions {
                path: layout.output().to_path_buf(),
                filename: templates.script.pattern("js"),
            },
            dev_server: project.dev_server.clone(),
            devtool: match mode {
                BuildMode::Development => SourceMapOptions::Inline,
                BuildMode::Production => SourceMapOptions::None,
            },
            optimization: OptimizationOptions {
                minimize: mode.is_production(),
                minimizers: vec![Minimizer::Defaults, Minimizer::Css],
            },
            resolve: ResolveOptions {
                extensions: default_resolve_extensions(),
                alias,
            },
            plugins: build_plugins(mode, layout, project, &templates),
            rules: build_rules(mode, &templates),
            templates,
        };

        validate_schema(&config)?;

        tracing::debug!(
            mode = %mode,
            rules = config.rules.len(),
            plugins = config.plugins.enabled().count(),
            "assembled build configuration"
        );

        Ok(config)
    }
}

/// Assemble with default project settings.
///
/// # Example
///
/// ```
/// use kiln_config::{BuildMode, LayoutOptions, ProjectLayout, assemble};
///
/// let layout = ProjectLayout::resolve("/work/site", &LayoutOptions::default()).unwrap();
/// let config = assemble(BuildMode::Development, &layout).unwrap();
/// assert_eq!(config.output.filename, "js/[name].js");
/// ```
pub fn assemble(mode: BuildMode, layout: &ProjectLayout) -> Result<Configuration> {
    Assembler::new(layout).assemble(mode)
}

fn build_plugins(
    mode: BuildMode,
    layout: &ProjectLayout,
    project: &ProjectConfig,
    templates: &AssetTemplates,
) -> PluginList {
    let production = mode.is_production();
    let mut plugins = PluginList::new();

    let mut template_parameters = IndexMap::new();
    template_parameters.insert(
        "title".to_string(),
        Value::String(project.html.title.clone()),
    );

    plugins.push(
        Plugin::Html(HtmlOptions {
            template: layout.html_template().to_path_buf(),
            filename: default_html_filename(),
            template_parameters,
            minify: HtmlMinifyOptions {
                collapse_whitespace: production,
            },
        }),
        true,
    );
    plugins.push(
        Plugin::CleanOutput(CleanOptions {
            path: layout.output().to_path_buf(),
        }),
        true,
    );
    plugins.push(
        Plugin::CopyAssets(CopyOptions {
            patterns: vec![CopyPattern {
                from: layout.assets().to_path_buf(),
                to: PathBuf::from("assets"),
            }],
        }),
        true,
    );
    plugins.push(
        Plugin::CssExtract(CssExtractOptions {
            filename: templates.style.pattern("css"),
        }),
        true,
    );
    plugins.push(
        Plugin::ImageMinify(ImageMinifyOptions {
            test: ExtensionPattern::new(["jpg", "jpeg", "png", "gif", "svg"]),
        }),
        production,
    );
    plugins.push(
        Plugin::CssMinify(CssMinifyOptions {
            preset: "default".to_string(),
        }),
        production,
    );

    plugins
}

fn build_rules(mode: BuildMode, templates: &AssetTemplates) -> RuleSet {
    let file_step = |template: &FilenameTemplate| {
        Step::with_options(
            Loader::File,
            json!({ "name": template.pattern(EXT_PLACEHOLDER) }),
        )
    };

    [
        Rule::new("javascript", ExtensionPattern::new(["js"]))
            .exclude(VENDOR_DIR)
            .step(Step::with_options(
                Loader::Babel,
                BabelOptions::with_env_preset(None).to_value(),
            )),
        Rule::new("typescript", ExtensionPattern::new(["ts"]))
            .exclude(VENDOR_DIR)
            .step(Step::with_options(
                Loader::Babel,
                BabelOptions::with_env_preset(Some(TYPESCRIPT_PRESET)).to_value(),
            )),
        Rule {
            steps: css::stylesheet_steps(mode.is_production()),
            ..Rule::new("stylesheets", ExtensionPattern::new(["css", "sass", "scss"]))
        },
        Rule::new(
            "images",
            ExtensionPattern::new(["ico", "gif", "png", "jpg", "jpeg"]),
        )
        .step(file_step(&templates.image)),
        Rule::new(
            "fonts",
            ExtensionPattern::new(["woff", "woff2", "eot", "ttf", "otf"]),
        )
        .step(file_step(&templates.font)),
        Rule::new("svg", ExtensionPattern::new(["svg"])).step(file_step(&templates.svg)),
    ]
    .into_iter()
    .collect()
}

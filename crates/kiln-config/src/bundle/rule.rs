//! File-transformation rules.
//!
//! A rule pairs an extension pattern with an ordered chain of loader steps.
//! Steps compose right-to-left: the last declared step reads the raw file
//! and the first declared step produces the final module.
//!
//! When several rules claim the same extension the first one declared wins.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Opaque transformation stage provided by the external toolchain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Loader {
    /// Script transpilation (preset-env, TypeScript)
    Babel,
    /// Moves compiled CSS out of the script bundle into its own file
    CssExtract,
    /// Resolves `@import` and turns CSS into a module
    Css,
    /// PostCSS pipeline (autoprefixer)
    PostCss,
    /// Rewrites relative `url()` references after preprocessing
    ResolveUrl,
    /// Sass/SCSS preprocessor
    Sass,
    /// Stylesheet minification
    CssMinimize,
    /// Emits the file unchanged under a templated name
    File,
}

impl Loader {
    /// Package that implements this stage.
    pub fn package(self) -> &'static str {
        match self {
            Loader::Babel => "babel-loader",
            Loader::CssExtract => "mini-css-extract-plugin/loader",
            Loader::Css => "css-loader",
            Loader::PostCss => "postcss-loader",
            Loader::ResolveUrl => "resolve-url-loader",
            Loader::Sass => "sass-loader",
            Loader::CssMinimize => "css-minimizer-webpack-plugin",
            Loader::File => "file-loader",
        }
    }
}

/// One loader invocation with its options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub loader: Loader,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub options: Value,
}

impl Step {
    pub fn new(loader: Loader) -> Self {
        Self {
            loader,
            options: Value::Null,
        }
    }

    pub fn with_options(loader: Loader, options: Value) -> Self {
        Self { loader, options }
    }
}

/// Matches files by their final extension (case-sensitive).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExtensionPattern {
    extensions: Vec<String>,
}

impl ExtensionPattern {
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            extensions: extensions
                .into_iter()
                .map(|ext| ext.into().trim_start_matches('.').to_string())
                .collect(),
        }
    }

    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }

    pub fn matches(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|candidate| candidate == ext))
    }

    /// Regex form for consumers that match on full paths, e.g. `\.(css|scss)$`.
    ///
    /// Extensions are matched literally.
    pub fn to_regex(&self) -> String {
        let escaped: Vec<String> = self.extensions.iter().map(|ext| regex::escape(ext)).collect();
        match escaped.as_slice() {
            [single] => format!(r"\.{single}$"),
            many => format!(r"\.({})$", many.join("|")),
        }
    }
}

/// An extension pattern with its ordered transformation chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub name: String,
    pub test: ExtensionPattern,
    /// Path components that disable the rule (e.g. `node_modules`)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclude: Vec<String>,
    pub steps: Vec<Step>,
}

impl Rule {
    pub fn new(name: impl Into<String>, test: ExtensionPattern) -> Self {
        Self {
            name: name.into(),
            test,
            exclude: Vec::new(),
            steps: Vec::new(),
        }
    }

    pub fn exclude(mut self, component: impl Into<String>) -> Self {
        self.exclude.push(component.into());
        self
    }

    pub fn step(mut self, step: Step) -> Self {
        self.steps.push(step);
        self
    }

    pub fn matches(&self, path: &Path) -> bool {
        if !self.test.matches(path) {
            return false;
        }
        !path.components().any(|component| {
            let component = component.as_os_str();
            self.exclude.iter().any(|excluded| component == excluded.as_str())
        })
    }

    /// Loaders in declaration order.
    pub fn loaders(&self) -> Vec<Loader> {
        self.steps.iter().map(|step| step.loader).collect()
    }

    pub fn step_for(&self, loader: Loader) -> Option<&Step> {
        self.steps.iter().find(|step| step.loader == loader)
    }

    /// Steps in the order they process a raw file (last declared first).
    pub fn application_order(&self) -> impl Iterator<Item = &Step> {
        self.steps.iter().rev()
    }
}

/// Extension claimed by more than one rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleOverlap {
    pub extension: String,
    /// Rule names in declaration order; the first one wins
    pub rules: Vec<String>,
}

/// Ordered rule list with first-match-wins lookup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.name == name)
    }

    /// The rule that handles `path`: the first declared rule that matches.
    pub fn match_path(&self, path: impl AsRef<Path>) -> Option<&Rule> {
        let path = path.as_ref();
        self.rules.iter().find(|rule| rule.matches(path))
    }

    /// Extensions matched by more than one rule, sorted by extension.
    pub fn overlaps(&self) -> Vec<RuleOverlap> {
        let mut claims: BTreeMap<&str, Vec<String>> = BTreeMap::new();
        for rule in &self.rules {
            for ext in rule.test.extensions() {
                let owners = claims.entry(ext.as_str()).or_default();
                if !owners.contains(&rule.name) {
                    owners.push(rule.name.clone());
                }
            }
        }

        claims
            .into_iter()
            .filter(|(_, rules)| rules.len() > 1)
            .map(|(extension, rules)| RuleOverlap {
                extension: extension.to_string(),
                rules,
            })
            .collect()
    }
}

impl FromIterator<Rule> for RuleSet {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn styles() -> Rule {
        Rule::new("styles", ExtensionPattern::new(["css", "scss"]))
            .step(Step::new(Loader::Css))
            .step(Step::new(Loader::Sass))
    }

    #[test]
    fn pattern_matches_final_extension_only() {
        let pattern = ExtensionPattern::new([".css", "scss"]);
        assert!(pattern.matches(Path::new("src/app.css")));
        assert!(pattern.matches(Path::new("theme.scss")));
        assert!(!pattern.matches(Path::new("app.css.map")));
        assert!(!pattern.matches(Path::new("APP.CSS")));
        assert!(!pattern.matches(Path::new("Makefile")));
    }

    #[test]
    fn regex_rendering() {
        assert_eq!(ExtensionPattern::new(["js"]).to_regex(), r"\.js$");
        assert_eq!(
            ExtensionPattern::new(["css", "sass", "scss"]).to_regex(),
            r"\.(css|sass|scss)$"
        );
    }

    #[test]
    fn regex_escapes_metacharacters() {
        assert_eq!(ExtensionPattern::new(["c++"]).to_regex(), r"\.c\+\+$");
        assert_eq!(
            ExtensionPattern::new(["d.ts", "m[j]s"]).to_regex(),
            r"\.(d\.ts|m\[j\]s)$"
        );
    }

    #[test]
    fn excluded_components_disable_rule() {
        let rule = Rule::new("javascript", ExtensionPattern::new(["js"])).exclude("node_modules");
        assert!(rule.matches(Path::new("src/index.js")));
        assert!(!rule.matches(Path::new("node_modules/lodash/index.js")));
        assert!(rule.matches(Path::new("src/node_modules_shim.js")));
    }

    #[test]
    fn application_order_is_reversed() {
        let rule = styles();
        let applied: Vec<_> = rule.application_order().map(|s| s.loader).collect();
        assert_eq!(applied, vec![Loader::Sass, Loader::Css]);
        assert_eq!(rule.loaders(), vec![Loader::Css, Loader::Sass]);
    }

    #[test]
    fn first_match_wins() {
        let rules: RuleSet = [
            styles(),
            Rule::new("plain-css", ExtensionPattern::new(["css"])).step(Step::new(Loader::File)),
        ]
        .into_iter()
        .collect();

        assert_eq!(rules.match_path("a.css").unwrap().name, "styles");
        assert!(rules.match_path("a.png").is_none());

        let overlaps = rules.overlaps();
        assert_eq!(
            overlaps,
            vec![RuleOverlap {
                extension: "css".to_string(),
                rules: vec!["styles".to_string(), "plain-css".to_string()],
            }]
        );
    }

    #[test]
    fn step_serialization_omits_null_options() {
        let value = serde_json::to_value(Step::new(Loader::ResolveUrl)).unwrap();
        assert_eq!(value, json!({ "loader": "resolve-url" }));

        let value =
            serde_json::to_value(Step::with_options(Loader::Sass, json!({ "sourceMap": true })))
                .unwrap();
        assert_eq!(value["options"]["sourceMap"], json!(true));
    }

    #[test]
    fn loader_packages() {
        assert_eq!(Loader::PostCss.package(), "postcss-loader");
        assert_eq!(Loader::File.package(), "file-loader");
    }
}

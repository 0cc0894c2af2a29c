use serde::{Deserialize, Serialize};

/// Source map generation options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceMapOptions {
    /// No source maps
    #[default]
    None,
    /// Inline source maps (base64)
    Inline,
}

/// Minimizers run during the optimization phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Minimizer {
    /// The bundler's built-in script minimizers
    Defaults,
    /// Stylesheet minimizer
    Css,
}

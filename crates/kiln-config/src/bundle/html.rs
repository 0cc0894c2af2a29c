use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;
use std::path::PathBuf;

/// HTML entry document options
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HtmlOptions {
    /// Template the document is rendered from
    pub template: PathBuf,

    /// Output filename for generated HTML (default: "index.html")
    pub filename: String,

    /// Variables available to the template (`title` at least)
    pub template_parameters: IndexMap<String, Value>,

    pub minify: HtmlMinifyOptions,
}

impl HtmlOptions {
    pub fn title(&self) -> Option<&str> {
        self.template_parameters.get("title").and_then(Value::as_str)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct HtmlMinifyOptions {
    pub collapse_whitespace: bool,
}

use std::path::PathBuf;

use indexmap::IndexMap;

// Helper defaults
pub(crate) fn default_src_dir() -> PathBuf {
    PathBuf::from("src")
}

pub(crate) fn default_output_dir() -> PathBuf {
    PathBuf::from("dist")
}

pub(crate) fn default_assets_dir() -> PathBuf {
    PathBuf::from("assets")
}

pub(crate) fn default_html_template() -> PathBuf {
    PathBuf::from("index.html")
}

pub(crate) fn default_html_filename() -> String {
    "index.html".to_string()
}

pub(crate) fn default_title() -> String {
    "webpack Boilerplate".to_string()
}

pub(crate) fn default_entries() -> IndexMap<String, Vec<String>> {
    let mut entries = IndexMap::new();
    entries.insert(
        "main".to_string(),
        vec![
            "whatwg-fetch".to_string(),
            "core-js/features/promise".to_string(),
            "./index.js".to_string(),
        ],
    );
    entries
}

pub(crate) fn default_resolve_extensions() -> Vec<String> {
    [".mjs", ".js", ".jsx", ".ts", ".tsx", ".json"]
        .into_iter()
        .map(String::from)
        .collect()
}

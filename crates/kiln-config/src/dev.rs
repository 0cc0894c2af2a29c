//! Development server options forwarded to the bundler's dev server.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DevServerOptions {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Open a browser once the server is listening
    #[serde(default = "default_true")]
    pub open: bool,

    /// Gzip responses
    #[serde(default = "default_true")]
    pub compress: bool,

    /// Serve `index.html` for unknown routes (client-side routing)
    #[serde(default = "default_true")]
    pub history_api_fallback: bool,
}

impl Default for DevServerOptions {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            open: true,
            compress: true,
            history_api_fallback: true,
        }
    }
}

fn default_host() -> String {
    "localhost".into()
}

fn default_port() -> u16 {
    3000
}

fn default_true() -> bool {
    true
}

//! Global settings shared across profiles.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct GlobalSettings {
    /// Default log filter when neither flags nor `RUST_LOG` set one
    #[serde(default)]
    pub log_level: Option<String>,
}

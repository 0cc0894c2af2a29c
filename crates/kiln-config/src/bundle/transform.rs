//! Script transpilation options.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Preset that pulls in TypeScript syntax support.
pub const TYPESCRIPT_PRESET: &str = "@babel/preset-typescript";

/// core-js major version used for polyfill injection
pub const COREJS_VERSION: u8 = 3;

/// Transpiler preset with its options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    pub name: String,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub options: Value,
}

/// Transpiler options for one script rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BabelOptions {
    pub presets: Vec<Preset>,
}

impl BabelOptions {
    /// `@babel/preset-env` with usage-based core-js polyfills, optionally
    /// followed by one extra preset.
    pub fn with_env_preset(extra: Option<&str>) -> Self {
        let mut presets = vec![Preset {
            name: "@babel/preset-env".to_string(),
            options: json!({
                "corejs": COREJS_VERSION,
                "useBuiltIns": "usage",
            }),
        }];

        if let Some(name) = extra {
            presets.push(Preset {
                name: name.to_string(),
                options: Value::Null,
            });
        }

        Self { presets }
    }

    pub fn has_preset(&self, name: &str) -> bool {
        self.presets.iter().any(|preset| preset.name == name)
    }

    pub fn to_value(&self) -> Value {
        let presets = self
            .presets
            .iter()
            .map(|preset| {
                if preset.options.is_null() {
                    Value::String(preset.name.clone())
                } else {
                    json!([preset.name, preset.options])
                }
            })
            .collect();
        json!({ "presets": Value::Array(presets) })
    }
}

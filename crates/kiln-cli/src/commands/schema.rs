//! Schema command implementation.

use kiln_config::ProjectConfig;

use crate::error::Result;

/// Print the JSON Schema of `kiln.toml` on stdout.
pub fn execute() -> Result<()> {
    let schema = serde_json::to_string_pretty(&ProjectConfig::json_schema())?;
    println!("{schema}");
    Ok(())
}

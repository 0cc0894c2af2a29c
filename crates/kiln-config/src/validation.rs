//! Pluggable config validation strategies
//!
//! Separates filesystem validation (for CLI use) from schema validation,
//! which the assembler runs on every configuration it returns.

use std::collections::HashSet;
use std::path::Path;

use crate::bundle::{Configuration, Plugin};
use crate::error::{ConfigError, Result};

/// Trait for pluggable config validation strategies
pub trait ConfigValidator {
    fn validate(&self, config: &Configuration) -> Result<()>;
}

/// Schema-only validation (no filesystem checks)
///
/// # Example
///
/// ```
/// use kiln_config::{BuildMode, ConfigValidator, LayoutOptions, ProjectLayout, SchemaValidator, assemble};
///
/// let layout = ProjectLayout::resolve("/work/site", &LayoutOptions::default()).unwrap();
/// let config = assemble(BuildMode::Development, &layout).unwrap();
///
/// SchemaValidator.validate(&config).unwrap();
/// ```
pub struct SchemaValidator;

impl ConfigValidator for SchemaValidator {
    fn validate(&self, config: &Configuration) -> Result<()> {
        if config.entry.is_empty() {
            return Err(ConfigError::NoEntries);
        }

        for (name, modules) in &config.entry {
            if name.trim().is_empty() {
                return Err(ConfigError::SchemaValidation {
                    message: "entry names cannot be empty".to_string(),
                });
            }
            if modules.is_empty() || modules.iter().any(|module| module.trim().is_empty()) {
                return Err(ConfigError::SchemaValidation {
                    message: format!("entry '{name}' must list at least one non-empty module"),
                });
            }
        }

        for rule in &config.rules {
            if rule.name.trim().is_empty() {
                return Err(ConfigError::SchemaValidation {
                    message: "rule names cannot be empty".to_string(),
                });
            }
            if rule.test.is_empty() || rule.test.extensions().iter().any(|ext| ext.is_empty()) {
                return Err(ConfigError::SchemaValidation {
                    message: format!("rule '{}' must match at least one extension", rule.name),
                });
            }
            if rule.steps.is_empty() {
                return Err(ConfigError::SchemaValidation {
                    message: format!("rule '{}' has no transformation steps", rule.name),
                });
            }
        }

        for overlap in config.rules.overlaps() {
            tracing::warn!(
                extension = %overlap.extension,
                rules = ?overlap.rules,
                "extension matched by several rules; the first one wins"
            );
        }

        let mut seen = HashSet::new();
        for entry in config.plugins.iter() {
            if !seen.insert(entry.kind()) {
                return Err(ConfigError::SchemaValidation {
                    message: format!("plugin '{}' is configured twice", entry.kind().package()),
                });
            }
        }

        Ok(())
    }
}

/// Filesystem validator (for CLI use)
///
/// Runs [`SchemaValidator`] first, then checks that the source directory,
/// HTML template and copied asset directories exist, and that the output
/// directory can be created.
pub struct FsValidator;

impl ConfigValidator for FsValidator {
    fn validate(&self, config: &Configuration) -> Result<()> {
        SchemaValidator.validate(config)?;

        if !config.context.exists() {
            return Err(ConfigError::SourceDirNotFound {
                path: config.context.clone(),
            });
        }
        require_dir(&config.context)?;

        let output = &config.output.path;
        if output.exists() {
            require_dir(output)?;
        } else {
            let parent_exists = output.parent().is_some_and(Path::exists);
            if !parent_exists {
                return Err(ConfigError::OutputParentNotFound {
                    path: output.clone(),
                });
            }
        }

        for plugin in config.plugins.enabled() {
            match plugin {
                Plugin::Html(html) if !html.template.is_file() => {
                    return Err(ConfigError::TemplateNotFound {
                        path: html.template.clone(),
                    });
                }
                Plugin::CopyAssets(copy) => {
                    for pattern in &copy.patterns {
                        if !pattern.from.exists() {
                            return Err(ConfigError::AssetsDirNotFound {
                                path: pattern.from.clone(),
                            });
                        }
                    }
                }
                _ => {}
            }
        }

        tracing::debug!(context = %config.context.display(), "filesystem layout is valid");
        Ok(())
    }
}

fn require_dir(path: &Path) -> Result<()> {
    if !path.is_dir() {
        return Err(ConfigError::NotADirectory {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

/// Convenience function for schema-only validation
pub fn validate_schema(config: &Configuration) -> Result<()> {
    SchemaValidator.validate(config)
}

/// Convenience function for filesystem validation
pub fn validate_fs(config: &Configuration) -> Result<()> {
    FsValidator.validate(config)
}

//! Check command implementation.
//!
//! Validates the project layout and reports what the assembled pipeline
//! contains without printing the full configuration.

use std::path::PathBuf;

use kiln_config::{BuildMode, Configuration, PluginKind, RuleOverlap, validate_fs};

use crate::cli::{CheckArgs, GlobalArgs};
use crate::config::Project;
use crate::error::Result;
use crate::ui;

/// Outcome of a successful check.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckReport {
    pub mode: BuildMode,
    pub source: Option<PathBuf>,
    pub entries: Vec<String>,
    pub plugins: Vec<PluginKind>,
    /// Rule names with their loader packages in application order
    pub rules: Vec<(String, Vec<&'static str>)>,
    pub overlaps: Vec<RuleOverlap>,
}

/// Execute the check command.
///
/// # Errors
///
/// Returns the first mode, layout, project file or filesystem error.
pub fn execute(args: CheckArgs, global: &GlobalArgs) -> Result<()> {
    ui::info("Checking project...");

    let project = Project::load(global)?;
    let report = check(&project)?;
    print_report(&report, &args);

    ui::success("Project is valid");
    Ok(())
}

/// Assemble and validate `project`, collecting a summary.
pub fn check(project: &Project) -> Result<CheckReport> {
    let config = project.assemble()?;
    validate_fs(&config)?;
    Ok(summarize(project, &config))
}

fn summarize(project: &Project, config: &Configuration) -> CheckReport {
    CheckReport {
        mode: config.mode,
        source: project.source.clone(),
        entries: config.entry.keys().cloned().collect(),
        plugins: config.plugins.iter().filter(|e| e.enabled).map(|e| e.kind()).collect(),
        rules: config
            .rules
            .iter()
            .map(|rule| {
                let loaders = rule
                    .application_order()
                    .map(|step| step.loader.package())
                    .collect();
                (rule.name.clone(), loaders)
            })
            .collect(),
        overlaps: config.rules.overlaps(),
    }
}

fn print_report(report: &CheckReport, args: &CheckArgs) {
    let source = report
        .source
        .as_ref()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "defaults".to_string());
    let plugins: Vec<_> = report.plugins.iter().map(|kind| kind.package()).collect();

    ui::summary_line("mode", report.mode.as_str());
    ui::summary_line("config", &source);
    ui::summary_line("entries", &report.entries.join(", "));
    ui::summary_line("plugins", &plugins.join(", "));

    if args.loaders {
        for (name, loaders) in &report.rules {
            ui::summary_line(name, &loaders.join(" → "));
        }
    } else {
        let names: Vec<_> = report.rules.iter().map(|(name, _)| name.as_str()).collect();
        ui::summary_line("rules", &names.join(", "));
    }

    for overlap in &report.overlaps {
        ui::warning(&format!(
            "'.{}' is matched by {}; '{}' wins",
            overlap.extension,
            overlap.rules.join(", "),
            overlap.rules.first().map(String::as_str).unwrap_or_default()
        ));
    }
}

//! Inspect command implementation.

use kiln_config::validate_fs;

use crate::cli::{GlobalArgs, InspectArgs};
use crate::config::Project;
use crate::error::Result;

/// Execute the inspect command.
///
/// Prints the configuration as JSON on stdout. Filesystem checks run
/// unless `--no-fs-check` is given.
pub fn execute(args: InspectArgs, global: &GlobalArgs) -> Result<()> {
    let project = Project::load(global)?;
    println!("{}", render(&project, &args)?);
    Ok(())
}

/// Assemble, validate and serialize the configuration of `project`.
pub fn render(project: &Project, args: &InspectArgs) -> Result<String> {
    let config = project.assemble()?;
    if !args.no_fs_check {
        validate_fs(&config)?;
    }

    let value = config.to_value()?;
    let json = if args.compact {
        serde_json::to_string(&value)?
    } else {
        serde_json::to_string_pretty(&value)?
    };
    Ok(json)
}

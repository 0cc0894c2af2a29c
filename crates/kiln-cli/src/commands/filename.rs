//! Filename command implementation.

use kiln_config::BuildMode;

use crate::cli::{FilenameArgs, GlobalArgs};
use crate::config::resolve_mode;
use crate::error::{CliError, Result, ResultExt};

/// Execute the filename command.
pub fn execute(args: FilenameArgs, global: &GlobalArgs) -> Result<()> {
    let mode = resolve_mode(global.mode)?;
    println!("{}", render(&args, mode)?);
    Ok(())
}

/// Render the output filename for `args` in `mode`.
///
/// Only production reads the file, since only production filenames carry a
/// content hash.
pub fn render(args: &FilenameArgs, mode: BuildMode) -> Result<String> {
    if args.name.is_empty() || args.ext.trim_start_matches('.').is_empty() {
        return Err(CliError::InvalidArgument(
            "asset name and extension cannot be empty".to_string(),
        ));
    }

    let template = args.kind.template(mode);
    let content = match (&args.file, template.is_hashed()) {
        (Some(path), true) => std::fs::read(path).with_path(path)?,
        (None, true) => {
            return Err(CliError::InvalidArgument(
                "--file is required in production, the filename embeds a content hash"
                    .to_string(),
            ));
        }
        (_, false) => Vec::new(),
    };

    Ok(template.render(&args.name, &args.ext, &content))
}

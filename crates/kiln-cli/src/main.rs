//! Kiln CLI entry point: argument parsing, logging setup and command dispatch.

use clap::Parser;
use kiln_cli::{cli, commands, config, error, logger, ui};
use miette::Result;

fn main() -> Result<()> {
    let args = cli::Cli::parse();
    let global = args.global_args();

    ui::init_colors(args.no_color);
    let no_color = args.no_color || !ui::should_use_color();
    let project_level = config::log_level_hint(&global);
    logger::init_logger(args.verbose, args.quiet, no_color, project_level.as_deref());

    commands::run(args.command, &global).map_err(error::cli_error_to_miette)
}

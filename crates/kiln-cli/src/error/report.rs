//! Miette diagnostic conversion for CLI errors.

use crate::error::CliError;
use miette::Report;

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err.hint() {
        Some(hint) => miette::miette!(help = hint, "{}", err),
        None => miette::miette!("{}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kiln_config::ConfigError;
    use miette::Diagnostic;

    #[test]
    fn test_report_carries_help() {
        let report = cli_error_to_miette(CliError::Config(ConfigError::NoEntries));
        assert_eq!(report.to_string(), "no entries specified");
        assert!(report.help().is_some());
    }

    #[test]
    fn test_report_without_help() {
        let report = cli_error_to_miette(CliError::Io(std::io::Error::other("boom")));
        assert_eq!(report.to_string(), "I/O error: boom");
        assert!(report.help().is_none());
    }
}

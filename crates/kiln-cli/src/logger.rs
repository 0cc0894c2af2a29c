//! Logging infrastructure for the Kiln CLI.
//!
//! Log lines go to stderr so that `kiln inspect` output on stdout stays valid
//! JSON.
//!
//! # Example
//!
//! ```rust,no_run
//! use kiln_cli::logger::init_logger;
//!
//! init_logger(false, false, false, None);
//! tracing::info!("assembling configuration");
//! ```

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const KILN_TARGETS: [&str; 2] = ["kiln_config", "kiln_cli"];

/// Initialize the tracing subscriber.
///
/// The filter is chosen in this order:
/// 1. `--verbose`: debug for the kiln crates
/// 2. `--quiet`: errors only
/// 3. `RUST_LOG`
/// 4. `settings.log_level` from the project file
/// 5. info for the kiln crates
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool, project_level: Option<&str>) {
    let filter = build_filter(verbose, quiet, project_level);

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    // A second call (tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

fn build_filter(verbose: bool, quiet: bool, project_level: Option<&str>) -> EnvFilter {
    if verbose {
        return EnvFilter::new(directives("debug"));
    }
    if quiet {
        return EnvFilter::new("error");
    }
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    project_level
        .and_then(|level| EnvFilter::try_new(directives(level)).ok())
        .unwrap_or_else(|| EnvFilter::new(directives("info")))
}

fn directives(level: &str) -> String {
    KILN_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

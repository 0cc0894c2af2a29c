//! Status message functions for terminal output.

use owo_colors::{OwoColorize, Stream::Stderr};

/// Print a success message to stderr.
pub fn success(message: &str) {
    eprintln!(
        "{} {}",
        "✓".if_supports_color(Stderr, |s| s.green().bold().to_string()),
        message
    );
}

/// Print an info message to stderr.
pub fn info(message: &str) {
    eprintln!(
        "{} {}",
        "ℹ".if_supports_color(Stderr, |s| s.blue().bold().to_string()),
        message
    );
}

/// Print a warning message to stderr.
pub fn warning(message: &str) {
    eprintln!(
        "{} {}",
        "⚠".if_supports_color(Stderr, |s| s.yellow().bold().to_string()),
        message.if_supports_color(Stderr, |s| s.yellow())
    );
}

/// Print an indented `label  value` line to stderr.
pub fn summary_line(label: &str, value: &str) {
    eprintln!(
        "  {} {}",
        format!("{label:<12}").if_supports_color(Stderr, |s| s.dimmed()),
        value
    );
}

//! Terminal output for the CLI.
//!
//! Everything except the final version goes to stderr, so the version can be
//! captured from stdout by a release pipeline.

use crate::cli::Resolution;
use console::style;

pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

pub fn display_success(message: &str) {
    eprintln!("{} {}", style("✓").green(), message);
}

pub fn display_status(message: &str) {
    eprintln!("{} {}", style("→").yellow(), message);
}

/// Print the version for the pipeline to capture
pub fn display_version(version: &str) {
    println!("{}", version);
}

/// Summarize how the version was derived.
pub fn display_resolution(resolution: &Resolution) {
    eprintln!("\n{}", style("Version resolution:").bold());
    eprintln!(
        "  Previous release:    {}",
        describe(resolution.previous_release.as_ref())
    );
    eprintln!(
        "  Previous prerelease: {}",
        describe(resolution.previous_prerelease.as_ref())
    );
    eprintln!(
        "  Computed:            {}",
        style(&resolution.computed_version).cyan()
    );

    if resolution.overridden() {
        eprintln!(
            "  Hook override:       {}",
            style(&resolution.version).green()
        );
    } else {
        eprintln!("  Next version:        {}", style(&resolution.version).green());
    }
}

fn describe<T: std::fmt::Display>(value: Option<&T>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => style("none").dim().to_string(),
    }
}

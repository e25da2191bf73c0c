//! Output formatting
//!
//! Status prefixes, the end-of-run summary and fatal error reporting.

use crate::config::tools::BOM_FILENAME;
use crate::core::python_build::{BuildOutcome, RunReport};
use crate::error::ErrorCategory;

/// Status message prefixes
pub mod status {
    /// Success prefix (green checkmark)
    pub const SUCCESS: &str = "✓";

    /// Warning prefix (yellow triangle)
    pub const WARNING: &str = "⚠";

    /// Info prefix (blue circle)
    pub const INFO: &str = "ℹ";

    /// Skipped phase
    pub const SKIPPED: &str = "-";
}

/// Lines describing a finished run
pub fn summary_lines(report: &RunReport) -> Vec<String> {
    let mut lines = Vec::with_capacity(3);

    lines.push(match &report.build {
        BuildOutcome::Built => format!("{} Build succeeded", status::SUCCESS),
        BuildOutcome::Skipped => format!(
            "{} Build skipped (no setup.py or setup.cfg)",
            status::SKIPPED
        ),
        BuildOutcome::Failed(e) => format!("{} Build failed: {e}", status::WARNING),
    });

    lines.push(if report.bom_created {
        format!("{} BOM created ({BOM_FILENAME})", status::SUCCESS)
    } else {
        format!("{} BOM not requested", status::SKIPPED)
    });

    lines.push(if report.published {
        format!("{} Published", status::SUCCESS)
    } else {
        format!("{} Publish not requested", status::SKIPPED)
    });

    lines
}

/// Print the summary to stdout
pub fn print_summary(report: &RunReport) {
    println!();
    for line in summary_lines(report) {
        println!("{line}");
    }
}

/// Classify and log a terminal error
pub fn log_fatal(error: &anyhow::Error) -> ErrorCategory {
    let category = ErrorCategory::of(error);
    tracing::error!(error_category = %category, "step execution failed: {error}");
    category
}

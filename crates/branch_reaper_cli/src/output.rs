//! Console rendering of sweep progress and results.
//!
//! Human-readable mode prints one line per processed branch as events arrive
//! and a short summary at the end. The renderers return strings so they can
//! be asserted on directly; the `print_*` wrappers only write them out.

use branch_reaper_core::{Error as CoreError, RunResult, SweepEvent};
use colored::Colorize;
use gitlab_client::FailureKind;

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;

/// Renders one progress line for a sweep event.
pub fn event_line(event: &SweepEvent) -> String {
    match event {
        SweepEvent::Previewed { name } => format!("{} {}", "would delete".yellow(), name),
        SweepEvent::Deleted { name } => format!("{} {}", "deleted".green(), name),
        SweepEvent::Failed { name, error } => {
            format!("{} {}: {}", "failed".red(), name, error)
        }
    }
}

/// Prints one progress line for a sweep event.
pub fn print_event(event: &SweepEvent) {
    println!("{}", event_line(event));
}

/// Renders the summary block printed once the run is finished.
pub fn summary_lines(result: &RunResult, dry_run: bool) -> Vec<String> {
    let mut lines = vec![
        String::new(),
        format!(
            "{} branches scanned, {} eligible for deletion",
            result.scanned, result.eligible
        ),
    ];

    if dry_run {
        lines.push(format!(
            "dry run: {} branches would be deleted",
            result.eligible
        ));
        lines.push(format!(
            "re-run with {} to delete them",
            "--execute".bold()
        ));
    } else {
        lines.push(format!(
            "{} deleted, {} failed",
            result.deleted, result.failed
        ));
        for name in &result.failed_branches {
            lines.push(format!("  {} {}", "failed:".red(), name));
        }
    }

    lines
}

/// Prints the end-of-run summary.
pub fn print_summary(result: &RunResult, dry_run: bool) {
    for line in summary_lines(result, dry_run) {
        println!("{}", line);
    }
}

/// Phrases a fatal pipeline error for the user.
///
/// Fetch failures are classified through [`FailureKind`] so the message says
/// what actually went wrong (bad token, missing project, ...) instead of
/// echoing an HTTP status.
pub fn fatal_message(error: &CoreError) -> String {
    match error {
        CoreError::Config(message) => format!("Invalid configuration: {}", message),
        CoreError::Fetch(inner) => match inner.kind() {
            FailureKind::Network => {
                format!("Could not reach the GitLab API: {}", inner)
            }
            FailureKind::Auth => {
                "GitLab rejected the access token; check that it is valid and has the api scope."
                    .to_string()
            }
            FailureKind::Permission => {
                "The access token does not have permission to list this project's branches."
                    .to_string()
            }
            FailureKind::NotFound => {
                "The project was not found; check the --project value and the GitLab URL."
                    .to_string()
            }
            FailureKind::RateLimit => {
                "The GitLab API rate limit was hit; wait a moment and run again.".to_string()
            }
            FailureKind::Unknown => format!("The GitLab API request failed: {}", inner),
        },
    }
}

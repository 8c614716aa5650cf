//! Error types for the BranchReaper CLI.

use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that can occur in the BranchReaper CLI application.
///
/// These cover invocation problems and terminal I/O; pipeline failures are
/// reported through `branch_reaper_core::Error` and the run result instead.
#[derive(Error, Debug)]
pub enum Error {
    /// No project was given.
    #[error("a GitLab project must be provided with --project")]
    MissingProject,

    /// No access token was given.
    ///
    /// The token can come from `--token` or from the `GITLAB_TOKEN`
    /// environment variable.
    #[error("a GitLab access token must be provided with --token or the GITLAB_TOKEN environment variable")]
    MissingToken,

    /// The provided arguments could not be turned into a valid run
    /// configuration.
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),

    /// Failed to flush the standard output buffer.
    ///
    /// This occurs when the CLI cannot write output to the terminal,
    /// typically due to broken pipes or terminal issues.
    #[error("failed to flush the std out buffer")]
    StdOutFlushFailed,

    /// Failed to read the user's answer from standard input.
    #[error("failed to read from std in")]
    StdInReadFailed,
}

//! Error types for the sweep pipeline.

use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that abort a sweep run.
///
/// Per-branch deletion failures are deliberately absent here: they are
/// recorded in the [`RunResult`](crate::RunResult) and never propagated as an
/// `Err`, so a single failed delete cannot stop the batch.
#[derive(Error, Debug)]
pub enum Error {
    /// The invocation input was invalid. Raised before any network call.
    #[error("configuration error: {0}")]
    Config(String),

    /// Listing branches failed. The run aborts before any deletion is
    /// attempted; partially fetched pages are discarded.
    #[error("failed to list branches: {0}")]
    Fetch(#[source] gitlab_client::Error),
}

//! # BranchReaper Core
//!
//! This crate provides the orchestration logic for BranchReaper, a tool that
//! deletes stale branches in a GitLab project through the host's REST API.
//!
//! ## Overview
//!
//! A sweep is one bounded batch operation:
//! 1. List every branch of the project (paginated, exhaustive)
//! 2. Filter the list down to the deletion-eligible subset
//! 3. Delete (or, in a dry run, preview) each eligible branch sequentially
//! 4. Aggregate the per-branch outcomes into a [`RunResult`]
//!
//! ## Main Functions
//!
//! The primary entry points are:
//! - [`sweep`] - Run the full pipeline against a [`BranchHost`](gitlab_client::BranchHost)
//! - [`RunConfiguration`] - Validated per-invocation configuration
//! - [`RunResult`] - Aggregated counts and failure list returned to the caller
//!
//! Callers that need to interpose between filtering and deletion (for
//! example to ask the user for confirmation) can compose
//! [`list_all_branches`], [`select_eligible`] and [`execute`] directly;
//! [`sweep`] is exactly that composition.
//!
//! ## Examples
//!
//! ```no_run
//! use branch_reaper_core::{sweep, RunConfiguration};
//! use gitlab_client::GitLabClient;
//! use secrecy::SecretString;
//! use std::collections::BTreeSet;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GitLabClient::new(
//!     gitlab_client::DEFAULT_BASE_URL,
//!     "group/project",
//!     SecretString::from("glpat-...".to_string()),
//! )?;
//! let config = RunConfiguration::new("main", 90, true, BTreeSet::new())?;
//!
//! let result = sweep(&client, &config, &mut |_event| {}).await?;
//! println!(
//!     "scanned {}, eligible {}, deleted {}",
//!     result.scanned, result.eligible, result.deleted
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! A failed listing aborts the run with [`Error::Fetch`] before any deletion
//! is attempted. A failed deletion never aborts the run: it is recorded in
//! the [`RunResult`] and the batch continues, with `success` ending up false.

use chrono::Utc;
use gitlab_client::BranchHost;
use tracing::info;

mod errors;
pub use errors::Error;

/// Per-invocation configuration and exclusion parsing.
pub mod config;

/// Paginated exhaustive branch retrieval.
pub mod lister;

/// Pure eligibility filtering.
pub mod filter;

/// Sequential deletion with per-branch failure tolerance.
pub mod executor;

/// Outcome accumulation.
pub mod result;

pub use config::{
    parse_exclusions, RunConfiguration, DEFAULT_MAIN_BRANCH, DEFAULT_STALE_AFTER_DAYS,
};
pub use executor::{execute, SweepEvent};
pub use filter::select_eligible;
pub use lister::{list_all_branches, PAGE_SIZE};
pub use result::{BranchOutcome, RunResult};

#[cfg(test)]
mod test_support;

// Reference the tests modules in the separate files
#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

#[cfg(test)]
#[path = "lib_integration_tests.rs"]
mod integration_tests;

/// Runs the full sweep pipeline: list, filter, then delete one by one.
///
/// `on_event` receives one [`SweepEvent`] per processed branch so callers can
/// render incremental progress.
///
/// # Errors
/// Returns [`Error::Fetch`] if the listing fails; in that case no deletion
/// was attempted. Per-branch deletion failures do not produce an `Err` - they
/// are recorded in the returned [`RunResult`] and leave `success` false.
pub async fn sweep<H, F>(
    host: &H,
    config: &RunConfiguration,
    on_event: &mut F,
) -> Result<RunResult, Error>
where
    H: BranchHost + ?Sized,
    F: FnMut(SweepEvent),
{
    let branches = lister::list_all_branches(host).await?;
    let eligible = filter::select_eligible(&branches, config, Utc::now());

    info!(
        scanned = branches.len(),
        eligible = eligible.len(),
        dry_run = config.dry_run(),
        "selected eligible branches"
    );

    Ok(executor::execute(host, branches.len(), &eligible, config, on_event).await)
}

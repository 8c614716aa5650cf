//! Per-invocation configuration for a sweep run.

use std::collections::BTreeSet;

use crate::errors::Error;

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

/// Branch name assumed to be the main branch when the caller does not name
/// one.
pub const DEFAULT_MAIN_BRANCH: &str = "main";

/// Staleness threshold, in days, applied when the caller does not set one.
pub const DEFAULT_STALE_AFTER_DAYS: u32 = 90;

/// Immutable configuration of a single sweep run.
///
/// Validated on construction so that invalid input fails before any network
/// call is made.
#[derive(Debug, Clone)]
pub struct RunConfiguration {
    main_branch: String,
    stale_after_days: u32,
    dry_run: bool,
    exclusions: BTreeSet<String>,
}

impl RunConfiguration {
    /// Creates a validated configuration.
    ///
    /// # Arguments
    ///
    /// * `main_branch` - Branch that is never eligible for deletion.
    /// * `stale_after_days` - A branch is stale once its last commit is
    ///   strictly older than this many days.
    /// * `dry_run` - When true no delete call is ever issued.
    /// * `exclusions` - Branch names kept regardless of staleness.
    ///
    /// # Errors
    /// Returns [`Error::Config`] if the main branch name is empty or the
    /// threshold is zero.
    pub fn new(
        main_branch: impl Into<String>,
        stale_after_days: u32,
        dry_run: bool,
        exclusions: BTreeSet<String>,
    ) -> Result<Self, Error> {
        let main_branch = main_branch.into();
        if main_branch.trim().is_empty() {
            return Err(Error::Config(
                "the main branch name must not be empty".to_string(),
            ));
        }
        if stale_after_days == 0 {
            return Err(Error::Config(
                "the staleness threshold must be at least one day".to_string(),
            ));
        }

        Ok(Self {
            main_branch,
            stale_after_days,
            dry_run,
            exclusions,
        })
    }

    /// The branch that is never eligible for deletion.
    pub fn main_branch(&self) -> &str {
        &self.main_branch
    }

    /// The staleness threshold in days.
    pub fn stale_after_days(&self) -> u32 {
        self.stale_after_days
    }

    /// Whether deletions are only previewed.
    pub fn dry_run(&self) -> bool {
        self.dry_run
    }

    /// Returns true if the named branch was excluded by the caller.
    pub fn is_excluded(&self, name: &str) -> bool {
        self.exclusions.contains(name)
    }

    /// The full exclusion set.
    pub fn exclusions(&self) -> &BTreeSet<String> {
        &self.exclusions
    }
}

/// Parses a comma-separated exclusion list into a set of branch names.
///
/// Entries are trimmed; empty entries (including the result of trailing
/// commas) are dropped.
pub fn parse_exclusions(raw: &str) -> BTreeSet<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(String::from)
        .collect()
}

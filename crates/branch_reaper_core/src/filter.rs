//! Selection of deletion-eligible branches.

use chrono::{DateTime, Duration, Utc};
use gitlab_client::models::Branch;

use crate::config::RunConfiguration;

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;

/// Computes the subset of `branches` that may be deleted.
///
/// A branch is eligible iff all of the following hold:
///
/// - its name differs from the configured main branch (exact match),
/// - it is not protected,
/// - its age exceeds the staleness threshold, compared strictly as a
///   continuous duration (a branch exactly at the threshold is kept), and
/// - its name is not in the exclusion set.
///
/// Pure: no side effects, no failure mode. The caller supplies `now` so the
/// computation is deterministic. Input order is preserved; the result is not
/// re-sorted.
pub fn select_eligible<'a>(
    branches: &'a [Branch],
    config: &RunConfiguration,
    now: DateTime<Utc>,
) -> Vec<&'a Branch> {
    let threshold = Duration::days(i64::from(config.stale_after_days()));

    branches
        .iter()
        .filter(|branch| branch.name != config.main_branch())
        .filter(|branch| !branch.protected)
        .filter(|branch| branch.age(now) > threshold)
        .filter(|branch| !config.is_excluded(&branch.name))
        .collect()
}

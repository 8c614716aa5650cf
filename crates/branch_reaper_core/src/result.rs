//! Accumulation of per-branch outcomes into a run-level result.

use serde::Serialize;

#[cfg(test)]
#[path = "result_tests.rs"]
mod tests;

/// Outcome of processing one eligible branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchOutcome {
    /// The delete call succeeded.
    Deleted,
    /// Dry run: the branch would have been deleted, no call was made.
    Previewed,
    /// The delete call failed; the run continued with the next branch.
    Failed,
}

/// Aggregated result of a sweep run.
///
/// Created zero-initialized when the eligible set is known, mutated once per
/// processed branch via [`RunResult::record`], and finalized with
/// [`RunResult::finalize`] after the eligible set is exhausted. The invariant
/// `deleted + failed <= eligible` holds throughout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunResult {
    /// Number of branches retrieved from the host.
    pub scanned: usize,
    /// Number of branches that passed the eligibility filter.
    pub eligible: usize,
    /// Number of branches actually deleted. Always zero in a dry run.
    pub deleted: usize,
    /// Number of branches whose deletion failed.
    pub failed: usize,
    /// Names of the branches whose deletion failed, in processing order.
    pub failed_branches: Vec<String>,
    /// True once finalized with no fetch failure and no failed deletion.
    pub success: bool,
}

impl RunResult {
    /// Creates a result for a run that scanned `scanned` branches of which
    /// `eligible` passed the filter. Counts start at zero and `success` is
    /// false until [`RunResult::finalize`] runs.
    pub fn for_scan(scanned: usize, eligible: usize) -> Self {
        Self {
            scanned,
            eligible,
            ..Self::default()
        }
    }

    /// Records the outcome of one processed branch.
    pub fn record(&mut self, name: &str, outcome: BranchOutcome) {
        match outcome {
            BranchOutcome::Deleted => self.deleted += 1,
            BranchOutcome::Previewed => {}
            BranchOutcome::Failed => {
                self.failed += 1;
                self.failed_branches.push(name.to_string());
            }
        }
    }

    /// Marks the run as finished. Reaching this point implies the fetch
    /// succeeded, so the run is a success iff no deletion failed.
    pub fn finalize(&mut self) {
        self.success = self.failed == 0;
    }
}

//! Sequential processing of the eligible set.

use gitlab_client::models::Branch;
use gitlab_client::BranchHost;
use tracing::{debug, info, warn};

use crate::config::RunConfiguration;
use crate::result::{BranchOutcome, RunResult};

#[cfg(test)]
#[path = "executor_tests.rs"]
mod tests;

/// Progress notification emitted while the executor walks the eligible set.
///
/// Consumed by presentation layers to render incremental output; the executor
/// itself attaches no meaning to them.
#[derive(Debug)]
pub enum SweepEvent {
    /// Dry run: the branch would have been deleted.
    Previewed { name: String },
    /// The branch was deleted.
    Deleted { name: String },
    /// The delete call failed; the run continues with the next branch.
    Failed {
        name: String,
        error: gitlab_client::Error,
    },
}

/// Processes the eligible branches strictly in order, one at a time.
///
/// In dry-run mode no network call is made and every branch is recorded as
/// previewed. Otherwise each branch gets exactly one delete call; a failure
/// is recorded into the result and the loop moves on. Nothing is retried and
/// no failure of a single branch aborts the batch.
///
/// `scanned` is the total number of branches the lister returned, carried
/// into the result for reporting.
pub async fn execute<H, F>(
    host: &H,
    scanned: usize,
    eligible: &[&Branch],
    config: &RunConfiguration,
    on_event: &mut F,
) -> RunResult
where
    H: BranchHost + ?Sized,
    F: FnMut(SweepEvent),
{
    let mut result = RunResult::for_scan(scanned, eligible.len());

    for branch in eligible {
        if config.dry_run() {
            debug!(branch = %branch.name, "dry run, delete skipped");
            result.record(&branch.name, BranchOutcome::Previewed);
            on_event(SweepEvent::Previewed {
                name: branch.name.clone(),
            });
            continue;
        }

        match host.delete_branch(&branch.name).await {
            Ok(()) => {
                info!(branch = %branch.name, "branch deleted");
                result.record(&branch.name, BranchOutcome::Deleted);
                on_event(SweepEvent::Deleted {
                    name: branch.name.clone(),
                });
            }
            Err(error) => {
                warn!(branch = %branch.name, %error, "failed to delete branch");
                result.record(&branch.name, BranchOutcome::Failed);
                on_event(SweepEvent::Failed {
                    name: branch.name.clone(),
                    error,
                });
            }
        }
    }

    result.finalize();
    result
}

//! Exhaustive, paginated retrieval of branch metadata.

use gitlab_client::{models::Branch, BranchHost};
use tracing::debug;

use crate::errors::Error;

#[cfg(test)]
#[path = "lister_tests.rs"]
mod tests;

/// Number of branches requested per page.
pub const PAGE_SIZE: u32 = 100;

/// Fetches every branch of the project.
///
/// Pages are requested starting at 1 and the loop advances while each page
/// comes back full; the first short page signals the end of the data. There
/// is no upper bound on the number of pages.
///
/// # Errors
/// Returns [`Error::Fetch`] if any page request fails. The partial
/// accumulation is discarded; there is no partial-success listing.
pub async fn list_all_branches<H>(host: &H) -> Result<Vec<Branch>, Error>
where
    H: BranchHost + ?Sized,
{
    let mut branches = Vec::new();
    let mut page = 1u32;

    loop {
        let batch = host.branch_page(page, PAGE_SIZE).await.map_err(Error::Fetch)?;
        let received = batch.len();
        branches.extend(batch);

        debug!(page, received, total = branches.len(), "fetched branch page");

        if (received as u32) < PAGE_SIZE {
            break;
        }
        page += 1;
    }

    Ok(branches)
}

//! Shared fakes and builders for the crate's unit tests.

use std::collections::BTreeSet;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use gitlab_client::models::{Branch, Commit};
use gitlab_client::{BranchHost, Error as ClientError};

/// Builds a branch whose last commit happened at `committed_date`.
pub fn branch_at(name: &str, protected: bool, committed_date: DateTime<Utc>) -> Branch {
    Branch {
        name: name.to_string(),
        protected,
        commit: Commit { committed_date },
    }
}

/// Builds a branch that is `age_days` old relative to `now`.
pub fn branch_aged(name: &str, protected: bool, age_days: i64, now: DateTime<Utc>) -> Branch {
    branch_at(name, protected, now - Duration::days(age_days))
}

/// In-memory [`BranchHost`] with scripted pages and deletion failures.
#[derive(Default)]
pub struct MockHost {
    /// Pages served in order; requests beyond the scripted pages get an
    /// empty page.
    pub pages: Vec<Vec<Branch>>,
    /// When set, requesting this page fails with a 404-shaped error.
    pub fail_on_page: Option<u32>,
    /// Branch names whose deletion fails with a 403-shaped error.
    pub failing_deletes: BTreeSet<String>,
    /// Pages requested, in order.
    pub requested_pages: Mutex<Vec<u32>>,
    /// Branch names successfully deleted, in order.
    pub deleted: Mutex<Vec<String>>,
    /// Every branch name a delete was attempted for, in order.
    pub delete_attempts: Mutex<Vec<String>>,
}

impl MockHost {
    pub fn with_pages(pages: Vec<Vec<Branch>>) -> Self {
        Self {
            pages,
            ..Self::default()
        }
    }

    pub fn with_branches(branches: Vec<Branch>) -> Self {
        Self::with_pages(vec![branches])
    }
}

#[async_trait]
impl BranchHost for MockHost {
    async fn branch_page(&self, page: u32, _per_page: u32) -> Result<Vec<Branch>, ClientError> {
        self.requested_pages.lock().unwrap().push(page);
        if self.fail_on_page == Some(page) {
            return Err(ClientError::NotFound);
        }
        Ok(self
            .pages
            .get((page - 1) as usize)
            .cloned()
            .unwrap_or_default())
    }

    async fn delete_branch(&self, name: &str) -> Result<(), ClientError> {
        self.delete_attempts.lock().unwrap().push(name.to_string());
        if self.failing_deletes.contains(name) {
            return Err(ClientError::Permission);
        }
        self.deleted.lock().unwrap().push(name.to_string());
        Ok(())
    }
}

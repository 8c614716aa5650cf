//! Branch domain types.
//!
//! This module contains the wire models returned by the GitLab branch
//! endpoints. Only the fields the sweep pipeline needs are mapped; everything
//! else in the API payload is ignored during deserialization.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "models_tests.rs"]
mod tests;

/// A branch in a GitLab project.
///
/// Deserialized from the shape returned by
/// `GET /projects/:id/repository/branches`:
///
/// ```json
/// { "name": "feat/x", "protected": false, "commit": { "committed_date": "..." } }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Branch {
    /// The branch name, unique within the project.
    pub name: String,
    /// Whether the branch is protected. Protected branches are never deleted.
    pub protected: bool,
    /// The most recent commit on the branch.
    pub commit: Commit,
}

/// The tip commit of a branch, reduced to the timestamp the staleness
/// computation needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Commit {
    /// When the commit was created. GitLab reports this with a zone offset;
    /// it is normalized to UTC on deserialization.
    pub committed_date: DateTime<Utc>,
}

impl Branch {
    /// Returns the time elapsed between the branch's last commit and `now`.
    ///
    /// The result is a full-precision duration, not a calendar-day count, so
    /// callers can compare against a threshold without truncation.
    pub fn age(&self, now: DateTime<Utc>) -> Duration {
        now - self.commit.committed_date
    }
}

//! Crate for interacting with the GitLab REST API.
//!
//! This crate provides a small client for the branch endpoints of a GitLab
//! project, authenticating with a private token sent on every request. The
//! [`BranchHost`] trait is the seam consumed by orchestration code, so that
//! callers can be tested without a live GitLab instance.

use std::time::Duration;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, instrument};
use url::Url;

pub mod errors;
pub use errors::{Error, FailureKind};

pub mod models;
pub use models::Branch;

// Reference the tests module in the separate file
#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

/// Base URL of the hosted gitlab.com REST API, used when no other instance is
/// configured.
pub const DEFAULT_BASE_URL: &str = "https://gitlab.com/api/v4";

/// Header GitLab expects the access token in.
const PRIVATE_TOKEN_HEADER: &str = "PRIVATE-TOKEN";

/// Applied to every request; a request that exceeds it surfaces as a network
/// failure.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Branch operations a host must provide for the sweep pipeline.
///
/// Implemented by [`GitLabClient`] over the REST API and by in-memory fakes in
/// tests.
#[async_trait]
pub trait BranchHost: Send + Sync {
    /// Fetches one page of branch metadata.
    ///
    /// Pages are 1-based. A page shorter than `per_page` signals that no
    /// further pages exist.
    ///
    /// # Errors
    /// Returns an [`Error`] if the request fails or the API answers with a
    /// non-success status.
    async fn branch_page(&self, page: u32, per_page: u32) -> Result<Vec<models::Branch>, Error>;

    /// Deletes the named branch.
    ///
    /// # Errors
    /// Returns an [`Error`] if the request fails or the API answers with a
    /// non-success status.
    async fn delete_branch(&self, name: &str) -> Result<(), Error>;
}

/// A client for the branch endpoints of a single GitLab project.
#[derive(Debug)]
pub struct GitLabClient {
    client: reqwest::Client,
    /// Resolved `{base}/projects/{id}/repository/branches` collection URL.
    branches_url: Url,
    token: SecretString,
}

impl GitLabClient {
    /// Creates a client for the given GitLab instance and project.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Base URL of the REST API, e.g. `https://gitlab.com/api/v4`.
    /// * `project` - Project ID or full path. A path such as `group/project`
    ///   is inserted as a single URL segment, so it must not be pre-encoded.
    /// * `token` - Private token with API access to the project.
    ///
    /// # Errors
    /// Returns [`Error::InvalidBaseUrl`] if `base_url` cannot address the API
    /// and [`Error::ClientConstruction`] if the HTTP client cannot be built.
    pub fn new(base_url: &str, project: &str, token: SecretString) -> Result<Self, Error> {
        let base = Url::parse(base_url).map_err(|e| Error::InvalidBaseUrl(e.to_string()))?;
        if base.cannot_be_a_base() {
            return Err(Error::InvalidBaseUrl(format!(
                "'{}' cannot serve as a base path",
                base_url
            )));
        }

        let mut branches_url = base;
        {
            // Guaranteed by the cannot_be_a_base check above.
            let mut segments = branches_url
                .path_segments_mut()
                .expect("base URL accepts path segments");
            segments.pop_if_empty();
            segments.extend(["projects", project, "repository", "branches"]);
        }

        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(Error::ClientConstruction)?;

        Ok(Self {
            client,
            branches_url,
            token,
        })
    }

    /// Returns the URL addressing a single branch within the project.
    fn branch_url(&self, name: &str) -> Url {
        let mut url = self.branches_url.clone();
        {
            // Valid base established at construction time. Pushing the name
            // as one segment percent-encodes any '/' it contains.
            let mut segments = url
                .path_segments_mut()
                .expect("branch collection URL accepts path segments");
            segments.push(name);
        }
        url
    }
}

#[async_trait]
impl BranchHost for GitLabClient {
    #[instrument(skip(self))]
    async fn branch_page(&self, page: u32, per_page: u32) -> Result<Vec<models::Branch>, Error> {
        let mut url = self.branches_url.clone();
        url.query_pairs_mut()
            .append_pair("per_page", &per_page.to_string())
            .append_pair("page", &page.to_string());

        let response = self
            .client
            .get(url)
            .header(PRIVATE_TOKEN_HEADER, self.token.expose_secret())
            .send()
            .await
            .map_err(Error::Network)?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::from_status(status));
        }

        let branches: Vec<models::Branch> =
            response.json().await.map_err(Error::Deserialization)?;

        debug!(page, count = branches.len(), "received branch page");
        Ok(branches)
    }

    #[instrument(skip(self), fields(branch = %name))]
    async fn delete_branch(&self, name: &str) -> Result<(), Error> {
        let response = self
            .client
            .delete(self.branch_url(name))
            .header(PRIVATE_TOKEN_HEADER, self.token.expose_secret())
            .send()
            .await
            .map_err(Error::Network)?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::from_status(status));
        }

        debug!("branch deleted");
        Ok(())
    }
}

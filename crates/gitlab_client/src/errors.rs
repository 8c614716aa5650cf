//! Error types for GitLab client operations.
//!
//! This module defines the error types that can occur when interacting with the
//! GitLab API through the gitlab_client crate, along with a broad classification
//! of failures that callers can use when reporting problems to a user.

use std::fmt;

use reqwest::StatusCode;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Broad classification of a failed GitLab API call.
///
/// The classification is purely descriptive. It exists so that user-facing
/// layers can phrase a failure precisely (for example "the token was rejected"
/// rather than "HTTP 401"); no caller branches on it for control flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// No response was received at all (connect failure, timeout, DNS, ...).
    Network,
    /// The API rejected the credentials (401).
    Auth,
    /// The credentials are valid but lack permission (403).
    Permission,
    /// The addressed resource does not exist (404).
    NotFound,
    /// The API asked the client to slow down (429).
    RateLimit,
    /// Anything else, including unexpected statuses and malformed responses.
    Unknown,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FailureKind::Network => "network",
            FailureKind::Auth => "auth",
            FailureKind::Permission => "permission",
            FailureKind::NotFound => "not_found",
            FailureKind::RateLimit => "rate_limit",
            FailureKind::Unknown => "unknown",
        };
        write!(f, "{}", label)
    }
}

/// Errors that can occur during GitLab client operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The request never produced a response.
    ///
    /// This covers connection failures, DNS resolution problems and requests
    /// that hit the client-side timeout.
    #[error("no response received from the GitLab API: {0}")]
    Network(#[source] reqwest::Error),

    /// The API rejected the access token (401).
    #[error("the GitLab API rejected the access token (401)")]
    Auth,

    /// The access token lacks permission for the attempted operation (403).
    #[error("the access token does not have permission for this operation (403)")]
    Permission,

    /// The addressed resource does not exist (404).
    #[error("the requested resource was not found (404)")]
    NotFound,

    /// The API rate limit was exceeded (429).
    #[error("the GitLab API rate limit was exceeded (429)")]
    RateLimit,

    /// The API answered with a status the client does not recognize.
    #[error("the GitLab API returned an unexpected status: {0}")]
    Unexpected(StatusCode),

    /// The response body could not be parsed into the expected shape.
    #[error("failed to deserialize the GitLab response: {0}")]
    Deserialization(#[source] reqwest::Error),

    /// The configured base URL cannot be used to address the API.
    #[error("the GitLab base URL is not usable: {0}")]
    InvalidBaseUrl(String),

    /// The underlying HTTP client could not be constructed.
    #[error("failed to construct the HTTP client: {0}")]
    ClientConstruction(#[source] reqwest::Error),
}

impl Error {
    /// Maps a non-success HTTP status onto the matching error variant.
    pub fn from_status(status: StatusCode) -> Self {
        match status {
            StatusCode::UNAUTHORIZED => Error::Auth,
            StatusCode::FORBIDDEN => Error::Permission,
            StatusCode::NOT_FOUND => Error::NotFound,
            StatusCode::TOO_MANY_REQUESTS => Error::RateLimit,
            other => Error::Unexpected(other),
        }
    }

    /// Returns the broad classification of this error for reporting purposes.
    pub fn kind(&self) -> FailureKind {
        match self {
            Error::Network(_) => FailureKind::Network,
            Error::Auth => FailureKind::Auth,
            Error::Permission => FailureKind::Permission,
            Error::NotFound => FailureKind::NotFound,
            Error::RateLimit => FailureKind::RateLimit,
            Error::Unexpected(_)
            | Error::Deserialization(_)
            | Error::InvalidBaseUrl(_)
            | Error::ClientConstruction(_) => FailureKind::Unknown,
        }
    }
}

//! Error types exposed by the GitHub comment layer.

use thiserror::Error;

/// Errors surfaced while resolving input or communicating with GitHub.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommenterError {
    /// Neither a pull request URL nor owner, repository, and number were
    /// configured.
    #[error("pull request URL or owner, repository, and number are required")]
    MissingPullRequest,

    /// The provided URL could not be parsed.
    #[error("URL is invalid: {0}")]
    InvalidUrl(String),

    /// The pull request path is incomplete.
    #[error("pull request URL must match /owner/repo/pull/<number>")]
    MissingPathSegments,

    /// The pull request number is not a valid integer.
    #[error("pull request number must be a positive integer")]
    InvalidPullRequestNumber,

    /// The authentication token was missing.
    #[error("personal access token is required")]
    MissingToken,

    /// The GitHub Enterprise client could not be established.
    #[error("could not establish a GitHub Enterprise connection: {message}")]
    EnterpriseConnection {
        /// Details about the endpoint or client failure.
        message: String,
    },

    /// The authentication token was rejected by GitHub.
    #[error("GitHub rejected the token: {message}")]
    Authentication {
        /// GitHub error message returned with the 401/403 response.
        message: String,
    },

    /// GitHub answered 422 Unprocessable Entity.
    ///
    /// Comment creation uses this status to signal the secondary rate limit.
    #[error("GitHub rejected the request as unprocessable: {message}")]
    Unprocessable {
        /// Response message from GitHub.
        message: String,
    },

    /// GitHub returned a non-authentication API error.
    #[error("GitHub API error: {message}")]
    Api {
        /// Response body from GitHub describing the failure.
        message: String,
    },

    /// Networking failed while calling GitHub.
    #[error("network error talking to GitHub: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// Comment creation was still rejected after the single retry.
    #[error(
        "secondary rate limit hit writing a comment to {owner}/{repository}#{pull_request} \
         after waiting {wait_seconds}s"
    )]
    AbuseRateLimit {
        /// Repository owner.
        owner: String,
        /// Repository name.
        repository: String,
        /// Pull request number.
        pull_request: u64,
        /// Seconds waited before the retry.
        wait_seconds: u64,
    },

    /// The pull request lookup failed.
    #[error("pull request {owner}/{repository}#{pull_request} does not exist")]
    PullRequestNotFound {
        /// Repository owner.
        owner: String,
        /// Repository name.
        repository: String,
        /// Pull request number.
        pull_request: u64,
    },

    /// The file or line is not part of the pull request diff.
    #[error("{file_path}:{start_line}-{end_line} is not part of the pull request diff")]
    CommentNotValid {
        /// File the comment targets.
        file_path: String,
        /// First targeted line.
        start_line: u32,
        /// Last targeted line.
        end_line: u32,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },

    /// Configuration could not be loaded.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },
}

//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.commenter.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `COMMENTER_PR_URL`, `COMMENTER_TOKEN`, or
//!    legacy `GITHUB_TOKEN`
//! 4. **Command-line arguments** – `--pr-url`/`-u`, `--token`/`-t`, and so on
//!
//! # Configuration File
//!
//! ```toml
//! owner = "octocat"
//! repo = "hello-world"
//! pr_number = 42
//! enterprise_base_url = "https://github.example.com/"
//! request_timeout_seconds = 30
//! ```

use std::env;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::github::endpoint::EnterpriseEndpoint;
use crate::github::error::CommenterError;
use crate::github::locator::{PersonalAccessToken, PullRequestLocator};
use crate::github::session::SessionInput;

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Environment Variables
///
/// - `COMMENTER_PR_URL` or `--pr-url`: Pull request URL
/// - `COMMENTER_TOKEN`, `GITHUB_TOKEN`, or `--token`: Authentication token
/// - `COMMENTER_OWNER`, `COMMENTER_REPO`, `COMMENTER_PR_NUMBER`: Pull request
///   coordinates when no URL is given
/// - `COMMENTER_ENTERPRISE_BASE_URL`, `COMMENTER_ENTERPRISE_UPLOAD_URL`:
///   GitHub Enterprise endpoints
///
/// # Example
///
/// ```no_run
/// use commenter::CommenterConfig;
/// use ortho_config::OrthoConfig;
///
/// let config = CommenterConfig::load().expect("failed to load configuration");
/// let input = config.session_input().expect("session input required");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "COMMENTER",
    discovery(
        dotfile_name = ".commenter.toml",
        config_file_name = "commenter.toml",
        app_name = "commenter"
    )
)]
pub struct CommenterConfig {
    /// GitHub pull request URL to comment on.
    ///
    /// Takes priority over `owner`, `repo`, and `pr_number`. An enterprise
    /// host in the URL selects its `/api/v3` base.
    #[ortho_config(cli_short = 'u')]
    pub pr_url: Option<String>,

    /// Personal access token for GitHub API authentication.
    ///
    /// Falls back to the legacy `GITHUB_TOKEN` environment variable.
    #[ortho_config(cli_short = 't')]
    pub token: Option<String>,

    /// Repository owner (e.g., "octocat").
    #[ortho_config(cli_short = 'o')]
    pub owner: Option<String>,

    /// Repository name (e.g., "hello-world").
    #[ortho_config(cli_short = 'r')]
    pub repo: Option<String>,

    /// Pull request number within `owner/repo`.
    #[ortho_config(cli_short = 'p')]
    pub pr_number: Option<u64>,

    /// GitHub Enterprise API base URL, e.g. `https://github.example.com/`.
    #[ortho_config()]
    pub enterprise_base_url: Option<String>,

    /// GitHub Enterprise upload URL. Defaults to the base URL.
    #[ortho_config()]
    pub enterprise_upload_url: Option<String>,

    /// Connect, read, and write timeout for each request, in seconds.
    ///
    /// `0` disables the timeout. Defaults to 30 seconds.
    #[ortho_config()]
    pub request_timeout_seconds: u64,

    /// Comment body to post. Nothing is posted when unset.
    #[ortho_config(cli_short = 'b')]
    pub body: Option<String>,

    /// File to attach a review comment to; requires `line`.
    #[ortho_config(cli_short = 'f')]
    pub file: Option<String>,

    /// Last (or only) line of the review comment.
    #[ortho_config(cli_short = 'l')]
    pub line: Option<u32>,

    /// First line of a multi-line review comment.
    #[ortho_config(cli_short = 's')]
    pub start_line: Option<u32>,
}

const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 30;

impl Default for CommenterConfig {
    fn default() -> Self {
        Self {
            pr_url: None,
            token: None,
            owner: None,
            repo: None,
            pr_number: None,
            enterprise_base_url: None,
            enterprise_upload_url: None,
            request_timeout_seconds: DEFAULT_REQUEST_TIMEOUT_SECONDS,
            body: None,
            file: None,
            line: None,
            start_line: None,
        }
    }
}

/// Where a configured comment body should be posted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentTarget<'a> {
    /// Nothing to post.
    None,
    /// A general comment on the pull request conversation.
    General {
        /// Comment text.
        body: &'a str,
    },
    /// A review comment on `start_line..=line` of `file`.
    Review {
        /// Comment text.
        body: &'a str,
        /// Path of the file in the diff.
        file: &'a str,
        /// First commented line; equal to `line` for single-line comments.
        start_line: u32,
        /// Last commented line.
        line: u32,
    },
}

impl CommenterConfig {
    /// Resolves the token from configuration or the legacy `GITHUB_TOKEN`
    /// environment variable.
    ///
    /// # Errors
    ///
    /// Returns [`CommenterError::MissingToken`] when no token source provides a
    /// non-empty value.
    pub fn resolve_token(&self) -> Result<PersonalAccessToken, CommenterError> {
        let value = self
            .token
            .clone()
            .or_else(|| env::var("GITHUB_TOKEN").ok())
            .ok_or(CommenterError::MissingToken)?;
        PersonalAccessToken::new(value)
    }

    /// Resolves the target pull request from `pr_url` or from `owner`,
    /// `repo`, and `pr_number`.
    ///
    /// # Errors
    ///
    /// Returns [`CommenterError::MissingPullRequest`] when neither form is
    /// complete, or the parse error for a malformed URL or coordinate.
    pub fn resolve_locator(&self) -> Result<PullRequestLocator, CommenterError> {
        if let Some(url) = self.pr_url.as_deref() {
            return PullRequestLocator::parse(url);
        }
        match (&self.owner, &self.repo, self.pr_number) {
            (Some(owner), Some(repo), Some(number)) => {
                PullRequestLocator::from_parts(owner, repo, number)
            }
            _ => Err(CommenterError::MissingPullRequest),
        }
    }

    /// Builds the enterprise endpoint when a base URL is configured.
    ///
    /// # Errors
    ///
    /// Returns [`CommenterError::EnterpriseConnection`] when either URL is
    /// malformed, and [`CommenterError::Configuration`] when only an upload URL
    /// is set.
    pub fn enterprise_endpoint(&self) -> Result<Option<EnterpriseEndpoint>, CommenterError> {
        match (&self.enterprise_base_url, &self.enterprise_upload_url) {
            (Some(base), upload) => {
                let upload = upload.as_deref().unwrap_or(base);
                EnterpriseEndpoint::new(base, upload).map(Some)
            }
            (None, Some(_)) => Err(CommenterError::Configuration {
                message: "enterprise upload URL requires an enterprise base URL".to_owned(),
            }),
            (None, None) => Ok(None),
        }
    }

    /// Request timeout, or `None` when disabled.
    #[must_use]
    pub const fn request_timeout(&self) -> Option<Duration> {
        match self.request_timeout_seconds {
            0 => None,
            seconds => Some(Duration::from_secs(seconds)),
        }
    }

    /// Gathers everything needed to open a session.
    ///
    /// # Errors
    ///
    /// Propagates token, locator, and enterprise endpoint resolution errors.
    pub fn session_input(&self) -> Result<SessionInput, CommenterError> {
        Ok(SessionInput {
            token: self.resolve_token()?,
            locator: self.resolve_locator()?,
            enterprise: self.enterprise_endpoint()?,
            request_timeout: self.request_timeout(),
        })
    }

    /// Determines what, if anything, the configured body should be posted
    /// as.
    ///
    /// # Errors
    ///
    /// Returns [`CommenterError::Configuration`] when `file` and `line` are not
    /// given together, when `start_line` is set without them, or when any of
    /// them is set without a `body`.
    pub fn comment_target(&self) -> Result<CommentTarget<'_>, CommenterError> {
        let has_coordinates =
            self.file.is_some() || self.line.is_some() || self.start_line.is_some();
        let Some(body) = self.body.as_deref() else {
            if has_coordinates {
                return Err(CommenterError::Configuration {
                    message: "--file, --line, and --start-line need a comment --body".to_owned(),
                });
            }
            return Ok(CommentTarget::None);
        };
        match (self.file.as_deref(), self.line, self.start_line) {
            (None, None, None) => Ok(CommentTarget::General { body }),
            (Some(file), Some(line), start_line) => Ok(CommentTarget::Review {
                body,
                file,
                start_line: start_line.unwrap_or(line),
                line,
            }),
            _ => Err(CommenterError::Configuration {
                message: "review comments need both --file and --line".to_owned(),
            }),
        }
    }
}

#[cfg(test)]
mod tests;

//! Gateways for reading and writing pull request comments through Octocrab.
//!
//! This module provides trait-based gateways for communicating with the GitHub
//! API. The trait-based design enables mocking in tests while the Octocrab
//! implementations handle real HTTP requests.

mod client;
mod error_mapping;
mod http_utils;
mod issue_comments;
mod pull_request;

pub use client::{ClientSettings, build_octocrab_client};
pub use issue_comments::OctocrabIssueCommentGateway;
pub use pull_request::OctocrabPullRequestGateway;

use async_trait::async_trait;

use crate::github::error::CommenterError;
use crate::github::locator::PullRequestLocator;
use crate::github::models::{
    ChangedFile, CommentId, ExistingComment, GeneralCommentRequest, PullRequestMetadata,
    ReviewCommentRequest,
};

/// Pull request operations: files, review comments, and the lookup itself.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PullRequestGateway: Send + Sync {
    /// Fetch the pull request metadata.
    async fn pull_request(
        &self,
        locator: &PullRequestLocator,
    ) -> Result<PullRequestMetadata, CommenterError>;

    /// Fetch every file touched by the pull request, across all pages.
    async fn list_files(&self, locator: &PullRequestLocator)
    -> Result<Vec<ChangedFile>, CommenterError>;

    /// Fetch every review comment on the pull request, across all pages.
    async fn list_review_comments(
        &self,
        locator: &PullRequestLocator,
    ) -> Result<Vec<ExistingComment>, CommenterError>;

    /// Create an inline review comment.
    async fn create_review_comment(
        &self,
        locator: &PullRequestLocator,
        request: &ReviewCommentRequest,
    ) -> Result<CommentId, CommenterError>;

    /// Delete a review comment by identifier.
    async fn delete_review_comment(
        &self,
        locator: &PullRequestLocator,
        comment_id: CommentId,
    ) -> Result<(), CommenterError>;
}

/// Issue-level comment operations on the pull request.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IssueCommentGateway: Send + Sync {
    /// Create a general comment on the pull request conversation.
    async fn create_issue_comment(
        &self,
        locator: &PullRequestLocator,
        request: &GeneralCommentRequest,
    ) -> Result<CommentId, CommenterError>;
}

//! Octocrab implementation of the pull request gateway.

use async_trait::async_trait;
use octocrab::{Octocrab, Page};

use crate::github::error::CommenterError;
use crate::github::locator::PullRequestLocator;
use crate::github::models::{
    ApiChangedFile, ApiCreatedComment, ApiPullRequest, ApiReviewComment, ChangedFile, CommentId,
    ExistingComment, PullRequestMetadata, ReviewCommentRequest,
};

use super::PullRequestGateway;
use super::error_mapping::{map_http_error, map_octocrab_error};
use super::http_utils::{extract_github_message, parse_route};

/// Octocrab-backed pull request gateway.
#[derive(Debug, Clone)]
pub struct OctocrabPullRequestGateway {
    client: Octocrab,
}

impl OctocrabPullRequestGateway {
    /// Creates a new gateway from an Octocrab client.
    #[must_use]
    pub const fn new(client: Octocrab) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PullRequestGateway for OctocrabPullRequestGateway {
    async fn pull_request(
        &self,
        locator: &PullRequestLocator,
    ) -> Result<PullRequestMetadata, CommenterError> {
        self.client
            .get::<ApiPullRequest, _, _>(locator.pull_request_path(), None::<&()>)
            .await
            .map(ApiPullRequest::into)
            .map_err(|error| map_octocrab_error("pull request", &error))
    }

    async fn list_files(
        &self,
        locator: &PullRequestLocator,
    ) -> Result<Vec<ChangedFile>, CommenterError> {
        let page = self
            .client
            .get::<Page<ApiChangedFile>, _, _>(locator.files_path(), None::<&()>)
            .await
            .map_err(|error| map_octocrab_error("list files", &error))?;

        self.client
            .all_pages(page)
            .await
            .map(|files| files.into_iter().map(ApiChangedFile::into).collect())
            .map_err(|error| map_octocrab_error("list files", &error))
    }

    async fn list_review_comments(
        &self,
        locator: &PullRequestLocator,
    ) -> Result<Vec<ExistingComment>, CommenterError> {
        let page = self
            .client
            .get::<Page<ApiReviewComment>, _, _>(locator.review_comments_path(), None::<&()>)
            .await
            .map_err(|error| map_octocrab_error("review comments", &error))?;

        self.client
            .all_pages(page)
            .await
            .map(|comments| comments.into_iter().map(ApiReviewComment::into).collect())
            .map_err(|error| map_octocrab_error("review comments", &error))
    }

    async fn create_review_comment(
        &self,
        locator: &PullRequestLocator,
        request: &ReviewCommentRequest,
    ) -> Result<CommentId, CommenterError> {
        let created: ApiCreatedComment = self
            .client
            .post(locator.review_comments_path(), Some(request))
            .await
            .map_err(|error| map_octocrab_error("create review comment", &error))?;
        Ok(CommentId::new(created.id))
    }

    async fn delete_review_comment(
        &self,
        locator: &PullRequestLocator,
        comment_id: CommentId,
    ) -> Result<(), CommenterError> {
        let uri = parse_route(&locator.review_comment_path(comment_id))?;
        let response = self
            .client
            ._delete(uri, None::<&()>)
            .await
            .map_err(|error| map_octocrab_error("delete review comment", &error))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = self
            .client
            .body_to_string(response)
            .await
            .unwrap_or_else(|_| String::new());

        Err(map_http_error(
            "delete review comment",
            status,
            extract_github_message(&body),
        ))
    }
}

//! Octocrab implementation of the issue comment gateway.

use async_trait::async_trait;
use octocrab::Octocrab;

use crate::github::error::CommenterError;
use crate::github::locator::PullRequestLocator;
use crate::github::models::{ApiCreatedComment, CommentId, GeneralCommentRequest};

use super::IssueCommentGateway;
use super::error_mapping::map_octocrab_error;

/// Octocrab-backed gateway for issue-level pull request comments.
#[derive(Debug, Clone)]
pub struct OctocrabIssueCommentGateway {
    client: Octocrab,
}

impl OctocrabIssueCommentGateway {
    /// Creates a new gateway from an Octocrab client.
    #[must_use]
    pub const fn new(client: Octocrab) -> Self {
        Self { client }
    }
}

#[async_trait]
impl IssueCommentGateway for OctocrabIssueCommentGateway {
    async fn create_issue_comment(
        &self,
        locator: &PullRequestLocator,
        request: &GeneralCommentRequest,
    ) -> Result<CommentId, CommenterError> {
        let created: ApiCreatedComment = self
            .client
            .post(locator.issue_comments_path(), Some(request))
            .await
            .map_err(|error| map_octocrab_error("create issue comment", &error))?;
        Ok(CommentId::new(created.id))
    }
}

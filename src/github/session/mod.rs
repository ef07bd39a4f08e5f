//! Authenticated pull request session and comment delivery.
//!
//! A [`Session`] pairs the pull request gateway with the issue comment
//! gateway for one pull request. Besides the read-only listings it delivers
//! comments: review comments may supersede an earlier comment (delete, then
//! create) and every create is retried once, one second later, when GitHub
//! answers 422, which it uses to signal the secondary rate limit on comment
//! creation.

use std::future::Future;
use std::time::Duration;

use tracing::{debug, error, warn};

use super::endpoint::EnterpriseEndpoint;
use super::error::CommenterError;
use super::gateway::{
    ClientSettings, IssueCommentGateway, OctocrabIssueCommentGateway, OctocrabPullRequestGateway,
    PullRequestGateway, build_octocrab_client,
};
use super::locator::{PersonalAccessToken, PullRequestLocator};
use super::models::{
    ChangedFile, CommentId, ExistingComment, GeneralCommentRequest, PullRequestMetadata,
    ReviewCommentRequest,
};

/// Fixed wait before the single retry of a rejected comment creation.
pub const SECONDARY_RATE_LIMIT_WAIT: Duration = Duration::from_secs(1);

/// Inputs needed to open a [`Session`].
#[derive(Debug, Clone)]
pub struct SessionInput {
    /// Token used for every request.
    pub token: PersonalAccessToken,
    /// Target owner, repository, and pull request number.
    pub locator: PullRequestLocator,
    /// Private or self-hosted endpoint replacing the locator's API base.
    pub enterprise: Option<EnterpriseEndpoint>,
    /// Connect, read, and write timeout for each request.
    pub request_timeout: Option<Duration>,
}

/// Which create attempt is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Attempt {
    First,
    Retry,
}

/// Access to one pull request through its two capability gateways.
#[derive(Debug)]
pub struct Session<Pulls, Issues> {
    pulls: Pulls,
    issues: Issues,
    locator: PullRequestLocator,
}

impl Session<OctocrabPullRequestGateway, OctocrabIssueCommentGateway> {
    /// Opens an Octocrab-backed session.
    ///
    /// Only the client is configured; no request is sent.
    ///
    /// # Errors
    ///
    /// Returns [`CommenterError::EnterpriseConnection`] when an enterprise
    /// endpoint is configured and the client cannot be built against it, or
    /// the client construction error otherwise.
    pub fn connect(input: &SessionInput) -> Result<Self, CommenterError> {
        match &input.enterprise {
            Some(endpoint) => Self::connect_enterprise(input, endpoint),
            None => {
                let client = build_octocrab_client(
                    &input.token,
                    &ClientSettings {
                        api_base: Some(input.locator.api_base()),
                        upload_base: None,
                        request_timeout: input.request_timeout,
                    },
                )?;
                Ok(Self::from_client(client, input.locator.clone()))
            }
        }
    }

    fn connect_enterprise(
        input: &SessionInput,
        endpoint: &EnterpriseEndpoint,
    ) -> Result<Self, CommenterError> {
        let settings = ClientSettings {
            api_base: Some(endpoint.base_url()),
            upload_base: Some(endpoint.upload_url()),
            request_timeout: input.request_timeout,
        };
        let client = build_octocrab_client(&input.token, &settings).map_err(|failure| {
            error!(
                base_url = %endpoint.base_url(),
                error = %failure,
                "could not establish a GitHub Enterprise connection"
            );
            CommenterError::EnterpriseConnection {
                message: failure.to_string(),
            }
        })?;

        let locator = input
            .locator
            .clone()
            .with_api_base(endpoint.base_url().clone());
        Ok(Self::from_client(client, locator))
    }

    fn from_client(client: octocrab::Octocrab, locator: PullRequestLocator) -> Self {
        Self::new(
            OctocrabPullRequestGateway::new(client.clone()),
            OctocrabIssueCommentGateway::new(client),
            locator,
        )
    }
}

impl<Pulls, Issues> Session<Pulls, Issues>
where
    Pulls: PullRequestGateway,
    Issues: IssueCommentGateway,
{
    /// Wires pre-built gateways to the target pull request.
    #[must_use]
    pub const fn new(pulls: Pulls, issues: Issues, locator: PullRequestLocator) -> Self {
        Self {
            pulls,
            issues,
            locator,
        }
    }

    /// The pull request this session targets.
    #[must_use]
    pub const fn locator(&self) -> &PullRequestLocator {
        &self.locator
    }

    /// Lists files touched by the pull request, excluding deleted files.
    ///
    /// The platform's order is preserved.
    ///
    /// # Errors
    ///
    /// Propagates the gateway error unchanged.
    pub async fn changed_files(&self) -> Result<Vec<ChangedFile>, CommenterError> {
        let files = self.pulls.list_files(&self.locator).await?;
        Ok(files
            .into_iter()
            .filter(|file| !file.is_deleted())
            .collect())
    }

    /// Snapshots every review comment currently on the pull request.
    ///
    /// # Errors
    ///
    /// Propagates the gateway error unchanged.
    pub async fn existing_comments(&self) -> Result<Vec<ExistingComment>, CommenterError> {
        self.pulls.list_review_comments(&self.locator).await
    }

    /// Fetches pull request metadata.
    ///
    /// # Errors
    ///
    /// Propagates the gateway error unchanged.
    pub async fn pull_request(&self) -> Result<PullRequestMetadata, CommenterError> {
        self.pulls.pull_request(&self.locator).await
    }

    /// Returns true when the pull request lookup succeeds.
    ///
    /// Every failure, whether not found, network, or authentication, reads
    /// as `false`.
    pub async fn pr_exists(&self) -> bool {
        match self.pulls.pull_request(&self.locator).await {
            Ok(_) => true,
            Err(failure) => {
                debug!(error = %failure, "pull request lookup failed");
                false
            }
        }
    }

    /// Creates a review comment, first deleting `supersede` when given.
    ///
    /// A failed delete aborts before anything is created. A 422 from the
    /// create is retried once after [`SECONDARY_RATE_LIMIT_WAIT`] without
    /// repeating the delete, so a superseded comment is gone even when this
    /// returns an error.
    ///
    /// # Errors
    ///
    /// Returns the delete error, a non-422 create error unchanged, or
    /// [`CommenterError::AbuseRateLimit`] when the retry is also rejected with
    /// 422.
    pub async fn write_review_comment(
        &self,
        request: &ReviewCommentRequest,
        supersede: Option<CommentId>,
    ) -> Result<(), CommenterError> {
        if let Some(comment_id) = supersede {
            self.delete_review_comment(comment_id).await?;
        }
        self.create_review_comment(request).await
    }

    /// Deletes one review comment.
    ///
    /// # Errors
    ///
    /// Propagates the gateway error unchanged.
    pub async fn delete_review_comment(&self, comment_id: CommentId) -> Result<(), CommenterError> {
        self.pulls
            .delete_review_comment(&self.locator, comment_id)
            .await?;
        debug!(%comment_id, "deleted superseded review comment");
        Ok(())
    }

    /// Creates a review comment with the single 422 retry.
    ///
    /// # Errors
    ///
    /// Returns a non-422 create error unchanged or
    /// [`CommenterError::AbuseRateLimit`] when the retry is also rejected with
    /// 422.
    pub async fn create_review_comment(
        &self,
        request: &ReviewCommentRequest,
    ) -> Result<(), CommenterError> {
        let pulls = &self.pulls;
        let locator = &self.locator;
        self.create_with_retry("review comment", move || {
            pulls.create_review_comment(locator, request)
        })
        .await
    }

    /// Creates a general comment on the pull request conversation.
    ///
    /// Uses the same single 422 retry as review comments; the retry's own
    /// outcome decides the result.
    ///
    /// # Errors
    ///
    /// Returns a non-422 create error unchanged or
    /// [`CommenterError::AbuseRateLimit`] when the retry is also rejected with
    /// 422.
    pub async fn write_general_comment(
        &self,
        request: &GeneralCommentRequest,
    ) -> Result<(), CommenterError> {
        let issues = &self.issues;
        let locator = &self.locator;
        self.create_with_retry("general comment", move || {
            issues.create_issue_comment(locator, request)
        })
        .await
    }

    async fn create_with_retry<Create, Pending>(
        &self,
        kind: &str,
        mut create: Create,
    ) -> Result<(), CommenterError>
    where
        Create: FnMut() -> Pending,
        Pending: Future<Output = Result<CommentId, CommenterError>>,
    {
        let mut attempt = Attempt::First;
        loop {
            match create().await {
                Ok(comment_id) => {
                    debug!(%comment_id, kind, ?attempt, "created comment");
                    return Ok(());
                }
                Err(CommenterError::Unprocessable { message }) => match attempt {
                    Attempt::First => {
                        warn!(
                            kind,
                            %message,
                            wait_seconds = SECONDARY_RATE_LIMIT_WAIT.as_secs(),
                            "comment creation rejected, retrying once"
                        );
                        tokio::time::sleep(SECONDARY_RATE_LIMIT_WAIT).await;
                        attempt = Attempt::Retry;
                    }
                    Attempt::Retry => return Err(self.abuse_rate_limit()),
                },
                Err(failure) => return Err(failure),
            }
        }
    }

    fn abuse_rate_limit(&self) -> CommenterError {
        CommenterError::AbuseRateLimit {
            owner: self.locator.owner().as_str().to_owned(),
            repository: self.locator.repository().as_str().to_owned(),
            pull_request: self.locator.number().get(),
            wait_seconds: SECONDARY_RATE_LIMIT_WAIT.as_secs(),
        }
    }
}

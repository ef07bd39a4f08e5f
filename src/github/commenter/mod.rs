//! High-level commenting facade used by the CLI.
//!
//! [`Commenter`] loads the pull request's changed files, existing review
//! comments, and head commit once, then decides per comment whether it can
//! be posted and whether it supersedes an identical earlier comment.

use tracing::debug;

use super::diff::HunkRanges;
use super::error::CommenterError;
use super::gateway::{IssueCommentGateway, PullRequestGateway};
use super::models::{ChangedFile, ExistingComment, GeneralCommentRequest, ReviewCommentRequest};
use super::session::Session;

/// Posts comments on one pull request, reconciling against what is there.
pub struct Commenter<'session, Pulls, Issues> {
    session: &'session Session<Pulls, Issues>,
    head_sha: String,
    files: Vec<ChangedFile>,
    existing: Vec<ExistingComment>,
}

impl<'session, Pulls, Issues> Commenter<'session, Pulls, Issues>
where
    Pulls: PullRequestGateway,
    Issues: IssueCommentGateway,
{
    /// Loads the pull request state the commenter reconciles against.
    ///
    /// # Errors
    ///
    /// Returns [`CommenterError::PullRequestNotFound`] when the pull request
    /// lookup fails, an `Api` error when GitHub reports no head commit, and
    /// propagates file or comment listing failures.
    pub async fn load(session: &'session Session<Pulls, Issues>) -> Result<Self, CommenterError> {
        let locator = session.locator();
        let metadata = session.pull_request().await.map_err(|failure| {
            debug!(error = %failure, "pull request lookup failed");
            CommenterError::PullRequestNotFound {
                owner: locator.owner().as_str().to_owned(),
                repository: locator.repository().as_str().to_owned(),
                pull_request: locator.number().get(),
            }
        })?;
        let head_sha = metadata.head_sha.ok_or_else(|| CommenterError::Api {
            message: "pull request has no head commit".to_owned(),
        })?;

        let files = session.changed_files().await?;
        let existing = session.existing_comments().await?;
        debug!(
            files = files.len(),
            comments = existing.len(),
            "loaded pull request state"
        );

        Ok(Self {
            session,
            head_sha,
            files,
            existing,
        })
    }

    /// Files in the diff, deleted files excluded.
    #[must_use]
    pub fn changed_files(&self) -> &[ChangedFile] {
        &self.files
    }

    /// Review comments present when the commenter was loaded, minus those
    /// it has since superseded.
    #[must_use]
    pub fn existing_comments(&self) -> &[ExistingComment] {
        &self.existing
    }

    /// Posts a review comment on a single line of `file_path`.
    ///
    /// # Errors
    ///
    /// See [`Commenter::write_multi_line_comment`].
    pub async fn write_line_comment(
        &mut self,
        file_path: &str,
        body: &str,
        line: u32,
    ) -> Result<(), CommenterError> {
        self.write_multi_line_comment(file_path, body, line, line)
            .await
    }

    /// Posts a review comment spanning `start_line..=end_line` of
    /// `file_path`.
    ///
    /// An existing review comment on the same file with the same body is
    /// superseded instead of duplicated. Once its delete succeeds it leaves
    /// [`Commenter::existing_comments`], even if the create then fails.
    ///
    /// # Errors
    ///
    /// Returns [`CommenterError::CommentNotValid`] when the file is not in the
    /// diff or the span does not sit inside one hunk, and otherwise the
    /// delete or create error from the session.
    pub async fn write_multi_line_comment(
        &mut self,
        file_path: &str,
        body: &str,
        start_line: u32,
        end_line: u32,
    ) -> Result<(), CommenterError> {
        if !self.is_commentable(file_path, start_line, end_line) {
            return Err(CommenterError::CommentNotValid {
                file_path: file_path.to_owned(),
                start_line,
                end_line,
            });
        }

        let request =
            ReviewCommentRequest::on_line(file_path, body, self.head_sha.as_str(), end_line)
                .starting_at(start_line);
        let supersede = self
            .existing
            .iter()
            .find(|comment| {
                comment.file_path.as_deref() == Some(file_path) && comment.body == body
            })
            .map(|comment| comment.id);

        if let Some(superseded) = supersede {
            self.session.delete_review_comment(superseded).await?;
            self.existing.retain(|comment| comment.id != superseded);
        }
        self.session.create_review_comment(&request).await
    }

    /// Posts a general comment on the pull request conversation.
    ///
    /// # Errors
    ///
    /// Returns the delivery error from [`Session::write_general_comment`].
    pub async fn write_general_comment(&self, body: &str) -> Result<(), CommenterError> {
        self.session
            .write_general_comment(&GeneralCommentRequest::new(body))
            .await
    }

    fn is_commentable(&self, file_path: &str, start_line: u32, end_line: u32) -> bool {
        self.files
            .iter()
            .find(|file| file.path == file_path)
            .and_then(|file| file.patch.as_deref())
            .is_some_and(|patch| HunkRanges::parse(patch).contains_span(start_line, end_line))
    }
}

//! Data models for pull request files, comments, and comment payloads.
//!
//! Types prefixed with `Api` are internal deserialisation targets that
//! convert into public domain types. Request payloads serialise directly into
//! the JSON bodies GitHub expects.

use std::fmt;

use serde::{Deserialize, Serialize};

#[cfg(feature = "test-support")]
pub mod test_support;

/// Identifier of a comment on GitHub.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommentId(u64);

impl CommentId {
    /// Wraps a raw comment identifier.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// Change status of a file within a pull request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
    /// The file was created.
    Added,
    /// The file was deleted. GitHub reports `removed`; `deleted` is accepted
    /// as well.
    #[serde(alias = "deleted")]
    Removed,
    /// The file content changed.
    Modified,
    /// The file moved, possibly with content changes.
    Renamed,
    /// The file was copied from another path.
    Copied,
    /// The file mode or metadata changed.
    Changed,
    /// The file is listed without changes.
    Unchanged,
    /// A status this crate does not know about.
    #[serde(other)]
    Unknown,
}

/// A file touched by the pull request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangedFile {
    /// Path of the file in the head revision.
    pub path: String,
    /// Change status.
    pub status: FileStatus,
    /// Unified diff for the file, absent for binary or very large files.
    pub patch: Option<String>,
    /// Number of added lines.
    pub additions: u64,
    /// Number of deleted lines.
    pub deletions: u64,
    /// Total changed lines.
    pub changes: u64,
    /// Path before a rename.
    pub previous_path: Option<String>,
    /// Blob URL for the file at the head commit.
    pub blob_url: Option<String>,
}

impl ChangedFile {
    /// Returns true when the file no longer exists in the head revision.
    #[must_use]
    pub const fn is_deleted(&self) -> bool {
        matches!(self.status, FileStatus::Removed)
    }
}

/// Snapshot of a review comment already present on the pull request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExistingComment {
    /// File the comment is attached to, absent for non-file comments.
    pub file_path: Option<String>,
    /// Comment body text.
    pub body: String,
    /// Comment identifier.
    pub id: CommentId,
}

/// Minimal pull request metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PullRequestMetadata {
    /// Pull request number.
    pub number: u64,
    /// Title of the pull request.
    pub title: Option<String>,
    /// State (e.g. open, closed).
    pub state: Option<String>,
    /// Commit SHA at the head of the pull request branch.
    pub head_sha: Option<String>,
}

/// Side of the diff a review comment is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DiffSide {
    /// The base revision (deletions).
    Left,
    /// The head revision (additions and context).
    Right,
}

/// Payload for an inline review comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewCommentRequest {
    /// Comment body text.
    pub body: String,
    /// Commit the comment is made against.
    pub commit_id: String,
    /// File the comment targets.
    pub path: String,
    /// Last (or only) line of the commented range.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
    /// Diff side of `line`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<DiffSide>,
    /// First line of a multi-line range.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_line: Option<u32>,
    /// Diff side of `start_line`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_side: Option<DiffSide>,
}

impl ReviewCommentRequest {
    /// Builds a single-line comment on the head side of the diff.
    #[must_use]
    pub fn on_line(
        path: impl Into<String>,
        body: impl Into<String>,
        commit_id: impl Into<String>,
        line: u32,
    ) -> Self {
        Self {
            body: body.into(),
            commit_id: commit_id.into(),
            path: path.into(),
            line: Some(line),
            side: Some(DiffSide::Right),
            start_line: None,
            start_side: None,
        }
    }

    /// Extends the comment to start at `start_line`.
    ///
    /// A start equal to the end line leaves a single-line comment.
    #[must_use]
    pub fn starting_at(self, start_line: u32) -> Self {
        if self.line == Some(start_line) {
            return self;
        }
        Self {
            start_line: Some(start_line),
            start_side: self.side,
            ..self
        }
    }
}

/// Payload for a general (issue-level) pull request comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneralCommentRequest {
    /// Comment body text.
    pub body: String,
}

impl GeneralCommentRequest {
    /// Wraps the body of a general comment.
    #[must_use]
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiPullRequest {
    pub(crate) number: u64,
    pub(crate) title: Option<String>,
    pub(crate) state: Option<String>,
    pub(crate) head: Option<ApiCommitRef>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiCommitRef {
    pub(crate) sha: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiChangedFile {
    pub(crate) filename: String,
    pub(crate) status: FileStatus,
    pub(crate) patch: Option<String>,
    #[serde(default)]
    pub(crate) additions: u64,
    #[serde(default)]
    pub(crate) deletions: u64,
    #[serde(default)]
    pub(crate) changes: u64,
    pub(crate) previous_filename: Option<String>,
    pub(crate) blob_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiReviewComment {
    pub(crate) id: u64,
    pub(crate) body: Option<String>,
    pub(crate) path: Option<String>,
}

/// Minimal view of a created comment; only the identifier is read back.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiCreatedComment {
    pub(crate) id: u64,
}

impl From<ApiPullRequest> for PullRequestMetadata {
    fn from(value: ApiPullRequest) -> Self {
        Self {
            number: value.number,
            title: value.title,
            state: value.state,
            head_sha: value.head.and_then(|head| head.sha),
        }
    }
}

impl From<ApiChangedFile> for ChangedFile {
    fn from(value: ApiChangedFile) -> Self {
        Self {
            path: value.filename,
            status: value.status,
            patch: value.patch,
            additions: value.additions,
            deletions: value.deletions,
            changes: value.changes,
            previous_path: value.previous_filename,
            blob_url: value.blob_url,
        }
    }
}

impl From<ApiReviewComment> for ExistingComment {
    fn from(value: ApiReviewComment) -> Self {
        Self {
            file_path: value.path,
            body: value.body.unwrap_or_default(),
            id: CommentId::new(value.id),
        }
    }
}

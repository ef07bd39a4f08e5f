//! GitHub pull request comment reconciliation and delivery.
//!
//! This module wraps Octocrab to list the files a pull request changes,
//! snapshot its existing review comments, and post new review or general
//! comments. Comment creation is retried once when GitHub signals its
//! secondary rate limit, and errors are mapped into variants that callers can
//! surface without exposing Octocrab internals.

pub mod commenter;
pub mod diff;
pub mod endpoint;
pub mod error;
pub mod gateway;
pub mod locator;
pub mod models;
pub mod session;

pub use commenter::Commenter;
pub use diff::HunkRanges;
pub use endpoint::EnterpriseEndpoint;
pub use error::CommenterError;
pub use gateway::{
    IssueCommentGateway, OctocrabIssueCommentGateway, OctocrabPullRequestGateway,
    PullRequestGateway,
};
pub use locator::{
    PersonalAccessToken, PullRequestLocator, PullRequestNumber, RepositoryName, RepositoryOwner,
};
pub use models::{
    ChangedFile, CommentId, DiffSide, ExistingComment, FileStatus, GeneralCommentRequest,
    PullRequestMetadata, ReviewCommentRequest,
};
pub use session::{SECONDARY_RATE_LIMIT_WAIT, Session, SessionInput};

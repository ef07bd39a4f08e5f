//! Commenter library crate: reconcile and deliver pull request comments.
//!
//! The library wraps Octocrab to list the files a pull request changes,
//! snapshot the review comments already on it, and post review or general
//! comments, retrying once when GitHub's secondary rate limit rejects a
//! create.

pub mod config;
pub mod github;

pub use config::{CommentTarget, CommenterConfig};
pub use github::{
    Commenter, CommenterError, PersonalAccessToken, PullRequestLocator, Session, SessionInput,
};

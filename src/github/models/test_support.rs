//! Test helpers for constructing changed-file and comment fixtures.
//!
//! # Examples
//!
//! ```
//! use commenter::github::models::FileStatus;
//! use commenter::github::models::test_support::{changed_file, existing_comment};
//!
//! let file = changed_file("src/lib.rs", FileStatus::Modified, Some("@@ -1 +1,2 @@"));
//! assert_eq!(file.path, "src/lib.rs");
//!
//! let comment = existing_comment(Some("src/lib.rs"), "nit", 7);
//! assert_eq!(comment.id.get(), 7);
//! ```

use super::{ChangedFile, CommentId, ExistingComment, FileStatus};

/// Constructs a `ChangedFile` with the given path, status, and patch.
///
/// Line counters are zero and rename or blob metadata is absent.
#[must_use]
pub fn changed_file(path: &str, status: FileStatus, patch: Option<&str>) -> ChangedFile {
    ChangedFile {
        path: path.to_owned(),
        status,
        patch: patch.map(ToOwned::to_owned),
        additions: 0,
        deletions: 0,
        changes: 0,
        previous_path: None,
        blob_url: None,
    }
}

/// Constructs an `ExistingComment` snapshot entry.
#[must_use]
pub fn existing_comment(file_path: Option<&str>, body: &str, id: u64) -> ExistingComment {
    ExistingComment {
        file_path: file_path.map(ToOwned::to_owned),
        body: body.to_owned(),
        id: CommentId::new(id),
    }
}

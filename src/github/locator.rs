//! URL parsing and identity wrappers for pull request comments.

use url::Url;

use super::error::CommenterError;
use super::models::CommentId;

const PUBLIC_API_BASE: &str = "https://api.github.com";

/// Repository owner wrapper to avoid stringly typed parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryOwner(String);

impl RepositoryOwner {
    /// Validates that the owner is non-empty.
    ///
    /// # Errors
    ///
    /// Returns `CommenterError::MissingPathSegments` for an empty owner.
    pub fn new(value: &str) -> Result<Self, CommenterError> {
        if value.is_empty() {
            return Err(CommenterError::MissingPathSegments);
        }
        Ok(Self(value.to_owned()))
    }

    /// Borrow the owner value.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Repository name wrapper to prevent parameter mix-ups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryName(String);

impl RepositoryName {
    /// Validates that the repository name is non-empty.
    ///
    /// # Errors
    ///
    /// Returns `CommenterError::MissingPathSegments` for an empty name.
    pub fn new(value: &str) -> Result<Self, CommenterError> {
        if value.is_empty() {
            return Err(CommenterError::MissingPathSegments);
        }
        Ok(Self(value.to_owned()))
    }

    /// Borrow the repository name.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Pull request number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PullRequestNumber(u64);

impl PullRequestNumber {
    /// Validates that the number is positive.
    ///
    /// # Errors
    ///
    /// Returns `CommenterError::InvalidPullRequestNumber` for zero.
    pub const fn new(value: u64) -> Result<Self, CommenterError> {
        if value == 0 {
            return Err(CommenterError::InvalidPullRequestNumber);
        }
        Ok(Self(value))
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Personal access token wrapper enforcing presence.
#[derive(Clone, PartialEq, Eq)]
pub struct PersonalAccessToken(String);

impl PersonalAccessToken {
    /// Validates that the token is non-empty and trims whitespace.
    ///
    /// # Errors
    ///
    /// Returns `CommenterError::MissingToken` when the supplied string is blank.
    pub fn new(token: impl AsRef<str>) -> Result<Self, CommenterError> {
        let trimmed = token.as_ref().trim();
        if trimmed.is_empty() {
            return Err(CommenterError::MissingToken);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the token value.
    #[must_use]
    pub const fn value(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for PersonalAccessToken {
    fn as_ref(&self) -> &str {
        self.value()
    }
}

impl std::fmt::Debug for PersonalAccessToken {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("PersonalAccessToken(***)")
    }
}

/// Derives the GitHub API base URL from a parsed pull request URL.
fn derive_api_base(parsed: &Url) -> Result<Url, CommenterError> {
    let host = parsed
        .host_str()
        .ok_or_else(|| CommenterError::InvalidUrl("URL must include a host".to_owned()))?;

    if host.eq_ignore_ascii_case("github.com") {
        return public_api_base();
    }

    let authority = if host.contains(':') {
        format!("[{host}]")
    } else {
        host.to_owned()
    };
    let mut api_url = Url::parse(&format!("{}://{authority}", parsed.scheme()))
        .map_err(|error| CommenterError::InvalidUrl(error.to_string()))?;

    api_url
        .set_port(parsed.port())
        .map_err(|()| CommenterError::InvalidUrl("invalid port".to_owned()))?;
    api_url.set_path("api/v3");
    Ok(api_url)
}

fn public_api_base() -> Result<Url, CommenterError> {
    Url::parse(PUBLIC_API_BASE).map_err(|error| CommenterError::InvalidUrl(error.to_string()))
}

/// Coordinates of the target pull request and the API base serving it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestLocator {
    api_base: Url,
    owner: RepositoryOwner,
    repository: RepositoryName,
    number: PullRequestNumber,
}

impl PullRequestLocator {
    /// Builds a locator against the public `api.github.com` endpoint.
    ///
    /// # Errors
    ///
    /// Returns `MissingPathSegments` when owner or repository is empty and
    /// `InvalidPullRequestNumber` when the number is zero.
    pub fn from_parts(owner: &str, repository: &str, number: u64) -> Result<Self, CommenterError> {
        Ok(Self {
            api_base: public_api_base()?,
            owner: RepositoryOwner::new(owner)?,
            repository: RepositoryName::new(repository)?,
            number: PullRequestNumber::new(number)?,
        })
    }

    /// Parses a GitHub pull request URL in the form
    /// `https://github.com/<owner>/<repo>/pull/<number>`.
    ///
    /// Hosts other than `github.com` are treated as GitHub Enterprise and
    /// resolve to `<scheme>://<host>/api/v3`.
    ///
    /// # Errors
    ///
    /// Returns `CommenterError::InvalidUrl` when parsing fails, `MissingPathSegments`
    /// when the URL path is not `/owner/repo/pull/<number>`, and
    /// `InvalidPullRequestNumber` when the final segment is not a positive
    /// integer.
    pub fn parse(input: &str) -> Result<Self, CommenterError> {
        let parsed =
            Url::parse(input).map_err(|error| CommenterError::InvalidUrl(error.to_string()))?;

        let mut segments = parsed
            .path_segments()
            .ok_or(CommenterError::MissingPathSegments)?;

        let owner_segment = segments.next().ok_or(CommenterError::MissingPathSegments)?;
        let repository_segment = segments.next().ok_or(CommenterError::MissingPathSegments)?;
        let marker = segments.next().ok_or(CommenterError::MissingPathSegments)?;
        let number_segment = segments.next().ok_or(CommenterError::MissingPathSegments)?;

        if marker != "pull" || number_segment.is_empty() {
            return Err(CommenterError::MissingPathSegments);
        }

        let owner = RepositoryOwner::new(owner_segment)?;
        let repository = RepositoryName::new(repository_segment)?;
        let number = number_segment
            .parse::<u64>()
            .map_err(|_| CommenterError::InvalidPullRequestNumber)
            .and_then(PullRequestNumber::new)?;

        Ok(Self {
            api_base: derive_api_base(&parsed)?,
            owner,
            repository,
            number,
        })
    }

    /// Returns a copy of this locator served from a different API base.
    #[must_use]
    pub fn with_api_base(self, api_base: Url) -> Self {
        Self { api_base, ..self }
    }

    /// API base URL serving this pull request.
    #[must_use]
    pub const fn api_base(&self) -> &Url {
        &self.api_base
    }

    /// Repository owner.
    #[must_use]
    pub const fn owner(&self) -> &RepositoryOwner {
        &self.owner
    }

    /// Repository name.
    #[must_use]
    pub const fn repository(&self) -> &RepositoryName {
        &self.repository
    }

    /// Pull request number.
    #[must_use]
    pub const fn number(&self) -> PullRequestNumber {
        self.number
    }

    fn repository_path(&self) -> String {
        format!(
            "/repos/{}/{}",
            self.owner.as_str(),
            self.repository.as_str()
        )
    }

    pub(crate) fn pull_request_path(&self) -> String {
        format!("{}/pulls/{}", self.repository_path(), self.number.get())
    }

    pub(crate) fn files_path(&self) -> String {
        format!("{}/files", self.pull_request_path())
    }

    pub(crate) fn review_comments_path(&self) -> String {
        format!("{}/comments", self.pull_request_path())
    }

    pub(crate) fn review_comment_path(&self, comment_id: CommentId) -> String {
        format!(
            "{}/pulls/comments/{}",
            self.repository_path(),
            comment_id.get()
        )
    }

    pub(crate) fn issue_comments_path(&self) -> String {
        format!(
            "{}/issues/{}/comments",
            self.repository_path(),
            self.number.get()
        )
    }
}

//! GitHub Enterprise endpoint normalisation.
//!
//! Self-hosted GitHub serves the REST API under `/api/v3/` and uploads under
//! `/api/uploads/`. Operators frequently configure only the host, so both
//! URLs are completed here before the Octocrab client sees them.

use url::Url;

use super::error::CommenterError;

const API_SUFFIX: &str = "api/v3/";
const UPLOADS_SUFFIX: &str = "api/uploads/";

/// Base and upload URLs of a private or self-hosted GitHub instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnterpriseEndpoint {
    base_url: Url,
    upload_url: Url,
}

impl EnterpriseEndpoint {
    /// Parses and normalises the enterprise base and upload URLs.
    ///
    /// A trailing slash is ensured on both paths. `api/v3/` is appended to the
    /// base and `api/uploads/` to the upload URL unless the path already ends
    /// with it or the host is itself an `api.` host.
    ///
    /// # Errors
    ///
    /// Returns [`CommenterError::EnterpriseConnection`] when either URL cannot
    /// be parsed.
    pub fn new(base_url: &str, upload_url: &str) -> Result<Self, CommenterError> {
        Ok(Self {
            base_url: normalise(base_url, API_SUFFIX)?,
            upload_url: normalise(upload_url, UPLOADS_SUFFIX)?,
        })
    }

    /// Normalised API base URL, always ending in `/`.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Normalised upload URL, always ending in `/`.
    #[must_use]
    pub const fn upload_url(&self) -> &Url {
        &self.upload_url
    }
}

fn normalise(raw: &str, suffix: &str) -> Result<Url, CommenterError> {
    let mut url = Url::parse(raw).map_err(|error| CommenterError::EnterpriseConnection {
        message: format!("invalid endpoint `{raw}`: {error}"),
    })?;

    let mut path = url.path().to_owned();
    if !path.ends_with('/') {
        path.push('/');
    }

    let host = url.host_str().unwrap_or_default();
    let is_api_host = host.starts_with("api.") || host.contains(".api.");
    if !path.ends_with(&format!("/{suffix}")) && !is_api_host {
        path.push_str(suffix);
    }

    url.set_path(&path);
    Ok(url)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::EnterpriseEndpoint;
    use crate::github::error::CommenterError;

    #[rstest]
    #[case::bare_host("https://ghe.example.com", "https://ghe.example.com/api/v3/")]
    #[case::trailing_slash("https://ghe.example.com/", "https://ghe.example.com/api/v3/")]
    #[case::already_complete(
        "https://ghe.example.com/api/v3",
        "https://ghe.example.com/api/v3/"
    )]
    #[case::api_host("https://api.ghe.example.com", "https://api.ghe.example.com/")]
    #[case::nested_api_host(
        "https://corp.api.example.com/",
        "https://corp.api.example.com/"
    )]
    #[case::with_port("http://127.0.0.1:8080", "http://127.0.0.1:8080/api/v3/")]
    fn normalises_base_url(#[case] raw: &str, #[case] expected: &str) {
        let endpoint =
            EnterpriseEndpoint::new(raw, "https://ghe.example.com").expect("endpoint should parse");
        assert_eq!(endpoint.base_url().as_str(), expected);
    }

    #[rstest]
    #[case::bare_host("https://ghe.example.com", "https://ghe.example.com/api/uploads/")]
    #[case::already_complete(
        "https://ghe.example.com/api/uploads/",
        "https://ghe.example.com/api/uploads/"
    )]
    fn normalises_upload_url(#[case] raw: &str, #[case] expected: &str) {
        let endpoint =
            EnterpriseEndpoint::new("https://ghe.example.com", raw).expect("endpoint should parse");
        assert_eq!(endpoint.upload_url().as_str(), expected);
    }

    #[rstest]
    fn rejects_unparseable_url() {
        let result = EnterpriseEndpoint::new("not a url", "https://ghe.example.com");
        assert!(
            matches!(result, Err(CommenterError::EnterpriseConnection { .. })),
            "expected EnterpriseConnection, got {result:?}"
        );
    }
}

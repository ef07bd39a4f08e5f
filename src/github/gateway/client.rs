//! Octocrab client construction helpers for gateway implementations.

use std::time::Duration;

use http::Uri;
use octocrab::Octocrab;
use url::Url;

use crate::github::error::CommenterError;
use crate::github::locator::PersonalAccessToken;

use super::error_mapping::map_octocrab_error;

/// Where and how the Octocrab client talks to GitHub.
#[derive(Debug, Clone, Default)]
pub struct ClientSettings<'a> {
    /// API base URL; the public API when absent.
    pub api_base: Option<&'a Url>,
    /// Upload URL for enterprise instances.
    pub upload_base: Option<&'a Url>,
    /// Connect, read, and write timeout applied to every request.
    pub request_timeout: Option<Duration>,
}

/// Builds an authenticated Octocrab client.
///
/// No request is sent; the client is only configured.
///
/// # Errors
///
/// Returns `CommenterError::InvalidUrl` when a URL cannot be converted into a
/// URI or `CommenterError::Api` when Octocrab fails to construct a client.
pub fn build_octocrab_client(
    token: &PersonalAccessToken,
    settings: &ClientSettings<'_>,
) -> Result<Octocrab, CommenterError> {
    let mut builder = Octocrab::builder()
        .set_connect_timeout(settings.request_timeout)
        .set_read_timeout(settings.request_timeout)
        .set_write_timeout(settings.request_timeout)
        .personal_token(token.as_ref());

    if let Some(api_base) = settings.api_base {
        builder = builder
            .base_uri(to_uri(api_base)?)
            .map_err(|error| CommenterError::Api {
                message: format!("build client failed: {error}"),
            })?;
    }

    if let Some(upload_base) = settings.upload_base {
        builder = builder
            .upload_uri(to_uri(upload_base)?)
            .map_err(|error| CommenterError::Api {
                message: format!("build client failed: {error}"),
            })?;
    }

    builder
        .build()
        .map_err(|error| map_octocrab_error("build client", &error))
}

/// Converts a URL into a URI without its trailing slash so Octocrab can join
/// absolute API routes onto it.
fn to_uri(url: &Url) -> Result<Uri, CommenterError> {
    url.as_str()
        .trim_end_matches('/')
        .parse::<Uri>()
        .map_err(|error| CommenterError::InvalidUrl(error.to_string()))
}

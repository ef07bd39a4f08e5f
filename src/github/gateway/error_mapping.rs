//! Error mapping helpers for the Octocrab GitHub gateway implementations.

use http::StatusCode;

use crate::github::error::CommenterError;

/// Checks if a GitHub error status indicates an authentication failure.
pub(super) const fn is_auth_failure(status: StatusCode) -> bool {
    matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN)
}

/// Checks if an octocrab error represents a network/transport issue.
pub(super) const fn is_network_error(error: &octocrab::Error) -> bool {
    matches!(
        error,
        octocrab::Error::Http { .. }
            | octocrab::Error::Hyper { .. }
            | octocrab::Error::Service { .. }
    )
}

pub(super) fn map_octocrab_error(operation: &str, error: &octocrab::Error) -> CommenterError {
    if let octocrab::Error::GitHub { source, .. } = error {
        return map_http_error(
            operation,
            source.status_code,
            Some(source.message.clone()),
        );
    }

    if is_network_error(error) {
        return CommenterError::Network {
            message: format!("{operation} failed: {error}"),
        };
    }

    CommenterError::Api {
        message: format!("{operation} failed: {error}"),
    }
}

pub(super) fn map_http_error(
    operation: &str,
    status: StatusCode,
    maybe_message: Option<String>,
) -> CommenterError {
    let message = maybe_message.unwrap_or_else(|| "unknown error".to_owned());
    if is_auth_failure(status) {
        CommenterError::Authentication {
            message: format!("{operation} failed: GitHub returned {status} {message}"),
        }
    } else if status == StatusCode::UNPROCESSABLE_ENTITY {
        CommenterError::Unprocessable {
            message: format!("{operation} failed: {message}"),
        }
    } else {
        CommenterError::Api {
            message: format!("{operation} failed with status {status}: {message}"),
        }
    }
}

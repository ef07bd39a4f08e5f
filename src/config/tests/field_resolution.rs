//! Tests for field resolution (`resolve_token`, `resolve_locator`,
//! `enterprise_endpoint`, `request_timeout`, `comment_target`).

use std::time::Duration;

use rstest::rstest;

use crate::CommenterConfig;
use crate::config::CommentTarget;
use crate::github::CommenterError;

#[rstest]
fn resolve_token_prefers_configured_value() {
    let _guard = env_lock::lock_env([("GITHUB_TOKEN", Some("legacy-token"))]);
    let config = CommenterConfig {
        token: Some("my-token".to_owned()),
        ..Default::default()
    };

    let token = config.resolve_token().expect("token should resolve");
    assert_eq!(token.value(), "my-token");
}

#[rstest]
fn resolve_token_falls_back_to_github_token() {
    let _guard = env_lock::lock_env([("GITHUB_TOKEN", Some("legacy-token"))]);
    let config = CommenterConfig::default();

    let token = config.resolve_token().expect("legacy token should resolve");
    assert_eq!(token.value(), "legacy-token");
}

#[rstest]
#[case::unset(None)]
#[case::blank(Some("   "))]
fn resolve_token_reports_missing_token(#[case] legacy: Option<&str>) {
    let _guard = env_lock::lock_env([("GITHUB_TOKEN", legacy)]);
    let config = CommenterConfig::default();

    assert_eq!(config.resolve_token().err(), Some(CommenterError::MissingToken));
}

#[rstest]
fn resolve_locator_prefers_url() {
    let config = CommenterConfig {
        pr_url: Some("https://ghe.example.com/octo/repo/pull/9".to_owned()),
        owner: Some("ignored".to_owned()),
        repo: Some("ignored".to_owned()),
        pr_number: Some(1),
        ..Default::default()
    };

    let locator = config.resolve_locator().expect("locator should resolve");
    assert_eq!(locator.owner().as_str(), "octo");
    assert_eq!(locator.number().get(), 9);
    assert_eq!(locator.api_base().as_str(), "https://ghe.example.com/api/v3");
}

#[rstest]
fn resolve_locator_from_coordinates() {
    let config = CommenterConfig {
        owner: Some("octo".to_owned()),
        repo: Some("repo".to_owned()),
        pr_number: Some(4),
        ..Default::default()
    };

    let locator = config.resolve_locator().expect("locator should resolve");
    assert_eq!(locator.repository().as_str(), "repo");
    assert_eq!(locator.api_base().as_str(), "https://api.github.com/");
}

#[rstest]
#[case::nothing(None, None, None)]
#[case::no_number(Some("octo"), Some("repo"), None)]
#[case::no_owner(None, Some("repo"), Some(4))]
fn resolve_locator_requires_complete_coordinates(
    #[case] owner: Option<&str>,
    #[case] repo: Option<&str>,
    #[case] pr_number: Option<u64>,
) {
    let config = CommenterConfig {
        owner: owner.map(ToOwned::to_owned),
        repo: repo.map(ToOwned::to_owned),
        pr_number,
        ..Default::default()
    };

    assert_eq!(
        config.resolve_locator().err(),
        Some(CommenterError::MissingPullRequest)
    );
}

#[rstest]
fn enterprise_upload_defaults_to_base() {
    let config = CommenterConfig {
        enterprise_base_url: Some("https://ghe.example.com".to_owned()),
        ..Default::default()
    };

    let endpoint = config
        .enterprise_endpoint()
        .expect("endpoint should resolve")
        .expect("endpoint should be configured");
    assert_eq!(endpoint.base_url().as_str(), "https://ghe.example.com/api/v3/");
    assert_eq!(
        endpoint.upload_url().as_str(),
        "https://ghe.example.com/api/uploads/"
    );
}

#[rstest]
fn enterprise_upload_without_base_is_rejected() {
    let config = CommenterConfig {
        enterprise_upload_url: Some("https://ghe.example.com".to_owned()),
        ..Default::default()
    };

    assert!(matches!(
        config.enterprise_endpoint(),
        Err(CommenterError::Configuration { .. })
    ));
}

#[rstest]
fn no_enterprise_configuration_means_public_github() {
    let config = CommenterConfig::default();

    assert_eq!(config.enterprise_endpoint(), Ok(None));
}

#[rstest]
#[case::default(30, Some(Duration::from_secs(30)))]
#[case::disabled(0, None)]
fn request_timeout_maps_seconds(#[case] seconds: u64, #[case] expected: Option<Duration>) {
    let config = CommenterConfig {
        request_timeout_seconds: seconds,
        ..Default::default()
    };

    assert_eq!(config.request_timeout(), expected);
}

#[rstest]
fn comment_target_without_anything_is_none() {
    let config = CommenterConfig::default();

    assert_eq!(config.comment_target(), Ok(CommentTarget::None));
}

#[rstest]
#[case::file_and_line(Some("a.go"), Some(3), None)]
#[case::line_only(None, Some(3), None)]
#[case::start_only(None, None, Some(1))]
fn comment_target_rejects_coordinates_without_body(
    #[case] file: Option<&str>,
    #[case] line: Option<u32>,
    #[case] start_line: Option<u32>,
) {
    let config = CommenterConfig {
        file: file.map(ToOwned::to_owned),
        line,
        start_line,
        ..Default::default()
    };

    assert!(matches!(
        config.comment_target(),
        Err(CommenterError::Configuration { .. })
    ));
}

#[rstest]
fn comment_target_selects_general_or_review() {
    let general = CommenterConfig {
        body: Some("hello".to_owned()),
        ..Default::default()
    };
    let review = CommenterConfig {
        body: Some("hello".to_owned()),
        file: Some("a.go".to_owned()),
        line: Some(8),
        start_line: Some(5),
        ..Default::default()
    };

    assert_eq!(
        general.comment_target(),
        Ok(CommentTarget::General { body: "hello" })
    );
    assert_eq!(
        review.comment_target(),
        Ok(CommentTarget::Review {
            body: "hello",
            file: "a.go",
            start_line: 5,
            line: 8,
        })
    );
}

#[rstest]
#[case::file_only(Some("a.go"), None, None)]
#[case::line_only(None, Some(3), None)]
#[case::start_only(None, None, Some(1))]
fn comment_target_rejects_partial_review_coordinates(
    #[case] file: Option<&str>,
    #[case] line: Option<u32>,
    #[case] start_line: Option<u32>,
) {
    let config = CommenterConfig {
        body: Some("hello".to_owned()),
        file: file.map(ToOwned::to_owned),
        line,
        start_line,
        ..Default::default()
    };

    assert!(matches!(
        config.comment_target(),
        Err(CommenterError::Configuration { .. })
    ));
}

//! Wiremock fixtures for an enterprise-hosted pull request.

use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::runtime::SharedRuntime;

pub(crate) const EXISTING_COMMENT_ID: u64 = 7;
pub(crate) const EXISTING_COMMENT_BODY: &str = "duplicate note";

const HEAD_SHA: &str = "6dcb09b5b57875f334f61aebed695e2e4193db5e";

fn repository_path() -> &'static str {
    "/api/v3/repos/octo/repo"
}

fn changed_files() -> Value {
    json!([
        {
            "filename": "a.go",
            "status": "modified",
            "additions": 1,
            "deletions": 0,
            "changes": 1,
            "patch": "@@ -1,2 +1,3 @@\n a\n+b\n c"
        },
        {
            "filename": "gone.go",
            "status": "removed",
            "additions": 0,
            "deletions": 4,
            "changes": 4
        }
    ])
}

fn existing_comments() -> Value {
    json!([
        {
            "id": EXISTING_COMMENT_ID,
            "body": EXISTING_COMMENT_BODY,
            "path": "a.go"
        }
    ])
}

/// Mounts the pull request, its files and review comments, and successful
/// create and delete endpoints.
pub(crate) fn mount_pull_request(runtime: &SharedRuntime, server: &MockServer, pr: u64) {
    let repo = repository_path();
    let pull = format!("{repo}/pulls/{pr}");

    let mocks = [
        Mock::given(method("GET")).and(path(pull.clone())).respond_with(
            ResponseTemplate::new(200).set_body_json(json!({
                "number": pr,
                "title": "Add commenter",
                "state": "open",
                "head": { "sha": HEAD_SHA }
            })),
        ),
        Mock::given(method("GET"))
            .and(path(format!("{pull}/files")))
            .respond_with(ResponseTemplate::new(200).set_body_json(changed_files())),
        Mock::given(method("GET"))
            .and(path(format!("{pull}/comments")))
            .respond_with(ResponseTemplate::new(200).set_body_json(existing_comments())),
        Mock::given(method("POST"))
            .and(path(format!("{pull}/comments")))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": 100 }))),
        Mock::given(method("POST"))
            .and(path(format!("{repo}/issues/{pr}/comments")))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": 200 }))),
        Mock::given(method("DELETE"))
            .and(path(format!(
                "{repo}/pulls/comments/{EXISTING_COMMENT_ID}"
            )))
            .respond_with(ResponseTemplate::new(204)),
    ];

    for mock in mocks {
        runtime.block_on(mock.mount(server));
    }
}

/// Answers the first `times` comment creations with 422 before the
/// successful mocks take over.
pub(crate) fn mount_rejections(runtime: &SharedRuntime, server: &MockServer, times: u64) {
    let rejection = ResponseTemplate::new(422).set_body_json(json!({
        "message": "Validation Failed",
        "errors": ["was submitted too quickly"]
    }));

    let mock = Mock::given(method("POST"))
        .respond_with(rejection)
        .up_to_n_times(times)
        .with_priority(1);
    runtime.block_on(mock.mount(server));
}

//! Scenario state and session wiring for the comment delivery BDD tests.

use std::time::Duration;

use commenter::github::{
    ChangedFile, EnterpriseEndpoint, OctocrabIssueCommentGateway, OctocrabPullRequestGateway,
};
use commenter::{CommenterError, PersonalAccessToken, PullRequestLocator, Session, SessionInput};
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use wiremock::MockServer;

use super::runtime::SharedRuntime;

/// State shared across the steps of one delivery scenario.
#[derive(ScenarioState, Default)]
pub(crate) struct DeliveryState {
    pub(crate) runtime: Slot<SharedRuntime>,
    pub(crate) server: Slot<MockServer>,
    pub(crate) pull_request: Slot<u64>,
    pub(crate) files: Slot<Vec<ChangedFile>>,
    pub(crate) outcome: Slot<Result<(), CommenterError>>,
}

/// Returns the scenario runtime, starting it and the server if needed.
///
/// # Errors
///
/// Returns [`CommenterError::Io`] when the Tokio runtime cannot be created.
pub(crate) fn ensure_runtime_and_server(
    state: &DeliveryState,
) -> Result<SharedRuntime, CommenterError> {
    super::runtime::ensure_runtime_and_server(&state.runtime, &state.server).map_err(|error| {
        CommenterError::Io {
            message: format!("failed to create Tokio runtime: {error}"),
        }
    })
}

/// Connects a session to the mock server as a GitHub Enterprise host.
///
/// Must run inside the scenario runtime.
///
/// # Errors
///
/// Returns an error when the server, pull request number, or client is
/// unavailable.
pub(crate) fn open_session(
    state: &DeliveryState,
) -> Result<Session<OctocrabPullRequestGateway, OctocrabIssueCommentGateway>, CommenterError> {
    let server_url = state
        .server
        .with_ref(MockServer::uri)
        .ok_or_else(|| CommenterError::InvalidUrl("mock server URL missing".to_owned()))?;
    let pr = state.pull_request.get().ok_or(CommenterError::MissingPullRequest)?;

    Session::connect(&SessionInput {
        token: PersonalAccessToken::new("valid-token")?,
        locator: PullRequestLocator::from_parts("octo", "repo", pr)?,
        enterprise: Some(EnterpriseEndpoint::new(&server_url, &server_url)?),
        request_timeout: Some(Duration::from_secs(10)),
    })
}

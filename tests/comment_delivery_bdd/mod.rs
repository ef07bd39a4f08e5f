//! Support modules for the comment delivery BDD tests.

pub(crate) mod harness;
#[path = "../support/runtime.rs"]
pub(crate) mod runtime;
pub(crate) mod state;

pub(crate) use harness::{
    EXISTING_COMMENT_BODY, EXISTING_COMMENT_ID, mount_pull_request, mount_rejections,
};
pub(crate) use state::{DeliveryState, ensure_runtime_and_server, open_session};

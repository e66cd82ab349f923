//! Deterministic stand-ins for the Stash GraphQL service.
//!
//! Both doubles recognise a request only by the `operationName` member of its
//! JSON body and answer with canned payloads from [`payload`]:
//!
//! - [`StubTransport`] is injected into a [`StashClient`](sr_stash::StashClient)
//!   in place of the HTTP transport. Nothing leaves the process.
//! - [`MockStash`] is a local HTTP server for code that builds its own HTTP
//!   client from a URL.
//!
//! Each double owns its stubs, so parallel tests never see each other's
//! registrations. A request no stub matches is never answered with a
//! fallback: the transport double returns
//! [`Error::UnmatchedRequest`](sr_core::Error::UnmatchedRequest) and the HTTP
//! double answers 404.

pub mod mock;
pub mod payload;
pub mod stub;

pub use mock::MockStash;
pub use stub::StubTransport;

use serde_json::Value;

/// Parameters for a canned `FindScene` response.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneStub {
    pub id: u64,
    pub title: String,
    pub paths: Vec<String>,
}

impl SceneStub {
    pub fn new<I, S>(id: u64, title: impl Into<String>, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id,
            title: title.into(),
            paths: paths.into_iter().map(Into::into).collect(),
        }
    }
}

impl Default for SceneStub {
    fn default() -> Self {
        Self::new(1, "Scene Title", ["/absolute/scene/path.mp4"])
    }
}

/// `operationName` of a JSON request body, if it has one.
pub(crate) fn operation_name(body: &Value) -> Option<String> {
    body.get("operationName")
        .and_then(Value::as_str)
        .map(str::to_owned)
}

/// Same as [`operation_name`], for a raw body that may not be JSON at all.
pub(crate) fn operation_name_from_bytes(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<Value>(body)
        .ok()
        .as_ref()
        .and_then(operation_name)
}

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::Value;

use sr_core::{Error, Result};
use sr_stash::queries::{FIND_SCENE_OPERATION, VERSION_OPERATION};
use sr_stash::{GraphqlRequest, GraphqlTransport};

use super::{operation_name, payload, SceneStub};

struct Stub {
    operation: &'static str,
    body: Value,
}

/// In-memory [`GraphqlTransport`] that answers registered operations with
/// canned bodies.
///
/// When several stubs are registered for one operation the most recent
/// registration answers.
#[derive(Default)]
pub struct StubTransport {
    stubs: Mutex<Vec<Stub>>,
    received: Mutex<Vec<Option<String>>>,
}

impl StubTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `Version` with [`payload::STASH_VERSION`].
    pub fn enable_version_stub(&self) {
        self.register(VERSION_OPERATION, payload::version_body());
    }

    /// Answer `FindScene` with a scene carrying `id`, `title`, and one file
    /// per entry of `paths`, in order.
    pub fn enable_scene_paths_by_id_stub<I, S>(&self, id: u64, title: &str, paths: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.enable_scene_stub(SceneStub::new(id, title, paths));
    }

    pub fn enable_scene_stub(&self, stub: SceneStub) {
        self.register(FIND_SCENE_OPERATION, payload::find_scene_body(&stub));
    }

    /// `operationName` of every request seen so far, matched or not.
    pub fn received(&self) -> Vec<Option<String>> {
        self.received.lock().clone()
    }

    fn register(&self, operation: &'static str, body: Value) {
        self.stubs.lock().push(Stub { operation, body });
    }

    fn lookup(&self, operation: &str) -> Option<Value> {
        self.stubs
            .lock()
            .iter()
            .rev()
            .find(|stub| stub.operation == operation)
            .map(|stub| stub.body.clone())
    }
}

#[async_trait]
impl GraphqlTransport for StubTransport {
    async fn execute(&self, request: &GraphqlRequest) -> Result<Value> {
        // Match on the serialized body, as a server would see it.
        let wire = serde_json::to_value(request).map_err(Error::decode)?;
        let operation = operation_name(&wire);
        self.received.lock().push(operation.clone());

        match operation.as_deref().and_then(|op| self.lookup(op)) {
            Some(body) => Ok(body),
            None => {
                tracing::warn!(operation = ?operation, "No stub registered for GraphQL request");
                Err(Error::unmatched(operation.as_deref()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;
    use sr_stash::queries::{find_scene_request, version_request};

    #[tokio::test]
    async fn version_stub_answers_version() {
        let transport = StubTransport::new();
        transport.enable_version_stub();

        let body = transport.execute(&version_request()).await.unwrap();
        assert_eq!(body, json!({ "data": { "version": { "version": "v0.18.0" } } }));
    }

    #[tokio::test]
    async fn version_stub_ignores_find_scene() {
        let transport = StubTransport::new();
        transport.enable_version_stub();

        let err = transport.execute(&find_scene_request("1")).await.unwrap_err();
        assert_matches!(err, Error::UnmatchedRequest { operation: Some(ref op) } if op == "FindScene");
    }

    #[tokio::test]
    async fn scene_stub_ignores_version() {
        let transport = StubTransport::new();
        transport.enable_scene_stub(SceneStub::default());

        let err = transport.execute(&version_request()).await.unwrap_err();
        assert_matches!(err, Error::UnmatchedRequest { .. });
    }

    #[tokio::test]
    async fn latest_registration_wins() {
        let transport = StubTransport::new();
        transport.enable_scene_paths_by_id_stub(1, "First", ["/first.mp4"]);
        transport.enable_scene_paths_by_id_stub(2, "Second", ["/second.mp4"]);

        let body = transport.execute(&find_scene_request("2")).await.unwrap();
        assert_eq!(body["data"]["findScene"]["title"], "Second");
    }

    #[tokio::test]
    async fn received_records_every_request() {
        let transport = StubTransport::new();
        transport.enable_version_stub();

        transport.execute(&version_request()).await.unwrap();
        let _ = transport.execute(&find_scene_request("1")).await;

        assert_eq!(
            transport.received(),
            vec![Some("Version".to_string()), Some("FindScene".to_string())]
        );
    }

    #[tokio::test]
    async fn missing_operation_name_is_unmatched() {
        let transport = StubTransport::new();
        transport.enable_version_stub();

        // An anonymous request carries no `operationName` key on the wire.
        let request = GraphqlRequest::new("", "query { version { version } }");
        let err = transport.execute(&request).await.unwrap_err();
        assert_matches!(err, Error::UnmatchedRequest { operation: None });
        assert_eq!(transport.received(), vec![None]);
    }
}

use parking_lot::Mutex;
use serde_json::Value;
use wiremock::matchers::{method, path};
use wiremock::{Match, Mock, MockServer, Request, ResponseTemplate};

use sr_core::config::StashConfig;
use sr_stash::queries::{FIND_SCENE_OPERATION, VERSION_OPERATION};

use super::{operation_name_from_bytes, payload, SceneStub};

/// Path the Stash GraphQL endpoint is served on.
pub const GRAPHQL_PATH: &str = "/graphql";

/// Matches requests whose JSON body carries the given `operationName`.
/// Bodies that are not JSON, or carry no name, never match.
#[derive(Debug, Clone)]
pub struct OperationName(pub String);

impl Match for OperationName {
    fn matches(&self, request: &Request) -> bool {
        operation_name_from_bytes(&request.body).as_deref() == Some(self.0.as_str())
    }
}

/// A local HTTP server that answers `POST /graphql` like a Stash instance.
///
/// The server listens on a random port and shuts down when dropped. Requests
/// no stub matches get wiremock's default `404`.
///
/// When several stubs are registered for one operation the most recent
/// registration answers, as with [`StubTransport`](super::StubTransport).
pub struct MockStash {
    server: MockServer,
    // wiremock prefers the lowest priority value; each mount gets a lower one.
    next_priority: Mutex<u8>,
}

impl MockStash {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
            next_priority: Mutex::new(u8::MAX),
        }
    }

    /// Base URI, e.g. `http://127.0.0.1:54321`.
    pub fn uri(&self) -> String {
        self.server.uri()
    }

    pub fn graphql_url(&self) -> String {
        format!("{}{GRAPHQL_PATH}", self.server.uri())
    }

    /// Client configuration pointing at this server.
    pub fn config(&self) -> StashConfig {
        StashConfig {
            url: self.graphql_url(),
            ..StashConfig::default()
        }
    }

    pub async fn enable_version_stub(&self) {
        self.mount(VERSION_OPERATION, payload::version_body()).await;
    }

    pub async fn enable_scene_paths_by_id_stub<I, S>(&self, id: u64, title: &str, paths: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.enable_scene_stub(SceneStub::new(id, title, paths))
            .await;
    }

    pub async fn enable_scene_stub(&self, stub: SceneStub) {
        self.mount(FIND_SCENE_OPERATION, payload::find_scene_body(&stub))
            .await;
    }

    /// `operationName` of every request the server received, in order.
    pub async fn received_operations(&self) -> Vec<Option<String>> {
        self.server
            .received_requests()
            .await
            .expect("MockServer::start records received requests")
            .iter()
            .map(|request| operation_name_from_bytes(&request.body))
            .collect()
    }

    fn take_priority(&self) -> u8 {
        let mut next = self.next_priority.lock();
        let priority = *next;
        *next = next.saturating_sub(1).max(1);
        priority
    }

    async fn mount(&self, operation: &str, body: Value) {
        let priority = self.take_priority();
        Mock::given(method("POST"))
            .and(path(GRAPHQL_PATH))
            .and(OperationName(operation.to_owned()))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .with_priority(priority)
            .named(operation)
            .mount(&self.server)
            .await;
    }
}

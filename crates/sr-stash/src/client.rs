//! High-level Stash operations.

use std::sync::Arc;

use sr_core::config::StashConfig;
use sr_core::{Error, Result, SceneData};

use crate::graphql::{decode_response, GraphqlTransport};
use crate::http::HttpTransport;
use crate::queries::{self, FindSceneData, VersionData};

/// Client for the subset of the Stash API the renamer needs.
///
/// The transport is injected so tests can substitute a double:
///
/// ```rust,ignore
/// let client = StashClient::new(Arc::new(stub_transport));
/// let scene = client.find_scene("1").await?;
/// ```
#[derive(Clone)]
pub struct StashClient {
    transport: Arc<dyn GraphqlTransport>,
}

impl StashClient {
    pub fn new(transport: Arc<dyn GraphqlTransport>) -> Self {
        Self { transport }
    }

    /// Build a client that talks HTTP to the configured endpoint.
    pub fn from_config(config: &StashConfig) -> Self {
        Self::new(Arc::new(HttpTransport::new(config)))
    }

    /// Fetch the server version string (e.g. `"v0.18.0"`).
    pub async fn version(&self) -> Result<String> {
        let body = self.transport.execute(&queries::version_request()).await?;
        let data: VersionData = decode_response(body)?;

        data.version
            .version
            .ok_or_else(|| Error::decode("server did not report a version"))
    }

    /// Fetch a single scene by id. Returns `Ok(None)` when Stash has no
    /// scene with that id.
    pub async fn find_scene(&self, id: &str) -> Result<Option<SceneData>> {
        let body = self
            .transport
            .execute(&queries::find_scene_request(id))
            .await?;
        let data: FindSceneData = decode_response(body)?;

        let scene = data.find_scene.map(SceneData::from);
        match scene {
            Some(ref s) => tracing::debug!(
                id,
                files = s.original_filenames.len(),
                "Found scene"
            ),
            None => tracing::debug!(id, "Scene not found"),
        }
        Ok(scene)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphql::GraphqlRequest;
    use assert_matches::assert_matches;
    use async_trait::async_trait;
    use serde_json::{json, Value};

    /// Answers every request with the same body.
    struct FixedTransport(Value);

    #[async_trait]
    impl GraphqlTransport for FixedTransport {
        async fn execute(&self, _request: &GraphqlRequest) -> Result<Value> {
            Ok(self.0.clone())
        }
    }

    fn client(body: Value) -> StashClient {
        StashClient::new(Arc::new(FixedTransport(body)))
    }

    #[tokio::test]
    async fn version_reads_nested_string() {
        let c = client(json!({ "data": { "version": { "version": "v0.18.0" } } }));
        assert_eq!(c.version().await.unwrap(), "v0.18.0");
    }

    #[tokio::test]
    async fn version_null_is_decode_error() {
        let c = client(json!({ "data": { "version": { "version": null } } }));
        assert_matches!(c.version().await, Err(Error::Decode(_)));
    }

    #[tokio::test]
    async fn find_scene_null_is_none() {
        let c = client(json!({ "data": { "findScene": null } }));
        assert!(c.find_scene("99").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn find_scene_graphql_error() {
        let c = client(json!({ "errors": [{ "message": "scene id must be numeric" }] }));
        assert_matches!(c.find_scene("abc").await, Err(Error::Graphql(_)));
    }
}

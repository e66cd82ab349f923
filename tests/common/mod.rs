//! Shared helpers for integration tests.
//!
//! [`stub_client`] wires a [`StashClient`] to an in-memory [`StubTransport`]
//! so a test can register canned responses and inspect what was requested.

use std::sync::Arc;

use sr_core::SceneData;
use sr_stash::StashClient;
use sr_testkit::StubTransport;

/// A client backed by a fresh stub registry owned by the calling test.
pub fn stub_client() -> (Arc<StubTransport>, StashClient) {
    let transport = Arc::new(StubTransport::new());
    let client = StashClient::new(transport.clone());
    (transport, client)
}

/// The record a `FindScene` stub with the given parameters decodes to.
pub fn stubbed_scene(id: u64, title: &str, paths: &[&str]) -> SceneData {
    SceneData {
        id: Some(id.to_string()),
        title: Some(title.to_string()),
        original_filenames: paths.iter().map(|p| p.to_string()).collect(),
        ..SceneData::default()
    }
}

//! Canned response bodies.

use serde_json::{json, Value};

use super::SceneStub;

/// Version string reported by the `Version` stub.
pub const STASH_VERSION: &str = "v0.18.0";

/// `{"data":{"version":{"version":"v0.18.0"}}}`
pub fn version_body() -> Value {
    json!({ "data": { "version": { "version": STASH_VERSION } } })
}

/// `FindScene` result with the stub's id, title, and one file per path.
/// An empty path list yields `"files": []`.
pub fn find_scene_body(stub: &SceneStub) -> Value {
    let files: Vec<Value> = stub.paths.iter().map(|p| json!({ "path": p })).collect();
    json!({
        "data": {
            "findScene": {
                "id": stub.id.to_string(),
                "title": stub.title,
                "files": files,
            }
        }
    })
}

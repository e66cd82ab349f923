//! sr-testkit: test support for code that consumes Stash scene metadata.
//!
//! - [`compare`] -- structural equivalence of [`SceneData`](sr_core::SceneData)
//!   records that ignores volatile fields and reports a field-level diff.
//! - [`double`] -- deterministic stand-ins for the Stash GraphQL service, both
//!   as an injectable transport and as a local HTTP server.

pub mod compare;
pub mod double;

pub use compare::{
    assert_scene_data_eq, assert_scene_json_eq, compare_scene_data, compare_scene_json,
    Difference, ExclusionPolicy, SceneComparison,
};
pub use double::{MockStash, SceneStub, StubTransport};

//! Operation names, query documents, and the wire types they return.
//!
//! Wire types mirror the Stash schema and default every field so that a
//! partial selection (or a minimal canned response) still decodes. They are
//! converted into [`SceneData`] at the edge and never leave this crate.

use serde::Deserialize;
use serde_json::json;

use sr_core::{Movie, SceneData};

use crate::graphql::GraphqlRequest;

// ---------------------------------------------------------------------------
// Operations
// ---------------------------------------------------------------------------

pub const VERSION_OPERATION: &str = "Version";
pub const FIND_SCENE_OPERATION: &str = "FindScene";

const VERSION_QUERY: &str = "query Version { version { version } }";

const FIND_SCENE_QUERY: &str = "query FindScene($id: ID!) {
  findScene(id: $id) {
    id
    title
    details
    date
    url
    rating
    studio { name }
    tags { name }
    performers { name }
    files { path }
    movies {
      scene_index
      movie { name date synopsis director studio { name } }
    }
  }
}";

pub fn version_request() -> GraphqlRequest {
    GraphqlRequest::new(VERSION_OPERATION, VERSION_QUERY)
}

pub fn find_scene_request(id: &str) -> GraphqlRequest {
    GraphqlRequest::new(FIND_SCENE_OPERATION, FIND_SCENE_QUERY).with_variables(json!({ "id": id }))
}

// ---------------------------------------------------------------------------
// Version
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(crate) struct VersionData {
    pub version: VersionInfo,
}

#[derive(Debug, Deserialize)]
pub(crate) struct VersionInfo {
    pub version: Option<String>,
}

// ---------------------------------------------------------------------------
// FindScene
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(crate) struct FindSceneData {
    #[serde(rename = "findScene")]
    pub find_scene: Option<WireScene>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct WireScene {
    pub id: String,
    pub title: Option<String>,
    pub details: Option<String>,
    pub date: Option<String>,
    pub url: Option<String>,
    pub rating: Option<u8>,
    pub studio: Option<Named>,
    pub tags: Vec<Named>,
    pub performers: Vec<Named>,
    pub files: Vec<WireFile>,
    pub movies: Vec<WireSceneMovie>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct Named {
    pub name: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct WireFile {
    pub path: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct WireSceneMovie {
    pub scene_index: Option<u32>,
    pub movie: WireMovie,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct WireMovie {
    pub name: Option<String>,
    pub date: Option<String>,
    pub synopsis: Option<String>,
    pub director: Option<String>,
    pub studio: Option<Named>,
}

impl From<WireScene> for SceneData {
    fn from(scene: WireScene) -> Self {
        // Only the first movie is carried; scenes in several movies are rare.
        let movie = scene.movies.into_iter().next().map(|m| Movie {
            title: m.movie.name,
            date: m.movie.date,
            synopsis: m.movie.synopsis,
            director: m.movie.director,
            studio: m.movie.studio.map(|s| s.name),
            scene_index: m.scene_index,
        });

        SceneData {
            id: Some(scene.id).filter(|id| !id.is_empty()),
            title: scene.title,
            details: scene.details,
            date: scene.date,
            url: scene.url,
            rating: scene.rating,
            studio: scene.studio.map(|s| s.name),
            tags: scene.tags.into_iter().map(|t| t.name).collect(),
            performers: scene.performers.into_iter().map(|p| p.name).collect(),
            original_filenames: scene.files.into_iter().map(|f| f.path).collect(),
            movie,
        }
    }
}

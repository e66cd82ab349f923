//! Scene metadata records.
//!
//! [`SceneData`] is what the rename engine consumes as the description of one
//! scene. It is produced by parsing Stash `FindScene` results and is a plain
//! value object: two records are the same scene when their fields agree.

use serde::{Deserialize, Deserializer, Serialize};

/// Canonical metadata record for one media scene.
///
/// Unset optional fields serialize as `null`; unknown fields are rejected on
/// deserialization so a JSON value either is a `SceneData` or is not.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SceneData {
    /// Stash scene identifier.
    pub id: Option<String>,
    pub title: Option<String>,
    pub details: Option<String>,
    /// Release date as `YYYY-MM-DD`.
    pub date: Option<String>,
    pub url: Option<String>,
    /// Rating on Stash's 1-5 scale.
    pub rating: Option<u8>,
    /// Studio name.
    pub studio: Option<String>,
    #[serde(deserialize_with = "null_as_empty")]
    pub tags: Vec<String>,
    #[serde(deserialize_with = "null_as_empty")]
    pub performers: Vec<String>,
    /// Path(s) of the file(s) this record was derived from.
    #[serde(deserialize_with = "null_as_empty")]
    pub original_filenames: Vec<String>,
    pub movie: Option<Movie>,
}

/// A `null` collection reads as empty, the same as a missing one.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

impl SceneData {
    /// The first file path this record was derived from, if any.
    pub fn primary_filename(&self) -> Option<&str> {
        self.original_filenames.first().map(String::as_str)
    }
}

/// Movie (group) a scene belongs to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Movie {
    pub title: Option<String>,
    pub date: Option<String>,
    /// Free-text description. Not authoritative.
    pub synopsis: Option<String>,
    pub director: Option<String>,
    pub studio: Option<String>,
    /// Position of the scene within the movie.
    pub scene_index: Option<u32>,
}

//! sr-core: shared scene records, errors, and configuration.
//!
//! This crate is the foundational dependency for the other sr-* crates:
//!
//! - **Scene records**: [`SceneData`] and its nested [`Movie`], the canonical
//!   description of one scene as reported by a Stash server
//! - **Error handling**: a unified [`Error`] type and [`Result`] alias
//! - **Configuration**: the JSON-backed [`config::Config`]
//!
//! # Examples
//!
//! ```
//! use sr_core::{Movie, SceneData};
//!
//! let scene = SceneData {
//!     title: Some("Scene Title".into()),
//!     original_filenames: vec!["/absolute/scene/path.mp4".into()],
//!     movie: Some(Movie {
//!         title: Some("Feature".into()),
//!         ..Movie::default()
//!     }),
//!     ..SceneData::default()
//! };
//! assert_eq!(scene.primary_filename(), Some("/absolute/scene/path.mp4"));
//! ```

pub mod config;
pub mod error;
pub mod scene;

pub use error::{Error, Result};
pub use scene::{Movie, SceneData};

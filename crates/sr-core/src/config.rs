//! Application configuration types.
//!
//! The top-level [`Config`] struct is deserialized from JSON. Every section
//! defaults sensibly so a completely empty `{}` file is valid.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;
use crate::Error;

/// Default Stash GraphQL endpoint.
pub const DEFAULT_STASH_URL: &str = "http://localhost:9999/graphql";

// ---------------------------------------------------------------------------
// Top-level Config
// ---------------------------------------------------------------------------

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub stash: StashConfig,
}

impl Config {
    /// Deserialize a `Config` from a JSON string.
    pub fn from_json(json_str: &str) -> Result<Self> {
        serde_json::from_str(json_str)
            .map_err(|e| Error::Validation(format!("config parse error: {e}")))
    }

    /// Load configuration from a file path, falling back to defaults if the
    /// path is `None` or the file does not exist.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };

        match std::fs::read_to_string(path) {
            Ok(contents) => Self::from_json(&contents).unwrap_or_else(|e| {
                tracing::warn!("Failed to parse config file {}: {e}", path.display());
                Self::default()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!("No config file at {}; using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                tracing::warn!("Failed to read config file {}: {e}", path.display());
                Self::default()
            }
        }
    }

    /// Load configuration from a file path, failing on any read or parse error.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Return a list of validation warnings (non-fatal issues).
    pub fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        if self.stash.url.is_empty() {
            warnings.push("stash.url is empty".into());
        } else if !self.stash.url.starts_with("http://") && !self.stash.url.starts_with("https://")
        {
            warnings.push(format!(
                "stash.url '{}' is not an http(s) URL",
                self.stash.url
            ));
        }

        if matches!(self.stash.api_key.as_deref(), Some("")) {
            warnings.push("stash.api_key is set but empty".into());
        }

        if self.stash.timeout_secs == 0 {
            warnings.push("stash.timeout_secs is 0; requests will time out immediately".into());
        }

        warnings
    }
}

// ---------------------------------------------------------------------------
// Sub-configs
// ---------------------------------------------------------------------------

/// Connection settings for the Stash GraphQL service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StashConfig {
    /// Full GraphQL endpoint URL.
    pub url: String,
    /// Sent as the `ApiKey` header when set.
    pub api_key: Option<String>,
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for StashConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_STASH_URL.into(),
            api_key: None,
            timeout_secs: default_timeout(),
        }
    }
}

fn default_timeout() -> u64 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::io::Write;

    #[test]
    fn empty_json_is_default() {
        let config = Config::from_json("{}").unwrap();
        assert_eq!(config.stash.url, DEFAULT_STASH_URL);
        assert_eq!(config.stash.timeout_secs, 30);
        assert!(config.stash.api_key.is_none());
        assert!(config.validate().is_empty());
    }

    #[test]
    fn partial_section_keeps_defaults() {
        let config = Config::from_json(r#"{"stash": {"api_key": "secret"}}"#).unwrap();
        assert_eq!(config.stash.api_key.as_deref(), Some("secret"));
        assert_eq!(config.stash.url, DEFAULT_STASH_URL);
    }

    #[test]
    fn malformed_json_is_validation_error() {
        let err = Config::from_json("{not json").unwrap_err();
        assert_matches!(err, Error::Validation(_));
    }

    #[test]
    fn validate_flags_bad_values() {
        let mut config = Config::default();
        config.stash.url = "localhost:9999".into();
        config.stash.api_key = Some(String::new());
        config.stash.timeout_secs = 0;

        let warnings = config.validate();
        assert_eq!(warnings.len(), 3);
        assert!(warnings[0].contains("not an http(s) URL"));
    }

    #[test]
    fn load_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_default(Some(&dir.path().join("missing.json")));
        assert_eq!(config.stash.url, DEFAULT_STASH_URL);
    }

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"stash": {{"url": "http://stash:9999/graphql"}}}}"#).unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.stash.url, "http://stash:9999/graphql");
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(&dir.path().join("missing.json")).unwrap_err();
        assert_matches!(err, Error::Io { .. });
    }
}

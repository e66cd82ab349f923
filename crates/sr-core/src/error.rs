//! Unified error type for stashrename.
//!
//! Every crate in the workspace funnels its failures into [`Error`]. Transport
//! failures keep their source so callers can log the underlying cause.

use std::fmt;

/// Unified error type covering all failure modes in stashrename.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A caller supplied a value of the wrong shape for a named parameter.
    #[error("Invalid argument `{parameter}`: expected SceneData, got {actual_type} ({reason})")]
    InvalidArgument {
        /// Name of the offending parameter (e.g. "expected", "actual").
        parameter: String,
        /// Type of the value that was actually supplied.
        actual_type: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// No registered stub answered a GraphQL request.
    #[error("No stub matched GraphQL request (operationName: {})", .operation.as_deref().unwrap_or("<missing>"))]
    UnmatchedRequest {
        /// The `operationName` carried by the request, if any.
        operation: Option<String>,
    },

    /// The HTTP request could not be sent or its response not read.
    #[error("HTTP error: {source}")]
    Http {
        /// The underlying transport error.
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The server answered with a non-success status code.
    #[error("Stash returned HTTP {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, as text.
        body: String,
    },

    /// The GraphQL response carried an `errors` array.
    #[error("GraphQL error: {0}")]
    Graphql(String),

    /// A response body did not have the expected shape.
    #[error("Decode error: {0}")]
    Decode(String),

    /// Configuration or request data failed validation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// An I/O operation failed.
    #[error("IO error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}

impl Error {
    /// Convenience constructor for [`Error::InvalidArgument`].
    pub fn invalid_argument(
        parameter: impl Into<String>,
        actual_type: impl Into<String>,
        reason: impl fmt::Display,
    ) -> Self {
        Error::InvalidArgument {
            parameter: parameter.into(),
            actual_type: actual_type.into(),
            reason: reason.to_string(),
        }
    }

    /// Convenience constructor for [`Error::UnmatchedRequest`].
    pub fn unmatched(operation: Option<&str>) -> Self {
        Error::UnmatchedRequest {
            operation: operation.map(str::to_owned),
        }
    }

    /// Convenience constructor for [`Error::Http`].
    pub fn http(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Error::Http {
            source: source.into(),
        }
    }

    /// Convenience constructor for [`Error::Decode`].
    pub fn decode(message: impl fmt::Display) -> Self {
        Error::Decode(message.to_string())
    }
}

/// Result alias using the crate-level [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

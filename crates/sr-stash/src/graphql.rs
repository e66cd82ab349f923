//! GraphQL request envelope and response decoding.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use sr_core::{Error, Result};

/// A single GraphQL operation as sent over the wire.
///
/// Serializes to `{"operationName": ..., "query": ..., "variables": ...}`.
/// An empty operation name is left out of the body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphqlRequest {
    /// Omitted from the wire when empty (an anonymous operation).
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub operation_name: String,
    pub query: String,
    #[serde(default)]
    pub variables: Value,
}

impl GraphqlRequest {
    /// Build a request with no variables.
    pub fn new(operation_name: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            operation_name: operation_name.into(),
            query: query.into(),
            variables: Value::Object(Default::default()),
        }
    }

    /// Attach a variables object.
    pub fn with_variables(mut self, variables: Value) -> Self {
        self.variables = variables;
        self
    }
}

/// Something that can deliver a [`GraphqlRequest`] and hand back the raw
/// JSON response body.
///
/// Implementations must not interpret the GraphQL payload; decoding of
/// `data` / `errors` happens in [`decode_response`].
#[async_trait]
pub trait GraphqlTransport: Send + Sync {
    async fn execute(&self, request: &GraphqlRequest) -> Result<Value>;
}

#[derive(Debug, Deserialize)]
struct ResponseEnvelope<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<ResponseError>,
}

#[derive(Debug, Deserialize)]
struct ResponseError {
    message: String,
}

/// Decode the `data` member of a GraphQL response body into `T`.
///
/// A non-empty `errors` array takes precedence over any partial data.
pub fn decode_response<T: DeserializeOwned>(body: Value) -> Result<T> {
    let envelope: ResponseEnvelope<T> = serde_json::from_value(body).map_err(Error::decode)?;

    if !envelope.errors.is_empty() {
        let messages: Vec<String> = envelope.errors.into_iter().map(|e| e.message).collect();
        return Err(Error::Graphql(messages.join("; ")));
    }

    envelope
        .data
        .ok_or_else(|| Error::decode("response carried no data"))
}

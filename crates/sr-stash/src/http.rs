use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use sr_core::config::StashConfig;
use sr_core::{Error, Result};

use crate::graphql::{GraphqlRequest, GraphqlTransport};

/// Header Stash reads the API key from.
const API_KEY_HEADER: &str = "ApiKey";

/// Transport that POSTs GraphQL requests to a Stash server.
pub struct HttpTransport {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
}

impl HttpTransport {
    pub fn new(config: &StashConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("Failed to build HTTP client with timeout: {}", e);
                Client::new()
            });

        Self {
            client,
            endpoint: config.url.clone(),
            api_key: config.api_key.clone().filter(|k| !k.is_empty()),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl GraphqlTransport for HttpTransport {
    async fn execute(&self, request: &GraphqlRequest) -> Result<Value> {
        tracing::debug!(
            operation = %request.operation_name,
            endpoint = %self.endpoint,
            "Sending GraphQL request"
        );

        let mut builder = self.client.post(&self.endpoint).json(request);
        if let Some(ref key) = self.api_key {
            builder = builder.header(API_KEY_HEADER, key);
        }

        let response = builder.send().await.map_err(Error::http)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(
                operation = %request.operation_name,
                status = status.as_u16(),
                "GraphQL request rejected"
            );
            return Err(Error::Status {
                status: status.as_u16(),
                body,
            });
        }

        response.json::<Value>().await.map_err(Error::decode)
    }
}

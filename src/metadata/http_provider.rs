//! reqwest-backed metadata provider talking to a resolver endpoint.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, warn};

use super::models::StreamInfo;
use super::provider::{ResolveError, StreamMetadataProvider};

const METADATA_LOG_TARGET: &str = "playroute::metadata";

/// Fetches stream details over HTTP from an extraction service.
#[derive(Clone)]
pub struct HttpMetadataProvider {
    client: Client,
    endpoint: String,
}

impl HttpMetadataProvider {
    /// Create a provider against the given resolver endpoint.
    pub fn new(endpoint: &str) -> Self {
        let client = match Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
        {
            Ok(client) => client,
            Err(e) => {
                warn!(target: METADATA_LOG_TARGET, "Error creating HTTP client with timeout: {:?}. Falling back to default.", e);
                Client::new()
            }
        };

        HttpMetadataProvider {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl StreamMetadataProvider for HttpMetadataProvider {
    async fn fetch(&self, service_id: i32, url: &str) -> Result<StreamInfo, ResolveError> {
        debug!(target: METADATA_LOG_TARGET, service_id, url, "Fetching stream details");
        let request_url = format!("{}/streams", self.endpoint);
        let response = self
            .client
            .get(&request_url)
            .query(&[("serviceId", service_id.to_string().as_str()), ("url", url)])
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => {
                let info: StreamInfo = response
                    .json()
                    .await
                    .map_err(|e| ResolveError::InvalidResponse(e.to_string()))?;
                debug!(target: METADATA_LOG_TARGET, name = %info.name, "Fetched stream details");
                Ok(info)
            }
            StatusCode::NOT_FOUND => Err(ResolveError::Service(format!(
                "no stream for service {} at {}",
                service_id, url
            ))),
            status => {
                let body = response.text().await.unwrap_or_default();
                Err(ResolveError::Service(format!(
                    "resolver returned {}: {}",
                    status, body
                )))
            }
        }
    }
}

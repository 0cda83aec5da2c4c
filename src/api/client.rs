use std::time::Duration;
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde_json::Value;
use url::Url;

use super::ContentSource;
use crate::app_config::ApiConfig;
use crate::errors::FetchError;

/// HTTP client for the content API
#[derive(Debug, Clone)]
pub struct ApiClient {
    /// HTTP client for API requests
    client: Client,
    /// Base URL, e.g. `https://cms.example.com`
    base_url: String,
    /// Bounded wait applied to every request
    timeout: Duration,
}

impl ApiClient {
    /// Create a new client with the given base URL and timeout
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::RequestFailed(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            timeout,
        })
    }

    /// Create a client from the `api` section of the configuration
    pub fn from_config(config: &ApiConfig) -> Result<Self, FetchError> {
        Self::new(config.base_url.clone(), config.timeout())
    }

    /// Full URL for `endpoint` with `query` appended. Values are not validated.
    pub fn endpoint_url(&self, endpoint: &str, query: &[(&str, &str)]) -> Result<Url, FetchError> {
        // Trailing slash so that `join` appends instead of replacing the last segment
        let base = Url::parse(&format!("{}/", self.base_url.trim_end_matches('/')))?;
        let mut url = base.join(endpoint.trim_start_matches('/'))?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }
}

#[async_trait]
impl ContentSource for ApiClient {
    async fn get_json(&self, endpoint: &str, query: &[(&str, &str)]) -> Result<Option<Value>, FetchError> {
        let url = self.endpoint_url(endpoint, query)?;
        debug!("GET {}", url);

        let response = self.client.get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    FetchError::Timeout(self.timeout.as_millis())
                } else {
                    FetchError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(FetchError::ApiError {
                status_code: status.as_u16(),
                message,
            });
        }

        let body = response.text().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout(self.timeout.as_millis())
            } else {
                FetchError::RequestFailed(e.to_string())
            }
        })?;

        if body.trim().is_empty() {
            return Ok(None);
        }

        match serde_json::from_str::<Value>(&body) {
            Ok(Value::Null) => Ok(None),
            Ok(value) => Ok(Some(value)),
            Err(e) => Err(FetchError::ParseError(e.to_string())),
        }
    }
}

//! HTTP client for the patient/referral service.

use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use tokio::time::timeout;

use crate::config::ApiConfig;
use crate::transport::error::FetchError;

/// HTTP client bound to the service base URL.
///
/// Connection pooling and the connect timeout live in the underlying
/// reqwest client; the total per-request timeout is applied around each
/// call so a slow response surfaces as [`FetchError::Timeout`].
///
/// Cloning is cheap and shares the underlying connection pool.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    request_timeout: Duration,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Self {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(u64::from(
                config.connect_timeout_seconds,
            )))
            .build()
            .expect("Failed to build api client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            request_timeout: Duration::from_secs(u64::from(config.timeout_seconds)),
        }
    }

    /// GET a resource endpoint and decode the JSON body.
    pub async fn get_json(&self, path: &str) -> Result<Value, FetchError> {
        let url = self.endpoint(path);
        let result = timeout(self.request_timeout, self.do_get(&url)).await;

        match result {
            Ok(response) => response,
            Err(_) => Err(FetchError::Timeout {
                duration: self.request_timeout.as_secs(),
            }),
        }
    }

    /// PUT a JSON body to a resource endpoint and decode the response.
    pub async fn put_json(&self, path: &str, body: &Value) -> Result<Value, FetchError> {
        let url = self.endpoint(path);
        let result = timeout(self.request_timeout, self.do_put(&url, body)).await;

        match result {
            Ok(response) => response,
            Err(_) => Err(FetchError::Timeout {
                duration: self.request_timeout.as_secs(),
            }),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn do_get(&self, url: &str) -> Result<Value, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Connection {
                url: url.to_string(),
                source: e,
            })?;

        Self::decode(url, response).await
    }

    async fn do_put(&self, url: &str, body: &Value) -> Result<Value, FetchError> {
        let response = self
            .client
            .put(url)
            .json(body)
            .send()
            .await
            .map_err(|e| FetchError::Connection {
                url: url.to_string(),
                source: e,
            })?;

        Self::decode(url, response).await
    }

    async fn decode(url: &str, response: reqwest::Response) -> Result<Value, FetchError> {
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| FetchError::Decode {
                url: url.to_string(),
                source: e,
            })
    }
}

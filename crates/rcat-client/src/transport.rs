//! Single-attempt JSON GET.
//!
//! One request per call: no retries, no client-side timeout. Any failure,
//! whether transport, non-2xx status, or undecodable body, is logged and
//! reported as "no data" (`None`). Callers degrade to an empty or error state.

use async_trait::async_trait;
use serde_json::Value;
use url::Url;

use crate::error::TransportError;

const USER_AGENT: &str = concat!("rcat/", env!("CARGO_PKG_VERSION"));

/// Source of upstream JSON documents.
///
/// Implementations must never panic on upstream failure; `None` is the only
/// failure signal.
#[async_trait]
pub trait Transport: Send + Sync {
    /// GET `url` and decode the body as JSON.
    async fn request(&self, url: &Url) -> Option<Value>;
}

/// [`Transport`] over a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
}

impl HttpTransport {
    /// Build a transport with its own HTTP client.
    pub fn new() -> Result<Self, TransportError> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(TransportError::ClientInit)?;
        Ok(Self { http })
    }

    /// Wrap an existing client, sharing its connection pool.
    pub fn with_client(http: reqwest::Client) -> Self {
        Self { http }
    }

    /// GET `url` and decode JSON, keeping the failure cause.
    pub async fn fetch_json(&self, url: &Url) -> Result<Value, TransportError> {
        let endpoint = format!("GET {url}");

        let resp = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|e| TransportError::Http {
                endpoint: endpoint.clone(),
                source: e,
            })?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(TransportError::Status {
                endpoint,
                status,
                body,
            });
        }

        resp.json().await.map_err(|e| TransportError::Deserialization {
            endpoint,
            source: e,
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn request(&self, url: &Url) -> Option<Value> {
        match self.fetch_json(url).await {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(url = %url, status = ?e.status(), "request failed: {e}");
                None
            }
        }
    }
}

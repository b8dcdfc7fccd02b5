//! HTTP backend abstraction.
//!
//! The backend only moves bytes: it receives a fully decorated request and
//! returns the status and body. Header decoration and status handling live
//! in the client so that a fake backend can stand in for the network.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Method;
use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;
use tracing::warn;
use url::Url;

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

// ============================================================================
// Wire types
// ============================================================================

/// A request with its final URL, ready for decoration and transmission.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    /// A request without headers or body.
    #[must_use]
    pub fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            headers: HeaderMap::new(),
            body: None,
        }
    }
}

/// Status and body of a completed exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    /// Whether the status is in the 2xx range.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Decode the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> ClientResult<T> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Transport for decorated requests.
///
/// Implementations must not alter headers; every header a request carries
/// was put there by the client's decoration pipeline.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// Transmit `request` and collect the response.
    ///
    /// Non-success statuses are returned as responses, not errors.
    async fn execute(&self, request: ApiRequest) -> ClientResult<ApiResponse>;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest.
///
/// The configured timeout covers the whole exchange, including reading the
/// body. There is no retry: a failed attempt is reported as is.
#[derive(Debug, Clone)]
pub struct ReqwestBackend {
    client: reqwest::Client,
    timeout: Duration,
}

impl ReqwestBackend {
    /// Create a new reqwest backend with the given configuration.
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self {
            client,
            timeout: config.timeout,
        })
    }

    fn map_send_error(&self, url: &Url, err: reqwest::Error) -> ClientError {
        if err.is_timeout() {
            warn!(%url, timeout = ?self.timeout, "request timed out");
            ClientError::Timeout {
                url: url.to_string(),
                timeout: self.timeout,
            }
        } else {
            err.into()
        }
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn execute(&self, request: ApiRequest) -> ClientResult<ApiResponse> {
        let ApiRequest {
            method,
            url,
            headers,
            body,
        } = request;

        let mut builder = self.client.request(method, url.clone()).headers(headers);
        if let Some(ref body) = body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| self.map_send_error(&url, e))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| self.map_send_error(&url, e))?;

        Ok(ApiResponse { status, body })
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================

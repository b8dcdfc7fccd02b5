//! The shared request client.
//!
//! Every call goes through [`ApiClient::send`]: resolve the path against the
//! base address, snapshot the session, run the decoration pipeline, hand the
//! request to the backend, and turn non-2xx statuses into errors.

mod conversations;
mod groups;
mod profile;
mod session;

use reqwest::header::AUTHORIZATION;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;
use wasatext_core::Session;

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::http::{ApiRequest, ApiResponse, HttpBackend, ReqwestBackend};
use crate::pipeline::{RequestDecorator, RequestPipeline};
use crate::request::Request;
use crate::url::resolve_url;

// ============================================================================
// Type Aliases
// ============================================================================

/// Default client using the reqwest HTTP backend.
pub type DefaultApiClient = ApiClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Client for the WASAText backend.
///
/// One instance is meant to be shared (behind an `Arc`) by every call site
/// of a front end. The client holds no per-request state; each request reads
/// the session on its own.
pub struct ApiClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) base_url: Url,
    pub(crate) session: Session,
    pub(crate) pipeline: RequestPipeline,
}

impl DefaultApiClient {
    /// Create a new client with the given configuration and session.
    pub fn new(config: &ClientConfig, session: Session) -> ClientResult<Self> {
        let base_url = config.parsed_base_url()?;
        let backend = ReqwestBackend::new(config)?;
        Ok(Self {
            backend,
            base_url,
            session,
            pipeline: RequestPipeline::standard(),
        })
    }
}

impl<B: HttpBackend> ApiClient<B> {
    /// Create a new client with a custom backend.
    ///
    /// Use this for testing with a fake backend.
    #[cfg(test)]
    pub(crate) fn with_backend(base_url: &str, session: Session, backend: B) -> Self {
        Self {
            backend,
            base_url: Url::parse(base_url).expect("test base URL is valid"),
            session,
            pipeline: RequestPipeline::standard(),
        }
    }

    /// Append a decoration step after the standard ones.
    #[must_use]
    pub fn with_decorator(mut self, decorator: impl RequestDecorator + 'static) -> Self {
        self.pipeline = self.pipeline.with(decorator);
        self
    }

    /// The session this client reads credentials from.
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Base address prefixed to relative paths.
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build the final, decorated request without sending it.
    pub fn prepare(&self, request: Request) -> ClientResult<ApiRequest> {
        let Request {
            method,
            path,
            query,
            headers,
            body,
        } = request;

        let mut url = resolve_url(&self.base_url, &path)?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }

        let mut prepared = ApiRequest {
            method,
            url,
            headers,
            body,
        };
        self.pipeline.apply(&mut prepared, &self.session.snapshot())?;
        Ok(prepared)
    }

    /// Send a request and return the raw response.
    ///
    /// Non-2xx responses become [`ClientError::Status`] carrying the status
    /// and body unchanged. Nothing is retried.
    pub async fn send(&self, request: Request) -> ClientResult<ApiResponse> {
        let prepared = self.prepare(request)?;
        let url = prepared.url.to_string();
        debug!(
            method = %prepared.method,
            url = %url,
            authenticated = prepared.headers.contains_key(AUTHORIZATION),
            "sending request"
        );

        let response = self.backend.execute(prepared).await?;
        if !response.is_success() {
            debug!(status = response.status, url = %url, "request failed");
            return Err(ClientError::Status {
                status: response.status,
                url,
                body: response.body,
            });
        }
        Ok(response)
    }

    /// Send a request and decode the JSON response.
    pub(crate) async fn call<T: DeserializeOwned>(&self, request: Request) -> ClientResult<T> {
        self.send(request).await?.json()
    }
}

#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod client;
mod config;
mod error;
mod http;
mod pipeline;
mod port;
mod request;
mod url;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::{ApiClient, DefaultApiClient};

// Configuration
pub use config::{ClientConfig, DEFAULT_TIMEOUT, FALLBACK_API_URL, build_time_api_url};

// Errors
pub use error::{ClientError, ClientResult};

// Transport
pub use http::{ApiRequest, ApiResponse, HttpBackend, ReqwestBackend};

// Decoration
pub use pipeline::{BearerAuth, DefaultHeader, RequestDecorator, RequestPipeline};

// Requests
pub use request::Request;
pub use url::resolve_url;

// Silence unused dev-dependency warnings
#[cfg(test)]
use axum as _;
#[cfg(test)]
use tracing_subscriber as _;

//! Public configuration for the request client.
//!
//! The base address is normally baked in at build time through the
//! `WASATEXT_API_URL` environment variable and can be overridden at runtime.

use std::time::Duration;

use url::Url;

use crate::error::ClientResult;

/// Base address used when none was injected at build time.
pub const FALLBACK_API_URL: &str = "http://localhost:3000";

/// Timeout applied to every request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(5000);

/// Base address injected at build time, or the local development server.
#[must_use]
pub fn build_time_api_url() -> &'static str {
    option_env!("WASATEXT_API_URL").unwrap_or(FALLBACK_API_URL)
}

/// Configuration for the request client.
///
/// Use the builder pattern methods to customize the client configuration.
///
/// # Example
///
/// ```
/// use wasatext_client::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::new()
///     .with_base_url("https://chat.example.org/api")
///     .with_timeout(Duration::from_secs(2));
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base address prefixed to relative request paths
    pub(crate) base_url: String,
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
    /// Request timeout
    pub(crate) timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: build_time_api_url().to_string(),
            user_agent: concat!("wasatext-client/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base address of the backend.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the request timeout.
    ///
    /// Defaults to 5 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Configured base address.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Configured timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    pub(crate) fn parsed_base_url(&self) -> ClientResult<Url> {
        Ok(Url::parse(&self.base_url)?)
    }
}

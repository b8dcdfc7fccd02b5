//! Request decoration.
//!
//! Every outgoing request passes through a [`RequestPipeline`] right before
//! transmission. Decorators see the request and a [`SessionContext`] taken
//! for that request alone; they hold no mutable state of their own.

use std::sync::Arc;

use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderName, HeaderValue};
use wasatext_core::SessionContext;

use crate::error::{ClientError, ClientResult};
use crate::http::ApiRequest;

/// A step run on every request before it is sent.
pub trait RequestDecorator: Send + Sync {
    /// Adjust `request` using the session snapshot.
    fn decorate(&self, request: &mut ApiRequest, session: &SessionContext) -> ClientResult<()>;
}

/// Sets `Authorization: Bearer <credential>` when the session has one.
///
/// Any existing `Authorization` value is replaced. Without a credential the
/// request is left untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct BearerAuth;

impl RequestDecorator for BearerAuth {
    fn decorate(&self, request: &mut ApiRequest, session: &SessionContext) -> ClientResult<()> {
        let Some(value) = session.authorization() else {
            return Ok(());
        };
        let mut header = HeaderValue::from_str(&value)
            .map_err(|_| ClientError::InvalidHeader {
                name: "authorization",
            })?;
        header.set_sensitive(true);
        request.headers.insert(AUTHORIZATION, header);
        Ok(())
    }
}

/// Adds a fixed header unless the request already carries one.
#[derive(Debug, Clone)]
pub struct DefaultHeader {
    name: HeaderName,
    value: HeaderValue,
}

impl DefaultHeader {
    /// Create a decorator for `name: value`.
    #[must_use]
    pub const fn new(name: HeaderName, value: HeaderValue) -> Self {
        Self { name, value }
    }

    /// `Accept: application/json, text/plain, */*`
    #[must_use]
    pub fn accept_json() -> Self {
        Self::new(
            ACCEPT,
            HeaderValue::from_static("application/json, text/plain, */*"),
        )
    }
}

impl RequestDecorator for DefaultHeader {
    fn decorate(&self, request: &mut ApiRequest, _session: &SessionContext) -> ClientResult<()> {
        if !request.headers.contains_key(&self.name) {
            request
                .headers
                .insert(self.name.clone(), self.value.clone());
        }
        Ok(())
    }
}

/// Ordered chain of decorators.
#[derive(Clone, Default)]
pub struct RequestPipeline {
    decorators: Vec<Arc<dyn RequestDecorator>>,
}

impl RequestPipeline {
    /// A pipeline with no steps.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// The pipeline every client starts with: bearer credential injection.
    #[must_use]
    pub fn standard() -> Self {
        Self::empty().with(BearerAuth)
    }

    /// Append a step; steps run in insertion order.
    #[must_use]
    pub fn with(mut self, decorator: impl RequestDecorator + 'static) -> Self {
        self.decorators.push(Arc::new(decorator));
        self
    }

    /// Number of steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.decorators.len()
    }

    /// Whether the pipeline has no steps.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.decorators.is_empty()
    }

    /// Run every step on `request`.
    pub fn apply(&self, request: &mut ApiRequest, session: &SessionContext) -> ClientResult<()> {
        for decorator in &self.decorators {
            decorator.decorate(request, session)?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for RequestPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestPipeline")
            .field("steps", &self.decorators.len())
            .finish()
    }
}

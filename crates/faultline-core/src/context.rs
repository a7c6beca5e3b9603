use std::convert::Infallible;

use axum::extract::FromRequestParts;
use http::request::Parts;
use http::{Method, Uri};

/// The slice of an in-flight request needed to report a failure
///
/// Only the method and URI are kept. They feed operator log records and the
/// method-not-allowed message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    /// HTTP method of the request
    pub method: Method,
    /// Request target as received
    pub uri: Uri,
}

impl RequestContext {
    /// Create a context for non-HTTP use (background jobs, tests)
    pub const fn new(method: Method, uri: Uri) -> Self {
        Self { method, uri }
    }

    /// Path and query of the request, without scheme or authority
    #[must_use]
    pub fn request_uri(&self) -> &str {
        self.uri.path_and_query().map_or_else(|| self.uri.path(), |pq| pq.as_str())
    }
}

impl From<&Parts> for RequestContext {
    fn from(parts: &Parts) -> Self {
        Self::new(parts.method.clone(), parts.uri.clone())
    }
}

impl<S> FromRequestParts<S> for RequestContext
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from(&*parts))
    }
}

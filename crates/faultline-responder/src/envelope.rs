use axum::body::Body;
use axum::response::Response;
use http::{HeaderMap, HeaderValue, StatusCode, header};
use serde::Serialize;
use thiserror::Error;

/// Wire shape shared by every error response
#[derive(Serialize)]
struct Envelope<'a, T> {
    error: &'a T,
}

/// Failure to produce an error envelope
#[derive(Debug, Error)]
pub enum EnvelopeError {
    /// The message value could not be serialized to JSON
    #[error("failed to encode error envelope: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Serialize `message` under the `error` key into a complete response
///
/// The body is encoded before any response is assembled, so a failure here
/// leaves nothing written and the caller decides how to terminate the request.
///
/// # Errors
///
/// Returns [`EnvelopeError::Encode`] if `message` cannot be serialized
pub fn write_envelope<T>(status: StatusCode, message: &T, extra_headers: HeaderMap) -> Result<Response, EnvelopeError>
where
    T: Serialize,
{
    let body = serde_json::to_vec(&Envelope { error: message })?;

    let mut response = Response::new(Body::from(body));
    *response.status_mut() = status;

    let headers = response.headers_mut();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.extend(extra_headers);

    Ok(response)
}

use http::{HeaderMap, StatusCode};

use crate::ErrorMessage;

/// Trait for domain errors that can be converted to HTTP error responses
///
/// `Display` is the operator-facing text and may carry internal detail.
/// `client_message` is what ends up in the response envelope, so it must
/// never leak anything the client should not see.
pub trait HttpError: std::error::Error {
    /// HTTP status code for this error
    fn status_code(&self) -> StatusCode;

    /// Message safe to expose to API consumers
    fn client_message(&self) -> ErrorMessage;

    /// Headers that must accompany the response (e.g. auth challenges)
    fn headers(&self) -> HeaderMap {
        HeaderMap::new()
    }
}

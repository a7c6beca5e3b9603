use faultline_core::{ErrorMessage, FieldErrors, HttpError};
use http::{HeaderMap, HeaderValue, Method, StatusCode, header};
use thiserror::Error;

/// Message sent to clients for every server-side failure
pub const SERVER_ERROR_MESSAGE: &str = "The server encountered a problem and cannot process your request";

/// Catalogue of failures the API reports to clients
///
/// `Display` is the operator-facing text. For client-caused failures it is
/// also what the client sees; for [`Failure::ServerError`] it is the
/// underlying cause and never leaves the server.
#[derive(Debug, Error)]
pub enum Failure {
    /// No route or record matches the request
    #[error("the requested resource could not be found")]
    NotFound,

    /// The route exists but not for this method
    #[error("the {method} method is not allowed")]
    MethodNotAllowed { method: Method },

    /// The request could not be parsed
    #[error("{0}")]
    BadRequest(String),

    /// The request parsed but some fields were invalid
    #[error("failed validation on {} field(s)", .0.len())]
    FailedValidation(FieldErrors),

    /// Optimistic concurrency check failed
    #[error("unable to update the record due to an edit conflict")]
    EditConflict,

    /// Client has exceeded their rate limit
    #[error("rate limit exceeded")]
    RateLimitExceeded,

    /// Login with a wrong identifier or password
    #[error("invalid authentication credentials")]
    InvalidCredentials,

    /// Bearer token is malformed, unknown, or expired
    #[error("invalid or missing authentication token")]
    InvalidAuthenticationToken,

    /// Anonymous access to a route that needs a user
    #[error("you must be authenticated to access this request")]
    AuthenticationRequired,

    /// Authenticated user has not activated their account
    #[error("your account must be activated to access this resource")]
    InactiveAccount,

    /// Authenticated user lacks the required permission
    #[error("your user account doesn't have the necessary permission to access this resource")]
    NotPermitted,

    /// Bug or dependency failure inside the server
    #[error("{0:#}")]
    ServerError(#[from] anyhow::Error),
}

impl HttpError for Failure {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::FailedValidation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::EditConflict => StatusCode::CONFLICT,
            Self::RateLimitExceeded => StatusCode::TOO_MANY_REQUESTS,
            Self::InvalidCredentials | Self::InvalidAuthenticationToken | Self::AuthenticationRequired => {
                StatusCode::UNAUTHORIZED
            }
            Self::InactiveAccount | Self::NotPermitted => StatusCode::FORBIDDEN,
            Self::ServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn client_message(&self) -> ErrorMessage {
        match self {
            Self::FailedValidation(errors) => ErrorMessage::Fields(errors.clone()),
            Self::ServerError(_) => ErrorMessage::from(SERVER_ERROR_MESSAGE),
            other => ErrorMessage::Text(other.to_string()),
        }
    }

    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if matches!(self, Self::InvalidAuthenticationToken) {
            headers.insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }
        headers
    }
}

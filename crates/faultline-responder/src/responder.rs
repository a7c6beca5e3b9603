use std::fmt;
use std::sync::Arc;

use axum::response::{IntoResponse, Response};
use faultline_core::{FieldErrors, HttpError, RequestContext};
use http::{HeaderMap, StatusCode};
use serde::Serialize;

use crate::envelope::write_envelope;
use crate::failure::Failure;
use crate::log::{LogRecord, OperatorLog, TracingLog};

/// Turns failures into client responses and operator log records
///
/// Cheap to clone; the only shared state is the operator log.
#[derive(Clone)]
pub struct Responder {
    log: Arc<dyn OperatorLog>,
}

impl Default for Responder {
    fn default() -> Self {
        Self::new(Arc::new(TracingLog))
    }
}

impl fmt::Debug for Responder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Responder").finish_non_exhaustive()
    }
}

impl Responder {
    /// Create a responder writing to the given operator log
    pub fn new(log: Arc<dyn OperatorLog>) -> Self {
        Self { log }
    }

    /// Record `error` against the request in the operator log
    pub fn log_error<E>(&self, ctx: &RequestContext, error: &E)
    where
        E: fmt::Display + ?Sized,
    {
        self.log.record(&LogRecord::new(ctx, error));
    }

    /// Send `message` in an error envelope with the given status
    ///
    /// If the envelope cannot be encoded the encoding failure is logged and
    /// the request is terminated with a bare 500.
    pub fn error_response<M>(&self, ctx: &RequestContext, status: StatusCode, message: &M) -> Response
    where
        M: Serialize,
    {
        self.error_response_with_headers(ctx, status, message, HeaderMap::new())
    }

    /// Like [`Responder::error_response`] with headers added to the response
    ///
    /// The headers are dropped on the bare 500 fallback.
    pub fn error_response_with_headers<M>(
        &self,
        ctx: &RequestContext,
        status: StatusCode,
        message: &M,
        headers: HeaderMap,
    ) -> Response
    where
        M: Serialize,
    {
        match write_envelope(status, message, headers) {
            Ok(response) => response,
            Err(e) => {
                self.log_error(ctx, &e);
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }

    /// Respond to any domain error
    ///
    /// 5xx errors are always logged with their full text before the client
    /// gets the error's client-safe message.
    pub fn respond<E>(&self, ctx: &RequestContext, error: &E) -> Response
    where
        E: HttpError + ?Sized,
    {
        let status = error.status_code();
        if status.is_server_error() {
            self.log_error(ctx, error);
        }

        self.error_response_with_headers(ctx, status, &error.client_message(), error.headers())
    }

    /// 500 with a generic message; the real cause only goes to the log
    pub fn server_error(&self, ctx: &RequestContext, error: impl Into<anyhow::Error>) -> Response {
        self.respond(ctx, &Failure::ServerError(error.into()))
    }

    /// 404
    pub fn not_found(&self, ctx: &RequestContext) -> Response {
        self.respond(ctx, &Failure::NotFound)
    }

    /// 405 naming the rejected method
    pub fn method_not_allowed(&self, ctx: &RequestContext) -> Response {
        let method = ctx.method.clone();
        self.respond(ctx, &Failure::MethodNotAllowed { method })
    }

    /// 400 carrying the parse error's text
    pub fn bad_request(&self, ctx: &RequestContext, error: &dyn fmt::Display) -> Response {
        self.respond(ctx, &Failure::BadRequest(error.to_string()))
    }

    /// 422 with one message per invalid field
    pub fn failed_validation(&self, ctx: &RequestContext, errors: FieldErrors) -> Response {
        self.respond(ctx, &Failure::FailedValidation(errors))
    }

    /// 409
    pub fn edit_conflict(&self, ctx: &RequestContext) -> Response {
        self.respond(ctx, &Failure::EditConflict)
    }

    /// 429
    pub fn rate_limit_exceeded(&self, ctx: &RequestContext) -> Response {
        self.respond(ctx, &Failure::RateLimitExceeded)
    }

    /// 401 for a failed login
    pub fn invalid_credentials(&self, ctx: &RequestContext) -> Response {
        self.respond(ctx, &Failure::InvalidCredentials)
    }

    /// 401 with a `WWW-Authenticate: Bearer` challenge
    pub fn invalid_authentication_token(&self, ctx: &RequestContext) -> Response {
        self.respond(ctx, &Failure::InvalidAuthenticationToken)
    }

    /// 401 for anonymous access to a protected route
    pub fn authentication_required(&self, ctx: &RequestContext) -> Response {
        self.respond(ctx, &Failure::AuthenticationRequired)
    }

    /// 403 for users that have not activated their account
    pub fn inactive_account(&self, ctx: &RequestContext) -> Response {
        self.respond(ctx, &Failure::InactiveAccount)
    }

    /// 403 for users missing a permission
    pub fn not_permitted(&self, ctx: &RequestContext) -> Response {
        self.respond(ctx, &Failure::NotPermitted)
    }
}

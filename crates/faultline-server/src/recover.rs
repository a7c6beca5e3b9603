use std::any::Any;
use std::panic::AssertUnwindSafe;

use axum::Extension;
use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use faultline_core::RequestContext;
use faultline_responder::Responder;
use futures_util::FutureExt;
use thiserror::Error;

/// A handler panicked while serving the request
#[derive(Debug, Error)]
#[error("handler panicked: {0}")]
pub struct HandlerPanic(String);

impl HandlerPanic {
    fn from_payload(payload: &(dyn Any + Send)) -> Self {
        let message = payload
            .downcast_ref::<&str>()
            .map(|s| (*s).to_owned())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "non-string panic payload".to_owned());

        Self(message)
    }
}

/// Turn a panicking handler into a logged 500 instead of a dropped connection
pub async fn recover_middleware(
    Extension(responder): Extension<Responder>,
    ctx: RequestContext,
    request: Request,
    next: Next,
) -> Response {
    match AssertUnwindSafe(next.run(request)).catch_unwind().await {
        Ok(response) => response,
        Err(payload) => responder.server_error(&ctx, HandlerPanic::from_payload(payload.as_ref())),
    }
}

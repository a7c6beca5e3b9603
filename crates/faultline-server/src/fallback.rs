use axum::Extension;
use axum::response::Response;
use faultline_core::RequestContext;
use faultline_responder::Responder;

/// Answer requests that match no route
pub async fn not_found(Extension(responder): Extension<Responder>, ctx: RequestContext) -> Response {
    responder.not_found(&ctx)
}

/// Answer requests whose path matches a route registered for other methods
pub async fn method_not_allowed(Extension(responder): Extension<Responder>, ctx: RequestContext) -> Response {
    responder.method_not_allowed(&ctx)
}
